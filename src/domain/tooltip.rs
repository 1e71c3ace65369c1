// Tooltip content selection for chart hover
use serde::Serialize;

/// Wire key of the series a hovered point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesKey {
    #[serde(rename = "kits")]
    Kits,
    #[serde(rename = "err")]
    Errors,
}

/// The chart point currently hovered or focused, if any.
#[derive(Debug, Clone)]
pub struct ActivePoint {
    pub series: SeriesKey,
    pub label: String,
    pub value: u32,
}

impl ActivePoint {
    pub fn new(series: SeriesKey, label: &str, value: u32) -> Self {
        Self {
            series,
            label: label.to_string(),
            value,
        }
    }
}

/// Rendered tooltip wording for an active chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipContent {
    pub axis_label: &'static str,
    pub axis_value: String,
    pub value_label: &'static str,
    pub value: u32,
}

impl TooltipContent {
    /// Both charts share this wording rule: a point on the throughput series
    /// is labeled "Time"/"Kits Picked", any other series "Day"/"Errors
    /// Detected". No active point renders nothing.
    pub fn for_point(active: Option<&ActivePoint>) -> Option<TooltipContent> {
        let point = active?;
        let is_throughput = point.series == SeriesKey::Kits;
        Some(TooltipContent {
            axis_label: if is_throughput { "Time" } else { "Day" },
            axis_value: point.label.clone(),
            value_label: if is_throughput {
                "Kits Picked"
            } else {
                "Errors Detected"
            },
            value: point.value,
        })
    }

    /// The two display lines, e.g. "Time: 12" and "Kits Picked: 70".
    pub fn lines(&self) -> [String; 2] {
        [
            format!("{}: {}", self.axis_label, self.axis_value),
            format!("{}: {}", self.value_label, self.value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_point_uses_time_and_kits_wording() {
        let active = ActivePoint::new(SeriesKey::Kits, "12", 70);
        let tooltip = TooltipContent::for_point(Some(&active)).unwrap();

        assert_eq!(tooltip.axis_label, "Time");
        assert_eq!(tooltip.value_label, "Kits Picked");
        assert_eq!(tooltip.lines(), ["Time: 12", "Kits Picked: 70"]);
    }

    #[test]
    fn test_error_point_uses_day_and_errors_wording() {
        let active = ActivePoint::new(SeriesKey::Errors, "D1", 5);
        let tooltip = TooltipContent::for_point(Some(&active)).unwrap();

        assert_eq!(tooltip.axis_label, "Day");
        assert_eq!(tooltip.value_label, "Errors Detected");
        assert_eq!(tooltip.lines(), ["Day: D1", "Errors Detected: 5"]);
    }

    #[test]
    fn test_no_active_point_renders_nothing() {
        assert_eq!(TooltipContent::for_point(None), None);
    }
}
