// Entrance and fill animation parameters for dashboard elements
use serde::Serialize;

/// Vertical slide distance for the fade/slide entrance.
pub const ENTRANCE_Y_OFFSET: f64 = 12.0;

/// Per-index delay increment for staggered tile entrances, in seconds.
pub const STAGGER_STEP_S: f64 = 0.08;

/// Duration of the one-shot performance bar fill, in seconds.
pub const BAR_FILL_DURATION_S: f64 = 0.8;

/// One-shot fade/slide played when an element first appears.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntranceAnimation {
    pub from_opacity: f64,
    pub to_opacity: f64,
    pub from_y_offset: f64,
    pub to_y_offset: f64,
    #[serde(rename = "delay")]
    pub delay_s: f64,
}

impl EntranceAnimation {
    /// Entrance with its start offset by a fixed increment per element index,
    /// producing the cascading appearance of the KPI tile row.
    pub fn staggered(index: usize) -> Self {
        Self {
            from_opacity: 0.0,
            to_opacity: 1.0,
            from_y_offset: ENTRANCE_Y_OFFSET,
            to_y_offset: 0.0,
            delay_s: index as f64 * STAGGER_STEP_S,
        }
    }

    /// Entrance with no delay, used for the chart and operator panels.
    pub fn immediate() -> Self {
        Self::staggered(0)
    }
}

/// One-shot width animation for an operator performance bar: the fill grows
/// from empty to the operator's score percentage on first display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillAnimation {
    pub from_pct: f64,
    pub to_pct: f64,
    #[serde(rename = "duration")]
    pub duration_s: f64,
}

impl FillAnimation {
    pub fn to_score(score: u8) -> Self {
        Self {
            from_pct: 0.0,
            to_pct: f64::from(score),
            duration_s: BAR_FILL_DURATION_S,
        }
    }
}
