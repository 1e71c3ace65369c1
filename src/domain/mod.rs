// Domain layer - Dashboard view model types
pub mod animation;
pub mod dashboard;
pub mod operations;
pub mod tooltip;
