//! Application-level configuration constants.

// Form header
pub const APP_TITLE: &str = "Trecho Pace Calculator";
pub const APP_SUBTITLE: &str = "Calculate your running pace";

// Input field attributes
pub const DISTANCE_MIN: &str = "0";
pub const DISTANCE_STEP: &str = "0.01";
pub const DISTANCE_PLACEHOLDER: &str = "Enter distance";
pub const TIME_PLACEHOLDER: &str = "e.g., 01:30:00";

// Result display
pub const PACE_CAPTION: &str = "Your Pace";
