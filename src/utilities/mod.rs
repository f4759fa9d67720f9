// Utilities module
// Helper functions and icon resolution

pub mod helpers;
pub mod icons;

pub use helpers::*;
pub use icons::IconSet;
