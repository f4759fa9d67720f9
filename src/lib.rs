// Floating Tab Bar Library
// A floating, rounded bottom tab bar with an optional centered add button

// Core data model - tabs, configuration, partitioning, selection
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrapper and YAML configuration
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
pub use self::core::*;
pub use elements::*;
pub use managers::*;
pub use utilities::*;
