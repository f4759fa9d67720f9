// Core module
// Data model, layout partitioning, and selection state for the tab bar

pub mod configuration;
pub mod error;
pub mod partition;
pub mod selection;
pub mod tab_item;

pub use configuration::{Animation, AnimationCurve, TabBarConfiguration, DEFAULT_ANIMATION_DURATION};
pub use error::TabBarError;
pub use partition::{partition, Partition, PlacedTab};
pub use selection::{Constant, OnChange, SelectionBinding, TabSelectionModel};
pub use tab_item::TabDescriptor;
