// GUI Elements module
// The floating tab bar widget and its layout and animation helpers

pub mod animation;
pub mod floating_tab_bar;
pub mod layout;

pub use animation::{blend, Pulse, SelectionTransition};
pub use floating_tab_bar::{FloatingTabBar, FloatingTabBarState};
pub use layout::{compute_layout, required_height, ButtonLayout, CellMetrics, HitTarget, TabBarLayout, TabBounds};
