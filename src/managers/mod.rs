// Managers module
// Provides the OOP-style tab bar manager and its YAML configuration

pub mod tab_bar;

pub use tab_bar::{
    convert_tab_bar_config, load_tab_bar_config, parse_tab_bar_config, AnimationConfigYaml,
    FloatingTabBarManager, TabBarConfigYaml,
};
