// Configuration validation module

use crate::config::{load_config, AppConfig};
use floating_tab_bar::{FloatingTabBarManager, TabBarConfigYaml, TabBarConfiguration};
use std::path::PathBuf;
use tracing::{info, warn};

/// Load the configuration and build the tab bar, recovering from bad input
///
/// A missing or unparsable file falls back to the built-in configuration.
/// Invalid tab bar appearance settings fall back to the defaults while
/// keeping the configured tabs.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> (AppConfig, FloatingTabBarManager) {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {:#}", e);
            warn!("Using default configuration");
            AppConfig::default()
        }
    };

    let tab_bar = match FloatingTabBarManager::create(&config.tab_bar) {
        Ok(tab_bar) => tab_bar,
        Err(e) => {
            warn!("Invalid tab bar configuration: {}", e);
            let fallback = TabBarConfigYaml {
                tabs: config.tab_bar.tabs.clone(),
                icons: config.tab_bar.icons.clone(),
                ..TabBarConfigYaml::default()
            };
            FloatingTabBarManager::create(&fallback).unwrap_or_else(|_| {
                FloatingTabBarManager::new(config.tab_bar.tabs.clone(), TabBarConfiguration::default())
            })
        }
    };

    info!(tabs = tab_bar.tabs().len(), "configuration loaded");
    (config, tab_bar)
}
