// Configuration loading module

use anyhow::Context;
use floating_tab_bar::{TabBarConfigYaml, TabDescriptor};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub pages: Vec<PageConfigYaml>,
    pub tab_bar: TabBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
    #[serde(default)]
    pub modal_text: Option<String>,
}

/// Body text for the page behind a tab (matched by position)
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfigYaml {
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig {
                title: "Floating Tab Bar".to_string(),
                subtitle: "Example Implementation".to_string(),
                status_bar: StatusBarConfigYaml {
                    default_text: "←/→ switch tabs · click a tab · + add · q quit".to_string(),
                    modal_text: Some("Esc close".to_string()),
                },
            },
            pages: Vec::new(),
            tab_bar: TabBarConfigYaml {
                tabs: vec![
                    TabDescriptor::new("house.fill", "Home"),
                    TabDescriptor::new("safari", "Explore").with_notification(true),
                    TabDescriptor::new("chart.bar", "Activity"),
                    TabDescriptor::new("person", "Profile"),
                ],
                ..TabBarConfigYaml::default()
            },
        }
    }
}

pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: AppConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
