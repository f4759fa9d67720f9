// Tab Descriptor
// A single tab shown in the floating tab bar

use serde::Deserialize;

/// Represents a single tab item in the floating tab bar
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabDescriptor {
    /// Opaque icon identifier (resolved by an `IconSet`)
    pub icon: String,
    pub title: String,
    /// Show the notification dot next to the icon
    #[serde(default, rename = "notification")]
    pub has_notification: bool,
}

impl TabDescriptor {
    pub fn new(icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            has_notification: false,
        }
    }

    pub fn with_notification(mut self, has_notification: bool) -> Self {
        self.has_notification = has_notification;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_descriptor_initialization() {
        let tab = TabDescriptor::new("house.fill", "Home").with_notification(true);

        assert_eq!(tab.icon, "house.fill");
        assert_eq!(tab.title, "Home");
        assert!(tab.has_notification);
    }

    #[test]
    fn test_notification_defaults_to_false() {
        let tab = TabDescriptor::new("person", "Profile");
        assert!(!tab.has_notification);

        let yaml = "icon: safari\ntitle: Explore\n";
        let parsed: TabDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, TabDescriptor::new("safari", "Explore"));
    }

    #[test]
    fn test_notification_from_yaml() {
        let yaml = "icon: safari\ntitle: Explore\nnotification: true\n";
        let parsed: TabDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert!(parsed.has_notification);
    }
}
