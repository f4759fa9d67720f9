// Tab Bar Errors
// Error taxonomy shared by the selection model, configuration, and loaders

/// Errors produced by the floating tab bar
#[derive(thiserror::Error, Debug)]
pub enum TabBarError {
    /// A selection index outside the tab list
    #[error("tab index {index} is out of range for {len} tab(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A dimension that is negative, NaN, or infinite
    #[error("invalid value {value} for '{field}': dimensions must be finite and non-negative")]
    InvalidDimension { field: &'static str, value: f32 },

    /// A color token that could not be resolved
    #[error("invalid color '{value}' for '{field}'")]
    InvalidColor { field: &'static str, value: String },

    /// An animation curve name that is not recognised
    #[error("unknown animation curve '{0}'")]
    UnknownCurve(String),

    #[error("failed to parse tab bar configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read tab bar configuration: {0}")]
    Io(#[from] std::io::Error),
}
