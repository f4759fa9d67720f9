// Icon resolution
// Maps opaque icon identifiers onto terminal glyphs

use std::collections::HashMap;

const FALLBACK_GLYPH: &str = "•";

const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("house", "⌂"),
    ("house.fill", "⌂"),
    ("safari", "◎"),
    ("magnifyingglass", "⌕"),
    ("chart.bar", "▥"),
    ("bell", "♪"),
    ("person", "☺"),
    ("person.fill", "☻"),
    ("gear", "⚙"),
    ("heart", "♡"),
    ("heart.fill", "♥"),
    ("star", "☆"),
    ("star.fill", "★"),
    ("envelope", "✉"),
    ("plus", "+"),
    ("plus.circle.fill", "⊕"),
    ("xmark", "✕"),
];

/// Glyph lookup for tab and add-button icons
#[derive(Debug, Clone)]
pub struct IconSet {
    glyphs: HashMap<String, String>,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            glyphs: BUILTIN_ICONS
                .iter()
                .map(|(name, glyph)| (name.to_string(), glyph.to_string()))
                .collect(),
        }
    }
}

impl IconSet {
    /// Icon set without any built-in glyphs
    pub fn empty() -> Self {
        Self { glyphs: HashMap::new() }
    }

    /// Add or replace a glyph
    pub fn with_icon(mut self, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(name.into(), glyph.into());
        self
    }

    /// Merge host-supplied glyphs over the current ones
    pub fn extend<I, K, V>(&mut self, icons: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.glyphs
            .extend(icons.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.glyphs.get(name).map(String::as_str)
    }

    /// Resolve an icon, falling back to the first letter of `title`
    pub fn resolve(&self, name: &str, title: &str) -> String {
        if let Some(glyph) = self.get(name) {
            return glyph.to_string();
        }
        title
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| FALLBACK_GLYPH.to_string())
    }
}
