//! Color-name to swatch lookup for the color picker.

use std::collections::HashMap;

use ratatui::style::Color;

use crate::config::UiConfig;

/// Parse `#rrggbb`.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[derive(Debug, Clone)]
pub struct Swatches {
    colors: HashMap<String, Color>,
    fallback: Color,
}

impl Swatches {
    /// Entries that fail to parse fall back to the default swatch.
    pub fn from_config(config: &UiConfig) -> Self {
        let colors = config
            .swatches
            .iter()
            .filter_map(|(name, hex)| parse_hex(hex).map(|color| (name.clone(), color)))
            .collect();
        let fallback = parse_hex(&config.fallback_swatch).unwrap_or(Color::Rgb(0x80, 0x80, 0x80));
        Self { colors, fallback }
    }

    pub fn color_for(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or(self.fallback)
    }
}

impl Default for Swatches {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}
