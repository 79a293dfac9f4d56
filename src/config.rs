//! Console configuration parsed from environment variables.

use crate::utils::render_board::GlyphStyle;

pub const DEFAULT_LOG_FILTER: &str = "chess_arbiter=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Glyph set used when drawing the board (`CHESS_ARBITER_GLYPHS`).
    pub glyph_style: GlyphStyle,
    /// Log filter used when `RUST_LOG` is not set (`CHESS_ARBITER_LOG`).
    pub log_filter: String,
    /// Optional placement to start from instead of the standard setup
    /// (`CHESS_ARBITER_START`).
    pub start_placement: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            glyph_style: lookup("CHESS_ARBITER_GLYPHS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.glyph_style),
            log_filter: lookup("CHESS_ARBITER_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            start_placement: lookup("CHESS_ARBITER_START").filter(|v| !v.trim().is_empty()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            glyph_style: GlyphStyle::Letters,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            start_placement: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.glyph_style, GlyphStyle::Letters);
        assert_eq!(config.log_filter, "chess_arbiter=warn");
        assert_eq!(config.start_placement, None);
    }

    #[test]
    fn lookup_overrides_and_fallbacks() {
        let config = AppConfig::from_lookup(|key| match key {
            "CHESS_ARBITER_GLYPHS" => Some("unicode".to_string()),
            "CHESS_ARBITER_LOG" => Some("chess_arbiter=debug".to_string()),
            "CHESS_ARBITER_START" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.glyph_style, GlyphStyle::Unicode);
        assert_eq!(config.log_filter, "chess_arbiter=debug");
        assert_eq!(config.start_placement, None);

        let config = AppConfig::from_lookup(|key| {
            (key == "CHESS_ARBITER_GLYPHS").then(|| "sparkles".to_string())
        });
        assert_eq!(config.glyph_style, GlyphStyle::Letters);
    }
}
