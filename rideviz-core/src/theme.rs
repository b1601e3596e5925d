//! Tri-state theme preference and the light/dark resolution rule.
//!
//! The UI crate persists the preference under two localStorage keys and
//! applies the resolved value as a `data-theme` attribute; this module owns
//! the encoding and the resolution logic so both stay testable natively.

/// localStorage key holding the user's tri-state choice.
pub const THEME_KEY: &str = "theme";

/// localStorage key holding the last observed OS dark-scheme flag,
/// string-encoded as "true"/"false".
pub const SYSTEM_DARK_KEY: &str = "isSystemDark";

/// The user's persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Decode a persisted value; anything unrecognized (including a missing
    /// key) falls back to `System`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => Theme::System,
        }
    }
}

/// The effective theme after applying the resolution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

/// Effective theme is dark iff the user chose dark, or chose system while the
/// OS reports a dark scheme. An explicit light/dark choice overrides the OS.
pub fn resolve(theme: Theme, system_dark: bool) -> ResolvedTheme {
    if theme == Theme::Dark || (theme == Theme::System && system_dark) {
        ResolvedTheme::Dark
    } else {
        ResolvedTheme::Light
    }
}

/// String-encode the OS dark flag for storage.
pub fn encode_system_dark(system_dark: bool) -> &'static str {
    if system_dark {
        "true"
    } else {
        "false"
    }
}

/// Decode the stored OS dark flag; missing or unrecognized values read as
/// `false` (corrected from the live media query right after rehydration).
pub fn parse_system_dark(value: Option<&str>) -> bool {
    matches!(value, Some("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_rule() {
        assert_eq!(resolve(Theme::Dark, false), ResolvedTheme::Dark);
        assert_eq!(resolve(Theme::Dark, true), ResolvedTheme::Dark);
        assert_eq!(resolve(Theme::System, true), ResolvedTheme::Dark);
        assert_eq!(resolve(Theme::System, false), ResolvedTheme::Light);
        assert_eq!(resolve(Theme::Light, false), ResolvedTheme::Light);
    }

    #[test]
    fn test_explicit_choice_overrides_system() {
        assert_eq!(resolve(Theme::Light, true), ResolvedTheme::Light);
    }

    #[test]
    fn test_theme_storage_roundtrip() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::parse(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn test_unrecognized_theme_defaults_to_system() {
        assert_eq!(Theme::parse(None), Theme::System);
        assert_eq!(Theme::parse(Some("solarized")), Theme::System);
        assert_eq!(Theme::parse(Some("")), Theme::System);
    }

    #[test]
    fn test_system_dark_encoding() {
        assert_eq!(encode_system_dark(true), "true");
        assert_eq!(encode_system_dark(false), "false");
        assert!(parse_system_dark(Some("true")));
        assert!(!parse_system_dark(Some("false")));
        assert!(!parse_system_dark(None));
        assert!(!parse_system_dark(Some("TRUE")));
    }
}
