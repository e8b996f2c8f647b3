//! Theme preference and effective theme resolution.
//!
//! # Design
//! - The stored preference (auto/light/dark) and the OS color-scheme signal are
//!   kept separately; the effective theme is always derived, never stored.
//! - Persistence goes through [`PreferenceStore`] so the controller runs without a browser.

/// LocalStorage key for the stored preference.
pub const THEME_KEY: &str = "preferred-theme";

/// Light or dark theme actually applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used for the `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Theme preference chosen by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Follow the OS color scheme.
    #[default]
    Auto,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemePreference {
    /// All options in menu order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Auto, Self::Light, Self::Dark]
    }

    /// Stored string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Parse a stored value; anything unrecognised means [`ThemePreference::Auto`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().trim_matches('"') {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Auto,
        }
    }

    /// Resolve against the OS signal.
    #[must_use]
    pub const fn resolve(self, prefers_dark: bool) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
            Self::Auto => {
                if prefers_dark {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                }
            }
        }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    /// Read a raw stored value.
    fn read(&self, key: &str) -> Option<String>;
    /// Persist a raw value.
    fn write(&self, key: &str, value: &str);
}

/// Theme slice of the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    /// Stored preference.
    pub preference: ThemePreference,
    /// Latest OS `prefers-color-scheme: dark` signal.
    pub prefers_dark: bool,
    /// Whether the preference menu is open.
    pub menu_open: bool,
}

impl ThemeState {
    /// Restore the stored preference (default auto).
    #[must_use]
    pub fn load(store: &impl PreferenceStore, prefers_dark: bool) -> Self {
        let preference = store
            .read(THEME_KEY)
            .map_or(ThemePreference::Auto, |raw| ThemePreference::parse(&raw));
        Self {
            preference,
            prefers_dark,
            menu_open: false,
        }
    }

    /// Theme to apply right now.
    #[must_use]
    pub const fn effective(&self) -> ThemeMode {
        self.preference.resolve(self.prefers_dark)
    }

    /// Label shown on the menu trigger.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Theme: {}", self.preference.label())
    }

    /// Persist and apply a new preference; closes the menu.
    pub fn select(&mut self, store: &impl PreferenceStore, preference: ThemePreference) {
        store.write(THEME_KEY, preference.as_str());
        self.preference = preference;
        self.menu_open = false;
    }

    /// Record an OS color-scheme change. Only visible while the preference is auto.
    pub const fn os_changed(&mut self, prefers_dark: bool) {
        self.prefers_dark = prefers_dark;
    }

    /// Open or close the preference menu.
    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the preference menu.
    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MemoryPreferences;

    #[test]
    fn missing_preference_follows_os() {
        let store = MemoryPreferences::default();
        assert_eq!(ThemeState::load(&store, true).effective(), ThemeMode::Dark);
        assert_eq!(ThemeState::load(&store, false).effective(), ThemeMode::Light);
        assert_eq!(ThemeState::load(&store, false).label(), "Theme: Auto");
    }

    #[test]
    fn stored_dark_ignores_os() {
        let store = MemoryPreferences::with(THEME_KEY, "dark");
        let mut state = ThemeState::load(&store, false);
        assert_eq!(state.effective(), ThemeMode::Dark);
        state.os_changed(true);
        state.os_changed(false);
        assert_eq!(state.effective(), ThemeMode::Dark);
    }

    #[test]
    fn auto_tracks_os_changes_live() {
        let store = MemoryPreferences::default();
        let mut state = ThemeState::load(&store, false);
        state.os_changed(true);
        assert_eq!(state.effective(), ThemeMode::Dark);
        state.os_changed(false);
        assert_eq!(state.effective(), ThemeMode::Light);
    }

    #[test]
    fn select_persists_and_closes_menu() {
        let store = MemoryPreferences::default();
        let mut state = ThemeState::load(&store, true);
        state.toggle_menu();
        assert!(state.menu_open);
        state.select(&store, ThemePreference::Light);
        assert!(!state.menu_open);
        assert_eq!(state.effective(), ThemeMode::Light);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));

        state.select(&store, ThemePreference::Auto);
        assert_eq!(state.effective(), ThemeMode::Dark);
        assert_eq!(ThemeState::load(&store, false).preference, ThemePreference::Auto);
    }

    #[test]
    fn parse_tolerates_quoted_and_unknown_values() {
        assert_eq!(ThemePreference::parse("\"dark\""), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse("sepia"), ThemePreference::Auto);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
