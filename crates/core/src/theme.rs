//! Light/dark theme preference
//!
//! Resolution order at startup: stored choice, then the system
//! `prefers-color-scheme: light` signal, then dark. Every applied theme goes
//! through [`ThemeState::set_theme`] and is written to storage, including
//! one taken from the system, so once anything is stored later system
//! changes are ignored.

use std::fmt;

use crate::storage::KeyValueStore;

/// Storage key used by the site
pub const DEFAULT_STORAGE_KEY: &str = "neoLuxTheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn from_system(prefers_light: bool) -> Self {
        if prefers_light {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applied theme plus the store that remembers explicit choices
pub struct ThemeState<S: KeyValueStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeState<S> {
    /// Resolve the initial theme. A light system preference is applied
    /// through `set_theme` and therefore persisted; the dark default is not.
    pub fn init(store: S, key: &str, prefers_light: bool) -> Self {
        let raw = store.get(key).filter(|v| !v.is_empty());
        let mut state = Self {
            store,
            key: key.to_string(),
            current: Theme::Dark,
        };

        match raw {
            // any other non-empty value renders dark but stays stored
            Some(raw) => {
                state.current = Theme::parse(&raw).unwrap_or_else(|| {
                    log::warn!("Unknown stored theme {raw:?}, rendering dark");
                    Theme::Dark
                });
            }
            None if prefers_light => state.set_theme(Theme::Light),
            None => {}
        }
        state
    }

    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Theme stored under the key, if it is a known value
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(&self.key).as_deref().and_then(Theme::parse)
    }

    /// Whether any non-empty value is stored under the key
    pub fn has_stored(&self) -> bool {
        self.store.get(&self.key).is_some_and(|v| !v.is_empty())
    }

    /// Apply and persist a theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(&self.key, theme.as_str());
    }

    /// Flip the theme (toggle button)
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next);
        next
    }

    /// System preference changed; returns the new theme if it was applied.
    /// An applied value is persisted like any other.
    pub fn system_changed(&mut self, prefers_light: bool) -> Option<Theme> {
        if self.has_stored() {
            return None;
        }
        let theme = Theme::from_system(prefers_light);
        self.set_theme(theme);
        Some(theme)
    }

    /// Toggle controls are "pressed" while the light theme is applied
    pub fn is_pressed(&self) -> bool {
        self.current == Theme::Light
    }

    /// `aria-pressed` attribute value
    pub fn pressed_value(&self) -> &'static str {
        if self.is_pressed() {
            "true"
        } else {
            "false"
        }
    }
}
