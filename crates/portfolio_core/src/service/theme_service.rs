//! Light/dark theme preference.
//!
//! # Invariants
//! - The mode is always exactly `light` or `dark`.
//! - A stored value other than `light`/`dark` is coerced to `light` on load
//!   and the coerced value is written back.
//! - `toggle` only flips the in-memory mode after the new value persisted.

use crate::repo::preference_repo::{PreferenceRepository, PreferenceResult};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage key of the color scheme preference.
pub const THEME_PREFERENCE_KEY: &str = "color-scheme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Exact parse; anything but `light`/`dark` is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme state bound to a preference repository.
pub struct ThemeService<P: PreferenceRepository> {
    repo: P,
    mode: ThemeMode,
}

impl<P: PreferenceRepository> ThemeService<P> {
    /// Resolves the initial mode from storage.
    pub fn load(mut repo: P) -> PreferenceResult<Self> {
        let stored = repo.get_preference(THEME_PREFERENCE_KEY)?;
        let mode = match stored.as_deref() {
            None => ThemeMode::default(),
            Some(value) => match ThemeMode::parse(value) {
                Some(mode) => mode,
                None => {
                    warn!(
                        "event=theme_load module=theme status=coerced stored_len={} mode=light",
                        value.len()
                    );
                    repo.set_preference(THEME_PREFERENCE_KEY, ThemeMode::Light.as_str())?;
                    ThemeMode::Light
                }
            },
        };

        info!("event=theme_load module=theme status=ok mode={mode}");
        Ok(Self { repo, mode })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Flips light ↔ dark, persists, and returns the new mode.
    pub fn toggle(&mut self) -> PreferenceResult<ThemeMode> {
        self.set_mode(self.mode.toggled())
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> PreferenceResult<ThemeMode> {
        self.repo
            .set_preference(THEME_PREFERENCE_KEY, mode.as_str())?;
        self.mode = mode;
        info!("event=theme_set module=theme status=ok mode={mode}");
        Ok(mode)
    }

    pub fn repository(&self) -> &P {
        &self.repo
    }
}
