//! Theme preference use-case service.
//!
//! # Responsibility
//! - Resolve the active theme at startup.
//! - Persist explicit choices and toggles.
//!
//! # Invariants
//! - An unset or unreadable stored value resolves to the caller's fallback
//!   (the system color-scheme preference) and is never an error.

use crate::model::theme::Theme;
use crate::repo::message_repo::RepoResult;
use crate::repo::preference_repo::{PreferenceRepository, THEME_KEY};
use log::{info, warn};

/// Theme service facade over preference storage.
pub struct ThemeService<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> ThemeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the stored theme, or `fallback` when none is usable.
    pub fn current(&self, fallback: Theme) -> RepoResult<Theme> {
        let Some(stored) = self.repo.get_preference(THEME_KEY)? else {
            return Ok(fallback);
        };

        match stored.parse::<Theme>() {
            Ok(theme) => Ok(theme),
            Err(err) => {
                warn!(
                    "event=theme_load module=service status=fallback fallback={} error={}",
                    fallback, err
                );
                Ok(fallback)
            }
        }
    }

    /// Persists an explicit theme choice.
    pub fn set(&self, theme: Theme) -> RepoResult<Theme> {
        self.repo.set_preference(THEME_KEY, theme.as_str())?;
        info!("event=theme_set module=service status=ok theme={theme}");
        Ok(theme)
    }

    /// Flips the active theme and persists the result.
    pub fn toggle(&self, fallback: Theme) -> RepoResult<Theme> {
        let next = self.current(fallback)?.toggled();
        self.set(next)
    }
}
