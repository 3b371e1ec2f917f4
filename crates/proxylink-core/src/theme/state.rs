//! Theme mode transitions.

use super::{Appearance, ThemePrefs, ThemeSchedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    ManualLight,
    ManualDark,
}

impl ThemeMode {
    fn manual(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => ThemeMode::ManualLight,
            Appearance::Dark => ThemeMode::ManualDark,
        }
    }
}

/// Inputs that drive the theme. Each carries the local hour it happened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// Periodic clock check (hourly).
    Tick { hour: u32 },
    /// Plain toggle: flip appearance and leave auto mode.
    Toggle { hour: u32 },
    /// Switch auto mode on or off.
    ToggleAuto { hour: u32 },
}

/// Current mode plus the appearance on screen.
///
/// In manual modes the appearance always matches the mode. In auto mode it
/// is whatever the last tick (or initialisation) computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    appearance: Appearance,
}

impl ThemeState {
    /// Restores the state from persisted flags.
    ///
    /// Nothing saved (or only auto enabled) starts in auto mode at the
    /// appearance for `hour`. A saved appearance with auto enabled keeps that
    /// appearance until the next tick. Otherwise the saved appearance is
    /// pinned, light when none was saved.
    pub fn initial(prefs: &ThemePrefs, hour: u32, schedule: &ThemeSchedule) -> Self {
        match (prefs.theme, prefs.auto_theme) {
            (None, None | Some(true)) => Self::auto(schedule.appearance_at(hour)),
            (Some(saved), Some(true)) => Self::auto(saved),
            (saved, _) => Self::pinned(saved.unwrap_or_default()),
        }
    }

    fn auto(appearance: Appearance) -> Self {
        Self {
            mode: ThemeMode::Auto,
            appearance,
        }
    }

    fn pinned(appearance: Appearance) -> Self {
        Self {
            mode: ThemeMode::manual(appearance),
            appearance,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn is_auto(&self) -> bool {
        self.mode == ThemeMode::Auto
    }

    /// Applies one event and returns the next state.
    pub fn apply(self, event: ThemeEvent, schedule: &ThemeSchedule) -> Self {
        let next = match (self.mode, event) {
            (ThemeMode::Auto, ThemeEvent::Tick { hour }) => Self::auto(schedule.appearance_at(hour)),
            (_, ThemeEvent::Tick { .. }) => self,
            (_, ThemeEvent::Toggle { .. }) => Self::pinned(self.appearance.toggled()),
            (ThemeMode::Auto, ThemeEvent::ToggleAuto { .. }) => Self::pinned(self.appearance),
            (_, ThemeEvent::ToggleAuto { hour }) => Self::auto(schedule.appearance_at(hour)),
        };
        if next != self {
            tracing::debug!("theme {:?} -> {:?} on {:?}", self, next, event);
        }
        next
    }

    /// Flags to persist for this state.
    pub fn to_prefs(&self) -> ThemePrefs {
        ThemePrefs {
            theme: Some(self.appearance),
            auto_theme: Some(self.is_auto()),
        }
    }

    /// Short status line, e.g. `auto: dark` or `manual: light`.
    pub fn indicator_label(&self) -> String {
        let source = if self.is_auto() { "auto" } else { "manual" };
        format!("{}: {}", source, self.appearance.as_str())
    }
}
