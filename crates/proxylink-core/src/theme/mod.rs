//! Light/dark theme selection.
//!
//! Three modes: `Auto` follows the clock (dark from 20:00 until 06:00 by
//! default), the two manual modes pin an appearance. The state persists as
//! two flags, the last applied appearance and whether auto mode is on.

mod persist;
mod state;

use serde::{Deserialize, Serialize};

pub use persist::ThemePrefs;
pub use state::{ThemeEvent, ThemeMode, ThemeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// Hours (0-23, local time) at which auto mode switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSchedule {
    pub dark_from_hour: u32,
    pub light_from_hour: u32,
}

impl Default for ThemeSchedule {
    fn default() -> Self {
        Self {
            dark_from_hour: 20,
            light_from_hour: 6,
        }
    }
}

impl ThemeSchedule {
    /// True when `hour` falls in the dark window.
    ///
    /// The window wraps midnight when `dark_from_hour > light_from_hour`
    /// (the usual evening-to-morning case).
    pub fn is_night(&self, hour: u32) -> bool {
        if self.dark_from_hour > self.light_from_hour {
            hour >= self.dark_from_hour || hour < self.light_from_hour
        } else {
            hour >= self.dark_from_hour && hour < self.light_from_hour
        }
    }

    pub fn appearance_at(&self, hour: u32) -> Appearance {
        if self.is_night(hour) {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }
}
