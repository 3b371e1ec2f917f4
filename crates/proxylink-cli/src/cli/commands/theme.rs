//! `proxylink theme [status|toggle|auto]` – persisted light/dark state.

use anyhow::Result;
use chrono::Timelike;
use proxylink_core::config::LinkConfig;
use proxylink_core::theme::{ThemeEvent, ThemePrefs, ThemeState};

use crate::cli::ThemeAction;

pub fn run_theme(cfg: &LinkConfig, action: ThemeAction, hour: Option<u32>) -> Result<()> {
    let hour = hour.unwrap_or_else(|| chrono::Local::now().hour());
    let schedule = cfg.theme_schedule();
    let path = ThemePrefs::default_path()?;

    let prefs = ThemePrefs::load_from_path(&path)?;
    let state = ThemeState::initial(&prefs, hour, &schedule);

    let event = match action {
        ThemeAction::Status => ThemeEvent::Tick { hour },
        ThemeAction::Toggle => ThemeEvent::Toggle { hour },
        ThemeAction::Auto => ThemeEvent::ToggleAuto { hour },
    };
    let state = state.apply(event, &schedule);

    let next = state.to_prefs();
    if next != prefs {
        next.save_to_path(&path)?;
    }

    println!("{}", state.indicator_label());
    Ok(())
}
