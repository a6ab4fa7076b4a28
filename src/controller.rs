//! Theme toggle controller.
//!
//! DESIGN
//! ======
//! Storage and the control are synchronized at exactly two points: on
//! initialization (store → control) and on each user click (control → store).
//! Initialization only ever forces the control *on*; any stored value other
//! than `"true"` leaves the markup default in place.
//!
//! The control handle is captured by the click closure rather than kept in
//! wider-scoped mutable state, so the controller itself holds nothing but its
//! config, the store, and the phase.

use std::rc::Rc;

use crate::config::ToggleConfig;
use crate::control::{ControlHost, ToggleControl};
use crate::error::ThemeError;
use crate::preference::{Preference, encode_checked};
use crate::store::PreferenceStore;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Lifecycle phase of a controller within one page instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Page-load handler has not run yet.
    #[default]
    Uninitialized,
    /// Control found, preference applied, click handler attached.
    Bound,
    /// Control absent at load. Terminal; nothing happens until the next page load.
    Detached,
}

pub struct ThemeToggle<S> {
    config: ToggleConfig,
    store: Rc<S>,
    phase: Phase,
}

impl<S: PreferenceStore + 'static> ThemeToggle<S> {
    #[must_use]
    pub fn new(config: ToggleConfig, store: Rc<S>) -> Self {
        Self { config, store, phase: Phase::Uninitialized }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Run the page-load step against `host`.
    ///
    /// Looks up the control; if it is missing, does nothing at all (no storage
    /// access, no listener) and moves to [`Phase::Detached`]. Otherwise checks
    /// the control when the stored preference is exactly `"true"` and binds the
    /// click handler that writes the checked state back.
    ///
    /// Running it again on a bound controller re-reads storage and re-applies
    /// the same rule. Each such run binds its own handler; every handler writes
    /// the same value, so repeated binding does not change what gets stored.
    /// A detached controller stays detached.
    pub fn initialize<H: ControlHost>(&mut self, host: &H) -> Phase {
        if self.phase == Phase::Detached {
            return self.phase;
        }

        let Some(control) = host.find_control(&self.config.element_id) else {
            log::debug!("theme control #{} not found", self.config.element_id);
            if self.phase == Phase::Uninitialized {
                self.phase = Phase::Detached;
            }
            return self.phase;
        };

        let stored = self.store.get_item(&self.config.storage_key);
        if Preference::from_stored(stored.as_deref()).is_enabled() {
            control.set_checked(true);
        }

        control.on_click(click_handler(
            control.clone(),
            Rc::clone(&self.store),
            self.config.storage_key.clone(),
        ));

        log::debug!("theme control bound, checked={}", control.is_checked());
        self.phase = Phase::Bound;
        self.phase
    }
}

/// Run one page load with a fresh controller.
///
/// The control is looked up before storage is opened, so a page without the
/// control never touches storage and never sees an `open_store` error.
///
/// # Errors
///
/// Returns the `open_store` error when the control exists but storage cannot
/// be opened.
pub fn run_page_load<H, S, F>(host: &H, config: ToggleConfig, open_store: F) -> Result<Phase, ThemeError>
where
    H: ControlHost,
    S: PreferenceStore + 'static,
    F: FnOnce() -> Result<S, ThemeError>,
{
    if host.find_control(&config.element_id).is_none() {
        log::debug!("theme control #{} not found", config.element_id);
        return Ok(Phase::Detached);
    }
    let mut toggle = ThemeToggle::new(config, Rc::new(open_store()?));
    Ok(toggle.initialize(host))
}

/// Handler that persists the control's checked state under `key`.
fn click_handler<C, S>(control: C, store: Rc<S>, key: String) -> Box<dyn FnMut()>
where
    C: ToggleControl + 'static,
    S: PreferenceStore + 'static,
{
    Box::new(move || {
        store.set_item(&key, encode_checked(control.is_checked()));
    })
}
