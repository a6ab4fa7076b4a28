//! Browser binding: web-sys implementations of the DOM and storage seams,
//! plus the wasm start hook that wires the controller to `DOMContentLoaded`.
//!
//! Listeners are registered with leaked closures. Nothing here is ever
//! unregistered; the page's own teardown releases them.

use wasm_bindgen::{JsCast, closure::Closure, prelude::wasm_bindgen};
use web_sys::{Document, HtmlInputElement, Storage};

use crate::config::ToggleConfig;
use crate::consts::{CLICK_EVENT, CONFIG_META_NAME, CONTENT_LOADED_EVENT};
use crate::control::{ControlHost, ToggleControl};
use crate::controller::run_page_load;
use crate::error::ThemeError;
use crate::store::PreferenceStore;

// =============================================================================
// DOM
// =============================================================================

/// The page's document as a [`ControlHost`].
pub struct WebDocument(pub Document);

impl ControlHost for WebDocument {
    type Control = WebControl;

    fn find_control(&self, id: &str) -> Option<WebControl> {
        self.0
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(WebControl)
    }
}

/// A checkbox `<input>` element.
#[derive(Clone)]
pub struct WebControl(pub HtmlInputElement);

impl ToggleControl for WebControl {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.0.set_checked(checked);
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) {
        let cb = Closure::wrap(handler);
        if let Err(err) = self
            .0
            .add_event_listener_with_callback(CLICK_EVENT, cb.as_ref().unchecked_ref())
        {
            log::warn!("failed to bind click listener: {err:?}");
            return;
        }
        cb.forget();
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`. Write failures (quota, disabled storage) are ignored.
pub struct LocalStorage(pub Storage);

impl LocalStorage {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or storage access is denied.
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self(storage)),
            _ => Err(ThemeError::StorageUnavailable),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let _ = self.0.set_item(key, value);
    }
}

// =============================================================================
// INSTALL
// =============================================================================

/// Read the JSON config from `<meta name="theme-switcher" content="...">`.
///
/// # Errors
///
/// Returns [`ThemeError::Config`] if the tag exists but its content is not
/// valid config JSON.
pub fn read_config(document: &Document) -> Result<ToggleConfig, ThemeError> {
    let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
    let content = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));
    match content {
        Some(raw) => ToggleConfig::from_json(&raw),
        None => Ok(ToggleConfig::default()),
    }
}

/// Run the page-load step for the current document.
fn on_content_loaded(document: &Document, config: ToggleConfig) {
    match run_page_load(&WebDocument(document.clone()), config, LocalStorage::open) {
        Ok(phase) => log::debug!("theme toggle {phase:?}"),
        Err(err) => log::warn!("theme preference disabled: {err}"),
    }
}

/// Register the page-load step on `DOMContentLoaded`.
///
/// Every dispatch re-runs the step with the same config.
///
/// # Errors
///
/// Returns [`ThemeError::Listener`] if the listener cannot be registered.
pub fn bind_content_loaded(document: &Document, config: ToggleConfig) -> Result<(), ThemeError> {
    let doc_for_cb = document.clone();
    let cb = Closure::wrap(Box::new(move || {
        on_content_loaded(&doc_for_cb, config.clone());
    }) as Box<dyn FnMut()>);
    document
        .add_event_listener_with_callback(CONTENT_LOADED_EVENT, cb.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::Listener(format!("{err:?}")))?;
    cb.forget();
    Ok(())
}

/// Install the controller on the current page.
///
/// Binds to `DOMContentLoaded`. WASM modules usually finish loading after
/// the document has already been parsed, so if the ready state is past
/// `loading` the page-load step runs immediately instead.
///
/// # Errors
///
/// Returns an error if there is no window/document or the load listener
/// cannot be registered.
pub fn install(config: ToggleConfig) -> Result<(), ThemeError> {
    let document = web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)?;

    if document.ready_state() != "loading" {
        on_content_loaded(&document, config);
        return Ok(());
    }
    bind_content_loaded(&document, config)
}

/// Module entry point.
///
/// # Errors
///
/// Propagates environment and config errors to the JS loader.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)?;
    let config = read_config(&document)?;

    if let Some(level) = config.log_level().to_level() {
        let _ = console_log::init_with_level(level);
    }

    install(config)?;
    Ok(())
}
