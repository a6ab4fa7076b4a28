//! DOM seams: the toggle control and the document that owns it.
//!
//! The page owns the element; implementations hold only a handle to it.
//! Listener registration returns nothing and cannot be cancelled, so a
//! bound handler lives until the page is torn down.

/// A checkbox-like toggle element.
pub trait ToggleControl {
    /// Current checked state.
    fn is_checked(&self) -> bool;

    fn set_checked(&self, checked: bool);

    /// Subscribe `handler` to user click/activation events.
    ///
    /// The handler may run any number of times. The event payload is not
    /// passed through.
    fn on_click(&self, handler: Box<dyn FnMut()>);
}

/// Something that can resolve a control by element id.
pub trait ControlHost {
    type Control: ToggleControl + Clone + 'static;

    /// Look up the control with the given id. `None` when absent or not a toggle.
    fn find_control(&self, id: &str) -> Option<Self::Control>;
}
