//! User-intent event types.
//!
//! Every UI-originated action reaches the controller as one of these
//! variants; the controller is thereby decoupled from any widget toolkit.

/// Discrete user intents handled by the factor browser.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    /// Step the visible window back one page.
    Prev,

    /// Step the visible window forward one page.
    Next,

    /// Jump the visible window to start at the given factor number.
    GoTo(i64),

    /// Reconcile the current page's checkboxes with the selection.
    ///
    /// One flag per visible slot, in slot order: `true` keeps the factor
    /// shown in that slot, `false` drops it. Flags for slots past the end
    /// of the factor list are ignored.
    ApplyPage(Vec<bool>),

    /// Merge a selection script (e.g. `"1,2,3,5:7"`) into the selection.
    RunScript(String),

    /// Deselect every factor.
    Clear,
}
