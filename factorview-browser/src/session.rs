//! Session terminal outcomes: commit or cancel.
//!
//! A browsing session ends in exactly one of two externally observable
//! ways: accepted with a sorted list of kept factor indices, or cancelled
//! with no selection at all. An accepted but empty selection also reports
//! no selection.

use log::debug;

use factorview_core::{Factorization, Result};

use crate::controller::{BrowserConfig, FactorBrowser};
use crate::event::BrowserEvent;

/// A session-level event: browsing intent or a terminal decision.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A browsing intent forwarded to the controller.
    Browse(BrowserEvent),
    /// Commit the current selection and end the session.
    Accept,
    /// Discard the selection and end the session.
    Cancel,
}

impl<F: Factorization> FactorBrowser<F> {
    /// Consumes the browser, committing its selection.
    ///
    /// Returns the kept indices in ascending order, or `None` when nothing
    /// was selected. Committed selections are always in range, so the
    /// conversion to `usize` is total.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn finish(self) -> Option<Vec<usize>> {
        if self.selection().is_empty() {
            return None;
        }
        Some(self.selection().iter().map(|i| i as usize).collect())
    }
}

/// Drives a scripted event sequence to its terminal outcome.
///
/// Construction, browsing, and the accept/cancel decision in one call:
/// returns the sorted selection on [`SessionEvent::Accept`], `None` on
/// [`SessionEvent::Cancel`]. A sequence that ends without a terminal event
/// counts as cancel. Events after the first terminal event are not
/// consumed.
///
/// # Errors
/// Propagates the first failed event (malformed script, out-of-range
/// index, combiner failure); interactive callers that want to recover
/// should drive [`FactorBrowser::handle`] directly instead.
pub fn run<F: Factorization>(
    factorization: F,
    config: BrowserConfig,
    events: impl IntoIterator<Item = SessionEvent>,
) -> Result<Option<Vec<usize>>> {
    let mut browser = FactorBrowser::with_config(factorization, config)?;
    for event in events {
        match event {
            SessionEvent::Browse(event) => {
                browser.handle(event)?;
            }
            SessionEvent::Accept => {
                debug!("session accepted with {} factors", browser.selected_count());
                return Ok(browser.finish());
            }
            SessionEvent::Cancel => {
                debug!("session cancelled");
                return Ok(None);
            }
        }
    }
    Ok(None)
}
