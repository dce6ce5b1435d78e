//! The factor browser controller.
//!
//! Owns all mutable session state and applies user intents to it, one
//! event at a time. Every successful event leaves the controller with a
//! consistent triple: the committed selection, a reconstruction pair
//! computed against exactly that selection, and a page view whose checkbox
//! states reflect it. A failed event leaves all three untouched.

use log::debug;

use factorview_core::{
    reconstruct_split, script, Factorization, PageMove, PageWindow, Reconstruction, Result,
    SelectionSet,
};

use crate::event::BrowserEvent;
use crate::page::PageView;

/// Browser configuration.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Number of factor slots shown per page.
    pub page_size: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { page_size: 6 }
    }
}

impl BrowserConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots per page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Everything the view layer needs after an event: the new selection
/// count, both reconstructions, and the refreshed visible page.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Number of currently selected factors.
    pub selected_count: usize,
    /// Reconstruction from the selected factors.
    pub current: Reconstruction,
    /// Reconstruction from the unselected remainder.
    pub remainder: Reconstruction,
    /// The visible page.
    pub page: PageView,
}

/// Stateful engine behind the factor-selection dialog.
///
/// Single-threaded and synchronous: each event is handled to completion
/// before the next is accepted, and no other component mutates the
/// selection or the window.
pub struct FactorBrowser<F> {
    factorization: F,
    selection: SelectionSet,
    window: PageWindow,
    current: Reconstruction,
    remainder: Reconstruction,
}

impl<F: Factorization> FactorBrowser<F> {
    /// Creates a browser with the default configuration.
    ///
    /// # Errors
    /// Propagates combiner failures from the initial full-cube remainder
    /// reconstruction.
    pub fn new(factorization: F) -> Result<Self> {
        Self::with_config(factorization, BrowserConfig::default())
    }

    /// Creates a browser with an explicit configuration.
    ///
    /// The initial reconstruction pair is computed up front (zeros for the
    /// empty selection, the full cube as remainder), so a fresh browser is
    /// indistinguishable from one that was just cleared.
    ///
    /// # Errors
    /// Propagates combiner failures from the initial reconstruction.
    pub fn with_config(factorization: F, config: BrowserConfig) -> Result<Self> {
        let selection = SelectionSet::new();
        let (current, remainder) = reconstruct_split(&factorization, &selection)?;
        Ok(Self {
            factorization,
            selection,
            window: PageWindow::new(config.page_size),
            current,
            remainder,
        })
    }

    /// Applies one user intent and returns the refreshed render state.
    ///
    /// Navigation events move the window and reuse the cached
    /// reconstruction pair; membership events stage a candidate selection,
    /// recompute both reconstructions against it, and commit only when
    /// that succeeds.
    ///
    /// # Errors
    /// [`Error::InvalidToken`](factorview_core::Error::InvalidToken) for a
    /// malformed script and
    /// [`Error::IndexOutOfRange`](factorview_core::Error::IndexOutOfRange)
    /// for scripted indices outside the factor range; in both cases the
    /// prior selection, window, and reconstructions are left intact.
    pub fn handle(&mut self, event: BrowserEvent) -> Result<Snapshot> {
        debug!("handling event: {event:?}");
        match event {
            BrowserEvent::Prev => self.advance(PageMove::Prev),
            BrowserEvent::Next => self.advance(PageMove::Next),
            BrowserEvent::GoTo(n) => self.advance(PageMove::Goto(n)),
            BrowserEvent::ApplyPage(flags) => self.apply_page(&flags),
            BrowserEvent::RunScript(text) => self.run_script(&text),
            BrowserEvent::Clear => {
                self.commit(SelectionSet::new())?;
                Ok(self.snapshot())
            }
        }
    }

    /// The factorization this browser was built over.
    pub fn factorization(&self) -> &F {
        &self.factorization
    }

    /// The committed selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Number of currently selected factors.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Render state for the current selection and window.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let nav = self.window.nav(self.factorization.n_factors());
        Snapshot {
            selected_count: self.selection.len(),
            current: self.current.clone(),
            remainder: self.remainder.clone(),
            page: PageView::build(&self.factorization, &self.window, &self.selection, nav),
        }
    }

    fn advance(&mut self, mv: PageMove) -> Result<Snapshot> {
        self.window.advance(mv, self.factorization.n_factors());
        Ok(self.snapshot())
    }

    /// Reconciles one page of checkbox flags with the selection.
    #[allow(clippy::cast_possible_wrap)]
    fn apply_page(&mut self, flags: &[bool]) -> Result<Snapshot> {
        let n_factors = self.factorization.n_factors();
        let mut kept = Vec::new();
        let mut dropped = Vec::new();
        for (slot, &keep) in flags.iter().enumerate().take(self.window.page_size()) {
            let index = self.window.global_index(slot);
            // Slots past the factor list hold no factor; their flags must
            // not change membership.
            if index >= n_factors {
                continue;
            }
            if keep {
                kept.push(index as i64);
            } else {
                dropped.push(index as i64);
            }
        }
        let mut candidate = self.selection.clone();
        candidate.bulk_set(kept, true);
        candidate.bulk_set(dropped, false);
        self.commit(candidate)?;
        Ok(self.snapshot())
    }

    /// Parses a selection script and merges its indices in.
    fn run_script(&mut self, text: &str) -> Result<Snapshot> {
        let parsed = script::parse(text)?;
        let mut candidate = self.selection.clone();
        candidate.merge(&parsed);
        self.commit(candidate)?;
        Ok(self.snapshot())
    }

    /// Recomputes both reconstructions against `candidate` and commits it.
    ///
    /// On error the previous selection and reconstructions stay in place,
    /// so a rejected event never exposes a partial update.
    fn commit(&mut self, candidate: SelectionSet) -> Result<()> {
        let (current, remainder) = reconstruct_split(&self.factorization, &candidate)?;
        debug!("committed selection of {} factors", candidate.len());
        self.selection = candidate;
        self.current = current;
        self.remainder = remainder;
        Ok(())
    }
}
