//! Windowed browsing over the factor list.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A navigation request against the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageMove {
    /// Step back one page.
    Prev,
    /// Step forward one page.
    Next,
    /// Jump so the window starts at the given factor number.
    Goto(i64),
}

/// Whether further navigation is possible from the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    /// A previous page exists.
    pub has_prev: bool,
    /// A next page exists.
    pub has_next: bool,
}

/// The contiguous slice of factors currently visible.
///
/// Invariant: `0 <= first <= max(0, total - page_size)` after every
/// [`advance`](Self::advance). The window never goes negative and never
/// wraps; when fewer than `page_size` factors exist it pins to 0 and the
/// caller renders the missing slots as "no factor available".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    first: usize,
    page_size: usize,
}

impl PageWindow {
    /// Creates a window of `page_size` slots starting at factor 0.
    ///
    /// # Panics
    /// Panics if `page_size` is zero.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        assert!(page_size >= 1, "page_size must be at least 1");
        Self {
            first: 0,
            page_size,
        }
    }

    /// Index of the first visible factor.
    #[must_use]
    pub fn first(&self) -> usize {
        self.first
    }

    /// Number of slots the window renders.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Global index shown in the given slot of the window.
    #[must_use]
    pub fn global_index(&self, slot: usize) -> usize {
        self.first + slot
    }

    /// Applies a navigation request, clamping at both ends.
    ///
    /// The requested start is clamped into `[0, max(0, total - page_size)]`;
    /// the lower clamp dominates when `total < page_size`. Returns which
    /// directions remain available from the new position.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn advance(&mut self, mv: PageMove, total: usize) -> PageNav {
        let requested = match mv {
            PageMove::Prev => self.first as i64 - self.page_size as i64,
            PageMove::Next => self.first as i64 + self.page_size as i64,
            PageMove::Goto(n) => n,
        };
        let max_first = total.saturating_sub(self.page_size) as i64;
        self.first = requested.clamp(0, max_first) as usize;
        self.nav(total)
    }

    /// Navigation availability at the current position.
    #[must_use]
    pub fn nav(&self, total: usize) -> PageNav {
        PageNav {
            has_prev: self.first > 0,
            has_next: self.first + self.page_size < total,
        }
    }
}
