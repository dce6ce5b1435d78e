//! factorview-browser: Event-driven controller for factor selection.
//!
//! This crate orchestrates the factorview-core components into a
//! session-scoped engine: user intents ([`BrowserEvent`]) flow in, the
//! controller mutates the selection and the visible window, and
//! render-ready state ([`Snapshot`]) flows back out. The session ends via
//! [`session::run`] or [`FactorBrowser::finish`] with either a sorted list
//! of kept factor indices or nothing.
//!

pub mod controller;
pub mod event;
pub mod page;
pub mod session;

pub use controller::{BrowserConfig, FactorBrowser, Snapshot};
pub use event::BrowserEvent;
pub use page::{FactorSlot, PageView};
pub use session::{run, SessionEvent};
