//! factorview-core: Core types for interactive factor selection.
//!
//! This crate provides the stateful engine behind a factor-browsing dialog:
//! the kept-factor selection set and its derived complement, windowed
//! paging over the factor list, a compact range-script mini-language for
//! bulk selection, and reconstruction of the data cube from a chosen
//! subset of factors via an externally supplied [`Factorization`].
//!

pub mod cube;
pub mod error;
pub mod factorization;
pub mod paging;
pub mod reconstruct;
pub mod script;
pub mod selection;

pub use cube::{CubeShape, Reconstruction};
pub use error::{Error, Result};
pub use factorization::Factorization;
pub use paging::{PageMove, PageNav, PageWindow};
pub use reconstruct::{reconstruct, reconstruct_split};
pub use selection::SelectionSet;
