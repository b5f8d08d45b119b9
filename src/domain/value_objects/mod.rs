//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod language;
mod port;

pub use language::Language;
pub use port::{split_list, PortValue};
