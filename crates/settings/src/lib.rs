//! Reader settings shared by stools crates
//!
#![doc = include_str!("../readme.md")]

mod error;
mod settings;

#[doc(inline)]
pub use settings::{Settings, StateKind};

#[doc(inline)]
pub use error::{Error, Result};
