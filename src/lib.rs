//! `stools` is a semi-modular toolkit of fast and reliable readers for Serpent
//! reactor physics outputs
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use stools_settings as settings;

#[cfg(feature = "branching")]
#[cfg_attr(docsrs, doc(cfg(feature = "branching")))]
#[doc(inline)]
pub use stools_branching as branching;
