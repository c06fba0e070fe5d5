//! Module for reading Serpent branching coefficient files
//!
//! Automated burnup sequences with branches write their homogenised group
//! constants to a `*.coe` file. Every combination of perturbations (the
//! branch) is re-run at each burnup step, and the results for each universe are
//! written out one block at a time.
//!
//! - [Branching] - Primary data structure containing the parsed file data
//!
//! The data are arranged as:
//!
//! | Data structure     | Description                                             |
//! | ------------------ | ------------------------------------------------------- |
//! | [BranchContainer]  | branch names, typed state data, and universes           |
//! | [Universe]         | homogenised data for one universe at one burnup step    |
//! | [VariableData]     | values, and optionally their paired uncertainties       |
//!
//! Which variables are kept, how branch state values are typed, and whether
//! uncertainties are interleaved with values are all decided by the
//! [Settings](stools_settings::Settings) given to the [BranchingReader].
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use stools_branching::read_branching;
//! // Read all file data into the core data structure
//! let branching = read_branching("/path/to/file.coe").unwrap();
//!
//! // Find the data for a specific branch
//! let branch = branching.get_branch(["nom", "B1000"]).expect("Branch not found");
//!
//! // Infinite flux for universe 0 at the first burnup step
//! let flux = branch
//!     .get_universe(0, 0)
//!     .and_then(|u| u.get_values("INF_FLX"));
//! ```
//!
//! # File format
//!
//! The file is a repeated sequence of blocks, each of the form:
//!
//! ```text
//! 1 4 1 2 1                   <- run, total runs, coef set, total sets, universes
//! 2 nom B1000                 <- label, branch names...
//! 4 VERSION 1 BOR 1000        <- label, key value pairs...
//! 0.00000E+00 0 2             <- burnup, burnup step, ...
//! 0 2                         <- universe, number of variables
//! INF_FLX 2 1.0E+00 2.0E+00   <- name, count, values...
//! INF_ABS 2 3.0E-01 4.0E-01
//! ```
//!
//! The file may only end after the last variable of a block.

mod model;
mod error;
mod filter;
mod parsers;
mod reader;
mod writer;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use model::*;

#[doc(inline)]
pub use filter::{should_retain, B1_PREFIX, INF_PREFIX};

#[doc(inline)]
pub use reader::BranchingReader;

#[doc(inline)]
pub use writer::{to_json_string, write_json};

use std::path::Path;
use stools_settings::Settings;

/// Read every variable from a branching file
///
/// Uses the default [Settings], so every variable is retained and values are
/// assumed to have no uncertainties.
///
/// ```rust, no_run
/// # use stools_branching::{Branching, read_branching};
/// let branching: Branching = read_branching("path/to/file.coe").unwrap();
/// ```
pub fn read_branching<P: AsRef<Path>>(path: P) -> Result<Branching> {
    BranchingReader::new().parse(path)
}

/// Read a branching file with the given settings
///
/// ```rust, no_run
/// # use stools_branching::read_branching_with;
/// # use stools_settings::Settings;
/// let mut settings = Settings::new().with_variables(["FLX"]);
/// settings.set_uncertainties(true);
///
/// let branching = read_branching_with("path/to/file.coe", &settings).unwrap();
/// ```
pub fn read_branching_with<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<Branching> {
    BranchingReader::with_settings(settings.clone()).parse(path)
}
