mod branch;
mod cursor;
mod universe;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers::{float64, uint32};
use crate::Branching;

// stools modules
use stools_settings::Settings;

// external crates
use log::{debug, error, info};

use cursor::{Line, LineCursor};

/// Where the reader is in the file
///
/// Only ever used for status messages, never to make parsing decisions. Each
/// step builds a new copy rather than updating shared state.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Position {
    run: u32,
    coef: u32,
    burnup: u32,
    universe: u32,
}

impl Position {
    fn block(run: u32, coef: u32) -> Self {
        Self {
            run,
            coef,
            ..Default::default()
        }
    }

    fn at_burnup(self, burnup: u32) -> Self {
        Self { burnup, ..self }
    }

    fn at_universe(self, universe: u32) -> Self {
        Self { universe, ..self }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "run {}, coefficient set {} - universe {} at burnup step {}",
            self.run, self.coef, self.universe, self.burnup
        )
    }
}

/// Reader for Serpent branching coefficient files (`*.coe`)
///
/// The file is consumed strictly forwards in a single pass, one line at a
/// time. Each block contains a header, the branch names, the branch state,
/// a burnup line, and then a set of universes with their variables.
///
/// Branches are deduplicated on their full list of names, so the state data
/// recorded for a branch always come from the first block that names it.
///
/// Minimal Example:
/// ```rust, no_run
/// # use stools_branching::BranchingReader;
/// # use stools_settings::Settings;
/// let settings = Settings::new().with_variables(["INF_FLX", "INF_ABS"]);
/// let mut reader = BranchingReader::with_settings(settings);
/// let branching = reader.parse("path/to/file.coe").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct BranchingReader {
    /// Resolved reader settings
    settings: Settings,
    /// Data collected so far in the current parse
    branching: Branching,
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl BranchingReader {
    /// Reader with default settings, retaining every variable
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            branching: Branching::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse the branching file at `path`
    pub fn parse<P: AsRef<Path>>(&mut self, path: P) -> Result<Branching> {
        info!("Preparing to read {}", path.as_ref().display());
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse branching data from any buffered source
    ///
    /// Any data from a previous parse are discarded first. If this fails, the
    /// data read before the failure remain available through
    /// [partial()](BranchingReader::partial) but are likely incomplete.
    pub fn parse_reader<R: BufRead>(&mut self, reader: R) -> Result<Branching> {
        self.branching = Branching::default();
        let mut cursor = LineCursor::new(reader);

        while self.process_block(&mut cursor)? {}
        debug_assert!(cursor.is_closed());

        info!("Done reading branching file");
        Ok(std::mem::take(&mut self.branching))
    }

    /// Whatever was read before the last parse failed
    pub fn partial(&self) -> &Branching {
        &self.branching
    }
}

// ! ------------------------------------------------------------------------
// !                              Block handling
// ! ------------------------------------------------------------------------

impl BranchingReader {
    /// Process one complete block, returning `false` at the end of the file
    fn process_block<R: BufRead>(&mut self, cursor: &mut LineCursor<R>) -> Result<bool> {
        let Some((position, n_universes)) = Self::parse_header(cursor)? else {
            return Ok(false);
        };

        let branch = self.parse_branch_state(cursor, position)?;

        let (burnup, step) = Self::parse_burnup(cursor)?;
        let position = position.at_burnup(step);

        for n in 0..n_universes {
            debug!("Reading {}", position.at_universe(n));
            self.parse_universe(cursor, branch, burnup, step)?;
        }

        Ok(true)
    }

    /// Block header, or `None` if the file ends cleanly
    ///
    /// `run total_runs coef_index total_coefs n_universes`
    fn parse_header<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Option<(Position, u32)>> {
        let tokens = match cursor.advance(true)? {
            Line::Tokens(tokens) => tokens,
            Line::EndOfStream => return Ok(None),
        };

        if tokens.len() != 5 {
            return Err(malformed(
                cursor,
                format!("expected 5 header values, found {}", tokens.len()),
            ));
        }

        let mut values = [0u32; 5];
        for (value, token) in values.iter_mut().zip(&tokens) {
            *value = uint32(token).ok_or_else(|| {
                malformed(cursor, format!("header value {token:?} is not an integer"))
            })?;
        }

        let [run, _total_runs, coef, _total_coefs, n_universes] = values;
        Ok(Some((Position::block(run, coef), n_universes)))
    }

    /// Burnup value and step index, ignoring anything after
    ///
    /// The format always writes at least three values on this line.
    fn parse_burnup<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<(f64, u32)> {
        let tokens = cursor.next_tokens()?;

        if tokens.len() < 3 {
            return Err(malformed(
                cursor,
                format!("expected at least 3 burnup values, found {}", tokens.len()),
            ));
        }

        let burnup = float64(&tokens[0])
            .ok_or_else(|| malformed(cursor, format!("burnup {:?} is not a number", tokens[0])))?;
        let step = uint32(&tokens[1]).ok_or_else(|| {
            malformed(cursor, format!("burnup step {:?} is not an integer", tokens[1]))
        })?;

        Ok((burnup, step))
    }
}

/// Format error on the line the cursor last read
pub(crate) fn malformed<R>(cursor: &LineCursor<R>, reason: String) -> Error
where
    R: BufRead,
{
    error!("Malformed line {}: {reason}", cursor.line());
    Error::malformed(cursor.line(), reason)
}
