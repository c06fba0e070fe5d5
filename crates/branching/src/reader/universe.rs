use std::io::BufRead;

use log::trace;

use super::cursor::LineCursor;
use super::{malformed, BranchingReader};
use crate::error::{Error, Result};
use crate::filter::should_retain;
use crate::parsers::{float64, uint32};

// ! Universe blocks
impl BranchingReader {
    /// Read one universe and its variables into the branch at `branch`
    ///
    /// `id n_variables` followed by `n_variables` lines of
    /// `name count v1 v2 ...`. Every variable line is consumed, whether or not
    /// the variable is retained.
    pub(super) fn parse_universe<R: BufRead>(
        &mut self,
        cursor: &mut LineCursor<R>,
        branch: usize,
        burnup: f64,
        step: u32,
    ) -> Result<()> {
        let (id, n_variables) = Self::universe_header(cursor)?;

        // Only the settings are borrowed alongside the branch
        let settings = &self.settings;
        let universe = self
            .branching
            .branch_at_mut(branch)
            .ok_or_else(|| Error::malformed(cursor.line(), "no branch for universe data"))?
            .add_universe(id, burnup, step);

        for _ in 0..n_variables {
            let tokens = cursor.next_tokens()?;
            let [name, _count, values @ ..] = tokens.as_slice() else {
                return Err(malformed(
                    cursor,
                    format!("variable line needs a name and count, found {}", tokens.len()),
                ));
            };

            let values = values
                .iter()
                .map(|t| {
                    float64(t).ok_or_else(|| {
                        malformed(cursor, format!("{name} value {t:?} is not a number"))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            if !should_retain(name, settings) {
                trace!("Skipping {name}");
                continue;
            }

            if settings.uncertainties {
                let (values, uncertainties) = split_uncertainties(values).ok_or_else(|| {
                    malformed(cursor, format!("{name} has an odd number of paired values"))
                })?;
                universe.add_pair(name.as_str(), values, uncertainties)?;
            } else {
                universe.add_values(name.as_str(), values);
            }
        }

        Ok(())
    }

    /// Universe id and the number of variable lines to follow
    fn universe_header<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<(u32, u32)> {
        let tokens = cursor.next_tokens()?;

        let [id, n_variables] = tokens.as_slice() else {
            return Err(malformed(
                cursor,
                format!("expected 2 universe header values, found {}", tokens.len()),
            ));
        };

        match (uint32(id), uint32(n_variables)) {
            (Some(id), Some(n)) => Ok((id, n)),
            _ => Err(malformed(
                cursor,
                format!("universe header {id:?} {n_variables:?} is not two integers"),
            )),
        }
    }
}

/// Split interleaved `value uncertainty` pairs
///
/// Returns `None` for an odd number of values.
fn split_uncertainties(interleaved: Vec<f64>) -> Option<(Vec<f64>, Vec<f64>)> {
    if interleaved.len() % 2 != 0 {
        return None;
    }

    Some(
        interleaved
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .unzip(),
    )
}
