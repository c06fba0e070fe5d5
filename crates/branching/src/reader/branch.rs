use std::io::BufRead;

use indexmap::IndexMap;
use log::trace;

use stools_settings::StateKind;

use super::cursor::LineCursor;
use super::{malformed, BranchingReader, Position};
use crate::error::Result;
use crate::parsers::{float64, int64};
use crate::{BranchContainer, BranchIdentity, StateValue};

// ! Branch names and state data
impl BranchingReader {
    /// Find or create the branch for the next names line
    ///
    /// The state data line is always consumed to keep the cursor in step with
    /// the file, but is only parsed for a branch that has not been seen yet.
    /// Returns the position of the branch in the collection.
    pub(super) fn parse_branch_state<R: BufRead>(
        &mut self,
        cursor: &mut LineCursor<R>,
        position: Position,
    ) -> Result<usize> {
        let tokens = cursor.next_tokens()?;
        let Some((_label, names)) = tokens.split_first() else {
            return Err(malformed(cursor, "missing branch names label".into()));
        };
        let names = BranchIdentity::new(names.to_vec());

        if let Some(index) = self.branching.index_of(&names) {
            trace!("Reusing state for [{names}], {position}");
            cursor.next_tokens()?;
            return Ok(index);
        }

        let state_data = self.parse_state_data(cursor)?;
        trace!("New branch [{names}] with {} state values", state_data.len());

        let branch = BranchContainer::new(position.coef, names, state_data);
        Ok(self.branching.insert_branch(branch))
    }

    /// Label followed by alternating `key value` pairs
    fn parse_state_data<R: BufRead>(
        &self,
        cursor: &mut LineCursor<R>,
    ) -> Result<IndexMap<String, StateValue>> {
        let tokens = cursor.next_tokens()?;
        let Some((_label, pairs)) = tokens.split_first() else {
            return Err(malformed(cursor, "missing state data label".into()));
        };

        if pairs.len() % 2 != 0 {
            return Err(malformed(
                cursor,
                format!("odd number of state data values ({})", pairs.len()),
            ));
        }

        let mut state_data = IndexMap::with_capacity(pairs.len() / 2);
        for pair in pairs.chunks_exact(2) {
            let (key, value) = (&pair[0], &pair[1]);
            let value = self.state_value(key, value).ok_or_else(|| {
                malformed(cursor, format!("state value {value:?} for {key:?} has the wrong type"))
            })?;
            state_data.insert(key.clone(), value);
        }

        Ok(state_data)
    }

    /// Convert a value according to the configured type of its key
    fn state_value(&self, key: &str, value: &str) -> Option<StateValue> {
        match self.settings.state_kind(key) {
            StateKind::Int => int64(value).map(StateValue::Int),
            StateKind::Float => float64(value).map(StateValue::Float),
            StateKind::Str => Some(StateValue::Str(value.to_string())),
        }
    }
}
