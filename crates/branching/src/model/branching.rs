use crate::model::branch::{BranchContainer, BranchIdentity};
use crate::model::values_only;

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Data structure to store branching file content
///
/// This [Branching] is the primary data structure containing the parsed file
/// data. Every distinct set of branch names maps to exactly one
/// [BranchContainer], kept in the order they first appear in the file.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Branching {
    #[serde(serialize_with = "values_only")]
    branches: IndexMap<BranchIdentity, BranchContainer>,
}

impl Branching {
    /// Create a new empty [Branching] struct
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over `(names, branch)` pairs in first-seen order
    pub fn branches(&self) -> impl Iterator<Item = (&BranchIdentity, &BranchContainer)> {
        self.branches.iter()
    }

    /// Find a branch by its full list of names
    ///
    /// ```rust
    /// # use stools_branching::{Branching, BranchContainer};
    /// # use indexmap::IndexMap;
    /// let mut branching = Branching::new();
    /// branching.insert_branch(BranchContainer::new(
    ///     1,
    ///     ["nom", "B1000"].into_iter().collect(),
    ///     IndexMap::new(),
    /// ));
    ///
    /// assert!(branching.get_branch(["nom", "B1000"]).is_some());
    /// assert!(branching.get_branch(["B1000", "nom"]).is_none());
    /// ```
    pub fn get_branch<I, S>(&self, names: I) -> Option<&BranchContainer>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key: BranchIdentity = names.into_iter().collect();
        self.branches.get(&key)
    }

    /// Add a branch unless one with the same names already exists
    ///
    /// Returns the position of the stored branch. An existing branch is never
    /// replaced, so its state data stay as first recorded.
    pub fn insert_branch(&mut self, branch: BranchContainer) -> usize {
        match self.branches.entry(branch.names().clone()) {
            Entry::Occupied(entry) => entry.index(),
            Entry::Vacant(entry) => {
                let index = entry.index();
                entry.insert(branch);
                index
            }
        }
    }

    pub(crate) fn index_of(&self, names: &BranchIdentity) -> Option<usize> {
        self.branches.get_index_of(names)
    }

    pub(crate) fn branch_at_mut(&mut self, index: usize) -> Option<&mut BranchContainer> {
        self.branches.get_index_mut(index).map(|(_, branch)| branch)
    }

    /// Number of distinct branches
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl std::fmt::Display for Branching {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Branching file with {} branches", self.len())?;
        for (names, branch) in self.branches() {
            writeln!(
                f,
                "  [{names}] coefficient set {}, {} universes",
                branch.coef_index(),
                branch.universes().count()
            )?;
        }
        Ok(())
    }
}
