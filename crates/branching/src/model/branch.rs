use crate::model::universe::{Universe, UniverseKey};
use crate::model::values_only;

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered list of branch names identifying a perturbation state
///
/// Two identities are only equal if every name matches in the same order.
///
/// ```rust
/// # use stools_branching::BranchIdentity;
/// let a: BranchIdentity = ["nom", "B1000"].into_iter().collect();
/// let b: BranchIdentity = ["B1000", "nom"].into_iter().collect();
/// assert_ne!(a, b);
/// assert_eq!(a.to_string(), "nom B1000");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BranchIdentity(Vec<String>);

impl BranchIdentity {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BranchIdentity {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for BranchIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Typed value of a branch state variable
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StateValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl StateValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Float value, with integers widened for convenience
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for StateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

/// All data recorded under one branch
///
/// The state data are fixed when the branch is first seen. Universes are
/// added as the file is read, keyed on `(id, burnup step)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchContainer {
    coef_index: u32,
    names: BranchIdentity,
    state_data: IndexMap<String, StateValue>,
    #[serde(serialize_with = "values_only")]
    universes: IndexMap<UniverseKey, Universe>,
}

impl BranchContainer {
    /// Create a new branch with no universes
    pub fn new(
        coef_index: u32,
        names: BranchIdentity,
        state_data: IndexMap<String, StateValue>,
    ) -> Self {
        Self {
            coef_index,
            names,
            state_data,
            universes: IndexMap::new(),
        }
    }

    /// Index of the coefficient set this branch was first seen in
    pub fn coef_index(&self) -> u32 {
        self.coef_index
    }

    pub fn names(&self) -> &BranchIdentity {
        &self.names
    }

    pub fn state_data(&self) -> &IndexMap<String, StateValue> {
        &self.state_data
    }

    pub fn get_state(&self, key: &str) -> Option<&StateValue> {
        self.state_data.get(key)
    }

    /// Fetch the universe for `(id, step)`, creating it if needed
    ///
    /// The `burnup` value is only used when creating a new universe.
    ///
    /// ```rust
    /// # use stools_branching::{BranchContainer, BranchIdentity};
    /// # use indexmap::IndexMap;
    /// let mut branch = BranchContainer::new(1, BranchIdentity::default(), IndexMap::new());
    /// branch.add_universe(0, 0.0, 0).add_values("FLUX", vec![1.0]);
    /// branch.add_universe(0, 0.0, 0).add_values("ABS", vec![2.0]);
    /// assert_eq!(branch.universes().count(), 1);
    /// assert_eq!(branch.get_universe(0, 0).unwrap().len(), 2);
    /// ```
    pub fn add_universe(&mut self, id: u32, burnup: f64, step: u32) -> &mut Universe {
        self.universes
            .entry((id, step))
            .or_insert_with(|| Universe::new(id, burnup, step))
    }

    /// Find a universe by identifier and burnup step
    pub fn get_universe(&self, id: u32, step: u32) -> Option<&Universe> {
        self.universes.get(&(id, step))
    }

    /// Find a universe by identifier and burnup value
    ///
    /// Burnup values are compared exactly, as written in the file.
    pub fn get_universe_at_burnup(&self, id: u32, burnup: f64) -> Option<&Universe> {
        self.universes.values().find(|u| u.id == id && u.burnup == burnup)
    }

    /// Iterate over universes in the order they were first seen
    pub fn universes(&self) -> impl Iterator<Item = &Universe> {
        self.universes.values()
    }
}
