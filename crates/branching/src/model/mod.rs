// Modules under model, split into files for convenience
mod branch;
mod branching;
mod universe;

// Re-exports of the key public data structures
pub use branch::{BranchContainer, BranchIdentity, StateValue};
pub use branching::Branching;
pub use universe::{Universe, UniverseKey, VariableData};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Serialise only the values of a map, for keys JSON can not represent
pub(crate) fn values_only<K, V, S>(map: &IndexMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    serializer.collect_seq(map.values())
}
