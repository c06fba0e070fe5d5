use crate::error::{Error, Result};

use indexmap::IndexMap;
use serde::Serialize;

/// Lookup key for a [Universe] within a branch, `(id, burnup step)`
pub type UniverseKey = (u32, u32);

/// Values recorded for a single variable
///
/// Uncertainties are only ever stored alongside values of the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableData {
    values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uncertainties: Option<Vec<f64>>,
}

impl VariableData {
    /// Plain values without uncertainties
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            uncertainties: None,
        }
    }

    /// Values paired with their uncertainties
    ///
    /// Fails if the two lists differ in length.
    ///
    /// ```rust
    /// # use stools_branching::VariableData;
    /// assert!(VariableData::with_uncertainties(vec![1.0, 2.0], vec![0.1, 0.2]).is_ok());
    /// assert!(VariableData::with_uncertainties(vec![1.0, 2.0], vec![0.1]).is_err());
    /// ```
    pub fn with_uncertainties(values: Vec<f64>, uncertainties: Vec<f64>) -> Result<Self> {
        if values.len() != uncertainties.len() {
            return Err(Error::UnexpectedLength {
                expected: values.len(),
                found: uncertainties.len(),
            });
        }

        Ok(Self {
            values,
            uncertainties: Some(uncertainties),
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn uncertainties(&self) -> Option<&[f64]> {
        self.uncertainties.as_deref()
    }
}

/// Homogenised data for one universe at one burnup step
///
/// Variables are kept in the order they were read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Universe {
    /// Universe identifier
    pub id: u32,
    /// Burnup value for the step this data belongs to
    pub burnup: f64,
    /// Burnup step index
    pub step: u32,
    variables: IndexMap<String, VariableData>,
}

impl Universe {
    /// Create a new [Universe] with no variables
    pub fn new(id: u32, burnup: f64, step: u32) -> Self {
        Self {
            id,
            burnup,
            step,
            variables: IndexMap::new(),
        }
    }

    /// The `(id, step)` pair this universe is stored under
    pub fn key(&self) -> UniverseKey {
        (self.id, self.step)
    }

    /// Store plain values for `name`, replacing anything already there
    pub fn add_values(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.variables.insert(name.into(), VariableData::new(values));
    }

    /// Store values and paired uncertainties for `name`
    ///
    /// Replaces anything already stored for `name`. Fails without storing if
    /// the two lists differ in length.
    pub fn add_pair(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
        uncertainties: Vec<f64>,
    ) -> Result<()> {
        let data = VariableData::with_uncertainties(values, uncertainties)?;
        self.variables.insert(name.into(), data);
        Ok(())
    }

    /// Iterate over all stored variables in the order they were read
    pub fn variables(&self) -> impl Iterator<Item = (&String, &VariableData)> {
        self.variables.iter()
    }

    pub fn get_variable(&self, name: &str) -> Option<&VariableData> {
        self.variables.get(name)
    }

    /// Values for a variable, if it was retained
    pub fn get_values(&self, name: &str) -> Option<&[f64]> {
        self.variables.get(name).map(VariableData::values)
    }

    /// Uncertainties for a variable, if it was retained with uncertainties
    pub fn get_uncertainties(&self, name: &str) -> Option<&[f64]> {
        self.variables.get(name).and_then(VariableData::uncertainties)
    }

    /// Number of stored variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
