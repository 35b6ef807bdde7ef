//! Serializable summary of a function, one record per function.
//!
//! Field names are kept stable for exporters.

use crate::{BoolFnError, BooleanFunction};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five classification properties of a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub preserves_zero: bool,
    pub preserves_one: bool,
    pub is_self_dual: bool,
    pub is_monotonic: bool,
    pub is_linear: bool,
}

/// A row of the truth table, values written as 0 or 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTableEntry {
    /// Value of each variable, by name
    pub inputs: BTreeMap<String, u8>,
    pub output: u8,
}

/// All views of a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub expression: String,
    pub simplified: String,
    pub zhegalkin: String,
    pub properties: Properties,
    pub minimized: String,
    pub number_of_variables: usize,
    pub truth_table: Vec<TruthTableEntry>,
}

impl FunctionRecord {
    pub fn from_function(function: &BooleanFunction) -> Result<Self, BoolFnError> {
        let variables = function.variables();
        let truth_table = function
            .truth_table()?
            .iter()
            .map(|row| TruthTableEntry {
                inputs: variables
                    .iter()
                    .cloned()
                    .zip(row.inputs.iter().map(|v| *v as u8))
                    .collect(),
                output: row.output as u8,
            })
            .collect();

        Ok(Self {
            expression: function.expression().to_string(),
            simplified: function.simplify().to_string(),
            zhegalkin: function.to_zhegalkin()?.to_string(),
            properties: function.properties()?,
            minimized: function.minimize()?.to_string(),
            number_of_variables: function.number_of_variables(),
            truth_table,
        })
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, BoolFnError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
