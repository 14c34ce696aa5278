//! Compiled street segment parser

use serde_json::Value;

use crate::error::{HousesError, Result};
use crate::houses::compiler;
use crate::houses::matcher::HouseNumber;
use crate::houses::rule::RuleSet;

/// A street segment description compiled once and queried many times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HousesParser {
    source: String,
    rules: RuleSet,
}

impl HousesParser {
    /// Compile `source`, e.g. `"нечетные 11+, четные 42+"`
    pub fn new(source: &str) -> Result<Self> {
        let rules = compiler::compile(source)?;
        Ok(Self {
            source: source.to_string(),
            rules,
        })
    }

    /// Compile a description taken from a decoded JSON payload
    pub fn from_json(source: &Value) -> Result<Self> {
        match source {
            Value::String(source) => Self::new(source),
            other => Err(HousesError::InvalidSource(json_kind(other).to_string())),
        }
    }

    /// Whether `house_number` belongs to this segment
    pub fn is_included(&self, house_number: &str) -> Result<bool> {
        let house = HouseNumber::parse(house_number)?;
        let included = self.rules.accepts(&house.normalized, house.magnitude);
        tracing::trace!(house = %house.normalized, included, "house lookup");
        Ok(included)
    }

    /// [`is_included`](Self::is_included) for a house number taken from JSON
    pub fn is_included_json(&self, house_number: &Value) -> Result<bool> {
        match house_number {
            Value::String(house_number) => self.is_included(house_number),
            other => Err(HousesError::NotAString(json_kind(other).to_string())),
        }
    }

    /// Keep the included house numbers, in input order
    pub fn filter_included<S: AsRef<str> + Clone>(&self, house_numbers: &[S]) -> Result<Vec<S>> {
        let mut included = Vec::new();
        for house in house_numbers {
            if self.is_included(house.as_ref())? {
                included.push(house.clone());
            }
        }
        Ok(included)
    }

    /// The description as given
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled rule lists
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Compiled rules as a JSON document
    pub fn describe(&self) -> Value {
        serde_json::json!({
            "source": self.source,
            "rules": self.rules,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
