//! Typed access to the open input record handed to a calculator.

use crate::error::CalcError;
use std::collections::HashMap;
use tally_types::CalcValue;

/// Provides a safe interface for calculators to access input variables.
///
/// The underlying record is open: the contract mandates no particular
/// fields, each calculator pulls out the ones it needs and gets a
/// structured error when a required field is missing or mistyped.
#[derive(Debug)]
pub struct CalculatorInputs<'a> {
    variables: &'a HashMap<String, CalcValue>,
}

impl<'a> CalculatorInputs<'a> {
    /// Creates a new `CalculatorInputs` over a borrowed variable map.
    pub fn new(variables: &'a HashMap<String, CalcValue>) -> Self {
        Self { variables }
    }

    /// Gets a floating-point number value from the inputs. Integers are
    /// widened to `f64`.
    pub fn get_f64(&self, name: &str) -> Result<f64, CalcError> {
        match self.variables.get(name) {
            Some(value) => value.as_float().ok_or_else(|| CalcError::InvalidType {
                name: name.to_string(),
                expected: "number",
                actual: value.type_name(),
            }),
            None => Err(CalcError::MissingInput { name: name.to_string() }),
        }
    }

    /// Gets an integer value from the inputs.
    pub fn get_i64(&self, name: &str) -> Result<i64, CalcError> {
        match self.variables.get(name) {
            Some(value) => value.as_integer().ok_or_else(|| CalcError::InvalidType {
                name: name.to_string(),
                expected: "integer",
                actual: value.type_name(),
            }),
            None => Err(CalcError::MissingInput { name: name.to_string() }),
        }
    }

    /// Gets a string value from the inputs.
    pub fn get_string(&self, name: &str) -> Result<String, CalcError> {
        match self.variables.get(name) {
            Some(CalcValue::String(s)) => Ok(s.clone()),
            Some(other) => Err(CalcError::InvalidType {
                name: name.to_string(),
                expected: "string",
                actual: other.type_name(),
            }),
            None => Err(CalcError::MissingInput { name: name.to_string() }),
        }
    }

    /// Gets a boolean value from the inputs.
    pub fn get_bool(&self, name: &str) -> Result<bool, CalcError> {
        match self.variables.get(name) {
            Some(CalcValue::Boolean(b)) => Ok(*b),
            Some(other) => Err(CalcError::InvalidType {
                name: name.to_string(),
                expected: "boolean",
                actual: other.type_name(),
            }),
            None => Err(CalcError::MissingInput { name: name.to_string() }),
        }
    }

    /// Gets an array value from the inputs.
    pub fn get_array(&self, name: &str) -> Result<&'a Vec<CalcValue>, CalcError> {
        match self.variables.get(name) {
            Some(CalcValue::Array(arr)) => Ok(arr),
            Some(other) => Err(CalcError::InvalidType {
                name: name.to_string(),
                expected: "array",
                actual: other.type_name(),
            }),
            None => Err(CalcError::MissingInput { name: name.to_string() }),
        }
    }

    /// Optional variant of [`get_f64`](Self::get_f64): absent fields yield
    /// `None`, present-but-mistyped fields still fail.
    pub fn get_f64_opt(&self, name: &str) -> Result<Option<f64>, CalcError> {
        match self.variables.get(name) {
            None | Some(CalcValue::Null) => Ok(None),
            Some(_) => self.get_f64(name).map(Some),
        }
    }

    /// Optional variant of [`get_string`](Self::get_string).
    pub fn get_string_opt(&self, name: &str) -> Result<Option<String>, CalcError> {
        match self.variables.get(name) {
            None | Some(CalcValue::Null) => Ok(None),
            Some(_) => self.get_string(name).map(Some),
        }
    }
}
