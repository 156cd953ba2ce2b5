//! Reads numeric arrays from JSON text.
//!
//! Accepted layout:
//! - a bare number is a 0-d array
//! - nested lists of numbers form an n-d array; every list at a given depth
//!   must have the same length
//! - `null` leaves are read as NaN (a missing value)
use std::path::Path;

use ndarray::{ArrayD, IxDyn};
use serde_json::Value;

use crate::error::{MetricError, MetricResult};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses JSON text into a dynamically-dimensioned `f64` array.
pub fn parse_array(text: &str) -> MetricResult<ArrayD<f64>> {
    let value: Value = serde_json::from_str(text)?;
    value_to_array(&value)
}

/// Reads a JSON file and parses it with `parse_array`.
pub fn load_array<P: AsRef<Path>>(path: P) -> MetricResult<ArrayD<f64>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let array = parse_array(&text)?;
    log::debug!("loaded array of shape {:?} from {}", array.shape(), path.display());
    Ok(array)
}

/// Converts an already-parsed JSON value into an array.
pub fn value_to_array(value: &Value) -> MetricResult<ArrayD<f64>> {
    let dims = infer_dims(value);
    // Not pre-sized: `dims` comes from the first element at each level and is
    // only trusted once `flatten` has checked every list against it.
    let mut data = Vec::new();
    flatten(value, &dims, 0, &mut data)?;

    ArrayD::from_shape_vec(IxDyn(&dims), data)
        .map_err(|e| MetricError::Parse(format!("cannot build array of shape {dims:?}: {e}")))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Walks the first element of every nesting level to find the candidate shape.
fn infer_dims(value: &Value) -> Vec<usize> {
    let mut dims = Vec::new();
    let mut current = value;
    while let Value::Array(items) = current {
        dims.push(items.len());
        match items.first() {
            Some(first) => current = first,
            None => break,
        }
    }
    dims
}

/// Appends leaves in row-major order, checking every list against `dims`.
fn flatten(value: &Value, dims: &[usize], depth: usize, out: &mut Vec<f64>) -> MetricResult<()> {
    if depth < dims.len() {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(MetricError::Parse(format!(
                    "expected a list at depth {depth}, found {}",
                    kind(other)
                )))
            }
        };
        if items.len() != dims[depth] {
            return Err(MetricError::Parse(format!(
                "ragged array: list at depth {depth} has {} elements, expected {}",
                items.len(),
                dims[depth]
            )));
        }
        for item in items {
            flatten(item, dims, depth + 1, out)?;
        }
        return Ok(());
    }

    match value {
        Value::Number(n) => {
            let x = n
                .as_f64()
                .ok_or_else(|| MetricError::Parse(format!("number {n} is not representable as f64")))?;
            out.push(x);
            Ok(())
        }
        Value::Null => {
            out.push(f64::NAN);
            Ok(())
        }
        other => Err(MetricError::Parse(format!(
            "expected a number at depth {depth}, found {}",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
