use serde::{Deserialize, Serialize};

use crate::metric::missing_values::MissingValues;
use crate::shape::Shape;

/// Outcome of a single RMSD evaluation, as returned by `Rmsd::report`.
///
/// The binary prints this as JSON when run with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RmsdReport {
    /// Root-mean-square deviation; NaN when the mean is undefined.
    pub rmsd: f64,
    /// Shape shared by both inputs.
    pub shape: Shape,
    /// Total number of elements in each input.
    pub elements: usize,
    /// Elements that contributed to the mean. Equal to `elements` unless
    /// NaN positions were skipped.
    pub counted: usize,
    pub missing_values: MissingValues,
}
