use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Selects how NaN elements are treated when averaging squared differences.
///
/// - `Propagate`: plain mean; a NaN anywhere makes the result NaN.
/// - `Ignore`: positions whose squared difference is NaN are left out of
///   both the sum and the element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValues {
    #[default]
    Propagate,
    Ignore,
}

impl MissingValues {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingValues::Propagate => "propagate",
            MissingValues::Ignore => "ignore",
        }
    }
}

impl fmt::Display for MissingValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingValues {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(MissingValues::Propagate),
            "ignore" => Ok(MissingValues::Ignore),
            other => Err(format!(
                "unknown missing-value policy '{other}' (expected 'propagate' or 'ignore')"
            )),
        }
    }
}
