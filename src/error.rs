use thiserror::Error;

use crate::shape::Shape;

#[derive(Debug, Error)]
pub enum MetricError {
    /// The predicted and reference arrays do not have identical shapes.
    ///
    /// `predicted_type` is the type name of the predicted input so the caller
    /// can tell which argument was malformed.
    #[error(
        "predicted and reference field dimensions do not match.\n\
         shape(predicted)= {predicted}, shape(reference)= {reference}\n\
         predicted type: {predicted_type}"
    )]
    ShapeMismatch {
        predicted: Shape,
        reference: Shape,
        predicted_type: &'static str,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

pub type MetricResult<T> = Result<T, MetricError>;
