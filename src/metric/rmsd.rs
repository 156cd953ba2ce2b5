use std::any::type_name;

use log::{debug, warn};
use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{MetricError, MetricResult};
use crate::metric::element::Element;
use crate::metric::missing_values::MissingValues;
use crate::metric::report::RmsdReport;
use crate::shape::Shape;

/// Root-mean-square deviation between a predicted and a reference field:
///
///   RMSD = sqrt( sum_n (p_n - r_n)² / N )
///
/// where N is the total number of elements. Both inputs must have exactly
/// the same shape; elements of any `Element` type are widened to `f64`
/// before subtracting.
pub struct Rmsd;

impl Rmsd {
    /// RMSD with the default policy: NaN in either input propagates.
    pub fn compute<A, B, S1, S2, D1, D2>(
        predicted: &ArrayBase<S1, D1>,
        reference: &ArrayBase<S2, D2>,
    ) -> MetricResult<f64>
    where
        A: Element,
        B: Element,
        S1: Data<Elem = A>,
        S2: Data<Elem = B>,
        D1: Dimension,
        D2: Dimension,
    {
        Rmsd::compute_with(predicted, reference, MissingValues::Propagate)
    }

    /// RMSD with an explicit missing-value policy.
    pub fn compute_with<A, B, S1, S2, D1, D2>(
        predicted: &ArrayBase<S1, D1>,
        reference: &ArrayBase<S2, D2>,
        missing: MissingValues,
    ) -> MetricResult<f64>
    where
        A: Element,
        B: Element,
        S1: Data<Elem = A>,
        S2: Data<Elem = B>,
        D1: Dimension,
        D2: Dimension,
    {
        Rmsd::report(predicted, reference, missing).map(|report| report.rmsd)
    }

    /// Computes RMSD and returns it alongside the shape and element counts.
    ///
    /// # Errors
    /// `MetricError::ShapeMismatch` if the shapes differ in dimensionality or
    /// in any dimension size. Nothing is computed in that case.
    pub fn report<A, B, S1, S2, D1, D2>(
        predicted: &ArrayBase<S1, D1>,
        reference: &ArrayBase<S2, D2>,
        missing: MissingValues,
    ) -> MetricResult<RmsdReport>
    where
        A: Element,
        B: Element,
        S1: Data<Elem = A>,
        S2: Data<Elem = B>,
        D1: Dimension,
        D2: Dimension,
    {
        if predicted.shape() != reference.shape() {
            return Err(MetricError::ShapeMismatch {
                predicted: Shape::of(predicted),
                reference: Shape::of(reference),
                predicted_type: type_name::<ArrayBase<S1, D1>>(),
            });
        }

        let shape = Shape::of(predicted);
        let elements = predicted.len();

        // Both arrays share a shape, so their logical iteration orders line up.
        let (sum_sq, counted) = predicted
            .iter()
            .zip(reference.iter())
            .map(|(&p, &r)| {
                let diff = p.to_f64() - r.to_f64();
                diff * diff
            })
            .filter(|sq| missing == MissingValues::Propagate || !sq.is_nan())
            .fold((0.0_f64, 0_usize), |(sum, n), sq| (sum + sq, n + 1));

        let rmsd = if counted == 0 {
            warn!("rmsd: mean of empty set (shape {shape}, policy {missing}); result is NaN");
            f64::NAN
        } else {
            (sum_sq / counted as f64).sqrt()
        };

        debug!("rmsd over shape {shape}: {counted}/{elements} elements, value {rmsd}");

        Ok(RmsdReport {
            rmsd,
            shape,
            elements,
            counted,
            missing_values: missing,
        })
    }
}

/// Root-mean-square deviation between `predicted` and `reference`.
///
/// Shorthand for `Rmsd::compute`.
pub fn rmsd<A, B, S1, S2, D1, D2>(
    predicted: &ArrayBase<S1, D1>,
    reference: &ArrayBase<S2, D2>,
) -> MetricResult<f64>
where
    A: Element,
    B: Element,
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D1: Dimension,
    D2: Dimension,
{
    Rmsd::compute(predicted, reference)
}
