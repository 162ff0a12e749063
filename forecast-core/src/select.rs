//! City selection and display downsampling.

use crate::dataset::Dataset;
use crate::model::Observation;

/// Keep every `DOWNSAMPLE_STRIDE`-th observation of a city's sequence,
/// starting from the first. Inherited from the original dashboard to
/// halve display density; other strides are not supported.
pub const DOWNSAMPLE_STRIDE: usize = 2;

/// Filter `dataset` to `city` and downsample for display.
///
/// Observations keep their original (timestamp-ascending) order; of the
/// filtered sequence only the even 0-indexed positions survive, so a
/// sequence of length `n` yields `ceil(n / 2)` observations.
///
/// An empty or unknown city is a normal, displayable state: the result
/// is simply empty, never an error.
#[must_use]
pub fn select(dataset: &Dataset, city: &str) -> Vec<Observation> {
    if city.is_empty() || !dataset.has_city(city) {
        return Vec::new();
    }

    dataset
        .observations()
        .iter()
        .filter(|obs| obs.city == city)
        .step_by(DOWNSAMPLE_STRIDE)
        .cloned()
        .collect()
}
