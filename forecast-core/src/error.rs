use thiserror::Error;

/// Errors raised while turning a raw payload into a [`Dataset`].
///
/// All of these are fatal to startup: without a valid dataset there is
/// nothing to display, so callers propagate them to `main` and abort.
/// After assembly succeeds, the derivation functions (`select`,
/// `project_rows`, `build_charts`) are total and never fail.
///
/// [`Dataset`]: crate::dataset::Dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The payload is not a JSON array of objects.
    #[error("malformed payload: expected a JSON array of observation objects")]
    MalformedPayload,

    /// A required raw field is absent from an observation object.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The `time` value could not be parsed as a date-time.
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    /// A numeric field holds something other than a JSON number.
    #[error("invalid numeric value for '{field}': {value}")]
    InvalidNumeric { field: &'static str, value: String },

    /// Two observations share the same `(city, timestamp)` pair.
    #[error("duplicate observation for {city} at {timestamp}")]
    DuplicateObservation { city: String, timestamp: String },
}
