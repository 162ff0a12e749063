//! Ingestion and normalization of the raw forecast payload.
//!
//! [`ingest`] only checks the payload's shape; [`normalize`] turns one
//! raw record into a typed [`Observation`]. Keeping the two apart means
//! a different transport or wire format only has to reproduce the
//! "sequence of JSON objects" shape to plug into the rest of the
//! pipeline.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::error::PipelineError;
use crate::model::{Observation, raw_keys};

/// A raw observation record as it arrives off the wire.
pub type RawRecord = Map<String, Value>;

/// Check the payload shape and hand back its records in order.
///
/// Accepts only a JSON array whose every element is an object; anything
/// else fails with [`PipelineError::MalformedPayload`]. No field
/// interpretation happens here.
pub fn ingest(payload: &Value) -> Result<Vec<&RawRecord>, PipelineError> {
    let rows = payload.as_array().ok_or(PipelineError::MalformedPayload)?;

    rows.iter()
        .map(|row| row.as_object().ok_or(PipelineError::MalformedPayload))
        .collect()
}

/// Map one raw record to a canonical [`Observation`].
///
/// The rename table is total: all eleven raw keys must be present.
/// Pure, same input always yields the same observation.
pub fn normalize(raw: &RawRecord) -> Result<Observation, PipelineError> {
    Ok(Observation {
        city: string_field(raw, raw_keys::CITY)?,
        timestamp: timestamp_field(raw, raw_keys::TIME)?,
        temperature_c: numeric_field(raw, raw_keys::TEMPERATURE)?,
        precip_probability_pct: numeric_field(raw, raw_keys::PRECIP_PROBABILITY)?,
        precip_amount_mm: numeric_field(raw, raw_keys::PRECIP_AMOUNT)?,
        cloud_cover_pct: numeric_field(raw, raw_keys::CLOUD_COVER)?,
        rain_mm: numeric_field(raw, raw_keys::RAIN)?,
        snowfall_mm: numeric_field(raw, raw_keys::SNOWFALL)?,
        wind_speed_kmh: numeric_field(raw, raw_keys::WIND_SPEED)?,
        wind_direction_deg: numeric_field(raw, raw_keys::WIND_DIRECTION)?,
        weather_code: integer_field(raw, raw_keys::WEATHER_CODE)?,
    })
}

fn string_field(raw: &RawRecord, key: &'static str) -> Result<String, PipelineError> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(PipelineError::MissingField(key))
}

fn numeric_field(raw: &RawRecord, key: &'static str) -> Result<f64, PipelineError> {
    let value = raw.get(key).ok_or(PipelineError::MissingField(key))?;

    value.as_f64().ok_or_else(|| PipelineError::InvalidNumeric {
        field: key,
        value: value.to_string(),
    })
}

fn integer_field(raw: &RawRecord, key: &'static str) -> Result<i64, PipelineError> {
    let value = raw.get(key).ok_or(PipelineError::MissingField(key))?;

    value.as_i64().ok_or_else(|| PipelineError::InvalidNumeric {
        field: key,
        value: value.to_string(),
    })
}

fn timestamp_field(raw: &RawRecord, key: &'static str) -> Result<NaiveDateTime, PipelineError> {
    let value = raw.get(key).ok_or(PipelineError::MissingField(key))?;

    let text = value
        .as_str()
        .ok_or_else(|| PipelineError::InvalidTimestamp(value.to_string()))?;

    parse_timestamp(text).ok_or_else(|| PipelineError::InvalidTimestamp(text.to_string()))
}

/// Parse an ISO-8601-like date-time. The feed emits minute precision
/// (`2024-01-01T00:00`); a with-seconds variant is accepted as well.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
