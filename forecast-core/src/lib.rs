//! Core library for the hourly forecast explorer.
//!
//! This crate defines:
//! - The reactive data pipeline: ingestion, normalization, dataset
//!   assembly, city selection, and the derived table/chart views
//! - The transport boundary for fetching the raw payload
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but can also be reused by other
//! binaries or services that want the same pipeline behind a
//! different presentation layer.

pub mod config;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod model;
pub mod select;
pub mod source;
pub mod view;

pub use config::Config;
pub use dataset::Dataset;
pub use error::PipelineError;
pub use model::Observation;
pub use select::{DOWNSAMPLE_STRIDE, select};
pub use source::{ForecastSource, HttpForecastSource};
pub use view::{
    ChartSeries, DEFAULT_CITY, PrecipChart, TableRow, ViewModel, build_charts, project_rows,
    view_model,
};
