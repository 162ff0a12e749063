//! Derived views: table rows, chart series, and the view model.
//!
//! Everything here is a pure, total projection of a selected
//! observation sequence. The presentation layer owns the event loop;
//! it calls [`view_model`] on every selection change and renders the
//! replacement wholesale, so no state accumulates between calls.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::model::Observation;
use crate::select::select;

/// Default selection for the city control.
pub const DEFAULT_CITY: &str = "Sopron";

/// Opacity applied to the secondary-axis series so it does not obscure
/// the primary one. Inherited from the original dashboard.
pub const SECONDARY_OPACITY: f32 = 0.2;

/// Fixed series labels, doubling as axis titles on the dual-axis chart.
pub const TEMPERATURE_LABEL: &str = "Temperature (°C)";
pub const PRECIP_AMOUNT_LABEL: &str = "Precipitation (mm)";
pub const PRECIP_PROBABILITY_LABEL: &str = "Precipitation probability (%)";

/// One table row: the fixed seven-column projection of an observation.
///
/// `rain_mm`, `snowfall_mm`, `wind_direction_deg` and `weather_code`
/// are part of the model but intentionally absent from the table view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub city: String,
    pub time: String,
    pub temperature_c: f64,
    pub precip_probability_pct: f64,
    pub precip_amount_mm: f64,
    pub cloud_cover_pct: f64,
    pub wind_speed_kmh: f64,
}

/// Which y-axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    Primary,
    Secondary,
}

/// One plottable series: parallel x/y sequences plus render hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub axis: Axis,
    pub opacity: f32,
}

/// The precipitation chart: two bar series sharing an x-axis but with
/// independent y-axis scales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipChart {
    pub amount: ChartSeries,
    pub probability: ChartSeries,
}

/// Everything the presentation layer needs for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub rows: Vec<TableRow>,
    pub temperature: ChartSeries,
    pub precipitation: PrecipChart,
}

/// Project selected observations to table rows, in selection order.
#[must_use]
pub fn project_rows(selected: &[Observation]) -> Vec<TableRow> {
    selected
        .iter()
        .map(|obs| TableRow {
            city: obs.city.clone(),
            time: obs.formatted_time(),
            temperature_c: obs.temperature_c,
            precip_probability_pct: obs.precip_probability_pct,
            precip_amount_mm: obs.precip_amount_mm,
            cloud_cover_pct: obs.cloud_cover_pct,
            wind_speed_kmh: obs.wind_speed_kmh,
        })
        .collect()
}

/// Build the temperature line series and the precipitation dual-axis
/// pair from selected observations.
///
/// Direct, order-preserving projections: no interpolation, aggregation
/// or smoothing. Total over any input, an empty selection yields
/// series with zero points.
#[must_use]
pub fn build_charts(selected: &[Observation]) -> (ChartSeries, PrecipChart) {
    let x: Vec<String> = selected.iter().map(Observation::formatted_time).collect();

    let temperature = ChartSeries {
        label: TEMPERATURE_LABEL,
        x: x.clone(),
        y: selected.iter().map(|obs| obs.temperature_c).collect(),
        axis: Axis::Primary,
        opacity: 1.0,
    };

    let precipitation = PrecipChart {
        amount: ChartSeries {
            label: PRECIP_AMOUNT_LABEL,
            x: x.clone(),
            y: selected.iter().map(|obs| obs.precip_amount_mm).collect(),
            axis: Axis::Primary,
            opacity: 1.0,
        },
        probability: ChartSeries {
            label: PRECIP_PROBABILITY_LABEL,
            x,
            y: selected.iter().map(|obs| obs.precip_probability_pct).collect(),
            axis: Axis::Secondary,
            opacity: SECONDARY_OPACITY,
        },
    };

    (temperature, precipitation)
}

/// The selection-change recompute: `(Dataset, Selection) -> ViewModel`.
///
/// Pure and synchronous; repeated calls with the same arguments yield
/// the same view model.
#[must_use]
pub fn view_model(dataset: &Dataset, selection: &str) -> ViewModel {
    let selected = select(dataset, selection);
    let rows = project_rows(&selected);
    let (temperature, precipitation) = build_charts(&selected);

    ViewModel { rows, temperature, precipitation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sopron_payload() -> serde_json::Value {
        json!([
            {
                "city": "Sopron",
                "time": "2024-01-01T00:00",
                "temperature_2m": -2.5,
                "precipitation_probability": 10,
                "precipitation": 0.0,
                "cloudcover": 80,
                "rain": 0.0,
                "snowfall": 0.0,
                "windspeed_10m": 12.0,
                "winddirection_10m": 270,
                "weathercode": 3
            },
            {
                "city": "Sopron",
                "time": "2024-01-01T01:00",
                "temperature_2m": -1.0,
                "precipitation_probability": 20,
                "precipitation": 0.1,
                "cloudcover": 90,
                "rain": 0.1,
                "snowfall": 0.0,
                "windspeed_10m": 14.0,
                "winddirection_10m": 275,
                "weathercode": 3
            }
        ])
    }

    #[test]
    fn sopron_scenario_projects_one_downsampled_row() {
        let dataset = Dataset::assemble(&sopron_payload()).expect("valid payload");
        let selected = select(&dataset, "Sopron");
        assert_eq!(selected.len(), 1);

        let rows = project_rows(&selected);
        assert_eq!(
            rows[0],
            TableRow {
                city: "Sopron".to_string(),
                time: "2024-01-01 00:00".to_string(),
                temperature_c: -2.5,
                precip_probability_pct: 10.0,
                precip_amount_mm: 0.0,
                cloud_cover_pct: 80.0,
                wind_speed_kmh: 12.0,
            }
        );
    }

    #[test]
    fn charts_project_selected_values_in_order() {
        let dataset = Dataset::assemble(&sopron_payload()).expect("valid payload");
        let selected = select(&dataset, "Sopron");
        let (temperature, precipitation) = build_charts(&selected);

        assert_eq!(temperature.x, ["2024-01-01 00:00"]);
        assert_eq!(temperature.y, [-2.5]);
        assert_eq!(precipitation.amount.y, [0.0]);
        assert_eq!(precipitation.probability.y, [10.0]);
    }

    #[test]
    fn precipitation_series_share_an_x_axis_with_split_y_axes() {
        let dataset = Dataset::assemble(&sopron_payload()).expect("valid payload");
        let selected = select(&dataset, "Sopron");
        let (_, precipitation) = build_charts(&selected);

        assert_eq!(precipitation.amount.x, precipitation.probability.x);
        assert_eq!(precipitation.amount.axis, Axis::Primary);
        assert_eq!(precipitation.probability.axis, Axis::Secondary);
        assert_eq!(precipitation.probability.opacity, SECONDARY_OPACITY);
        assert_eq!(precipitation.amount.label, PRECIP_AMOUNT_LABEL);
        assert_eq!(precipitation.probability.label, PRECIP_PROBABILITY_LABEL);
    }

    #[test]
    fn empty_selection_yields_empty_series_not_errors() {
        let (temperature, precipitation) = build_charts(&[]);

        assert!(temperature.x.is_empty());
        assert!(temperature.y.is_empty());
        assert!(precipitation.amount.y.is_empty());
        assert!(precipitation.probability.y.is_empty());
        assert!(project_rows(&[]).is_empty());
    }

    #[test]
    fn view_model_for_unknown_city_is_safely_empty() {
        let dataset = Dataset::assemble(&sopron_payload()).expect("valid payload");
        let vm = view_model(&dataset, "NoSuchCity");

        assert!(vm.rows.is_empty());
        assert!(vm.temperature.y.is_empty());
        assert!(vm.precipitation.amount.y.is_empty());
    }

    #[test]
    fn view_model_recompute_is_idempotent() {
        let dataset = Dataset::assemble(&sopron_payload()).expect("valid payload");

        let first = view_model(&dataset, DEFAULT_CITY);
        let second = view_model(&dataset, DEFAULT_CITY);
        assert_eq!(first, second);
    }
}
