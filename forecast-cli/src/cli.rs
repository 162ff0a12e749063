use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::Select;

use forecast_core::{
    Config, Dataset, ForecastSource, HttpForecastSource, PrecipChart, TableRow, view,
    view_model,
};

/// Rows shown per table page.
const PAGE_SIZE: usize = 12;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Hourly forecast explorer")]
pub struct Cli {
    /// Override the configured forecast endpoint for this run.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the cities available in the feed.
    Cities,

    /// Show one page of the observation table for a city.
    Table {
        /// City name; prompts interactively when omitted.
        city: Option<String>,

        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show a chart for a city.
    Charts {
        /// City name; prompts interactively when omitted.
        city: Option<String>,

        /// Which chart to render.
        #[arg(long, value_enum, default_value_t = ChartKind::Temperature)]
        chart: ChartKind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChartKind {
    Temperature,
    Precipitation,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Config::load()?.endpoint,
        };

        let source = HttpForecastSource::new(endpoint);
        let payload = source.fetch().await?;
        let dataset = Dataset::assemble(&payload)?;

        match self.command {
            Command::Cities => {
                for city in dataset.cities() {
                    println!("{city}");
                }
            }
            Command::Table { city, page } => {
                let city = resolve_city(&dataset, city)?;
                let vm = view_model(&dataset, &city);
                print_table_page(&vm.rows, page);
            }
            Command::Charts { city, chart } => {
                let city = resolve_city(&dataset, city)?;
                let vm = view_model(&dataset, &city);
                match chart {
                    ChartKind::Temperature => print_series(&vm.temperature),
                    ChartKind::Precipitation => print_precip_chart(&vm.precipitation),
                }
            }
        }

        Ok(())
    }
}

/// Resolve the active city: use the argument when given, otherwise
/// prompt with a select over the dataset's cities, cursor on the
/// default city when present.
fn resolve_city(dataset: &Dataset, city: Option<String>) -> Result<String> {
    if let Some(city) = city {
        return Ok(city);
    }

    let cities: Vec<String> = dataset.cities().to_vec();
    let default_index = cities
        .iter()
        .position(|c| c == view::DEFAULT_CITY)
        .unwrap_or(0);

    let chosen = Select::new("City:", cities)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(chosen)
}

fn print_table_page(rows: &[TableRow], page: usize) {
    let pages = rows.len().div_ceil(PAGE_SIZE).max(1);
    let page = page.clamp(1, pages);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());

    println!(
        "{:<12} {:<17} {:>9} {:>12} {:>12} {:>10} {:>11}",
        "City", "Time", "Temp °C", "Precip %", "Precip mm", "Clouds %", "Wind km/h"
    );
    for row in &rows[start..end] {
        println!(
            "{:<12} {:<17} {:>9.1} {:>12.0} {:>12.1} {:>10.0} {:>11.1}",
            row.city,
            row.time,
            row.temperature_c,
            row.precip_probability_pct,
            row.precip_amount_mm,
            row.cloud_cover_pct,
            row.wind_speed_kmh,
        );
    }
    println!("page {page}/{pages} ({} rows)", rows.len());
}

fn print_series(series: &forecast_core::ChartSeries) {
    println!("{}", series.label);
    for (x, y) in series.x.iter().zip(&series.y) {
        println!("{x}  {y:>8.1}");
    }
}

fn print_precip_chart(chart: &PrecipChart) {
    println!(
        "{:<17} {:>20} {:>30}",
        "Time", chart.amount.label, chart.probability.label
    );
    for ((x, amount), probability) in chart
        .amount
        .x
        .iter()
        .zip(&chart.amount.y)
        .zip(&chart.probability.y)
    {
        println!("{x:<17} {amount:>20.1} {probability:>30.0}");
    }
}
