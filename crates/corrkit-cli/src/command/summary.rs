use std::path::PathBuf;

use clap::Args;
use corrkit_stats::summary::Summary;

use crate::{
    data::{Column, Dataset},
    schema::{ColumnSummary, PercentileValue},
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    /// Path to the dataset (CSV with a header row, or JSON)
    pub input: PathBuf,

    /// Columns to summarize (comma-separated); all columns when omitted
    #[arg(long = "column", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Additional percentile points to report, each in 0-100 (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = ["5", "95"])]
    pub percentiles: Vec<f64>,

    /// Write JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let dataset = Dataset::load(&arg.input)?;
    let records = dataset
        .select(&arg.columns)?
        .into_iter()
        .map(|column| summarize(column, &arg.percentiles))
        .collect::<Vec<_>>();

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    if arg.json {
        output.write_json(&records)
    } else {
        output.write_lines(records.iter().flat_map(render))
    }
}

fn summarize(column: &Column, percentile_points: &[f64]) -> ColumnSummary {
    match Summary::new(&column.values, percentile_points) {
        Some(summary) => ColumnSummary::new(&column.name, &summary),
        None => {
            log::warn!("Column '{}' has no valid values", column.name);
            empty_summary(column, percentile_points)
        }
    }
}

fn empty_summary(column: &Column, percentile_points: &[f64]) -> ColumnSummary {
    ColumnSummary {
        column: column.name.clone(),
        count: 0,
        missing: column.values.len(),
        sum: 0.0,
        mean: f64::NAN,
        min: f64::NAN,
        max: f64::NAN,
        median: f64::NAN,
        std_dev: f64::NAN,
        first_quartile: f64::NAN,
        third_quartile: f64::NAN,
        min_regular: f64::NAN,
        max_regular: f64::NAN,
        percentiles: percentile_points
            .iter()
            .map(|&percentile| PercentileValue {
                percentile,
                value: f64::NAN,
            })
            .collect(),
    }
}

fn render(record: &ColumnSummary) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} ({} values, {} missing)",
            record.column, record.count, record.missing
        ),
        format!("  sum             {}", util::format_value(record.sum)),
        format!("  mean            {}", util::format_value(record.mean)),
        format!("  std dev         {}", util::format_value(record.std_dev)),
        format!("  min             {}", util::format_value(record.min)),
        format!("  first quartile  {}", util::format_value(record.first_quartile)),
        format!("  median          {}", util::format_value(record.median)),
        format!("  third quartile  {}", util::format_value(record.third_quartile)),
        format!("  max             {}", util::format_value(record.max)),
        format!(
            "  regular range   [{}, {}]",
            util::format_value(record.min_regular),
            util::format_value(record.max_regular)
        ),
    ];
    lines.extend(record.percentiles.iter().map(|p| {
        format!(
            "  P{:<14} {}",
            p.percentile,
            util::format_value(p.value)
        )
    }));
    lines.push(String::new());
    lines
}
