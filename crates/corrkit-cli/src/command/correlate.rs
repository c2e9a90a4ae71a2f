use std::path::PathBuf;

use clap::Args;
use corrkit_stats::correlation::CorrelationMethod;

use crate::{
    data::Dataset,
    schema::CorrelationResult,
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrelateArg {
    /// Path to the dataset (CSV with a header row, or JSON)
    pub input: PathBuf,

    /// First column
    #[arg(long)]
    pub x: String,

    /// Second column
    #[arg(long)]
    pub y: String,

    /// Coefficients to compute (comma-separated)
    #[arg(
        long = "method",
        value_delimiter = ',',
        default_values = ["pearson", "spearman", "kendall"]
    )]
    pub methods: Vec<CorrelationMethod>,

    /// Write JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CorrelateArg) -> anyhow::Result<()> {
    let dataset = Dataset::load(&arg.input)?;
    let x = dataset.column(&arg.x)?;
    let y = dataset.column(&arg.y)?;

    let results = arg
        .methods
        .iter()
        .map(|&method| {
            CorrelationResult::compute(&x.name, &x.values, &y.name, &y.values, method)
        })
        .collect::<Vec<_>>();
    for result in &results {
        if let Some(error) = &result.error {
            log::warn!("{}({}, {}): {error}", result.method, result.x, result.y);
        }
    }

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    if arg.json {
        output.write_json(&results)
    } else {
        let header = format!("{} vs {} (n = {})", x.name, y.name, x.values.len());
        output.write_lines(std::iter::once(header).chain(results.iter().map(render)))
    }
}

fn render(result: &CorrelationResult) -> String {
    match (result.value, &result.error) {
        (Some(value), _) => format!("  {:<10}{}", result.method, util::format_value(value)),
        (None, Some(error)) => format!("  {:<10}undefined ({error})", result.method),
        (None, None) => format!("  {:<10}undefined", result.method),
    }
}
