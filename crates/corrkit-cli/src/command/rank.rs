use std::path::PathBuf;

use clap::Args;
use corrkit_stats::rank::ranks;

use crate::{
    data::{Column, Dataset},
    schema::RankedColumn,
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct RankArg {
    /// Path to the dataset (CSV with a header row, or JSON)
    pub input: PathBuf,

    /// Column to rank
    #[arg(long)]
    pub column: String,

    /// Write JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &RankArg) -> anyhow::Result<()> {
    let dataset = Dataset::load(&arg.input)?;
    let ranked = rank_column(dataset.column(&arg.column)?);

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    if arg.json {
        output.write_json(&ranked)
    } else {
        output.write_lines(render(&ranked))
    }
}

fn rank_column(column: &Column) -> RankedColumn {
    RankedColumn {
        column: column.name.clone(),
        values: column.values.clone(),
        ranks: ranks(&column.values),
    }
}

fn render(ranked: &RankedColumn) -> Vec<String> {
    let mut lines = vec![format!("{:>6}  {:>14}  {:>10}", "index", ranked.column, "rank")];
    lines.extend(
        ranked
            .values
            .iter()
            .zip(&ranked.ranks)
            .enumerate()
            .map(|(i, (&value, &rank))| {
                format!("{i:>6}  {:>14}  {rank:>10}", util::format_value(value))
            }),
    );
    lines
}
