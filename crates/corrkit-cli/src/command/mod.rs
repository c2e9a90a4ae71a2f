use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;

use self::{correlate::CorrelateArg, rank::RankArg, summary::SummaryArg};

mod correlate;
mod rank;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Descriptive statistics, quartiles and outlier fences per column
    Summary(#[clap(flatten)] SummaryArg),
    /// Correlation coefficients between two columns
    Correlate(#[clap(flatten)] CorrelateArg),
    /// Tie-averaged ranks of a column
    Rank(#[clap(flatten)] RankArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Correlate(arg) => correlate::run(&arg)?,
        Mode::Rank(arg) => rank::run(&arg)?,
    }
    Ok(())
}
