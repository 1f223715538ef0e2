use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitesearch",
    version,
    about = "Keyword search over a static site's search index"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence diagnostics except errors; results are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one search and print the ranked results
    Query(QueryCommand),
    /// Read queries from stdin, one per line
    Interactive(InteractiveCommand),
    /// Summarize the pages in an index
    Inspect(InspectCommand),
    /// Strictly validate an index and list rejected records
    Check(CheckCommand),
    /// Merge a directory of JSON page shards into one index
    Build(BuildCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    All,
    Platform,
    Guide,
    Glossary,
    Resource,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Args)]
pub struct QueryCommand {
    #[arg(conflicts_with = "from_url")]
    pub query: Option<String>,

    /// Take the query from the `q` parameter of a search page URL
    #[arg(long)]
    pub from_url: Option<String>,

    #[arg(long)]
    pub index: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(long)]
    pub snippet_length: Option<usize>,
    #[arg(long)]
    pub no_highlight: bool,
}

#[derive(Args)]
pub struct InteractiveCommand {
    #[arg(long)]
    pub index: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,
    #[arg(long)]
    pub no_highlight: bool,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum InspectFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct InspectCommand {
    #[arg(long)]
    pub index: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = InspectFormat::Text)]
    pub format: InspectFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    #[arg(long)]
    pub index: Option<PathBuf>,
}

#[derive(Args)]
pub struct BuildCommand {
    pub dir: PathBuf,
    /// Defaults to the configured index path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
