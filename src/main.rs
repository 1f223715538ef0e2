mod cli;

use clap::Parser;
use sitesearch::error::SearchError;
use sitesearch::index::SearchIndex;
use sitesearch::report::{self, OutputFormat, RenderOptions};
use sitesearch::search::query_url::query_from_url;
use sitesearch::search::session::{SearchOutcome, SearchSession};
use sitesearch::types::config::SearchConfig;
use sitesearch::types::page::{Category, CategoryFilter};
use sitesearch::{config, generator};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn category_filter(arg: cli::CategoryArg) -> CategoryFilter {
    match arg {
        cli::CategoryArg::All => CategoryFilter::All,
        cli::CategoryArg::Platform => CategoryFilter::Only(Category::Platform),
        cli::CategoryArg::Guide => CategoryFilter::Only(Category::Guide),
        cli::CategoryArg::Glossary => CategoryFilter::Only(Category::Glossary),
        cli::CategoryArg::Resource => CategoryFilter::Only(Category::Resource),
    }
}

fn resolve_filter(
    arg: Option<cli::CategoryArg>,
    cfg: &SearchConfig,
) -> Result<CategoryFilter, SearchError> {
    match arg {
        Some(arg) => Ok(category_filter(arg)),
        None => cfg.category_filter(),
    }
}

fn resolve_index_path(arg: Option<&Path>, cfg: &SearchConfig) -> PathBuf {
    arg.map(Path::to_path_buf)
        .unwrap_or_else(|| cfg.index.path.clone())
}

fn render_options(
    cfg: &SearchConfig,
    no_highlight: bool,
    limit: Option<usize>,
    snippet_length: Option<usize>,
) -> Result<RenderOptions, SearchError> {
    let snippet_length = snippet_length.unwrap_or(cfg.search.snippet_length);
    if snippet_length == 0 {
        return Err(SearchError::ConfigParse(
            "snippet length must be greater than 0".to_string(),
        ));
    }
    Ok(RenderOptions {
        highlight: (!no_highlight).then(|| cfg.highlight.clone()),
        snippet_length,
        limit: limit.unwrap_or(cfg.search.limit),
        site_origin: cfg.output.site_origin.clone(),
    })
}

fn run() -> Result<i32, SearchError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd)?;

    match cli.command {
        cli::Commands::Query(cmd) => {
            let query = match (&cmd.query, &cmd.from_url) {
                (Some(query), _) => query.clone(),
                (None, Some(url)) => query_from_url(url)?.unwrap_or_default(),
                (None, None) => String::new(),
            };

            let index_path = resolve_index_path(cmd.index.as_deref(), &cfg);
            let filter = resolve_filter(cmd.category, &cfg)?;
            let options = render_options(&cfg, cmd.no_highlight, cmd.limit, cmd.snippet_length)?;
            let format = cmd
                .format
                .map(|format| match format {
                    cli::ReportFormat::Text => OutputFormat::Text,
                    cli::ReportFormat::Md => OutputFormat::Md,
                    cli::ReportFormat::Json => OutputFormat::Json,
                })
                .or(cfg.output.format)
                .unwrap_or(OutputFormat::Text);

            let mut session =
                SearchSession::new(SearchIndex::load_or_empty(&index_path)).with_filter(filter);
            let outcome = session.search(&query);
            let rendered = report::render(&outcome, format, &options)?;
            println!("{rendered}");

            if matches!(outcome, SearchOutcome::NoMatches { .. }) {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Interactive(cmd) => {
            let index_path = resolve_index_path(cmd.index.as_deref(), &cfg);
            let filter = resolve_filter(cmd.category, &cfg)?;
            let options = render_options(&cfg, cmd.no_highlight, None, None)?;

            let mut session =
                SearchSession::new(SearchIndex::load_or_empty(&index_path)).with_filter(filter);
            println!(
                "loaded {} pages; type a query, `:category <name>` or `:quit`",
                session.index().len()
            );

            for line in std::io::stdin().lock().lines() {
                let line = line?;
                let input = line.trim();
                if matches!(input, ":quit" | ":q") {
                    break;
                }

                if let Some(name) = input.strip_prefix(":category") {
                    let filter = match name.trim().parse::<CategoryFilter>() {
                        Ok(filter) => filter,
                        Err(e) => {
                            eprintln!("warning: {e}");
                            continue;
                        }
                    };
                    match session.select_category(filter) {
                        Some(outcome) => println!("{}", report::text::to_text(&outcome, &options)),
                        None => println!("filter: {filter}"),
                    }
                    continue;
                }

                let outcome = session.search(input);
                println!("{}", report::text::to_text(&outcome, &options));
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Inspect(cmd) => {
            let index_path = resolve_index_path(cmd.index.as_deref(), &cfg);
            let index = SearchIndex::load(&index_path)?;
            let counts = index.count_by_category();

            if matches!(cmd.format, cli::InspectFormat::Json) {
                let summary = serde_json::json!({
                    "index": index_path.display().to_string(),
                    "fingerprint": index.fingerprint,
                    "pages": index.len(),
                    "rejected": index.rejected.len(),
                    "categories": counts
                        .iter()
                        .map(|(category, count)| (category.as_str(), *count))
                        .collect::<std::collections::BTreeMap<_, _>>(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("index: {}", index_path.display());
                println!(
                    "fingerprint: {}",
                    index.fingerprint.as_deref().unwrap_or("-")
                );
                println!("pages: {}", index.len());
                println!("rejected: {}", index.rejected.len());
                for (category, count) in &counts {
                    println!("  {} ({}): {}", category, category.label(), count);
                }
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let index_path = resolve_index_path(cmd.index.as_deref(), &cfg);
            let index = SearchIndex::load(&index_path)?;

            for rejected in &index.rejected {
                println!("[REJECTED] record {}: {}", rejected.position, rejected.reason);
            }

            if index.is_empty() {
                println!("check: no usable pages in {}", index_path.display());
                Ok(exit_code::BLOCKING)
            } else if !index.rejected.is_empty() {
                println!(
                    "check: {} pages usable, {} rejected",
                    index.len(),
                    index.rejected.len()
                );
                Ok(exit_code::WARNINGS)
            } else {
                println!("check: {} pages ok", index.len());
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Build(cmd) => {
            let output_path = resolve_index_path(cmd.output.as_deref(), &cfg);
            let output = generator::build_index(&cmd.dir, Some(&output_path))?;
            generator::writer::write_index(&output_path, &output.index)?;

            println!(
                "built {} pages from {} files: {}",
                output.index.len(),
                output.files,
                output_path.display()
            );
            for rejected in &output.rejected {
                println!(
                    "[REJECTED] {} record {}: {}",
                    rejected.file.display(),
                    rejected.position,
                    rejected.reason
                );
            }
            for duplicate in &output.duplicates {
                println!(
                    "[DUPLICATE] {} (kept {}, dropped {})",
                    duplicate.url,
                    duplicate.kept.display(),
                    duplicate.dropped.display()
                );
            }

            if output.has_warnings() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
