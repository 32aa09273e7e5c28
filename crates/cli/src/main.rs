use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parley_core::{Matcher, RuleCatalog, Shadowing};
use parley_observability::{init_tracing, AppMetrics, MetricsSnapshot};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "parley")]
#[command(about = "Rule-driven chat responder")]
struct Cli {
    #[arg(
        long,
        env = "PARLEY_CATALOG",
        global = true,
        help = "JSON catalog to load instead of the builtin rules"
    )]
    catalog: Option<PathBuf>,

    #[arg(
        long,
        env = "PARLEY_FALLBACK",
        global = true,
        help = "Reply used when no rule matches"
    )]
    fallback: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat,
    Ask {
        utterance: String,
        #[arg(long)]
        explain: bool,
    },
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Debug, Subcommand)]
enum CatalogCommand {
    Check,
    Dump,
}

#[derive(Debug, Serialize)]
struct CatalogReport {
    source: String,
    rules: usize,
    fallback: String,
    never_fire: Vec<Shadowing>,
}

fn main() -> Result<()> {
    init_tracing("parley_cli");
    let cli = Cli::parse();

    let matcher = build_matcher(cli.catalog.as_ref(), cli.fallback)?;

    match cli.command {
        Command::Chat => {
            let metrics = AppMetrics::shared();
            let stdin = io::stdin();
            run_chat(&matcher, stdin.lock(), io::stdout(), &metrics)?;

            let summary = metrics.snapshot();
            info!(
                replies = summary.replies_total,
                fallbacks = summary.fallback_total,
                avg_latency_micros = summary.avg_latency_micros,
                "chat session closed"
            );
            println!("\n{}", format_summary(&summary));
        }
        Command::Ask { utterance, explain } => {
            if explain {
                let outcome = matcher.explain(&utterance);
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", matcher.get_response(&utterance));
            }
        }
        Command::Catalog { command } => match command {
            CatalogCommand::Check => {
                let report = CatalogReport {
                    source: catalog_source(cli.catalog.as_ref()),
                    rules: matcher.catalog().len(),
                    fallback: matcher.catalog().fallback().to_string(),
                    never_fire: matcher.catalog().shadowed_rules(matcher.normalizer()),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            CatalogCommand::Dump => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&matcher.catalog().to_file())?
                );
            }
        },
    }

    Ok(())
}

fn build_matcher(path: Option<&PathBuf>, fallback: Option<String>) -> Result<Matcher> {
    let catalog = match path {
        Some(path) => RuleCatalog::from_json_file(path)
            .with_context(|| format!("failed loading rule catalog from {}", path.display()))?,
        None => RuleCatalog::builtin().context("builtin rule catalog is invalid")?,
    };

    let catalog = match fallback {
        Some(fallback) => catalog
            .with_fallback(fallback)
            .context("invalid --fallback value")?,
        None => catalog,
    };

    let matcher = Matcher::with_default_normalizer(catalog);
    let never_fire = matcher.catalog().shadowed_rules(matcher.normalizer());
    for entry in &never_fire {
        warn!(
            rule_index = entry.rule_index,
            trigger = %entry.trigger,
            kind = ?entry.kind,
            shadowed_by = ?entry.shadowed_by,
            "catalog rule can never fire"
        );
    }
    info!(
        source = %catalog_source(path),
        rules = matcher.catalog().len(),
        never_fire = never_fire.len(),
        "matcher ready"
    );

    Ok(matcher)
}

fn catalog_source(path: Option<&PathBuf>) -> String {
    path.map(|path| path.display().to_string())
        .unwrap_or_else(|| "builtin".to_string())
}

fn run_chat<R, W>(matcher: &Matcher, input: R, mut output: W, metrics: &AppMetrics) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Parley chat mode. type 'exit' to quit.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed reading from stdin")?;

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let started = Instant::now();
        let outcome = matcher.explain(message);
        metrics.inc_reply();
        if outcome.is_fallback() {
            metrics.inc_fallback();
        }
        metrics.observe_latency(started.elapsed());

        writeln!(output, "\n{}\n", outcome.response)?;
    }

    Ok(())
}

fn format_summary(summary: &MetricsSnapshot) -> String {
    format!(
        "{} replies ({} matched, {} fallback), avg {:.1}µs per reply",
        summary.replies_total,
        summary.matched_total,
        summary.fallback_total,
        summary.avg_latency_micros
    )
}
