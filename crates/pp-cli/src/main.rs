//! promptplan — classify free-text instructions into action plans.
//!
//! `promptplan buy milk and call the dentist` prints one JSON plan. With no
//! arguments, every non-empty stdin line is classified and printed as one
//! JSON line. Logs go to stderr so stdout stays machine-readable.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use pp_classifier::{ClassifierConfig, PlanAssembler};
use pp_protocol::ActionPlan;

const CONFIG_ENV: &str = "PROMPTPLAN_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "promptplan starting");

    // ── Load config ─────────────────────────────────────────────
    let config = load_config(std::env::var(CONFIG_ENV).ok().as_deref())?;
    let assembler = PlanAssembler::from_config(&config);
    tracing::info!(
        generative = assembler.has_generative(),
        "classifier ready"
    );

    // ── Classify ────────────────────────────────────────────────
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let plan = assembler.classify(&args.join(" ")).await;
        println!("{}", plan_line(&plan)?);
        return Ok(());
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let count = classify_lines(&assembler, stdin, &mut std::io::stdout().lock()).await?;
    tracing::info!(instructions = count, "stdin exhausted");

    Ok(())
}

/// Classify each non-empty line of `reader`, writing one JSON plan per line
/// to `out`. Lines that are not valid UTF-8 are logged and skipped.
async fn classify_lines<R, W>(
    assembler: &PlanAssembler,
    mut reader: R,
    out: &mut W,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut count = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\r', '\n']),
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping line that is not UTF-8");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let plan = assembler.classify(line).await;
        writeln!(out, "{}", plan_line(&plan)?)?;
        count += 1;
    }
    Ok(count)
}

/// Config from `path`, or defaults (rules only) when no path is set.
fn load_config(path: Option<&str>) -> anyhow::Result<ClassifierConfig> {
    match path {
        Some(path) => {
            let config = ClassifierConfig::from_file(path)?;
            tracing::info!(path, "config loaded");
            Ok(config)
        }
        None => Ok(ClassifierConfig::default()),
    }
}

fn plan_line(plan: &ActionPlan) -> serde_json::Result<String> {
    serde_json::to_string(plan)
}
