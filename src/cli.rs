use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{ClassifierKind, CnConfig};
use crate::{Classifier, Merger, log_debug, log_info};

#[derive(Debug, Parser)]
#[command(name = "cn")]
#[command(about = "Join class lists and drop conflicting Tailwind classes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to cn.toml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the classifier from the config file
    #[arg(long, value_enum)]
    pub classifier: Option<ClassifierKind>,

    /// Only join the inputs, keeping conflicting classes
    #[arg(long)]
    pub no_merge: bool,

    /// Log the loaded config and every dropped class to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Class lists to merge. Reads stdin line by line when empty
    pub classes: Vec<String>,
}

pub fn load_config(cli: &Cli) -> anyhow::Result<CnConfig> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            CnConfig::find(&cwd)
        }
    };
    let mut config = match &path {
        Some(path) => CnConfig::load(path)?,
        None => CnConfig::default(),
    };
    if let Some(kind) = cli.classifier {
        config.merge.classifier = kind;
    }
    if cli.verbose {
        let source = path.map_or_else(|| "none".to_string(), |path| path.display().to_string());
        log_info!(
            "config",
            path = source,
            classifier = config.merge.classifier,
            groups = config.groups.len(),
        );
    }
    Ok(config)
}

/// Merge the positional classes, or every line of `input` when there are
/// none, writing one result line per merge to `output`.
pub fn run(
    cli: &Cli,
    config: &CnConfig,
    input: impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let merger = config.merger();
    if !cli.classes.is_empty() {
        let line = merge_line(cli, &merger, &crate::join(&cli.classes));
        writeln!(output, "{}", line)?;
        return Ok(());
    }
    for line in input.lines() {
        let line = line.context("Failed to read stdin")?;
        writeln!(output, "{}", merge_line(cli, &merger, &crate::join([line.as_str()])))?;
    }
    Ok(())
}

fn merge_line<C: Classifier>(cli: &Cli, merger: &Merger<C>, joined: &str) -> String {
    if cli.no_merge {
        return joined.to_string();
    }
    if !cli.verbose {
        return merger.merge(joined);
    }
    let report = merger.explain(joined);
    for dropped in &report.dropped {
        log_debug!(
            "merge",
            dropped = dropped.class,
            overridden_by = dropped.overridden_by,
        );
    }
    report.merged
}
