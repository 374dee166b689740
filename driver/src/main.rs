use anyhow::Context;
use clap::Parser;
use report::{write_results, OutputFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Prints the average of each invocation set")]
struct Args {
    /// Load invocation sets from YAML
    #[arg(long, conflicts_with = "values")]
    workflow: Option<PathBuf>,
    /// Average an ad-hoc list such as "2, 3, 5"; repeat for more lines
    #[arg(long)]
    values: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else if !args.values.is_empty() {
        WorkflowConfig::from_value_lists(&args.values)?
    } else {
        WorkflowConfig::default()
    };

    let results = Runner::new(workflow_config).execute();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, &results, args.format)?;
    out.flush().context("flushing stdout")?;

    Ok(())
}
