// CLI driver: read an NFA transition table, determinize it, write the DFA table.

use anyhow::{bail, Context};
use clap::Parser;
use determinize::subset_construction;
use determinize::table::{read_nfa, write_dfa, StateDesignation};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "determinize")]
#[command(about = "Convert an NFA transition table to an equivalent DFA", long_about = None)]
struct Cli {
    /// Input NFA transition table (CSV)
    input: PathBuf,

    /// Output DFA transition table (CSV)
    output: PathBuf,

    /// Initial state label (default: the first data row's state)
    #[arg(long)]
    initial: Option<String>,

    /// Final state label, repeatable (default: the last data row's state)
    #[arg(long = "final", value_name = "STATE")]
    finals: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let designation = match (cli.initial, cli.finals) {
        (None, finals) if finals.is_empty() => StateDesignation::Positional,
        (Some(initial), finals) if !finals.is_empty() => {
            StateDesignation::Explicit { initial, finals }
        }
        _ => bail!("--initial and --final must be given together"),
    };

    let input = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let nfa = read_nfa(input, designation)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    tracing::debug!(
        states = nfa.num_states(),
        symbols = nfa.alphabet().len(),
        "parsed NFA"
    );

    let dfa = subset_construction(&nfa).context("subset construction failed")?;
    tracing::info!(
        nfa_states = nfa.num_states(),
        dfa_states = dfa.num_states(),
        final_states = dfa.final_states().len(),
        "determinized"
    );

    let output = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    write_dfa(output, &dfa)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
