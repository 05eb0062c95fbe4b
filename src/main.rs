use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use ply_allele_corrector::{annotate, Config, Table};

#[derive(Parser)]
#[command(name = "ply-allele-corrector")]
#[command(version)]
#[command(about = "Correct ply allele based on amino acid mutation profiles")]
struct Args {
    #[arg(short = 'i', long, help = "TSV file containing amino acid changes (aa_changes.tsv)")]
    aa_changes: PathBuf,

    #[arg(short = 'o', long, help = "Output TSV file with corrected ply allele numbers")]
    out: PathBuf,

    #[arg(short = 't', long, default_value = "1", help = "Number of classification threads")]
    threads: usize,

    #[arg(long, default_value = "sample_id", help = "Sample identifier column")]
    id_column: String,

    #[arg(long, default_value = "ply_allele_aa", help = "Column receiving the assigned allele")]
    assignment_column: String,

    #[arg(long, default_value = "pos_", help = "Prefix of amino acid position columns")]
    position_prefix: String,

    #[arg(long, default_value = "ply-", help = "Prefix of reference allele identifiers")]
    reference_prefix: String,

    #[arg(long, default_value = "ply-1", help = "Label for samples without amino acid changes")]
    no_change_label: String,

    #[arg(short = 'v', long, help = "Print per-reference and per-sample match trace")]
    verbose: bool,

    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Only print warnings and errors")]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            id_column: self.id_column.clone(),
            assignment_column: self.assignment_column.clone(),
            position_prefix: self.position_prefix.clone(),
            reference_prefix: self.reference_prefix.clone(),
            no_change_label: self.no_change_label.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("ply-allele-corrector v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading amino acid changes: {}", args.aa_changes.display());
    let table = Table::from_path(&args.aa_changes)
        .with_context(|| format!("failed to read {}", args.aa_changes.display()))?;

    let (annotated, summary) = annotate(&table, &args.config(), args.threads)
        .with_context(|| format!("failed to annotate {}", args.aa_changes.display()))?;

    annotated
        .write_path(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(
        "References: {}, samples: {} (no change: {}, matched: {}, unmatched: {})",
        summary.references, summary.samples, summary.no_change, summary.matched, summary.unmatched
    );
    if summary.ambiguous_profiles > 0 || summary.duplicate_ids > 0 {
        info!(
            "Reference set issues: {} shared profiles, {} duplicate identifiers",
            summary.ambiguous_profiles, summary.duplicate_ids
        );
    }
    info!("Annotated table saved to: {}", args.out.display());

    Ok(())
}
