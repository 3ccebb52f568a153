// src/main.rs
mod dataset;
mod extractors;
mod storage;
mod utils;

use clap::Parser;
use dataset::InputSource;
use extractors::GeneSelector;
use storage::OutputSink;
use utils::AppError;

/// Extracts gene-tissue expression values from an XML annotation export
/// and writes them as `gene<TAB>organ<TAB>rpkm<TAB>variance` lines.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of XML file to open, leave empty for STDIN
    #[arg(long = "in", value_name = "PATH", default_value = "")]
    input: String,

    /// Path of file to write, leave empty for STDOUT
    #[arg(long = "out", value_name = "PATH", default_value = "")]
    output: String,

    /// Comma-separated NCBI GeneIDs to extract, leave empty for all genes
    #[arg(long = "geneID", visible_alias = "gene-id", value_name = "IDS", default_value = "")]
    gene_ids: String,
}

/// Decode, select, write. The output destination is only touched once the
/// input has been decoded, so a bad input never clobbers an existing file.
fn run(args: Args) -> Result<usize, AppError> {
    let source = InputSource::from_arg(&args.input);
    let reader = source.open()?;
    let document = dataset::decode_reader(reader)?;
    tracing::info!("Decoded {} records", document.len());

    let selector = GeneSelector::from_list(&args.gene_ids);
    let tuples = extractors::extract(&document, &selector);

    let sink = OutputSink::from_arg(&args.output);
    let mut writer = sink.create()?;
    writer.write_all(&tuples)?;
    Ok(writer.finish()?)
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Run the pipeline; any failure is terminal
    match run(args) {
        Ok(count) => {
            tracing::info!("Wrote {} expression lines", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e)
        }
    }
}
