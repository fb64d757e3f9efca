mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use ragchunk::{Chunker, load_directory, load_document};
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use crate::cli::CliArgs;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = args.chunker_config()?;
    let start_time = Instant::now();

    // Step 1: load documents
    let documents = if args.path.is_dir() {
        load_directory(&args.path)
    } else {
        load_document(&args.path).map(|doc| vec![doc])
    }
    .with_context(|| format!("failed to load {}", args.path.display()))?;

    // Step 2: chunk
    let chunker = Chunker::new(config);
    let chunks = chunker
        .chunk_documents(&documents)
        .context("failed to chunk documents")?;

    // Step 3: emit one JSON chunk per line
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for chunk in &chunks {
        serde_json::to_writer(&mut out, chunk)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    if args.summary {
        for document in &documents {
            let count = chunks.iter().filter(|c| c.document_id == document.id).count();
            eprintln!("  {} - {} chunks", document.id, count);
        }
        eprintln!(
            "✓ {} documents, {} chunks [{:.2}s]",
            documents.len(),
            chunks.len(),
            start_time.elapsed().as_secs_f64()
        );
    }

    tracing::info!(
        documents = documents.len(),
        chunks = chunks.len(),
        "Chunking complete"
    );

    Ok(())
}
