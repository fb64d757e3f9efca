use anyhow::{Context, Result};
use clap::Parser;
use ragchunk::ChunkerConfig;
use std::fs;
use std::path::PathBuf;

/// Split documents into chunks for embedding
#[derive(Parser, Debug)]
#[command(name = "ragchunk", version, about)]
pub struct CliArgs {
    /// File or directory to chunk
    pub path: PathBuf,

    /// Tokens per chunk
    #[arg(long, env = "RAGCHUNK_CHUNK_SIZE")]
    pub chunk_size: Option<usize>,

    /// Tokens shared by consecutive chunks (fixed method)
    #[arg(long, env = "RAGCHUNK_CHUNK_OVERLAP")]
    pub chunk_overlap: Option<usize>,

    /// Chunking method: fixed, recursive or semantic
    #[arg(long = "chunk-method", env = "RAGCHUNK_METHOD")]
    pub method: Option<String>,

    /// JSON file with `chunkSize`, `chunkOverlap` and `method`; flags win
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print per-document chunk counts to stderr
    #[arg(long)]
    pub summary: bool,
}

impl CliArgs {
    /// Merge the config file (if any) with explicit flags
    pub fn chunker_config(&self) -> Result<ChunkerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => ChunkerConfig::default(),
        };

        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(overlap) = self.chunk_overlap {
            config.chunk_overlap = overlap;
        }
        if let Some(method) = &self.method {
            config.method = method.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_flags() {
        let args = CliArgs::parse_from(["ragchunk", "docs"]);
        assert_eq!(args.chunker_config().unwrap(), ChunkerConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chunkSize": 300, "chunkOverlap": 30, "method": "recursive"}}"#).unwrap();

        let args = CliArgs::parse_from([
            "ragchunk",
            "docs",
            "--config",
            file.path().to_str().unwrap(),
            "--chunk-overlap",
            "10",
        ]);
        let config = args.chunker_config().unwrap();

        assert_eq!(config.chunk_size, 300);
        assert_eq!(config.chunk_overlap, 10);
        assert_eq!(config.method, "recursive");
    }

    #[test]
    fn test_method_flag() {
        let args = CliArgs::parse_from(["ragchunk", "a.md", "--chunk-method", "semantic"]);
        assert_eq!(args.chunker_config().unwrap().method, "semantic");
    }
}
