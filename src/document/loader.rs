use super::{Document, DocumentError, Metadata};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

/// File extensions the loader understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &["md", "txt", "yaml", "yml", "json"];

static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").expect("valid front matter regex")
});

static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x08\x0B-\x1F\x7F-\x9F]").expect("valid control char regex")
});

static HTML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&[a-z]+;").expect("valid entity regex"));

static INLINE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid whitespace regex"));

static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?\n ?").expect("valid newline regex"));

/// Shape of a `.yaml`/`.json` document file
#[derive(Debug, Default, Deserialize)]
struct StructuredDocument {
    #[serde(default)]
    content: String,
    #[serde(default)]
    metadata: Metadata,
    #[serde(rename = "documentId")]
    document_id: Option<String>,
}

/// Load a single file as a document
///
/// The document id defaults to the file name. Every document gets `source`,
/// `type`, `filename` and `ingested_at` metadata; front matter or an explicit
/// `metadata` mapping in the file is merged over those.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let filename = file_name(path);
    load_with_id(path, filename)
}

/// Load every supported file under `root`, in file name order
///
/// Files with unsupported extensions are skipped. Document ids are the
/// `/`-separated path relative to `root`, so they stay unique across
/// subdirectories.
pub fn load_directory(root: &Path) -> Result<Vec<Document>, DocumentError> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = entry.map_err(|e| DocumentError::Io {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if !is_supported(path) {
            tracing::debug!(path = %path.display(), "Skipping unsupported file");
            continue;
        }

        let id = path
            .strip_prefix(root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        documents.push(load_with_id(path, id)?);
    }

    tracing::debug!(root = %root.display(), count = documents.len(), "Loaded directory");
    Ok(documents)
}

/// Check whether the loader has a parser for this path
pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension(path).as_str())
}

/// Normalize extracted text before chunking
///
/// Strips control characters (newlines and tabs survive as whitespace),
/// replaces HTML entities with a space and collapses runs of spaces. Line
/// structure is preserved so headers and paragraphs stay detectable.
pub fn clean_content(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = CONTROL_CHARS.replace_all(&text, "");
    let text = HTML_ENTITY.replace_all(&text, " ");
    let text = INLINE_SPACE.replace_all(&text, " ");
    let text = SPACE_AROUND_NEWLINE.replace_all(&text, "\n");
    text.trim().to_string()
}

fn load_with_id(path: &Path, id: String) -> Result<Document, DocumentError> {
    let ext = extension(path);
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(DocumentError::UnsupportedFileType(path.display().to_string()));
    }

    let raw = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document = Document::new(id, String::new())
        .with_metadata("source", path.display().to_string())
        .with_metadata("type", ext.clone())
        .with_metadata("filename", file_name(path))
        .with_metadata("ingested_at", chrono::Utc::now().to_rfc3339());

    let (content, extra) = match ext.as_str() {
        "md" => split_front_matter(path, &raw),
        "txt" => (raw, Metadata::new()),
        "yaml" | "yml" => {
            let parsed: StructuredDocument =
                serde_yaml::from_str(&raw).map_err(|source| DocumentError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?;
            if let Some(id) = parsed.document_id {
                document.id = id;
            }
            (parsed.content, parsed.metadata)
        }
        _ => {
            let parsed: StructuredDocument =
                serde_json::from_str(&raw).map_err(|source| DocumentError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            if let Some(id) = parsed.document_id {
                document.id = id;
            }
            (parsed.content, parsed.metadata)
        }
    };

    document.metadata.extend(extra);
    document.content = clean_content(&content);

    tracing::debug!(
        id = %document.id,
        path = %path.display(),
        content_len = document.content.len(),
        "Loaded document"
    );

    Ok(document)
}

/// Separate YAML front matter from a markdown body
fn split_front_matter(path: &Path, raw: &str) -> (String, Metadata) {
    let Some(caps) = FRONT_MATTER.captures(raw) else {
        return (raw.to_string(), Metadata::new());
    };

    let body_start = caps.get(0).map_or(0, |m| m.end());
    let yaml = caps.get(1).map_or("", |m| m.as_str());

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Object(map)) => (raw[body_start..].to_string(), map),
        Ok(Value::Null) => (raw[body_start..].to_string(), Metadata::new()),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Front matter is not a mapping, keeping it as text");
            (raw.to_string(), Metadata::new())
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse front matter, keeping it as text");
            (raw.to_string(), Metadata::new())
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
