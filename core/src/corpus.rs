//! Loading documents from JSON, JSONL files or a directory of them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub text: String,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// Load every document under `path`. Directories are walked recursively and
/// their `.json`/`.jsonl` files read in path order.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<CorpusDocument>> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        anyhow::bail!("corpus path {} does not exist", path.display());
    }

    let mut docs = Vec::new();
    for file in files {
        let loaded = if extension(&file) == Some("jsonl") { read_jsonl(&file) } else { read_json(&file) };
        docs.extend(loaded.with_context(|| format!("reading corpus file {}", file.display()))?);
    }
    tracing::info!(path = %path.display(), num_docs = docs.len(), "corpus loaded");
    Ok(docs)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

fn read_jsonl(file: &Path) -> Result<Vec<CorpusDocument>> {
    let reader = BufReader::new(File::open(file)?);
    let mut docs = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc = serde_json::from_str(&line).with_context(|| format!("line {}", lineno + 1))?;
        docs.push(doc);
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<CorpusDocument>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<CorpusDocument>, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => anyhow::bail!("expected a document object or an array of documents"),
    };
    Ok(docs)
}
