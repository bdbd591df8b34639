//! Loading corpora and alignment memory from disk

use crate::error::{MtError, MtResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;
use wordmt_align::CorpusPair;

/// One approved alignment in text form, as stored in memory files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub source: String,
    pub target: String,
}

fn read_file(path: &Path) -> MtResult<String> {
    fs::read_to_string(path).map_err(|e| {
        MtError::LoadError(format!("Failed to read file '{}': {}", path.display(), e))
    })
}

/// Load a corpus from a JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// [
///     ["Βίβλος γενέσεως", "The book of the genealogy"],
///     ["υἱοῦ Δαυὶδ", "son of David"]
/// ]
/// ```
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// - File read errors
/// - Invalid JSON, or a root that is not an array of string pairs
pub fn load_corpus_from_file(path: &Path) -> MtResult<Vec<CorpusPair>> {
    let content = read_file(path)?;
    let pairs: Vec<(String, String)> = serde_json::from_str(&content).map_err(|e| {
        MtError::LoadError(format!(
            "Failed to parse corpus JSON from '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(pairs.into_iter().map(CorpusPair::from).collect())
}

/// Load a corpus from two line-aligned plain text files
///
/// Line `n` of the source file is paired with line `n` of the target file.
/// Pairs where both lines are blank are skipped.
///
/// # Errors
/// - File read errors
/// - The files have a different number of lines
pub fn load_corpus_from_parallel_files(
    source_path: &Path,
    target_path: &Path,
) -> MtResult<Vec<CorpusPair>> {
    let source = read_file(source_path)?;
    let target = read_file(target_path)?;

    let source_lines: Vec<&str> = source.lines().collect();
    let target_lines: Vec<&str> = target.lines().collect();
    if source_lines.len() != target_lines.len() {
        return Err(MtError::LoadError(format!(
            "Line count mismatch: '{}' has {} lines, '{}' has {}",
            source_path.display(),
            source_lines.len(),
            target_path.display(),
            target_lines.len()
        )));
    }

    let mut pairs = Vec::with_capacity(source_lines.len());
    for (line, (s, t)) in source_lines.iter().zip(target_lines.iter()).enumerate() {
        let (s, t) = (s.trim(), t.trim());
        if s.is_empty() && t.is_empty() {
            continue;
        }
        if s.is_empty() || t.is_empty() {
            warn!(
                line = line + 1,
                "Half-empty sentence pair in parallel corpus"
            );
        }
        pairs.push(CorpusPair::new(s, t));
    }
    Ok(pairs)
}

/// Load alignment memory from a JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// [
///     { "source": "Βίβλος", "target": "book" },
///     { "source": "γενέσεως", "target": "genealogy" }
/// ]
/// ```
///
/// # Errors
/// - File read errors
/// - Invalid JSON, or entries missing `source` or `target`
pub fn load_alignment_memory_from_file(path: &Path) -> MtResult<Vec<MemoryEntry>> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| {
        MtError::LoadError(format!(
            "Failed to parse alignment memory JSON from '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_corpus_from_file() {
        let file = temp_file(r#"[["Βίβλος γενέσεως", "The book of the genealogy"], ["a", "b"]]"#);
        let corpus = load_corpus_from_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(
            corpus[0],
            CorpusPair::new("Βίβλος γενέσεως", "The book of the genealogy")
        );
    }

    #[test]
    fn test_load_corpus_invalid_json() {
        let file = temp_file(r#"{"not": "an array"}"#);
        let result = load_corpus_from_file(file.path());
        assert!(matches!(result, Err(MtError::LoadError(_))));
    }

    #[test]
    fn test_load_corpus_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_corpus_from_file(&dir.path().join("missing.json"));
        match result {
            Err(MtError::LoadError(msg)) => assert!(msg.contains("missing.json")),
            other => panic!("expected LoadError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_parallel_files() {
        let source = temp_file("Βίβλος γενέσεως\n\nυἱοῦ Δαυὶδ\n");
        let target = temp_file("The book of the genealogy\n\nson of David\n");
        let corpus = load_corpus_from_parallel_files(source.path(), target.path()).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[1], CorpusPair::new("υἱοῦ Δαυὶδ", "son of David"));
    }

    #[test]
    fn test_load_parallel_files_line_mismatch() {
        let source = temp_file("one\ntwo\n");
        let target = temp_file("uno\n");
        let result = load_corpus_from_parallel_files(source.path(), target.path());
        assert!(matches!(result, Err(MtError::LoadError(_))));
    }

    #[test]
    fn test_load_alignment_memory() {
        let file = temp_file(
            r#"[{"source": "Βίβλος", "target": "book"}, {"source": "γενέσεως", "target": "genealogy"}]"#,
        );
        let memory = load_alignment_memory_from_file(file.path()).unwrap();
        assert_eq!(memory.len(), 2);
        assert_eq!(
            memory[0],
            MemoryEntry {
                source: "Βίβλος".to_string(),
                target: "book".to_string()
            }
        );
    }

    #[test]
    fn test_load_alignment_memory_missing_field() {
        let file = temp_file(r#"[{"source": "Βίβλος"}]"#);
        let result = load_alignment_memory_from_file(file.path());
        assert!(matches!(result, Err(MtError::LoadError(_))));
    }
}
