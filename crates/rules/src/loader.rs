//! Filesystem and in-memory loading of Lexicon documents.

use std::fs;
use std::path::Path;

use diarylens_core::DiaryLensError;
use tracing::{debug, info};

use crate::lexicon::{Lexicon, LexiconDocument};

/// Errors that can occur while loading a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document parsed but its contents are unusable.
    #[error("Invalid lexicon: {0}")]
    Invalid(String),
}

impl From<LexiconError> for DiaryLensError {
    fn from(e: LexiconError) -> Self {
        DiaryLensError::Lexicon(e.to_string())
    }
}

/// Parse and compile a lexicon document from YAML text.
pub fn parse_lexicon(yaml: &str) -> Result<Lexicon, LexiconError> {
    let doc: LexiconDocument = serde_yaml::from_str(yaml)?;
    debug!(id = %doc.metadata.id, name = %doc.metadata.name, "parsed lexicon document");
    doc.compile()
}

/// Read, parse and compile a lexicon document from disk.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, LexiconError> {
    let content = fs::read_to_string(path)?;
    let lexicon = parse_lexicon(&content)?;
    info!(
        path = %path.display(),
        lexicon = %lexicon.name,
        stopwords = lexicon.stopwords.len(),
        themes = lexicon.themes.len(),
        "loaded lexicon"
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_document() {
        let yaml = "apiVersion: v1\nkind: Lexicon\nmetadata:\n  id: minimal\n  name: Minimal\n";
        let lex = parse_lexicon(yaml).unwrap();
        assert_eq!(lex.name, "minimal");
        assert_eq!(lex.stopwords, Lexicon::builtin().stopwords);
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let err = parse_lexicon("apiVersion: [v1").unwrap_err();
        assert!(matches!(err, LexiconError::Yaml(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_lexicon(Path::new("/nonexistent/lexicon.yml")).unwrap_err();
        assert!(matches!(err, LexiconError::Io(_)));
    }

    #[test]
    fn converts_into_engine_error() {
        let err: DiaryLensError = LexiconError::Invalid("bad".into()).into();
        assert!(matches!(err, DiaryLensError::Lexicon(msg) if msg.contains("bad")));
    }
}
