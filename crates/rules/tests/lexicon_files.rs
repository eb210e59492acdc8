//! Loading lexicon documents from disk.

use std::fs;
use std::path::Path;

use diarylens_core::{Mood, TaskCategory};
use diarylens_rules::{load_lexicon, Lexicon, LexiconError};
use tempfile::TempDir;

const CUSTOM_LEXICON_YAML: &str = r#"
apiVersion: v1
kind: Lexicon
metadata:
  id: commuter-study
  name: Commuter study
spec:
  stopwords: [the, a, and]
  negators: [not, never]
  tasks:
    transportation: [tram, bike share]
  themes:
    - pattern: bike share
      theme: Bike Sharing
"#;

fn write_temp(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir.path().join("lexicon.yml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn load_custom_lexicon_from_file() {
    let (_dir, path) = write_temp(CUSTOM_LEXICON_YAML);
    let lex = load_lexicon(&path).unwrap();

    assert_eq!(lex.name, "commuter-study");
    assert_eq!(lex.stopwords.len(), 3);
    assert!(!lex.is_stopword("my"), "replaced stopword list should not keep builtins");
    assert!(lex.is_negator("never"));
    assert!(!lex.is_negator("no"));
    assert_eq!(
        lex.task_indicators(TaskCategory::Transportation),
        ["tram".to_string(), "bike share".to_string()]
    );
    assert_eq!(lex.themes.len(), 1);
    assert_eq!(lex.themes[0].theme, "Bike Sharing");
}

#[test]
fn untouched_tables_match_builtin() {
    let (_dir, path) = write_temp(CUSTOM_LEXICON_YAML);
    let lex = load_lexicon(&path).unwrap();
    let builtin = Lexicon::builtin();

    assert_eq!(lex.pain_indicators, builtin.pain_indicators);
    assert_eq!(lex.moods, builtin.moods);
    assert_eq!(lex.emotion_words(Mood::Neutral), builtin.emotion_words(Mood::Neutral));
    assert_eq!(
        lex.task_indicators(TaskCategory::Shopping),
        builtin.task_indicators(TaskCategory::Shopping)
    );
}

#[test]
fn shipped_diary_lexicon_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/lexicon/diary-lexicon.yml");
    let lex = load_lexicon(&path).unwrap();

    assert_eq!(lex.name, "diary-lexicon");
    assert!(lex.is_stopword("honestly"));
    assert!(lex.is_stopword("the"), "extra stopwords extend the builtin list");
    assert!(lex.mood_indicators(Mood::Positive).contains(&"relieved".to_string()));
    assert!(lex.themes.iter().any(|t| t.pattern == "rent"));
}

#[test]
fn wrong_kind_is_invalid() {
    let yaml = CUSTOM_LEXICON_YAML.replace("kind: Lexicon", "kind: AnomalyRule");
    let (_dir, path) = write_temp(&yaml);
    let err = load_lexicon(&path).unwrap_err();
    assert!(matches!(err, LexiconError::Invalid(_)), "got {err:?}");
}

#[test]
fn unknown_field_is_a_yaml_error() {
    let yaml = format!("{CUSTOM_LEXICON_YAML}  synonyms: {{}}\n");
    let (_dir, path) = write_temp(&yaml);
    let err = load_lexicon(&path).unwrap_err();
    assert!(matches!(err, LexiconError::Yaml(_)), "got {err:?}");
}
