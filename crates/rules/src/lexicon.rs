//! Lexicon rule kind: stopwords, contractions, classifier indicators, cluster
//! themes and summary emotion words.

use std::collections::HashSet;

use diarylens_core::{Mood, TaskCategory};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::loader::LexiconError;

pub const API_VERSION: &str = "v1";
pub const KIND: &str = "Lexicon";

// ── YAML-level types ────────────────────────────────────────────────

/// Top-level Lexicon document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexiconDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: LexiconMetadata,
    #[serde(default)]
    pub spec: LexiconSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexiconMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// The `spec` section. Every table is optional; an absent table keeps
/// the built-in one. Mood, task and emotion tables override per key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexiconSpec {
    /// Replaces the built-in stopword list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<Vec<String>>,
    /// Added on top of whichever stopword list is in effect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_stopwords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractions: Option<ContractionTables>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub moods: IndexMap<Mood, Vec<String>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tasks: IndexMap<TaskCategory, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_indicators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<ThemeRule>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub emotions: IndexMap<Mood, Vec<String>>,
}

/// Contraction expansions, applied at the end of a token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContractionTables {
    /// Whole-token forms such as `won't`, tried before the suffixes.
    #[serde(default)]
    pub words: IndexMap<String, String>,
    /// Token-final forms such as `n't`, tried in order.
    #[serde(default)]
    pub suffixes: IndexMap<String, String>,
}

/// Phrase pattern → human-readable cluster theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThemeRule {
    pub pattern: String,
    pub theme: String,
}

// ── Compiled (hot-path) types ───────────────────────────────────────

/// Immutable lookup tables shared by every stage of an analysis run.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Document id, or `"builtin"`.
    pub name: String,
    pub stopwords: HashSet<String>,
    pub negators: HashSet<String>,
    pub word_contractions: Vec<(String, String)>,
    pub suffix_contractions: Vec<(String, String)>,
    /// Mood → whole-word indicators, in positive/negative/anxious order.
    pub moods: IndexMap<Mood, Vec<String>>,
    /// Category → whole-word indicators, in [`TaskCategory::ALL`] order.
    pub tasks: IndexMap<TaskCategory, Vec<String>>,
    /// Substring indicators of a pain point.
    pub pain_indicators: Vec<String>,
    pub themes: Vec<ThemeRule>,
    /// Mood → substring emotion words used for cluster summaries.
    pub emotions: IndexMap<Mood, Vec<String>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Lexicon {
    /// Tables shipped with the engine.
    pub fn builtin() -> Self {
        let mut moods = IndexMap::new();
        moods.insert(Mood::Positive, owned(defaults::POSITIVE_MOOD));
        moods.insert(Mood::Negative, owned(defaults::NEGATIVE_MOOD));
        moods.insert(Mood::Anxious, owned(defaults::ANXIOUS_MOOD));

        let mut tasks = IndexMap::new();
        tasks.insert(TaskCategory::FinancialManagement, owned(defaults::FINANCIAL_TASKS));
        tasks.insert(TaskCategory::Shopping, owned(defaults::SHOPPING_TASKS));
        tasks.insert(TaskCategory::Planning, owned(defaults::PLANNING_TASKS));
        tasks.insert(TaskCategory::Research, owned(defaults::RESEARCH_TASKS));
        tasks.insert(TaskCategory::Transportation, owned(defaults::TRANSPORTATION_TASKS));

        let mut emotions = IndexMap::new();
        emotions.insert(Mood::Positive, owned(defaults::POSITIVE_EMOTIONS));
        emotions.insert(Mood::Negative, owned(defaults::NEGATIVE_EMOTIONS));
        emotions.insert(Mood::Anxious, owned(defaults::ANXIOUS_EMOTIONS));
        emotions.insert(Mood::Neutral, owned(defaults::NEUTRAL_EMOTIONS));

        Self {
            name: "builtin".to_string(),
            stopwords: defaults::STOPWORDS.iter().map(|w| w.to_string()).collect(),
            negators: defaults::NEGATORS.iter().map(|w| w.to_string()).collect(),
            word_contractions: owned_pairs(defaults::WORD_CONTRACTIONS),
            suffix_contractions: owned_pairs(defaults::SUFFIX_CONTRACTIONS),
            moods,
            tasks,
            pain_indicators: owned(defaults::PAIN_INDICATORS),
            themes: defaults::THEMES
                .iter()
                .map(|(pattern, theme)| ThemeRule {
                    pattern: pattern.to_string(),
                    theme: theme.to_string(),
                })
                .collect(),
            emotions,
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }

    pub fn mood_indicators(&self, mood: Mood) -> &[String] {
        self.moods.get(&mood).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task_indicators(&self, category: TaskCategory) -> &[String] {
        self.tasks.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn emotion_words(&self, mood: Mood) -> &[String] {
        self.emotions.get(&mood).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Lowercase and trim every entry, rejecting blanks.
fn clean_list(table: &str, words: &[String]) -> Result<Vec<String>, LexiconError> {
    words
        .iter()
        .map(|w| {
            let w = w.trim().to_lowercase();
            if w.is_empty() {
                Err(LexiconError::Invalid(format!("{table}: empty entry")))
            } else {
                Ok(w)
            }
        })
        .collect()
}

fn clean_pairs(
    table: &str,
    pairs: &IndexMap<String, String>,
) -> Result<Vec<(String, String)>, LexiconError> {
    pairs
        .iter()
        .map(|(from, to)| {
            let from = from.trim().to_lowercase().replace('\u{2019}', "'");
            if from.is_empty() {
                return Err(LexiconError::Invalid(format!("{table}: empty contraction")));
            }
            Ok((from, to.trim().to_lowercase()))
        })
        .collect()
}

/// Rebuild `map` in `order`, keeping only keys present.
fn in_order<K: Copy + std::hash::Hash + Eq, V>(
    mut map: IndexMap<K, V>,
    order: &[K],
) -> IndexMap<K, V> {
    order
        .iter()
        .filter_map(|k| map.swap_remove(k).map(|v| (*k, v)))
        .collect()
}

impl LexiconDocument {
    /// Validate the document and overlay it onto the built-in tables.
    pub fn compile(&self) -> Result<Lexicon, LexiconError> {
        if self.api_version != API_VERSION {
            return Err(LexiconError::Invalid(format!(
                "unsupported apiVersion '{}', expected '{}'",
                self.api_version, API_VERSION
            )));
        }
        if self.kind != KIND {
            return Err(LexiconError::Invalid(format!(
                "unexpected kind '{}', expected '{}'",
                self.kind, KIND
            )));
        }

        let spec = &self.spec;
        let mut lexicon = Lexicon::builtin();
        lexicon.name = self.metadata.id.clone();

        if let Some(stopwords) = &spec.stopwords {
            lexicon.stopwords = clean_list("stopwords", stopwords)?.into_iter().collect();
        }
        lexicon
            .stopwords
            .extend(clean_list("extra_stopwords", &spec.extra_stopwords)?);

        if let Some(negators) = &spec.negators {
            lexicon.negators = clean_list("negators", negators)?.into_iter().collect();
        }

        if let Some(contractions) = &spec.contractions {
            lexicon.word_contractions = clean_pairs("contractions.words", &contractions.words)?;
            lexicon.suffix_contractions =
                clean_pairs("contractions.suffixes", &contractions.suffixes)?;
        }

        for (mood, words) in &spec.moods {
            if *mood == Mood::Neutral {
                return Err(LexiconError::Invalid(
                    "moods: neutral is the fallback and takes no indicators".to_string(),
                ));
            }
            lexicon
                .moods
                .insert(*mood, clean_list(&format!("moods.{mood}"), words)?);
        }
        lexicon.moods = in_order(
            lexicon.moods,
            &[Mood::Positive, Mood::Negative, Mood::Anxious],
        );

        for (category, words) in &spec.tasks {
            if *category == TaskCategory::Other {
                return Err(LexiconError::Invalid(
                    "tasks: other is the fallback and takes no indicators".to_string(),
                ));
            }
            lexicon
                .tasks
                .insert(*category, clean_list(&format!("tasks.{category}"), words)?);
        }
        lexicon.tasks = in_order(lexicon.tasks, &TaskCategory::ALL);

        if let Some(pain) = &spec.pain_indicators {
            lexicon.pain_indicators = clean_list("pain_indicators", pain)?;
        }

        if let Some(themes) = &spec.themes {
            lexicon.themes = themes
                .iter()
                .map(|rule| {
                    let pattern = rule.pattern.trim().to_lowercase();
                    let theme = rule.theme.trim().to_string();
                    if pattern.is_empty() || theme.is_empty() {
                        return Err(LexiconError::Invalid(
                            "themes: pattern and theme must be non-empty".to_string(),
                        ));
                    }
                    Ok(ThemeRule { pattern, theme })
                })
                .collect::<Result<_, _>>()?;
        }

        for (mood, words) in &spec.emotions {
            lexicon
                .emotions
                .insert(*mood, clean_list(&format!("emotions.{mood}"), words)?);
        }
        lexicon.emotions = in_order(lexicon.emotions, &Mood::ALL);

        Ok(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIARY_LEXICON: &str = include_str!("../../../data/lexicon/diary-lexicon.yml");

    fn doc(spec: &str) -> LexiconDocument {
        let yaml = format!(
            "apiVersion: v1\nkind: Lexicon\nmetadata:\n  id: test\n  name: Test\nspec:\n{spec}"
        );
        serde_yaml::from_str(&yaml).unwrap()
    }

    #[test]
    fn builtin_tables_are_populated() {
        let lex = Lexicon::builtin();
        assert!(lex.is_stopword("the"));
        assert!(lex.is_negator("not"));
        assert!(lex.mood_indicators(Mood::Positive).contains(&"happy".to_string()));
        assert!(lex.mood_indicators(Mood::Neutral).is_empty());
        assert!(lex.task_indicators(TaskCategory::Other).is_empty());
        assert_eq!(lex.emotions.len(), 4);
    }

    #[test]
    fn parse_diary_lexicon_yaml() {
        let rule: LexiconDocument = serde_yaml::from_str(DIARY_LEXICON).unwrap();
        assert_eq!(rule.kind, "Lexicon");
        assert!(rule.spec.themes.as_ref().is_some_and(|t| !t.is_empty()));
    }

    #[test]
    fn compile_keeps_builtin_tables_for_absent_sections() {
        let compiled = doc("  extra_stopwords: [Honestly]\n").compile().unwrap();
        assert_eq!(compiled.name, "test");
        assert!(compiled.is_stopword("honestly"));
        assert!(compiled.is_stopword("the"));
        assert_eq!(compiled.themes, Lexicon::builtin().themes);
    }

    #[test]
    fn compile_overrides_mood_per_key_and_keeps_order() {
        let compiled = doc("  moods:\n    anxious: [Jittery]\n    positive: [chuffed]\n")
            .compile()
            .unwrap();
        let order: Vec<Mood> = compiled.moods.keys().copied().collect();
        assert_eq!(order, vec![Mood::Positive, Mood::Negative, Mood::Anxious]);
        assert_eq!(compiled.mood_indicators(Mood::Anxious), ["jittery".to_string()]);
        assert_eq!(
            compiled.mood_indicators(Mood::Negative),
            Lexicon::builtin().mood_indicators(Mood::Negative)
        );
    }

    #[test]
    fn compile_rejects_neutral_mood_indicators() {
        let err = doc("  moods:\n    neutral: [meh]\n").compile().unwrap_err();
        assert!(matches!(err, LexiconError::Invalid(_)));
    }

    #[test]
    fn compile_rejects_other_task_indicators() {
        let err = doc("  tasks:\n    other: [misc]\n").compile().unwrap_err();
        assert!(matches!(err, LexiconError::Invalid(_)));
    }

    #[test]
    fn compile_rejects_blank_entries() {
        let err = doc("  pain_indicators: ['  ']\n").compile().unwrap_err();
        assert!(matches!(err, LexiconError::Invalid(_)));
    }

    #[test]
    fn compile_rejects_wrong_kind() {
        let mut rule = doc("  negators: [not]\n");
        rule.kind = "FeatureConfig".into();
        assert!(rule.compile().is_err());
        rule.kind = KIND.into();
        rule.api_version = "v2".into();
        assert!(rule.compile().is_err());
    }

    #[test]
    fn unknown_spec_field_is_rejected() {
        let yaml = "apiVersion: v1\nkind: Lexicon\nmetadata:\n  id: x\n  name: X\nspec:\n  colours: [red]\n";
        assert!(serde_yaml::from_str::<LexiconDocument>(yaml).is_err());
    }

    #[test]
    fn contraction_tables_normalize_curly_apostrophes() {
        let compiled = doc("  contractions:\n    words:\n      \"y\u{2019}all\": you all\n    suffixes:\n      \"n't\": not\n")
            .compile()
            .unwrap();
        assert_eq!(
            compiled.word_contractions,
            vec![("y'all".to_string(), "you all".to_string())]
        );
        assert_eq!(compiled.suffix_contractions.len(), 1);
    }

    #[test]
    fn round_trip() {
        let rule: LexiconDocument = serde_yaml::from_str(DIARY_LEXICON).unwrap();
        let serialized = serde_yaml::to_string(&rule).unwrap();
        let rule2: LexiconDocument = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(rule, rule2);
    }
}
