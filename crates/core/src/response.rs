use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::taxonomy::{Mood, TaskCategory};

/// A single free-text answer as supplied by the participant store.
///
/// The engine never creates or mutates these; it only derives annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: String,
    #[serde(alias = "participantId")]
    pub participant_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    /// Answer body. `null` and a missing field both read as empty.
    #[serde(default, alias = "response", deserialize_with = "null_as_empty")]
    pub text: String,
    pub date: NaiveDate,
    /// Externally supplied task tags; absent means none.
    #[serde(default)]
    pub tasks: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Response {
    pub fn new(
        id: impl Into<String>,
        participant_id: impl Into<String>,
        question: impl Into<String>,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            participant_id: participant_id.into(),
            question: question.into(),
            text: text.into(),
            date,
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks = tasks.into_iter().map(Into::into).collect();
        self
    }

    /// Text used for keywords, vectors and clustering: the answer, optionally
    /// prefixed with the question that prompted it.
    pub fn analysis_text(&self, include_question: bool) -> String {
        if include_question && !self.question.trim().is_empty() {
            format!("{} {}", self.question, self.text)
        } else {
            self.text.clone()
        }
    }
}

/// A [`Response`] plus everything the engine derives from it in one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedResponse {
    #[serde(flatten)]
    pub response: Response,
    pub normalized_text: String,
    pub mood: Mood,
    pub task_categories: BTreeSet<TaskCategory>,
    pub is_pain_point: bool,
    pub pain_indicators: Vec<String>,
    /// Most frequent terms, most frequent first.
    pub keywords: Vec<String>,
}

impl ClassifiedResponse {
    /// Labels this response contributes to task statistics: its external tags
    /// when it has any, otherwise the classified categories.
    pub fn task_labels(&self) -> Vec<String> {
        if self.response.tasks.is_empty() {
            self.task_categories
                .iter()
                .map(|c| c.as_str().to_string())
                .collect()
        } else {
            let mut seen = BTreeSet::new();
            self.response
                .tasks
                .iter()
                .filter(|t| seen.insert(t.as_str()))
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{"id":"r1","participantId":"p1","response":null,"date":"2024-03-01"}"#;
        let r: Response = serde_json::from_str(json).unwrap();
        assert_eq!(r.participant_id, "p1");
        assert_eq!(r.text, "");
        assert_eq!(r.question, "");
        assert!(r.tasks.is_empty());
    }

    #[test]
    fn analysis_text_includes_question_when_asked() {
        let r = Response::new("r1", "p1", "What did you buy?", "Groceries", date());
        assert_eq!(r.analysis_text(true), "What did you buy? Groceries");
        assert_eq!(r.analysis_text(false), "Groceries");
    }

    #[test]
    fn analysis_text_skips_blank_question() {
        let r = Response::new("r1", "p1", "  ", "Groceries", date());
        assert_eq!(r.analysis_text(true), "Groceries");
    }

    #[test]
    fn task_labels_prefer_external_tags() {
        let base = ClassifiedResponse {
            response: Response::new("r1", "p1", "", "x", date()).with_tasks(["shopping", "shopping"]),
            normalized_text: "x".into(),
            mood: Mood::Neutral,
            task_categories: [TaskCategory::Research].into_iter().collect(),
            is_pain_point: false,
            pain_indicators: vec![],
            keywords: vec![],
        };
        assert_eq!(base.task_labels(), vec!["shopping".to_string()]);

        let mut untagged = base.clone();
        untagged.response.tasks.clear();
        assert_eq!(untagged.task_labels(), vec!["research".to_string()]);
    }
}
