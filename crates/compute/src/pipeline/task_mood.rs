use diarylens_core::{ClassifiedResponse, Mood, MoodCounts, MoodPercentages};
use indexmap::IndexMap;
use serde::Serialize;

/// Mood distribution of the responses carrying one task label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskMoodStat {
    pub task: String,
    pub count: usize,
    pub mood_counts: MoodCounts,
    pub mood_percentages: MoodPercentages,
    pub dominant_mood: Mood,
}

/// Task label → mood statistics, in first-observed label order.
///
/// A response counts once under each of its labels: its supplied task tags,
/// or its classified categories when it has no tags.
pub fn task_mood_stats(responses: &[ClassifiedResponse]) -> IndexMap<String, TaskMoodStat> {
    let mut counts: IndexMap<String, MoodCounts> = IndexMap::new();
    for r in responses {
        for label in r.task_labels() {
            counts.entry(label).or_default().record(r.mood);
        }
    }

    counts
        .into_iter()
        .map(|(label, mood_counts)| {
            let stat = TaskMoodStat {
                task: label.clone(),
                count: mood_counts.total(),
                mood_percentages: mood_counts.percentages(),
                dominant_mood: mood_counts.dominant().unwrap_or(Mood::Neutral),
                mood_counts,
            };
            (label, stat)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use diarylens_core::{Response, TaskCategory};

    fn classified(tags: &[&str], categories: &[TaskCategory], mood: Mood) -> ClassifiedResponse {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ClassifiedResponse {
            response: Response::new("r", "p", "", "text", date).with_tasks(tags.iter().copied()),
            normalized_text: "text".into(),
            mood,
            task_categories: categories.iter().copied().collect(),
            is_pain_point: false,
            pain_indicators: vec![],
            keywords: vec![],
        }
    }

    #[test]
    fn shopping_two_thirds_positive() {
        let stats = task_mood_stats(&[
            classified(&["shopping"], &[], Mood::Positive),
            classified(&["shopping"], &[], Mood::Positive),
            classified(&["shopping"], &[], Mood::Negative),
        ]);
        let shopping = &stats["shopping"];
        assert_eq!(shopping.task, "shopping");
        assert_eq!(shopping.count, 3);
        assert!((shopping.mood_percentages.positive - 66.7).abs() < 0.05);
        assert_eq!(shopping.dominant_mood, Mood::Positive);
    }

    #[test]
    fn untagged_responses_use_classified_categories() {
        let stats = task_mood_stats(&[
            classified(&[], &[TaskCategory::Shopping, TaskCategory::Planning], Mood::Anxious),
            classified(&["budget review"], &[TaskCategory::Shopping], Mood::Neutral),
        ]);
        let labels: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["shopping", "planning", "budget review"]);
        assert_eq!(stats["shopping"].count, 1);
    }

    #[test]
    fn percentages_cover_all_moods() {
        let stats = task_mood_stats(&[
            classified(&["a"], &[], Mood::Positive),
            classified(&["a"], &[], Mood::Negative),
            classified(&["a"], &[], Mood::Anxious),
            classified(&["a"], &[], Mood::Neutral),
        ]);
        let pct = stats["a"].mood_percentages;
        for mood in Mood::ALL {
            assert!((pct.get(mood) - 25.0).abs() < 1e-9);
        }
        assert_eq!(stats["a"].dominant_mood, Mood::Positive);
    }
}
