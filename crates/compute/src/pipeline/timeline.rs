use std::collections::BTreeSet;

use chrono::NaiveDate;
use diarylens_core::{ClassifiedResponse, Mood, MoodCounts, TaskCategory};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub response_id: String,
    pub date: NaiveDate,
    pub mood: Mood,
    pub task_categories: BTreeSet<TaskCategory>,
    pub text: String,
}

/// One participant's responses in date order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub participant_id: String,
    pub response_count: usize,
    pub points: Vec<TimelinePoint>,
    pub mood_counts: MoodCounts,
    pub dominant_mood: Mood,
}

/// Group responses by participant (first-appearance order) and sort each
/// group by date; same-day entries keep input order.
pub fn build_timelines(responses: &[ClassifiedResponse]) -> Vec<Timeline> {
    let mut by_participant: IndexMap<&str, Vec<&ClassifiedResponse>> = IndexMap::new();
    for r in responses {
        by_participant
            .entry(r.response.participant_id.as_str())
            .or_default()
            .push(r);
    }

    by_participant
        .into_iter()
        .map(|(participant_id, mut entries)| {
            entries.sort_by_key(|r| r.response.date);

            let mut mood_counts = MoodCounts::default();
            let points: Vec<TimelinePoint> = entries
                .into_iter()
                .map(|r| {
                    mood_counts.record(r.mood);
                    TimelinePoint {
                        response_id: r.response.id.clone(),
                        date: r.response.date,
                        mood: r.mood,
                        task_categories: r.task_categories.clone(),
                        text: r.response.text.clone(),
                    }
                })
                .collect();

            Timeline {
                participant_id: participant_id.to_string(),
                response_count: points.len(),
                points,
                dominant_mood: mood_counts.dominant().unwrap_or(Mood::Neutral),
                mood_counts,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use diarylens_core::Response;

    fn classified(id: &str, pid: &str, day: u32, mood: Mood) -> ClassifiedResponse {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        ClassifiedResponse {
            response: Response::new(id, pid, "", format!("entry {id}"), date),
            normalized_text: String::new(),
            mood,
            task_categories: [TaskCategory::Other].into_iter().collect(),
            is_pain_point: false,
            pain_indicators: vec![],
            keywords: vec![],
        }
    }

    #[test]
    fn groups_by_participant_in_first_seen_order() {
        let timelines = build_timelines(&[
            classified("a", "p2", 3, Mood::Neutral),
            classified("b", "p1", 1, Mood::Positive),
            classified("c", "p2", 1, Mood::Anxious),
        ]);
        let ids: Vec<&str> = timelines.iter().map(|t| t.participant_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
        assert_eq!(timelines[0].response_count, 2);
        assert_eq!(timelines[1].response_count, 1);
    }

    #[test]
    fn points_are_date_sorted_and_stable() {
        let timelines = build_timelines(&[
            classified("late", "p1", 9, Mood::Neutral),
            classified("same-1", "p1", 2, Mood::Negative),
            classified("same-2", "p1", 2, Mood::Negative),
            classified("early", "p1", 1, Mood::Positive),
        ]);
        let order: Vec<&str> = timelines[0]
            .points
            .iter()
            .map(|p| p.response_id.as_str())
            .collect();
        assert_eq!(order, vec!["early", "same-1", "same-2", "late"]);
    }

    #[test]
    fn dominant_mood_is_majority_with_canonical_ties() {
        let timelines = build_timelines(&[
            classified("a", "p1", 1, Mood::Anxious),
            classified("b", "p1", 2, Mood::Negative),
            classified("c", "p1", 3, Mood::Anxious),
            classified("d", "p2", 1, Mood::Neutral),
            classified("e", "p2", 2, Mood::Negative),
        ]);
        assert_eq!(timelines[0].dominant_mood, Mood::Anxious);
        assert_eq!(timelines[0].mood_counts.anxious, 2);
        assert_eq!(timelines[1].dominant_mood, Mood::Negative);
    }

    #[test]
    fn empty_input_has_no_timelines() {
        assert!(build_timelines(&[]).is_empty());
    }
}
