use std::collections::BTreeSet;

use diarylens_core::TaskCategory;
use diarylens_rules::Lexicon;

use crate::classify::matcher::PhraseMatcher;

/// Every category with at least one indicator hit, or `{Other}`.
pub fn classify_tasks(normalized: &str, lexicon: &Lexicon) -> BTreeSet<TaskCategory> {
    let matcher = PhraseMatcher::new(normalized);
    let mut categories: BTreeSet<TaskCategory> = lexicon
        .tasks
        .iter()
        .filter(|(_, indicators)| matcher.count_hits(indicators) > 0)
        .map(|(category, _)| *category)
        .collect();

    if categories.is_empty() {
        categories.insert(TaskCategory::Other);
    }
    categories
}
