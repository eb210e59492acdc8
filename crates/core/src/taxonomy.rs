use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Emotional tone of a single response.
///
/// Declaration order is the canonical tie-break order used everywhere a
/// "dominant" mood is picked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Positive,
    Negative,
    Anxious,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Positive, Mood::Negative, Mood::Anxious, Mood::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Anxious => "anxious",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Mood::Positive),
            "negative" => Ok(Mood::Negative),
            "anxious" => Ok(Mood::Anxious),
            "neutral" => Ok(Mood::Neutral),
            other => Err(format!("unknown mood '{}'", other)),
        }
    }
}

/// Behavioral task category a response can describe. A response may fall
/// into several categories at once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    FinancialManagement,
    Shopping,
    Planning,
    Research,
    Transportation,
    Other,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 6] = [
        TaskCategory::FinancialManagement,
        TaskCategory::Shopping,
        TaskCategory::Planning,
        TaskCategory::Research,
        TaskCategory::Transportation,
        TaskCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::FinancialManagement => "financial_management",
            TaskCategory::Shopping => "shopping",
            TaskCategory::Planning => "planning",
            TaskCategory::Research => "research",
            TaskCategory::Transportation => "transportation",
            TaskCategory::Other => "other",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-mood response counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    pub positive: usize,
    pub negative: usize,
    pub anxious: usize,
    pub neutral: usize,
}

/// Per-mood share of responses, in percent (0..=100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodPercentages {
    pub positive: f64,
    pub negative: f64,
    pub anxious: f64,
    pub neutral: f64,
}

impl MoodCounts {
    pub fn record(&mut self, mood: Mood) {
        *self.slot(mood) += 1;
    }

    pub fn get(&self, mood: Mood) -> usize {
        match mood {
            Mood::Positive => self.positive,
            Mood::Negative => self.negative,
            Mood::Anxious => self.anxious,
            Mood::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.anxious + self.neutral
    }

    /// Majority mood. Ties resolve in [`Mood::ALL`] order; `None` when nothing
    /// has been recorded.
    pub fn dominant(&self) -> Option<Mood> {
        let mut best: Option<(Mood, usize)> = None;
        for mood in Mood::ALL {
            let count = self.get(mood);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((mood, count)),
            }
        }
        best.map(|(mood, _)| mood)
    }

    pub fn percentages(&self) -> MoodPercentages {
        let total = self.total();
        let pct = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };
        MoodPercentages {
            positive: pct(self.positive),
            negative: pct(self.negative),
            anxious: pct(self.anxious),
            neutral: pct(self.neutral),
        }
    }

    fn slot(&mut self, mood: Mood) -> &mut usize {
        match mood {
            Mood::Positive => &mut self.positive,
            Mood::Negative => &mut self.negative,
            Mood::Anxious => &mut self.anxious,
            Mood::Neutral => &mut self.neutral,
        }
    }
}

impl MoodPercentages {
    pub fn get(&self, mood: Mood) -> f64 {
        match mood {
            Mood::Positive => self.positive,
            Mood::Negative => self.negative,
            Mood::Anxious => self.anxious,
            Mood::Neutral => self.neutral,
        }
    }
}
