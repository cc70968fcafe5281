//! Letter grade policy.
//!
//! # Invariants
//! - Grace marks are clamped to `>= 0` and adjusted marks never exceed
//!   `MAX_MARK`.
//! - Thresholds are inclusive lower bounds evaluated from the top tier down.

use crate::model::person::MAX_MARK;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Letter classification derived from a mark average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

const GRADE_THRESHOLDS: &[(f64, Grade)] = &[
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::B),
    (60.0, Grade::C),
    (50.0, Grade::D),
];

impl Grade {
    /// Maps an already-computed average onto the grade table.
    pub fn from_average(average: f64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(lower_bound, _)| average >= *lower_bound)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean of `marks` after adding `grace_marks_each` to every mark.
///
/// Negative grace counts as zero. Empty input averages to `0.0`.
pub fn adjusted_average(marks: &[i32], grace_marks_each: i32) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let grace = grace_marks_each.max(0);
    let total: i64 = marks
        .iter()
        .map(|mark| i64::from(mark.saturating_add(grace).min(MAX_MARK)))
        .sum();
    total as f64 / marks.len() as f64
}

/// Computes the letter grade for `marks` with per-mark grace.
pub fn grade(marks: &[i32], grace_marks_each: i32) -> Grade {
    Grade::from_average(adjusted_average(marks, grace_marks_each))
}

/// Computes the letter grade without grace marks.
pub fn grade_default(marks: &[i32]) -> Grade {
    grade(marks, 0)
}
