//! Rating and colour bands for presenting scores.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent Sustainability",
            Rating::Good => "Good Sustainability",
            Rating::Average => "Average Sustainability",
            Rating::Poor => "Poor Sustainability",
        }
    }
}

/// ≥8 Excellent, ≥6 Good, ≥4 Average, else Poor.
pub fn classify(score: f64) -> Rating {
    if score >= 8.0 {
        Rating::Excellent
    } else if score >= 6.0 {
        Rating::Good
    } else if score >= 4.0 {
        Rating::Average
    } else {
        Rating::Poor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

impl ScoreColor {
    pub fn hex(self) -> &'static str {
        match self {
            ScoreColor::Green => "#28a745",
            ScoreColor::Yellow => "#ffc107",
            ScoreColor::Red => "#dc3545",
        }
    }
}

/// ≥7 Green, ≥4 Yellow, else Red.
pub fn colorize(score: f64) -> ScoreColor {
    if score >= 7.0 {
        ScoreColor::Green
    } else if score >= 4.0 {
        ScoreColor::Yellow
    } else {
        ScoreColor::Red
    }
}
