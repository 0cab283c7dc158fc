use crate::analysis::extractor::ScoreTable;

/// Score below which sustainable alternatives are requested.
pub const RECOMMENDATION_THRESHOLD: f64 = 7.0;

/// Arithmetic mean of a table. 0.0 for an empty table.
pub fn mean(table: &ScoreTable) -> f64 {
    if table.is_empty() {
        return 0.0;
    }
    table.scores().sum::<f64>() / table.len() as f64
}

/// Unweighted mean of the three category means.
pub fn overall(company: f64, ingredients: f64, packaging: f64) -> f64 {
    (company + ingredients + packaging) / 3.0
}

pub fn needs_recommendations(overall_score: f64) -> bool {
    overall_score < RECOMMENDATION_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::extract;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&ScoreTable::default()), 0.0);
    }

    #[test]
    fn test_mean_two_values() {
        let table = extract("a: 4\nb: 6");
        assert!((mean(&table) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_equal_inputs() {
        assert!((overall(5.0, 5.0, 5.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_ignores_parameter_counts() {
        // One parameter or five, each category weighs a third.
        let company = mean(&extract("a: 9"));
        let ingredients = mean(&extract("a: 3\nb: 3\nc: 3\nd: 3\ne: 3"));
        let score = overall(company, ingredients, 0.0);
        assert!((score - 4.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_recommendation_threshold_is_exclusive() {
        assert!(needs_recommendations(6.99));
        assert!(!needs_recommendations(7.0));
        assert!(!needs_recommendations(9.5));
    }
}
