//! Score extraction — turns a model's loosely formatted `Parameter: Score`
//! reply into a validated `ScoreTable`.
//!
//! Parsing is tolerant: any line that does not yield a number is skipped,
//! the function as a whole never fails.

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Ordered mapping from parameter label to a score in `[0, 10]`.
///
/// Keys are unique and keep the position of their first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(String, f64)>,
}

impl ScoreTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, score)| *score)
    }

    /// Last write wins; an overwritten key stays where it first appeared.
    fn insert(&mut self, parameter: String, score: f64) {
        match self.entries.iter_mut().find(|(name, _)| *name == parameter) {
            Some(existing) => existing.1 = score,
            None => self.entries.push((parameter, score)),
        }
    }
}

/// Parses model output into a `ScoreTable`.
///
/// A line contributes only if it holds exactly one `:`, has a non-empty key,
/// and its value reduces to a parseable number. Values are clamped to `[0, 10]`.
pub fn extract(text: &str) -> ScoreTable {
    let mut table = ScoreTable::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = split_single_colon(line) else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let Ok(score) = sanitize_number(value.trim()).parse::<f64>() else {
            continue;
        };

        table.insert(key.to_string(), score.clamp(MIN_SCORE, MAX_SCORE));
    }

    table
}

fn split_single_colon(line: &str) -> Option<(&str, &str)> {
    if line.matches(':').count() != 1 {
        return None;
    }
    line.split_once(':')
}

/// Keeps ASCII digits and `.`. A `-` survives only as the first kept
/// character and only when a digit or `.` follows it directly.
fn sanitize_number(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() || c == '.' {
            out.push(c);
        } else if c == '-' && out.is_empty() {
            if let Some(next) = chars.peek() {
                if next.is_ascii_digit() || *next == '.' {
                    out.push(c);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(table: &ScoreTable) -> Vec<(&str, f64)> {
        table.iter().collect()
    }

    fn score_of(table: &ScoreTable, parameter: &str) -> Option<f64> {
        table
            .iter()
            .find(|(name, _)| *name == parameter)
            .map(|(_, score)| score)
    }

    #[test]
    fn test_single_line() {
        assert_eq!(pairs(&extract("Toxicity: 3")), vec![("Toxicity", 3.0)]);
    }

    #[test]
    fn test_clamps_above_range() {
        assert_eq!(pairs(&extract("Toxicity: 13")), vec![("Toxicity", 10.0)]);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(pairs(&extract("Toxicity: -2")), vec![("Toxicity", 0.0)]);
    }

    #[test]
    fn test_detached_minus_is_dropped() {
        assert_eq!(pairs(&extract("Toxicity: - 4")), vec![("Toxicity", 4.0)]);
    }

    #[test]
    fn test_inner_minus_is_dropped() {
        // Ranges collapse the same way other stray characters do.
        assert_eq!(pairs(&extract("Toxicity: 7-8")), vec![("Toxicity", 10.0)]);
    }

    #[test]
    fn test_two_colons_rejected() {
        assert!(extract("bad line with: two: colons").is_empty());
    }

    #[test]
    fn test_no_colon_rejected() {
        assert!(extract("Toxicity 3").is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        assert_eq!(pairs(&extract("Key1: 5\nKey1: 8")), vec![("Key1", 8.0)]);
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let table = extract("A: 1\nB: 2\nA: 3");
        assert_eq!(pairs(&table), vec![("A", 3.0), ("B", 2.0)]);
    }

    #[test]
    fn test_strips_units_and_words() {
        let table = extract("Environmental Impact: 6/ \nToxicity: about 4.5 points");
        assert_eq!(score_of(&table, "Environmental Impact"), Some(6.0));
        assert_eq!(score_of(&table, "Toxicity"), Some(4.5));
    }

    #[test]
    fn test_unparseable_values_skipped() {
        let table = extract("A: high\nB: 1.2.3\nC: .\nD: 7");
        assert_eq!(pairs(&table), vec![("D", 7.0)]);
    }

    #[test]
    fn test_empty_key_skipped() {
        assert!(extract(": 5").is_empty());
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let table = extract("\r\n  Sourcing and Origin: 8  \r\n\r\nHealth and Safety: 5\r\n");
        assert_eq!(
            pairs(&table),
            vec![("Sourcing and Origin", 8.0), ("Health and Safety", 5.0)]
        );
    }

    #[test]
    fn test_realistic_model_reply() {
        let reply = "Here are the scores:\n\
            - Environmental Impact: 6\n\
            - Supply Chain Responsibility: 5\n\
            Note: the text mentions no certifications.\n\
            Product Lifecycle: 4 out of ";
        let table = extract(reply);
        assert_eq!(score_of(&table, "- Environmental Impact"), Some(6.0));
        assert_eq!(score_of(&table, "- Supply Chain Responsibility"), Some(5.0));
        assert_eq!(score_of(&table, "Product Lifecycle"), Some(4.0));
        // "Here are the scores:" has an empty value, the note has no number
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_every_score_in_range() {
        let inputs = [
            "a: 0", "b: 10", "c: 10.0001", "d: 99999", "e: -0.5", "f: 0.0001",
            "g: 3e5", "h: -.5", "i: 1e-3", "j: 5.",
        ];
        for input in inputs {
            for (_, score) in extract(input).iter() {
                assert!(
                    (MIN_SCORE..=MAX_SCORE).contains(&score),
                    "{input} produced {score}"
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
    }
}
