// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Output format instruction appended to every scoring prompt.
/// The score extractor depends on this one-`Parameter: Score`-per-line shape.
pub const SCORE_FORMAT_INSTRUCTION: &str = "\
Provide only the parameter name and score, like this:
Parameter: Score";

/// Renders a bullet list of parameter names, one `- name` per line.
pub fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
