// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to refinement prompts so the answer can replace a form field as-is.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\n\nOutput ONLY the refined text. \
    Do NOT wrap it in quotes. Do NOT add headings, preambles, or explanations.";
