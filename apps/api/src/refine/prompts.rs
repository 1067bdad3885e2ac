// LLM prompt templates for field refinement.
// Placeholders are replaced with `str::replace` before sending.

/// Bio refinement prompt. Replace `{bio}` before sending.
pub const BIO_REFINE_PROMPT_TEMPLATE: &str = r#"You are an expert Cybersecurity Career Coach.
Refine the following professional biography for a GitHub portfolio.
It should be concise (100-150 words), professional, and highlight problem-solving skills, creativity, and a passion for offensive security.

Current Draft:
"{bio}"

Output ONLY the refined bio text."#;

/// Replace `{context}` before sending.
pub const PROBLEM_REFINE_PROMPT_TEMPLATE: &str = "Refine this 'Problem' statement for a \
    cybersecurity project write-up. Focus on the security gap or business risk: \"{context}\"";

/// Replace `{context}` before sending.
pub const ACTION_REFINE_PROMPT_TEMPLATE: &str = "Refine this 'Action' statement for a \
    cybersecurity project. Focus on the tools, methodology (e.g., OWASP), and techniques used \
    (Red Teaming, Pentesting): \"{context}\"";

/// Replace `{context}` before sending.
pub const OUTCOME_REFINE_PROMPT_TEMPLATE: &str = "Refine this 'Outcome' statement. Focus on \
    the remediation, impact, and value delivered to the client/organization: \"{context}\"";
