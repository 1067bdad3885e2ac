//! Refinement — AI rewriting of a single free-text field.
//!
//! Pluggable, trait-based: `AppState` holds an `Arc<dyn Refiner>`.
//! Default backend is `LlmRefiner` (Gemini via `llm_client`); tests swap in a stub.
//!
//! A refinement either yields replacement text or a `RefineError`. It never yields
//! partial text, and an empty answer is an error, not an empty field.

pub mod prompts;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::refine::prompts::{
    ACTION_REFINE_PROMPT_TEMPLATE, BIO_REFINE_PROMPT_TEMPLATE, OUTCOME_REFINE_PROMPT_TEMPLATE,
    PROBLEM_REFINE_PROMPT_TEMPLATE,
};

/// Project fields that can be refined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSection {
    Problem,
    Action,
    Outcome,
}

impl ProjectSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectSection::Problem => "problem",
            ProjectSection::Action => "action",
            ProjectSection::Outcome => "outcome",
        }
    }

    fn prompt_template(&self) -> &'static str {
        match self {
            ProjectSection::Problem => PROBLEM_REFINE_PROMPT_TEMPLATE,
            ProjectSection::Action => ACTION_REFINE_PROMPT_TEMPLATE,
            ProjectSection::Outcome => OUTCOME_REFINE_PROMPT_TEMPLATE,
        }
    }
}

impl FromStr for ProjectSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "problem" => Ok(ProjectSection::Problem),
            "action" => Ok(ProjectSection::Action),
            "outcome" => Ok(ProjectSection::Outcome),
            other => Err(format!(
                "Unknown project section '{other}'; expected problem, action or outcome"
            )),
        }
    }
}

/// The field a refinement writes back to. At most one refinement per target is
/// in flight in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefineTarget {
    Bio,
    Problem,
    Action,
    Outcome,
}

impl RefineTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefineTarget::Bio => "bio",
            RefineTarget::Problem => "problem",
            RefineTarget::Action => "action",
            RefineTarget::Outcome => "outcome",
        }
    }

    pub fn section(&self) -> Option<ProjectSection> {
        match self {
            RefineTarget::Bio => None,
            RefineTarget::Problem => Some(ProjectSection::Problem),
            RefineTarget::Action => Some(ProjectSection::Action),
            RefineTarget::Outcome => Some(ProjectSection::Outcome),
        }
    }

    /// The one notice shown to the user when this refinement fails.
    pub fn failure_notice(&self) -> &'static str {
        match self {
            RefineTarget::Bio => "Failed to refine bio. Please check your API key.",
            _ => "Failed to refine content. Check API key.",
        }
    }
}

impl From<ProjectSection> for RefineTarget {
    fn from(section: ProjectSection) -> Self {
        match section {
            ProjectSection::Problem => RefineTarget::Problem,
            ProjectSection::Action => RefineTarget::Action,
            ProjectSection::Outcome => RefineTarget::Outcome,
        }
    }
}

impl fmt::Display for RefineTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("refinement credential is not configured")]
    MissingCredential,

    #[error("refinement service failed: {0}")]
    ServiceFailure(String),
}

impl From<LlmError> for RefineError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingApiKey => RefineError::MissingCredential,
            other => RefineError::ServiceFailure(other.to_string()),
        }
    }
}

/// Text refinement backend. Implement this to swap providers without touching
/// the session store or the handlers.
#[async_trait]
pub trait Refiner: Send + Sync {
    async fn refine_bio(&self, bio: &str) -> Result<String, RefineError>;

    async fn refine_section(
        &self,
        section: ProjectSection,
        text: &str,
    ) -> Result<String, RefineError>;
}

/// Routes a target to the matching `Refiner` method.
pub async fn refine_target(
    refiner: &dyn Refiner,
    target: RefineTarget,
    text: &str,
) -> Result<String, RefineError> {
    let refined = match target.section() {
        None => refiner.refine_bio(text).await?,
        Some(section) => refiner.refine_section(section, text).await?,
    };

    if refined.trim().is_empty() {
        return Err(RefineError::ServiceFailure(
            "refinement returned empty text".to_string(),
        ));
    }

    Ok(refined)
}

pub fn bio_prompt(bio: &str) -> String {
    BIO_REFINE_PROMPT_TEMPLATE.replace("{bio}", bio)
}

pub fn section_prompt(section: ProjectSection, text: &str) -> String {
    let mut prompt = section.prompt_template().replace("{context}", text);
    prompt.push_str(PLAIN_TEXT_INSTRUCTION);
    prompt
}

/// Gemini-backed refiner.
pub struct LlmRefiner(pub LlmClient);

#[async_trait]
impl Refiner for LlmRefiner {
    async fn refine_bio(&self, bio: &str) -> Result<String, RefineError> {
        debug!("Refining bio ({} chars)", bio.len());
        self.0.generate_text(&bio_prompt(bio)).await.map_err(|e| {
            warn!("Bio refinement failed: {e}");
            RefineError::from(e)
        })
    }

    async fn refine_section(
        &self,
        section: ProjectSection,
        text: &str,
    ) -> Result<String, RefineError> {
        debug!("Refining {} ({} chars)", section.as_str(), text.len());
        self.0
            .generate_text(&section_prompt(section, text))
            .await
            .map_err(|e| {
                warn!("Refinement of {} failed: {e}", section.as_str());
                RefineError::from(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::DEFAULT_MODEL;

    struct FixedRefiner(&'static str);

    #[async_trait]
    impl Refiner for FixedRefiner {
        async fn refine_bio(&self, _bio: &str) -> Result<String, RefineError> {
            Ok(format!("bio:{}", self.0))
        }

        async fn refine_section(
            &self,
            section: ProjectSection,
            _text: &str,
        ) -> Result<String, RefineError> {
            Ok(format!("{}:{}", section.as_str(), self.0))
        }
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("action".parse::<ProjectSection>(), Ok(ProjectSection::Action));
        assert!("overview".parse::<ProjectSection>().is_err());
        assert!("Problem".parse::<ProjectSection>().is_err());
    }

    #[test]
    fn test_bio_prompt_embeds_draft() {
        let prompt = bio_prompt("I hack things.");
        assert!(prompt.contains("\"I hack things.\""));
        assert!(prompt.contains("Cybersecurity Career Coach"));
        assert!(!prompt.contains("{bio}"));
    }

    #[test]
    fn test_section_prompts_are_section_specific() {
        let problem = section_prompt(ProjectSection::Problem, "gap");
        let action = section_prompt(ProjectSection::Action, "gap");
        let outcome = section_prompt(ProjectSection::Outcome, "gap");
        assert!(problem.contains("security gap or business risk: \"gap\""));
        assert!(action.contains("methodology (e.g., OWASP)"));
        assert!(outcome.contains("remediation, impact, and value"));
        assert!(outcome.ends_with(PLAIN_TEXT_INSTRUCTION));
    }

    #[test]
    fn test_llm_error_mapping() {
        assert!(matches!(
            RefineError::from(LlmError::MissingApiKey),
            RefineError::MissingCredential
        ));
        assert!(matches!(
            RefineError::from(LlmError::EmptyContent),
            RefineError::ServiceFailure(_)
        ));
    }

    #[test]
    fn test_failure_notices() {
        assert_eq!(
            RefineTarget::Bio.failure_notice(),
            "Failed to refine bio. Please check your API key."
        );
        assert_eq!(
            RefineTarget::Outcome.failure_notice(),
            "Failed to refine content. Check API key."
        );
    }

    #[tokio::test]
    async fn test_refine_target_dispatch() {
        let refiner = FixedRefiner("ok");
        assert_eq!(
            refine_target(&refiner, RefineTarget::Bio, "x").await.unwrap(),
            "bio:ok"
        );
        assert_eq!(
            refine_target(&refiner, RefineTarget::Outcome, "x").await.unwrap(),
            "outcome:ok"
        );
    }

    #[tokio::test]
    async fn test_refine_target_rejects_blank_answer() {
        let refiner = FixedRefiner("");
        struct Blank;
        #[async_trait]
        impl Refiner for Blank {
            async fn refine_bio(&self, _bio: &str) -> Result<String, RefineError> {
                Ok("   ".to_string())
            }
            async fn refine_section(
                &self,
                _section: ProjectSection,
                _text: &str,
            ) -> Result<String, RefineError> {
                Ok(String::new())
            }
        }

        assert!(refine_target(&refiner, RefineTarget::Bio, "x").await.is_ok());
        assert!(matches!(
            refine_target(&Blank, RefineTarget::Bio, "x").await,
            Err(RefineError::ServiceFailure(_))
        ));
        assert!(matches!(
            refine_target(&Blank, RefineTarget::Action, "x").await,
            Err(RefineError::ServiceFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_llm_refiner_without_key_reports_missing_credential() {
        let refiner = LlmRefiner(LlmClient::new(None, DEFAULT_MODEL.to_string()));
        assert!(matches!(
            refiner.refine_bio("draft").await,
            Err(RefineError::MissingCredential)
        ));
        assert!(matches!(
            refiner.refine_section(ProjectSection::Problem, "draft").await,
            Err(RefineError::MissingCredential)
        ));
    }
}
