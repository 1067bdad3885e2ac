//! Profile landing-page document.

use crate::catalog::Catalog;
use crate::models::profile::{ProfileData, SkillCategory, SocialLink};
use crate::render::badge::{certification_badge_url, image, link, tool_badge_url};

pub const SKILLS_HEADING: &str = "## 🛡️ Skills";
pub const TOOLS_HEADING: &str = "## 🛠️ Tools";
pub const CERTIFICATIONS_HEADING: &str = "## 📜 Certifications & Education";
pub const CONNECT_HEADING: &str = "## 🔗 Connect";

const SKILLS_TABLE_HEADER: &str = "| Category | Skills |\n|:--- |:--- |";

/// Renders the profile as a GitHub README.
///
/// Name, title and bio go in verbatim; markdown in those fields is the user's to keep.
pub fn render_profile(data: &ProfileData, catalog: &Catalog) -> String {
    format!(
        "
# Hi there, I'm {name} 👋

### {title}

{bio}

---

{SKILLS_HEADING}

{SKILLS_TABLE_HEADER}
{skills}

{TOOLS_HEADING}

{tools}

{CERTIFICATIONS_HEADING}

{certifications}

---

{CONNECT_HEADING}

{socials}
",
        name = data.name,
        title = data.title,
        bio = data.bio,
        skills = skills_rows(&data.skills),
        tools = tool_badges(&data.tools, catalog),
        certifications = certification_badges(&data.certifications),
        socials = social_links(&data.socials),
    )
}

fn skills_rows(skills: &[SkillCategory]) -> String {
    skills
        .iter()
        .map(|s| format!("| **{}** | {} |", s.category, s.items.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tool_badges(tools: &[String], catalog: &Catalog) -> String {
    tools
        .iter()
        .map(|tool| image(tool, &tool_badge_url(catalog, tool)))
        .collect::<Vec<_>>()
        .join(" ")
}

// Empty entries come from trailing commas in the input field; they get no badge.
fn certification_badges(certifications: &[String]) -> String {
    certifications
        .iter()
        .filter(|cert| !cert.is_empty())
        .map(|cert| image(cert, &certification_badge_url(cert)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn social_links(socials: &[SocialLink]) -> String {
    socials
        .iter()
        .map(|s| link(&s.platform, &s.url))
        .collect::<Vec<_>>()
        .join(" • ")
}
