//! Project write-up document. Fixed layout with no branches on the data: an empty
//! field still gets its heading, followed by an empty body.

use crate::models::project::ProjectData;

/// Headings every project document carries, in document order.
#[cfg(test)]
pub const PROJECT_HEADINGS: [&str; 8] = [
    "# 📁 ",
    "## 📝 Overview",
    "## 🚩 Problem (The Scenario)",
    "## ⚡ Action (Tools & Techniques)",
    "**Tools Used:**",
    "## ✅ Outcome (Remediation & Impact)",
    "## 📸 Visual Proof",
    "## 📄 Sample Report",
];

pub fn render_project(data: &ProjectData) -> String {
    let tools = data
        .tools_used
        .iter()
        .map(|t| format!("- {t}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "
# 📁 {title}

[![View Report](https://img.shields.io/badge/View-PDF_Report-red?style=for-the-badge&logo=adobeacrobatreader)]({report})
[![GitHub Repo](https://img.shields.io/badge/View-Repository-black?style=for-the-badge&logo=github)]({repo})

## 📝 Overview
{overview}

---

## 🚩 Problem (The Scenario)
{problem}

## ⚡ Action (Tools & Techniques)
{action}

**Tools Used:**
{tools}

## ✅ Outcome (Remediation & Impact)
{outcome}

---

## 📸 Visual Proof

### 1. Initial Reconnaissance
> *Place screenshot here (e.g., Nmap scan results showing open ports)*
`![Nmap Scan](./screenshots/nmap_scan.png)`

### 2. Exploitation
> *Place screenshot here (e.g., Metasploit shell or Burp Suite payload)*
`![Exploit](./screenshots/exploit.png)`

### 3. Proof of Concept (PoC)
> *Place screenshot here (e.g., reading /etc/passwd or Admin dashboard access)*
`![PoC](./screenshots/poc.png)`

---

## 📄 Sample Report
A detailed PDF report containing the executive summary, technical findings, and remediation steps can be found [here]({report}).
",
        title = data.title,
        report = data.report_link,
        repo = data.repo_link,
        overview = data.overview,
        problem = data.problem,
        action = data.action,
        outcome = data.outcome,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_project() -> ProjectData {
        ProjectData {
            title: String::new(),
            overview: String::new(),
            problem: String::new(),
            action: String::new(),
            outcome: String::new(),
            tools_used: vec![],
            report_link: String::new(),
            repo_link: String::new(),
        }
    }

    #[test]
    fn test_all_headings_emitted_for_blank_project() {
        let markdown = render_project(&blank_project());
        let mut cursor = 0;
        for heading in PROJECT_HEADINGS {
            let found = markdown[cursor..]
                .find(heading)
                .unwrap_or_else(|| panic!("missing heading {heading}"));
            cursor += found + heading.len();
        }
    }

    #[test]
    fn test_screenshot_placeholders_are_literal() {
        let mut project = ProjectData::initial();
        project.title = "Internal AD Assessment".to_string();
        let markdown = render_project(&project);
        assert!(markdown.contains("### 1. Initial Reconnaissance"));
        assert!(markdown.contains("### 2. Exploitation"));
        assert!(markdown.contains("### 3. Proof of Concept (PoC)"));
        assert!(markdown.contains("`![Nmap Scan](./screenshots/nmap_scan.png)`"));
        assert!(markdown.contains("`![Exploit](./screenshots/exploit.png)`"));
        assert!(markdown.contains("`![PoC](./screenshots/poc.png)`"));
    }

    #[test]
    fn test_tools_used_one_bullet_per_entry() {
        let markdown = render_project(&ProjectData::initial());
        assert!(markdown.contains("**Tools Used:**\n- Burp Suite\n- Nmap\n- SQLMap\n- Python\n"));
    }

    #[test]
    fn test_links_inserted_without_encoding() {
        let mut project = blank_project();
        project.report_link = "https://example.com/my report.pdf".to_string();
        project.repo_link = "https://github.com/a b".to_string();
        let markdown = render_project(&project);
        assert!(markdown.contains("logo=adobeacrobatreader)](https://example.com/my report.pdf)"));
        assert!(markdown.contains("logo=github)](https://github.com/a b)"));
        assert!(markdown.contains("can be found [here](https://example.com/my report.pdf)."));
    }

    #[test]
    fn test_empty_sections_keep_headings_with_empty_body() {
        let markdown = render_project(&blank_project());
        assert!(markdown.contains("## 🚩 Problem (The Scenario)\n\n\n## ⚡ Action"));
        assert!(markdown.contains("**Tools Used:**\n\n\n## ✅ Outcome"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let project = ProjectData::initial();
        assert_eq!(render_project(&project), render_project(&project));
    }
}
