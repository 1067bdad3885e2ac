//! Read-only option catalog: the selectable skills and tools, plus the badge image table.
//!
//! Injected into rendering and into the toggle gate; never mutated after startup.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::profile::SkillCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Selectable skill chips, grouped the way the skills table groups them.
    pub skills: Vec<SkillCategory>,
    /// Selectable tool chips, in display order.
    pub tools: Vec<String>,
    /// Badge image URL keyed by exact tool name.
    #[serde(default)]
    pub badges: BTreeMap<String, String>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let skills = vec![
            SkillCategory::new(
                "Networking",
                &["TCP/IP", "DNS", "VPN", "Subnetting", "Wireshark", "Packet Analysis"],
            ),
            SkillCategory::new(
                "Linux",
                &[
                    "Bash Scripting",
                    "Kali Linux",
                    "File Permissions",
                    "System Administration",
                    "Process Management",
                ],
            ),
            SkillCategory::new(
                "Windows",
                &["PowerShell", "Registry", "SMB", "Active Directory", "Group Policy"],
            ),
            SkillCategory::new(
                "Web Hacking",
                &["OWASP Top 10", "SQL Injection", "XSS", "Burp Suite", "API Testing"],
            ),
            SkillCategory::new(
                "Active Directory",
                &["Kerberoasting", "BloodHound", "Pass-the-Hash", "LDAP", "Golden Ticket"],
            ),
        ];

        let tools = [
            "Nmap",
            "Burp Suite",
            "Metasploit",
            "Wireshark",
            "Nessus",
            "Hashcat",
            "John the Ripper",
            "Hydra",
            "Mimikatz",
            "BloodHound",
            "Cobalt Strike",
            "Ghidra",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let badges = [
            ("Nmap", "https://img.shields.io/badge/Nmap-Included-blue?logo=nmap&logoColor=white"),
            ("Burp Suite", "https://img.shields.io/badge/Burp%20Suite-Expert-orange?logo=burpsuite&logoColor=white"),
            ("Metasploit", "https://img.shields.io/badge/Metasploit-Framework-333333?logo=metasploit&logoColor=white"),
            ("Wireshark", "https://img.shields.io/badge/Wireshark-Analysis-1679A7?logo=wireshark&logoColor=white"),
            ("Kali Linux", "https://img.shields.io/badge/Kali%20Linux-Ready-557C94?logo=kalilinux&logoColor=white"),
            ("Python", "https://img.shields.io/badge/Python-Scripting-3776AB?logo=python&logoColor=white"),
            ("Bash", "https://img.shields.io/badge/Bash-Automation-4EAA25?logo=gnu-bash&logoColor=white"),
            ("Docker", "https://img.shields.io/badge/Docker-Containerization-2496ED?logo=docker&logoColor=white"),
            ("HTB", "https://img.shields.io/badge/Hack%20The%20Box-Ranked-9FEF00?logo=hackthebox&logoColor=black"),
            ("TryHackMe", "https://img.shields.io/badge/TryHackMe-Top%201%25-C1232B?logo=tryhackme&logoColor=white"),
        ]
        .iter()
        .map(|(tool, url)| (tool.to_string(), url.to_string()))
        .collect();

        Self {
            skills,
            tools,
            badges,
        }
    }

    /// Loads a catalog from a JSON file with the same shape as `GET /api/v1/catalog`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file '{}' is not valid JSON", path.display()))?;

        if let Some(empty) = catalog.skills.iter().find(|s| s.items.is_empty()) {
            anyhow::bail!(
                "Catalog skill category '{}' has no items",
                empty.category
            );
        }

        Ok(catalog)
    }

    pub fn badge_url(&self, tool: &str) -> Option<&str> {
        self.badges.get(tool).map(String::as_str)
    }

    pub fn has_skill(&self, category: &str, item: &str) -> bool {
        self.skills
            .iter()
            .any(|s| s.category == category && s.items.iter().any(|i| i == item))
    }

    pub fn has_tool(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_badge_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.badge_url("Nmap").is_some());
        assert!(catalog.badge_url("nmap").is_none());
        assert!(catalog.badge_url("Ghidra").is_none());
    }

    #[test]
    fn test_builtin_skill_membership() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_skill("Linux", "Bash Scripting"));
        assert!(!catalog.has_skill("Linux", "PowerShell"));
        assert!(!catalog.has_skill("Cloud", "IAM"));
        assert!(catalog.has_tool("Ghidra"));
        assert!(!catalog.has_tool("Python"));
    }

    #[test]
    fn test_builtin_categories_are_unique_and_non_empty() {
        let catalog = Catalog::builtin();
        let mut names: Vec<&str> = catalog.skills.iter().map(|s| s.category.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), catalog.skills.len());
        assert!(catalog.skills.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn test_from_file_loads_custom_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "skills": [{{"category": "Cloud", "items": ["IAM", "S3"]}}],
                "tools": ["Pacu"],
                "badges": {{"Pacu": "https://example.com/pacu.svg"}}
            }}"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert!(catalog.has_skill("Cloud", "S3"));
        assert!(catalog.has_tool("Pacu"));
        assert_eq!(catalog.badge_url("Pacu"), Some("https://example.com/pacu.svg"));
    }

    #[test]
    fn test_from_file_badges_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"skills": [], "tools": ["Nmap"]}}"#).unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert!(catalog.badges.is_empty());
    }

    #[test]
    fn test_from_file_rejects_empty_category() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"skills": [{{"category": "Cloud", "items": []}}], "tools": []}}"#
        )
        .unwrap();

        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Cloud"));
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        let err = Catalog::from_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
