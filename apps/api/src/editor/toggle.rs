//! Toggle-set editing for the profile's multi-select widgets.
//!
//! Every operation is total and returns a new sequence; the input is never mutated.
//! Invariants kept by `toggle_skill`: category names are unique, and no category
//! survives with an empty item list.

use crate::models::profile::{ProfileData, SkillCategory};

/// Removes `tool` if present, otherwise appends it. Remaining tools keep their order.
pub fn toggle_tool(tools: &[String], tool: &str) -> Vec<String> {
    if tools.iter().any(|t| t == tool) {
        tools.iter().filter(|t| *t != tool).cloned().collect()
    } else {
        let mut next = tools.to_vec();
        next.push(tool.to_string());
        next
    }
}

/// Flips membership of `item` within `category`.
///
/// - unknown category: appended as `{category, [item]}`
/// - known category, new item: item appended, category keeps its position
/// - known category, existing item: item removed; the category goes with it when emptied
pub fn toggle_skill(skills: &[SkillCategory], category: &str, item: &str) -> Vec<SkillCategory> {
    let Some(existing) = skills.iter().find(|s| s.category == category) else {
        let mut next = skills.to_vec();
        next.push(SkillCategory {
            category: category.to_string(),
            items: vec![item.to_string()],
        });
        return next;
    };

    if existing.items.iter().any(|i| i == item) {
        let remaining: Vec<String> = existing
            .items
            .iter()
            .filter(|i| *i != item)
            .cloned()
            .collect();

        if remaining.is_empty() {
            return skills
                .iter()
                .filter(|s| s.category != category)
                .cloned()
                .collect();
        }

        skills
            .iter()
            .map(|s| {
                if s.category == category {
                    SkillCategory {
                        category: s.category.clone(),
                        items: remaining.clone(),
                    }
                } else {
                    s.clone()
                }
            })
            .collect()
    } else {
        skills
            .iter()
            .map(|s| {
                if s.category == category {
                    let mut items = s.items.clone();
                    items.push(item.to_string());
                    SkillCategory {
                        category: s.category.clone(),
                        items,
                    }
                } else {
                    s.clone()
                }
            })
            .collect()
    }
}

pub fn is_skill_selected(skills: &[SkillCategory], category: &str, item: &str) -> bool {
    skills
        .iter()
        .any(|s| s.category == category && s.items.iter().any(|i| i == item))
}

/// Splits the comma-separated certification field. Pieces are trimmed; empty pieces
/// (from trailing or doubled commas) are kept so the field text round-trips.
pub fn parse_certifications(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Inverse of `parse_certifications` for re-populating the input field.
pub fn certifications_input(certifications: &[String]) -> String {
    certifications.join(", ")
}

impl ProfileData {
    pub fn with_tool_toggled(&self, tool: &str) -> ProfileData {
        ProfileData {
            tools: toggle_tool(&self.tools, tool),
            ..self.clone()
        }
    }

    pub fn with_skill_toggled(&self, category: &str, item: &str) -> ProfileData {
        ProfileData {
            skills: toggle_skill(&self.skills, category, item),
            ..self.clone()
        }
    }

    pub fn is_tool_selected(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }

    pub fn is_skill_selected(&self, category: &str, item: &str) -> bool {
        is_skill_selected(&self.skills, category, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_tool_appends_missing_tool() {
        let next = toggle_tool(&tools(&["Nmap", "Burp Suite"]), "Ghidra");
        assert_eq!(next, tools(&["Nmap", "Burp Suite", "Ghidra"]));
    }

    #[test]
    fn test_toggle_tool_removal_is_stable() {
        let next = toggle_tool(&tools(&["Nmap", "Burp Suite", "Wireshark"]), "Burp Suite");
        assert_eq!(next, tools(&["Nmap", "Wireshark"]));
    }

    #[test]
    fn test_toggle_tool_twice_restores_set() {
        let start = tools(&["Nmap", "Wireshark"]);
        let once = toggle_tool(&start, "Hydra");
        assert_eq!(toggle_tool(&once, "Hydra"), start);
    }

    #[test]
    fn test_toggle_skill_adds_new_category_at_end() {
        let skills = vec![SkillCategory::new("Networking", &["DNS"])];
        let next = toggle_skill(&skills, "Linux", "Bash Scripting");
        assert_eq!(next.len(), 2);
        assert_eq!(next[1], SkillCategory::new("Linux", &["Bash Scripting"]));
    }

    #[test]
    fn test_toggle_skill_appends_item_in_place() {
        let skills = vec![
            SkillCategory::new("Networking", &["DNS"]),
            SkillCategory::new("Linux", &["Bash Scripting"]),
        ];
        let next = toggle_skill(&skills, "Networking", "VPN");
        assert_eq!(next[0], SkillCategory::new("Networking", &["DNS", "VPN"]));
        assert_eq!(next[1], skills[1]);
    }

    #[test]
    fn test_toggle_skill_removes_item_preserving_order() {
        let skills = vec![SkillCategory::new("Windows", &["PowerShell", "SMB", "LDAP"])];
        let next = toggle_skill(&skills, "Windows", "SMB");
        assert_eq!(next, vec![SkillCategory::new("Windows", &["PowerShell", "LDAP"])]);
    }

    #[test]
    fn test_removing_last_item_drops_category() {
        let skills = vec![
            SkillCategory::new("Networking", &["DNS"]),
            SkillCategory::new("Linux", &["Bash Scripting"]),
            SkillCategory::new("Windows", &["SMB"]),
        ];
        let next = toggle_skill(&skills, "Linux", "Bash Scripting");
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|s| s.category != "Linux"));
        assert_eq!(next[0].category, "Networking");
        assert_eq!(next[1].category, "Windows");
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let skills = vec![
            SkillCategory::new("Networking", &["DNS", "VPN"]),
            SkillCategory::new("Linux", &["Kali Linux"]),
        ];
        for (category, item) in [
            ("Networking", "Subnetting"),
            ("Networking", "VPN"),
            ("Linux", "Kali Linux"),
            ("Web Hacking", "XSS"),
        ] {
            let once = toggle_skill(&skills, category, item);
            assert_ne!(once, skills);
            assert_eq!(toggle_skill(&once, category, item), skills, "{category}/{item}");
        }
    }

    #[test]
    fn test_toggle_skill_never_leaves_empty_or_duplicate_categories() {
        let mut skills: Vec<SkillCategory> = vec![];
        let moves = [
            ("Linux", "Bash Scripting"),
            ("Linux", "Kali Linux"),
            ("Windows", "SMB"),
            ("Linux", "Bash Scripting"),
            ("Linux", "Kali Linux"),
            ("Linux", "Kali Linux"),
            ("Windows", "SMB"),
        ];
        for (category, item) in moves {
            skills = toggle_skill(&skills, category, item);
            assert!(skills.iter().all(|s| !s.items.is_empty()));
            let mut names: Vec<&str> = skills.iter().map(|s| s.category.as_str()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), skills.len());
        }
        assert_eq!(skills, vec![SkillCategory::new("Linux", &["Kali Linux"])]);
    }

    #[test]
    fn test_toggle_does_not_mutate_input_snapshot() {
        let profile = ProfileData::initial();
        let toggled = profile.with_tool_toggled("Nmap");
        assert!(profile.is_tool_selected("Nmap"));
        assert!(!toggled.is_tool_selected("Nmap"));

        let toggled = profile.with_skill_toggled("Linux", "Bash Scripting");
        assert!(!profile.is_skill_selected("Linux", "Bash Scripting"));
        assert!(toggled.is_skill_selected("Linux", "Bash Scripting"));
        assert_eq!(toggled.tools, profile.tools);
    }

    #[test]
    fn test_parse_certifications_keeps_trailing_empty() {
        assert_eq!(
            parse_certifications("eJPT, OSCP,"),
            vec!["eJPT".to_string(), "OSCP".to_string(), String::new()]
        );
        assert_eq!(parse_certifications(""), vec![String::new()]);
    }

    #[test]
    fn test_certifications_input_round_trips_field_text() {
        let certs = parse_certifications("eJPT,  CompTIA Security+ ");
        assert_eq!(certifications_input(&certs), "eJPT, CompTIA Security+");
    }
}
