use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub title: String,
    pub overview: String,
    pub problem: String,
    pub action: String,
    pub outcome: String,
    #[serde(default)]
    pub tools_used: Vec<String>,
    pub report_link: String,
    pub repo_link: String,
}

impl ProjectData {
    /// The write-up every new project session starts from.
    pub fn initial() -> Self {
        Self {
            title: "E-Commerce Penetration Test".to_string(),
            overview: "A black-box penetration test conducted on a mock e-commerce environment \
                       to identify critical vulnerabilities before production deployment."
                .to_string(),
            problem: "The client needed to ensure their new payment gateway integration and user \
                      authentication flows were secure against common web attacks like SQLi and \
                      XSS."
                .to_string(),
            action: "Utilized Burp Suite Pro for mapping the application. Performed manual \
                     payload injection for SQLi on search parameters. Used Hydra for \
                     brute-forcing weak admin credentials."
                .to_string(),
            outcome: "Identified a critical SQL injection vulnerability in the order processing \
                      module. Patched the code by implementing parameterized queries. Client \
                      successfully passed subsequent compliance scans."
                .to_string(),
            tools_used: vec![
                "Burp Suite".to_string(),
                "Nmap".to_string(),
                "SQLMap".to_string(),
                "Python".to_string(),
            ],
            report_link: "https://github.com/username/project/blob/main/report.pdf".to_string(),
            repo_link: "https://github.com/username/project".to_string(),
        }
    }
}

/// Partial update of a project write-up. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub problem: Option<String>,
    pub action: Option<String>,
    pub outcome: Option<String>,
    pub tools_used: Option<Vec<String>>,
    pub report_link: Option<String>,
    pub repo_link: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.overview.is_none()
            && self.problem.is_none()
            && self.action.is_none()
            && self.outcome.is_none()
            && self.tools_used.is_none()
            && self.report_link.is_none()
            && self.repo_link.is_none()
    }

    /// Returns a new snapshot with every present field replaced.
    pub fn apply(self, data: &ProjectData) -> ProjectData {
        ProjectData {
            title: self.title.unwrap_or_else(|| data.title.clone()),
            overview: self.overview.unwrap_or_else(|| data.overview.clone()),
            problem: self.problem.unwrap_or_else(|| data.problem.clone()),
            action: self.action.unwrap_or_else(|| data.action.clone()),
            outcome: self.outcome.unwrap_or_else(|| data.outcome.clone()),
            tools_used: self.tools_used.unwrap_or_else(|| data.tools_used.clone()),
            report_link: self.report_link.unwrap_or_else(|| data.report_link.clone()),
            repo_link: self.repo_link.unwrap_or_else(|| data.repo_link.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(ProjectData::initial()).unwrap();
        assert!(json.get("toolsUsed").is_some());
        assert!(json.get("reportLink").is_some());
        assert!(json.get("repoLink").is_some());
        assert!(json.get("tools_used").is_none());
    }

    #[test]
    fn test_patch_replaces_only_present_fields() {
        let data = ProjectData::initial();
        let patch = ProjectPatch {
            problem: Some(String::new()),
            tools_used: Some(vec!["Ghidra".to_string()]),
            ..Default::default()
        };
        let updated = patch.apply(&data);
        assert_eq!(updated.problem, "");
        assert_eq!(updated.tools_used, vec!["Ghidra"]);
        assert_eq!(updated.title, data.title);
        assert_eq!(updated.repo_link, data.repo_link);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let data = ProjectData::initial();
        let patch = ProjectPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&data), data);
    }
}
