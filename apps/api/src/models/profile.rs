use serde::{Deserialize, Serialize};

use crate::editor::toggle::parse_certifications;

/// A named group of skill tags, shown as one row of the skills table.
///
/// Items keep insertion order. An entry with no items never survives a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

impl SkillCategory {
    pub fn new(category: impl Into<String>, items: &[&str]) -> Self {
        Self {
            category: category.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl ProfileData {
    /// The profile every new editor session starts from.
    pub fn initial() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            title: "Offensive Security Specialist | Red Teamer".to_string(),
            bio: "Aspiring Penetration Tester with a strong foundation in network security and \
                  web application assessment. Transitioning from a SysAdmin role, I bring 5 years \
                  of infrastructure experience to the offensive side. Passionate about CTFs, \
                  ethical hacking, and securing digital assets through proactive testing."
                .to_string(),
            location: "New York, USA".to_string(),
            email: "jane.doe@example.com".to_string(),
            skills: vec![],
            tools: vec![
                "Nmap".to_string(),
                "Burp Suite".to_string(),
                "Wireshark".to_string(),
            ],
            certifications: vec!["eJPT".to_string(), "CompTIA Security+".to_string()],
            socials: vec![
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/janedoe".to_string(),
                    icon: None,
                },
                SocialLink {
                    platform: "TryHackMe".to_string(),
                    url: "https://tryhackme.com/p/janedoe".to_string(),
                    icon: None,
                },
            ],
        }
    }
}

/// Partial update of the profile's free-form fields. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    /// Raw comma-separated certification input, split the same way the form field does.
    pub certifications: Option<String>,
    pub socials: Option<Vec<SocialLink>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.bio.is_none()
            && self.location.is_none()
            && self.email.is_none()
            && self.certifications.is_none()
            && self.socials.is_none()
    }

    /// Returns a new snapshot with every present field replaced.
    pub fn apply(self, data: &ProfileData) -> ProfileData {
        ProfileData {
            name: self.name.unwrap_or_else(|| data.name.clone()),
            title: self.title.unwrap_or_else(|| data.title.clone()),
            bio: self.bio.unwrap_or_else(|| data.bio.clone()),
            location: self.location.unwrap_or_else(|| data.location.clone()),
            email: self.email.unwrap_or_else(|| data.email.clone()),
            skills: data.skills.clone(),
            tools: data.tools.clone(),
            certifications: self
                .certifications
                .map(|raw| parse_certifications(&raw))
                .unwrap_or_else(|| data.certifications.clone()),
            socials: self.socials.unwrap_or_else(|| data.socials.clone()),
        }
    }
}
