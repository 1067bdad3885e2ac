pub mod profile;
pub mod project;

use serde::{Deserialize, Serialize};

use self::profile::ProfileData;
use self::project::ProjectData;

/// Which document an editor session is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditorMode {
    Profile,
    Project,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Profile => "PROFILE",
            EditorMode::Project => "PROJECT",
        }
    }
}

/// The document an editor session owns. Exactly one kind at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Document {
    Profile(ProfileData),
    Project(ProjectData),
}

impl Document {
    pub fn initial(mode: EditorMode) -> Self {
        match mode {
            EditorMode::Profile => Document::Profile(ProfileData::initial()),
            EditorMode::Project => Document::Project(ProjectData::initial()),
        }
    }

    pub fn mode(&self) -> EditorMode {
        match self {
            Document::Profile(_) => EditorMode::Profile,
            Document::Project(_) => EditorMode::Project,
        }
    }
}
