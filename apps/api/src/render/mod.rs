// Markdown generation for both document kinds.
// Every function here is pure: same input, byte-identical output, no I/O.

pub mod badge;
pub mod handlers;
pub mod profile;
pub mod project;

use crate::catalog::Catalog;
use crate::models::Document;

pub use profile::render_profile;
pub use project::render_project;

/// Renders whichever document a session currently holds.
pub fn render_document(document: &Document, catalog: &Catalog) -> String {
    match document {
        Document::Profile(data) => render_profile(data, catalog),
        Document::Project(data) => render_project(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EditorMode;

    #[test]
    fn test_render_document_dispatches_on_mode() {
        let catalog = Catalog::builtin();
        let profile = render_document(&Document::initial(EditorMode::Profile), &catalog);
        let project = render_document(&Document::initial(EditorMode::Project), &catalog);
        assert!(profile.contains("# Hi there, I'm Jane Doe"));
        assert!(project.contains("# 📁 E-Commerce Penetration Test"));
    }
}
