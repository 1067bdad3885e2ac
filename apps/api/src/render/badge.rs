//! Badge and link fragments shared by the document renderers.

use crate::catalog::Catalog;

const SHIELDS_BADGE_BASE: &str = "https://img.shields.io/badge/";

/// Markdown image reference: `![alt](url)`.
pub fn image(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

/// Markdown link: `[text](url)`.
pub fn link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// Encodes text for the label slot of a shields.io static badge path.
///
/// shields.io splits the path on `-` and reads `_` as a space, so literal ones are
/// doubled first. Percent-encoding then covers spaces, parentheses and brackets, so
/// the surrounding `![..](..)` syntax cannot be terminated early by the label.
pub fn shields_label(text: &str) -> String {
    let escaped = text.replace('-', "--").replace('_', "__");
    urlencoding::encode(&escaped).into_owned()
}

/// Catalog badge for `tool`, or a grey shields.io badge labelled with the tool name.
pub fn tool_badge_url(catalog: &Catalog, tool: &str) -> String {
    match catalog.badge_url(tool) {
        Some(url) => url.to_string(),
        None => format!("{SHIELDS_BADGE_BASE}{}-Tool-lightgrey", shields_label(tool)),
    }
}

pub fn certification_badge_url(certification: &str) -> String {
    format!(
        "{SHIELDS_BADGE_BASE}{}-Certified-gold",
        shields_label(certification)
    )
}
