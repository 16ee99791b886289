use std::path::Path;
use std::time::SystemTime;

/// Suffix inserted between a document's stem and its extension
///  when it is duplicated.
pub const COPY_SUFFIX: &str = "copy";

/**
 * Documents
 * =========
 * A document is a single flat file in the store. It is
 *  identified by nothing but its filename, and how it is
 *  shown to a reader is decided by the extension alone.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub modified: SystemTime,
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_name(&self.name)
    }
}

/// How a document is rendered for viewing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// `.md`, converted to HTML and wrapped in the page layout
    Markdown,
    /// `.txt`, served back byte for byte as text/plain
    Text,
    /// Anything else that ended up in the directory out of band
    Other(mime_guess::Mime),
}

impl DocumentKind {
    pub fn from_name(name: &str) -> Self {
        match Path::new(name).extension().and_then(|ext| ext.to_str()) {
            Some("md") => DocumentKind::Markdown,
            Some("txt") => DocumentKind::Text,
            _ => DocumentKind::Other(mime_guess::from_path(name).first_or_octet_stream()),
        }
    }

    pub fn content_type(&self) -> &str {
        match self {
            DocumentKind::Markdown => "text/html; charset=utf-8",
            DocumentKind::Text => "text/plain",
            DocumentKind::Other(mime) => mime.as_ref(),
        }
    }
}

/// Name given to a duplicate of `name`: the stem, then `copy`,
///  then the original extension (`report.txt` -> `reportcopy.txt`).
///
/// Leading-dot names have no extension, so `.md` becomes `.mdcopy`.
pub fn duplicate_name(name: &str) -> String {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, COPY_SUFFIX, ext),
        None => format!("{}{}", stem, COPY_SUFFIX),
    }
}
