/// Extensions a document may be created or renamed with
pub const ALLOWED_EXTENSIONS: [&str; 2] = [".md", ".txt"];

/// Outcome of checking a proposed filename against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameCheck {
    Ok,
    EmptyName,
    InvalidExtension,
    DuplicateName,
}

impl FilenameCheck {
    /// Message shown to the user when the check fails, `None` for `Ok`
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FilenameCheck::Ok => None,
            FilenameCheck::EmptyName => Some("A name is required."),
            FilenameCheck::InvalidExtension => Some("File must have a .txt or .md extension."),
            FilenameCheck::DuplicateName => {
                Some("Filename already used. Please choose a new filename.")
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, FilenameCheck::Ok)
    }
}

/// Check `name` against the names already in the store.
///
/// Rules are applied in order and the first failure wins:
///  empty, then extension, then uniqueness.
pub fn validate_filename<S: AsRef<str>>(name: &str, existing: &[S]) -> FilenameCheck {
    if name.is_empty() {
        return FilenameCheck::EmptyName;
    }

    if !ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        return FilenameCheck::InvalidExtension;
    }

    if existing.iter().any(|existing| existing.as_ref() == name) {
        return FilenameCheck::DuplicateName;
    }

    FilenameCheck::Ok
}
