/**
 * Documents as the cms sees them: a name, a kind
 *  derived from the extension, and the rule for
 *  naming a duplicate.
 */
pub mod document;
/**
 * Username to bcrypt hash lookup, read from a
 *  static toml file whenever someone signs in.
 */
pub mod credentials;
/**
 * Markdown to HTML conversion for `.md` documents.
 */
pub mod markdown;
/**
 * Ordering of the index listing.
 */
pub mod sort;
/**
 * The flat directory every document lives in.
 *  Thin async wrapper over tokio::fs that refuses
 *  names which would escape the directory.
 */
pub mod store;
/**
 * Rules a new or renamed filename has to pass.
 */
pub mod validation;

pub mod prelude {
    pub use crate::credentials::{hash_password, CredentialStore, CredentialsError};
    pub use crate::document::{duplicate_name, Document, DocumentKind};
    pub use crate::markdown::render_markdown;
    pub use crate::sort::{sort_documents, SortMode};
    pub use crate::store::{DocumentStore, StoreError};
    pub use crate::validation::{validate_filename, FilenameCheck};
}
