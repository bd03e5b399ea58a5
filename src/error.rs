//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All failure modes of a fact lookup.
///
/// Lookup-family variants (`NoResults`, `Disambiguation`, `PageFetch`,
/// `NoInfobox`) mean the entity could not be resolved to usable summary text;
/// `FieldFormat` means the summary text was found but the requested attribute
/// was not. Handlers localize both families into user-visible answers, so none
/// of these abort the query loop.
#[derive(Error, Debug)]
pub enum FactboxError {
    #[error("no results found for '{title}'")]
    NoResults { title: String },

    #[error("'{title}' is a disambiguation page")]
    Disambiguation { title: String },

    #[error("failed to fetch page (HTTP {status})")]
    PageFetch { status: u16 },

    #[error("page has no infobox")]
    NoInfobox,

    #[error("{message}")]
    FieldFormat { message: String },

    #[error("unexpected API response: {details}")]
    InvalidResponse { details: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for FactboxError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            FactboxError::NoResults { .. } => Some("Check the spelling of the entity name"),
            FactboxError::Disambiguation { .. } => {
                Some("Use a more specific name (e.g. 'Mercury (planet)')")
            }
            FactboxError::PageFetch { .. } => Some("Retry later or check connectivity"),
            FactboxError::NoInfobox => Some("Pick an entity whose page carries a summary box"),
            FactboxError::FieldFormat { .. } => {
                Some("The page exists but lists this attribute differently")
            }
            FactboxError::InvalidResponse { .. } => {
                Some("The API origin may not be a MediaWiki endpoint")
            }
            FactboxError::Http(_) => Some("Check network connectivity and the API base URL"),
            FactboxError::Url(_) => Some("Check the --api-base and --lang values"),
            FactboxError::Io(_) => None,
        }
    }
}
