//! Factbox - natural-language fact lookup from Wikipedia infoboxes
//!
//! A query like `what is the capital of france` flows through three layers:
//!
//! - [`pattern`] / [`rules`] - the wildcard matcher and the ordered rule table
//!   that binds question templates to handlers (the core of the crate)
//! - [`handlers`] - the closed set of question handlers over one [`wiki`]
//!   client, each extracting a field with a [`fields`] probe
//! - [`wiki`] / [`infobox`] - MediaWiki API collaborators: title search, page
//!   fetch, summary-box isolation, text cleanup

pub mod error;
pub mod fields;
pub mod handlers;
pub mod infobox;
pub mod pattern;
pub mod repl;
pub mod rules;
pub mod wiki;

pub use error::{FactboxError, FixSuggestion};
pub use fields::FieldProbe;
pub use handlers::{default_rules, FieldHandler, QuitHandler};
pub use pattern::{normalize_query, Template};
pub use rules::{Handler, Outcome, Rule, RuleSet};
pub use wiki::{SearchHit, WikiClient};
