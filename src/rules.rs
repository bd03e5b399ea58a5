//! Rule table and first-match dispatch
//!
//! A [`RuleSet`] is an ordered list of (template, handler) pairs built once at
//! startup and handed to whichever interaction surface needs it. Order is the
//! sole disambiguation mechanism: the first structurally matching rule wins.

use async_trait::async_trait;

use crate::pattern::Template;

/// Answer returned when no rule matches the query
pub const NOT_UNDERSTOOD: &str = "I don't understand";

/// Answer returned when a rule matched but its handler produced nothing
pub const NO_ANSWERS: &str = "No answers";

/// Result of dispatching one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Answers to show, one per line. Never empty: dispatch substitutes
    /// [`NO_ANSWERS`] for an empty handler result.
    Answers(Vec<String>),
    /// Explicit request to end the interaction loop. Not an error; the loop
    /// matches on this variant.
    Exit,
}

/// Core trait all question handlers implement.
///
/// A handler receives the tokens captured by its rule's wildcard slots and
/// produces an [`Outcome`]. Handlers are free to perform network I/O; any
/// collaborator failure must be localized into an `Error: <message>` answer
/// rather than propagated, so one bad query never ends the session.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Short handler name for logging
    fn name(&self) -> &str;

    /// Answer a query from its captured tokens
    async fn handle(&self, captures: &[String]) -> Outcome;
}

/// One recognized question shape bound to its handler
pub struct Rule {
    template: Template,
    handler: Box<dyn Handler>,
}

impl Rule {
    /// Bind a whitespace-separated pattern (with `%` wildcards) to a handler.
    pub fn new(pattern: &str, handler: Box<dyn Handler>) -> Self {
        Self {
            template: Template::parse(pattern),
            handler,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}

/// Ordered rule table. Insertion order is preserved exactly and decides which
/// rule answers a query both templates would match.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the first rule whose template matches and run its handler.
    ///
    /// Exactly one handler is invoked per call. No-match and empty-result are
    /// ordinary [`Outcome::Answers`] values, never errors.
    pub async fn dispatch(&self, query: &[String]) -> Outcome {
        for rule in &self.rules {
            if let Some(captures) = rule.template.matches(query) {
                tracing::debug!(handler = rule.handler.name(), ?captures, "rule matched");
                return match rule.handler.handle(&captures).await {
                    Outcome::Answers(answers) if answers.is_empty() => {
                        Outcome::Answers(vec![NO_ANSWERS.to_string()])
                    }
                    outcome => outcome,
                };
            }
        }

        tracing::debug!(?query, "no rule matched");
        Outcome::Answers(vec![NOT_UNDERSTOOD.to_string()])
    }
}

// ============================================================================
// TESTS
// ============================================================================
