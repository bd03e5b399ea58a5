//! Question handlers
//!
//! The closed set of [`Handler`] implementations behind the rule table: one
//! field-lookup handler per recognized question plus the quit handler, and the
//! factory that binds them to their templates in priority order.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FactboxError;
use crate::fields::FieldProbe;
use crate::rules::{Handler, Outcome, Rule, RuleSet};
use crate::wiki::WikiClient;

/// Looks up one factual attribute of the entity named by the captures.
///
/// Collaborator failures (lookup and field-format alike) are localized into a
/// single `Error: <message>` answer; the loop stays alive across bad queries.
pub struct FieldHandler {
    client: Arc<WikiClient>,
    probe: FieldProbe,
}

impl FieldHandler {
    pub fn new(client: Arc<WikiClient>, probe: FieldProbe) -> Self {
        Self { client, probe }
    }

    fn boxed(client: &Arc<WikiClient>, probe: FieldProbe) -> Box<dyn Handler> {
        Box::new(Self::new(Arc::clone(client), probe))
    }

    async fn lookup(&self, entity: &str) -> Result<String, FactboxError> {
        let text = self.client.summary_text(entity).await?;
        self.probe.extract(&text)
    }
}

#[async_trait]
impl Handler for FieldHandler {
    fn name(&self) -> &str {
        self.probe.name()
    }

    async fn handle(&self, captures: &[String]) -> Outcome {
        let entity = captures.join(" ");
        match self.lookup(&entity).await {
            Ok(value) => Outcome::Answers(vec![value]),
            Err(e) => {
                tracing::debug!(handler = self.name(), entity = %entity, error = %e, "lookup failed");
                Outcome::Answers(vec![format!("Error: {e}")])
            }
        }
    }
}

/// Ends the interaction loop.
pub struct QuitHandler;

#[async_trait]
impl Handler for QuitHandler {
    fn name(&self) -> &str {
        "quit"
    }

    async fn handle(&self, _captures: &[String]) -> Outcome {
        Outcome::Exit
    }
}

/// Build the rule table, in priority order.
pub fn default_rules(client: Arc<WikiClient>) -> RuleSet {
    RuleSet::new(vec![
        Rule::new(
            "when was % born",
            FieldHandler::boxed(&client, FieldProbe::BirthDate),
        ),
        Rule::new(
            "what is the polar radius of %",
            FieldHandler::boxed(&client, FieldProbe::PolarRadius),
        ),
        Rule::new(
            "what is the population of %",
            FieldHandler::boxed(&client, FieldProbe::Population),
        ),
        Rule::new(
            "what is the capital of %",
            FieldHandler::boxed(&client, FieldProbe::Capital),
        ),
        Rule::new(
            "what are the coordinates of %",
            FieldHandler::boxed(&client, FieldProbe::Coordinates),
        ),
        Rule::new("bye", Box::new(QuitHandler)),
    ])
}

// ============================================================================
// TESTS
// ============================================================================
