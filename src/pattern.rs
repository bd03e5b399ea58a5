//! Wildcard template matching
//!
//! A [`Template`] is a fixed-length token pattern in which `%` matches (and
//! captures) any single query token. Matching is a lock-step walk with no
//! backtracking: a length mismatch or the first literal mismatch is an
//! immediate no-match.

/// The reserved token that matches and captures any single query token.
pub const WILDCARD: &str = "%";

/// Token representing one position of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal word that must equal the query token exactly
    Literal(String),
    /// Wildcard slot capturing the query token
    Wildcard,
}

/// Fixed-length token pattern defining a recognized query shape.
///
/// Immutable after construction. Supports any number of wildcard slots;
/// captures come back in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Parse a whitespace-separated pattern string, e.g. `"when was % born"`.
    pub fn parse(pattern: &str) -> Self {
        let tokens = pattern
            .split_whitespace()
            .map(|word| {
                if word == WILDCARD {
                    Token::Wildcard
                } else {
                    Token::Literal(word.to_string())
                }
            })
            .collect();
        Self { tokens }
    }

    /// Number of tokens in the template
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of wildcard slots
    pub fn wildcards(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Wildcard))
            .count()
    }

    /// Match this template against a query token sequence.
    ///
    /// Returns `Some(captures)` with one capture per wildcard slot (empty for
    /// wildcard-free templates), or `None` if the query does not fit. The two
    /// cases are distinct: `Some(vec![])` is a successful match.
    pub fn matches(&self, query: &[String]) -> Option<Vec<String>> {
        if self.tokens.len() != query.len() {
            return None;
        }

        let mut captures = Vec::with_capacity(self.wildcards());
        for (token, word) in self.tokens.iter().zip(query) {
            match token {
                Token::Wildcard => captures.push(word.clone()),
                Token::Literal(lit) if lit == word => {}
                Token::Literal(_) => return None,
            }
        }

        Some(captures)
    }
}

/// Normalize one line of user input into a query token sequence:
/// strip question marks, lowercase, split on whitespace.
pub fn normalize_query(input: &str) -> Vec<String> {
    input
        .replace('?', "")
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
