//! Stream rule payloads.

use serde::{Deserialize, Serialize};

/// One filter rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub value: String,
}

/// Body of a rule registration request: `{"add": [{"value": ...}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRules {
    pub add: Vec<Rule>,
}

/// Combine each search term with the filter clause.
pub fn build_rules_payload(search_terms: &[String], filter_clause: &str) -> AddRules {
    let add = search_terms
        .iter()
        .map(|term| Rule {
            value: format!("{} {}", term.trim(), filter_clause.trim())
                .trim()
                .to_string(),
        })
        .collect();
    AddRules { add }
}
