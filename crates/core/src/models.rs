use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK: &str = "I'm not sure about that. Could you rephrase?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "trigger")]
    pub trigger_phrase: String,
    pub response: String,
}

impl Rule {
    pub fn new(trigger_phrase: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            trigger_phrase: trigger_phrase.into(),
            response: response.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub normalized: String,
    pub rule_index: Option<usize>,
    pub trigger: Option<String>,
    pub response: String,
}

impl MatchOutcome {
    pub fn is_fallback(&self) -> bool {
        self.rule_index.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowKind {
    Shadowed,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shadowing {
    pub kind: ShadowKind,
    pub rule_index: usize,
    pub trigger: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadowed_by: Option<usize>,
}
