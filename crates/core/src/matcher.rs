use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::RuleCatalog;
use crate::models::{MatchOutcome, Rule};
use crate::normalize::{LowercaseNormalizer, Normalizer};

pub fn respond<'a>(normalized: &str, catalog: &'a RuleCatalog) -> &'a str {
    match catalog.find(normalized) {
        Some((_, rule)) => &rule.response,
        None => catalog.fallback(),
    }
}

#[derive(Clone)]
pub struct Matcher {
    catalog: RuleCatalog,
    normalizer: Arc<dyn Normalizer>,
}

impl Matcher {
    pub fn new(catalog: RuleCatalog, normalizer: Arc<dyn Normalizer>) -> Self {
        Self {
            catalog,
            normalizer,
        }
    }

    pub fn with_default_normalizer(catalog: RuleCatalog) -> Self {
        Self::new(catalog, Arc::new(LowercaseNormalizer))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn normalizer(&self) -> &dyn Normalizer {
        self.normalizer.as_ref()
    }

    pub fn get_response(&self, utterance: &str) -> &str {
        let normalized = self.normalizer.normalize(utterance);
        let (_, response) = self.dispatch(&normalized);
        response
    }

    pub fn explain(&self, utterance: &str) -> MatchOutcome {
        let normalized = self.normalizer.normalize(utterance);
        let (matched, response) = self.dispatch(&normalized);

        MatchOutcome {
            rule_index: matched.map(|(index, _)| index),
            trigger: matched.map(|(_, rule)| rule.trigger_phrase.clone()),
            response: response.to_string(),
            normalized,
        }
    }

    fn dispatch(&self, normalized: &str) -> (Option<(usize, &Rule)>, &str) {
        let matched = self.catalog.find(normalized);

        let response = match matched {
            Some((index, rule)) => {
                debug!(rule_index = index, trigger = %rule.trigger_phrase, "rule matched");
                rule.response.as_str()
            }
            None => {
                debug!(rule = "fallback", "fallback reply");
                self.catalog.fallback()
            }
        };

        (matched, response)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("rules", &self.catalog.len())
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}
