use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::{CatalogFile, Rule, ShadowKind, Shadowing, DEFAULT_FALLBACK};
use crate::normalize::Normalizer;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("rule {index} has an empty trigger phrase")]
    EmptyTrigger { index: usize },

    #[error("trigger phrase {trigger:?} at rule {duplicate} duplicates rule {first}")]
    DuplicateTrigger {
        trigger: String,
        first: usize,
        duplicate: usize,
    },

    #[error("rule {index} ({trigger:?}) has an empty response")]
    EmptyResponse { index: usize, trigger: String },

    #[error("fallback response must not be empty")]
    EmptyFallback,

    #[error("failed reading catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    fallback: String,
}

impl RuleCatalog {
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Result<Self, CatalogError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(CatalogError::EmptyFallback);
        }

        validate_rules(&rules)?;
        info!(rules = rules.len(), "rule catalog loaded");

        Ok(Self { rules, fallback })
    }

    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, CatalogError> {
        Self::new(rules, DEFAULT_FALLBACK)
    }

    pub fn from_file_contents(file: CatalogFile) -> Result<Self, CatalogError> {
        let fallback = file
            .fallback
            .unwrap_or_else(|| DEFAULT_FALLBACK.to_string());
        Self::new(file.rules, fallback)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_file_contents(file)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn with_fallback(self, fallback: impl Into<String>) -> Result<Self, CatalogError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(CatalogError::EmptyFallback);
        }
        Ok(Self { fallback, ..self })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn find(&self, normalized: &str) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| normalized.contains(rule.trigger_phrase.as_str()))
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            fallback: Some(self.fallback.clone()),
            rules: self.rules.clone(),
        }
    }

    // Any input containing a shadowed trigger also contains the earlier trigger.
    pub fn shadowed_rules(&self, normalizer: &dyn Normalizer) -> Vec<Shadowing> {
        let mut report = Vec::new();

        for (index, rule) in self.rules.iter().enumerate() {
            if normalizer.normalize(&rule.trigger_phrase) != rule.trigger_phrase {
                report.push(Shadowing {
                    kind: ShadowKind::Unreachable,
                    rule_index: index,
                    trigger: rule.trigger_phrase.clone(),
                    shadowed_by: None,
                });
                continue;
            }

            let earlier = self.rules[..index]
                .iter()
                .position(|prior| rule.trigger_phrase.contains(prior.trigger_phrase.as_str()));

            if let Some(prior) = earlier {
                report.push(Shadowing {
                    kind: ShadowKind::Shadowed,
                    rule_index: index,
                    trigger: rule.trigger_phrase.clone(),
                    shadowed_by: Some(prior),
                });
            }
        }

        report
    }
}

fn validate_rules(rules: &[Rule]) -> Result<(), CatalogError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(rules.len());

    for (index, rule) in rules.iter().enumerate() {
        if rule.trigger_phrase.is_empty() {
            return Err(CatalogError::EmptyTrigger { index });
        }

        if rule.response.trim().is_empty() {
            return Err(CatalogError::EmptyResponse {
                index,
                trigger: rule.trigger_phrase.clone(),
            });
        }

        if let Some(first) = seen.insert(rule.trigger_phrase.as_str(), index) {
            return Err(CatalogError::DuplicateTrigger {
                trigger: rule.trigger_phrase.clone(),
                first,
                duplicate: index,
            });
        }
    }

    Ok(())
}
