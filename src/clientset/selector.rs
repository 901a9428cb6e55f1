//! Equality-based label selectors

use crate::error::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A conjunction of `key=value` requirements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    requirements: Vec<(String, String)>,
}

impl LabelSelector {
    /// Selector with a single `key=value` requirement
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            requirements: vec![(key.into(), value.into())],
        }
    }

    pub fn and(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.requirements.push((key.into(), value.into()));
        self
    }

    /// An empty selector matches everything
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.requirements
            .iter()
            .all(|(key, value)| labels.get(key) == Some(value))
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .requirements
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        f.write_str(&terms.join(","))
    }
}

impl FromStr for LabelSelector {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        let mut requirements = Vec::new();
        for term in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (key, value) = term
                .split_once("==")
                .or_else(|| term.split_once('='))
                .ok_or_else(|| StoreError::InvalidSelector(format!("unsupported term '{term}'")))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(StoreError::InvalidSelector(format!("empty key in '{term}'")));
            }
            requirements.push((key.to_string(), value.trim().to_string()));
        }
        Ok(Self { requirements })
    }
}
