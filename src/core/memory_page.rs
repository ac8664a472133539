use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::page::PageContext;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// In-memory page: a flat id → element map plus the alerts shown so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryPage {
    #[serde(default)]
    pub elements: BTreeMap<String, Element>,
    #[serde(skip)]
    alerts: Vec<String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper used by hosts and tests.
    pub fn with_control(mut self, id: &str, value: &str) -> Self {
        self.set_value(id, value);
        self
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        self.elements.entry(id.to_string()).or_default().value = value.to_string();
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

impl PageContext for MemoryPage {
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> AppResult<()> {
        let el = self
            .elements
            .get_mut(id)
            .ok_or_else(|| AppError::MissingControl(id.to_string()))?;
        el.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn value_of(&self, id: &str) -> AppResult<String> {
        self.elements
            .get(id)
            .map(|e| e.value.clone())
            .ok_or_else(|| AppError::MissingControl(id.to_string()))
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn has_control(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}
