//! Template graph and the serializable template document.

use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CfnError, CfnResult};
use crate::intrinsic::Expr;
use crate::resources::Resource;

/// CloudFormation template format version.
pub const FORMAT_VERSION: &str = "2010-09-09";

/// Resources keyed by logical name.
///
/// The graph only grows. Writing the same definition under an existing name
/// is a no-op; writing a different one is a collision.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateGraph {
    resources: BTreeMap<String, Resource>,
}

impl TemplateGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under `name`.
    pub fn insert(&mut self, name: impl Into<String>, resource: Resource) -> CfnResult<()> {
        match self.resources.entry(name.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(resource);
                Ok(())
            }
            btree_map::Entry::Occupied(entry) => {
                if *entry.get() == resource {
                    debug!("Resource {} already present", entry.key());
                    Ok(())
                } else {
                    Err(CfnError::LogicalNameCollision(entry.key().clone()))
                }
            }
        }
    }

    /// Add every resource from another graph.
    pub fn merge(&mut self, other: TemplateGraph) -> CfnResult<()> {
        for (name, resource) in other.resources {
            self.insert(name, resource)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Logical names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Template output value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    #[serde(rename = "Value")]
    pub value: Expr,
}

impl Output {
    pub fn new(value: Expr) -> Self {
        Self { value }
    }
}

/// A complete CloudFormation template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Resources")]
    pub resources: TemplateGraph,
    #[serde(rename = "Outputs")]
    pub outputs: BTreeMap<String, Output>,
}

impl Template {
    pub fn new(resources: TemplateGraph) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            description: None,
            resources,
            outputs: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_output(&mut self, key: impl Into<String>, value: Expr) {
        self.outputs.insert(key.into(), Output::new(value));
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    pub fn output(&self, key: &str) -> Option<&Expr> {
        self.outputs.get(key).map(|o| &o.value)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> CfnResult<String> {
        let json = serde_json::to_string_pretty(self)?;
        info!("Rendered template with {} resources as JSON", self.resources.len());
        Ok(json)
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> CfnResult<String> {
        let yaml = serde_yaml::to_string(self)?;
        info!("Rendered template with {} resources as YAML", self.resources.len());
        Ok(yaml)
    }
}
