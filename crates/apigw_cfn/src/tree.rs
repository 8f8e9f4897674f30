//! Routing tree construction.
//!
//! Each path rule contributes one routing node and one proxy method per
//! segment, including the catch-all segment appended to every rule. Rules that
//! share a prefix share the nodes for that prefix.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::dependencies::DependencySet;
use crate::error::{CfnError, CfnResult};
use crate::integration;
use crate::intrinsic::Expr;
use crate::naming::{self, ids};
use crate::resources::{ApiResource, Resource, ResourceKind};
use crate::template::TemplateGraph;

/// Where a routing node hangs in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentRef {
    /// The REST API's implicit root resource.
    Root,
    /// Another routing node, by logical name.
    Node(String),
}

impl ParentRef {
    pub fn to_expr(&self) -> Expr {
        match self {
            ParentRef::Root => Expr::get_att(ids::REST_API, "RootResourceId"),
            ParentRef::Node(name) => Expr::reference(name.as_str()),
        }
    }
}

/// Routing node for one path segment.
pub fn routing_node(parent: &ParentRef, path_part: &str) -> Resource {
    Resource::new(ResourceKind::ApiResource(ApiResource {
        parent_id: parent.to_expr(),
        path_part: path_part.to_string(),
        rest_api_id: Expr::reference(ids::REST_API),
    }))
}

/// Routing nodes and methods derived from a set of path rules.
#[derive(Debug, Clone, Default)]
pub struct RouteTree {
    pub graph: TemplateGraph,
    /// Logical names of every method in `graph`.
    pub methods: DependencySet,
    /// Method logical name to runtime path.
    pub routes: BTreeMap<String, String>,
}

impl RouteTree {
    /// Build the tree for `paths`. Fails if there are none.
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> CfnResult<Self> {
        if paths.is_empty() {
            return Err(CfnError::NoPaths);
        }

        let mut builder = RouteTreeBuilder::new();
        for path in paths {
            builder.add_path(path.as_ref())?;
        }
        let tree = builder.build();

        info!(
            "Built routing tree from {} paths: {} resources, {} methods",
            paths.len(),
            tree.graph.len(),
            tree.methods.len()
        );
        Ok(tree)
    }
}

/// Incremental builder for [`RouteTree`].
#[derive(Debug, Default)]
pub struct RouteTreeBuilder {
    tree: RouteTree,
}

impl RouteTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one path rule.
    ///
    /// Segments are walked left to right and each node's parent is the node
    /// created for the previous segment, so parents always exist before their
    /// children.
    pub fn add_path(&mut self, path: &str) -> CfnResult<()> {
        let segments = naming::route_segments(path);

        if segments[1..segments.len() - 1].iter().any(String::is_empty) && path != "/" {
            warn!("Path {} contains an empty segment", path);
        }

        let mut parent = ParentRef::Root;
        for index in 1..segments.len() {
            let logical = naming::logical_name(&segments, index);
            let resource_name = naming::resource_name(&logical);
            let method_name = naming::method_name(&logical);
            let runtime_path = naming::runtime_path(&segments, index);

            debug!("{} -> {} ({})", path, method_name, runtime_path);

            self.tree
                .graph
                .insert(resource_name.as_str(), routing_node(&parent, &segments[index]))?;
            self.tree.graph.insert(
                method_name.as_str(),
                integration::proxy_method(&resource_name, &runtime_path),
            )?;

            self.tree.methods.insert(method_name.as_str());
            self.tree.routes.insert(method_name, runtime_path);

            parent = ParentRef::Node(resource_name);
        }

        Ok(())
    }

    pub fn build(self) -> RouteTree {
        self.tree
    }
}
