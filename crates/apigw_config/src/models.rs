//! Data models for ingress definitions.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Everything needed to synthesize the gateway template for one ingress rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressDefinition {
    /// Ordered path rules, e.g. `/orders/{id}`.
    pub paths: Vec<String>,
    /// Port the backend instances listen on.
    pub node_port: u16,
    /// Stage the deployment is published under.
    pub stage_name: String,
    /// Client identities allowed to call the API. Echoed in the outputs.
    #[serde(default)]
    pub client_arns: Vec<String>,
    /// Cognito user pools backing the authorizer.
    #[serde(default)]
    pub cognito_user_pool_arns: Vec<String>,
    #[serde(default)]
    pub custom_domain: Option<CustomDomain>,
    /// Whether to build the WebSocket front door alongside the REST API.
    #[serde(default = "default_websocket")]
    pub websocket: bool,
    #[serde(default)]
    pub network: NetworkFacts,
}

fn default_websocket() -> bool {
    true
}

impl IngressDefinition {
    /// Create a definition with no network facts and no authorization.
    pub fn new(node_port: u16, stage_name: impl Into<String>) -> Self {
        Self {
            paths: Vec::new(),
            node_port,
            stage_name: stage_name.into(),
            client_arns: Vec::new(),
            cognito_user_pool_arns: Vec::new(),
            custom_domain: None,
            websocket: true,
            network: NetworkFacts::default(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_client_arn(mut self, arn: impl Into<String>) -> Self {
        self.client_arns.push(arn.into());
        self
    }

    pub fn with_user_pool_arn(mut self, arn: impl Into<String>) -> Self {
        self.cognito_user_pool_arns.push(arn.into());
        self
    }

    pub fn with_custom_domain(
        mut self,
        domain_name: impl Into<String>,
        certificate_arn: impl Into<String>,
    ) -> Self {
        self.custom_domain = Some(CustomDomain {
            domain_name: domain_name.into(),
            certificate_arn: certificate_arn.into(),
        });
        self
    }

    pub fn with_websocket(mut self, enabled: bool) -> Self {
        self.websocket = enabled;
        self
    }

    pub fn with_network(mut self, network: NetworkFacts) -> Self {
        self.network = network;
        self
    }

    /// The custom domain, if both its name and certificate are set.
    pub fn complete_custom_domain(&self) -> Option<&CustomDomain> {
        self.custom_domain.as_ref().filter(|d| d.is_complete())
    }
}

/// Custom domain binding for the REST front door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDomain {
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub certificate_arn: String,
}

impl CustomDomain {
    pub fn is_complete(&self) -> bool {
        !self.domain_name.is_empty() && !self.certificate_arn.is_empty()
    }
}

/// Network facts discovered for the cluster hosting the backend.
///
/// Discovery happens elsewhere; every field arrives already resolved, or not
/// at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFacts {
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub cidr_block: Option<String>,
    #[serde(default)]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(default)]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(default)]
    pub instance_ids: Vec<String>,
}

impl NetworkFacts {
    pub fn new(vpc_id: impl Into<String>, cidr_block: impl Into<String>) -> Self {
        Self {
            vpc_id: Some(vpc_id.into()),
            cidr_block: Some(cidr_block.into()),
            ..Self::default()
        }
    }

    pub fn with_subnets<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnet_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_security_groups<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_group_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_instances<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instance_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Borrow the facts with every required field present.
    ///
    /// Subnet and security-group lists must be present and non-empty.
    pub fn resolve(&self) -> ConfigResult<ResolvedNetwork<'_>> {
        let vpc_id = required(self.vpc_id.as_deref(), "network.vpc_id")?;
        let cidr_block = required(self.cidr_block.as_deref(), "network.cidr_block")?;
        let subnet_ids = required_list(self.subnet_ids.as_deref(), "network.subnet_ids")?;
        let security_group_ids =
            required_list(self.security_group_ids.as_deref(), "network.security_group_ids")?;

        Ok(ResolvedNetwork {
            vpc_id,
            cidr_block,
            subnet_ids,
            security_group_ids,
            instance_ids: &self.instance_ids,
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> ConfigResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField(field.to_string())),
    }
}

fn required_list<'a>(value: Option<&'a [String]>, field: &str) -> ConfigResult<&'a [String]> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField(field.to_string())),
    }
}

/// Network facts with all required fields known to be present.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedNetwork<'a> {
    pub vpc_id: &'a str,
    pub cidr_block: &'a str,
    pub subnet_ids: &'a [String],
    pub security_group_ids: &'a [String],
    pub instance_ids: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_network() -> NetworkFacts {
        NetworkFacts::new("vpc-1", "10.0.0.0/16")
            .with_subnets(["subnet-a", "subnet-b"])
            .with_security_groups(["sg-1"])
            .with_instances(["i-1", "i-2"])
    }

    #[test]
    fn test_resolve_complete_network() {
        let network = full_network();
        let resolved = network.resolve().unwrap();
        assert_eq!(resolved.vpc_id, "vpc-1");
        assert_eq!(resolved.cidr_block, "10.0.0.0/16");
        assert_eq!(resolved.subnet_ids.len(), 2);
        assert_eq!(resolved.instance_ids, ["i-1", "i-2"]);
    }

    #[test]
    fn test_resolve_missing_vpc() {
        let mut network = full_network();
        network.vpc_id = None;
        let err = network.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "network.vpc_id"));
    }

    #[test]
    fn test_resolve_empty_security_groups() {
        let network = full_network().with_security_groups(Vec::<String>::new());
        let err = network.resolve().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField(ref f) if f == "network.security_group_ids"
        ));
    }

    #[test]
    fn test_instances_are_optional() {
        let mut network = full_network();
        network.instance_ids.clear();
        assert!(network.resolve().is_ok());
    }

    #[test]
    fn test_custom_domain_requires_both_parts() {
        let def = IngressDefinition::new(30080, "prod").with_custom_domain("api.example.com", "");
        assert!(def.complete_custom_domain().is_none());

        let def = def.with_custom_domain("api.example.com", "arn:aws:acm:cert");
        assert_eq!(
            def.complete_custom_domain().map(|d| d.domain_name.as_str()),
            Some("api.example.com")
        );
    }

    #[test]
    fn test_builder() {
        let def = IngressDefinition::new(30080, "prod")
            .with_paths(["/a", "/b"])
            .with_path("/c")
            .with_client_arn("arn:client")
            .with_user_pool_arn("arn:pool")
            .with_websocket(false);

        assert_eq!(def.paths, ["/a", "/b", "/c"]);
        assert_eq!(def.client_arns, ["arn:client"]);
        assert_eq!(def.cognito_user_pool_arns, ["arn:pool"]);
        assert!(!def.websocket);
    }
}
