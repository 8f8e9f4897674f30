//! Typed CloudFormation resource definitions.
//!
//! Each property struct serializes to the `Properties` block of its resource
//! type. [`Resource`] wraps one of them together with its `DependsOn` list.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::intrinsic::Expr;

/// Resource type of every definition the gateway template can contain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceKind {
    RestApi(RestApi),
    ApiResource(ApiResource),
    Method(Method),
    Authorizer(Authorizer),
    Deployment(Deployment),
    VpcLink(VpcLink),
    DomainName(DomainName),
    WebSocketApi(WebSocketApi),
    WebSocketRoute(WebSocketRoute),
    WebSocketIntegration(WebSocketIntegration),
    WebSocketIntegrationResponse(WebSocketIntegrationResponse),
    WebSocketDeployment(WebSocketDeployment),
    WebSocketStage(WebSocketStage),
    LoadBalancer(LoadBalancer),
    Listener(Listener),
    TargetGroup(TargetGroup),
    SecurityGroupIngress(SecurityGroupIngress),
}

impl ResourceKind {
    /// The CloudFormation `Type` string.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::RestApi(_) => "AWS::ApiGateway::RestApi",
            ResourceKind::ApiResource(_) => "AWS::ApiGateway::Resource",
            ResourceKind::Method(_) => "AWS::ApiGateway::Method",
            ResourceKind::Authorizer(_) => "AWS::ApiGateway::Authorizer",
            ResourceKind::Deployment(_) => "AWS::ApiGateway::Deployment",
            ResourceKind::VpcLink(_) => "AWS::ApiGateway::VpcLink",
            ResourceKind::DomainName(_) => "AWS::ApiGateway::DomainName",
            ResourceKind::WebSocketApi(_) => "AWS::ApiGatewayV2::Api",
            ResourceKind::WebSocketRoute(_) => "AWS::ApiGatewayV2::Route",
            ResourceKind::WebSocketIntegration(_) => "AWS::ApiGatewayV2::Integration",
            ResourceKind::WebSocketIntegrationResponse(_) => {
                "AWS::ApiGatewayV2::IntegrationResponse"
            }
            ResourceKind::WebSocketDeployment(_) => "AWS::ApiGatewayV2::Deployment",
            ResourceKind::WebSocketStage(_) => "AWS::ApiGatewayV2::Stage",
            ResourceKind::LoadBalancer(_) => "AWS::ElasticLoadBalancingV2::LoadBalancer",
            ResourceKind::Listener(_) => "AWS::ElasticLoadBalancingV2::Listener",
            ResourceKind::TargetGroup(_) => "AWS::ElasticLoadBalancingV2::TargetGroup",
            ResourceKind::SecurityGroupIngress(_) => "AWS::EC2::SecurityGroupIngress",
        }
    }
}

/// A resource definition as it appears under `Resources`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub depends_on: Vec<String>,
}

impl Resource {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            depends_on: Vec::new(),
        }
    }

    pub fn with_depends_on<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn as_method(&self) -> Option<&Method> {
        match &self.kind {
            ResourceKind::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_api_resource(&self) -> Option<&ApiResource> {
        match &self.kind {
            ResourceKind::ApiResource(resource) => Some(resource),
            _ => None,
        }
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.depends_on.is_empty() { 2 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("Type", self.type_name())?;
        map.serialize_entry("Properties", &self.kind)?;
        if !self.depends_on.is_empty() {
            map.serialize_entry("DependsOn", &self.depends_on)?;
        }
        map.end()
    }
}

/// Key/value tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointConfiguration {
    pub types: Vec<String>,
}

impl EndpointConfiguration {
    pub fn edge() -> Self {
        Self {
            types: vec!["EDGE".to_string()],
        }
    }
}

// API Gateway (REST)

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestApi {
    pub api_key_source_type: String,
    pub endpoint_configuration: EndpointConfiguration,
    pub name: Expr,
}

/// One path segment of the REST API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResource {
    pub parent_id: Expr,
    pub path_part: String,
    pub rest_api_id: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Method {
    pub authorization_type: String,
    pub authorizer_id: Expr,
    pub http_method: String,
    pub integration: Integration,
    pub request_parameters: BTreeMap<String, bool>,
    pub resource_id: Expr,
    pub rest_api_id: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Integration {
    pub connection_id: Expr,
    pub connection_type: String,
    pub integration_http_method: String,
    pub passthrough_behavior: String,
    pub request_parameters: BTreeMap<String, String>,
    pub timeout_in_millis: u32,
    #[serde(rename = "Type")]
    pub integration_type: String,
    pub uri: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Authorizer {
    pub identity_source: String,
    pub name: String,
    #[serde(rename = "ProviderARNs")]
    pub provider_arns: Vec<String>,
    pub rest_api_id: Expr,
    #[serde(rename = "Type")]
    pub authorizer_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deployment {
    pub rest_api_id: Expr,
    pub stage_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcLink {
    pub name: Expr,
    pub target_arns: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainName {
    pub certificate_arn: String,
    pub domain_name: String,
    pub endpoint_configuration: EndpointConfiguration,
}

// API Gateway V2 (WebSocket)

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebSocketApi {
    pub name: Expr,
    pub protocol_type: String,
    pub route_selection_expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebSocketRoute {
    pub api_id: Expr,
    pub authorization_type: String,
    pub route_key: String,
    pub target: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebSocketIntegration {
    pub api_id: Expr,
    pub connection_id: Expr,
    pub connection_type: String,
    pub integration_method: String,
    pub integration_type: String,
    pub integration_uri: Expr,
    pub passthrough_behavior: String,
    pub timeout_in_millis: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebSocketIntegrationResponse {
    pub api_id: Expr,
    pub integration_id: Expr,
    pub integration_response_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebSocketDeployment {
    pub api_id: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebSocketStage {
    pub api_id: Expr,
    pub deployment_id: Expr,
    pub stage_name: String,
}

// Elastic Load Balancing V2

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancer {
    pub ip_address_type: String,
    pub scheme: String,
    pub subnets: Vec<String>,
    pub tags: Vec<Tag>,
    #[serde(rename = "Type")]
    pub load_balancer_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listener {
    pub default_actions: Vec<ListenerAction>,
    pub load_balancer_arn: Expr,
    pub port: u16,
    pub protocol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListenerAction {
    pub target_group_arn: Expr,
    #[serde(rename = "Type")]
    pub action_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetGroup {
    pub health_check_interval_seconds: u32,
    pub health_check_port: String,
    pub health_check_protocol: String,
    pub health_check_timeout_seconds: u32,
    pub healthy_threshold_count: u32,
    pub port: u16,
    pub protocol: String,
    pub tags: Vec<Tag>,
    pub target_type: String,
    pub targets: Vec<TargetDescription>,
    pub unhealthy_threshold_count: u32,
    pub vpc_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetDescription {
    pub id: String,
}

// EC2

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupIngress {
    pub cidr_ip: String,
    pub from_port: u16,
    pub group_id: String,
    pub ip_protocol: String,
    pub to_port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_envelope() {
        let resource = Resource::new(ResourceKind::Deployment(Deployment {
            rest_api_id: Expr::reference("RestAPI"),
            stage_name: "prod".to_string(),
        }))
        .with_depends_on(["MethodB", "MethodA"]);

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(
            value,
            json!({
                "Type": "AWS::ApiGateway::Deployment",
                "Properties": {"RestApiId": {"Ref": "RestAPI"}, "StageName": "prod"},
                "DependsOn": ["MethodB", "MethodA"]
            })
        );
    }

    #[test]
    fn test_empty_depends_on_is_omitted() {
        let resource = Resource::new(ResourceKind::WebSocketDeployment(WebSocketDeployment {
            api_id: Expr::reference("webSocketAPI"),
        }));
        let value = serde_json::to_value(&resource).unwrap();
        assert!(value.get("DependsOn").is_none());
    }

    #[test]
    fn test_renamed_fields() {
        let authorizer = Authorizer {
            identity_source: "method.request.header.Authorization".to_string(),
            name: "Cognito-Authorizer".to_string(),
            provider_arns: vec!["arn:pool".to_string()],
            rest_api_id: Expr::reference("RestAPI"),
            authorizer_type: "COGNITO_USER_POOLS".to_string(),
        };
        let value = serde_json::to_value(&authorizer).unwrap();
        assert_eq!(value["ProviderARNs"], json!(["arn:pool"]));
        assert_eq!(value["Type"], json!("COGNITO_USER_POOLS"));
    }

    #[test]
    fn test_accessors() {
        let resource = Resource::new(ResourceKind::ApiResource(ApiResource {
            parent_id: Expr::get_att("RestAPI", "RootResourceId"),
            path_part: "orders".to_string(),
            rest_api_id: Expr::reference("RestAPI"),
        }));
        assert!(resource.as_method().is_none());
        assert_eq!(resource.as_api_resource().map(|r| r.path_part.as_str()), Some("orders"));
        assert_eq!(resource.type_name(), "AWS::ApiGateway::Resource");
    }
}
