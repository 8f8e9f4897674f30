//! WebSocket front door.
//!
//! A single `$default` route proxies every message through the same VPC link
//! as the REST API.

use crate::integration::{
    backend_uri, HTTP_PROXY, INTEGRATION_TIMEOUT_MILLIS, VPC_LINK_CONNECTION, WHEN_NO_MATCH,
};
use crate::intrinsic::{Expr, STACK_NAME};
use crate::naming::ids;
use crate::resources::{
    Resource, ResourceKind, WebSocketApi, WebSocketDeployment, WebSocketIntegration,
    WebSocketIntegrationResponse, WebSocketRoute, WebSocketStage,
};

pub const DEFAULT_ROUTE_KEY: &str = "$default";
pub const ROUTE_SELECTION_EXPRESSION: &str = "$request.body.action";

fn api_id() -> Expr {
    Expr::reference(ids::WEBSOCKET_API)
}

pub fn api() -> Resource {
    Resource::new(ResourceKind::WebSocketApi(WebSocketApi {
        name: Expr::join("", vec![Expr::reference(STACK_NAME), "-websocket".into()]),
        protocol_type: "WEBSOCKET".to_string(),
        route_selection_expression: ROUTE_SELECTION_EXPRESSION.to_string(),
    }))
}

pub fn integration() -> Resource {
    Resource::new(ResourceKind::WebSocketIntegration(WebSocketIntegration {
        api_id: api_id(),
        connection_id: Expr::reference(ids::VPC_LINK),
        connection_type: VPC_LINK_CONNECTION.to_string(),
        integration_method: "ANY".to_string(),
        integration_type: HTTP_PROXY.to_string(),
        integration_uri: backend_uri("/"),
        passthrough_behavior: WHEN_NO_MATCH.to_string(),
        timeout_in_millis: INTEGRATION_TIMEOUT_MILLIS,
    }))
}

pub fn default_route() -> Resource {
    Resource::new(ResourceKind::WebSocketRoute(WebSocketRoute {
        api_id: api_id(),
        authorization_type: "NONE".to_string(),
        route_key: DEFAULT_ROUTE_KEY.to_string(),
        target: Expr::join(
            "/",
            vec!["integrations".into(), Expr::reference(ids::WEBSOCKET_INTEGRATION)],
        ),
    }))
}

pub fn integration_response() -> Resource {
    Resource::new(ResourceKind::WebSocketIntegrationResponse(
        WebSocketIntegrationResponse {
            api_id: api_id(),
            integration_id: Expr::reference(ids::WEBSOCKET_INTEGRATION),
            integration_response_key: DEFAULT_ROUTE_KEY.to_string(),
        },
    ))
}

pub fn deployment() -> Resource {
    Resource::new(ResourceKind::WebSocketDeployment(WebSocketDeployment {
        api_id: api_id(),
    }))
    .with_depends_on([
        ids::WEBSOCKET_INTEGRATION,
        ids::WEBSOCKET_API,
        ids::WEBSOCKET_ROUTE,
        ids::WEBSOCKET_INTEGRATION_RESPONSE,
    ])
}

pub fn stage(stage_name: &str) -> Resource {
    Resource::new(ResourceKind::WebSocketStage(WebSocketStage {
        api_id: api_id(),
        deployment_id: Expr::reference(ids::WEBSOCKET_DEPLOYMENT),
        stage_name: stage_name.to_string(),
    }))
}

/// Every WebSocket resource with its logical name.
pub fn resources(stage_name: &str) -> Vec<(&'static str, Resource)> {
    vec![
        (ids::WEBSOCKET_API, api()),
        (ids::WEBSOCKET_INTEGRATION, integration()),
        (ids::WEBSOCKET_ROUTE, default_route()),
        (ids::WEBSOCKET_INTEGRATION_RESPONSE, integration_response()),
        (ids::WEBSOCKET_DEPLOYMENT, deployment()),
        (ids::WEBSOCKET_STAGE, stage(stage_name)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_name_is_derived_from_stack() {
        let value = serde_json::to_value(api()).unwrap();
        assert_eq!(value["Type"], "AWS::ApiGatewayV2::Api");
        assert_eq!(
            value["Properties"]["Name"],
            json!({"Fn::Join": ["", [{"Ref": "AWS::StackName"}, "-websocket"]]})
        );
        assert_eq!(value["Properties"]["ProtocolType"], "WEBSOCKET");
    }

    #[test]
    fn test_route_targets_integration() {
        let value = serde_json::to_value(default_route()).unwrap();
        assert_eq!(
            value["Properties"]["Target"],
            json!({"Fn::Join": ["/", ["integrations", {"Ref": "webSocketIntegration"}]]})
        );
        assert_eq!(value["Properties"]["RouteKey"], "$default");
    }

    #[test]
    fn test_integration_uses_vpc_link() {
        let value = serde_json::to_value(integration()).unwrap();
        let props = &value["Properties"];
        assert_eq!(props["ConnectionId"], json!({"Ref": "VPCLink"}));
        assert_eq!(props["IntegrationType"], "HTTP_PROXY");
        assert_eq!(props["TimeoutInMillis"], 29000);
    }

    #[test]
    fn test_deployment_waits_for_route() {
        let resource = deployment();
        assert!(resource.depends_on.iter().any(|d| d == "webSocketDefaultRoute"));
        assert_eq!(resource.depends_on.len(), 4);
    }

    #[test]
    fn test_resources() {
        let all = resources("prod");
        let names: Vec<_> = all.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "webSocketAPI",
                "webSocketIntegration",
                "webSocketDefaultRoute",
                "webSocketIntegrationResponse",
                "webSocketDeployment",
                "webSocketStage",
            ]
        );
        let stage = serde_json::to_value(&all[5].1).unwrap();
        assert_eq!(stage["Properties"]["StageName"], "prod");
        assert_eq!(stage["Properties"]["DeploymentId"], json!({"Ref": "webSocketDeployment"}));
    }
}
