//! Backend wiring for proxy methods.
//!
//! Every method forwards `ANY` request through the VPC link to the internal
//! network load balancer, authorized by the Cognito authorizer.

use std::collections::BTreeMap;

use crate::intrinsic::Expr;
use crate::naming::ids;
use crate::resources::{Integration, Method, Resource, ResourceKind};

/// API Gateway rejects integration timeouts above 29 seconds.
pub const INTEGRATION_TIMEOUT_MILLIS: u32 = 29_000;

/// Scheme used to reach the load balancer inside the VPC.
pub const BACKEND_SCHEME: &str = "http://";

pub const PROXY_METHOD_PARAMETER: &str = "method.request.path.proxy";
pub const PROXY_INTEGRATION_PARAMETER: &str = "integration.request.path.proxy";
pub const ACCEPT_ENCODING_PARAMETER: &str = "integration.request.header.Accept-Encoding";
pub const IDENTITY_ENCODING: &str = "'identity'";

pub const ANY_METHOD: &str = "ANY";
pub const COGNITO_USER_POOLS: &str = "COGNITO_USER_POOLS";
pub const VPC_LINK_CONNECTION: &str = "VPC_LINK";
pub const HTTP_PROXY: &str = "HTTP_PROXY";
pub const WHEN_NO_MATCH: &str = "WHEN_NO_MATCH";

/// `http://<load balancer DNS name><path>`
pub fn backend_uri(path: &str) -> Expr {
    Expr::join(
        "",
        vec![
            BACKEND_SCHEME.into(),
            Expr::get_att(ids::LOAD_BALANCER, "DNSName"),
            path.into(),
        ],
    )
}

/// Method bound to the routing node `resource_name`, proxying `runtime_path`.
pub fn proxy_method(resource_name: &str, runtime_path: &str) -> Resource {
    let mut method_parameters = BTreeMap::new();
    method_parameters.insert(PROXY_METHOD_PARAMETER.to_string(), true);

    let mut integration_parameters = BTreeMap::new();
    integration_parameters.insert(
        PROXY_INTEGRATION_PARAMETER.to_string(),
        PROXY_METHOD_PARAMETER.to_string(),
    );
    integration_parameters.insert(
        ACCEPT_ENCODING_PARAMETER.to_string(),
        IDENTITY_ENCODING.to_string(),
    );

    let method = Method {
        authorization_type: COGNITO_USER_POOLS.to_string(),
        authorizer_id: Expr::reference(ids::AUTHORIZER),
        http_method: ANY_METHOD.to_string(),
        integration: Integration {
            connection_id: Expr::reference(ids::VPC_LINK),
            connection_type: VPC_LINK_CONNECTION.to_string(),
            integration_http_method: ANY_METHOD.to_string(),
            passthrough_behavior: WHEN_NO_MATCH.to_string(),
            request_parameters: integration_parameters,
            timeout_in_millis: INTEGRATION_TIMEOUT_MILLIS,
            integration_type: HTTP_PROXY.to_string(),
            uri: backend_uri(runtime_path),
        },
        request_parameters: method_parameters,
        resource_id: Expr::reference(resource_name),
        rest_api_id: Expr::reference(ids::REST_API),
    };

    Resource::new(ResourceKind::Method(method))
        .with_depends_on([ids::LOAD_BALANCER, ids::AUTHORIZER])
}
