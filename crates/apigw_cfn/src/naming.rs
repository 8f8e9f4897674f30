//! Logical names and runtime paths derived from path segments.
//!
//! A path rule such as `/orders/{id}` is split on `/` and gets the catch-all
//! segment appended, giving `["", "orders", "{id}", "{proxy+}"]`. Every prefix
//! of that list then maps to one logical name (`orders`, `ordersid`,
//! `ordersidproxy`) and one runtime path (`/orders`, `/orders/{id}`,
//! `/orders/{id}/{proxy}`).
//!
//! Only the parameter braces and the greedy marker are stripped from logical
//! names. Any other character passes through unchanged.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Opens a named path parameter.
pub const PARAM_OPEN: char = '{';

/// Closes a named path parameter.
pub const PARAM_CLOSE: char = '}';

/// Marks a parameter as greedy.
pub const WILDCARD: char = '+';

/// Synthetic trailing segment matching everything below a path.
pub const CATCH_ALL_SEGMENT: &str = "{proxy+}";

/// Runtime form of [`CATCH_ALL_SEGMENT`].
pub const PROXY_PARAMETER: &str = "{proxy}";

/// Namespace for routing node logical names.
pub const RESOURCE_PREFIX: &str = "Resource";

/// Namespace for method logical names.
pub const METHOD_PREFIX: &str = "Method";

/// Logical names of the fixed resources in the template.
pub mod ids {
    pub const REST_API: &str = "RestAPI";
    pub const AUTHORIZER: &str = "CognitoAuthorizer";
    pub const DEPLOYMENT: &str = "Deployment";
    pub const LOAD_BALANCER: &str = "LoadBalancer";
    pub const LISTENER: &str = "Listener";
    pub const TARGET_GROUP: &str = "TargetGroup";
    pub const VPC_LINK: &str = "VPCLink";
    pub const CUSTOM_DOMAIN: &str = "CustomDomain";
    pub const SECURITY_GROUP_INGRESS_PREFIX: &str = "SecurityGroupIngress";

    pub const WEBSOCKET_API: &str = "webSocketAPI";
    pub const WEBSOCKET_INTEGRATION: &str = "webSocketIntegration";
    pub const WEBSOCKET_ROUTE: &str = "webSocketDefaultRoute";
    pub const WEBSOCKET_INTEGRATION_RESPONSE: &str = "webSocketIntegrationResponse";
    pub const WEBSOCKET_DEPLOYMENT: &str = "webSocketDeployment";
    pub const WEBSOCKET_STAGE: &str = "webSocketStage";
}

/// Split a path rule into segments and append the catch-all segment.
///
/// The first segment is the empty string before the leading separator.
pub fn route_segments(path: &str) -> Vec<String> {
    path.split(PATH_SEPARATOR)
        .map(str::to_string)
        .chain(std::iter::once(CATCH_ALL_SEGMENT.to_string()))
        .collect()
}

/// Logical name for the prefix `segments[..=index]`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn logical_name<S: AsRef<str>>(segments: &[S], index: usize) -> String {
    segments[..=index]
        .iter()
        .flat_map(|s| s.as_ref().chars())
        .filter(|c| !matches!(*c, PARAM_OPEN | PARAM_CLOSE | WILDCARD))
        .collect()
}

/// Runtime path for the prefix `segments[..=index]`.
///
/// A trailing catch-all segment becomes the plain `{proxy}` parameter.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn runtime_path<S: AsRef<str>>(segments: &[S], index: usize) -> String {
    if segments[index].as_ref() == CATCH_ALL_SEGMENT {
        let mut path = join_segments(&segments[..index]);
        path.push(PATH_SEPARATOR);
        path.push_str(PROXY_PARAMETER);
        return path;
    }
    join_segments(&segments[..=index])
}

fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join("/")
}

/// `Resource<logical>`
pub fn resource_name(logical: &str) -> String {
    format!("{}{}", RESOURCE_PREFIX, logical)
}

/// `Method<logical>`
pub fn method_name(logical: &str) -> String {
    format!("{}{}", METHOD_PREFIX, logical)
}

/// `SecurityGroupIngress<index>`
pub fn security_group_ingress_name(index: usize) -> String {
    format!("{}{}", ids::SECURITY_GROUP_INGRESS_PREFIX, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segments() {
        assert_eq!(route_segments("/orders/{id}"), ["", "orders", "{id}", "{proxy+}"]);
        assert_eq!(route_segments("/"), ["", "", "{proxy+}"]);
    }

    #[test]
    fn test_logical_name_strips_markers() {
        let segments = route_segments("/orders/{id}");
        assert_eq!(logical_name(&segments, 1), "orders");
        assert_eq!(logical_name(&segments, 2), "ordersid");
        assert_eq!(logical_name(&segments, 3), "ordersidproxy");
    }

    #[test]
    fn test_logical_name_keeps_other_characters() {
        let segments = route_segments("/v1.0/my-items");
        assert_eq!(logical_name(&segments, 2), "v1.0my-items");
    }

    #[test]
    fn test_logical_name_folds_empty_segments() {
        let segments = route_segments("/a//b");
        assert_eq!(logical_name(&segments, 2), "a");
        assert_eq!(logical_name(&segments, 3), "ab");
    }

    #[test]
    fn test_runtime_path() {
        let segments = route_segments("/orders/{id}");
        assert_eq!(runtime_path(&segments, 1), "/orders");
        assert_eq!(runtime_path(&segments, 2), "/orders/{id}");
        assert_eq!(runtime_path(&segments, 3), "/orders/{id}/{proxy}");
    }

    #[test]
    fn test_runtime_path_for_root() {
        let segments = route_segments("/");
        assert_eq!(runtime_path(&segments, 1), "/");
        assert_eq!(runtime_path(&segments, 2), "//{proxy}");
    }

    #[test]
    fn test_user_greedy_parameter_is_not_the_catch_all() {
        let segments = route_segments("/files/{path+}");
        assert_eq!(runtime_path(&segments, 2), "/files/{path+}");
        assert_eq!(logical_name(&segments, 2), "filespath");
    }

    #[test]
    fn test_derivation_is_repeatable() {
        let segments = route_segments("/a/{b}/c");
        for index in 1..segments.len() {
            assert_eq!(logical_name(&segments, index), logical_name(&segments, index));
            assert_eq!(runtime_path(&segments, index), runtime_path(&segments, index));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(resource_name("orders"), "Resourceorders");
        assert_eq!(method_name("orders"), "Methodorders");
        assert_eq!(security_group_ingress_name(2), "SecurityGroupIngress2");
    }
}
