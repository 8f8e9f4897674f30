//! REST API front door and the resources hanging directly off it.

use apigw_config::CustomDomain;

use crate::dependencies::DependencySet;
use crate::integration::COGNITO_USER_POOLS;
use crate::intrinsic::{Expr, STACK_NAME};
use crate::naming::ids;
use crate::resources::{
    Authorizer, Deployment, DomainName, EndpointConfiguration, Resource, ResourceKind, RestApi,
    VpcLink,
};

/// Header the authorizer reads the token from.
pub const AUTHORIZATION_HEADER_SOURCE: &str = "method.request.header.Authorization";

pub const AUTHORIZER_NAME: &str = "Cognito-Authorizer";

pub fn rest_api() -> Resource {
    Resource::new(ResourceKind::RestApi(RestApi {
        api_key_source_type: "HEADER".to_string(),
        endpoint_configuration: EndpointConfiguration::edge(),
        name: Expr::reference(STACK_NAME),
    }))
}

pub fn authorizer(user_pool_arns: &[String]) -> Resource {
    Resource::new(ResourceKind::Authorizer(Authorizer {
        identity_source: AUTHORIZATION_HEADER_SOURCE.to_string(),
        name: AUTHORIZER_NAME.to_string(),
        provider_arns: user_pool_arns.to_vec(),
        rest_api_id: Expr::reference(ids::REST_API),
        authorizer_type: COGNITO_USER_POOLS.to_string(),
    }))
}

/// Deployment of the REST API, created after every method in `methods`.
pub fn deployment(stage_name: &str, methods: &DependencySet) -> Resource {
    Resource::new(ResourceKind::Deployment(Deployment {
        rest_api_id: Expr::reference(ids::REST_API),
        stage_name: stage_name.to_string(),
    }))
    .with_depends_on(methods.to_sorted_vec())
}

/// VPC link from the front door to the internal load balancer.
pub fn vpc_link() -> Resource {
    Resource::new(ResourceKind::VpcLink(VpcLink {
        name: Expr::reference(STACK_NAME),
        target_arns: vec![Expr::reference(ids::LOAD_BALANCER)],
    }))
    .with_depends_on([ids::LOAD_BALANCER])
}

pub fn custom_domain(domain: &CustomDomain) -> Resource {
    Resource::new(ResourceKind::DomainName(DomainName {
        certificate_arn: domain.certificate_arn.clone(),
        domain_name: domain.domain_name.clone(),
        endpoint_configuration: EndpointConfiguration::edge(),
    }))
}
