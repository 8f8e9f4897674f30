//! # apigw_cfn
//!
//! CloudFormation template synthesis for API Gateway ingress rules.
//!
//! Given an ingress definition, this crate builds a complete template that
//! fronts a private backend with API Gateway:
//!
//! - One `AWS::ApiGateway::Resource` and one proxy `AWS::ApiGateway::Method`
//!   per path segment, with a catch-all `{proxy+}` segment under every rule
//! - Cognito authorizer, deployment and stage
//! - Internal network load balancer, listener and instance target group
//! - VPC link connecting the gateway to the load balancer
//! - Security group ingress rules for the backend port
//! - Optional custom domain and WebSocket front door
//!
//! The same definition always produces the same template, byte for byte.
//!
//! ## Example
//!
//! ```rust,no_run
//! use apigw_cfn::synthesize;
//! use apigw_config::{IngressDefinition, NetworkFacts};
//!
//! let definition = IngressDefinition::new(30080, "prod")
//!     .with_paths(["/orders/{id}", "/users"])
//!     .with_user_pool_arn("arn:aws:cognito-idp:us-east-1:123456789012:userpool/us-east-1_abc")
//!     .with_network(
//!         NetworkFacts::new("vpc-0a1b2c", "10.0.0.0/16")
//!             .with_subnets(["subnet-a", "subnet-b"])
//!             .with_security_groups(["sg-1"])
//!             .with_instances(["i-1", "i-2"]),
//!     );
//!
//! let template = synthesize(&definition).unwrap();
//! println!("{}", template.to_json().unwrap());
//! ```

pub mod assembler;
pub mod dependencies;
pub mod error;
pub mod gateway;
pub mod integration;
pub mod intrinsic;
pub mod naming;
pub mod network;
pub mod resources;
pub mod template;
pub mod tree;
pub mod websocket;

pub use assembler::{
    synthesize, TemplateAssembler, OUTPUT_API_GATEWAY_ENDPOINT, OUTPUT_API_GATEWAY_WSS_ENDPOINT,
    OUTPUT_CLIENT_ARNS, OUTPUT_REST_API_ID,
};
pub use dependencies::DependencySet;
pub use error::{CfnError, CfnResult};
pub use intrinsic::Expr;
pub use resources::{Resource, ResourceKind};
pub use template::{Output, Template, TemplateGraph};
pub use tree::{ParentRef, RouteTree, RouteTreeBuilder};
