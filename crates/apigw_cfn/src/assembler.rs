//! Template assembly.

use tracing::{debug, info};

use apigw_config::IngressDefinition;

use crate::error::CfnResult;
use crate::intrinsic::{Expr, REGION};
use crate::naming::ids;
use crate::template::{Template, TemplateGraph};
use crate::tree::RouteTree;
use crate::{gateway, network, websocket};

pub const OUTPUT_REST_API_ID: &str = "RestAPIID";
pub const OUTPUT_API_GATEWAY_ENDPOINT: &str = "APIGatewayEndpoint";
pub const OUTPUT_CLIENT_ARNS: &str = "ClientARNS";
/// Key kept as deployed stacks already expose it.
pub const OUTPUT_API_GATEWAY_WSS_ENDPOINT: &str = "OutputKeyAPIGatewayWSSEndpoint";

pub const DEFAULT_DESCRIPTION: &str = "API Gateway ingress";

/// Builds the complete gateway template for an ingress definition.
pub struct TemplateAssembler {
    description: String,
}

impl TemplateAssembler {
    pub fn new() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Synthesize the template.
    ///
    /// Fails without producing anything if required network facts are
    /// missing, the rule has no paths, or two paths derive the same logical
    /// name for different resources.
    pub fn assemble(&self, definition: &IngressDefinition) -> CfnResult<Template> {
        let network_facts = definition.network.resolve()?;

        info!(
            "Synthesizing template for {} paths on stage {}",
            definition.paths.len(),
            definition.stage_name
        );

        let tree = RouteTree::from_paths(&definition.paths)?;
        let mut graph = TemplateGraph::new();
        graph.merge(tree.graph)?;

        graph.insert(ids::REST_API, gateway::rest_api())?;
        graph.insert(
            ids::AUTHORIZER,
            gateway::authorizer(&definition.cognito_user_pool_arns),
        )?;
        graph.insert(
            ids::DEPLOYMENT,
            gateway::deployment(&definition.stage_name, &tree.methods),
        )?;

        graph.insert(ids::LOAD_BALANCER, network::load_balancer(network_facts.subnet_ids))?;
        graph.insert(ids::LISTENER, network::listener())?;
        graph.insert(
            ids::TARGET_GROUP,
            network::target_group(
                network_facts.vpc_id,
                network_facts.instance_ids,
                definition.node_port,
            ),
        )?;
        for (name, resource) in network::security_group_ingresses(
            network_facts.security_group_ids,
            network_facts.cidr_block,
            definition.node_port,
        ) {
            graph.insert(name, resource)?;
        }
        graph.insert(ids::VPC_LINK, gateway::vpc_link())?;

        if definition.websocket {
            for (name, resource) in websocket::resources(&definition.stage_name) {
                graph.insert(name, resource)?;
            }
        } else {
            debug!("WebSocket front door disabled");
        }

        if let Some(domain) = definition.complete_custom_domain() {
            debug!("Binding custom domain {}", domain.domain_name);
            graph.insert(ids::CUSTOM_DOMAIN, gateway::custom_domain(domain))?;
        }

        let mut template = Template::new(graph).with_description(self.description.as_str());
        template.add_output(OUTPUT_REST_API_ID, Expr::reference(ids::REST_API));
        template.add_output(
            OUTPUT_API_GATEWAY_ENDPOINT,
            invoke_url("https://", ids::REST_API, &definition.stage_name),
        );
        template.add_output(OUTPUT_CLIENT_ARNS, Expr::from(definition.client_arns.join(",")));
        if definition.websocket {
            template.add_output(
                OUTPUT_API_GATEWAY_WSS_ENDPOINT,
                invoke_url("wss://", ids::WEBSOCKET_API, &definition.stage_name),
            );
        }

        info!("Synthesized template with {} resources", template.resources.len());
        Ok(template)
    }
}

impl Default for TemplateAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthesize a template with the default description.
pub fn synthesize(definition: &IngressDefinition) -> CfnResult<Template> {
    TemplateAssembler::new().assemble(definition)
}

/// `<scheme><api id>.execute-api.<region>.amazonaws.com/<stage>`
fn invoke_url(scheme: &str, api: &str, stage_name: &str) -> Expr {
    Expr::join(
        "",
        vec![
            scheme.into(),
            Expr::reference(api),
            ".execute-api.".into(),
            Expr::reference(REGION),
            ".amazonaws.com/".into(),
            stage_name.into(),
        ],
    )
}
