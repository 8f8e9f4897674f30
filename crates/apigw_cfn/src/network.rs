//! Load balancer, target group and security group resources.

use crate::intrinsic::{Expr, STACK_NAME};
use crate::naming::{self, ids};
use crate::resources::{
    Listener, ListenerAction, LoadBalancer, Resource, ResourceKind, SecurityGroupIngress, Tag,
    TargetDescription, TargetGroup,
};

/// Tag key identifying resources owned by a stack.
pub const STACK_TAG_KEY: &str = "apigw-ingress/stack";

/// Port the load balancer listens on.
pub const LISTENER_PORT: u16 = 80;

const TCP: &str = "TCP";

fn stack_tag() -> Tag {
    Tag {
        key: STACK_TAG_KEY.to_string(),
        value: Expr::reference(STACK_NAME),
    }
}

/// Internal network load balancer across `subnet_ids`.
pub fn load_balancer(subnet_ids: &[String]) -> Resource {
    Resource::new(ResourceKind::LoadBalancer(LoadBalancer {
        ip_address_type: "ipv4".to_string(),
        scheme: "internal".to_string(),
        subnets: subnet_ids.to_vec(),
        tags: vec![stack_tag()],
        load_balancer_type: "network".to_string(),
    }))
}

pub fn listener() -> Resource {
    Resource::new(ResourceKind::Listener(Listener {
        default_actions: vec![ListenerAction {
            target_group_arn: Expr::reference(ids::TARGET_GROUP),
            action_type: "forward".to_string(),
        }],
        load_balancer_arn: Expr::reference(ids::LOAD_BALANCER),
        port: LISTENER_PORT,
        protocol: TCP.to_string(),
    }))
}

/// Target group with one instance target per id, all on `node_port`.
pub fn target_group(vpc_id: &str, instance_ids: &[String], node_port: u16) -> Resource {
    let targets = instance_ids
        .iter()
        .map(|id| TargetDescription { id: id.clone() })
        .collect();

    Resource::new(ResourceKind::TargetGroup(TargetGroup {
        health_check_interval_seconds: 30,
        health_check_port: "traffic-port".to_string(),
        health_check_protocol: TCP.to_string(),
        health_check_timeout_seconds: 10,
        healthy_threshold_count: 3,
        port: node_port,
        protocol: TCP.to_string(),
        tags: vec![stack_tag()],
        target_type: "instance".to_string(),
        targets,
        unhealthy_threshold_count: 3,
        vpc_id: vpc_id.to_string(),
    }))
}

/// One ingress rule per security group opening `node_port` to the VPC CIDR.
///
/// Returned with their logical names, `SecurityGroupIngress0` onwards.
pub fn security_group_ingresses(
    security_group_ids: &[String],
    cidr_block: &str,
    node_port: u16,
) -> Vec<(String, Resource)> {
    security_group_ids
        .iter()
        .enumerate()
        .map(|(index, group_id)| {
            let resource = Resource::new(ResourceKind::SecurityGroupIngress(SecurityGroupIngress {
                cidr_ip: cidr_block.to_string(),
                from_port: node_port,
                group_id: group_id.clone(),
                ip_protocol: TCP.to_string(),
                to_port: node_port,
            }));
            (naming::security_group_ingress_name(index), resource)
        })
        .collect()
}
