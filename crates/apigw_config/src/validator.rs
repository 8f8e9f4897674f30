//! Ingress definition validation.
//!
//! Synthesis itself only fails on missing network facts and empty rules. The
//! validator is stricter and reports everything a user is likely to trip over
//! before a template ever reaches CloudFormation.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{IngressDefinition, NetworkFacts};

/// Validation result with details.
#[derive(Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment appended to every rule during synthesis.
const CATCH_ALL_SEGMENT: &str = "{proxy+}";

/// A routing node as synthesis would derive it.
struct DerivedNode<'a> {
    parent: String,
    segment: &'a str,
    path: &'a str,
}

fn strip_markers(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '+'))
        .collect()
}

/// Validator for ingress definitions.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a whole ingress definition.
    pub fn validate(definition: &IngressDefinition) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.merge(Self::validate_paths(&definition.paths));
        result.merge(Self::validate_network(&definition.network));

        if definition.node_port == 0 {
            result.add_error("node_port must be greater than zero");
        }

        if definition.stage_name.trim().is_empty() {
            result.add_error("stage_name cannot be empty");
        }

        if definition.cognito_user_pool_arns.is_empty() {
            result.add_warning(
                "No cognito_user_pool_arns configured; \
                 every method requires the Cognito authorizer",
            );
        }

        if definition.client_arns.is_empty() {
            result.add_warning("No client_arns configured");
        }

        if let Some(domain) = &definition.custom_domain {
            if !domain.is_complete() {
                result.add_warning(
                    "custom_domain needs both domain_name and certificate_arn; it will be skipped",
                );
            }
        }

        debug!(
            "Validated ingress definition: {} errors, {} warnings",
            result.errors.len(),
            result.warnings.len()
        );
        result
    }

    /// Validate the path rules.
    ///
    /// Besides the syntax checks, every prefix of every rule (including the
    /// appended catch-all segment) is mapped to the logical name synthesis
    /// derives for it. Two prefixes deriving the same name from different
    /// segments are reported, since synthesis would reject them.
    pub fn validate_paths(paths: &[String]) -> ValidationResult {
        let mut result = ValidationResult::new();

        if paths.is_empty() {
            result.add_error("Ingress rule has no paths");
            return result;
        }

        let identifier = Regex::new(r"^[A-Za-z0-9]*$").ok();
        let mut derived: BTreeMap<String, DerivedNode<'_>> = BTreeMap::new();

        for path in paths {
            if !path.starts_with('/') {
                result.add_error(format!("Path '{}' must start with '/'", path));
                continue;
            }

            if path == "/" {
                continue;
            }

            let segments: Vec<&str> = path.split('/').skip(1).collect();

            if segments.iter().any(|s| s.is_empty()) {
                result.add_error(format!(
                    "Path '{}' contains an empty segment; \
                     it would reuse its parent's resource name",
                    path
                ));
                continue;
            }

            if let Some(re) = &identifier {
                for segment in &segments {
                    if !re.is_match(&strip_markers(segment)) {
                        result.add_warning(format!(
                            "Segment '{}' of path '{}' produces a non-alphanumeric logical name",
                            segment, path
                        ));
                    }
                }
            }

            let mut parent = String::new();
            for segment in segments.iter().copied().chain(std::iter::once(CATCH_ALL_SEGMENT)) {
                let logical = format!("{}{}", parent, strip_markers(segment));
                match derived.get(&logical) {
                    Some(node) if node.parent != parent || node.segment != segment => {
                        result.add_error(format!(
                            "Paths '{}' and '{}' both derive the logical name '{}'",
                            node.path, path, logical
                        ));
                        break;
                    }
                    Some(_) => {}
                    None => {
                        derived.insert(
                            logical.clone(),
                            DerivedNode {
                                parent: parent.clone(),
                                segment,
                                path,
                            },
                        );
                    }
                }
                parent = logical;
            }
        }

        result
    }

    /// Validate that the required network facts are present.
    pub fn validate_network(network: &NetworkFacts) -> ValidationResult {
        let mut result = ValidationResult::new();

        let missing = [
            ("network.vpc_id", network.vpc_id.as_deref().map_or(true, str::is_empty)),
            ("network.cidr_block", network.cidr_block.as_deref().map_or(true, str::is_empty)),
            ("network.subnet_ids", network.subnet_ids.as_ref().map_or(true, Vec::is_empty)),
            (
                "network.security_group_ids",
                network.security_group_ids.as_ref().map_or(true, Vec::is_empty),
            ),
        ];
        for (field, absent) in missing {
            if absent {
                result.add_error(ConfigError::MissingField(field.to_string()).to_string());
            }
        }

        if network.instance_ids.is_empty() {
            result.add_warning("No instance_ids configured; the target group will have no targets");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_definition() -> IngressDefinition {
        IngressDefinition::new(30080, "prod")
            .with_paths(["/orders/{id}", "/users"])
            .with_client_arn("arn:client")
            .with_user_pool_arn("arn:pool")
            .with_network(
                NetworkFacts::new("vpc-1", "10.0.0.0/16")
                    .with_subnets(["subnet-a"])
                    .with_security_groups(["sg-1"])
                    .with_instances(["i-1"]),
            )
    }

    #[test]
    fn test_validate_valid_definition() {
        let result = ConfigValidator::validate(&valid_definition());
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty(), "unexpected warnings: {:?}", result.warnings);
    }

    #[test]
    fn test_validate_no_paths() {
        let mut def = valid_definition();
        def.paths.clear();
        let result = ConfigValidator::validate(&def);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("no paths")));
    }

    #[test]
    fn test_validate_relative_path() {
        let result = ConfigValidator::validate_paths(&["orders".to_string()]);
        assert!(!result.valid);
    }

    #[test]
    fn test_inner_empty_segment_is_an_error() {
        let result = ConfigValidator::validate_paths(&["/a//b".to_string()]);
        assert!(!result.valid);
        assert!(result.errors[0].contains("empty segment"));
    }

    #[test]
    fn test_trailing_slash_is_an_error() {
        let result = ConfigValidator::validate_paths(&["/orders/".to_string()]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("'/orders/'"));
    }

    #[test]
    fn test_colliding_paths_are_an_error() {
        let paths = vec!["/a/b".to_string(), "/ab".to_string()];
        let result = ConfigValidator::validate_paths(&paths);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            ["Paths '/a/b' and '/ab' both derive the logical name 'ab'"]
        );
    }

    #[test]
    fn test_literal_proxy_segment_collides_with_catch_all() {
        let paths = vec!["/a".to_string(), "/a/proxy".to_string()];
        let result = ConfigValidator::validate_paths(&paths);
        assert!(!result.valid);
        assert!(result.errors[0].contains("'aproxy'"));
    }

    #[test]
    fn test_shared_prefixes_do_not_collide() {
        let paths = vec![
            "/a".to_string(),
            "/a/b".to_string(),
            "/a/{id}".to_string(),
            "/a/b".to_string(),
        ];
        let result = ConfigValidator::validate_paths(&paths);
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn test_root_path_is_clean() {
        let result = ConfigValidator::validate_paths(&["/".to_string()]);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_non_alphanumeric_segment_warns() {
        let result = ConfigValidator::validate_paths(&["/api/v1.0/{item-id}".to_string()]);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_greedy_parameter_is_alphanumeric() {
        let result = ConfigValidator::validate_paths(&["/files/{path+}".to_string()]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_reports_every_missing_network_field() {
        let result = ConfigValidator::validate_network(&NetworkFacts::default());
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 4);
        assert!(result.errors[0].contains("network.vpc_id"));
        assert!(result.errors[3].contains("network.security_group_ids"));
    }

    #[test]
    fn test_validate_zero_port_and_empty_stage() {
        let mut def = valid_definition();
        def.node_port = 0;
        def.stage_name = "  ".to_string();
        let result = ConfigValidator::validate(&def);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_incomplete_custom_domain_warns() {
        let def = valid_definition().with_custom_domain("api.example.com", "");
        let result = ConfigValidator::validate(&def);
        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("custom_domain")));
    }
}
