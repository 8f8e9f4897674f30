//! Integration tests for ingress definition loading and validation.

use std::fs;

use apigw_config::{ConfigError, ConfigFormat, ConfigReader, ConfigValidator};
use tempfile::tempdir;

const INGRESS_YAML: &str = r#"
paths:
  - /orders/{id}
  - /orders/{id}/items
  - /health
node_port: 30080
stage_name: prod
client_arns:
  - arn:aws:iam::123456789012:user/alice
  - arn:aws:iam::123456789012:user/bob
cognito_user_pool_arns:
  - arn:aws:cognito-idp:us-east-1:123456789012:userpool/us-east-1_abc
network:
  vpc_id: vpc-0a1b2c
  cidr_block: 10.0.0.0/16
  subnet_ids: [subnet-a, subnet-b]
  security_group_ids: [sg-1, sg-2]
  instance_ids: [i-1, i-2, i-3]
"#;

/// Load a definition from disk and validate it end to end.
#[test]
fn test_read_and_validate_yaml_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ingress.yaml");
    fs::write(&path, INGRESS_YAML).unwrap();

    let definition = ConfigReader::read_file(&path).unwrap();
    assert_eq!(definition.paths.len(), 3);
    assert_eq!(definition.client_arns.len(), 2);
    assert_eq!(definition.network.instance_ids, ["i-1", "i-2", "i-3"]);

    let result = ConfigValidator::validate(&definition);
    assert!(result.valid, "Validation failed: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "Unexpected warnings: {:?}", result.warnings);

    let resolved = definition.network.resolve().unwrap();
    assert_eq!(resolved.vpc_id, "vpc-0a1b2c");
    assert_eq!(resolved.security_group_ids, ["sg-1", "sg-2"]);
}

/// The same definition reads identically from JSON.
#[test]
fn test_yaml_and_json_agree() {
    let temp = tempdir().unwrap();
    let yaml_def = ConfigReader::read_str(INGRESS_YAML, ConfigFormat::Yaml).unwrap();

    let json_path = temp.path().join("ingress.json");
    fs::write(&json_path, serde_json::to_string_pretty(&yaml_def).unwrap()).unwrap();

    let json_def = ConfigReader::read_file(&json_path).unwrap();
    assert_eq!(yaml_def, json_def);
}

#[test]
fn test_missing_file() {
    let temp = tempdir().unwrap();
    let err = ConfigReader::read_file(temp.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_unsupported_extension() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ingress.ini");
    fs::write(&path, "paths=/").unwrap();

    let err = ConfigReader::read_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

/// Missing network facts are validation errors, not parse errors.
#[test]
fn test_definition_without_network_parses_but_fails_validation() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ingress.yml");
    fs::write(&path, "paths: [/a]\nnode_port: 8080\nstage_name: dev\n").unwrap();

    let definition = ConfigReader::read_file(&path).unwrap();
    let result = ConfigValidator::validate(&definition);

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 4);
    assert!(matches!(
        definition.network.resolve(),
        Err(ConfigError::MissingField(_))
    ));
}
