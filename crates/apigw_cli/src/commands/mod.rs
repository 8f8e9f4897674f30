//! CLI command definitions.
//!
//! Each subcommand reads one ingress definition file and works on it.

use std::path::Path;

use anyhow::{Context, Result};
use apigw_config::{ConfigReader, IngressDefinition};
use clap::{Parser, Subcommand};

pub mod routes;
pub mod synth;
pub mod validate;

/// apigw - API Gateway ingress template synthesizer
#[derive(Parser)]
#[command(name = "apigw")]
#[command(version, about = "apigw - API Gateway ingress template synthesizer")]
#[command(long_about = r#"
apigw turns an ingress definition (path rules, node port, stage, Cognito
user pools and network facts) into a CloudFormation template that fronts a
private cluster with API Gateway.

COMMANDS:
  synth     → Synthesize the template (JSON or YAML)
  validate  → Check an ingress definition without synthesizing
  routes    → List the proxy methods each path rule produces

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Synthesis error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize the CloudFormation template
    Synth(synth::SynthArgs),

    /// Validate an ingress definition
    Validate(validate::ValidateArgs),

    /// List method logical names and runtime paths
    Routes(routes::RoutesArgs),
}

pub(crate) fn load_definition(path: &Path) -> Result<IngressDefinition> {
    ConfigReader::read_file(path).with_context(|| {
        format!("Failed to load ingress definition from {}", path.display())
    })
}
