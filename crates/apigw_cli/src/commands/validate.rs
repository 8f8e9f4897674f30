//! Validate command - Check an ingress definition.

use std::path::PathBuf;

use anyhow::Result;
use apigw_config::ConfigValidator;
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the ingress definition (YAML, JSON or TOML)
    #[arg(short, long, env = "APIGW_CONFIG")]
    pub config: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating ingress definition: {}", args.config.display());

    let definition = super::load_definition(&args.config)?;
    let result = ConfigValidator::validate(&definition);

    println!("📋 Validating {}...", args.config.display());

    if !result.errors.is_empty() {
        println!("   ❌ Errors:");
        for error in &result.errors {
            println!("      - {}", error);
        }
    }

    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    println!();
    if result.valid {
        println!("✅ All validations passed!");
        Ok(())
    } else {
        anyhow::bail!("Validation failed with {} error(s)", result.errors.len())
    }
}
