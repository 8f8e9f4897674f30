//! Synth command - Render the template for an ingress definition.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use apigw_cfn::{Template, TemplateAssembler};
use apigw_config::ConfigValidator;
use clap::{Args, ValueEnum};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Args)]
pub struct SynthArgs {
    /// Path to the ingress definition (YAML, JSON or TOML)
    #[arg(short, long, env = "APIGW_CONFIG")]
    pub config: PathBuf,

    /// Template output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write the template to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template description
    #[arg(long)]
    pub description: Option<String>,
}

pub fn execute(args: SynthArgs) -> Result<()> {
    let definition = super::load_definition(&args.config)?;

    let validation = ConfigValidator::validate(&definition);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.valid {
        anyhow::bail!("Validation failed: {}", validation.errors.join("; "));
    }

    let mut assembler = TemplateAssembler::new();
    if let Some(description) = args.description {
        assembler = assembler.with_description(description);
    }
    let template = assembler.assemble(&definition)?;
    let rendered = render(&template, args.format)?;

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write template to {}", path.display()))?;
            info!("Wrote template to {}", path.display());
            println!("✅ Template written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render(template: &Template, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => template.to_json()?,
        OutputFormat::Yaml => template.to_yaml()?,
    };
    Ok(rendered)
}
