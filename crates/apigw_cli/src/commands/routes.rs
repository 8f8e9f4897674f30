//! Routes command - List the proxy methods a definition produces.

use std::path::PathBuf;

use anyhow::Result;
use apigw_cfn::RouteTree;
use clap::Args;

#[derive(Args)]
pub struct RoutesArgs {
    /// Path to the ingress definition (YAML, JSON or TOML)
    #[arg(short, long, env = "APIGW_CONFIG")]
    pub config: PathBuf,
}

pub fn execute(args: RoutesArgs) -> Result<()> {
    let definition = super::load_definition(&args.config)?;
    let tree = RouteTree::from_paths(&definition.paths)?;

    for line in render(&tree) {
        println!("{}", line);
    }
    Ok(())
}

/// One `<method>\t<runtime path>` line per method, sorted by method name.
fn render(tree: &RouteTree) -> Vec<String> {
    tree.routes
        .iter()
        .map(|(method, path)| format!("{}\t{}", method, path))
        .collect()
}
