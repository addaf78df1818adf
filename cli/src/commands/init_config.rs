use anyhow::Result;
use livability::ScoringConfig;

use super::ensure_writable;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::InitConfigArgs) -> Result<()> {
    ensure_writable(&args.output, args.force)?;

    let config = ScoringConfig::preset(args.population_density.map(Into::into).unwrap_or_default());
    config.write_to_json(&args.output)?;

    println!("[init-config] wrote {} features to {}", config.features.len(), args.output.display());
    Ok(())
}
