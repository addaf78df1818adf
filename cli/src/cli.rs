use std::path::PathBuf;

use anyhow::Result;
use livability::{PopulationDensity, ScoringConfig};

/// Livability scoring CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "livability", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Score and rank districts for a set of feature weights
    Score(ScoreArgs),

    /// List the features of a configuration, in weight order
    Features(FeaturesArgs),

    /// Write a configuration file to edit
    InitConfig(InitConfigArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum DensityArg { Inverse, Direct, Excluded }

impl From<DensityArg> for PopulationDensity {
    fn from(arg: DensityArg) -> Self {
        match arg {
            DensityArg::Inverse => PopulationDensity::Inverse,
            DensityArg::Direct => PopulationDensity::Direct,
            DensityArg::Excluded => PopulationDensity::Excluded,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Scoring configuration JSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Population density handling for the built-in catalogue
    #[arg(long, value_enum, conflicts_with = "config")]
    pub population_density: Option<DensityArg>,
}

impl ConfigArgs {
    /// Load the config file if given, otherwise build the preset.
    pub fn load(&self) -> Result<ScoringConfig> {
        match &self.config {
            Some(path) => ScoringConfig::read_from_json(path),
            None => Ok(ScoringConfig::preset(
                self.population_density.map(Into::into).unwrap_or_default(),
            )),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    /// District feature table (CSV, one row per district)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// District boundaries (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub geometry: PathBuf,

    /// District location names (CSV with district,location columns)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub labels: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Feature weight as name=value, value in [0, 1]; repeatable
    #[arg(short, long = "weight", value_parser = parse_weight)]
    pub weights: Vec<(String, f64)>,

    /// Weight for every feature not set with --weight (defaults to the config's)
    #[arg(long)]
    pub default_weight: Option<f64>,

    /// Number of districts to rank (defaults to the config's)
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Write the full score table to this CSV file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Write the district GeoJSON annotated with scores to this file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub geojson_out: Option<PathBuf>,

    /// Print the full report as JSON instead of the ranked list
    #[arg(long)]
    pub json: bool,

    /// Overwrite output files that already exist
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(clap::Args, Debug)]
pub struct InitConfigArgs {
    /// Output config file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Population density handling for the written catalogue
    #[arg(long, value_enum)]
    pub population_density: Option<DensityArg>,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

/// Parse `name=value` into a feature weight.
pub fn parse_weight(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text.split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{text}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing feature name in '{text}'"));
    }
    let value = value.trim().parse::<f64>()
        .map_err(|e| format!("invalid weight in '{text}': {e}"))?;
    Ok((name.to_string(), value))
}
