use anyhow::{bail, Result};
use livability::{score::RankingStatus, Dataset, ScoreReport, Scorer};
use tracing::info;

use super::ensure_writable;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ScoreArgs) -> Result<()> {
    for path in [&args.output, &args.geojson_out].into_iter().flatten() {
        ensure_writable(path, args.force)?;
    }

    let mut config = args.config.load()?;
    if let Some(weight) = args.default_weight {
        config.default_weight = weight;
    }
    if let Some(top) = args.top {
        config.top_n = top;
    }
    if config.top_n == 0 {
        bail!("--top must be at least 1");
    }

    let dataset = Dataset::read_from_files(&args.data, &args.geometry, args.labels.as_deref(), &config)?;
    let scorer = Scorer::new(&dataset, &config)?;
    let weights = scorer.weights_from_named(args.weights.iter().map(|(name, weight)| (name.as_str(), *weight)))?;
    info!(weights = ?weights.as_slice(), "[score] Scoring {} districts", dataset.len());

    let report = scorer.score(&weights)?;

    if let Some(path) = &args.output {
        report.table.write_to_csv(path)?;
        info!(path = %path.display(), "[score] Wrote score table");
    }
    if let Some(path) = &args.geojson_out {
        report.write_geojson(&args.geometry, path, &config.id_property)?;
        info!(path = %path.display(), "[score] Wrote annotated GeoJSON");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_ranking(&report);
    }

    Ok(())
}

fn print_ranking(report: &ScoreReport) {
    let ranking = &report.ranking;
    match ranking.status {
        RankingStatus::NoValidScores => {
            println!("No district has a complete set of weighted features; nothing to rank.");
            return;
        }
        RankingStatus::NoPreferences => {
            println!("No feature weights set; all districts score 0.");
        }
        RankingStatus::Ranked => {}
    }

    println!("Top {} districts:", ranking.entries.len());
    for entry in &ranking.entries {
        println!("  {entry}");
    }

    if ranking.is_incomplete() {
        let ids: Vec<_> = ranking.excluded.iter().map(ToString::to_string).collect();
        println!("Not ranked (missing data): {}", ids.join(", "));
    }
}
