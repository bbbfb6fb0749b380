use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use placement_match::catalog::{CatalogLoader, RosterImporter};
use placement_match::config::AppConfig;
use placement_match::error::AppError;
use placement_match::matching::{
    CandidateId, CompatibilityLabel, Criterion, InMemoryProfiles, ListingId, MatchResult,
    MatchingEngine, MatchingService, MatchingTables, QualificationFailure, SkillGapReport,
};
use placement_match::telemetry;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "placement-match",
    about = "Score, gate, and rank student candidates against placement listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite score and per-criterion breakdown for one pair
    Score(PairArgs),
    /// Run the eligibility gate for one pair and list failed rules
    Qualify(PairArgs),
    /// Rank active candidates for a listing
    RankCandidates(RankCandidatesArgs),
    /// Rank qualified listings for a candidate, urgency included
    RankListings(RankListingsArgs),
    /// Missing skills and learning resources for one pair
    SkillGap(PairArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON catalog with `candidates` and `listings` arrays
    #[arg(long)]
    catalog: PathBuf,
    /// Optional CSV candidate roster merged over the catalog
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Print pretty JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PairArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    candidate: String,
    #[arg(long)]
    listing: String,
}

#[derive(Args, Debug)]
struct RankCandidatesArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    listing: String,
    /// Maximum results (defaults to MATCH_DEFAULT_LIMIT)
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Debug)]
struct RankListingsArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    candidate: String,
    /// Maximum results (defaults to MATCH_DEFAULT_LIMIT)
    #[arg(long)]
    limit: Option<usize>,
    /// Clock used for deadline urgency (RFC3339 or YYYY-MM-DD, defaults to now)
    #[arg(long, value_parser = parse_as_of)]
    as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct ScoreView {
    candidate_id: CandidateId,
    listing_id: ListingId,
    overall: f64,
    compatibility: CompatibilityLabel,
    breakdown: BTreeMap<Criterion, f64>,
}

#[derive(Debug, Serialize)]
struct QualificationView {
    candidate_id: CandidateId,
    listing_id: ListingId,
    qualified: bool,
    failures: Vec<QualificationFailure>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = Arc::new(MatchingEngine::new(
        config.matching_config(),
        MatchingTables::default(),
    )?);
    info!(
        environment = ?config.environment,
        missing_data_policy = config.matching.missing_data_policy.label(),
        "matching engine ready"
    );

    match cli.command {
        Command::Score(args) => {
            let service = load_service(&args.source, engine)?;
            let (candidate_id, listing_id) = pair_ids(&args);
            let score = service.score_pair(&candidate_id, &listing_id)?;
            let view = ScoreView {
                compatibility: service.engine().classify_compatibility(score.overall),
                candidate_id,
                listing_id,
                overall: score.overall,
                breakdown: score.breakdown,
            };
            if args.source.json {
                print_json(&view)
            } else {
                render_score(&view);
                Ok(())
            }
        }
        Command::Qualify(args) => {
            let service = load_service(&args.source, engine)?;
            let (candidate_id, listing_id) = pair_ids(&args);
            let report = service.qualification(&candidate_id, &listing_id)?;
            let view = QualificationView {
                candidate_id,
                listing_id,
                qualified: report.passed(),
                failures: report.failures,
            };
            if args.source.json {
                print_json(&view)
            } else {
                render_qualification(&view);
                Ok(())
            }
        }
        Command::RankCandidates(args) => {
            let service = load_service(&args.source, engine)?;
            let limit = args.limit.unwrap_or(config.matching.default_limit);
            let listing_id = ListingId(args.listing);
            let ranked = service.candidates_for_listing(&listing_id, limit)?;
            if args.source.json {
                print_json(&ranked)
            } else {
                println!("Top candidates for listing {listing_id}");
                render_ranking(&ranked, |result| result.candidate_id.to_string());
                Ok(())
            }
        }
        Command::RankListings(args) => {
            let service = load_service(&args.source, engine)?;
            let limit = args.limit.unwrap_or(config.matching.default_limit);
            let now = args.as_of.unwrap_or_else(Utc::now);
            let candidate_id = CandidateId(args.candidate);
            let ranked = service.listings_for_candidate(&candidate_id, limit, now)?;
            if args.source.json {
                print_json(&ranked)
            } else {
                println!("Qualified listings for candidate {candidate_id} (as of {now})");
                render_ranking(&ranked, |result| result.listing_id.to_string());
                Ok(())
            }
        }
        Command::SkillGap(args) => {
            let service = load_service(&args.source, engine)?;
            let (candidate_id, listing_id) = pair_ids(&args);
            let report = service.skill_gap(&candidate_id, &listing_id)?;
            if args.source.json {
                print_json(&report)
            } else {
                render_skill_gap(&report);
                Ok(())
            }
        }
    }
}

fn load_service(
    source: &SourceArgs,
    engine: Arc<MatchingEngine>,
) -> Result<MatchingService<InMemoryProfiles>, AppError> {
    let mut catalog = CatalogLoader::from_path(&source.catalog)?;
    if let Some(roster) = source.roster.as_ref() {
        catalog.merge_roster(RosterImporter::from_path(roster)?);
    }

    let profiles = catalog.into_repository();
    info!(
        candidates = profiles.candidate_count(),
        listings = profiles.listing_count(),
        "profiles loaded"
    );
    Ok(MatchingService::new(Arc::new(profiles), engine))
}

fn pair_ids(args: &PairArgs) -> (CandidateId, ListingId) {
    (
        CandidateId(args.candidate.clone()),
        ListingId(args.listing.clone()),
    )
}

fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC3339 or YYYY-MM-DD"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_score(view: &ScoreView) {
    println!("Candidate {} vs listing {}", view.candidate_id, view.listing_id);
    println!("Overall: {:.3} ({})", view.overall, view.compatibility);
    for (criterion, value) in &view.breakdown {
        println!("- {}: {:.3}", criterion.label(), value);
    }
}

fn render_qualification(view: &QualificationView) {
    let verdict = if view.qualified {
        "qualified"
    } else {
        "not qualified"
    };
    println!(
        "Candidate {} is {} for listing {}",
        view.candidate_id, verdict, view.listing_id
    );
    for failure in &view.failures {
        println!("- {}", failure.summary());
    }
}

fn render_ranking(ranked: &[MatchResult], label: impl Fn(&MatchResult) -> String) {
    if ranked.is_empty() {
        println!("No matches above the score threshold");
        return;
    }

    for (position, result) in ranked.iter().enumerate() {
        let urgency_note = match result.urgency {
            Some(urgency) => format!(", urgency {urgency:.2}"),
            None => String::new(),
        };
        println!(
            "{}. {} | {:.3} | {}{}",
            position + 1,
            label(result),
            result.overall,
            result.compatibility,
            urgency_note
        );
    }
}

fn render_skill_gap(report: &SkillGapReport) {
    println!(
        "Skill gap for candidate {} on listing {}",
        report.candidate_id, report.listing_id
    );
    println!("Coverage: {:.0}%", report.coverage * 100.0);

    if report.existing_skills.is_empty() {
        println!("\nMatching skills: none");
    } else {
        println!("\nMatching skills: {}", report.existing_skills.join(", "));
    }

    if report.recommendations.is_empty() {
        println!("Missing skills: none");
        return;
    }

    println!("\nMissing skills");
    for recommendation in &report.recommendations {
        println!("- {}", recommendation.skill);
        for resource in &recommendation.resources {
            println!("    * {resource}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn as_of_accepts_rfc3339_and_dates() {
        let rfc = parse_as_of("2025-03-01T09:00:00+01:00").expect("parse rfc");
        assert_eq!(
            rfc,
            Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0)
                .single()
                .expect("valid timestamp")
        );

        let date = parse_as_of(" 2025-03-04 ").expect("parse date");
        assert_eq!(
            date,
            Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0)
                .single()
                .expect("valid timestamp")
        );

        assert!(parse_as_of("next tuesday").is_err());
    }

    #[test]
    fn cli_parses_rank_listings_flags() {
        let cli = Cli::try_parse_from([
            "placement-match",
            "rank-listings",
            "--catalog",
            "catalog.json",
            "--candidate",
            "c-1",
            "--limit",
            "3",
            "--as-of",
            "2025-03-01",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::RankListings(args) => {
                assert_eq!(args.candidate, "c-1");
                assert_eq!(args.limit, Some(3));
                assert!(args.source.json);
                assert!(args.as_of.is_some());
                assert!(args.source.roster.is_none());
            }
            other => panic!("expected rank-listings, got {other:?}"),
        }
    }
}
