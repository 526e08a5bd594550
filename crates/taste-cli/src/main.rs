use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use taste_core::{Band, PitchClass, TasteChange, TasteParams, VisualParams};
use taste_store::{JsonFileStore, ProfileService, Session};

#[derive(Parser)]
#[command(name = "tasteviz", about = "Inspect and drive taste-to-visual profile mappings")]
struct Cli {
    /// Profile state file; falls back to TASTEVIZ_STATE, then
    /// ./tasteviz-state.json.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Profile identity; the shared default profile when omitted.
    #[arg(long)]
    identity: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stored visual parameters.
    Show,
    /// Merge raw field=value edits into the profile.
    Set {
        /// Edits such as displace=70; invalid fields and values are dropped.
        assignments: Vec<String>,
    },
    /// Apply one taste-slider change through the mapper.
    Taste {
        /// Taste field: instrumentalness, popularity, valence,
        /// artistDiversity, energy, internalCoherence, or averageKey.
        field: String,
        /// New value: a 0-100 level, or a pitch-class label for averageKey.
        value: String,
        /// Seed for reproducible color synthesis.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Speed threshold operations.
    Speed {
        #[command(subcommand)]
        op: SpeedOp,
    },
}

#[derive(Subcommand)]
enum SpeedOp {
    /// Print the stored speed value.
    Get,
    /// Store a speed value (0-100).
    Set { value: i64 },
    /// Exit nonzero when the stored speed is outside the band.
    Check { band: String },
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let state_path = cli
        .state
        .or_else(|| std::env::var_os("TASTEVIZ_STATE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("tasteviz-state.json"));
    let session = match cli.identity {
        Some(identity) => Session::for_identity(identity),
        None => Session::anonymous(),
    };
    let mut service = ProfileService::new(JsonFileStore::new(state_path));

    match cli.command {
        Command::Show => print_params(&service.fetch(&session)?)?,
        Command::Set { assignments } => {
            let changes = parse_assignments(&assignments)?;
            let params = service.update(&session, changes.iter().map(|(f, v)| (f.as_str(), *v)))?;
            print_params(&params)?;
        }
        Command::Taste { field, value, seed } => {
            if let Some(seed) = seed {
                service.reseed(seed);
            }
            let change = parse_taste_change(&field, &value)?;
            // The CLI has no stored taste context; start from the defaults
            // and record the edit so the change and its context agree.
            let mut taste = TasteParams::default();
            taste.record(change);
            print_params(&service.apply_taste(&session, &taste, change)?)?;
        }
        Command::Speed { op } => match op {
            SpeedOp::Get => println!("{}", service.speed(&session)?),
            SpeedOp::Set { value } => match service.set_speed(&session, value)? {
                Some(params) => print_params(&params)?,
                None => bail!("invalid speed value {value}, expected 0-100"),
            },
            SpeedOp::Check { band } => {
                let band = parse_band(&band)?;
                let speed = service.speed(&session)?;
                if service.check_speed(&session, band)? {
                    println!("pass (speed {speed})");
                } else {
                    println!("fail (speed {speed})");
                    return Ok(ExitCode::FAILURE);
                }
            }
        },
    }
    Ok(ExitCode::SUCCESS)
}

fn print_params(params: &VisualParams) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(params)?);
    Ok(())
}

fn parse_assignments(assignments: &[String]) -> Result<Vec<(String, i64)>> {
    assignments
        .iter()
        .map(|raw| {
            let (field, value) = raw
                .split_once('=')
                .with_context(|| format!("expected field=value, got `{raw}`"))?;
            let value: i64 = value
                .parse()
                .with_context(|| format!("non-numeric value in `{raw}`"))?;
            Ok((field.to_string(), value))
        })
        .collect()
}

fn parse_taste_change(field: &str, value: &str) -> Result<TasteChange> {
    if field == "averageKey" {
        return Ok(TasteChange::AverageKey(PitchClass::parse_or_default(value)));
    }
    let level: i64 = value
        .parse()
        .with_context(|| format!("non-numeric taste value `{value}`"))?;
    if !(0..=100).contains(&level) {
        bail!("taste value {level} outside 0-100");
    }
    let level = level as u8;
    Ok(match field {
        "instrumentalness" => TasteChange::Instrumentalness(level),
        "popularity" => TasteChange::Popularity(level),
        "valence" => TasteChange::Valence(level),
        "artistDiversity" => TasteChange::ArtistDiversity(level),
        "energy" => TasteChange::Energy(level),
        "internalCoherence" => TasteChange::InternalCoherence(level),
        other => bail!("unknown taste field `{other}`"),
    })
}

fn parse_band(label: &str) -> Result<Band> {
    Ok(match label {
        "slow" => Band::Low,
        "medium" => Band::Mid,
        "fast" => Band::High,
        other => bail!("unknown band `{other}`, expected slow, medium, or fast"),
    })
}
