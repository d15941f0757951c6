//! Headless Encounter Runner
//!
//! Auto-resolves broadsides, duels, and full raids and prints a JSON
//! summary, for balance sweeps and regression checks.

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use corsair::broadside::{AmmoType, BroadsideState};
use corsair::core::types::{CompassDirection, Victor, Wind};
use corsair::duel::{AiStyle, DuelContext, DuelState, MoveKind};
use corsair::encounter::{
    auto_broadside, auto_duel, auto_raid, DuelPolicy, EncounterSnapshot, EscortShip, GunneryPolicy,
};

/// Headless Encounter Runner - auto-resolve sea and steel engagements
#[derive(Parser, Debug)]
#[command(name = "encounter_runner")]
#[command(about = "Auto-resolve broadsides, duels, and raids and output summaries")]
struct Args {
    /// What to resolve: broadside, duel, or raid
    #[arg(long, default_value = "broadside")]
    mode: String,

    /// Round type for the guns: iron, chain, or grape
    #[arg(long, default_value = "iron")]
    ammo: String,

    /// Gun power per volley, 0-100
    #[arg(long, default_value_t = 65.0)]
    power: f32,

    /// Fixed lateral landing offset in yards (0 aims dead on)
    #[arg(long, default_value_t = 0.0)]
    aim_x: f32,

    /// Fixed forward landing offset in yards (0 aims dead on)
    #[arg(long, default_value_t = 0.0)]
    aim_y: f32,

    /// Duel setting: boarding, barfight, stealth, or duel
    #[arg(long, default_value = "boarding")]
    context: String,

    /// Blade policy: a move name (slash, thrust, parry, dodge) played
    /// every round, or a style name (aggressive, defensive, drunk,
    /// balanced) to fight like an opponent of that stripe
    #[arg(long, default_value = "slash")]
    blades: String,

    /// Wind strength over the engagement, 0-1
    #[arg(long, default_value_t = 0.4)]
    wind: f32,

    /// Player hull going in
    #[arg(long, default_value_t = 100)]
    hull: u32,

    /// Escorts sailing in convoy (each still afloat adds a cannon)
    #[arg(long, default_value_t = 0)]
    escorts: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print the combat log to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct EncounterReport {
    mode: String,
    verdict: String,
    rounds: u32,
    enemy: String,
    player_hull: Option<u32>,
    enemy_hull: Option<u32>,
    player_hp: Option<u32>,
    enemy_hp: Option<u32>,
    boarded: Option<bool>,
    seed: u64,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Determine seed
    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let ammo: AmmoType = args.ammo.parse().unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        eprintln!("Loading round shot instead");
        AmmoType::Iron
    });

    let context = match args.context.as_str() {
        "boarding" => DuelContext::Boarding,
        "barfight" => DuelContext::Barfight,
        "stealth" => DuelContext::StealthFight,
        "duel" => DuelContext::Duel,
        other => {
            eprintln!("Warning: unknown context '{}', using a boarding action", other);
            DuelContext::Boarding
        }
    };

    let blades = parse_blades(&args.blades).unwrap_or_else(|| {
        eprintln!("Warning: unknown blade policy '{}', slashing instead", args.blades);
        DuelPolicy::Fixed {
            mv: MoveKind::Slash,
        }
    });

    let gunnery = if args.aim_x == 0.0 && args.aim_y == 0.0 {
        GunneryPolicy::PerfectAim { power: args.power }
    } else {
        GunneryPolicy::FixedOffset {
            x: args.aim_x,
            y: args.aim_y,
            power: args.power,
        }
    };

    // Build the player's situation: lone ship unless escorts were asked for
    let mut snapshot = EncounterSnapshot::solo(args.hull, args.hull);
    let directions = CompassDirection::all();
    snapshot.wind = Wind::new(
        directions[rng.gen_range(0..directions.len())],
        args.wind.clamp(0.0, 1.0),
    );
    if args.escorts > 0 {
        snapshot.escorts = (0..args.escorts).map(|_| EscortShip::new(50)).collect();
        snapshot.convoy_active = true;
    }

    let mode = match args.mode.as_str() {
        "broadside" | "duel" | "raid" => args.mode.clone(),
        other => {
            eprintln!("Unknown mode '{}', defaulting to broadside", other);
            "broadside".to_string()
        }
    };

    let report = match mode.as_str() {
        "duel" => {
            let mut state = DuelState::new(context, &snapshot, None);
            let outcome = auto_duel(&mut state, &blades, &mut rng);

            if args.verbose {
                eprintln!("=== Final log ===");
                for line in state.log.lines() {
                    eprintln!("  {}", line);
                }
            }

            EncounterReport {
                mode: mode.clone(),
                verdict: verdict(outcome.victor),
                rounds: outcome.rounds,
                enemy: outcome.enemy_name,
                player_hull: None,
                enemy_hull: None,
                player_hp: Some(outcome.player_hp),
                enemy_hp: Some(outcome.enemy_hp),
                boarded: None,
                seed,
            }
        }
        "raid" => {
            let outcome = auto_raid(&snapshot, &gunnery, ammo, &blades, &mut rng);

            if args.verbose {
                eprintln!("=== Raid ===");
                eprintln!("  Guns fell silent after {} rounds", outcome.broadside.rounds);
                match &outcome.boarding {
                    Some(b) => eprintln!(
                        "  Boarded her: {} after {} more rounds",
                        verdict(b.victor),
                        b.rounds
                    ),
                    None => eprintln!("  No boarding; the guns did not carry the day"),
                }
            }

            let boarded = outcome.boarding.is_some();
            let (final_victor, rounds, player_hp, enemy_hp) = match &outcome.boarding {
                Some(b) => (
                    b.victor,
                    outcome.broadside.rounds + b.rounds,
                    Some(b.player_hp),
                    Some(b.enemy_hp),
                ),
                None => (outcome.broadside.victor, outcome.broadside.rounds, None, None),
            };

            EncounterReport {
                mode: mode.clone(),
                verdict: verdict(final_victor),
                rounds,
                enemy: outcome.broadside.enemy_name.clone(),
                player_hull: Some(outcome.broadside.player.hull),
                enemy_hull: Some(outcome.broadside.enemy.hull),
                player_hp,
                enemy_hp,
                boarded: Some(boarded),
                seed,
            }
        }
        _ => {
            let mut state = BroadsideState::new(&snapshot, &mut rng);
            let outcome = auto_broadside(&mut state, &gunnery, ammo, &mut rng);

            if args.verbose {
                eprintln!("=== Combat log ===");
                for line in &state.log.lines {
                    eprintln!("  {}", line);
                }
            }

            EncounterReport {
                mode: mode.clone(),
                verdict: verdict(outcome.victor),
                rounds: outcome.rounds,
                enemy: outcome.enemy_name,
                player_hull: Some(outcome.player.hull),
                enemy_hull: Some(outcome.enemy.hull),
                player_hp: None,
                enemy_hp: None,
                boarded: None,
                seed,
            }
        }
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        "text" => {
            println!("Encounter Result");
            println!("================");
            println!("Mode: {}", report.mode);
            println!("Against: {}", report.enemy);
            println!("Verdict: {}", report.verdict);
            println!("Rounds: {}", report.rounds);
            if let Some(hull) = report.player_hull {
                println!("Player hull: {}", hull);
            }
            if let Some(hull) = report.enemy_hull {
                println!("Enemy hull: {}", hull);
            }
            if let Some(hp) = report.player_hp {
                println!("Player hp: {}", hp);
            }
            if let Some(hp) = report.enemy_hp {
                println!("Enemy hp: {}", hp);
            }
            if let Some(boarded) = report.boarded {
                println!("Boarded: {}", boarded);
            }
            println!();
            println!("Seed: {}", report.seed);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }
}

/// A move name plays that move every round; a style name plays like an
/// opponent of that style
fn parse_blades(s: &str) -> Option<DuelPolicy> {
    if let Ok(mv) = s.parse::<MoveKind>() {
        return Some(DuelPolicy::Fixed { mv });
    }
    let style = match s {
        "aggressive" => AiStyle::Aggressive,
        "defensive" => AiStyle::Defensive,
        "drunk" => AiStyle::Drunk,
        "balanced" => AiStyle::Balanced,
        _ => return None,
    };
    Some(DuelPolicy::Styled { style })
}

/// Debug-format the victor, "Undecided" when the round cap tripped
fn verdict(victor: Option<Victor>) -> String {
    match victor {
        Some(v) => format!("{:?}", v),
        None => "Undecided".to_string(),
    }
}
