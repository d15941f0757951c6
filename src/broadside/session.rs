//! Broadside session: the round-based cannon exchange
//!
//! Player fire is split compute/apply so the caller can animate the ball's
//! flight before the damage lands. Enemy return fire resolves in one step.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::broadside::ammo::{AmmoLocker, AmmoType};
use crate::broadside::constants::{
    BASE_CANNONS, CANNON_DAMAGE_DIVISOR, CHAIN_MAST_POWER_THRESHOLD, DEFAULT_MASTS,
    ENEMY_BASE_ACCURACY, ENEMY_CREW_ACCURACY_BONUS, ENEMY_CREW_DAMAGE_MAX, ENEMY_HULL_DAMAGE_MAX,
    ENEMY_HULL_DAMAGE_MIN, ENEMY_MAST_HIT_CHANCE,
};
use crate::broadside::ship::{EnemyShipTemplate, ShipState};
use crate::broadside::trajectory::{grade_shot, ShotGrade};
use crate::core::types::{Victor, Wind};
use crate::encounter::snapshot::EncounterSnapshot;

/// Which side fired a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotSource {
    Player,
    Enemy,
}

/// Damage attributable to one volley
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotReport {
    pub source: ShotSource,
    pub grade: ShotGrade,
    pub hull: u32,
    pub crew: u32,
    pub masts: u32,
    pub description: String,
}

impl ShotReport {
    fn miss(source: ShotSource, description: String) -> Self {
        Self {
            source,
            grade: ShotGrade::Miss,
            hull: 0,
            crew: 0,
            masts: 0,
            description,
        }
    }

    pub fn total_damage(&self) -> u32 {
        self.hull + self.crew + self.masts
    }
}

/// Append-only narration of the engagement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BroadsideLog {
    pub lines: Vec<String>,
}

impl BroadsideLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn latest(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

/// Full state of one ship-to-ship engagement
///
/// Terminal once `resolved` is set; fire operations become no-ops after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadsideState {
    pub player: ShipState,
    pub enemy: ShipState,
    pub enemy_name: String,
    pub round: u32,
    pub aim_x: f32,
    pub aim_y: f32,
    pub power: f32,
    pub ammo: AmmoType,
    pub locker: AmmoLocker,
    pub wind: Wind,
    pub last_shot: Option<ShotReport>,
    pub log: BroadsideLog,
    pub resolved: bool,
    pub victor: Option<Victor>,
}

impl BroadsideState {
    /// Open an engagement against a hostile drawn from the roster
    pub fn new(snapshot: &EncounterSnapshot, rng: &mut impl Rng) -> Self {
        let template = EnemyShipTemplate::pick(rng);
        let (crew, max_crew) = snapshot.crew_or_default();
        let cannons = BASE_CANNONS + snapshot.cannon_bonus + snapshot.escort_cannons();

        let player = ShipState {
            hull: snapshot.hull,
            max_hull: snapshot.max_hull,
            crew,
            max_crew,
            masts: snapshot.flagship_masts.unwrap_or(DEFAULT_MASTS),
            max_masts: snapshot.flagship_masts.unwrap_or(DEFAULT_MASTS),
            cannons,
        };

        let mut log = BroadsideLog::new();
        log.push(format!(
            "The {} closes in, wind out of the {}.",
            template.name,
            snapshot.wind.direction.label()
        ));

        tracing::info!(enemy = template.name, cannons, "broadside engagement opened");

        Self {
            player,
            enemy: template.to_ship(),
            enemy_name: template.name.to_string(),
            round: 1,
            aim_x: 0.0,
            aim_y: 0.0,
            power: 0.0,
            ammo: AmmoType::Iron,
            locker: AmmoLocker::standard(),
            wind: snapshot.wind,
            last_shot: None,
            log,
            resolved: false,
            victor: None,
        }
    }

    pub fn set_aim(&mut self, x: f32, y: f32) {
        self.aim_x = x;
        self.aim_y = y;
    }

    pub fn set_power(&mut self, power: f32) {
        self.power = power.clamp(0.0, 100.0);
    }

    pub fn set_ammo(&mut self, ammo: AmmoType) {
        self.ammo = ammo;
    }

    /// Compute the player's volley. Does NOT mutate - caller applies the report.
    pub fn player_volley(&self, rng: &mut impl Rng) -> ShotReport {
        let grade = grade_shot(self.aim_x, self.aim_y);
        if !grade.is_hit() {
            return ShotReport::miss(
                ShotSource::Player,
                format!("Your shot throws up spray wide of the {}.", self.enemy_name),
            );
        }

        let scale =
            (self.power / 100.0) * grade.quality() * (self.player.cannons as f32 / CANNON_DAMAGE_DIVISOR);

        let (hull_lo, hull_hi) = self.ammo.hull_damage();
        let hull = (rng.gen_range(hull_lo..=hull_hi) as f32 * scale).round() as u32;

        let (crew_lo, crew_hi) = self.ammo.crew_damage();
        let crew = (rng.gen_range(crew_lo..=crew_hi) as f32 * scale).round() as u32;

        // Chain shot only shears rigging on a hard, well-aimed hit
        let masts = if self.ammo.shears_masts()
            && self.power > CHAIN_MAST_POWER_THRESHOLD
            && grade == ShotGrade::Direct
        {
            1
        } else {
            0
        };

        let description = match grade {
            ShotGrade::Direct => format!(
                "Your {} slams into the {}: {}.",
                self.ammo.label(),
                self.enemy_name,
                describe_damage(hull, crew, masts)
            ),
            ShotGrade::NearMiss => format!(
                "Glancing blow on the {}: {}.",
                self.enemy_name,
                describe_damage(hull, crew, masts)
            ),
            ShotGrade::Miss => unreachable!("miss handled above"),
        };

        ShotReport {
            source: ShotSource::Player,
            grade,
            hull,
            crew,
            masts,
            description,
        }
    }

    /// Land a computed volley on the enemy and expend the round
    pub fn apply_volley(&mut self, report: ShotReport) {
        if self.resolved {
            return;
        }

        self.enemy.take_damage(report.hull, report.crew, report.masts);
        self.locker.spend(self.ammo);
        self.log.push(report.description.clone());

        tracing::debug!(
            grade = ?report.grade,
            hull = report.hull,
            crew = report.crew,
            masts = report.masts,
            "player volley landed"
        );

        self.last_shot = Some(report);
    }

    /// Enemy return fire: resolves and applies in one step
    ///
    /// Accuracy rides on how much crew the enemy has left to work the guns.
    /// `damage_mult` is the difficulty knob; 1.0 is the standard table.
    pub fn enemy_fire(&mut self, damage_mult: f32, rng: &mut impl Rng) -> ShotReport {
        if self.resolved {
            return ShotReport::miss(ShotSource::Enemy, String::new());
        }

        let accuracy = ENEMY_BASE_ACCURACY + self.enemy.crew_fraction() * ENEMY_CREW_ACCURACY_BONUS;
        if rng.gen::<f32>() >= accuracy {
            let report = ShotReport::miss(
                ShotSource::Enemy,
                format!("The {}'s volley whistles wide.", self.enemy_name),
            );
            self.log.push(report.description.clone());
            self.last_shot = Some(report.clone());
            return report;
        }

        let hull = (rng.gen_range(ENEMY_HULL_DAMAGE_MIN..=ENEMY_HULL_DAMAGE_MAX) as f32
            * damage_mult)
            .round() as u32;
        let crew = (rng.gen_range(0..=ENEMY_CREW_DAMAGE_MAX) as f32 * damage_mult).round() as u32;
        let masts = if rng.gen::<f32>() < ENEMY_MAST_HIT_CHANCE {
            (1.0 * damage_mult).round() as u32
        } else {
            0
        };

        self.player.take_damage(hull, crew, masts);

        let report = ShotReport {
            source: ShotSource::Enemy,
            grade: ShotGrade::Direct,
            hull,
            crew,
            masts,
            description: format!(
                "The {}'s broadside rakes you: {}.",
                self.enemy_name,
                describe_damage(hull, crew, masts)
            ),
        };

        tracing::debug!(hull, crew, masts, "enemy volley landed");

        self.log.push(report.description.clone());
        self.last_shot = Some(report.clone());
        report
    }

    /// Settle the engagement if either side is out of the fight
    ///
    /// The enemy is checked first, so mutual destruction goes to the player.
    pub fn check_end(&mut self) -> Option<Victor> {
        if self.resolved {
            return self.victor;
        }

        let victor = if self.enemy.is_beaten() {
            Some(Victor::Player)
        } else if self.player.is_beaten() {
            Some(Victor::Enemy)
        } else {
            None
        };

        if let Some(v) = victor {
            self.resolved = true;
            self.victor = Some(v);
            let line = match v {
                Victor::Player => format!("The {} strikes her colors!", self.enemy_name),
                Victor::Enemy => "Your ship is lost to the waves.".to_string(),
            };
            self.log.push(line);
            tracing::info!(victor = ?v, round = self.round, "broadside resolved");
        }

        victor
    }

    /// Bump the round counter; the orchestration layer calls this after
    /// both sides have fired
    pub fn advance_round(&mut self) {
        self.round += 1;
    }
}

fn describe_damage(hull: u32, crew: u32, masts: u32) -> String {
    let mut parts = Vec::new();
    if hull > 0 {
        parts.push(format!("hull -{}", hull));
    }
    if crew > 0 {
        parts.push(format!("{} crew down", crew));
    }
    if masts > 0 {
        parts.push("a mast falls".to_string());
    }
    if parts.is_empty() {
        "no real harm done".to_string()
    } else {
        parts.join(", ")
    }
}
