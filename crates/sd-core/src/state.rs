//! The state of a match between two plays.
//!
//! A [`MatchState`] is a plain value: the engine receives one snapshot and
//! returns a new one. Nothing in here rolls dice or enforces rules beyond
//! simple bookkeeping helpers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::PlayerCard;
use crate::config::MatchConfig;
use crate::id::PlayerId;

/// One of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The visiting team, bats in the top half.
    Away,
    /// The home team, bats in the bottom half.
    Home,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Self {
        match self {
            Self::Away => Self::Home,
            Self::Home => Self::Away,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Away => write!(f, "away"),
            Self::Home => write!(f, "home"),
        }
    }
}

/// Runs for each team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Runs scored by the away team.
    pub away: u32,
    /// Runs scored by the home team.
    pub home: u32,
}

impl Score {
    /// Runs for one side.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Away => self.away,
            Side::Home => self.home,
        }
    }

    /// Add runs for one side.
    pub fn add(&mut self, side: Side, runs: u32) {
        match side {
            Side::Away => self.away += runs,
            Side::Home => self.home += runs,
        }
    }

    /// The side that is ahead, if any.
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;
        match self.home.cmp(&self.away) {
            Ordering::Greater => Some(Side::Home),
            Ordering::Less => Some(Side::Away),
            Ordering::Equal => None,
        }
    }
}

/// A base a runner can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    /// First base.
    First,
    /// Second base.
    Second,
    /// Third base.
    Third,
}

impl Base {
    /// All bases, lead runner last.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// All bases, lead runner first. Runner movement is applied in this order
    /// so a trailing runner never lands on an occupied base.
    pub const LEAD_FIRST: [Base; 3] = [Base::Third, Base::Second, Base::First];

    /// The next base, or `None` when the next stop is home plate.
    pub fn next(self) -> Option<Base> {
        match self {
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
            Self::Third => write!(f, "third"),
        }
    }
}

/// A batter who reached base.
///
/// Speed is copied from the card when the runner reaches base, so later
/// substitutions do not change baserunning odds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    /// The player on base.
    pub player: PlayerId,
    /// Display name, kept for play-by-play text.
    pub name: String,
    /// The pitcher charged if this runner scores.
    pub pitcher_of_record: PlayerId,
    /// Speed rating at the time the runner reached base.
    pub speed: i32,
}

impl Runner {
    /// Snapshot a batter card as a runner charged to `pitcher`.
    pub fn from_card(card: &PlayerCard, pitcher: PlayerId) -> Self {
        Self {
            player: card.id,
            name: card.name.clone(),
            pitcher_of_record: pitcher,
            speed: card.speed,
        }
    }
}

/// The three bases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bases {
    /// Runner on first, if any.
    pub first: Option<Runner>,
    /// Runner on second, if any.
    pub second: Option<Runner>,
    /// Runner on third, if any.
    pub third: Option<Runner>,
}

impl Bases {
    /// The runner on a base.
    pub fn get(&self, base: Base) -> Option<&Runner> {
        self.slot(base).as_ref()
    }

    /// Remove and return the runner on a base.
    pub fn take(&mut self, base: Base) -> Option<Runner> {
        self.slot_mut(base).take()
    }

    /// Put a runner on a base, returning whoever was there.
    pub fn set(&mut self, base: Base, runner: Runner) -> Option<Runner> {
        self.slot_mut(base).replace(runner)
    }

    /// Returns true if a runner is on the base.
    pub fn is_occupied(&self, base: Base) -> bool {
        self.slot(base).is_some()
    }

    /// Occupied bases, first to third.
    pub fn occupied(&self) -> Vec<Base> {
        Base::ALL
            .into_iter()
            .filter(|b| self.is_occupied(*b))
            .collect()
    }

    /// Number of runners on base.
    pub fn count(&self) -> usize {
        self.occupied().len()
    }

    /// Returns true if the bases are empty.
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none() && self.third.is_none()
    }

    /// Remove every runner.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Iterate over `(base, runner)` pairs, first to third.
    pub fn runners(&self) -> impl Iterator<Item = (Base, &Runner)> {
        Base::ALL
            .into_iter()
            .filter_map(move |b| self.get(b).map(|r| (b, r)))
    }

    fn slot(&self, base: Base) -> &Option<Runner> {
        match base {
            Base::First => &self.first,
            Base::Second => &self.second,
            Base::Third => &self.third,
        }
    }

    fn slot_mut(&mut self, base: Base) -> &mut Option<Runner> {
        match base {
            Base::First => &mut self.first,
            Base::Second => &mut self.second,
            Base::Third => &mut self.third,
        }
    }
}

/// Each team's position in its batting order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingOrder {
    /// Index of the away team's current batter.
    pub away: usize,
    /// Index of the home team's current batter.
    pub home: usize,
}

impl BattingOrder {
    /// Current batter index for a side.
    pub fn get(&self, side: Side) -> usize {
        match side {
            Side::Away => self.away,
            Side::Home => self.home,
        }
    }

    /// Move a side to its next batter, wrapping at `lineup_size`.
    pub fn advance(&mut self, side: Side, lineup_size: usize) {
        let slot = match side {
            Side::Away => &mut self.away,
            Side::Home => &mut self.home,
        };
        *slot = (*slot + 1) % lineup_size.max(1);
    }
}

/// A specific half-inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfInning {
    /// Inning number, starting at 1.
    pub inning: u32,
    /// True for the top half.
    pub top: bool,
}

impl fmt::Display for HalfInning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let half = if self.top { "Top" } else { "Bottom" };
        write!(f, "{half} of the {}", ordinal(self.inning))
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Workload for one pitcher, used for fatigue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitcherLine {
    /// Half-innings this pitcher has pitched in.
    pub innings_pitched: u32,
    /// Runs charged to this pitcher.
    pub earned_runs: u32,
    /// The last half-inning this pitcher was charged for.
    pub last_half: Option<HalfInning>,
}

/// Which side's chart the swing is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advantage {
    /// Read the pitcher's chart.
    Pitcher,
    /// Read the batter's chart.
    Batter,
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pitcher => write!(f, "Pitcher"),
            Self::Batter => write!(f, "Batter"),
        }
    }
}

/// The plate appearance in progress between the pitch and the swing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtBat {
    /// The batter at the plate.
    pub batter: PlayerId,
    /// The pitcher on the mound.
    pub pitcher: PlayerId,
    /// The side whose chart the swing uses.
    pub advantage: Advantage,
    /// The pitch roll that decided the advantage.
    pub pitch_roll: u32,
    /// Whether the infield is drawn in for this pitch.
    pub infield_in: bool,
}

/// The kind of a pending decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Runners may try for an extra base after a hit.
    ExtraBase,
    /// Runners may tag up after a caught fly ball.
    TagUp,
    /// The runner on third may try to score on a ground ball into a drawn-in infield.
    InfieldIn,
    /// A runner is attempting to steal.
    Steal,
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraBase => write!(f, "extra-base"),
            Self::TagUp => write!(f, "tag-up"),
            Self::InfieldIn => write!(f, "infield-in"),
            Self::Steal => write!(f, "steal"),
        }
    }
}

/// The data a pending decision needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingDecision {
    /// Runners (by the base they now stand on) offered one more base.
    ExtraBase {
        /// Bases whose runners may be sent.
        offers: Vec<Base>,
    },
    /// Runners that may tag up.
    TagUp {
        /// Bases that were occupied when the ball was caught.
        bases: Vec<Base>,
    },
    /// Ground ball with the infield in and a runner on third.
    InfieldIn {
        /// The runner on third.
        runner: Runner,
        /// The batter who hit the ground ball.
        batter: Runner,
    },
    /// A steal attempt.
    Steal {
        /// The base the runner is stealing from.
        from: Base,
    },
}

impl PendingDecision {
    /// The kind of this decision.
    pub fn kind(&self) -> DecisionKind {
        match self {
            Self::ExtraBase { .. } => DecisionKind::ExtraBase,
            Self::TagUp { .. } => DecisionKind::TagUp,
            Self::InfieldIn { .. } => DecisionKind::InfieldIn,
            Self::Steal { .. } => DecisionKind::Steal,
        }
    }
}

/// Where the current plate appearance stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "kind", rename_all = "snake_case")]
pub enum AtBatStatus {
    /// Waiting for the pitch.
    Pitching,
    /// The pitch is in; waiting for the swing.
    Swinging,
    /// The play is paused until a decision is submitted.
    AwaitingDecision(DecisionKind),
    /// The last play closed; the next pitch may be thrown.
    Resolved,
}

impl fmt::Display for AtBatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pitching => write!(f, "pitching"),
            Self::Swinging => write!(f, "swinging"),
            Self::AwaitingDecision(kind) => write!(f, "awaiting-decision({kind})"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

/// Everything about a match between two plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Rule parameters.
    pub config: MatchConfig,
    /// Current inning, starting at 1.
    pub inning: u32,
    /// True while the away team bats.
    pub is_top_half: bool,
    /// Runs for each team.
    pub score: Score,
    /// Outs in the current half-inning, 0 to 2 between plays.
    pub outs: u32,
    /// Runners on base.
    pub bases: Bases,
    /// Each team's place in its batting order.
    pub batting_order: BattingOrder,
    /// Where the current plate appearance stands.
    pub status: AtBatStatus,
    /// Present exactly when `status` is awaiting a decision.
    pub pending: Option<PendingDecision>,
    /// Present while `status` is swinging, and kept through a steal
    /// attempted during that at-bat.
    pub at_bat: Option<AtBat>,
    /// Workload per pitcher.
    pub pitcher_fatigue: BTreeMap<PlayerId, PitcherLine>,
    /// True once the game has ended. Terminal.
    pub game_over: bool,
    /// The winner, set when the game ends.
    pub winner: Option<Side>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// The opening state: top of the first, nobody out, leadoff batters up.
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    /// The opening state under custom rules.
    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            config,
            inning: 1,
            is_top_half: true,
            score: Score::default(),
            outs: 0,
            bases: Bases::default(),
            batting_order: BattingOrder::default(),
            status: AtBatStatus::Pitching,
            pending: None,
            at_bat: None,
            pitcher_fatigue: BTreeMap::new(),
            game_over: false,
            winner: None,
        }
    }

    /// The side currently at bat.
    pub fn batting_side(&self) -> Side {
        if self.is_top_half {
            Side::Away
        } else {
            Side::Home
        }
    }

    /// The side currently in the field.
    pub fn fielding_side(&self) -> Side {
        self.batting_side().other()
    }

    /// The current half-inning.
    pub fn half_inning(&self) -> HalfInning {
        HalfInning {
            inning: self.inning,
            top: self.is_top_half,
        }
    }

    /// The workload line for a pitcher (zero if unseen).
    pub fn pitcher_line(&self, pitcher: PlayerId) -> PitcherLine {
        self.pitcher_fatigue
            .get(&pitcher)
            .copied()
            .unwrap_or_default()
    }
}
