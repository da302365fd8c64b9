//! Player cards and their d20 outcome charts.
//!
//! Cards are owned by the roster service and are read-only here. A card is
//! either a batter card (`on_base`) or a pitcher card (`control` and `ip`);
//! both carry a chart that maps every face of a d20 to an [`OutcomeCode`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::PlayerId;
use crate::outcome::OutcomeCode;

/// Lowest face of the chart die.
pub const CHART_MIN: u32 = 1;
/// Highest face of the chart die.
pub const CHART_MAX: u32 = 20;

/// A defensive position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Pitcher.
    #[serde(rename = "P")]
    Pitcher,
    /// Catcher.
    #[serde(rename = "C")]
    Catcher,
    /// First base.
    #[serde(rename = "1B")]
    FirstBase,
    /// Second base.
    #[serde(rename = "2B")]
    SecondBase,
    /// Third base.
    #[serde(rename = "3B")]
    ThirdBase,
    /// Shortstop.
    #[serde(rename = "SS")]
    Shortstop,
    /// Left field.
    #[serde(rename = "LF")]
    LeftField,
    /// Center field.
    #[serde(rename = "CF")]
    CenterField,
    /// Right field.
    #[serde(rename = "RF")]
    RightField,
    /// Designated hitter (never fields).
    #[serde(rename = "DH")]
    DesignatedHitter,
}

impl Position {
    /// Positions whose fielding ratings make up the infield defense.
    pub const INFIELD: [Position; 4] = [
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
    ];

    /// Positions whose fielding ratings make up the outfield defense.
    pub const OUTFIELD: [Position; 3] = [
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    /// Parse a position abbreviation such as `"SS"` or `"cf"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "P" => Some(Self::Pitcher),
            "C" => Some(Self::Catcher),
            "1B" => Some(Self::FirstBase),
            "2B" => Some(Self::SecondBase),
            "3B" => Some(Self::ThirdBase),
            "SS" => Some(Self::Shortstop),
            "LF" => Some(Self::LeftField),
            "CF" => Some(Self::CenterField),
            "RF" => Some(Self::RightField),
            "DH" => Some(Self::DesignatedHitter),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbr = match self {
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::Shortstop => "SS",
            Self::LeftField => "LF",
            Self::CenterField => "CF",
            Self::RightField => "RF",
            Self::DesignatedHitter => "DH",
        };
        write!(f, "{abbr}")
    }
}

/// An inclusive range of d20 faces on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartRange {
    /// Lowest face in the range.
    pub low: u32,
    /// Highest face in the range.
    pub high: u32,
}

impl ChartRange {
    /// Create a range covering `low..=high`.
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Returns true if `roll` falls inside this range.
    pub fn contains(&self, roll: u32) -> bool {
        (self.low..=self.high).contains(&roll)
    }

    /// Parse a range key: `"4-10"`, or a single face such as `"20"`.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        let bad = || CoreError::InvalidRange(s.to_string());
        match s.split_once('-') {
            Some((lo, hi)) => {
                let low = lo.trim().parse::<u32>().map_err(|_| bad())?;
                let high = hi.trim().parse::<u32>().map_err(|_| bad())?;
                if low > high {
                    return Err(bad());
                }
                Ok(Self { low, high })
            }
            None => {
                let face = s.parse::<u32>().map_err(|_| bad())?;
                Ok(Self {
                    low: face,
                    high: face,
                })
            }
        }
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// One row of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEntry {
    /// The faces this row covers.
    pub range: ChartRange,
    /// The outcome for those faces.
    pub outcome: OutcomeCode,
}

/// An ordered d20 outcome chart.
///
/// Serialized as the card-ingest map form, `{"1-3": "SO", "4-10": "GB"}`.
/// Rows are kept sorted by their lowest face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Chart {
    entries: Vec<ChartEntry>,
}

impl Chart {
    /// Build a chart from rows in any order.
    pub fn new(mut entries: Vec<ChartEntry>) -> Self {
        entries.sort_by_key(|e| e.range);
        Self { entries }
    }

    /// Build a chart from `(outcome, faces)` counts, assigning faces upward
    /// from 1 in the given order. Zero counts are skipped. Counts past the
    /// top of the die saturate instead of wrapping, so oversized input still
    /// fails [`validate`](Self::validate).
    pub fn from_counts(counts: &[(OutcomeCode, u32)]) -> Self {
        let mut next = CHART_MIN;
        let mut entries = Vec::new();
        for &(outcome, faces) in counts {
            if faces == 0 {
                continue;
            }
            let high = next.saturating_add(faces - 1);
            entries.push(ChartEntry {
                range: ChartRange::new(next, high),
                outcome,
            });
            next = high.saturating_add(1);
        }
        Self { entries }
    }

    /// Parse the card-ingest map form. Unknown outcome codes become generic
    /// outs; malformed range keys are an error.
    pub fn parse_map(map: &BTreeMap<String, String>) -> CoreResult<Self> {
        let entries = map
            .iter()
            .map(|(range, code)| {
                Ok(ChartEntry {
                    range: ChartRange::parse(range)?,
                    outcome: OutcomeCode::parse_lenient(code),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self::new(entries))
    }

    /// The chart rows, sorted by range.
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// Look up the outcome for a roll. `None` if no row covers it.
    pub fn lookup(&self, roll: u32) -> Option<OutcomeCode> {
        self.entries
            .iter()
            .find(|e| e.range.contains(roll))
            .map(|e| e.outcome)
    }

    /// Check that the rows are contiguous, non-overlapping, and cover
    /// exactly 1..=20.
    pub fn validate(&self) -> CoreResult<()> {
        let mut expected = CHART_MIN;
        for entry in &self.entries {
            let range = entry.range;
            if range.high > CHART_MAX {
                return Err(CoreError::InvalidChart(format!(
                    "range {range} extends past {CHART_MAX}"
                )));
            }
            if range.low < expected {
                return Err(CoreError::InvalidChart(format!(
                    "range {range} overlaps the previous row"
                )));
            }
            if range.low > expected {
                return Err(CoreError::InvalidChart(format!(
                    "gap before range {range}: face {expected} is not covered"
                )));
            }
            expected = range.high + 1;
        }
        if expected <= CHART_MAX {
            return Err(CoreError::InvalidChart(format!(
                "faces {expected}-{CHART_MAX} are not covered"
            )));
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<String, String>> for Chart {
    type Error = CoreError;

    fn try_from(map: BTreeMap<String, String>) -> CoreResult<Self> {
        Self::parse_map(&map)
    }
}

impl From<Chart> for BTreeMap<String, String> {
    fn from(chart: Chart) -> Self {
        chart
            .entries
            .iter()
            .map(|e| (e.range.to_string(), e.outcome.code().to_string()))
            .collect()
    }
}

/// Whether a card is a batter or a pitcher, with the matching ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum CardRole {
    /// A position player.
    Batter {
        /// On-base rating the pitch check must beat.
        on_base: i32,
    },
    /// A pitcher.
    Pitcher {
        /// Control rating added to the pitch roll.
        control: i32,
        /// Innings-pitched endurance rating.
        ip: i32,
    },
}

/// A player card as supplied by the roster service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCard {
    /// Card identifier.
    #[serde(default)]
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Batter or pitcher ratings.
    #[serde(flatten)]
    pub role: CardRole,
    /// Baserunning speed.
    #[serde(default)]
    pub speed: i32,
    /// Fielding rating per position the player can play.
    #[serde(default)]
    pub fielding: BTreeMap<Position, i32>,
    /// The player's outcome chart.
    pub chart: Chart,
}

impl PlayerCard {
    /// Create a batter card.
    pub fn batter(name: impl Into<String>, on_base: i32, speed: i32, chart: Chart) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            role: CardRole::Batter { on_base },
            speed,
            fielding: BTreeMap::new(),
            chart,
        }
    }

    /// Create a pitcher card.
    pub fn pitcher(name: impl Into<String>, control: i32, ip: i32, chart: Chart) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            role: CardRole::Pitcher { control, ip },
            speed: 0,
            fielding: BTreeMap::new(),
            chart,
        }
    }

    /// Add a fielding rating for a position.
    pub fn with_fielding(mut self, position: Position, rating: i32) -> Self {
        self.fielding.insert(position, rating);
        self
    }

    /// The on-base rating, if this is a batter card.
    pub fn on_base(&self) -> Option<i32> {
        match self.role {
            CardRole::Batter { on_base } => Some(on_base),
            CardRole::Pitcher { .. } => None,
        }
    }

    /// The `(control, ip)` ratings, if this is a pitcher card.
    pub fn pitching(&self) -> Option<(i32, i32)> {
        match self.role {
            CardRole::Pitcher { control, ip } => Some((control, ip)),
            CardRole::Batter { .. } => None,
        }
    }

    /// The on-base rating, or an error naming the card.
    pub fn require_batter(&self) -> CoreResult<i32> {
        self.on_base()
            .ok_or_else(|| CoreError::NotABatter(self.name.clone()))
    }

    /// The `(control, ip)` ratings, or an error naming the card.
    pub fn require_pitcher(&self) -> CoreResult<(i32, i32)> {
        self.pitching()
            .ok_or_else(|| CoreError::NotAPitcher(self.name.clone()))
    }

    /// Fielding rating at a position; 0 when the card has none there.
    pub fn fielding_at(&self, position: Position) -> i32 {
        self.fielding.get(&position).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chart() -> Chart {
        Chart::from_counts(&[
            (OutcomeCode::Strikeout, 3),
            (OutcomeCode::Groundball, 7),
            (OutcomeCode::Flyball, 3),
            (OutcomeCode::Walk, 2),
            (OutcomeCode::Single, 3),
            (OutcomeCode::Double, 1),
            (OutcomeCode::HomeRun, 1),
        ])
    }

    #[test]
    fn range_parse() {
        assert_eq!(ChartRange::parse("4-10").unwrap(), ChartRange::new(4, 10));
        assert_eq!(ChartRange::parse("20").unwrap(), ChartRange::new(20, 20));
        assert_eq!(ChartRange::parse(" 1 - 3 ").unwrap(), ChartRange::new(1, 3));
        assert!(ChartRange::parse("7-x").is_err());
        assert!(ChartRange::parse("9-2").is_err());
        assert!(ChartRange::parse("").is_err());
    }

    #[test]
    fn range_display() {
        assert_eq!(ChartRange::new(4, 10).to_string(), "4-10");
        assert_eq!(ChartRange::new(20, 20).to_string(), "20");
    }

    #[test]
    fn from_counts_assigns_faces_in_order() {
        let chart = full_chart();
        assert_eq!(chart.lookup(1), Some(OutcomeCode::Strikeout));
        assert_eq!(chart.lookup(3), Some(OutcomeCode::Strikeout));
        assert_eq!(chart.lookup(4), Some(OutcomeCode::Groundball));
        assert_eq!(chart.lookup(10), Some(OutcomeCode::Groundball));
        assert_eq!(chart.lookup(20), Some(OutcomeCode::HomeRun));
        assert!(chart.validate().is_ok());
    }

    #[test]
    fn lookup_outside_chart_is_none() {
        let chart = Chart::from_counts(&[(OutcomeCode::Strikeout, 5)]);
        assert_eq!(chart.lookup(6), None);
        assert_eq!(chart.lookup(0), None);
    }

    #[test]
    fn validate_reports_gap() {
        let chart = Chart::new(vec![
            ChartEntry {
                range: ChartRange::new(1, 5),
                outcome: OutcomeCode::Strikeout,
            },
            ChartEntry {
                range: ChartRange::new(7, 20),
                outcome: OutcomeCode::Single,
            },
        ]);
        let err = chart.validate().unwrap_err().to_string();
        assert!(err.contains("gap"), "{err}");
    }

    #[test]
    fn validate_reports_overlap_and_overflow() {
        let overlap = Chart::new(vec![
            ChartEntry {
                range: ChartRange::new(1, 10),
                outcome: OutcomeCode::Strikeout,
            },
            ChartEntry {
                range: ChartRange::new(10, 20),
                outcome: OutcomeCode::Single,
            },
        ]);
        assert!(overlap.validate().unwrap_err().to_string().contains("overlaps"));

        let overflow = Chart::from_counts(&[(OutcomeCode::Strikeout, 10), (OutcomeCode::Single, 12)]);
        assert!(overflow.validate().unwrap_err().to_string().contains("past"));

        let short = Chart::from_counts(&[(OutcomeCode::Strikeout, 10)]);
        assert!(short.validate().unwrap_err().to_string().contains("not covered"));
    }

    #[test]
    fn huge_counts_saturate_and_fail_validation() {
        let chart = Chart::from_counts(&[
            (OutcomeCode::Strikeout, u32::MAX),
            (OutcomeCode::Single, u32::MAX),
        ]);
        assert_eq!(chart.entries()[0].range, ChartRange::new(1, u32::MAX));
        assert_eq!(chart.lookup(20), Some(OutcomeCode::Strikeout));
        assert!(chart.validate().unwrap_err().to_string().contains("past"));
    }

    #[test]
    fn chart_serde_uses_range_map() {
        let json = r#"{"1-3": "SO", "4-10": "GB", "11-19": "1B", "20": "HR"}"#;
        let chart: Chart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.entries().len(), 4);
        assert_eq!(chart.entries()[0].range, ChartRange::new(1, 3));
        assert_eq!(chart.lookup(20), Some(OutcomeCode::HomeRun));
        assert!(chart.validate().is_ok());

        let back = serde_json::to_value(&chart).unwrap();
        assert_eq!(back["4-10"], "GB");
        assert_eq!(back["20"], "HR");
    }

    #[test]
    fn chart_serde_rejects_bad_range() {
        let result: Result<Chart, _> = serde_json::from_str(r#"{"1-x": "SO"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn chart_serde_degrades_unknown_code() {
        let chart: Chart = serde_json::from_str(r#"{"1-20": "??"}"#).unwrap();
        assert_eq!(chart.lookup(7), Some(OutcomeCode::Out));
    }

    #[test]
    fn card_roles() {
        let batter = PlayerCard::batter("Ichiro", 11, 20, full_chart());
        assert_eq!(batter.on_base(), Some(11));
        assert_eq!(batter.pitching(), None);
        assert!(batter.require_pitcher().is_err());

        let pitcher = PlayerCard::pitcher("Maddux", 5, 7, full_chart());
        assert_eq!(pitcher.pitching(), Some((5, 7)));
        assert!(pitcher.require_batter().is_err());
    }

    #[test]
    fn missing_fielding_rating_is_zero() {
        let card = PlayerCard::batter("Utility", 9, 12, full_chart())
            .with_fielding(Position::Shortstop, 3);
        assert_eq!(card.fielding_at(Position::Shortstop), 3);
        assert_eq!(card.fielding_at(Position::Catcher), 0);
    }

    #[test]
    fn card_json_shape() {
        let json = r#"{
            "name": "Test Hitter",
            "role": "batter",
            "on_base": 10,
            "speed": 15,
            "fielding": {"SS": 3, "2B": 2},
            "chart": {"1-10": "GB", "11-20": "1B"}
        }"#;
        let card: PlayerCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.on_base(), Some(10));
        assert_eq!(card.fielding_at(Position::SecondBase), 2);
        assert_eq!(card.chart.lookup(15), Some(OutcomeCode::Single));
    }

    #[test]
    fn position_parse_and_display() {
        assert_eq!(Position::parse("ss"), Some(Position::Shortstop));
        assert_eq!(Position::parse("XX"), None);
        assert_eq!(Position::CenterField.to_string(), "CF");
    }

    proptest::proptest! {
        #[test]
        fn full_count_charts_cover_every_face(sizes in proptest::collection::vec(1u32..=6, 1..12)) {
            let codes = OutcomeCode::all();
            let mut left = CHART_MAX;
            let mut counts = Vec::new();
            for (i, size) in sizes.iter().enumerate() {
                let faces = (*size).min(left);
                counts.push((codes[i % codes.len()], faces));
                left -= faces;
            }
            if left > 0 {
                counts.push((OutcomeCode::Out, left));
            }

            let chart = Chart::from_counts(&counts);
            proptest::prop_assert!(chart.validate().is_ok());
            for face in CHART_MIN..=CHART_MAX {
                proptest::prop_assert!(chart.lookup(face).is_some());
            }
            let back: Chart = serde_json::from_value(serde_json::to_value(&chart).unwrap()).unwrap();
            proptest::prop_assert_eq!(back, chart);
        }
    }
}
