//! Outcome codes printed on player charts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The result of a swing, as printed on a player chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCode {
    /// Strikeout (`SO`).
    #[serde(rename = "SO")]
    Strikeout,
    /// Infield popup (`PU`).
    #[serde(rename = "PU")]
    Popup,
    /// Ground ball out, may turn into a double play (`GB`).
    #[serde(rename = "GB")]
    Groundball,
    /// Fly ball out, runners may tag up (`FB`).
    #[serde(rename = "FB")]
    Flyball,
    /// Base on balls (`BB`).
    #[serde(rename = "BB")]
    Walk,
    /// Single (`1B`).
    #[serde(rename = "1B")]
    Single,
    /// Single with a free advance to second when it is open (`1B+`).
    #[serde(rename = "1B+")]
    SinglePlus,
    /// Double (`2B`).
    #[serde(rename = "2B")]
    Double,
    /// Triple (`3B`).
    #[serde(rename = "3B")]
    Triple,
    /// Home run (`HR`).
    #[serde(rename = "HR")]
    HomeRun,
    /// Sacrifice bunt (`SAC`).
    #[serde(rename = "SAC")]
    SacrificeBunt,
    /// Any other out (`OUT`).
    #[serde(rename = "OUT")]
    Out,
}

impl OutcomeCode {
    /// Every outcome code, in chart order from worst to best for the batter.
    pub fn all() -> &'static [Self] {
        &[
            Self::Strikeout,
            Self::Popup,
            Self::Groundball,
            Self::Flyball,
            Self::Out,
            Self::SacrificeBunt,
            Self::Walk,
            Self::Single,
            Self::SinglePlus,
            Self::Double,
            Self::Triple,
            Self::HomeRun,
        ]
    }

    /// The short code as printed on a card.
    pub fn code(self) -> &'static str {
        match self {
            Self::Strikeout => "SO",
            Self::Popup => "PU",
            Self::Groundball => "GB",
            Self::Flyball => "FB",
            Self::Walk => "BB",
            Self::Single => "1B",
            Self::SinglePlus => "1B+",
            Self::Double => "2B",
            Self::Triple => "3B",
            Self::HomeRun => "HR",
            Self::SacrificeBunt => "SAC",
            Self::Out => "OUT",
        }
    }

    /// Strictly parse a card code. Returns `None` for anything unrecognized.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SO" | "K" => Some(Self::Strikeout),
            "PU" => Some(Self::Popup),
            "GB" => Some(Self::Groundball),
            "FB" => Some(Self::Flyball),
            "BB" => Some(Self::Walk),
            "1B" => Some(Self::Single),
            "1B+" => Some(Self::SinglePlus),
            "2B" => Some(Self::Double),
            "3B" => Some(Self::Triple),
            "HR" => Some(Self::HomeRun),
            "SAC" => Some(Self::SacrificeBunt),
            other if other.starts_with("OUT") => Some(Self::Out),
            _ => None,
        }
    }

    /// Parse a card code, degrading anything unrecognized to a generic out.
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_code(s).unwrap_or_else(|| {
            tracing::warn!(code = s, "unrecognized outcome code, treating as out");
            Self::Out
        })
    }

    /// Returns true for outcomes that put the batter on base with a hit.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            Self::Single | Self::SinglePlus | Self::Double | Self::Triple | Self::HomeRun
        )
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strikeout => "strikeout",
            Self::Popup => "popup",
            Self::Groundball => "ground ball",
            Self::Flyball => "fly ball",
            Self::Walk => "walk",
            Self::Single => "single",
            Self::SinglePlus => "single-plus",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::HomeRun => "home run",
            Self::SacrificeBunt => "sacrifice bunt",
            Self::Out => "out",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for outcome in OutcomeCode::all() {
            assert_eq!(OutcomeCode::from_code(outcome.code()), Some(*outcome));
        }
    }

    #[test]
    fn out_prefixed_codes_are_generic_outs() {
        assert_eq!(OutcomeCode::from_code("OUT"), Some(OutcomeCode::Out));
        assert_eq!(OutcomeCode::from_code("OUT-LF"), Some(OutcomeCode::Out));
        assert_eq!(OutcomeCode::from_code("out"), Some(OutcomeCode::Out));
    }

    #[test]
    fn unknown_code_degrades_to_out() {
        assert_eq!(OutcomeCode::from_code("XYZ"), None);
        assert_eq!(OutcomeCode::parse_lenient("XYZ"), OutcomeCode::Out);
    }

    #[test]
    fn serde_uses_card_codes() {
        let json = serde_json::to_string(&OutcomeCode::SinglePlus).unwrap();
        assert_eq!(json, "\"1B+\"");
        let back: OutcomeCode = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(back, OutcomeCode::HomeRun);
    }

    #[test]
    fn hits() {
        assert!(OutcomeCode::Double.is_hit());
        assert!(!OutcomeCode::Walk.is_hit());
        assert!(!OutcomeCode::Groundball.is_hit());
    }
}
