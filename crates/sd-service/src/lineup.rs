//! Who plays for each side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sd_core::{PlayerId, Position, Side};

/// One team's batting order, pitcher, and fielders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    /// Batters in order.
    pub batters: Vec<PlayerId>,
    /// The pitcher on the mound.
    pub pitcher: PlayerId,
    /// Who plays each defensive position.
    #[serde(default)]
    pub fielders: BTreeMap<Position, PlayerId>,
}

impl Lineup {
    /// A lineup with no fielders assigned.
    pub fn new(batters: Vec<PlayerId>, pitcher: PlayerId) -> Self {
        Self {
            batters,
            pitcher,
            fielders: BTreeMap::new(),
        }
    }

    /// Assign a fielder.
    pub fn with_fielder(mut self, position: Position, player: PlayerId) -> Self {
        self.fielders.insert(position, player);
        self
    }

    /// The batter at `index` in the order, wrapping.
    pub fn batter_at(&self, index: usize) -> Option<PlayerId> {
        if self.batters.is_empty() {
            return None;
        }
        self.batters.get(index % self.batters.len()).copied()
    }
}

/// Both lineups for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    /// The visiting team.
    pub away: Lineup,
    /// The home team.
    pub home: Lineup,
}

impl MatchSetup {
    /// The lineup for one side.
    pub fn lineup(&self, side: Side) -> &Lineup {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batter_at_wraps() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        let lineup = Lineup::new(vec![a, b], PlayerId::new());
        assert_eq!(lineup.batter_at(0), Some(a));
        assert_eq!(lineup.batter_at(3), Some(b));
    }

    #[test]
    fn empty_lineup_has_no_batter() {
        let lineup = Lineup::new(Vec::new(), PlayerId::new());
        assert_eq!(lineup.batter_at(0), None);
    }

    #[test]
    fn setup_json_uses_position_codes() {
        let catcher = PlayerId::new();
        let lineup = Lineup::new(vec![catcher], PlayerId::new())
            .with_fielder(Position::Catcher, catcher);
        let json = serde_json::to_value(&lineup).unwrap();
        assert!(json["fielders"].get("C").is_some());
    }
}
