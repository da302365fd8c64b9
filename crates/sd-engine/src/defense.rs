//! Defensive ratings used by throws and double-play rolls.

use serde::{Deserialize, Serialize};

use sd_core::{PlayerCard, Position};

/// The fielding team's ratings and alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defense {
    /// Combined infield rating (1B, 2B, 3B, SS).
    pub infield: i32,
    /// Combined outfield rating (LF, CF, RF).
    pub outfield: i32,
    /// The catcher's arm.
    pub catcher_arm: i32,
    /// Whether the infield is drawn in.
    pub infield_in: bool,
}

impl Defense {
    /// Sum fielding ratings for the players at each position. A player with
    /// no rating at the position they are playing contributes 0.
    pub fn from_fielders<'a>(fielders: impl IntoIterator<Item = (Position, &'a PlayerCard)>) -> Self {
        let mut defense = Self::default();
        for (position, card) in fielders {
            let rating = card.fielding_at(position);
            if Position::INFIELD.contains(&position) {
                defense.infield += rating;
            } else if Position::OUTFIELD.contains(&position) {
                defense.outfield += rating;
            } else if position == Position::Catcher {
                defense.catcher_arm += rating;
            }
        }
        defense
    }

    /// Set the infield-in alignment.
    pub fn with_infield_in(mut self, infield_in: bool) -> Self {
        self.infield_in = infield_in;
        self
    }
}
