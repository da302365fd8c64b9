//! Team files: a roster of cards plus a lineup, referring to players by name.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sd_core::{MatchConfig, PlayerCard, PlayerId, Position};
use sd_service::Lineup;

/// A team as written in a JSON team file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamFile {
    /// Team name.
    pub name: String,
    /// Name of the starting pitcher.
    pub pitcher: String,
    /// Batters by name, in order.
    pub batting_order: Vec<String>,
    /// Fielders by name, per position.
    #[serde(default)]
    pub fielders: BTreeMap<Position, String>,
    /// Every card on the roster.
    pub cards: Vec<PlayerCard>,
}

impl TeamFile {
    /// Read and parse a team file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&text).map_err(|e| format!("invalid team file {}: {e}", path.display()))
    }

    fn find(&self, name: &str) -> Option<&PlayerCard> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// Every problem with the file: bad charts, unknown names, and cards in
    /// the wrong role. Empty when the team is ready to play.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for card in &self.cards {
            if let Err(e) = card.chart.validate() {
                problems.push(format!("{}: {e}", card.name));
            }
        }
        let lineup_size = MatchConfig::default().lineup_size;
        if self.batting_order.len() != lineup_size {
            problems.push(format!(
                "batting order has {} batters, expected {lineup_size}",
                self.batting_order.len()
            ));
        }
        for name in &self.batting_order {
            match self.find(name) {
                Some(card) => {
                    if let Err(e) = card.require_batter() {
                        problems.push(e.to_string());
                    }
                }
                None => problems.push(format!("batter '{name}' has no card")),
            }
        }
        match self.find(&self.pitcher) {
            Some(card) => {
                if let Err(e) = card.require_pitcher() {
                    problems.push(e.to_string());
                }
            }
            None => problems.push(format!("pitcher '{}' has no card", self.pitcher)),
        }
        for (position, name) in &self.fielders {
            if self.find(name).is_none() {
                problems.push(format!("{position} '{name}' has no card"));
            }
        }
        problems
    }

    /// Resolve names to card ids. Fails with every problem found.
    pub fn lineup(&self) -> Result<Lineup, String> {
        let problems = self.problems();
        if !problems.is_empty() {
            return Err(format!("team '{}': {}", self.name, problems.join("; ")));
        }
        let id = |name: &str| -> Result<PlayerId, String> {
            self.find(name)
                .map(|c| c.id)
                .ok_or_else(|| format!("no card named '{name}'"))
        };
        let batters = self
            .batting_order
            .iter()
            .map(|n| id(n))
            .collect::<Result<Vec<_>, _>>()?;
        let mut lineup = Lineup::new(batters, id(&self.pitcher)?);
        for (position, name) in &self.fielders {
            lineup = lineup.with_fielder(*position, id(name)?);
        }
        Ok(lineup)
    }
}
