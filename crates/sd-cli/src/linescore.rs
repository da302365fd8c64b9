//! Runs per half-inning, rebuilt from the stored turns.

use comfy_table::{CellAlignment, ContentArrangement, Table};

use sd_core::{HalfInning, MatchState, Side};
use sd_service::StoredState;

/// Runs by inning for both teams. `None` marks a half that was never
/// played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScore {
    away: Vec<Option<u32>>,
    home: Vec<Option<u32>>,
    totals: (u32, u32),
    finished: bool,
}

impl LineScore {
    /// Build the line score from a match history, oldest turn first.
    ///
    /// Runs in a turn are credited to the half-inning the turn started in,
    /// since a turn that ends a half flips it before it is stored.
    pub fn from_history(history: &[StoredState]) -> Self {
        let Some(last) = history.last() else {
            return Self {
                away: Vec::new(),
                home: Vec::new(),
                totals: (0, 0),
                finished: false,
            };
        };
        let innings = last.state.inning.max(last.state.config.regulation_innings) as usize;
        let mut line = Self {
            away: vec![None; innings],
            home: vec![None; innings],
            totals: (last.state.score.away, last.state.score.home),
            finished: last.state.game_over,
        };

        for turn in history {
            line.credit(turn.state.half_inning(), 0);
        }
        for pair in history.windows(2) {
            let (before, after) = (&pair[0].state, &pair[1].state);
            let side = before.batting_side();
            let runs = after.score.get(side).saturating_sub(before.score.get(side));
            if runs > 0 {
                line.credit(before.half_inning(), runs);
            }
        }
        line
    }

    fn credit(&mut self, half: HalfInning, runs: u32) {
        let row = if half.top { &mut self.away } else { &mut self.home };
        let Some(slot) = (half.inning as usize)
            .checked_sub(1)
            .and_then(|i| row.get_mut(i))
        else {
            return;
        };
        *slot = Some(slot.unwrap_or(0) + runs);
    }

    /// Runs a side scored in an inning, if that half was played.
    pub fn runs(&self, side: Side, inning: u32) -> Option<u32> {
        let row = match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        };
        (inning as usize)
            .checked_sub(1)
            .and_then(|i| row.get(i).copied().flatten())
    }

    /// Render as a table with one column per inning and a run total.
    pub fn table(&self, away_name: &str, home_name: &str) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let mut header = vec!["Team".to_string()];
        header.extend((1..=self.away.len()).map(|i| i.to_string()));
        header.push("R".to_string());
        table.set_header(header);

        let unplayed = if self.finished { "X" } else { "" };
        let innings = self.away.len() as u32;
        for (side, name, total) in [
            (Side::Away, away_name, self.totals.0),
            (Side::Home, home_name, self.totals.1),
        ] {
            let mut cells = vec![name.to_string()];
            cells.extend((1..=innings).map(|inning| match self.runs(side, inning) {
                Some(runs) => runs.to_string(),
                None => unplayed.to_string(),
            }));
            cells.push(total.to_string());
            table.add_row(cells);
        }
        for column in table.column_iter_mut().skip(1) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        table
    }
}

/// The closing line for a finished match.
pub fn final_line(state: &MatchState, away_name: &str, home_name: &str) -> String {
    let (away, home) = (state.score.away, state.score.home);
    let winner = match state.winner {
        Some(Side::Away) => away_name,
        Some(Side::Home) => home_name,
        None => return format!("{away_name} {away}, {home_name} {home}"),
    };
    let extra = if state.inning > state.config.regulation_innings {
        format!(" in {} innings", state.inning)
    } else {
        String::new()
    };
    format!("Final{extra}: {away_name} {away}, {home_name} {home}. {winner} win.")
}
