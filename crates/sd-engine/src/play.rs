//! Scratch space for a play in progress.

use sd_core::{AtBatStatus, Base, MatchState, PendingDecision, PlayEvent, Runner, Side};

/// A working copy of the match state plus the events it has produced.
///
/// Resolvers mutate the copy freely; the caller's snapshot is untouched
/// until the finished play is handed back.
#[derive(Debug, Clone)]
pub(crate) struct Play {
    pub state: MatchState,
    pub events: Vec<PlayEvent>,
    batting: Side,
}

impl Play {
    pub fn new(state: &MatchState) -> Self {
        Self {
            batting: state.batting_side(),
            state: state.clone(),
            events: Vec::new(),
        }
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.events.push(PlayEvent::note(text));
    }

    /// Record `count` outs with one event.
    pub fn outs(&mut self, count: u32, text: impl Into<String>) {
        self.state.outs += count;
        self.events.push(PlayEvent::out(text));
    }

    pub fn out(&mut self, text: impl Into<String>) {
        self.outs(1, text);
    }

    /// Score a run for the batting side and charge it to the runner's
    /// pitcher of record.
    pub fn score(&mut self, runner: &Runner) {
        self.state.score.add(self.batting, 1);
        self.state
            .pitcher_fatigue
            .entry(runner.pitcher_of_record)
            .or_default()
            .earned_runs += 1;
        tracing::debug!(runner = %runner.name, side = %self.batting, "run scores");
        self.events.push(PlayEvent::run(format!("{} scores.", runner.name)));
    }

    /// Move the runner on `from` up one base, scoring from third.
    pub fn advance(&mut self, from: Base) {
        if let Some(runner) = self.state.bases.take(from) {
            match from.next() {
                Some(to) => {
                    self.state.bases.set(to, runner);
                }
                None => self.score(&runner),
            }
        }
    }

    /// Score every runner on base, lead runner first.
    pub fn clear_bases(&mut self) {
        for base in Base::LEAD_FIRST {
            if let Some(runner) = self.state.bases.take(base) {
                self.score(&runner);
            }
        }
    }

    pub fn inning_over(&self) -> bool {
        self.state.outs >= 3
    }

    /// Stop the play until the named decision is submitted.
    pub fn pause(&mut self, pending: PendingDecision) {
        self.state.status = AtBatStatus::AwaitingDecision(pending.kind());
        self.state.pending = Some(pending);
    }

    pub fn into_parts(self) -> (MatchState, Vec<PlayEvent>) {
        (self.state, self.events)
    }
}
