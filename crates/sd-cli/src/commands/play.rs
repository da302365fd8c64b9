use std::path::Path;

use colored::Colorize;

use sd_core::PlayEvent;
use sd_engine::SeededRolls;
use sd_service::{
    InMemoryCards, InMemoryMatchStore, MatchService, MatchSetup, NoopNotifier, ServiceConfig,
};

use crate::autopilot::{AutoplayConfig, next_command};
use crate::demo;
use crate::linescore::{LineScore, final_line};
use crate::team::TeamFile;

fn load_or_demo(path: Option<&Path>, fallback: fn() -> TeamFile) -> Result<TeamFile, String> {
    match path {
        Some(path) => TeamFile::load(path),
        None => Ok(fallback()),
    }
}

pub fn run(
    home: Option<&Path>,
    away: Option<&Path>,
    config: &AutoplayConfig,
    json: bool,
) -> Result<(), String> {
    let away = load_or_demo(away, demo::away)?;
    let home = load_or_demo(home, demo::home)?;

    let setup = MatchSetup {
        away: away.lineup()?,
        home: home.lineup()?,
    };
    let cards: InMemoryCards = away.cards.iter().chain(&home.cards).cloned().collect();
    let service = MatchService::new(
        InMemoryMatchStore::new(),
        NoopNotifier,
        cards,
        ServiceConfig::default(),
    );
    let id = service.create(setup).map_err(|e| e.to_string())?;

    let mut rolls = SeededRolls::new(config.seed);
    let mut plays = 0;
    loop {
        let latest = service.latest(id).map_err(|e| e.to_string())?;
        if latest.state.game_over || plays >= config.max_plays {
            break;
        }
        let command = next_command(&latest.state, config);
        service
            .submit(id, &command, &mut rolls)
            .map_err(|e| format!("turn {}: {e}", latest.turn + 1))?;
        plays += 1;
    }

    let history = service.history(id).map_err(|e| e.to_string())?;
    let Some(last) = history.last() else {
        return Err("match has no stored turns".to_string());
    };
    if !last.state.game_over {
        return Err(format!(
            "match did not finish within {} plays",
            config.max_plays
        ));
    }

    if json {
        let out = serde_json::to_string_pretty(&history)
            .map_err(|e| format!("failed to serialize history: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {} at {} {}",
        "Playing".bold(),
        away.name,
        home.name,
        format!("(seed={}, {plays} plays)", config.seed).dimmed()
    );
    println!();
    let opening = history[0].state.half_inning();
    println!("  {}", format!("--- {opening} ---").bold());
    for turn in &history[1..] {
        for event in &turn.events {
            print_event(event);
        }
    }

    println!();
    println!("  {}", "Line Score".bold().underline());
    println!();
    println!("{}", LineScore::from_history(&history).table(&away.name, &home.name));
    println!();
    println!("  {}", final_line(&last.state, &away.name, &home.name).bold());

    Ok(())
}

fn print_event(event: &PlayEvent) {
    if event.is_half_inning_change {
        println!();
        println!("  {}", event.text.bold());
    } else if event.score_changed {
        println!("  {}", event.text.green());
    } else if event.outs_changed {
        println!("  {}", event.text.dimmed());
    } else {
        println!("  {}", event.text);
    }
}
