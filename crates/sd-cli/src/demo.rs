//! Built-in teams for playing without team files.
//!
//! Charts are laid out from outcome counts the way card ingest builds them:
//! batters in the order SO, GB, FB, BB, 1B, 1B+, 2B, 3B, HR and pitchers in
//! the order PU, SO, GB, FB, BB, 1B, 2B, HR.

use std::collections::BTreeMap;

use sd_core::{Chart, OutcomeCode, PlayerCard, Position};

use crate::team::TeamFile;

const BATTER_ORDER: [OutcomeCode; 9] = [
    OutcomeCode::Strikeout,
    OutcomeCode::Groundball,
    OutcomeCode::Flyball,
    OutcomeCode::Walk,
    OutcomeCode::Single,
    OutcomeCode::SinglePlus,
    OutcomeCode::Double,
    OutcomeCode::Triple,
    OutcomeCode::HomeRun,
];

const PITCHER_ORDER: [OutcomeCode; 8] = [
    OutcomeCode::Popup,
    OutcomeCode::Strikeout,
    OutcomeCode::Groundball,
    OutcomeCode::Flyball,
    OutcomeCode::Walk,
    OutcomeCode::Single,
    OutcomeCode::Double,
    OutcomeCode::HomeRun,
];

fn chart<const N: usize>(order: [OutcomeCode; N], counts: [u32; N]) -> Chart {
    let counts: Vec<_> = order.into_iter().zip(counts).collect();
    Chart::from_counts(&counts)
}

struct Hitter {
    name: &'static str,
    position: Position,
    on_base: i32,
    speed: i32,
    fielding: i32,
    counts: [u32; 9],
}

fn team(
    name: &str,
    pitcher: (&str, i32, i32, [u32; 8]),
    hitters: &[Hitter],
) -> TeamFile {
    let (pitcher_name, control, ip, counts) = pitcher;
    let mut cards = vec![PlayerCard::pitcher(
        pitcher_name,
        control,
        ip,
        chart(PITCHER_ORDER, counts),
    )];
    let mut fielders = BTreeMap::new();
    for h in hitters {
        cards.push(
            PlayerCard::batter(h.name, h.on_base, h.speed, chart(BATTER_ORDER, h.counts))
                .with_fielding(h.position, h.fielding),
        );
        if h.position != Position::DesignatedHitter {
            fielders.insert(h.position, h.name.to_string());
        }
    }
    TeamFile {
        name: name.to_string(),
        pitcher: pitcher_name.to_string(),
        batting_order: hitters.iter().map(|h| h.name.to_string()).collect(),
        fielders,
        cards,
    }
}

/// The visiting demo team: speed and contact.
pub fn away() -> TeamFile {
    team(
        "Harbor Gulls",
        ("Mercer", 4, 7, [2, 5, 6, 3, 1, 2, 0, 1]),
        &[
            Hitter { name: "Okafor", position: Position::CenterField, on_base: 10, speed: 19, fielding: 2, counts: [2, 3, 2, 4, 6, 1, 1, 1, 0] },
            Hitter { name: "Lindqvist", position: Position::Shortstop, on_base: 9, speed: 16, fielding: 3, counts: [3, 4, 2, 3, 5, 1, 1, 1, 0] },
            Hitter { name: "Baptiste", position: Position::RightField, on_base: 11, speed: 13, fielding: 1, counts: [2, 3, 3, 4, 4, 0, 2, 0, 2] },
            Hitter { name: "Tanaka", position: Position::FirstBase, on_base: 10, speed: 10, fielding: 0, counts: [3, 3, 3, 3, 3, 0, 2, 0, 3] },
            Hitter { name: "Reyes", position: Position::ThirdBase, on_base: 9, speed: 12, fielding: 2, counts: [3, 4, 3, 2, 4, 0, 2, 0, 2] },
            Hitter { name: "Novak", position: Position::LeftField, on_base: 8, speed: 15, fielding: 1, counts: [3, 5, 3, 2, 4, 1, 1, 1, 0] },
            Hitter { name: "Adeyemi", position: Position::SecondBase, on_base: 8, speed: 17, fielding: 3, counts: [3, 5, 3, 2, 5, 1, 1, 0, 0] },
            Hitter { name: "Castillo", position: Position::Catcher, on_base: 7, speed: 9, fielding: 6, counts: [4, 5, 4, 2, 3, 0, 1, 0, 1] },
            Hitter { name: "Moreau", position: Position::DesignatedHitter, on_base: 8, speed: 11, fielding: 0, counts: [4, 4, 4, 2, 3, 0, 1, 0, 2] },
        ],
    )
}

/// The home demo team: power and patience.
pub fn home() -> TeamFile {
    team(
        "Ridge Foxes",
        ("Halvorsen", 5, 6, [3, 5, 5, 4, 1, 1, 0, 1]),
        &[
            Hitter { name: "Whitaker", position: Position::SecondBase, on_base: 10, speed: 15, fielding: 3, counts: [3, 3, 2, 4, 5, 1, 1, 1, 0] },
            Hitter { name: "Petrov", position: Position::Shortstop, on_base: 9, speed: 14, fielding: 4, counts: [3, 4, 3, 3, 4, 1, 1, 0, 1] },
            Hitter { name: "Nakamura", position: Position::FirstBase, on_base: 11, speed: 10, fielding: 1, counts: [3, 2, 3, 5, 3, 0, 1, 0, 3] },
            Hitter { name: "Delacroix", position: Position::LeftField, on_base: 10, speed: 11, fielding: 1, counts: [4, 2, 3, 4, 2, 0, 2, 0, 3] },
            Hitter { name: "Osei", position: Position::RightField, on_base: 9, speed: 12, fielding: 2, counts: [3, 3, 4, 3, 3, 0, 2, 0, 2] },
            Hitter { name: "Brennan", position: Position::ThirdBase, on_base: 8, speed: 11, fielding: 2, counts: [4, 4, 3, 3, 3, 0, 1, 0, 2] },
            Hitter { name: "Sato", position: Position::CenterField, on_base: 8, speed: 18, fielding: 3, counts: [3, 5, 3, 2, 4, 1, 1, 1, 0] },
            Hitter { name: "Gallo", position: Position::Catcher, on_base: 7, speed: 8, fielding: 5, counts: [5, 4, 4, 2, 3, 0, 1, 0, 1] },
            Hitter { name: "Kowalski", position: Position::DesignatedHitter, on_base: 8, speed: 10, fielding: 0, counts: [5, 3, 4, 2, 3, 0, 1, 0, 2] },
        ],
    )
}
