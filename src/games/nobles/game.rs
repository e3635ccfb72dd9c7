//! Two-player games and batch matches.
//!
//! Every game owns its table, decks and RNG. `best_of` runs games in
//! parallel, seeding game `i` with `config.seed + i`, so a match result
//! depends only on the config and never on thread scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::strategy::NoblesBigMoney;
use crate::cards::CardCatalog;
use crate::core::{GameRng, Result, SimConfig, SimError};
use crate::zones::{Deck, Table};

/// Number of players in a nobles game.
pub const PLAYER_COUNT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(usize),
    /// Game ended with equal victory points.
    Draw,
    /// Hand cap reached before the game ended.
    TimedOut,
}

/// Result of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub hands: usize,
    /// Victory points per player at the end.
    pub scores: [u32; PLAYER_COUNT],
}

/// Totals over a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub games: usize,
    pub wins: [usize; PLAYER_COUNT],
    pub draws: usize,
    pub timeouts: usize,
}

impl MatchReport {
    fn record(&mut self, report: &GameReport) {
        self.games += 1;
        match report.outcome {
            GameOutcome::Winner(p) => self.wins[p] += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::TimedOut => self.timeouts += 1,
        }
    }
}

/// Play one game between two `NoblesBigMoney` players.
///
/// Players alternate hands starting with `first_player`, until the table
/// reports the end of the game or `config.max_hands` hands have been played.
pub fn play_game(
    config: &SimConfig,
    catalog: &CardCatalog,
    seed: u64,
    first_player: usize,
) -> Result<GameReport> {
    if first_player >= PLAYER_COUNT {
        return Err(SimError::InvalidConfig(format!(
            "first player {first_player} out of range for {PLAYER_COUNT} players"
        )));
    }
    config.validate(catalog)?;

    let mut rng = GameRng::new(seed);
    let supply = config.resolve_supply(catalog)?;
    let mut table = Table::new(&supply, config.resolve_game_end_card(catalog)?);
    let starting_deck = config.resolve_starting_deck(catalog)?;

    let mut players = Vec::with_capacity(PLAYER_COUNT);
    for delay in config.province_delay {
        let deck = Deck::new(&starting_deck, rng.fork());
        players.push(Player::new(deck, Box::new(NoblesBigMoney::new(catalog, delay)?)));
    }

    let mut hands = 0;
    while !table.is_game_end() && hands < config.max_hands {
        let p = (hands + first_player) % PLAYER_COUNT;
        let cash = players[p].play_hand(&mut table, catalog, config)?;
        log::trace!(target: "game", "hand {}: player {} made ${}", hands, p, cash);
        hands += 1;
    }

    let scores = [
        players[0].deck().count_victory(catalog),
        players[1].deck().count_victory(catalog),
    ];

    let outcome = if !table.is_game_end() {
        log::info!(target: "game", "game timed out after {} hands", hands);
        GameOutcome::TimedOut
    } else if scores[0] == scores[1] {
        log::info!(target: "game", "draw after {} hands", hands);
        GameOutcome::Draw
    } else {
        let winner = if scores[0] > scores[1] { 0 } else { 1 };
        log::info!(target: "game", "player {} won after {} hands", winner, hands);
        GameOutcome::Winner(winner)
    };

    Ok(GameReport { outcome, hands, scores })
}

/// Play `games` independent games in parallel, alternating who starts.
pub fn best_of(config: &SimConfig, catalog: &CardCatalog, games: usize) -> Result<MatchReport> {
    let reports = (0..games)
        .into_par_iter()
        .map(|i| play_game(config, catalog, config.seed.wrapping_add(i as u64), i % PLAYER_COUNT))
        .collect::<Result<Vec<_>>>()?;

    let mut summary = MatchReport::default();
    for report in &reports {
        summary.record(report);
    }
    log::info!(
        target: "game",
        "{} games: wins {:?}, {} draws, {} timeouts",
        summary.games,
        summary.wins,
        summary.draws,
        summary.timeouts
    );
    Ok(summary)
}
