use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, CardId};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Identifies one scheduled flip-back. Only the ticket issued for the
/// current pair of the current deal is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTicket {
    game_id: u64,
    pair: [CardId; 2],
}

impl RevertTicket {
    pub fn pair(&self) -> [CardId; 2] {
        self.pair
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRevert {
    pub ticket: RevertTicket,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Idle,
    OneSelected(CardId),
    /// A mismatched pair is showing; input is gated until the revert runs.
    Reverting(RevertTicket),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    Gated,
    Matched,
    AlreadySelected,
    UnknownCard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    Revealed(CardId),
    Matched { pair: [CardId; 2], finished: bool },
    Mismatched(PendingRevert),
}

pub struct Game {
    config: GameConfig,
    board: Board,
    selection: Selection,
    rng: StdRng,
    game_id: u64,
    attempts: u32,
}

fn rng_for(config: &GameConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl Game {
    /// Validates `config` and deals a shuffled board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(&config);
        let board = Board::deal(&config.symbols, config.shuffle, &mut rng);
        log::info!(
            "dealt {} cards ({:?} shuffle): {:?}",
            board.len(),
            config.shuffle,
            board.symbols()
        );
        Ok(Game {
            config,
            board,
            selection: Selection::Idle,
            rng,
            game_id: 1,
            attempts: 0,
        })
    }

    /// Starts from a fixed layout. Later resets still deal from `config`.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let rng = rng_for(&config);
        Game {
            config,
            board,
            selection: Selection::Idle,
            rng,
            game_id: 1,
            attempts: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn first_selection(&self) -> Option<CardId> {
        match self.selection {
            Selection::OneSelected(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_gated(&self) -> bool {
        matches!(self.selection, Selection::Reverting(_))
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// Completed pair comparisons, matched or not.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn pairs_found(&self) -> usize {
        self.board.matched_pairs()
    }

    pub fn pairs_total(&self) -> usize {
        self.board.len() / crate::board::COPIES_PER_SYMBOL
    }

    pub fn is_won(&self) -> bool {
        !self.board.is_empty() && self.board.is_cleared()
    }

    pub fn revert_delay(&self) -> Duration {
        self.config.revert_delay()
    }

    pub fn click(&mut self, id: CardId) -> ClickOutcome {
        let Some(card) = self.board.card(id) else {
            return ClickOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if self.is_gated() {
            return ClickOutcome::Ignored(IgnoreReason::Gated);
        }
        if card.is_matched() {
            return ClickOutcome::Ignored(IgnoreReason::Matched);
        }

        match self.selection {
            Selection::Idle => {
                self.reveal(id);
                self.selection = Selection::OneSelected(id);
                log::debug!("revealed {id} ({})", self.symbol_name(id));
                ClickOutcome::Revealed(id)
            }
            Selection::OneSelected(first) if first == id => {
                ClickOutcome::Ignored(IgnoreReason::AlreadySelected)
            }
            Selection::OneSelected(first) => {
                self.reveal(id);
                self.attempts = self.attempts.saturating_add(1);
                self.evaluate([first, id])
            }
            Selection::Reverting(_) => ClickOutcome::Ignored(IgnoreReason::Gated),
        }
    }

    fn evaluate(&mut self, pair: [CardId; 2]) -> ClickOutcome {
        let [first, second] = pair;
        let same = match (self.board.card(first), self.board.card(second)) {
            (Some(a), Some(b)) => a.symbol() == b.symbol(),
            _ => false,
        };

        if same {
            for id in pair {
                if let Some(card) = self.board.card_mut(id) {
                    card.lock();
                }
            }
            self.selection = Selection::Idle;
            let finished = self.board.is_cleared();
            log::debug!("matched {first} and {second} ({})", self.symbol_name(first));
            if finished {
                log::info!(
                    "all {} pairs found in {} attempts",
                    self.pairs_total(),
                    self.attempts
                );
            }
            ClickOutcome::Matched { pair, finished }
        } else {
            let ticket = RevertTicket {
                game_id: self.game_id,
                pair,
            };
            self.selection = Selection::Reverting(ticket);
            log::debug!(
                "mismatch {first} ({}) vs {second} ({}), reverting in {:?}",
                self.symbol_name(first),
                self.symbol_name(second),
                self.revert_delay()
            );
            ClickOutcome::Mismatched(PendingRevert {
                ticket,
                delay: self.revert_delay(),
            })
        }
    }

    /// Flips a mismatched pair back and reopens input. Returns `false` for a
    /// ticket that no longer applies, leaving the game untouched.
    pub fn complete_revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.game_id != self.game_id || self.selection != Selection::Reverting(ticket) {
            log::trace!("dropping stale revert for {:?}", ticket.pair);
            return false;
        }
        for id in ticket.pair {
            if let Some(card) = self.board.card_mut(id) {
                card.conceal();
            }
        }
        self.selection = Selection::Idle;
        log::debug!("reverted {} and {}", ticket.pair[0], ticket.pair[1]);
        true
    }

    /// Deals a fresh board. Outstanding revert tickets become stale.
    pub fn reset(&mut self) {
        self.game_id = self.game_id.wrapping_add(1);
        self.board = Board::deal(&self.config.symbols, self.config.shuffle, &mut self.rng);
        self.selection = Selection::Idle;
        self.attempts = 0;
        log::info!("new deal #{}: {:?}", self.game_id, self.board.symbols());
    }

    fn reveal(&mut self, id: CardId) {
        if let Some(card) = self.board.card_mut(id) {
            card.reveal();
        }
    }

    fn symbol_name(&self, id: CardId) -> &'static str {
        self.board
            .card(id)
            .map(|card| card.symbol().name())
            .unwrap_or("?")
    }
}
