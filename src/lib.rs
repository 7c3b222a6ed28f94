//! Memory matching game: a shuffled board of colored cards, flipped two at a
//! time. Matching pairs stay revealed; a mismatched pair flips back after a
//! short delay, during which input is ignored.
//!
//! The game rules live in [`game::Game`] and are free of any toolkit. The
//! GTK front end in `ui` (feature `gui`) only renders the board and hosts
//! the revert timer.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod shuffle;
pub mod symbol;

#[cfg(feature = "gui")]
pub mod ui;

pub use board::{Board, Card, CardId, Face};
pub use config::GameConfig;
pub use error::{ConfigError, SetupError};
pub use game::{ClickOutcome, Game, IgnoreReason, PendingRevert, RevertTicket, Selection};
pub use shuffle::{ShuffleMode, shuffle};
pub use symbol::Symbol;
