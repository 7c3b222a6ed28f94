use std::fmt;

use serde::{Deserialize, Serialize};

/// Face color of a card. Two cards match when their symbols are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Red,
        Symbol::Blue,
        Symbol::Green,
        Symbol::Orange,
        Symbol::Purple,
    ];

    /// Lowercase name, doubling as the card's CSS class and data value.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Red => "red",
            Symbol::Blue => "blue",
            Symbol::Green => "green",
            Symbol::Orange => "orange",
            Symbol::Purple => "purple",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Symbol::Red),
            "blue" => Some(Symbol::Blue),
            "green" => Some(Symbol::Green),
            "orange" => Some(Symbol::Orange),
            "purple" => Some(Symbol::Purple),
            _ => None,
        }
    }

    /// Fill color for a face-up card, as cairo-style 0.0..=1.0 channels.
    pub fn rgb(self) -> (f64, f64, f64) {
        match self {
            Symbol::Red => (0.88, 0.11, 0.14),
            Symbol::Blue => (0.21, 0.52, 0.89),
            Symbol::Green => (0.18, 0.76, 0.49),
            Symbol::Orange => (1.0, 0.47, 0.0),
            Symbol::Purple => (0.57, 0.25, 0.67),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
