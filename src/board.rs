use std::fmt;

use rand::Rng;

use crate::shuffle::{ShuffleMode, shuffle};
use crate::symbol::Symbol;

pub const COPIES_PER_SYMBOL: usize = 2;

/// Position of a card in the dealt layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Down,
    Up,
}

#[derive(Clone, Debug)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    face: Face,
    matched: bool,
}

impl Card {
    fn new(id: CardId, symbol: Symbol) -> Self {
        Card {
            id,
            symbol,
            face: Face::Down,
            matched: false,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_face_up(&self) -> bool {
        self.face == Face::Up
    }

    /// Matched cards stay face-up and never react to clicks again.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.face = Face::Up;
    }

    pub(crate) fn conceal(&mut self) {
        if !self.matched {
            self.face = Face::Down;
        }
    }

    pub(crate) fn lock(&mut self) {
        self.face = Face::Up;
        self.matched = true;
    }
}

/// The full symbol sequence for a palette: the palette, then the palette again.
pub fn deck(palette: &[Symbol]) -> Vec<Symbol> {
    let mut symbols = Vec::with_capacity(palette.len() * COPIES_PER_SYMBOL);
    for _ in 0..COPIES_PER_SYMBOL {
        symbols.extend_from_slice(palette);
    }
    symbols
}

#[derive(Clone, Debug, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Binds one card per symbol; layout order is the sequence order.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(idx, symbol)| Card::new(CardId(idx), symbol))
            .collect();
        Board { cards }
    }

    pub fn deal<R>(palette: &[Symbol], mode: ShuffleMode, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut symbols = deck(palette);
        shuffle(&mut symbols, rng, mode);
        Self::from_symbols(symbols)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn count_of(&self, symbol: Symbol) -> usize {
        self.cards.iter().filter(|card| card.symbol == symbol).count()
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.cards.iter().map(|card| card.symbol).collect()
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / COPIES_PER_SYMBOL
    }

    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deck_repeats_the_palette() {
        let palette = [Symbol::Red, Symbol::Blue];
        assert_eq!(
            deck(&palette),
            vec![Symbol::Red, Symbol::Blue, Symbol::Red, Symbol::Blue]
        );
    }

    #[test]
    fn dealt_board_holds_exactly_two_of_each() {
        let mut rng = StdRng::seed_from_u64(99);
        let board = Board::deal(&Symbol::ALL, ShuffleMode::Uniform, &mut rng);
        assert_eq!(board.len(), 10);
        for symbol in Symbol::ALL {
            assert_eq!(board.count_of(symbol), 2, "{symbol}");
        }
    }

    #[test]
    fn layout_follows_sequence_order() {
        let seq = [Symbol::Green, Symbol::Red, Symbol::Green, Symbol::Red];
        let board = Board::from_symbols(seq);
        assert_eq!(board.symbols(), seq.to_vec());
        for (idx, card) in board.cards().iter().enumerate() {
            assert_eq!(card.id(), CardId(idx));
            assert_eq!(card.face(), Face::Down);
            assert!(!card.is_matched());
        }
    }

    #[test]
    fn conceal_does_not_hide_a_matched_card() {
        let mut board = Board::from_symbols([Symbol::Red, Symbol::Red]);
        let card = board.card_mut(CardId(0)).unwrap();
        card.lock();
        card.conceal();
        assert!(card.is_face_up());
        assert!(card.is_matched());
    }

    #[test]
    fn empty_board_is_vacuously_cleared() {
        let board = Board::from_symbols(Vec::<Symbol>::new());
        assert!(board.is_empty());
        assert!(board.is_cleared());
        assert!(board.card(CardId(0)).is_none());
    }
}
