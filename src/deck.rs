//! The draw pile and its replacement policy.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// Remaining-card threshold below which the deck is replaced before a deal.
///
/// A full round draws at most `2 * seats + 2` cards up front plus a bounded
/// number of hits, so replacing a deck under this mark before dealing keeps
/// the pile from ever running dry mid-round.
pub const LOW_WATER_MARK: usize = 15;

/// An ordered pile of cards, drawn from the top.
///
/// The deck is replaced wholesale when it runs low; it is never partially
/// reshuffled mid-round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a fresh 52-card deck, Fisher-Yates shuffled by `rng`.
    pub fn fresh<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` only on an empty deck, which the replacement policy
    /// rules out for callers that check [`Deck::is_low`] before each deal.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Whether the deck has fallen below `threshold` remaining cards.
    ///
    /// Tables pass their configured threshold, [`LOW_WATER_MARK`] by default.
    #[must_use]
    pub fn is_low(&self, threshold: usize) -> bool {
        self.cards.len() < threshold
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replaces the pile so that subsequent draws come out in `draws` order.
    pub fn load(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }
}
