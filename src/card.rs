//! Card types and deck constants.

/// Card suit.
///
/// Suits are cosmetic: they drive display only, never hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Blackjack point value before soft-ace reduction.
    ///
    /// An Ace counts as 11 here; reduction to 1 happens during hand
    /// evaluation. Face cards count as 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
