//! Hand evaluation and the dealer's hand.

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Best blackjack total for a hand.
///
/// Aces are counted as 11 while the total stays at or under 21 and reduced
/// to 1 one at a time otherwise, reproducing standard soft/hard totaling:
/// `{A, A, 9}` evaluates to 21, `{A, A, A, 8}` to 21 after two reductions.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Whether the hand is soft (an Ace is still counted as 11).
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Whether the hand is a natural blackjack: exactly two cards totaling 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == 21
}

/// The dealer's hand.
///
/// The first card is dealt face down and stays hidden until the dealer turn
/// begins. Hiding gates presentation only: [`DealerHand::value`] always
/// counts every card.
#[derive(Debug, Clone)]
pub struct DealerHand {
    cards: Vec<Card>,
    hidden: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand with the hole card face down.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hidden: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the first card is still face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Turns the hole card face up.
    pub const fn reveal(&mut self) {
        self.hidden = false;
    }

    /// Total over the face-up cards only.
    ///
    /// While the hole card is hidden this skips the first card; afterwards it
    /// matches [`DealerHand::value`].
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hidden {
            self.cards.get(1..).map_or(0, hand_value)
        } else {
            self.value()
        }
    }

    /// Full total of the hand, hole card included.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round, turning the hole card back down.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hidden = true;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
