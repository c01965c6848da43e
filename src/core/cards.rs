use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;

use crate::core::reduction::{reduce_to_22, wrap_diff};

/// Card names indexed by `card - 1`
pub const CARD_NAMES: [&str; 22] = [
    "MAGICIAN",
    "HIGH PRIESTESS",
    "EMPRESS",
    "EMPEROR",
    "HIEROPHANT",
    "LOVERS",
    "CHARIOT",
    "JUSTICE",
    "HERMIT",
    "FORTUNE",
    "STRENGTH",
    "HANGED MAN",
    "DEATH",
    "TEMPERANCE",
    "DEVIL",
    "TOWER",
    "STAR",
    "MOON",
    "SUN",
    "JUDGEMENT",
    "WORLD",
    "FOOL",
];

/// A major-arcana position, always in 1..=22
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 22;

    /// Build a card from an index that is already in range
    pub fn new(index: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&index).then_some(Self(index))
    }

    /// Fold any integer into a card
    #[inline]
    pub fn reduce(n: i64) -> Self {
        Self(reduce_to_22(n))
    }

    /// Wrap-around difference of two cards, 22 when they are equal
    #[inline]
    pub fn diff(a: Card, b: Card) -> Self {
        Self(wrap_diff(a.0 as i64, b.0 as i64))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        CARD_NAMES[(self.0 - 1) as usize]
    }

    /// Every card in index order
    pub fn all() -> impl Iterator<Item = Card> {
        (Self::MIN..=Self::MAX).map(Card)
    }
}

impl Add for Card {
    type Output = Card;

    fn add(self, rhs: Card) -> Card {
        Card::reduce(self.0 as i64 + rhs.0 as i64)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// A fixed classification of cards
#[derive(Debug, Clone, Copy)]
pub struct CardSet(&'static [u8]);

impl CardSet {
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card.0)
    }

    /// Cards from `cards` that belong to this set, first occurrence order, no repeats
    pub fn pick(&self, cards: &[Card]) -> Vec<Card> {
        let mut picked: Vec<Card> = Vec::new();
        for &card in cards {
            if self.contains(card) && !picked.contains(&card) {
                picked.push(card);
            }
        }
        picked
    }
}

pub const POSITIVE: CardSet = CardSet(&[3, 5, 7, 10, 11, 17, 19, 21]);
pub const NEGATIVE: CardSet = CardSet(&[9, 12, 13, 15, 16, 18, 22]);
pub const GOOD_MARRIAGE: CardSet = CardSet(&[3, 5, 6, 8, 14, 17, 19, 21]);
pub const BAD_MARRIAGE: CardSet = CardSet(&[9, 12, 13, 15, 16, 18, 20, 22]);
pub const ACTIVE: CardSet = CardSet(&[1, 4, 5, 7, 11, 15, 16, 19]);
pub const PASSIVE: CardSet = CardSet(&[2, 3, 6, 9, 12, 14, 18, 21]);

/// Cards that make a union about feelings and personal life
pub const ROMANTIC: CardSet = CardSet(&[2, 3, 4, 5, 6, 18, 19, 20]);

/// Cards carrying explosive, conflict-prone energy
pub const CONFLICT: CardSet = CardSet(&[13, 15, 16]);

/// Join card names with ", "
pub fn card_names(cards: &[Card]) -> String {
    cards.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
}
