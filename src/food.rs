use rand::Rng;

use crate::config::{FOOD_INSET_MARGIN, GridSize};
use crate::snake::{Position, Snake};

/// The prey palette food is drawn from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodKind {
    Rat,
    Rabbit,
    Lizard,
    Frog,
    Hamster,
    Cricket,
    Ant,
    Caterpillar,
    Turtle,
    Snail,
}

/// All food kinds in palette order.
pub const FOOD_KINDS: [FoodKind; 10] = [
    FoodKind::Rat,
    FoodKind::Rabbit,
    FoodKind::Lizard,
    FoodKind::Frog,
    FoodKind::Hamster,
    FoodKind::Cricket,
    FoodKind::Ant,
    FoodKind::Caterpillar,
    FoodKind::Turtle,
    FoodKind::Snail,
];

impl FoodKind {
    /// Picks a random kind from the palette.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        FOOD_KINDS[rng.gen_range(0..FOOD_KINDS.len())]
    }

    /// Emoji glyph for terminals that render color emoji.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Rat => "🐀",
            Self::Rabbit => "🐇",
            Self::Lizard => "🦎",
            Self::Frog => "🐸",
            Self::Hamster => "🐹",
            Self::Cricket => "🦗",
            Self::Ant => "🐜",
            Self::Caterpillar => "🐛",
            Self::Turtle => "🐢",
            Self::Snail => "🐌",
        }
    }

    /// Single-width fallback glyph for consoles without emoji fonts.
    #[must_use]
    pub fn ascii_glyph(self) -> &'static str {
        match self {
            Self::Rat => "r",
            Self::Rabbit => "b",
            Self::Lizard => "z",
            Self::Frog => "f",
            Self::Hamster => "h",
            Self::Cricket => "c",
            Self::Ant => "a",
            Self::Caterpillar => "w",
            Self::Turtle => "t",
            Self::Snail => "s",
        }
    }
}

/// One edible cell currently active on the board.
///
/// Classic mode keeps exactly one of these; Tetra and Bounce keep one per
/// remaining cell of the placed tetromino, all sharing a kind.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    /// Creates a food cell at `position`.
    #[must_use]
    pub fn new(position: Position, kind: FoodKind) -> Self {
        Self { position, kind }
    }
}

/// Places a single food cell on a free cell of the inset region.
///
/// The inset region keeps a one-cell border margin clear. Free cells are
/// enumerated and sampled once, which gives the same uniform distribution
/// as resampling until a free cell turns up but always terminates; `None`
/// means the whole region is occupied and the caller should keep whatever
/// food is already on the board.
#[must_use]
pub fn spawn_single<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Food> {
    let mut candidates = Vec::new();

    for y in FOOD_INSET_MARGIN..i32::from(bounds.height) - FOOD_INSET_MARGIN {
        for x in FOOD_INSET_MARGIN..i32::from(bounds.width) - FOOD_INSET_MARGIN {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let position = candidates[rng.gen_range(0..candidates.len())];
    Some(Food::new(position, FoodKind::random(rng)))
}
