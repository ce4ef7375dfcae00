use crate::food::Food;
use crate::snake::Position;

/// The three rule variants.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameMode {
    /// One food cell at a time, no extra death rule.
    Classic,
    /// Food arrives as whole tetrominoes, eaten cell by cell.
    Tetra,
    /// Tetromino food, but eating on two consecutive ticks is fatal.
    Bounce,
}

impl GameMode {
    /// Display label for HUD and menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Tetra => "Tetra",
            Self::Bounce => "Bounce",
        }
    }

    /// Returns true when food is placed as tetromino shapes.
    #[must_use]
    pub fn uses_tetromino_food(self) -> bool {
        matches!(self, Self::Tetra | Self::Bounce)
    }

    /// Applies this mode's eat rule for a head landing on `head`.
    ///
    /// `ate_last_tick` is the Bounce streak flag; Classic and Tetra ignore
    /// it. A fatal outcome reports neither an eat nor an eaten cell — the
    /// session ends before any food state changes.
    #[must_use]
    pub fn evaluate_eat(self, head: Position, foods: &[Food], ate_last_tick: bool) -> EatOutcome {
        let eaten_index = foods.iter().position(|food| food.position == head);

        match self {
            Self::Classic | Self::Tetra => EatOutcome {
                ate: eaten_index.is_some(),
                eaten_index,
                fatal: false,
            },
            Self::Bounce => {
                if eaten_index.is_some() && ate_last_tick {
                    return EatOutcome {
                        ate: false,
                        eaten_index: None,
                        fatal: true,
                    };
                }
                EatOutcome {
                    ate: eaten_index.is_some(),
                    eaten_index,
                    fatal: false,
                }
            }
        }
    }
}

/// Result of one eat-rule evaluation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EatOutcome {
    pub ate: bool,
    /// Index of the food cell consumed this tick, if any.
    pub eaten_index: Option<usize>,
    /// Set when the Bounce consecutive-eat rule ends the session.
    pub fatal: bool,
}
