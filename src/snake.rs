use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the position one cell over in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Mutable snake state and movement buffering behavior.
///
/// Direction changes land in a single pending slot with last-input-wins
/// semantics and are applied at the start of the next movement tick, so a
/// burst of key presses between ticks can never fold the snake onto itself.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Buffers the next direction change.
    ///
    /// A direct reversal of the direction applied last tick is ignored;
    /// anything else overwrites the pending slot.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = direction;
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().stepped(self.pending_direction)
    }

    /// Commits one movement tick: promotes the pending direction, moves the
    /// head one cell and, unless `grow` is set, vacates the tail cell.
    pub fn advance(&mut self, grow: bool) {
        self.direction = self.pending_direction;
        let next_head = self.head().stepped(self.direction);

        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if `position` hits any segment except the tail.
    ///
    /// The tail cell is exempt: it is vacated on the same tick the head
    /// would enter it.
    #[must_use]
    pub fn hits_body_excluding_tail(&self, position: Position) -> bool {
        let tail_index = self.body.len() - 1;
        self.body
            .iter()
            .take(tail_index)
            .any(|segment| *segment == position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the movement direction applied last tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn position_bounds_check_rejects_all_four_edges() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 9, y: 7 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: -1 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: 8 }.is_within_bounds(bounds));
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.advance(false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn head_displacement_matches_each_direction() {
        for (direction, expected) in [
            (Direction::Up, Position { x: 5, y: 4 }),
            (Direction::Down, Position { x: 5, y: 6 }),
            (Direction::Left, Position { x: 4, y: 5 }),
            (Direction::Right, Position { x: 6, y: 5 }),
        ] {
            let mut snake = Snake::new(Position { x: 5, y: 5 }, direction);
            snake.advance(false);
            assert_eq!(snake.head(), expected);
        }
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.advance(true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn direction_buffer_rejects_reverse() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Up);

        snake.buffer_direction(Direction::Down);
        snake.advance(false);

        assert_eq!(snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn direction_buffer_is_idempotent_and_last_input_wins() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Up);
        assert_eq!(snake.next_head_position(), Position { x: 5, y: 4 });

        // A later input overwrites the pending slot entirely.
        snake.buffer_direction(Direction::Down);
        snake.advance(false);
        assert_eq!(snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn reversal_of_pending_but_not_current_direction_is_accepted() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        // Up is pending; Down reverses the pending slot but not the applied
        // direction, so it wins the slot.
        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Down);
        snake.advance(false);

        assert_eq!(snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn tail_cell_is_exempt_from_body_collision() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
                Position { x: 1, y: 2 },
            ],
            Direction::Right,
        );

        // (1, 2) is the tail and will be vacated this tick.
        assert!(!snake.hits_body_excluding_tail(Position { x: 1, y: 2 }));
        assert!(snake.hits_body_excluding_tail(Position { x: 1, y: 3 }));
    }

    #[test]
    fn single_segment_snake_never_self_collides() {
        let snake = Snake::new(Position { x: 3, y: 3 }, Direction::Left);
        assert!(!snake.hits_body_excluding_tail(Position { x: 3, y: 3 }));
    }
}
