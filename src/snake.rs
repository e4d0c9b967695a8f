use std::collections::VecDeque;

use crate::grid::{self, Cell, Direction};

/// Body the snake spawns with and returns to on reset, head first.
pub const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

/// Direction the snake spawns with and returns to on reset.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Mutable snake state: body, steering and pending growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    /// Direction the next advance will use.
    direction: Direction,
    grow: bool,
}

impl Snake {
    /// Creates the canonical three-segment snake.
    #[must_use]
    pub fn new() -> Self {
        Self::from_segments(INITIAL_BODY.to_vec(), INITIAL_DIRECTION)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty(), "snake body must not be empty");

        Self {
            body: VecDeque::from(segments),
            direction,
            grow: false,
        }
    }

    /// Moves one cell forward, keeping the tail if growth is pending.
    pub fn advance(&mut self) {
        let next_head = self.head().step(self.direction);

        self.body.push_front(next_head);
        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Steers the snake for the next advance.
    ///
    /// The exact opposite of the current direction is rejected. Every
    /// accepted steer replaces the current direction immediately, so the
    /// latest one before an advance wins. Returns whether it was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Queues growth on the next advance.
    pub fn mark_growth(&mut self) {
        self.grow = true;
    }

    /// Restores the spawn body and direction, dropping any pending growth.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.grow = false;
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the full body, head first.
    #[must_use]
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        grid::contains(self.body.iter().skip(1), self.head())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction the next advance will use.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn has_pending_growth(&self) -> bool {
        self.grow
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
