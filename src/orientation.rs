//! Per-segment sprite orientation.
//!
//! A sprite renderer draws the snake from four base sprites (head, straight
//! body, corner, tail), each authored pointing up, rotated in quarter turns
//! counterclockwise. Deriving which rotation a segment needs from raw body
//! geometry, wrap-around included, is the fiddliest logic in the crate.
//! Solid-color renderers skip all of this and just fill cells.

use crate::grid::{self, Cell, Direction};

/// Discrete counterclockwise quarter-turn rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Half-turn, used when the tail reconnects across a board edge.
    pub fn flipped(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R180,
            Rotation::R90 => Rotation::R270,
            Rotation::R180 => Rotation::R0,
            Rotation::R270 => Rotation::R90,
        }
    }
}

/// Which base sprite a body segment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteVariant {
    Head,
    Straight,
    Corner,
    Tail,
}

/// Draw descriptor for one body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSprite {
    pub variant: SpriteVariant,
    pub rotation: Rotation,
}

/// Rotation that points an up-facing sprite along `direction`.
pub fn facing_rotation(direction: Direction) -> Rotation {
    match direction {
        Direction::Up => Rotation::R0,
        Direction::Left => Rotation::R90,
        Direction::Down => Rotation::R180,
        Direction::Right => Rotation::R270,
    }
}

pub fn head_sprite(direction: Direction) -> SegmentSprite {
    SegmentSprite {
        variant: SpriteVariant::Head,
        rotation: facing_rotation(direction),
    }
}

/// Orientation of an interior segment given its two neighbors.
///
/// `prev` is the head-ward neighbor, `next` the tail-ward one and `travel`
/// the direction of motion through the segment. Three cells sharing an axis
/// form a straight run; anything else is a corner.
pub fn body_sprite(prev: Cell, segment: Cell, next: Cell, travel: Direction) -> SegmentSprite {
    if prev.x == segment.x && segment.x == next.x {
        return SegmentSprite {
            variant: SpriteVariant::Straight,
            rotation: Rotation::R0,
        };
    }
    if prev.y == segment.y && segment.y == next.y {
        return SegmentSprite {
            variant: SpriteVariant::Straight,
            rotation: Rotation::R90,
        };
    }
    SegmentSprite {
        variant: SpriteVariant::Corner,
        rotation: corner_rotation(grid::delta(prev, next), travel),
    }
}

/// Corner lookup over the four diagonal neighbor deltas and the four travel
/// directions. The base corner sprite joins the up and left cell edges; each
/// entry rotates it onto the pair of edges the body actually runs through.
///
/// The table is exhaustive over all 16 (delta, direction) combinations.
/// A non-diagonal delta reaching this lookup means the caller
/// misclassified a straight run as a corner; that is a logic bug, so it
/// fails loudly instead of guessing an orientation.
pub fn corner_rotation(delta: (i32, i32), travel: Direction) -> Rotation {
    match (delta, travel) {
        ((1, -1), Direction::Up | Direction::Down) => Rotation::R0,
        ((1, -1), Direction::Left | Direction::Right) => Rotation::R180,
        ((-1, -1), Direction::Up | Direction::Down) => Rotation::R270,
        ((-1, -1), Direction::Left | Direction::Right) => Rotation::R90,
        ((1, 1), Direction::Up | Direction::Down) => Rotation::R90,
        ((1, 1), Direction::Left | Direction::Right) => Rotation::R270,
        ((-1, 1), Direction::Up | Direction::Down) => Rotation::R180,
        ((-1, 1), Direction::Left | Direction::Right) => Rotation::R0,
        (delta, travel) => panic!(
            "no corner orientation for neighbor delta {:?} while travelling {:?}",
            delta, travel
        ),
    }
}

/// Orientation of the tail from its single neighbor.
///
/// Keyed by the unit direction from the tail toward the neighbor. When the
/// raw span exceeds one cell the tail is reconnecting across a board edge
/// and the normalized direction points the wrong way, so flip a half turn.
pub fn tail_sprite(tail: Cell, neighbor: Cell) -> SegmentSprite {
    let raw = (neighbor.x - tail.x, neighbor.y - tail.y);
    let toward = grid::delta(neighbor, tail);
    let direction = Direction::from_delta(toward).unwrap_or_else(|| {
        panic!(
            "tail at {:?} has non-adjacent neighbor {:?}",
            tail, neighbor
        )
    });

    let mut rotation = facing_rotation(direction);
    if raw.0.abs() > 1 || raw.1.abs() > 1 {
        rotation = rotation.flipped();
    }

    SegmentSprite {
        variant: SpriteVariant::Tail,
        rotation,
    }
}

/// One sprite descriptor per body cell, head first. A single-cell snake is
/// just the head; from two cells up the last segment renders as the tail.
pub fn resolve(body: &[Cell], direction: Direction) -> Vec<SegmentSprite> {
    let mut sprites = Vec::with_capacity(body.len());

    for (i, &segment) in body.iter().enumerate() {
        let sprite = if i == 0 {
            head_sprite(direction)
        } else if i == body.len() - 1 {
            tail_sprite(segment, body[i - 1])
        } else {
            let prev = body[i - 1];
            let next = body[i + 1];
            let travel = Direction::from_delta(grid::delta(prev, segment)).unwrap_or_else(|| {
                panic!(
                    "body cells {:?} and {:?} at index {} are not adjacent",
                    prev, segment, i
                )
            });
            body_sprite(prev, segment, next, travel)
        };
        sprites.push(sprite);
    }

    sprites
}
