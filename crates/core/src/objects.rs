//! Placed objects: walls, fruit and the actor with its tail.

use tracing::debug;

use crate::geometry::Coord;
use crate::types::{Command, FruitKind};

/// Anything that occupies one board cell.
pub trait Placed {
    fn coord(&self) -> Coord;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub coord: Coord,
}

impl Wall {
    pub fn new(coord: Coord) -> Self {
        Self { coord }
    }
}

impl Placed for Wall {
    fn coord(&self) -> Coord {
        self.coord
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fruit {
    pub coord: Coord,
    pub kind: FruitKind,
}

impl Placed for Fruit {
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// How a tail segment bends, named by the direction the body enters and leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SegmentShape {
    #[default]
    Straight,
    EastToNorth,
    EastToSouth,
    NorthToEast,
    NorthToWest,
    SouthToEast,
    SouthToWest,
    WestToNorth,
    WestToSouth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TailSegment {
    pub coord: Coord,
    pub shape: SegmentShape,
}

impl Placed for TailSegment {
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// The player-controlled snake: a head cell plus an ordered tail.
///
/// The tail is owned exclusively by the actor. Index 0 is the segment right
/// behind the head; the last segment is the tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    head: Coord,
    tail: Vec<TailSegment>,
    last_command: Option<Command>,
}

impl Actor {
    /// An actor with no tail.
    pub fn new(head: Coord) -> Self {
        Self {
            head,
            tail: Vec::new(),
            last_command: None,
        }
    }

    pub fn head(&self) -> Coord {
        self.head
    }

    /// Tail segments, head end first.
    pub fn tail(&self) -> &[TailSegment] {
        &self.tail
    }

    pub fn tail_len(&self) -> usize {
        self.tail.len()
    }

    pub fn segment(&self, index: usize) -> Option<&TailSegment> {
        self.tail.get(index)
    }

    /// Append a segment at the tip of the tail.
    pub fn push_segment(&mut self, segment: TailSegment) {
        self.tail.push(segment);
    }

    /// The most recent direction accepted by [`Actor::apply_command`].
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// Accept a direction command.
    ///
    /// Movement, growth and self-collision rules are not defined yet, so the
    /// command is only recorded; head and tail stay where they are.
    pub fn apply_command(&mut self, command: Command) {
        debug!(code = %command.code(), "actor command");
        self.last_command = Some(command);
    }
}

impl Placed for Actor {
    fn coord(&self) -> Coord {
        self.head
    }
}
