use serde::{Deserialize, Serialize};

/// Orientation of a word on the grid.
///
/// Words always run left-to-right ([`Direction::Horizontal`]) or top-to-bottom
/// ([`Direction::Vertical`]). Any grid operation that depends on orientation is
/// written once in terms of [`Direction::step`] and [`Direction::perpendicular`],
/// so horizontal and vertical placements follow mirrored rules.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display("horizontal")]
    Horizontal,
    #[display("vertical")]
    Vertical,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the other direction.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Unit offset `(dx, dy)` of one step along this direction.
    #[must_use]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }
}

/// Integer grid coordinate.
///
/// `x` grows to the right (width), `y` grows downward (height). Coordinates may be
/// negative while probing neighbours of edge cells; placed words never occupy
/// negative coordinates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Coordinate measured along `direction`.
    #[must_use]
    pub const fn along(self, direction: Direction) -> i32 {
        match direction {
            Direction::Horizontal => self.x,
            Direction::Vertical => self.y,
        }
    }

    /// Moves `steps` cells along `direction`. Negative steps move backwards.
    #[must_use]
    pub const fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.step();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }
}
