use crate::state::{Heading, Position};

/// Directions of travel through one cell of the trail.
///
/// `entering` is the heading the rover arrived with, `exiting` the heading it
/// left with. A renderer draws a straight line when both match and a corner
/// otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    pub entering: Heading,
    pub exiting: Heading,
    pub position: Position,
}

impl PathSegment {
    pub const fn new(entering: Heading, exiting: Heading, position: Position) -> Self {
        Self {
            entering,
            exiting,
            position,
        }
    }

    pub fn is_straight(&self) -> bool {
        self.entering == self.exiting
    }
}
