use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must be at least 1x1 (got {width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("grid dimension {0} does not fit a signed coordinate")]
    TooLarge(u32),
}

/// Fixed rectangular coordinate space the rover drives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const DEFAULT_WIDTH: u32 = 10;
    pub const DEFAULT_HEIGHT: u32 = 20;

    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let grid = Self { width, height };
        grid.validate()?;
        Ok(grid)
    }

    /// Checks the invariants `new` enforces; used for dimensions that arrive
    /// through deserialization.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::Empty {
                width: self.width,
                height: self.height,
            });
        }
        for dimension in [self.width, self.height] {
            if i32::try_from(dimension).is_err() {
                return Err(GridError::TooLarge(dimension));
            }
        }
        Ok(())
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && i64::from(position.x) < i64::from(self.width)
            && i64::from(position.y) < i64::from(self.height)
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}
