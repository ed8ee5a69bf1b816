/// One logical page region addressed by a stable string identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Unique identifier used by nav links and formations.
    pub id: String,
    /// Position among sections for sequential navigation.
    pub index: usize,
    /// Whether this section is the active one.
    pub active: bool,
}

impl Section {
    /// Build an inactive section at `index`.
    pub fn new(id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
            active: false,
        }
    }
}

/// Direction for sequential next/previous navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the higher ordinal index.
    Next,
    /// Toward the lower ordinal index.
    Previous,
}

impl Direction {
    /// Resolve the neighbour index, or `None` past either boundary.
    pub fn neighbour(self, current: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Next => (current + 1 < len).then_some(current + 1),
            Direction::Previous => current.checked_sub(1),
        }
    }

    /// Map a wheel delta (winit convention, positive is up) to a direction.
    pub fn from_wheel(delta_y: f32) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Direction::Next)
        } else if delta_y > 0.0 {
            Some(Direction::Previous)
        } else {
            None
        }
    }
}
