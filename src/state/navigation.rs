//! Search navigation requests.
//!
//! The renderer reacts when the direction value changes, so repeating the
//! same direction has to produce a different value. The increment does that.

/// Direction a user asked to move through search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A navigation request as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Next { increment: u32 },
    Previous { increment: u32 },
}

impl SearchDirection {
    pub fn direction(&self) -> Direction {
        match self {
            SearchDirection::Next { .. } => Direction::Next,
            SearchDirection::Previous { .. } => Direction::Previous,
        }
    }

    /// Request that follows `current` when the user asks for `direction`.
    ///
    /// Same direction bumps the counter, anything else starts over at 0.
    pub fn advance(current: Option<SearchDirection>, direction: Direction) -> SearchDirection {
        match (direction, current) {
            (Direction::Next, Some(SearchDirection::Next { increment })) => SearchDirection::Next {
                increment: increment.wrapping_add(1),
            },
            (Direction::Next, Some(SearchDirection::Previous { .. }) | None) => {
                SearchDirection::Next { increment: 0 }
            }
            (Direction::Previous, Some(SearchDirection::Previous { increment })) => {
                SearchDirection::Previous {
                    increment: increment.wrapping_add(1),
                }
            }
            (Direction::Previous, Some(SearchDirection::Next { .. }) | None) => {
                SearchDirection::Previous { increment: 0 }
            }
        }
    }
}
