//! Colour classes shared by bar and graph renderers

use crate::algorithm::snapshot::Role;

/// Visual category of a bar or node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// Untouched element
    #[default]
    Default,
    /// Being compared
    Comparing,
    /// Being swapped or shifted
    Swapping,
    /// Quicksort pivot
    Pivot,
    /// Selection sort minimum candidate
    Minimum,
    /// Being written to an output slot
    Placing,
    /// Search probe
    Probe,
    /// Search interval boundary
    Bound,
    /// Search hit
    Found,
    /// Outside the remaining search interval
    Eliminated,
    /// In final position
    Sorted,
    /// Visited graph node
    Visited,
    /// Graph node being visited
    Current,
    /// Graph node waiting on the DFS stack
    Stacked,
    /// Graph node not reached by the finished traversal
    Unreached,
    /// Output slot not yet filled
    Empty,
}

impl ColorClass {
    /// Colour class for a highlight role
    pub const fn from_role(role: Role) -> Self {
        match role {
            Role::Comparing => Self::Comparing,
            Role::Swapping => Self::Swapping,
            Role::Pivot => Self::Pivot,
            Role::Minimum => Self::Minimum,
            Role::Placing => Self::Placing,
            Role::Probe => Self::Probe,
            Role::Bound => Self::Bound,
            Role::Found => Self::Found,
            Role::Sorted => Self::Sorted,
            Role::Visited => Self::Visited,
            Role::Current => Self::Current,
        }
    }

    /// RGBA colour used when rasterising
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Default => [96, 125, 139, 255],
            Self::Comparing => [255, 193, 7, 255],
            Self::Swapping => [244, 67, 54, 255],
            Self::Pivot => [156, 39, 176, 255],
            Self::Minimum => [0, 188, 212, 255],
            Self::Placing => [33, 150, 243, 255],
            Self::Probe => [255, 152, 0, 255],
            Self::Bound => [63, 81, 181, 255],
            Self::Found => [76, 175, 80, 255],
            Self::Eliminated => [207, 216, 220, 255],
            Self::Sorted => [139, 195, 74, 255],
            Self::Visited => [0, 150, 136, 255],
            Self::Current => [233, 30, 99, 255],
            Self::Stacked => [255, 235, 59, 255],
            Self::Unreached => [158, 158, 158, 255],
            Self::Empty => [236, 239, 241, 255],
        }
    }
}
