//! Value objects - immutable types that represent domain concepts

mod point_table;
mod reaction_direction;

pub use point_table::PointTable;
pub use reaction_direction::ReactionDirection;
