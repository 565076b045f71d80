#[doc(hidden)]
pub mod entity;
#[doc(hidden)]
pub mod walker;

#[doc(inline)]
pub use entity::Waypoint;
#[doc(inline)]
pub use walker::{LaneWalker, WalkDirection};
