#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub mod geometry;
#[doc(hidden)]
pub mod location;
pub mod marking;
pub mod network;
pub mod waypoint;

#[cfg(feature = "tracing")]
pub mod util;

#[doc(inline)]
pub use geometry::{Location, Rotation, Transform};
#[doc(inline)]
pub use location::{JunctionId, LaneId, LaneKey, LaneType, RoadId, WaypointLocation};
#[doc(inline)]
pub use marking::{
    lane_change, LaneChange, LaneMarking, MarkColor, MarkLaneChange, MarkRecord, MarkType,
    RoadMark,
};
#[doc(inline)]
pub use network::{LaneNetwork, LaneNetworkBuilder, NetworkError, RoadNetwork, RoadSpec};
#[doc(inline)]
pub use waypoint::{LaneWalker, WalkDirection, Waypoint};
