#[doc(hidden)]
pub mod change;
#[doc(hidden)]
pub mod policy;
#[doc(hidden)]
pub mod record;

#[doc(inline)]
pub use change::LaneChange;
#[doc(inline)]
pub use policy::lane_change;
#[doc(inline)]
pub use record::{LaneMarking, MarkColor, MarkLaneChange, MarkRecord, MarkType, RoadMark};
