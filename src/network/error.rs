use thiserror::Error;

use crate::location::{LaneKey, RoadId};

#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    #[error("road {0} was declared more than once")]
    DuplicateRoad(RoadId),

    #[error("road {0} needs a reference line of positive length")]
    DegenerateRoad(RoadId),

    #[error("road {0} declares lane 0, which is reserved for the reference line")]
    ReservedLane(RoadId),

    #[error("{lane} has a non-positive width of {width}")]
    InvalidLaneWidth { lane: LaneKey, width: f64 },

    #[error("no road {0} in the network")]
    UnknownRoad(RoadId),

    #[error("no {0} in the network")]
    UnknownLane(LaneKey),

    #[error("offset {s} lies outside road {road_id} of length {length}")]
    OffsetOutOfRange { road_id: RoadId, s: f64, length: f64 },
}
