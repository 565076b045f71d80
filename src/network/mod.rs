mod definition;
#[doc(hidden)]
pub mod error;
#[cfg(test)]
pub(crate) mod fixture;
#[doc(hidden)]
pub mod graph;
mod implementation;

pub use definition::RoadNetwork;
#[doc(inline)]
pub use error::NetworkError;
#[doc(inline)]
pub use graph::{
    Lane, LaneGraph, LaneNetwork, LaneNetworkBuilder, RoadSpec, DEFAULT_LANE_WIDTH, MAX_LANE_SAMPLES,
};
