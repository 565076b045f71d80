use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

pub type RoadId = u32;

/// Signed lane identifier. Negative lanes travel along the road's
/// reference direction, positive lanes travel against it. Lane `0`
/// is the reference line itself and never holds traffic.
pub type LaneId = i32;

/// Junction identifier of a road, [`JunctionId::NONE`] when the road
/// is not part of a junction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JunctionId(pub i32);

impl JunctionId {
    pub const NONE: JunctionId = JunctionId(-1);

    #[inline]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for JunctionId {
    fn default() -> Self {
        Self::NONE
    }
}

impl Display for JunctionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a single lane within the network.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct LaneKey {
    pub road_id: RoadId,
    pub lane_id: LaneId,
}

impl LaneKey {
    pub const fn new(road_id: RoadId, lane_id: LaneId) -> Self {
        Self { road_id, lane_id }
    }

    /// Lanes with a negative id travel toward increasing `s`.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.lane_id < 0
    }
}

impl Display for LaneKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "road {} lane {}", self.road_id, self.lane_id)
    }
}

/// A position on the lane graph: a road, one of its lanes, and the
/// longitudinal offset `s` along the road's reference line.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WaypointLocation {
    pub road_id: RoadId,
    pub lane_id: LaneId,
    pub s: f64,
}

impl WaypointLocation {
    pub const fn new(road_id: RoadId, lane_id: LaneId, s: f64) -> Self {
        Self {
            road_id,
            lane_id,
            s,
        }
    }

    #[inline]
    pub fn lane_key(&self) -> LaneKey {
        LaneKey::new(self.road_id, self.lane_id)
    }

    /// Same location moved to offset `s`.
    #[inline]
    pub fn with_s(&self, s: f64) -> Self {
        Self { s, ..*self }
    }

    /// Same location moved to another lane of the same road.
    #[inline]
    pub fn with_lane(&self, lane_id: LaneId) -> Self {
        Self { lane_id, ..*self }
    }

    /// Stable identifier of the location. Two locations share an id
    /// only when road, lane and the bit pattern of `s` all agree.
    pub fn id(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.road_id.hash(&mut hasher);
        self.lane_id.hash(&mut hasher);
        self.s.to_bits().hash(&mut hasher);
        hasher.finish()
    }
}

impl From<(RoadId, LaneId, f64)> for WaypointLocation {
    fn from((road_id, lane_id, s): (RoadId, LaneId, f64)) -> Self {
        Self::new(road_id, lane_id, s)
    }
}

/// Semantic classification of a lane.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum LaneType {
    #[default]
    Driving,
    Stop,
    Shoulder,
    Biking,
    Sidewalk,
    Border,
    Restricted,
    Parking,
    Bidirectional,
    Median,
    Entry,
    Exit,
    OffRamp,
    OnRamp,
    /// Not a lane, or no lane known at the queried location.
    None,
}

impl LaneType {
    /// Lanes a motor vehicle may travel along.
    pub fn is_drivable(&self) -> bool {
        matches!(
            self,
            Self::Driving
                | Self::Bidirectional
                | Self::Entry
                | Self::Exit
                | Self::OffRamp
                | Self::OnRamp
        )
    }
}
