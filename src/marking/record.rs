use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::marking::LaneChange;

/// Painted pattern of a road mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum MarkType {
    #[default]
    None,
    Solid,
    Broken,
    SolidSolid,
    SolidBroken,
    BrokenSolid,
    BrokenBroken,
    BottsDots,
    Grass,
    Curb,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum MarkColor {
    #[default]
    White,
    Yellow,
    Red,
    Blue,
    Green,
}

/// Lane-change rule as stored on a road mark, relative to the road's
/// reference direction rather than to any lane's direction of travel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum MarkLaneChange {
    /// Crossing toward the lane with the next higher magnitude id.
    Increase,
    /// Crossing toward the lane with the next lower magnitude id.
    Decrease,
    #[default]
    Both,
    None,
}

impl From<MarkLaneChange> for LaneChange {
    fn from(value: MarkLaneChange) -> Self {
        match value {
            MarkLaneChange::Increase => LaneChange::Right,
            MarkLaneChange::Decrease => LaneChange::Left,
            MarkLaneChange::Both => LaneChange::Both,
            MarkLaneChange::None => LaneChange::None,
        }
    }
}

/// Raw road mark owned by the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadMark {
    pub mark_type: MarkType,
    pub color: MarkColor,
    pub lane_change: MarkLaneChange,
    pub width: f64,
}

impl RoadMark {
    pub fn new(mark_type: MarkType, color: MarkColor, lane_change: MarkLaneChange) -> Self {
        Self {
            mark_type,
            color,
            lane_change,
            width: 0.15,
        }
    }

    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    pub fn solid(color: MarkColor) -> Self {
        Self::new(MarkType::Solid, color, MarkLaneChange::None)
    }

    pub fn broken(color: MarkColor) -> Self {
        Self::new(MarkType::Broken, color, MarkLaneChange::Both)
    }
}

/// The pair of marks bordering a lane at some location: the outer
/// (`right`) mark of the lane itself and the mark of its inner
/// neighbour (`left`). Either side may be unpainted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkRecord {
    pub right: Option<Arc<RoadMark>>,
    pub left: Option<Arc<RoadMark>>,
}

impl MarkRecord {
    pub fn new(right: Option<Arc<RoadMark>>, left: Option<Arc<RoadMark>>) -> Self {
        Self { right, left }
    }
}

/// Lane marking as handed out to callers of a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneMarking {
    pub mark_type: MarkType,
    pub color: MarkColor,
    pub lane_change: LaneChange,
    pub width: f64,
}

impl From<&RoadMark> for LaneMarking {
    fn from(mark: &RoadMark) -> Self {
        Self {
            mark_type: mark.mark_type,
            color: mark.color,
            lane_change: LaneChange::from(mark.lane_change),
            width: mark.width,
        }
    }
}
