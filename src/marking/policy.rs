use crate::location::LaneId;
use crate::marking::{LaneChange, MarkRecord, RoadMark};

/// Raw permission of one side of the record. An unpainted side
/// places no restriction.
#[inline]
fn raw(mark: Option<&RoadMark>) -> LaneChange {
    mark.map(|mark| LaneChange::from(mark.lane_change))
        .unwrap_or(LaneChange::Both)
}

/// Id of the lane sharing the inner (left) border of `lane_id`.
#[inline]
pub(crate) fn inner_lane(lane_id: LaneId) -> LaneId {
    if lane_id > 0 {
        lane_id - 1
    } else {
        lane_id + 1
    }
}

/// Derives the lane-change permission of lane `lane_id` from the raw
/// marks bordering it.
///
/// Marks are stored relative to the road's reference direction, so
/// each side is mirrored when the lane owning that mark travels
/// against it. Only the `Right` bit of the outer mark and the `Left`
/// bit of the inner mark are kept.
///
/// ```rust
/// use std::sync::Arc;
/// use lanegraph::{lane_change, LaneChange, MarkColor, MarkLaneChange, MarkRecord, MarkType, RoadMark};
///
/// let outer = RoadMark::new(MarkType::SolidBroken, MarkColor::White, MarkLaneChange::Increase);
/// let record = MarkRecord::new(Some(Arc::new(outer)), None);
///
/// assert_eq!(lane_change(&record, -1), LaneChange::Both);
/// assert_eq!(lane_change(&record, 1), LaneChange::Left);
/// ```
pub fn lane_change(record: &MarkRecord, lane_id: LaneId) -> LaneChange {
    let mut right = raw(record.right.as_deref());
    let mut left = raw(record.left.as_deref());

    if lane_id > 0 {
        right = right.mirrored();
    }

    if inner_lane(lane_id) > 0 {
        left = left.mirrored();
    }

    (right & LaneChange::Right) | (left & LaneChange::Left)
}
