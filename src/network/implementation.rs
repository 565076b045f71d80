use log::{debug, trace};
use petgraph::Direction;

use crate::geometry::{normalize_degrees, Location, Rotation, Transform};
use crate::location::{JunctionId, LaneId, LaneKey, LaneType, RoadId, WaypointLocation};
use crate::marking::policy::inner_lane;
use crate::marking::MarkRecord;
use crate::network::definition::RoadNetwork;
use crate::network::graph::LaneNetwork;

/// Whether moving in `direction` over `lane` increases `s`.
#[inline]
fn increasing(lane: LaneKey, direction: Direction) -> bool {
    lane.is_forward() == (direction == Direction::Outgoing)
}

impl LaneNetwork {
    /// Moves `distance` from `location`, following successors when
    /// `direction` is outgoing and predecessors when incoming. Any
    /// distance left at the end of the lane is carried into each
    /// connected lane from the point where travel enters it.
    ///
    /// Branches are explored depth first in connection order, so the
    /// result lists every location reached through the first connection
    /// before those reached through the next.
    fn advance(
        &self,
        location: &WaypointLocation,
        distance: f64,
        direction: Direction,
    ) -> Vec<WaypointLocation> {
        if !(distance.is_finite() && distance > 0.0) {
            debug!("Refusing to advance {} by {distance}", location.lane_key());
            return Vec::new();
        }

        let mut reached = Vec::new();
        let mut frontier = vec![(*location, distance)];

        while let Some((at, distance)) = frontier.pop() {
            let Some(road) = self.road(at.road_id) else {
                debug!("No road {} to advance along", at.road_id);
                continue;
            };

            let lane = at.lane_key();
            let along = increasing(lane, direction);
            let remaining = if along {
                road.length - at.s
            } else {
                at.s
            }
            .max(0.0);

            // Entry points carry a distance of zero and land here too,
            // since every road has a positive length.
            if distance < remaining {
                let s = if along { at.s + distance } else { at.s - distance };
                reached.push(at.with_s(s));
                continue;
            }

            let leftover = distance - remaining;
            let boundaries = self
                .graph
                .neighbors_directed(lane, direction)
                .filter_map(|connected| self.boundary(connected, direction))
                .collect::<Vec<_>>();

            if boundaries.is_empty() {
                trace!("{lane} ends with no connection ({direction:?})");
            }

            // Reversed so the first connection is popped first.
            frontier.extend(
                boundaries
                    .into_iter()
                    .rev()
                    .map(|boundary| (boundary, leftover)),
            );
        }

        reached
    }

    /// Location at which travel in `direction` enters `lane`.
    fn boundary(&self, lane: LaneKey, direction: Direction) -> Option<WaypointLocation> {
        let road = self.road(lane.road_id)?;
        let s = if increasing(lane, direction) {
            0.0
        } else {
            road.length
        };

        Some(WaypointLocation::new(lane.road_id, lane.lane_id, s))
    }

    fn lateral(&self, location: &WaypointLocation, lane_id: LaneId) -> Option<WaypointLocation> {
        self.road(location.road_id)?.lane(lane_id)?;
        Some(location.with_lane(lane_id))
    }
}

impl RoadNetwork for LaneNetwork {
    fn compute_transform(&self, location: &WaypointLocation) -> Transform {
        let Some(road) = self.road(location.road_id) else {
            return Transform::default();
        };

        let (point, heading) = road.reference_pose(location.s);
        let offset = road.lateral_offset(location.lane_id);

        let position = Location::new(
            point.x() - offset * heading.sin(),
            point.y() + offset * heading.cos(),
            road.elevation,
        );

        let mut yaw = heading.to_degrees();
        if location.lane_id > 0 {
            yaw += 180.0;
        }

        Transform::new(position, Rotation::new(0.0, normalize_degrees(yaw), 0.0))
    }

    fn mark_record(&self, location: &WaypointLocation) -> MarkRecord {
        self.road(location.road_id)
            .map(|road| {
                MarkRecord::new(
                    road.marks.get(&location.lane_id).cloned(),
                    road.marks.get(&inner_lane(location.lane_id)).cloned(),
                )
            })
            .unwrap_or_default()
    }

    fn junction_id(&self, road_id: RoadId) -> JunctionId {
        self.road(road_id)
            .map(|road| road.junction)
            .unwrap_or(JunctionId::NONE)
    }

    fn is_junction(&self, road_id: RoadId) -> bool {
        !self.junction_id(road_id).is_none()
    }

    fn lane_width(&self, location: &WaypointLocation) -> f64 {
        self.road(location.road_id)
            .and_then(|road| road.lane(location.lane_id))
            .map(|lane| lane.width)
            .unwrap_or(0.0)
    }

    fn lane_type(&self, location: &WaypointLocation) -> LaneType {
        self.road(location.road_id)
            .and_then(|road| road.lane(location.lane_id))
            .map(|lane| lane.lane_type)
            .unwrap_or(LaneType::None)
    }

    fn next(&self, location: &WaypointLocation, distance: f64) -> Vec<WaypointLocation> {
        self.advance(location, distance, Direction::Outgoing)
    }

    fn previous(&self, location: &WaypointLocation, distance: f64) -> Vec<WaypointLocation> {
        self.advance(location, distance, Direction::Incoming)
    }

    fn right(&self, location: &WaypointLocation) -> Option<WaypointLocation> {
        let lane_id = if location.lane_id < 0 {
            location.lane_id - 1
        } else {
            location.lane_id + 1
        };

        self.lateral(location, lane_id)
    }

    fn left(&self, location: &WaypointLocation) -> Option<WaypointLocation> {
        // The innermost lane's left neighbour lies across the reference line.
        let lane_id = match inner_lane(location.lane_id) {
            0 => -location.lane_id,
            inner => inner,
        };

        self.lateral(location, lane_id)
    }
}
