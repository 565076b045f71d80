use crate::geometry::Transform;
use crate::location::{JunctionId, LaneType, RoadId, WaypointLocation};
use crate::marking::MarkRecord;

/// Read-only view of a road network, as consumed by [`Waypoint`](crate::Waypoint).
///
/// Implementations own the lane graph and are shared between every
/// waypoint derived from them, so they must tolerate concurrent reads.
/// Locations passed in are those the network itself handed out; an
/// implementation may answer arbitrarily for any other location.
pub trait RoadNetwork: Send + Sync {
    /// Pose of the lane centre at `location`.
    fn compute_transform(&self, location: &WaypointLocation) -> Transform;

    /// Outer and inner marks bordering the lane at `location`.
    fn mark_record(&self, location: &WaypointLocation) -> MarkRecord;

    fn junction_id(&self, road_id: RoadId) -> JunctionId;

    fn is_junction(&self, road_id: RoadId) -> bool;

    fn lane_width(&self, location: &WaypointLocation) -> f64;

    fn lane_type(&self, location: &WaypointLocation) -> LaneType;

    /// Every location reached by travelling `distance` along the lane
    /// graph from `location`. Empty at a dead end, more than one entry
    /// past a fork.
    fn next(&self, location: &WaypointLocation, distance: f64) -> Vec<WaypointLocation>;

    /// As [`RoadNetwork::next`], travelling against the direction of the lane.
    fn previous(&self, location: &WaypointLocation, distance: f64) -> Vec<WaypointLocation>;

    /// Adjacent lane on the right-hand side of the direction of travel.
    fn right(&self, location: &WaypointLocation) -> Option<WaypointLocation>;

    /// Adjacent lane on the left-hand side of the direction of travel.
    fn left(&self, location: &WaypointLocation) -> Option<WaypointLocation>;
}
