use std::fmt::{Debug, Formatter};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::Level;

use crate::geometry::Transform;
use crate::location::{JunctionId, LaneId, LaneType, RoadId, WaypointLocation};
use crate::marking::{lane_change, LaneChange, LaneMarking, MarkRecord};
use crate::network::RoadNetwork;
use crate::waypoint::walker::{LaneWalker, WalkDirection};

/// A location on the lane graph of a [`RoadNetwork`].
///
/// The pose and the marks bordering the lane are resolved once, when
/// the waypoint is created, and never change afterwards. Waypoints are
/// handed out behind an [`Arc`] and share their network with every
/// waypoint derived from them.
pub struct Waypoint<N>
where
    N: RoadNetwork + ?Sized,
{
    network: Arc<N>,
    location: WaypointLocation,
    transform: Transform,
    mark_record: MarkRecord,
}

impl<N> Debug for Waypoint<N>
where
    N: RoadNetwork + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Waypoint")
            .field("location", &self.location)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl<N> Waypoint<N>
where
    N: RoadNetwork + ?Sized,
{
    /// Binds `location` to `network`. The location is trusted to exist
    /// on the network; no validation takes place.
    pub fn new(network: Arc<N>, location: WaypointLocation) -> Self {
        let transform = network.compute_transform(&location);
        let mark_record = network.mark_record(&location);

        Self {
            network,
            location,
            transform,
            mark_record,
        }
    }

    /// A new waypoint at `location` on the same network.
    fn sibling(&self, location: WaypointLocation) -> Arc<Self> {
        Arc::new(Waypoint::new(Arc::clone(&self.network), location))
    }

    fn wrap(&self, locations: Vec<WaypointLocation>) -> Vec<Arc<Self>> {
        locations
            .into_iter()
            .map(|location| self.sibling(location))
            .collect()
    }

    pub fn network(&self) -> &Arc<N> {
        &self.network
    }

    pub fn location(&self) -> &WaypointLocation {
        &self.location
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn id(&self) -> u64 {
        self.location.id()
    }

    #[inline]
    pub fn road_id(&self) -> RoadId {
        self.location.road_id
    }

    #[inline]
    pub fn lane_id(&self) -> LaneId {
        self.location.lane_id
    }

    #[inline]
    pub fn s(&self) -> f64 {
        self.location.s
    }

    /// Both waypoints lie on the same lane of the same road.
    #[inline]
    pub fn is_same_lane(&self, other: &Waypoint<N>) -> bool {
        self.lane_id() == other.lane_id() && self.road_id() == other.road_id()
    }

    pub fn junction_id(&self) -> JunctionId {
        self.network.junction_id(self.location.road_id)
    }

    pub fn is_junction(&self) -> bool {
        self.network.is_junction(self.location.road_id)
    }

    pub fn lane_width(&self) -> f64 {
        self.network.lane_width(&self.location)
    }

    pub fn lane_type(&self) -> LaneType {
        self.network.lane_type(&self.location)
    }

    /// Waypoints `distance` ahead along the lane graph, one per branch
    /// reached, in the order the network enumerates them.
    pub fn next(&self, distance: f64) -> Vec<Arc<Self>> {
        self.wrap(self.network.next(&self.location, distance))
    }

    /// Waypoints `distance` behind along the lane graph.
    pub fn previous(&self, distance: f64) -> Vec<Arc<Self>> {
        self.wrap(self.network.previous(&self.location, distance))
    }

    /// Lazily walks this waypoint's lane in `distance` steps. See
    /// [`LaneWalker`] for how forks are followed.
    pub fn walk(&self, distance: f64, direction: WalkDirection) -> LaneWalker<'_, N> {
        LaneWalker::new(self, distance, direction)
    }

    /// Every `distance` step ahead that stays on this lane, up to the
    /// point where the lane ends or hands over to another lane.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn next_until_lane_end(&self, distance: f64) -> Vec<Arc<Self>> {
        self.walk(distance, WalkDirection::Forward).collect()
    }

    /// As [`Waypoint::next_until_lane_end`], walking back to the lane start.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn previous_until_lane_start(&self, distance: f64) -> Vec<Arc<Self>> {
        self.walk(distance, WalkDirection::Backward).collect()
    }

    /// Adjacent lane to the right, `None` at the edge of the road.
    pub fn right(&self) -> Option<Arc<Self>> {
        self.network
            .right(&self.location)
            .map(|location| self.sibling(location))
    }

    /// Adjacent lane to the left, `None` when there is none.
    pub fn left(&self) -> Option<Arc<Self>> {
        self.network
            .left(&self.location)
            .map(|location| self.sibling(location))
    }

    pub fn right_lane_marking(&self) -> Option<LaneMarking> {
        self.mark_record
            .right
            .as_deref()
            .map(LaneMarking::from)
    }

    /// The inner marking of the lane.
    ///
    /// Only reported while the outer (right) marking is present as well;
    /// a lane without an outer marking reports no left marking either.
    pub fn left_lane_marking(&self) -> Option<LaneMarking> {
        self.mark_record.right.as_ref()?;
        self.mark_record.left.as_deref().map(LaneMarking::from)
    }

    /// Directions a lane change is permitted in at this waypoint, from
    /// the point of view of the lane's direction of travel.
    pub fn lane_change(&self) -> LaneChange {
        lane_change(&self.mark_record, self.location.lane_id)
    }
}
