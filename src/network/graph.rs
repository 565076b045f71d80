use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Instant;

use geo::{Distance, Euclidean, LineString, Point};
use itertools::Itertools;
use log::{debug, info};
use petgraph::prelude::DiGraphMap;
use rustc_hash::FxHashMap;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::location::{JunctionId, LaneId, LaneKey, LaneType, RoadId, WaypointLocation};
use crate::marking::RoadMark;
use crate::network::error::NetworkError;
use crate::waypoint::Waypoint;

/// Upper bound on the samples taken along a single lane by
/// [`LaneNetwork::generate_waypoints`].
pub const MAX_LANE_SAMPLES: usize = 1 << 24;

pub const DEFAULT_LANE_WIDTH: f64 = 3.5;

/// Lane connectivity in the direction of travel. An edge `a -> b`
/// leads from the exit of lane `a` into the entry of lane `b`.
pub type LaneGraph = DiGraphMap<LaneKey, ()>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lane {
    pub id: LaneId,
    pub lane_type: LaneType,
    pub width: f64,
}

/// Declaration of a road, consumed by [`LaneNetworkBuilder::road`].
#[derive(Debug, Clone)]
pub struct RoadSpec {
    id: RoadId,
    reference: LineString,
    lanes: BTreeMap<LaneId, Lane>,
    marks: BTreeMap<LaneId, RoadMark>,
    junction: JunctionId,
    elevation: f64,
}

impl RoadSpec {
    /// A road following the polyline `reference`, with `s = 0` at its
    /// first point.
    pub fn new(id: RoadId, reference: LineString) -> Self {
        Self {
            id,
            reference,
            lanes: BTreeMap::new(),
            marks: BTreeMap::new(),
            junction: JunctionId::NONE,
            elevation: 0.0,
        }
    }

    /// A straight road of `length` metres starting at the origin and
    /// heading along +x.
    pub fn straight(id: RoadId, length: f64) -> Self {
        Self::new(id, LineString::from(vec![(0.0, 0.0), (length, 0.0)]))
    }

    pub fn lane(mut self, id: LaneId, lane_type: LaneType, width: f64) -> Self {
        self.lanes.insert(
            id,
            Lane {
                id,
                lane_type,
                width,
            },
        );
        self
    }

    pub fn driving_lane(self, id: LaneId) -> Self {
        self.lane(id, LaneType::Driving, DEFAULT_LANE_WIDTH)
    }

    /// Paints `mark` on the outer border of `lane_id`. Lane `0` holds
    /// the centre marking.
    pub fn mark(mut self, lane_id: LaneId, mark: RoadMark) -> Self {
        self.marks.insert(lane_id, mark);
        self
    }

    pub fn junction(mut self, junction: JunctionId) -> Self {
        self.junction = junction;
        self
    }

    pub fn elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }
}

pub(crate) struct Road {
    pub(crate) id: RoadId,
    pub(crate) reference: LineString,
    pub(crate) length: f64,
    pub(crate) lanes: BTreeMap<LaneId, Lane>,
    pub(crate) marks: FxHashMap<LaneId, Arc<RoadMark>>,
    pub(crate) junction: JunctionId,
    pub(crate) elevation: f64,
}

impl TryFrom<RoadSpec> for Road {
    type Error = NetworkError;

    fn try_from(spec: RoadSpec) -> Result<Self, Self::Error> {
        let length: f64 = spec
            .reference
            .lines()
            .map(|line| Euclidean.distance(line.start_point(), line.end_point()))
            .sum();

        if !(length.is_finite() && length > 0.0) {
            return Err(NetworkError::DegenerateRoad(spec.id));
        }

        if spec.lanes.contains_key(&0) {
            return Err(NetworkError::ReservedLane(spec.id));
        }

        if let Some(lane) = spec.lanes.values().find(|lane| lane.width.is_nan() || lane.width <= 0.0) {
            return Err(NetworkError::InvalidLaneWidth {
                lane: LaneKey::new(spec.id, lane.id),
                width: lane.width,
            });
        }

        Ok(Road {
            id: spec.id,
            reference: spec.reference,
            length,
            lanes: spec.lanes,
            marks: spec
                .marks
                .into_iter()
                .map(|(lane, mark)| (lane, Arc::new(mark)))
                .collect(),
            junction: spec.junction,
            elevation: spec.elevation,
        })
    }
}

impl Road {
    #[inline]
    pub(crate) fn lane(&self, lane_id: LaneId) -> Option<&Lane> {
        self.lanes.get(&lane_id)
    }

    /// Point on the reference line at offset `s`, with the heading of
    /// the segment holding it in radians.
    pub(crate) fn reference_pose(&self, s: f64) -> (Point, f64) {
        let s = s.clamp(0.0, self.length);
        let mut travelled = 0.0;
        let mut last = (Point::new(0.0, 0.0), 0.0);

        for line in self.reference.lines() {
            let length = Euclidean.distance(line.start_point(), line.end_point());
            if length <= 0.0 {
                continue;
            }

            let heading = line.dy().atan2(line.dx());
            if s <= travelled + length {
                let fraction = (s - travelled) / length;
                let point = Point::new(
                    line.start.x + fraction * line.dx(),
                    line.start.y + fraction * line.dy(),
                );
                return (point, heading);
            }

            travelled += length;
            last = (line.end_point(), heading);
        }

        last
    }

    /// Signed distance from the reference line to the centre of
    /// `lane_id`, positive to the left of the reference direction.
    pub(crate) fn lateral_offset(&self, lane_id: LaneId) -> f64 {
        let Some(lane) = self.lane(lane_id) else {
            return 0.0;
        };

        let inner: f64 = self
            .lanes
            .values()
            .filter(|other| other.id.signum() == lane_id.signum())
            .filter(|other| other.id.abs() < lane_id.abs())
            .map(|other| other.width)
            .sum();

        let side = if lane_id < 0 { -1.0 } else { 1.0 };
        side * (inner + lane.width / 2.0)
    }
}

/// In-memory road network built from road declarations and explicit
/// lane connections.
///
/// Lanes with a negative id travel along the reference line and lie to
/// its right; lanes with a positive id travel against it and lie to
/// its left.
///
/// ```rust
/// use std::sync::Arc;
/// use lanegraph::{LaneKey, LaneNetwork, RoadSpec};
///
/// let network = LaneNetwork::builder()
///     .road(RoadSpec::straight(1, 40.0).driving_lane(-1))
///     .road(RoadSpec::straight(2, 20.0).driving_lane(-1))
///     .connect(LaneKey::new(1, -1), LaneKey::new(2, -1))
///     .build()
///     .map(Arc::new)
///     .expect("valid network");
///
/// let waypoint = network.waypoint(1, -1, 35.0).expect("lane exists");
/// let next = waypoint.next(10.0);
///
/// assert_eq!(next.len(), 1);
/// assert_eq!(next[0].road_id(), 2);
/// assert_eq!(next[0].s(), 5.0);
/// ```
pub struct LaneNetwork {
    pub(crate) roads: FxHashMap<RoadId, Road>,
    pub(crate) graph: LaneGraph,
}

impl Debug for LaneNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LaneNetwork with Roads: {}, Lanes: {}",
            self.roads.len(),
            self.graph.node_count()
        )
    }
}

impl LaneNetwork {
    pub fn builder() -> LaneNetworkBuilder {
        LaneNetworkBuilder::default()
    }

    pub fn graph(&self) -> &LaneGraph {
        &self.graph
    }

    pub fn size(&self) -> usize {
        self.roads.len()
    }

    #[inline]
    pub fn road_length(&self, road_id: RoadId) -> Option<f64> {
        self.roads.get(&road_id).map(|road| road.length)
    }

    #[inline]
    pub(crate) fn road(&self, road_id: RoadId) -> Option<&Road> {
        self.roads.get(&road_id)
    }

    /// Creates a waypoint on this network, rejecting locations that do
    /// not name an existing lane within the bounds of its road.
    pub fn waypoint(
        self: &Arc<Self>,
        road_id: RoadId,
        lane_id: LaneId,
        s: f64,
    ) -> Result<Waypoint<LaneNetwork>, NetworkError> {
        let road = self
            .road(road_id)
            .ok_or(NetworkError::UnknownRoad(road_id))?;

        if road.lane(lane_id).is_none() {
            return Err(NetworkError::UnknownLane(LaneKey::new(road_id, lane_id)));
        }

        if !(0.0..=road.length).contains(&s) {
            return Err(NetworkError::OffsetOutOfRange {
                road_id,
                s,
                length: road.length,
            });
        }

        Ok(Waypoint::new(
            Arc::clone(self),
            WaypointLocation::new(road_id, lane_id, s),
        ))
    }

    /// Samples every lane of the network each `distance` metres, ordered
    /// by road then lane id. Each lane is sampled from the point where
    /// travel enters it: `s = 0` for lanes with a negative id and the end
    /// of the road for lanes with a positive id.
    ///
    /// Returns nothing for a spacing that is not positive, or one so fine
    /// that a lane would need more than [`MAX_LANE_SAMPLES`] samples.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn generate_waypoints(self: &Arc<Self>, distance: f64) -> Vec<Arc<Waypoint<LaneNetwork>>> {
        if !(distance.is_finite() && distance > 0.0) {
            debug!("Refusing to sample network at a spacing of {distance}");
            return Vec::new();
        }

        let longest = self
            .roads
            .values()
            .map(|road| road.length)
            .fold(0.0, f64::max);

        if (longest / distance).ceil() > MAX_LANE_SAMPLES as f64 {
            debug!("Spacing of {distance} is too fine for a road of length {longest}");
            return Vec::new();
        }

        self.roads
            .values()
            .sorted_by_key(|road| road.id)
            .flat_map(|road| {
                let samples = (road.length / distance).ceil() as usize;
                road.lanes.keys().flat_map(move |lane_id| {
                    let forward = *lane_id < 0;
                    (0..samples).map(move |step| {
                        let travelled = step as f64 * distance;
                        let s = if forward {
                            travelled
                        } else {
                            road.length - travelled
                        };
                        WaypointLocation::new(road.id, *lane_id, s)
                    })
                })
            })
            .map(|location| Arc::new(Waypoint::new(Arc::clone(self), location)))
            .collect()
    }
}

/// Collects roads and connections, validating them on [`build`](LaneNetworkBuilder::build).
#[derive(Debug, Default)]
pub struct LaneNetworkBuilder {
    roads: Vec<RoadSpec>,
    connections: Vec<(LaneKey, LaneKey)>,
}

impl LaneNetworkBuilder {
    pub fn road(mut self, road: RoadSpec) -> Self {
        self.roads.push(road);
        self
    }

    /// Connects the exit of `from` to the entry of `to`. Successors are
    /// enumerated in the order their connections were declared.
    pub fn connect(mut self, from: LaneKey, to: LaneKey) -> Self {
        self.connections.push((from, to));
        self
    }

    pub fn build(self) -> Result<LaneNetwork, NetworkError> {
        let start_time = Instant::now();

        let mut roads: FxHashMap<RoadId, Road> = FxHashMap::default();
        let mut graph = LaneGraph::new();

        for spec in self.roads {
            if roads.contains_key(&spec.id) {
                return Err(NetworkError::DuplicateRoad(spec.id));
            }

            let road = Road::try_from(spec)?;
            for lane_id in road.lanes.keys() {
                graph.add_node(LaneKey::new(road.id, *lane_id));
            }

            roads.insert(road.id, road);
        }

        for (from, to) in self.connections {
            if let Some(missing) = [from, to].into_iter().find(|key| !graph.contains_node(*key)) {
                return Err(NetworkError::UnknownLane(missing));
            }

            graph.add_edge(from, to, ());
        }

        info!(
            "Built network of {} roads, {} lanes, {} connections",
            roads.len(),
            graph.node_count(),
            graph.edge_count()
        );
        debug!("Network build took: {:?}", start_time.elapsed());

        Ok(LaneNetwork { roads, graph })
    }
}
