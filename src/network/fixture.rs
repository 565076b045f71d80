use std::sync::Arc;

use geo::line_string;
use rustc_hash::FxHashMap;

use crate::geometry::Transform;
use crate::location::{JunctionId, LaneKey, LaneType, RoadId, WaypointLocation};
use crate::marking::{MarkColor, MarkRecord, RoadMark};
use crate::network::{LaneNetwork, RoadNetwork, RoadSpec};

/// Two-way road `1` of 40m with two lanes along the reference line and
/// one against it, leading into the 20m junction road `2`.
///
/// ```text
///          road 1 (0..40)         road 2 (40..60, junction 7)
///   lane  1  <-------------------  <----------  lane 1
///   ====== centre, solid yellow ======
///   lane -1  ------------------->  ---------->  lane -1
///   lane -2  -------------------> (dead end)
/// ```
pub(crate) fn corridor() -> Arc<LaneNetwork> {
    let network = LaneNetwork::builder()
        .road(
            RoadSpec::straight(1, 40.0)
                .lane(-2, LaneType::Driving, 3.0)
                .driving_lane(-1)
                .driving_lane(1)
                .lane(-3, LaneType::Sidewalk, 2.0)
                .mark(0, RoadMark::solid(MarkColor::Yellow))
                .mark(-1, RoadMark::broken(MarkColor::White))
                .mark(-2, RoadMark::solid(MarkColor::White))
                .mark(1, RoadMark::solid(MarkColor::White)),
        )
        .road(
            RoadSpec::new(2, line_string![(x: 40.0, y: 0.0), (x: 60.0, y: 0.0)])
                .driving_lane(-1)
                .driving_lane(1)
                .junction(JunctionId(7)),
        )
        .connect(LaneKey::new(1, -1), LaneKey::new(2, -1))
        .connect(LaneKey::new(2, 1), LaneKey::new(1, 1))
        .build()
        .expect("corridor fixture is valid");

    Arc::new(network)
}

/// Road `1` of 10m splitting into roads `2` and `3`, 50m each.
pub(crate) fn fork() -> Arc<LaneNetwork> {
    let network = LaneNetwork::builder()
        .road(RoadSpec::straight(1, 10.0).driving_lane(-1))
        .road(
            RoadSpec::new(2, line_string![(x: 10.0, y: 0.0), (x: 60.0, y: 0.0)]).driving_lane(-1),
        )
        .road(
            RoadSpec::new(3, line_string![(x: 10.0, y: 0.0), (x: 10.0, y: -50.0)])
                .driving_lane(-1),
        )
        .connect(LaneKey::new(1, -1), LaneKey::new(2, -1))
        .connect(LaneKey::new(1, -1), LaneKey::new(3, -1))
        .build()
        .expect("fork fixture is valid");

    Arc::new(network)
}

/// Single one-way road of `length` metres continuing into a 30m road.
pub(crate) fn handover(length: f64) -> Arc<LaneNetwork> {
    let network = LaneNetwork::builder()
        .road(RoadSpec::straight(1, length).driving_lane(-1))
        .road(
            RoadSpec::new(2, line_string![(x: length, y: 0.0), (x: length + 30.0, y: 0.0)])
                .driving_lane(-1),
        )
        .connect(LaneKey::new(1, -1), LaneKey::new(2, -1))
        .build()
        .expect("handover fixture is valid");

    Arc::new(network)
}

/// Network answering traversal queries from fixed tables, keyed by
/// location id. Anything not in a table is a dead end.
#[derive(Debug, Default)]
pub(crate) struct ScriptedNetwork {
    next: FxHashMap<u64, Vec<WaypointLocation>>,
    previous: FxHashMap<u64, Vec<WaypointLocation>>,
    marks: MarkRecord,
}

impl ScriptedNetwork {
    pub(crate) fn step_next(mut self, from: WaypointLocation, to: Vec<WaypointLocation>) -> Self {
        self.next.insert(from.id(), to);
        self
    }

    pub(crate) fn step_previous(mut self, from: WaypointLocation, to: Vec<WaypointLocation>) -> Self {
        self.previous.insert(from.id(), to);
        self
    }

    pub(crate) fn marks(mut self, marks: MarkRecord) -> Self {
        self.marks = marks;
        self
    }
}

impl RoadNetwork for ScriptedNetwork {
    fn compute_transform(&self, _: &WaypointLocation) -> Transform {
        Transform::default()
    }

    fn mark_record(&self, _: &WaypointLocation) -> MarkRecord {
        self.marks.clone()
    }

    fn junction_id(&self, _: RoadId) -> JunctionId {
        JunctionId::NONE
    }

    fn is_junction(&self, _: RoadId) -> bool {
        false
    }

    fn lane_width(&self, _: &WaypointLocation) -> f64 {
        crate::network::DEFAULT_LANE_WIDTH
    }

    fn lane_type(&self, _: &WaypointLocation) -> LaneType {
        LaneType::Driving
    }

    fn next(&self, location: &WaypointLocation, _: f64) -> Vec<WaypointLocation> {
        self.next.get(&location.id()).cloned().unwrap_or_default()
    }

    fn previous(&self, location: &WaypointLocation, _: f64) -> Vec<WaypointLocation> {
        self.previous
            .get(&location.id())
            .cloned()
            .unwrap_or_default()
    }

    fn right(&self, _: &WaypointLocation) -> Option<WaypointLocation> {
        None
    }

    fn left(&self, _: &WaypointLocation) -> Option<WaypointLocation> {
        None
    }
}
