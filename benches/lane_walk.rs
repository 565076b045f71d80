use std::sync::Arc;

use criterion::criterion_main;
use geo::line_string;
use lanegraph::{LaneKey, LaneNetwork, MarkColor, RoadMark, RoadSpec, WalkDirection};

struct WalkScenario {
    name: &'static str,
    road_length: f64,
    step: f64,
}

const WALK_CASES: [WalkScenario; 3] = [
    WalkScenario {
        name: "FINE_STEP",
        road_length: 500.0,
        step: 0.5,
    },
    WalkScenario {
        name: "COARSE_STEP",
        road_length: 500.0,
        step: 10.0,
    },
    WalkScenario {
        name: "LONG_ROAD",
        road_length: 5000.0,
        step: 2.0,
    },
];

/// A chain of `roads` two-lane roads laid end to end along +x.
fn chain(roads: u32, road_length: f64) -> Arc<LaneNetwork> {
    let mut builder = LaneNetwork::builder();

    for id in 0..roads {
        let start = id as f64 * road_length;
        let road = RoadSpec::new(
            id,
            line_string![(x: start, y: 0.0), (x: start + road_length, y: 0.0)],
        )
        .driving_lane(-1)
        .driving_lane(-2)
        .mark(0, RoadMark::solid(MarkColor::Yellow))
        .mark(-1, RoadMark::broken(MarkColor::White))
        .mark(-2, RoadMark::solid(MarkColor::White));

        builder = builder.road(road);

        if id > 0 {
            builder = builder
                .connect(LaneKey::new(id - 1, -1), LaneKey::new(id, -1))
                .connect(LaneKey::new(id - 1, -2), LaneKey::new(id, -2));
        }
    }

    Arc::new(builder.build().expect("Network must build"))
}

fn initialize_logging() {
    dotenv::dotenv().ok();

    #[cfg(feature = "tracing")]
    lanegraph::util::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    let _ = env_logger::try_init();
}

fn walk_benchmark(c: &mut criterion::Criterion) {
    initialize_logging();

    let mut group = c.benchmark_group("walk");
    group.significance_level(0.1).sample_size(30);

    WALK_CASES.into_iter().for_each(|sc| {
        let network = chain(4, sc.road_length);
        let origin = network
            .waypoint(1, -1, 0.0)
            .expect("Origin must lie on the network");

        let expected = (sc.road_length / sc.step).ceil() as usize - 1;

        group.bench_function(format!("until_lane_end: {}", sc.name), |b| {
            b.iter(|| {
                let walked = origin.next_until_lane_end(sc.step);
                assert_eq!(walked.len(), expected);
            })
        });

        group.bench_function(format!("lane_walker: {}", sc.name), |b| {
            b.iter(|| {
                let walked = origin.walk(sc.step, WalkDirection::Forward).count();
                assert_eq!(walked, expected);
            })
        });
    });

    group.finish();
}

fn sampling_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("sample");
    group.significance_level(0.1).sample_size(30);

    let network = chain(64, 250.0);

    group.bench_function("generate_waypoints", |b| {
        b.iter(|| {
            let samples = network.generate_waypoints(5.0);
            assert_eq!(samples.len(), 64 * 2 * 50);
        })
    });

    group.bench_function("lane_change", |b| {
        let samples = network.generate_waypoints(5.0);
        b.iter(|| {
            samples
                .iter()
                .filter(|waypoint| waypoint.lane_change().allows_left())
                .count()
        })
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, walk_benchmark, sampling_benchmark);
criterion_main!(targeted_benches);
