use std::iter::FusedIterator;
use std::sync::Arc;

use log::trace;

use crate::network::RoadNetwork;
use crate::waypoint::Waypoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WalkDirection {
    Forward,
    Backward,
}

/// Walks the lane of an origin waypoint in fixed steps.
///
/// Each round takes one step from the waypoint yielded last (the origin
/// for the first round) and yields, in network order, every candidate
/// on the origin's road and lane. The walk ends after the first round
/// in which no candidate stays on that lane.
///
/// When a round yields several candidates, only the last one is
/// stepped from; the others are yielded but not explored further.
///
/// Steps are not refined near the end of the lane, so a step longer
/// than what is left of the lane simply ends the walk.
pub struct LaneWalker<'a, N>
where
    N: RoadNetwork + ?Sized,
{
    origin: &'a Waypoint<N>,
    distance: f64,
    direction: WalkDirection,
    round: std::vec::IntoIter<Arc<Waypoint<N>>>,
    last: Option<Arc<Waypoint<N>>>,
    rounds: usize,
    exhausted: bool,
}

impl<'a, N> LaneWalker<'a, N>
where
    N: RoadNetwork + ?Sized,
{
    pub fn new(origin: &'a Waypoint<N>, distance: f64, direction: WalkDirection) -> Self {
        Self {
            origin,
            distance,
            direction,
            round: Vec::new().into_iter(),
            last: None,
            rounds: 0,
            exhausted: false,
        }
    }

    pub fn direction(&self) -> WalkDirection {
        self.direction
    }

    /// Number of rounds expanded so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    fn step(&self, from: &Waypoint<N>) -> Vec<Arc<Waypoint<N>>> {
        match self.direction {
            WalkDirection::Forward => from.next(self.distance),
            WalkDirection::Backward => from.previous(self.distance),
        }
    }

    fn expand(&mut self) -> bool {
        let frontier = match &self.last {
            Some(last) => self.step(last),
            None => self.step(self.origin),
        };

        let candidates = frontier.len();
        let matched = frontier
            .into_iter()
            .filter(|candidate| candidate.is_same_lane(self.origin))
            .collect::<Vec<_>>();

        self.rounds += 1;
        trace!(
            "Round {} on {}: {} of {} candidates stay on lane",
            self.rounds,
            self.origin.location().lane_key(),
            matched.len(),
            candidates
        );

        if matched.is_empty() {
            return false;
        }

        self.round = matched.into_iter();
        true
    }
}

impl<N> Iterator for LaneWalker<'_, N>
where
    N: RoadNetwork + ?Sized,
{
    type Item = Arc<Waypoint<N>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(waypoint) = self.round.next() {
                self.last = Some(Arc::clone(&waypoint));
                return Some(waypoint);
            }

            if self.exhausted {
                return None;
            }

            if !self.expand() {
                self.exhausted = true;
                return None;
            }
        }
    }
}

impl<N> FusedIterator for LaneWalker<'_, N> where N: RoadNetwork + ?Sized {}
