use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use tracing::{debug, trace};

use crate::location::{Distance, LocationId};
use crate::network::Network;

/// A complete route over a [`Network`]: every location visited exactly once, in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Itinerary {
    stops: Vec<LocationId>,
    total: Distance,
}

impl Itinerary {
    /// The locations on this itinerary, in visiting order.
    pub fn stops(&self) -> &[LocationId] {
        &self.stops
    }

    /// The sum of the segment distances along this itinerary.
    pub fn total(&self) -> Distance {
        self.total
    }
}

/// The extremal complete routes through a network, found by [`Network::extremes`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteExtremes {
    /// A complete route of minimal total distance.
    pub shortest: Itinerary,
    /// A complete route of maximal total distance.
    pub longest: Itinerary,
}

/// Exhaustive backtracking search for the extremal complete routes over a distance graph.
/// Use [`Self::solve`] to run the search to completion.
pub struct RouteSolver<'a> {
    graph: &'a UnGraphMap<LocationId, Distance>,
    locations: Vec<LocationId>,
}

impl<'a> From<&'a Network> for RouteSolver<'a> {
    fn from(network: &'a Network) -> Self {
        Self {
            graph: &network.graph,
            locations: network.graph.nodes().collect_vec(),
        }
    }
}

impl RouteSolver<'_> {
    /// Search every route order and return the shortest and longest complete routes, or [`None`] if no
    /// route visits every location exactly once (the network is empty or cannot be threaded into one path).
    ///
    /// Every location is tried as the route origin.
    /// Ties keep the first itinerary discovered, so results are deterministic for a given insertion order.
    pub fn solve(&self) -> Option<RouteExtremes> {
        if self.locations.is_empty() {
            return None;
        }

        let mut visited = vec![false; self.locations.len()];
        let mut route = Vec::with_capacity(self.locations.len());
        let mut best: Option<RouteExtremes> = None;

        for origin in self.locations.iter().copied() {
            trace!(origin, "searching routes from origin");

            visited[origin] = true;
            route.push(origin);
            self.descend(origin, 0, &mut visited, &mut route, &mut best);
            route.pop();
            visited[origin] = false;
        }

        debug!(locations = self.locations.len(), found = best.is_some(), "route search complete");

        best
    }

    fn descend(
        &self,
        at: LocationId,
        travelled: Distance,
        visited: &mut [bool],
        route: &mut Vec<LocationId>,
        best: &mut Option<RouteExtremes>,
    ) {
        if route.len() == self.locations.len() {
            // every location is on the route; this is the only base case
            Self::record(route, travelled, best);
            return;
        }

        for next in self.locations.iter().copied() {
            if visited[next] {
                continue;
            }

            // no recorded segment means not adjacent, never distance zero
            let leg = match self.graph.edge_weight(at, next) {
                Some(leg) => *leg,
                None => continue,
            };

            visited[next] = true;
            route.push(next);
            self.descend(next, travelled + leg, visited, route, best);
            route.pop();
            visited[next] = false;
        }
    }

    fn record(route: &[LocationId], travelled: Distance, best: &mut Option<RouteExtremes>) {
        match best {
            None => {
                let found = Itinerary { stops: route.to_vec(), total: travelled };
                *best = Some(RouteExtremes { shortest: found.clone(), longest: found });
            }
            Some(extremes) => {
                if travelled < extremes.shortest.total {
                    extremes.shortest = Itinerary { stops: route.to_vec(), total: travelled };
                }
                if travelled > extremes.longest.total {
                    extremes.longest = Itinerary { stops: route.to_vec(), total: travelled };
                }
            }
        }
    }
}
