use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::location::{Distance, LocationId};
use crate::solver::{Itinerary, RouteExtremes, RouteSolver};

/// A network of named locations with undirected distances between them.
///
/// [`Network`]s should be built using a [`NetworkBuilder`](crate::builder::NetworkBuilder), which interns each
/// name to a dense [`LocationId`] in order of first appearance.
pub struct Network {
    pub(crate) graph: UnGraphMap<LocationId, Distance>,
    pub(crate) location_names: Vec<String>,
}

impl Network {
    /// The number of distinct locations in this network.
    pub fn location_count(&self) -> usize {
        self.location_names.len()
    }

    /// All [`LocationId`]s in this network, in interning order.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.graph.nodes()
    }

    /// The name `location` was interned from, or `None` if no such location exists.
    pub fn name_of(&self, location: LocationId) -> Option<&str> {
        self.location_names.get(location).map(String::as_str)
    }

    /// The length of the direct segment between `a` and `b`, queried in either direction.
    ///
    /// Returns `None` if no segment was recorded; two locations without one are simply not adjacent.
    pub fn distance_between(&self, a: LocationId, b: LocationId) -> Option<Distance> {
        self.graph.edge_weight(a, b).copied()
    }

    /// Find the shortest and longest routes visiting every location in this network exactly once,
    /// deferring to a [`RouteSolver`](crate::solver::RouteSolver).
    ///
    /// Returns `None` if no such route exists, including for the empty network.
    pub fn extremes(&self) -> Option<RouteExtremes> {
        RouteSolver::from(self).solve()
    }

    /// Render `itinerary` using this network's location names, as in `London -> Dublin -> Belfast`.
    pub fn describe(&self, itinerary: &Itinerary) -> String {
        itinerary.stops().iter()
            .map(|stop| self.name_of(*stop).unwrap_or("?"))
            .join(" -> ")
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (from, to, distance) in self.graph.all_edges() {
            writeln!(f, "{} to {} = {}", self.name_of(from).unwrap_or("?"), self.name_of(to).unwrap_or("?"), distance)?;
        }

        Ok(())
    }
}
