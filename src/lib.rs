#![warn(missing_docs)]

//! # `circuitous`
//!
//! An exhaustive solver for extremal Hamiltonian paths over small networks of named locations:
//! given a list of undirected distances, find both the shortest and the longest route visiting every location exactly once.
//! Begin by feeding distance records into a [`NetworkBuilder`], convert it to a [`Network`], then call [`extremes()`](Network::extremes) to obtain both routes at once.
//!
//! Input typically arrives as lines in the form `London to Dublin = 464`; see [`DistanceRecord`] for the parser.
//!
//! # Internals
//! The crate is driven by plain depth-first backtracking.
//! Every location is tried as a route origin; from each origin the search extends the partial route one unvisited neighbor at a time and undoes each extension on return.
//! The only pruning is edge existence: a pair of locations with no recorded distance is simply not adjacent, so the branch dies there rather than contributing a zero-length leg.
//! Both extremes are tightened during the same traversal, so the network is walked once, not twice.
//!
//! Worst case this evaluates O(V!) partial routes on a complete network.
//! A Held-Karp style table over all 2^V visited subsets would bring that down substantially, but at the intended scale (a dozen or so locations) the exhaustive search finishes quickly and keeps the bookkeeping trivial.

pub use builder::NetworkBuilder;
pub use location::{Distance, LocationId};
pub use network::Network;
pub use parse::DistanceRecord;
pub use solver::{Itinerary, RouteExtremes};

pub(crate) mod network;
mod tests;
pub(crate) mod location;
pub mod builder;
pub mod parse;
pub(crate) mod solver;
