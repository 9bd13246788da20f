//! The builder used to assemble a [`Network`] from distance records.

use std::collections::{HashMap, HashSet};

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::location::{Distance, LocationId};
use crate::network::Network;
use crate::parse::DistanceRecord;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The same unordered pair of locations was given a distance more than once, in either orientation.
    DuplicateDistance,
}

/// Accumulates distance records, interning location names as they appear, and produces a [`Network`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Default)]
pub struct NetworkBuilder {
    location_names: Vec<String>,
    ids_by_name: HashMap<String, LocationId>,
    segments: Vec<(LocationId, LocationId, Distance)>,
    seen_pairs: HashSet<UnorderedPair<LocationId>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl NetworkBuilder {
    fn intern(&mut self, name: &str) -> LocationId {
        match self.ids_by_name.get(name) {
            Some(id) => *id,
            None => {
                let id = self.location_names.len();
                self.location_names.push(name.to_owned());
                self.ids_by_name.insert(name.to_owned(), id);
                id
            }
        }
    }

    /// Record a distance between `from` and `to`. The order of the two names does not matter.
    ///
    /// May cause the builder to enter a [`DuplicateDistance`](BuilderInvalidReason::DuplicateDistance) invalid state if this unordered pair already has a distance.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_distance(&mut self, from: &str, to: &str, distance: Distance) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let from = self.intern(from);
        let to = self.intern(to);

        if !self.seen_pairs.insert(UnorderedPair(from, to)) {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateDistance);
            return self;
        }

        self.segments.push((from, to, distance));
        self
    }

    /// Record a parsed [`DistanceRecord`]. Shorthand for [`Self::add_distance`], with the same conditions.
    pub fn add_record(&mut self, record: &DistanceRecord) -> &mut Self {
        self.add_distance(&record.from, &record.to, record.distance)
    }

    /// Intern `name` without recording any distance, so it exists in the built [`Network`] even with no incident segment.
    ///
    /// A network whose only location was added this way still has a (vacuous) complete route.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_location(&mut self, name: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.intern(name);
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Network`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    ///
    /// An empty builder produces an empty network; that is not an error.
    pub fn build(&self) -> Result<Network, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut graph = UnGraphMap::with_capacity(self.location_names.len(), self.segments.len());

        for id in 0..self.location_names.len() {
            graph.add_node(id);
        }

        for (from, to, distance) in self.segments.iter().copied() {
            graph.add_edge(from, to, distance);
        }

        Ok(Network {
            graph,
            location_names: self.location_names.clone(),
        })
    }
}
