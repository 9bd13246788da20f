//! Parsing of the textual distance-list format, one record per line.

use std::str::FromStr;

use thiserror::Error;

use crate::location::Distance;

/// Reasons a line may fail to parse as a [`DistanceRecord`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseRecordError {
    /// The line does not match `<from> to <to> = <distance>`.
    #[error("expected `<from> to <to> = <distance>`, got `{0}`")]
    Malformed(String),
    /// The distance field is not a non-negative integer.
    #[error("bad distance `{0}`")]
    BadDistance(String),
}

/// One line of input: an undirected distance between two named locations, as in `London to Dublin = 464`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistanceRecord {
    /// One endpoint of the segment.
    pub from: String,
    /// The other endpoint. Order carries no meaning; segments are undirected.
    pub to: String,
    /// The segment length.
    pub distance: Distance,
}

impl FromStr for DistanceRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (endpoints, raw_distance) = s.split_once(" = ")
            .ok_or_else(|| ParseRecordError::Malformed(s.to_owned()))?;
        let (from, to) = endpoints.split_once(" to ")
            .ok_or_else(|| ParseRecordError::Malformed(s.to_owned()))?;

        if from.is_empty() || to.is_empty() {
            return Err(ParseRecordError::Malformed(s.to_owned()));
        }

        let distance = raw_distance.trim().parse::<Distance>()
            .map_err(|_| ParseRecordError::BadDistance(raw_distance.to_owned()))?;

        Ok(Self {
            from: from.to_owned(),
            to: to.to_owned(),
            distance,
        })
    }
}
