/// The index of an interned location name within its [`Network`](crate::Network).
///
/// IDs are dense and assigned in order of first appearance in the input.
pub type LocationId = usize;

/// The length of one direct segment between two locations.
pub type Distance = u64;
