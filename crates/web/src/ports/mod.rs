//! Port definitions (hexagonal architecture boundaries)

pub mod outbound;
