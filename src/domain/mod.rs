// Domain layer - Equipment profiles, snapshots and diagnosis results
pub mod diagnosis;
pub mod equipment;
pub mod error;
pub mod snapshot;
