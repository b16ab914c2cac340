/// Domain layer - component health model, scoring policies and pure services
///
/// Nothing in here performs I/O; every service is a deterministic function
/// of its inputs.
pub mod domain;
pub mod policies;
pub mod services;
