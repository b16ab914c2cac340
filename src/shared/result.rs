/// Crate-wide Result alias backed by `anyhow::Error`.
///
/// Typed errors (`HealthError`, `ContrastError`) convert into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
