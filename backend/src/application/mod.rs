// Application layer - use cases grouped by the entity they revolve around
// Orchestrates domain logic, depends on domain layer only

pub mod films;
pub mod id_generator;
pub mod ports;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
