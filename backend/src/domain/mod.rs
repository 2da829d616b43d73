// Domain layer - business logic, entities, value objects
// No dependencies on other layers

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
