//! Service layer for the trivia API.
//! - Repository traits separate business rules from data access.
//! - Reuses entity definitions and queries from the `models` crate.
//! - Shapes rows into the JSON response types in [`dto`].

pub mod errors;
pub mod dto;
pub mod game;
pub mod custom_game;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
#[cfg(test)]
pub mod test_support;
