//! SeaORM entities for the Wamumbi database schema.

pub mod prelude;

pub mod campaign;
pub mod donation;
pub mod wamumbi_user;
