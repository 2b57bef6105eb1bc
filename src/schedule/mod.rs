pub mod grid;
pub mod query;
pub mod rules;
pub mod slots;
pub mod week;
