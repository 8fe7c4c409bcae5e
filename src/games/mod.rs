//! Game implementations.

pub mod river;
