//! Domain models for the placement dataset.

pub mod company;
