//! PlanetTerp implementation of the professor and grade lookups.

pub mod client;

pub use client::PlanetTerpClient;
