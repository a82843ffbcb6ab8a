//! Distance model: the city layout and pairwise distances a colony runs on.
//!
//! [`DistanceMatrix`] is the only input the colony needs. The generators
//! here cover the usual ways of obtaining one:
//!
//! - [`DistanceMatrix::new`]: explicit rows (manual entry, files, ...)
//! - [`DistanceMatrix::euclidean`]: from [`City`] coordinates
//! - [`DistanceMatrix::random`]: uniform random whole-number distances
//! - [`random_cities`]: random city placement inside a rectangle

mod city;
mod matrix;

pub use city::{city_label, random_cities, City};
pub use matrix::DistanceMatrix;
