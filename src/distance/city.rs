//! City coordinates and random placement.

use rand::Rng;

/// A labelled point in the plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl City {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Label for the city at `index`: `A`..`Z`, then `A1`..`Z1`, `A2`, ...
pub fn city_label(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

/// Places `count` cities at integer coordinates inside a
/// `width` × `height` area, keeping `margin` units clear of every edge.
///
/// If the margin leaves no room on an axis, that coordinate collapses
/// to the margin.
pub fn random_cities<R: Rng>(
    count: usize,
    width: u32,
    height: u32,
    margin: u32,
    rng: &mut R,
) -> Vec<City> {
    let x_max = width.saturating_sub(margin).max(margin);
    let y_max = height.saturating_sub(margin).max(margin);
    (0..count)
        .map(|i| {
            let x = rng.random_range(margin..=x_max);
            let y = rng.random_range(margin..=y_max);
            City::new(x as f64, y as f64, city_label(i))
        })
        .collect()
}
