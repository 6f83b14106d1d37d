//! Triangle classification by side lengths.
//!
//! Sides are taken as given: no positivity or triangle-inequality checks.
//! Callers that care about geometric validity must check it themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three side lengths
pub type Sides = [f64; 3];

/// An equilateral triangle has all three sides the same length.
pub fn equilateral(sides: Sides) -> bool {
    let [a, b, c] = sides;
    a == b && b == c
}

/// An isosceles triangle has at least two sides the same length.
/// Every equilateral triangle is also isosceles.
pub fn isosceles(sides: Sides) -> bool {
    let [a, b, c] = sides;
    a == b || a == c || b == c
}

/// A scalene triangle has all sides of different lengths.
pub fn scalene(sides: Sides) -> bool {
    let [a, b, c] = sides;
    a != b && a != c && b != c
}

/// Most specific classification of a triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
}

impl TriangleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Scalene => "scalene",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a triangle as equilateral, else isosceles, else scalene.
pub fn classify_triangle(sides: Sides) -> TriangleKind {
    if equilateral(sides) {
        TriangleKind::Equilateral
    } else if isosceles(sides) {
        TriangleKind::Isosceles
    } else {
        TriangleKind::Scalene
    }
}
