//! Grid positions and field bounds.

use std::fmt;

/// An integer cell coordinate `(x, y)`.
///
/// Equality is structural. Rendered as `(x,y)` with no space, matching
/// the report format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing northward.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position displaced by `(dx, dy)`.
    ///
    /// Saturates instead of overflowing; a saturated coordinate is always
    /// outside any field, so the move is clamped like any other.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The extent `[0, width) x [0, height)` of a field.
///
/// Both dimensions are strictly positive; [`Bounds::new`] refuses anything
/// else, so a `Bounds` value always contains at least one cell.
///
/// # Examples
///
/// ```
/// use autodrive_core::{Bounds, Position};
///
/// let b = Bounds::new(10, 10).unwrap();
/// assert!(b.contains(Position::new(9, 0)));
/// assert!(!b.contains(Position::new(10, 0)));
/// assert!(Bounds::new(0, 5).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Returns `None` if either dimension is zero or negative.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `pos` lies inside the field.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_has_no_space() {
        assert_eq!(Position::new(2, -1).to_string(), "(2,-1)");
    }

    #[test]
    fn offset_saturates() {
        let p = Position::new(i32::MAX, 0).offset(1, 0);
        assert_eq!(p.x, i32::MAX);
    }

    #[test]
    fn bounds_edges() {
        let b = Bounds::new(3, 2).unwrap();
        assert!(b.contains(Position::new(0, 0)));
        assert!(b.contains(Position::new(2, 1)));
        assert!(!b.contains(Position::new(3, 1)));
        assert!(!b.contains(Position::new(2, 2)));
        assert!(!b.contains(Position::new(-1, 0)));
        assert!(!b.contains(Position::new(0, -1)));
    }

    #[test]
    fn bounds_rejects_non_positive() {
        assert!(Bounds::new(0, 1).is_none());
        assert!(Bounds::new(1, 0).is_none());
        assert!(Bounds::new(-4, 4).is_none());
        assert!(Bounds::new(1, 1).is_some());
    }

    proptest! {
        #[test]
        fn contains_matches_ranges(
            w in 1i32..50, h in 1i32..50,
            x in -60i32..60, y in -60i32..60,
        ) {
            let b = Bounds::new(w, h).unwrap();
            let expected = (0..w).contains(&x) && (0..h).contains(&y);
            prop_assert_eq!(b.contains(Position::new(x, y)), expected);
        }
    }
}
