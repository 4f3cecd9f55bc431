//! The spatial triple the feed encodes as a comma-separated string.
//!
//! Positions, facing directions, and velocities all arrive as
//! `"x, y, z"` text (e.g. `"-1024.00, 512.50, 64.00"`), not as JSON
//! arrays. Parsing is total: missing or unparsable components resolve
//! to `0.0`.

use serde::{Deserialize, Serialize};

/// A three-component world-space vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// East-west world coordinate.
    pub x: f64,
    /// North-south world coordinate.
    pub y: f64,
    /// Vertical world coordinate.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector, used when the feed omits a spatial value.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Parse a feed value of the form `"x, y, z"`.
    ///
    /// Components that are missing or fail to parse as floats resolve to
    /// `0.0`; surplus components are ignored.
    pub fn from_feed(value: &str) -> Self {
        let mut components = value
            .split(',')
            .map(|part| part.trim().parse::<f64>().unwrap_or_default());
        Self {
            x: components.next().unwrap_or_default(),
            y: components.next().unwrap_or_default(),
            z: components.next().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_feed_format() {
        let v = Vector3::from_feed("-1024.00, 512.50, 64.00");
        assert_eq!(v.x, -1024.0);
        assert_eq!(v.y, 512.5);
        assert_eq!(v.z, 64.0);
    }

    #[test]
    fn tolerates_missing_components() {
        let v = Vector3::from_feed("1.5, 2.5");
        assert_eq!(v.x, 1.5);
        assert_eq!(v.y, 2.5);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn garbage_resolves_to_zero() {
        assert_eq!(Vector3::from_feed("not a vector"), Vector3::ZERO);
        assert_eq!(Vector3::from_feed(""), Vector3::ZERO);
    }

    #[test]
    fn surplus_components_are_ignored() {
        let v = Vector3::from_feed("1, 2, 3, 4");
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn round_trips_through_serde() {
        let v = Vector3::from_feed("-1024.00, 512.50, 64.00");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":-1024.0,"y":512.5,"z":64.0}"#);
        assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);
    }
}
