//! Shared geometry and color messages used by several wire shapes.

use serde::{Deserialize, Serialize};

use crate::accessors::optional_fields;

/// A 2D point in world space. Both coordinates are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point2D {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

optional_fields!(Point2D {
    scalar x: f32 => has_x;
    scalar y: f32 => has_y;
});

/// A 3D point in world or screen space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

optional_fields!(Point {
    scalar x: f32 => has_x;
    scalar y: f32 => has_y;
    scalar z: f32 => has_z;
});

/// Integer dimensions of a raster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Size2DI {
    pub x: Option<i32>,
    pub y: Option<i32>,
}

optional_fields!(Size2DI {
    scalar x: i32 => has_x;
    scalar y: i32 => has_y;
});

/// An RGB color. Components travel as `u32` but only 0–255 is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    pub r: Option<u32>,
    pub g: Option<u32>,
    pub b: Option<u32>,
}

optional_fields!(Color {
    scalar r: u32 => has_r;
    scalar g: u32 => has_g;
    scalar b: u32 => has_b;
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_scalar_reads_as_default_but_is_not_present() {
        let point = Point2D { x: Some(0.0), y: None };
        assert!(point.has_x());
        assert!(!point.has_y());
        // Both read as 0.0; only `has_*` tells them apart.
        assert_eq!(point.x(), point.y());
    }

    #[test]
    fn test_missing_json_fields_deserialize_as_absent() {
        let color: Color = serde_json::from_str(r#"{"r": 255}"#).unwrap();
        assert_eq!(color.r, Some(255));
        assert!(!color.has_g());
        assert!(!color.has_b());
    }

    #[test]
    fn test_null_json_field_deserializes_as_absent() {
        let size: Size2DI = serde_json::from_str(r#"{"x": 4, "y": null}"#).unwrap();
        assert!(size.has_x());
        assert!(!size.has_y());
    }
}
