//! Small value types shared by several entities: tags, points, sizes, colors.

use std::fmt;

use s2bridge_mapping::{MappingError, probe_required, validate};
use s2bridge_wire as wire;

use crate::{Catalog, WireCodec};

/// Opaque reference to a unit. Resolving it to a live unit is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(pub u64);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag-{}", self.0)
    }
}

impl From<u64> for Tag {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A world-space position on the map plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2d {
    x: f32,
    y: f32,
}

impl Point2d {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

impl WireCodec for Point2d {
    type Wire = wire::Point2D;
    const ENTITY: &'static str = "point 2d";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        Ok(Self {
            x: probe_required(msg, "x", wire::Point2D::has_x, wire::Point2D::x)?,
            y: probe_required(msg, "y", wire::Point2D::has_y, wire::Point2D::y)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::Point2D {
            x: Some(self.x),
            y: Some(self.y),
        }
    }
}

/// A 3D position (world space, or normalized screen space for overlays).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f32,
    y: f32,
    z: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }
}

impl WireCodec for Point {
    type Wire = wire::Point;
    const ENTITY: &'static str = "point";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        Ok(Self {
            x: probe_required(msg, "x", wire::Point::has_x, wire::Point::x)?,
            y: probe_required(msg, "y", wire::Point::has_y, wire::Point::y)?,
            z: probe_required(msg, "z", wire::Point::has_z, wire::Point::z)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::Point {
            x: Some(self.x),
            y: Some(self.y),
            z: Some(self.z),
        }
    }
}

/// Narrows an unsigned quantity to the wire's positive `int32` range.
pub(crate) fn positive_int32(name: &'static str, value: u32) -> Result<i32, MappingError> {
    validate::require_in_range(name, value, 1..=i64::from(i32::MAX))?;
    i32::try_from(value).map_err(|_| MappingError::InvalidRange {
        name,
        value: value.into(),
    })
}

/// Raster dimensions in pixels. Both are positive and fit the wire's `int32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size2dI {
    width: i32,
    height: i32,
}

impl Size2dI {
    /// # Errors
    /// [`MappingError::InvalidRange`] if either dimension is zero or above
    /// `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, MappingError> {
        Ok(Self {
            width: positive_int32("size x", width)?,
            height: positive_int32("size y", height)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    pub fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Total number of pixels.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

impl WireCodec for Size2dI {
    type Wire = wire::Size2DI;
    const ENTITY: &'static str = "size";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        let x = probe_required(msg, "size x", wire::Size2DI::has_x, wire::Size2DI::x)?;
        let y = probe_required(msg, "size y", wire::Size2DI::has_y, wire::Size2DI::y)?;
        Ok(Self {
            width: validate::require_positive("size x", x)?,
            height: validate::require_positive("size y", y)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::Size2DI {
            x: Some(self.width),
            y: Some(self.height),
        }
    }
}

/// An RGB overlay color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }
}

fn color_component(name: &'static str, value: u32) -> Result<u8, MappingError> {
    u8::try_from(value).map_err(|_| MappingError::InvalidRange {
        name,
        value: value.into(),
    })
}

impl WireCodec for Color {
    type Wire = wire::Color;
    const ENTITY: &'static str = "color";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, _: &C) -> Result<Self, MappingError> {
        let r = probe_required(msg, "red", wire::Color::has_r, wire::Color::r)?;
        let g = probe_required(msg, "green", wire::Color::has_g, wire::Color::g)?;
        let b = probe_required(msg, "blue", wire::Color::has_b, wire::Color::b)?;
        Ok(Self {
            r: color_component("red", r)?,
            g: color_component("green", g)?,
            b: color_component("blue", b)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::Color {
            r: Some(self.r.into()),
            g: Some(self.g.into()),
            b: Some(self.b.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCatalog;

    #[test]
    fn test_point_requires_every_coordinate() {
        let msg = wire::Point {
            x: Some(1.0),
            y: Some(2.0),
            z: None,
        };
        let err = Point::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(err, MappingError::MissingRequiredField { name: "z" });
    }

    #[test]
    fn test_zero_coordinate_is_present_not_missing() {
        let msg = wire::Point2D {
            x: Some(0.0),
            y: Some(0.0),
        };
        let point = Point2d::decode(&msg, &StaticCatalog::default()).unwrap();
        assert_eq!(point, Point2d::new(0.0, 0.0));
    }

    #[test]
    fn test_color_component_over_255_is_invalid_range() {
        let msg = wire::Color {
            r: Some(256),
            g: Some(0),
            b: Some(0),
        };
        let err = Color::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "red",
                value: 256
            }
        );
    }

    #[test]
    fn test_size_rejects_non_positive_dimensions() {
        let msg = wire::Size2DI {
            x: Some(64),
            y: Some(0),
        };
        let err = Size2dI::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "size y",
                value: 0
            }
        );
        assert!(Size2dI::new(0, 4).is_err());
    }

    #[test]
    fn test_size_above_int32_is_rejected() {
        assert_eq!(
            Size2dI::new(u32::MAX, 1).unwrap_err(),
            MappingError::InvalidRange {
                name: "size x",
                value: i64::from(u32::MAX)
            }
        );
        let widest = i32::MAX.unsigned_abs();
        assert!(Size2dI::new(1, widest + 1).is_err());

        let size = Size2dI::new(widest, widest).unwrap();
        assert_eq!(size.encode().x, Some(i32::MAX));
        assert_eq!(Size2dI::decode(&size.encode(), &StaticCatalog::default()), Ok(size));
    }

    #[test]
    fn test_color_component_at_wire_limit() {
        let msg = wire::Color {
            r: Some(255),
            g: Some(0),
            b: Some(u32::MAX),
        };
        let err = Color::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "blue",
                value: i64::from(u32::MAX)
            }
        );
    }

    #[test]
    fn test_size_area() {
        assert_eq!(Size2dI::new(176, 200).unwrap().area(), 35_200);
        let widest = i32::MAX.unsigned_abs();
        assert_eq!(
            Size2dI::new(widest, widest).unwrap().area(),
            u64::from(widest) * u64::from(widest)
        );
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag(42).to_string(), "tag-42");
    }
}
