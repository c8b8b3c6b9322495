//! Debug overlays: text labels, lines, boxes, and spheres drawn by the engine.
//!
//! Primitives are plain values created with `new` and refined with
//! `with_*`/`at_*` methods that return a new value. A [`DebugDraw`] batch
//! owns its primitives in order and is never empty.

use s2bridge_mapping::{
    MappingError, OneOf, Sequence, collection, probe, probe_required, validate, variant,
};
use s2bridge_wire as wire;

use crate::{Catalog, Color, Point, WireCodec};

fn decode_color<C: Catalog + ?Sized>(
    color: Option<&wire::Color>,
    catalog: &C,
) -> Result<Option<Color>, MappingError> {
    color.map(|c| Color::decode(c, catalog)).transpose()
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Where a text label is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextPosition {
    /// Engine default placement.
    #[default]
    Unplaced,
    /// Normalized screen coordinates.
    Screen(Point),
    /// World coordinates.
    World(Point),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebugText {
    color: Option<Color>,
    text: String,
    position: TextPosition,
    size: Option<u32>,
}

impl DebugText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            color: None,
            text: text.into(),
            position: TextPosition::Unplaced,
            size: None,
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn at_screen(self, position: Point) -> Self {
        Self {
            position: TextPosition::Screen(position),
            ..self
        }
    }

    pub fn at_world(self, position: Point) -> Self {
        Self {
            position: TextPosition::World(position),
            ..self
        }
    }

    pub fn with_size(self, size: u32) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> TextPosition {
        self.position
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }
}

impl WireCodec for DebugText {
    type Wire = wire::DebugText;
    const ENTITY: &'static str = "debug text";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::DebugText;

        let text = probe_required(msg, "text", W::has_text, W::text)?;
        let position = variant::resolve_optional(
            "text position",
            probe(msg, W::has_virtual_pos, W::virtual_pos),
            probe(msg, W::has_world_pos, W::world_pos),
        )?
        .map(|resolved| {
            resolved.try_map(
                |screen| Point::decode(screen, catalog),
                |world| Point::decode(world, catalog),
            )
        })
        .transpose()?;

        Ok(Self {
            color: decode_color(probe(msg, W::has_color, W::color), catalog)?,
            text: text.to_owned(),
            position: match position {
                None => TextPosition::Unplaced,
                Some(OneOf::First(screen)) => TextPosition::Screen(screen),
                Some(OneOf::Second(world)) => TextPosition::World(world),
            },
            size: probe(msg, W::has_size, W::size),
        })
    }

    fn encode(&self) -> Self::Wire {
        let alternatives = match self.position {
            TextPosition::Unplaced => None,
            TextPosition::Screen(p) => Some(OneOf::First(p)),
            TextPosition::World(p) => Some(OneOf::Second(p)),
        };
        let (virtual_pos, world_pos) = variant::split(alternatives);
        wire::DebugText {
            color: self.color.map(|c| c.encode()),
            text: Some(self.text.clone()),
            virtual_pos: virtual_pos.map(|p| p.encode()),
            world_pos: world_pos.map(|p| p.encode()),
            size: self.size,
        }
    }
}

// ---------------------------------------------------------------------------
// Line, box, sphere
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    color: Option<Color>,
    p0: Point,
    p1: Point,
}

impl DebugLine {
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            color: None,
            p0,
            p1,
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn p0(&self) -> Point {
        self.p0
    }

    pub fn p1(&self) -> Point {
        self.p1
    }
}

impl WireCodec for DebugLine {
    type Wire = wire::DebugLine;
    const ENTITY: &'static str = "debug line";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::DebugLine;
        type L = wire::Line;

        let line = probe_required(msg, "line", W::has_line, W::line)?;
        Ok(Self {
            color: decode_color(probe(msg, W::has_color, W::color), catalog)?,
            p0: Point::decode(probe_required(line, "p0", L::has_p0, L::p0)?, catalog)?,
            p1: Point::decode(probe_required(line, "p1", L::has_p1, L::p1)?, catalog)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::DebugLine {
            color: self.color.map(|c| c.encode()),
            line: Some(wire::Line {
                p0: Some(self.p0.encode()),
                p1: Some(self.p1.encode()),
            }),
        }
    }
}

/// An axis-aligned box between two corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugBox {
    color: Option<Color>,
    min: Point,
    max: Point,
}

impl DebugBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            color: None,
            min,
            max,
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }
}

impl WireCodec for DebugBox {
    type Wire = wire::DebugBox;
    const ENTITY: &'static str = "debug box";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::DebugBox;

        Ok(Self {
            color: decode_color(probe(msg, W::has_color, W::color), catalog)?,
            min: Point::decode(probe_required(msg, "min", W::has_min, W::min)?, catalog)?,
            max: Point::decode(probe_required(msg, "max", W::has_max, W::max)?, catalog)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::DebugBox {
            color: self.color.map(|c| c.encode()),
            min: Some(self.min.encode()),
            max: Some(self.max.encode()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugSphere {
    color: Option<Color>,
    center: Point,
    radius: f32,
}

impl DebugSphere {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            color: None,
            center,
            radius,
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl WireCodec for DebugSphere {
    type Wire = wire::DebugSphere;
    const ENTITY: &'static str = "debug sphere";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::DebugSphere;

        Ok(Self {
            color: decode_color(probe(msg, W::has_color, W::color), catalog)?,
            center: Point::decode(probe_required(msg, "center", W::has_p, W::p)?, catalog)?,
            radius: probe_required(msg, "radius", W::has_r, W::r)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::DebugSphere {
            color: self.color.map(|c| c.encode()),
            p: Some(self.center.encode()),
            r: Some(self.radius),
        }
    }
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

/// An ordered, non-empty batch of drawables.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugDraw {
    texts: Sequence<DebugText>,
    lines: Sequence<DebugLine>,
    boxes: Sequence<DebugBox>,
    spheres: Sequence<DebugSphere>,
}

impl DebugDraw {
    pub fn builder() -> DebugDrawBuilder {
        DebugDrawBuilder::default()
    }

    pub fn texts(&self) -> &[DebugText] {
        &self.texts
    }

    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    pub fn boxes(&self) -> &[DebugBox] {
        &self.boxes
    }

    pub fn spheres(&self) -> &[DebugSphere] {
        &self.spheres
    }
}

impl WireCodec for DebugDraw {
    type Wire = wire::DebugDraw;
    const ENTITY: &'static str = "debug draw";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        DebugDrawBuilder {
            texts: collection::decode_repeated(&msg.text, |t| DebugText::decode(t, catalog))?,
            lines: collection::decode_repeated(&msg.lines, |l| DebugLine::decode(l, catalog))?,
            boxes: collection::decode_repeated(&msg.boxes, |b| DebugBox::decode(b, catalog))?,
            spheres: collection::decode_repeated(&msg.spheres, |s| {
                DebugSphere::decode(s, catalog)
            })?,
        }
        .finish()
    }

    fn encode(&self) -> Self::Wire {
        wire::DebugDraw {
            text: collection::encode_repeated(&self.texts, |item| item.encode()),
            lines: collection::encode_repeated(&self.lines, |item| item.encode()),
            boxes: collection::encode_repeated(&self.boxes, |item| item.encode()),
            spheres: collection::encode_repeated(&self.spheres, |item| item.encode()),
        }
    }
}

/// Accumulates drawables; every method appends, preserving call order.
#[derive(Debug, Default)]
#[must_use]
pub struct DebugDrawBuilder {
    texts: Sequence<DebugText>,
    lines: Sequence<DebugLine>,
    boxes: Sequence<DebugBox>,
    spheres: Sequence<DebugSphere>,
}

impl DebugDrawBuilder {
    pub fn texts(mut self, texts: impl IntoIterator<Item = DebugText>) -> Self {
        self.texts.extend(texts);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = DebugLine>) -> Self {
        self.lines.extend(lines);
        self
    }

    pub fn boxes(mut self, boxes: impl IntoIterator<Item = DebugBox>) -> Self {
        self.boxes.extend(boxes);
        self
    }

    pub fn spheres(mut self, spheres: impl IntoIterator<Item = DebugSphere>) -> Self {
        self.spheres.extend(spheres);
        self
    }

    /// # Errors
    /// [`MappingError::EmptyRequiredCollection`] if nothing was added.
    pub fn build(self) -> Result<DebugDraw, MappingError> {
        self.finish().inspect_err(|e| {
            tracing::debug!(entity = DebugDraw::ENTITY, error = %e, "builder rejected");
        })
    }

    fn finish(self) -> Result<DebugDraw, MappingError> {
        validate::require_any_non_empty(
            "draw elements",
            &[
                self.texts.len(),
                self.lines.len(),
                self.boxes.len(),
                self.spheres.len(),
            ],
        )?;
        Ok(DebugDraw {
            texts: self.texts,
            lines: self.lines,
            boxes: self.boxes,
            spheres: self.spheres,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCatalog;

    fn origin() -> Point {
        Point::new(0.0, 0.0, 0.0)
    }

    fn wire_point(x: f32) -> wire::Point {
        wire::Point {
            x: Some(x),
            y: Some(0.0),
            z: Some(0.0),
        }
    }

    #[test]
    fn test_empty_batch_is_rejected_by_builder() {
        let err = DebugDraw::builder().build().unwrap_err();
        assert_eq!(
            err,
            MappingError::EmptyRequiredCollection {
                name: "draw elements"
            }
        );
    }

    #[test]
    fn test_empty_batch_is_rejected_on_decode() {
        let err = DebugDraw::decode(&wire::DebugDraw::default(), &StaticCatalog::default())
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::EmptyRequiredCollection {
                name: "draw elements"
            }
        );
    }

    #[test]
    fn test_single_sphere_is_enough() {
        let draw = DebugDraw::builder()
            .spheres([DebugSphere::new(origin(), 1.5)])
            .build()
            .unwrap();
        assert_eq!(draw.spheres().len(), 1);
        assert!(draw.texts().is_empty());
    }

    #[test]
    fn test_text_with_both_positions_conflicts() {
        let msg = wire::DebugText {
            text: Some("hi".into()),
            virtual_pos: Some(wire_point(0.5)),
            world_pos: Some(wire_point(10.0)),
            ..wire::DebugText::default()
        };
        let err = DebugText::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::ConflictingVariant {
                name: "text position"
            }
        );
    }

    #[test]
    fn test_text_requires_text() {
        let msg = wire::DebugText {
            world_pos: Some(wire_point(1.0)),
            ..wire::DebugText::default()
        };
        let err = DebugText::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(err, MappingError::MissingRequiredField { name: "text" });
    }

    #[test]
    fn test_empty_text_is_present() {
        let msg = wire::DebugText {
            text: Some(String::new()),
            ..wire::DebugText::default()
        };
        let text = DebugText::decode(&msg, &StaticCatalog::default()).unwrap();
        assert_eq!(text.text(), "");
        assert_eq!(text.position(), TextPosition::Unplaced);
    }

    #[test]
    fn test_line_without_endpoint_is_missing_field() {
        let msg = wire::DebugLine {
            color: None,
            line: Some(wire::Line {
                p0: Some(wire_point(0.0)),
                p1: None,
            }),
        };
        let err = DebugLine::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(err, MappingError::MissingRequiredField { name: "p1" });
    }

    #[test]
    fn test_primitive_order_survives_encode_and_decode() {
        let draw = DebugDraw::builder()
            .texts([DebugText::new("b"), DebugText::new("a")])
            .texts([DebugText::new("c").at_world(origin()).with_color(Color::RED)])
            .lines([DebugLine::new(origin(), Point::new(1.0, 1.0, 0.0))])
            .build()
            .unwrap();
        let msg = draw.encode();
        let labels: Vec<&str> = msg.text.iter().map(|t| t.text()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert!(!msg.text[2].has_virtual_pos());
        assert!(msg.text[2].has_world_pos());

        let decoded = DebugDraw::decode(&msg, &StaticCatalog::default()).unwrap();
        assert_eq!(decoded, draw);
    }

    #[test]
    fn test_with_methods_return_new_values() {
        let plain = DebugBox::new(origin(), Point::new(2.0, 2.0, 2.0));
        let red = plain.with_color(Color::RED);
        assert_eq!(plain.color(), None);
        assert_eq!(red.color(), Some(Color::RED));
    }
}
