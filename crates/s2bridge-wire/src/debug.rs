//! Debug overlay messages: text, lines, boxes, and spheres drawn in-game.

use serde::{Deserialize, Serialize};

use crate::accessors::optional_fields;
use crate::common::{Color, Point};

/// A text label. `virtual_pos` places it in screen space, `world_pos` in
/// world space; at most one should be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugText {
    pub color: Option<Color>,
    pub text: Option<String>,
    pub virtual_pos: Option<Point>,
    pub world_pos: Option<Point>,
    pub size: Option<u32>,
}

optional_fields!(DebugText {
    message color: Color => has_color;
    text text: String => has_text;
    message virtual_pos: Point => has_virtual_pos;
    message world_pos: Point => has_world_pos;
    scalar size: u32 => has_size;
});

/// A segment between two points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    pub p0: Option<Point>,
    pub p1: Option<Point>,
}

optional_fields!(Line {
    message p0: Point => has_p0;
    message p1: Point => has_p1;
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugLine {
    pub color: Option<Color>,
    pub line: Option<Line>,
}

optional_fields!(DebugLine {
    message color: Color => has_color;
    message line: Line => has_line;
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugBox {
    pub color: Option<Color>,
    pub min: Option<Point>,
    pub max: Option<Point>,
}

optional_fields!(DebugBox {
    message color: Color => has_color;
    message min: Point => has_min;
    message max: Point => has_max;
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSphere {
    pub color: Option<Color>,
    pub p: Option<Point>,
    pub r: Option<f32>,
}

optional_fields!(DebugSphere {
    message color: Color => has_color;
    message p: Point => has_p;
    scalar r: f32 => has_r;
});

/// A batch of drawables. All four lists are repeated fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugDraw {
    pub text: Vec<DebugText>,
    pub lines: Vec<DebugLine>,
    pub boxes: Vec<DebugBox>,
    pub spheres: Vec<DebugSphere>,
}
