//! 3D scene description handed to the browser-side viewer.
//!
//! The scene is plain data. The dashboard page serializes it to JSON and a
//! small script replays it against 3Dmol.js in this order: add model, set
//! style, add unit cell, add lines, zoom to fit, add labels. Only the
//! structure text varies between lookups; the annotations are always the
//! ones produced by [`Annotations::standard`].

use serde::{Deserialize, Serialize};

/// Length of each coordinate axis, in Å.
pub const AXIS_LENGTH: f64 = 20.0;

/// The grid spans `-GRID_EXTENT..=GRID_EXTENT` on X and Y.
pub const GRID_EXTENT: i32 = 20;

/// Distance between neighbouring grid lines, in Å.
pub const GRID_SPACING: i32 = 5;

/// Axis-name labels sit a little past the axis tips.
const AXIS_LABEL_OFFSET: f64 = 22.0;

const GRID_COLOR: &str = "gray";
const GRID_OPACITY: f64 = 0.4;
const AXIS_LABEL_SIZE: u32 = 14;
const SCALE_LABEL_SIZE: u32 = 12;

/// A point in viewer space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point3 {
    /// Creates a point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);
}

/// What a line is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// One of the three coordinate axes.
    Axis,
    /// A background grid line.
    Grid,
}

/// A straight line primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Axis or grid.
    pub kind: LineKind,
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
    /// CSS color name.
    pub color: String,
    /// Opacity in `0.0..=1.0`; the viewer default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// A text label anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Anchor position.
    pub position: Point3,
    /// CSS color name.
    pub color: String,
    /// Font size in points.
    pub font_size: u32,
}

/// The fixed overlay drawn on top of every structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    /// Axis lines followed by grid lines.
    pub lines: Vec<Line>,
    /// Axis names followed by distance markers.
    pub labels: Vec<Label>,
}

impl Annotations {
    /// Three colored axes, an 18-line grid on the XY plane, axis names and
    /// two distance markers.
    pub fn standard() -> Self {
        let mut lines = Vec::with_capacity(3 + grid_line_count());
        for (end, color) in [
            (Point3::new(AXIS_LENGTH, 0.0, 0.0), "red"),
            (Point3::new(0.0, AXIS_LENGTH, 0.0), "green"),
            (Point3::new(0.0, 0.0, AXIS_LENGTH), "blue"),
        ] {
            lines.push(Line {
                kind: LineKind::Axis,
                start: Point3::ORIGIN,
                end,
                color: color.to_string(),
                opacity: None,
            });
        }

        let extent = f64::from(GRID_EXTENT);
        for i in grid_offsets() {
            let i = f64::from(i);
            lines.push(grid_line(Point3::new(-extent, i, 0.0), Point3::new(extent, i, 0.0)));
            lines.push(grid_line(Point3::new(i, -extent, 0.0), Point3::new(i, extent, 0.0)));
        }

        let labels = vec![
            label("X", Point3::new(AXIS_LABEL_OFFSET, 0.0, 0.0), "red", AXIS_LABEL_SIZE),
            label("Y", Point3::new(0.0, AXIS_LABEL_OFFSET, 0.0), "green", AXIS_LABEL_SIZE),
            label("Z", Point3::new(0.0, 0.0, AXIS_LABEL_OFFSET), "blue", AXIS_LABEL_SIZE),
            label("10Å", Point3::new(10.0, -2.0, 0.0), "black", SCALE_LABEL_SIZE),
            label("20Å", Point3::new(20.0, -2.0, 0.0), "black", SCALE_LABEL_SIZE),
        ];

        Self { lines, labels }
    }

    /// The axis lines.
    pub fn axes(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.kind == LineKind::Axis)
    }

    /// The grid lines.
    pub fn grid(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.kind == LineKind::Grid)
    }
}

/// Grid line offsets along each axis: -20, -15, ..., 20.
pub fn grid_offsets() -> impl Iterator<Item = i32> {
    (-GRID_EXTENT..=GRID_EXTENT).step_by(GRID_SPACING as usize)
}

fn grid_line_count() -> usize {
    2 * grid_offsets().count()
}

fn grid_line(start: Point3, end: Point3) -> Line {
    Line {
        kind: LineKind::Grid,
        start,
        end,
        color: GRID_COLOR.to_string(),
        opacity: Some(GRID_OPACITY),
    }
}

fn label(text: &str, position: Point3, color: &str, font_size: u32) -> Label {
    Label {
        text: text.to_string(),
        position,
        color: color.to_string(),
        font_size,
    }
}

/// Size of the embedded viewer, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
        }
    }
}

/// Raw structure text plus the viewer format name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureModel {
    /// File content, passed to the viewer untouched.
    pub data: String,
    /// Viewer format name.
    pub format: String,
}

/// Cartoon (ribbon) style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartoonStyle {
    /// Color scheme; `spectrum` colors by sequence position.
    pub color: String,
}

/// Style applied to every atom of the model.
///
/// Serializes to the viewer's own shape, `{"cartoon":{"color":"spectrum"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Ribbon representation.
    pub cartoon: CartoonStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            cartoon: CartoonStyle {
                color: "spectrum".to_string(),
            },
        }
    }
}

/// Everything the viewer needs to draw one structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Viewer size.
    pub viewport: Viewport,
    /// The loaded structure.
    pub model: StructureModel,
    /// Model style.
    pub style: Style,
    /// Draw the crystallographic unit cell when the file defines one.
    pub show_unit_cell: bool,
    /// Fit the camera to the model after the lines are added.
    pub zoom_to: bool,
    /// Fixed overlay.
    pub annotations: Annotations,
}

impl SceneDescription {
    /// Builds the scene for a PDB-format structure file.
    pub fn from_pdb(structure: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            viewport,
            model: StructureModel {
                data: structure.into(),
                format: "pdb".to_string(),
            },
            style: Style::default(),
            show_unit_cell: true,
            zoom_to: true,
            annotations: Annotations::standard(),
        }
    }
}
