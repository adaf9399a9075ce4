//! Immutable drawing configuration validated at construction
//!
//! Every value object here rejects bad input in its constructor, and changes
//! go through `reconfigure`, which validates the full replacement before
//! touching the stored value.

use crate::canvas::color::Color;
use crate::canvas::geometry::PixelPoint;
use crate::io::configuration::{DEFAULT_BACKGROUND, DEFAULT_LINE_COLOR, DEFAULT_SHADOW_COLOR};
use crate::io::error::{Result, invalid_parameter};

/// Palette shared by every shape drawn onto a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    /// Canvas fill color
    pub background: Color,
    /// Color of lines and curves
    pub line: Color,
    /// Color of the drop shadow under popped shapes
    pub shadow: Color,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            line: DEFAULT_LINE_COLOR,
            shadow: DEFAULT_SHADOW_COLOR,
        }
    }
}

impl TileStyle {
    /// Style with explicit colors
    pub const fn new(background: Color, line: Color, shadow: Color) -> Self {
        Self {
            background,
            line,
            shadow,
        }
    }

    /// Same style with a different line color
    pub const fn with_line(self, line: Color) -> Self {
        Self { line, ..self }
    }
}

/// Which sides of a grid cell are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
// One flag per rectangle side
#[allow(clippy::struct_excessive_bools)]
pub struct EdgeSet {
    /// Top side
    pub top: bool,
    /// Bottom side
    pub bottom: bool,
    /// Left side
    pub left: bool,
    /// Right side
    pub right: bool,
}

impl EdgeSet {
    /// Every side visible
    pub const ALL: Self = Self::new(true, true, true, true);
    /// No side visible
    pub const NONE: Self = Self::new(false, false, false, false);

    /// Edge set from individual flags
    pub const fn new(top: bool, bottom: bool, left: bool, right: bool) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Whether no side is visible
    pub const fn is_empty(self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::ALL
    }
}

/// Grid cell appearance and tiling stride
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeConfig {
    thickness: u32,
    edges: EdgeSet,
    pop: bool,
    repeat: Option<u32>,
}

impl ShapeConfig {
    /// Validated configuration
    ///
    /// `repeat` of `None` means "the larger canvas dimension", which draws the
    /// pattern exactly once per axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` or an explicit `repeat` is zero
    pub fn new(thickness: u32, edges: EdgeSet, pop: bool, repeat: Option<u32>) -> Result<Self> {
        validate_thickness(thickness)?;
        if repeat == Some(0) {
            return Err(invalid_parameter("repeat", &0, &"must be greater than 0"));
        }

        Ok(Self {
            thickness,
            edges,
            pop,
            repeat,
        })
    }

    /// All edges, no shadow, default repeat
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is zero
    pub fn with_thickness(thickness: u32) -> Result<Self> {
        Self::new(thickness, EdgeSet::ALL, false, None)
    }

    /// Replace every field at once, leaving `self` untouched on error
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`ShapeConfig::new`]
    pub fn reconfigure(
        &mut self,
        thickness: u32,
        edges: EdgeSet,
        pop: bool,
        repeat: Option<u32>,
    ) -> Result<()> {
        *self = Self::new(thickness, edges, pop, repeat)?;
        Ok(())
    }

    /// Line thickness in pixels
    pub const fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Visible edges
    pub const fn edges(&self) -> EdgeSet {
        self.edges
    }

    /// Whether a shadow is drawn underneath
    pub const fn pop(&self) -> bool {
        self.pop
    }

    /// Explicit repeat, if any
    pub const fn repeat(&self) -> Option<u32> {
        self.repeat
    }

    /// Distance between cell origins on a canvas of the given size
    pub fn stride(&self, width: u32, height: u32) -> u32 {
        stride(self.thickness, self.repeat, width, height)
    }
}

/// Quadratic bezier decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConfig {
    start: PixelPoint,
    control: PixelPoint,
    end: PixelPoint,
    closed: bool,
    thickness: u32,
    pop: bool,
}

impl CurveConfig {
    /// Validated open curve without shadow
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is zero
    pub fn new(
        start: PixelPoint,
        control: PixelPoint,
        end: PixelPoint,
        thickness: u32,
    ) -> Result<Self> {
        validate_thickness(thickness)?;
        Ok(Self {
            start,
            control,
            end,
            closed: false,
            thickness,
            pop: false,
        })
    }

    /// Same curve, closed by the triangle through its three defining points
    pub const fn closed(self, closed: bool) -> Self {
        Self { closed, ..self }
    }

    /// Same curve, with or without a drop shadow
    pub const fn popped(self, pop: bool) -> Self {
        Self { pop, ..self }
    }

    /// Same curve moved by a pixel offset
    pub fn translated(self, by: PixelPoint) -> Self {
        Self {
            start: self.start.translate(by),
            control: self.control.translate(by),
            end: self.end.translate(by),
            ..self
        }
    }

    /// Replace the defining points and thickness at once
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is zero; `self` is left unchanged
    pub fn reconfigure(
        &mut self,
        start: PixelPoint,
        control: PixelPoint,
        end: PixelPoint,
        thickness: u32,
    ) -> Result<()> {
        *self = Self::new(start, control, end, thickness)?
            .closed(self.closed)
            .popped(self.pop);
        Ok(())
    }

    /// First point of the curve
    pub const fn start(&self) -> PixelPoint {
        self.start
    }

    /// Control point the curve bends towards
    pub const fn control(&self) -> PixelPoint {
        self.control
    }

    /// Last point of the curve
    pub const fn end(&self) -> PixelPoint {
        self.end
    }

    /// Whether the closing triangle is drawn
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Line thickness in pixels
    pub const fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Whether a shadow is drawn underneath
    pub const fn pop(&self) -> bool {
        self.pop
    }
}

/// Tiling stride: `thickness * repeat`, with `repeat` defaulting to the larger
/// canvas dimension
pub fn stride(thickness: u32, repeat: Option<u32>, width: u32, height: u32) -> u32 {
    thickness.saturating_mul(repeat.unwrap_or_else(|| width.max(height)))
}

fn validate_thickness(thickness: u32) -> Result<()> {
    if thickness == 0 {
        return Err(invalid_parameter(
            "thickness",
            &thickness,
            &"must be greater than 0",
        ));
    }
    Ok(())
}
