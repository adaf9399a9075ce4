//! Command-line interface for generating tiles, curves and pixel stickers

use crate::canvas::color::Color;
use crate::canvas::geometry::{NormalizedPoint, PixelPoint, Point};
use crate::canvas::surface::Canvas;
use crate::generation::frames::{Frame, FrameSequence};
use crate::generation::grid::{FrameCount, GridPatternGenerator, PositionWalk};
use crate::generation::stamp::PixelStamp;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_LINE_COLOR, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_OUTPUT_FILE,
    DEFAULT_POLYGON_RADIUS, DEFAULT_REPEAT_COUNT, DEFAULT_REPEAT_SPACING, DEFAULT_SHADOW_COLOR,
    DEFAULT_STICKER_RADIUS, DEFAULT_TILE_SIZE, MIN_POLYGON_SIDES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::output::OutputTarget;
use crate::io::progress::FrameProgress;
use crate::shapes::config::{CurveConfig, EdgeSet, ShapeConfig, TileStyle};
use crate::shapes::pixel::{PixelShape, PolygonConfig};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tileforge")]
#[command(
    author,
    version,
    about = "Generate sprite-sheet tiles: grid borders, bezier decorations and pixel stickers"
)]
/// Command-line arguments for the tile generator
pub struct Cli {
    /// Pattern to generate
    #[command(subcommand)]
    pub command: TileCommand,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log detail (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> tracing::Level {
        match (self.quiet, self.verbose) {
            (true, _) => tracing::Level::WARN,
            (false, 0) => tracing::Level::INFO,
            (false, 1) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available patterns
#[derive(Subcommand, Debug)]
pub enum TileCommand {
    /// Grid-line tile borders
    Grid(GridArgs),
    /// Quadratic bezier decoration repeated on a grid
    Curve(CurveArgs),
    /// One bezier stamped at evenly spaced positions (grass tufts)
    Scatter(ScatterArgs),
    /// Normalized pixel sticker tiled across the canvas
    Sticker(StickerArgs),
    /// Regular polygon
    Polygon(PolygonArgs),
}

impl TileCommand {
    /// Settings shared by every pattern
    pub const fn tile(&self) -> &TileArgs {
        match self {
            Self::Grid(args) => &args.tile,
            Self::Curve(args) => &args.tile,
            Self::Scatter(args) => &args.tile,
            Self::Sticker(args) => &args.tile,
            Self::Polygon(args) => &args.tile,
        }
    }
}

/// Canvas, palette and output settings
#[derive(Args, Debug, Clone)]
pub struct TileArgs {
    /// Tile width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub width: u32,

    /// Tile height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub height: u32,

    /// Background color as r,g,b
    #[arg(long, default_value_t = DEFAULT_BACKGROUND)]
    pub background: Color,

    /// Line color as r,g,b
    #[arg(long, default_value_t = DEFAULT_LINE_COLOR)]
    pub line: Color,

    /// Shadow color as r,g,b,a
    #[arg(long, default_value_t = DEFAULT_SHADOW_COLOR, value_parser = parse_shadow)]
    pub shadow: Color,

    /// Directory generated images are written into
    #[arg(long, default_value = DEFAULT_OUTPUT_DIRECTORY)]
    pub output_dir: PathBuf,

    /// Output file name, must end in .png
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Generate an animation with this many frames
    #[arg(short, long)]
    pub frames: Option<FrameCount>,

    /// Open the interactive preview after generation
    #[arg(short, long)]
    pub preview: bool,
}

// Shadows are drawn translucent, so the alpha channel must be spelled out
fn parse_shadow(value: &str) -> Result<Color> {
    let color: Color = value.parse()?;
    if !color.has_alpha() {
        return Err(invalid_parameter(
            "shadow",
            &value,
            &"expected r,g,b,a with an explicit alpha channel",
        ));
    }
    Ok(color)
}

impl TileArgs {
    /// Palette from the color flags
    pub const fn style(&self) -> TileStyle {
        TileStyle::new(self.background, self.line, self.shadow)
    }
}

/// Grid pattern settings
#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GridArgs {
    #[command(flatten)]
    /// Canvas and output settings
    pub tile: TileArgs,

    /// Line thickness in pixels
    #[arg(short, long, default_value_t = 1)]
    pub thickness: u32,

    /// Hide the top edge
    #[arg(long)]
    pub hide_top: bool,

    /// Hide the bottom edge
    #[arg(long)]
    pub hide_bottom: bool,

    /// Hide the left edge
    #[arg(long)]
    pub hide_left: bool,

    /// Hide the right edge
    #[arg(long)]
    pub hide_right: bool,

    /// Draw a drop shadow under the lines
    #[arg(long)]
    pub pop: bool,

    /// Stride multiplier (defaults to the larger tile dimension)
    #[arg(short, long)]
    pub repeat: Option<u32>,

    /// First cell origin as x,y
    #[arg(long, default_value = "0,0")]
    pub start: PixelPoint,

    /// Additionally set a single pixel at x,y
    #[arg(long)]
    pub stamp: Option<PixelPoint>,

    /// Color of the stamped pixel (defaults to the line color)
    #[arg(long, requires = "stamp")]
    pub stamp_color: Option<Color>,

    /// Stamped pixel copies along x,y (0 draws once)
    #[arg(long, default_value = "0,0")]
    pub stamp_repeats: Point<u32>,
}

/// Curve pattern settings
#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    #[command(flatten)]
    /// Canvas and output settings
    pub tile: TileArgs,

    /// Curve start as x,y
    #[arg(long)]
    pub from: PixelPoint,

    /// Control point as x,y
    #[arg(long)]
    pub control: PixelPoint,

    /// Curve end as x,y
    #[arg(long)]
    pub to: PixelPoint,

    /// Close the curve with a triangle through its three points
    #[arg(long)]
    pub closed: bool,

    /// Draw a drop shadow under the curve
    #[arg(long)]
    pub pop: bool,

    /// Line thickness in pixels
    #[arg(short, long, default_value_t = 2)]
    pub thickness: u32,

    /// Stride multiplier (defaults to the larger tile dimension)
    #[arg(short, long)]
    pub repeat: Option<u32>,

    /// First cell origin as x,y
    #[arg(long, default_value = "0,0")]
    pub location: PixelPoint,
}

/// Scattered curve settings
#[derive(Args, Debug, Clone)]
pub struct ScatterArgs {
    #[command(flatten)]
    /// Canvas and output settings
    pub tile: TileArgs,

    /// Curve start relative to each position
    #[arg(long, default_value = "0,1")]
    pub from: PixelPoint,

    /// Control point relative to each position
    #[arg(long, default_value = "4,3")]
    pub control: PixelPoint,

    /// Curve end relative to each position
    #[arg(long, default_value = "1,0")]
    pub to: PixelPoint,

    /// Line thickness in pixels
    #[arg(short, long, default_value_t = 1)]
    pub thickness: u32,

    /// Pixels between positions
    #[arg(long, default_value_t = 4)]
    pub spacing: u32,

    /// Stop after this many positions (0 means no limit)
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Pixel sticker settings
#[derive(Args, Debug, Clone)]
pub struct StickerArgs {
    #[command(flatten)]
    /// Canvas and output settings
    pub tile: TileArgs,

    /// Normalized coordinate u,v in [0,1) (repeatable)
    #[arg(long = "coord", required = true)]
    pub coords: Vec<NormalizedPoint>,

    /// Sticker color as r,g,b[,a]
    #[arg(long)]
    pub color: Color,

    /// Draw each coordinate as a disc
    #[arg(long)]
    pub rounded: bool,

    /// Disc radius in pixels
    #[arg(long, default_value_t = DEFAULT_STICKER_RADIUS)]
    pub radius: u32,

    /// Copies along x
    #[arg(long, default_value_t = DEFAULT_REPEAT_COUNT)]
    pub count_x: u32,

    /// Copies along y
    #[arg(long, default_value_t = DEFAULT_REPEAT_COUNT)]
    pub count_y: u32,

    /// Pixels between copies as x,y
    #[arg(long, default_value_t = Point::new(DEFAULT_REPEAT_SPACING, DEFAULT_REPEAT_SPACING))]
    pub spacing: Point<u32>,
}

/// Regular polygon settings
#[derive(Args, Debug, Clone)]
pub struct PolygonArgs {
    #[command(flatten)]
    /// Canvas and output settings
    pub tile: TileArgs,

    /// Number of sides
    #[arg(long, default_value_t = MIN_POLYGON_SIDES)]
    pub sides: u32,

    /// Radius as a fraction of the tile size
    #[arg(long, default_value_t = DEFAULT_POLYGON_RADIUS)]
    pub radius: f64,

    /// Center as normalized u,v
    #[arg(long, default_value = "0.5,0.5")]
    pub center: NormalizedPoint,

    /// Fill color (defaults to the line color)
    #[arg(long)]
    pub fill: Option<Color>,

    /// Outline color
    #[arg(long, default_value = "255,255,255")]
    pub outline: Color,
}

/// Validated drawing instructions for one canvas
///
/// Built before any canvas is touched so that bad arguments never produce a
/// partial image.
#[derive(Debug)]
enum DrawPlan {
    Grid {
        config: ShapeConfig,
        start: PixelPoint,
        stamp: Option<PixelStamp>,
    },
    Curve {
        curve: CurveConfig,
        repeat: Option<u32>,
        start: PixelPoint,
    },
    Scatter {
        curve: CurveConfig,
        positions: Vec<PixelPoint>,
    },
    Sticker {
        shape: PixelShape,
        radius: u32,
    },
    Polygon {
        shape: PixelShape,
        polygon: PolygonConfig,
    },
}

impl DrawPlan {
    fn from_command(command: &TileCommand, blank: &Canvas) -> Result<Self> {
        match command {
            TileCommand::Grid(args) => {
                let edges = EdgeSet::new(
                    !args.hide_top,
                    !args.hide_bottom,
                    !args.hide_left,
                    !args.hide_right,
                );
                let stamp = args.stamp.map(|origin| PixelStamp {
                    origin,
                    color: args.stamp_color,
                    repeats: (args.stamp_repeats.x, args.stamp_repeats.y),
                });
                Ok(Self::Grid {
                    config: ShapeConfig::new(args.thickness, edges, args.pop, args.repeat)?,
                    start: args.start,
                    stamp,
                })
            }
            TileCommand::Curve(args) => Ok(Self::Curve {
                curve: CurveConfig::new(args.from, args.control, args.to, args.thickness)?
                    .closed(args.closed)
                    .popped(args.pop),
                repeat: args.repeat,
                start: args.location,
            }),
            TileCommand::Scatter(args) => {
                let size = args.tile.width.max(args.tile.height);
                Ok(Self::Scatter {
                    curve: CurveConfig::new(args.from, args.control, args.to, args.thickness)?,
                    positions: PositionWalk::new(size, args.spacing, args.limit)?.collect(),
                })
            }
            TileCommand::Sticker(args) => {
                let mut shape = PixelShape::new(blank, args.coords.clone(), args.color, args.rounded)?;
                shape.repeat(args.count_x, args.count_y, (args.spacing.x, args.spacing.y))?;
                Ok(Self::Sticker {
                    shape,
                    radius: args.radius,
                })
            }
            TileCommand::Polygon(args) => Ok(Self::Polygon {
                shape: PixelShape::new(blank, Vec::new(), args.tile.line, false)?,
                polygon: PolygonConfig::new(
                    args.sides,
                    args.radius,
                    args.center,
                    args.fill.unwrap_or(args.tile.line),
                    args.outline,
                )?,
            }),
        }
    }

    fn draw(&self, generator: &GridPatternGenerator, canvas: &mut Canvas) -> Result<()> {
        match self {
            Self::Grid {
                config,
                start,
                stamp,
            } => {
                generator.draw_grid(canvas, config, *start);
                if let Some(stamp) = stamp {
                    stamp.apply(canvas, generator.rasterizer().style().line);
                }
            }
            Self::Curve {
                curve,
                repeat,
                start,
            } => {
                generator.draw_curves(canvas, curve, *repeat, *start);
            }
            Self::Scatter { curve, positions } => {
                for &position in positions {
                    generator
                        .rasterizer()
                        .draw_curve(canvas, &curve.translated(position));
                }
            }
            Self::Sticker { shape, radius } => {
                shape.draw(canvas, *radius)?;
            }
            Self::Polygon { shape, polygon } => {
                shape.draw_polygon(canvas, polygon)?;
            }
        }
        Ok(())
    }
}

/// Runs one command: validates it, generates the image or frames, persists
/// them and optionally opens the preview
pub struct TileRunner {
    cli: Cli,
}

impl TileRunner {
    /// Runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate and persist the requested output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any argument fails validation (nothing is written in that case)
    /// - An image cannot be written; frames written earlier stay on disk
    /// - The preview fails
    pub fn run(&self) -> Result<FrameSequence> {
        let tile = self.cli.command.tile();
        let generator = GridPatternGenerator::new(tile.width, tile.height, tile.style())?;
        let output = OutputTarget::new(&tile.output_dir, &tile.output)?;
        let plan = DrawPlan::from_command(&self.cli.command, &generator.blank_canvas()?)?;

        let mut sequence = match tile.frames {
            Some(frames) => {
                let progress = if self.cli.should_show_progress() {
                    FrameProgress::new(output.base_name(), frames.get())
                } else {
                    FrameProgress::hidden()
                };
                let sequence = generator.animate_with(
                    frames,
                    &output,
                    |index| progress.frame_done(index),
                    |canvas, _| plan.draw(&generator, canvas),
                )?;
                progress.finish();
                sequence
            }
            None => {
                let mut canvas = generator.blank_canvas()?;
                plan.draw(&generator, &mut canvas)?;
                let path = output.save(&canvas)?;
                std::iter::once(Frame::File(path)).collect()
            }
        };

        tracing::info!(
            frames = sequence.len(),
            directory = %output.directory().display(),
            "generation complete"
        );

        if tile.preview {
            Self::preview(&mut sequence, &output, tile)?;
        }
        Ok(sequence)
    }

    #[cfg(feature = "preview")]
    fn preview(sequence: &mut FrameSequence, output: &OutputTarget, tile: &TileArgs) -> Result<()> {
        use crate::io::playback::{MinifbWindow, Playback};

        let mut window = MinifbWindow::new(output.file_name(), tile.width, tile.height)?;
        Playback::new(sequence, output.clone())?.run(&mut window)
    }

    #[cfg(not(feature = "preview"))]
    #[allow(clippy::needless_pass_by_ref_mut, clippy::unnecessary_wraps)]
    fn preview(sequence: &mut FrameSequence, output: &OutputTarget, tile: &TileArgs) -> Result<()> {
        let _ = (sequence, output, tile);
        tracing::warn!("preview requested but this build lacks the `preview` feature");
        Ok(())
    }
}
