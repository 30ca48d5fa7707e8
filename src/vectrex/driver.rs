//! OscilloVectrex beam controller
//!
//! This module contains the controller that owns the beam position and turns drawing
//! calls into level writes on the two DAC channels.
//!
//! ## Architecture
//!
//! The controller is organized into several function categories:
//!
//! ### Setup Functions
//! - `new()` - Wrap a channel output, beam recorded at the origin
//! - `begin()` - Enable both channels and park the beam at the origin
//! - `end()` - Disable both channels (also done on drop)
//!
//! ### Point Moves
//! - `move_to()` - Move the beam, both axes are written unless nothing changed
//! - `set_x()` / `set_y()` - Move along one axis only, skipped when unchanged
//!
//! ### Lines
//! - `line()` / `line_to()` - Bresenham line, delegates to the fast paths below
//! - `h_line()` / `h_line_to()` - Horizontal run, writes the X channel only
//! - `v_line()` / `v_line_to()` - Vertical run, writes the Y channel only
//!
//! ### Shapes
//! - `rect()` - Four lines, ends where it started
//! - `arc()` - Circular arc through two points
//!
//! ## Write Discipline
//!
//! Every write costs settling time and leaves a visible trace on the screen. A move to
//! the current position writes nothing, `set_x`/`set_y` only write their own channel,
//! and the axis-aligned runs never touch the other channel.
//!
//! Shapes check all of their points before the first write, so a shape that does not
//! fit the screen leaves the beam untouched.

use core::f32::consts::TAU;

use crate::vectrex::channel::{encode, Channel, ChannelOutput};
use crate::vectrex::coord::Coord;
use crate::vectrex::error::VectrexError;
use crate::vectrex::LEVELS;

/// Result of a beam operation for a channel output with error `E`
pub type DrawResult<E> = Result<(), VectrexError<E>>;

/// OscilloVectrex beam controller
///
/// ## Type Parameters
///
/// - `OUT` - the analog output driving the X and Y channels
pub struct OscilloVectrex<OUT: ChannelOutput> {
    /// The channel output
    output: OUT,
    /// Last position written to both channels
    current: Coord,
    /// Channels were enabled by `begin()` and not yet disabled
    enabled: bool,
}

impl<OUT: ChannelOutput> OscilloVectrex<OUT> {
    /// Create the controller, the beam is recorded at the origin
    ///
    /// Nothing is written until [`OscilloVectrex::begin`].
    pub fn new(output: OUT) -> Self {
        OscilloVectrex {
            output,
            current: Coord::ORIGIN,
            enabled: false,
        }
    }

    /// Start up the DACs
    ///
    /// Enables X then Y and writes the recorded position to both, so the beam record
    /// matches the output from here on.
    pub fn begin(&mut self) -> DrawResult<OUT::Error> {
        log::info!("Starting DAC channels");

        self.enable(Channel::X)?;
        self.enabled = true;
        self.enable(Channel::Y)?;

        let Coord { x, y } = self.current;
        self.write_channel(Channel::X, x)?;
        self.write_channel(Channel::Y, y)?;

        log::info!("Beam parked at {}", self.current);
        Ok(())
    }

    /// Shut down the DACs
    ///
    /// Both channels are disabled even if the first one fails, the first error is returned.
    pub fn end(&mut self) -> DrawResult<OUT::Error> {
        log::info!("Shutting down DAC channels");
        self.enabled = false;

        let x = self.disable(Channel::X);
        let y = self.disable(Channel::Y);
        x.and(y)
    }

    /// Channels are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Copy of the beam position
    pub fn current_point(&self) -> Coord {
        self.current
    }

    /// The channel output
    pub fn output(&self) -> &OUT {
        &self.output
    }

    /// The channel output, mutable
    ///
    /// Writing levels directly leaves the beam record stale.
    pub fn output_mut(&mut self) -> &mut OUT {
        &mut self.output
    }

    /// Move the beam to a new point on the screen.
    ///
    /// Move is instant, no line is being drawn (well, very slightly) between the points.
    /// If the connection is to be bright, draw all points in between, see [`Self::line`].
    ///
    /// Writes nothing when the beam is already there, otherwise writes both axes.
    pub fn move_to(&mut self, point: impl Into<Coord>) -> DrawResult<OUT::Error> {
        let point = point.into();
        self.check_point(point)?;

        if point.equals(Some(&self.current)) {
            return Ok(());
        }

        self.write_channel(Channel::X, point.x)?;
        self.current.x = point.x;
        self.write_channel(Channel::Y, point.y)?;
        self.current.y = point.y;
        Ok(())
    }

    /// Set only new x coordinate for beam, written only when it changes
    pub fn set_x(&mut self, x: i16) -> DrawResult<OUT::Error> {
        if x == self.current.x {
            return Ok(());
        }
        self.write_channel(Channel::X, x)?;
        self.current.x = x;
        Ok(())
    }

    /// Set only new y coordinate for beam, written only when it changes
    pub fn set_y(&mut self, y: i16) -> DrawResult<OUT::Error> {
        if y == self.current.y {
            return Ok(());
        }
        self.write_channel(Channel::Y, y)?;
        self.current.y = y;
        Ok(())
    }

    /// Draw a line from `start` to `end`
    ///
    /// Algorithm based on [Bresenham's line algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm).
    /// Horizontal and vertical lines go to the (much faster) [`Self::h_line`] and
    /// [`Self::v_line`]. A line that starts where it ends draws nothing.
    pub fn line(
        &mut self,
        start: impl Into<Coord>,
        end: impl Into<Coord>,
    ) -> DrawResult<OUT::Error> {
        let (start, end) = (start.into(), end.into());
        self.check_point(start)?;
        self.check_point(end)?;

        if start == end {
            return Ok(());
        }
        if start.y == end.y {
            return self.h_line(start, end.x);
        }
        if start.x == end.x {
            return self.v_line(start, end.y);
        }

        log::debug!("Line from {} to {}", start, end);

        // Walk along the longer axis
        let (mut x_start, mut y_start, mut x_end, mut y_end) = (start.x, start.y, end.x, end.y);
        let steep = (y_end - y_start).abs() > (x_end - x_start).abs();
        if steep {
            (x_start, y_start) = (y_start, x_start);
            (x_end, y_end) = (y_end, x_end);
        }

        let dx = (x_end - x_start).abs();
        let dy = (y_end - y_start).abs();
        let mut err = dx / 2;

        let x_step = if x_start > x_end { -1 } else { 1 };
        let y_step = if y_start > y_end { -1 } else { 1 };

        self.move_to(start)?;

        let (mut x, mut y) = (x_start, y_start);
        while x != x_end {
            err -= dy;
            if err < 0 {
                y += y_step;
                err += dx;
            }
            x += x_step;

            if steep {
                self.move_to((y, x))?;
            } else {
                self.move_to((x, y))?;
            }
        }
        Ok(())
    }

    /// Draw a line from the current position to `end`
    pub fn line_to(&mut self, end: impl Into<Coord>) -> DrawResult<OUT::Error> {
        self.line(self.current, end)
    }

    /// Draw horizontal line from `start` to `x_end`, `start.y` is used for the complete line
    pub fn h_line(&mut self, start: impl Into<Coord>, x_end: i16) -> DrawResult<OUT::Error> {
        let start = start.into();
        self.check_point(start)?;
        self.check(Channel::X, x_end)?;

        log::debug!("Horizontal line from {} to x {}", start, x_end);
        self.move_to(start)?;
        self.h_line_to(x_end)
    }

    /// Draw horizontal line from current position to `x_end`
    pub fn h_line_to(&mut self, x_end: i16) -> DrawResult<OUT::Error> {
        self.check(Channel::X, x_end)?;

        let step = if self.current.x > x_end { -1 } else { 1 };
        while self.current.x != x_end {
            let x = self.current.x + step;
            self.set_x(x)?;
        }
        Ok(())
    }

    /// Draw vertical line from `start` to `y_end`, `start.x` is used for the complete line
    pub fn v_line(&mut self, start: impl Into<Coord>, y_end: i16) -> DrawResult<OUT::Error> {
        let start = start.into();
        self.check_point(start)?;
        self.check(Channel::Y, y_end)?;

        log::debug!("Vertical line from {} to y {}", start, y_end);
        self.move_to(start)?;
        self.v_line_to(y_end)
    }

    /// Draw vertical line from current position to `y_end`
    pub fn v_line_to(&mut self, y_end: i16) -> DrawResult<OUT::Error> {
        self.check(Channel::Y, y_end)?;

        let step = if self.current.y > y_end { -1 } else { 1 };
        while self.current.y != y_end {
            let y = self.current.y + step;
            self.set_y(y)?;
        }
        Ok(())
    }

    /// Draw a rectangle with opposite corners `p1` and `p2`
    ///
    /// Runs from `p1` through (p2.x, p1.y), `p2` and (p1.x, p2.y) back to `p1`.
    pub fn rect(&mut self, p1: impl Into<Coord>, p2: impl Into<Coord>) -> DrawResult<OUT::Error> {
        let (p1, p2) = (p1.into(), p2.into());
        self.check_point(p1)?;
        self.check_point(p2)?;

        log::debug!("Rectangle from {} to {}", p1, p2);
        self.move_to(p1)?;
        self.line_to((p2.x, p1.y))?;
        self.line_to(p2)?;
        self.line_to((p1.x, p2.y))?;
        self.line_to(p1)
    }

    /// Draw an arc from `start` to `end`
    ///
    /// `angle` is the angle the arc subtends, in steps of 1/256 turn, sweeping
    /// counter-clockwise from `start`. The curve is traced as straight lines between
    /// points one step apart.
    ///
    /// An `angle` of 0 draws the straight line between the points. When `start` and
    /// `end` are the same point there is no circle to follow and the beam only moves there.
    pub fn arc(
        &mut self,
        start: impl Into<Coord>,
        end: impl Into<Coord>,
        angle: u8,
    ) -> DrawResult<OUT::Error> {
        let (start, end) = (start.into(), end.into());
        self.check_point(start)?;
        self.check_point(end)?;

        if angle == 0 {
            return self.line(start, end);
        }
        if start == end {
            return self.move_to(start);
        }

        let vertices = arc_vertices(start, end, angle);
        for vertex in &vertices {
            self.check_point(*vertex)?;
        }

        log::debug!(
            "Arc from {} to {} over {} steps ({} vertices)",
            start,
            end,
            angle,
            vertices.len()
        );
        self.move_to(start)?;
        for vertex in vertices {
            self.line_to(vertex)?;
        }
        Ok(())
    }

    fn enable(&mut self, channel: Channel) -> DrawResult<OUT::Error> {
        self.output
            .enable_channel(channel)
            .map_err(|error| VectrexError::Output { channel, error })
    }

    fn disable(&mut self, channel: Channel) -> DrawResult<OUT::Error> {
        self.output
            .disable_channel(channel)
            .map_err(|error| VectrexError::Output { channel, error })
    }

    /// Level for `value` on `channel`
    fn check(&self, channel: Channel, value: i16) -> Result<u8, VectrexError<OUT::Error>> {
        encode(value).ok_or(VectrexError::OutOfRange { channel, value })
    }

    fn check_point(&self, point: Coord) -> DrawResult<OUT::Error> {
        self.check(Channel::X, point.x)?;
        self.check(Channel::Y, point.y)?;
        Ok(())
    }

    fn write_channel(&mut self, channel: Channel, value: i16) -> DrawResult<OUT::Error> {
        let level = self.check(channel, value)?;
        log::trace!("{} <- {} (level {})", channel, value, level);
        self.output
            .write_level(channel, level)
            .map_err(|error| VectrexError::Output { channel, error })
    }
}

impl<OUT: ChannelOutput> Drop for OscilloVectrex<OUT> {
    fn drop(&mut self) {
        if self.enabled {
            if let Err(e) = self.end() {
                log::warn!("Failed to shut down DAC channels: {}", e);
            }
        }
    }
}

/// Points one step apart along the arc, `start` excluded and `end` included
///
/// The center lies on the perpendicular bisector of the chord, at a distance chosen so
/// the chord subtends `angle` steps. Past a half turn the center crosses the chord.
fn arc_vertices(start: Coord, end: Coord, angle: u8) -> Vec<Coord> {
    let steps = LEVELS as f32;
    let (sx, sy) = (f32::from(start.x), f32::from(start.y));
    let (ex, ey) = (f32::from(end.x), f32::from(end.y));

    let (vx, vy) = (ex - sx, ey - sy);
    let chord = vx.hypot(vy);
    let sweep = f32::from(angle) * TAU / steps;

    // Signed distance from the chord midpoint to the center, to the left of start -> end
    let offset = (chord / 2.0) / (sweep / 2.0).tan();
    let cx = (sx + ex) / 2.0 - vy / chord * offset;
    let cy = (sy + ey) / 2.0 + vx / chord * offset;
    let radius = (sx - cx).hypot(sy - cy);
    let first = (sy - cy).atan2(sx - cx);

    (1..angle)
        .map(|step| {
            let (sin, cos) = (first + f32::from(step) * TAU / steps).sin_cos();
            Coord::new(
                (cx + radius * cos).round() as i16,
                (cy + radius * sin).round() as i16,
            )
        })
        .chain(core::iter::once(end))
        .collect()
}
