//! Drawing [`embedded_graphics`] content with the beam
//!
//! The screen is a 256x256 [`BinaryColor`] target. `On` pixels become beam positions,
//! `Off` pixels are skipped because the beam cannot be blanked. Text and primitives
//! therefore show up as a trail of dots in drawing order.
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::vectrex::channel::ChannelOutput;
use crate::vectrex::coord::Coord;
use crate::vectrex::driver::OscilloVectrex;
use crate::vectrex::error::VectrexError;
use crate::vectrex::{COORD_MAX, COORD_MIN, LEVELS};

/// Beam coordinate for an embedded-graphics point
///
/// embedded-graphics puts (0, 0) at the top-left with y growing downwards, the beam has
/// (-127, 128) there with y growing upwards. Points off the screen give `None`.
pub fn to_coord(point: Point) -> Option<Coord> {
    let x = i16::try_from(point.x).ok()?.checked_add(COORD_MIN)?;
    let y = COORD_MAX.checked_sub(i16::try_from(point.y).ok()?)?;
    let coord = Coord::new(x, y);
    coord.in_range().then_some(coord)
}

/// embedded-graphics point for a beam coordinate
pub fn to_point(coord: Coord) -> Point {
    Point::new(
        i32::from(coord.x) - i32::from(COORD_MIN),
        i32::from(COORD_MAX) - i32::from(coord.y),
    )
}

impl<OUT: ChannelOutput> OriginDimensions for OscilloVectrex<OUT> {
    fn size(&self) -> Size {
        Size::new(LEVELS, LEVELS)
    }
}

impl<OUT: ChannelOutput> DrawTarget for OscilloVectrex<OUT> {
    type Color = BinaryColor;
    type Error = VectrexError<OUT::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_off() {
                continue;
            }
            if let Some(coord) = to_coord(point) {
                self.move_to(coord)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectrex::mock::RecordingOutput;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn corners_map_to_screen_corners() {
        assert_eq!(to_coord(Point::new(0, 0)), Some(Coord::new(-127, 128)));
        assert_eq!(to_coord(Point::new(255, 255)), Some(Coord::new(128, -127)));
        assert_eq!(to_coord(Point::new(127, 128)), Some(Coord::ORIGIN));
    }

    #[test]
    fn off_screen_points_have_no_coord() {
        assert_eq!(to_coord(Point::new(-1, 0)), None);
        assert_eq!(to_coord(Point::new(0, 256)), None);
        assert_eq!(to_coord(Point::new(i32::MAX, 0)), None);
    }

    #[test]
    fn point_mapping_inverts() {
        for coord in [Coord::new(-127, 128), Coord::new(40, -3), Coord::new(128, -127)] {
            assert_eq!(to_coord(to_point(coord)), Some(coord));
        }
    }

    #[test]
    fn off_screen_coords_map_outside_the_screen() {
        assert_eq!(to_point(Coord::new(i16::MAX, 0)), Point::new(32894, 128));
        assert_eq!(to_point(Coord::new(i16::MIN, i16::MIN)), Point::new(-32641, 32896));
        assert_eq!(to_coord(to_point(Coord::new(i16::MAX, i16::MAX))), None);
    }

    #[test]
    fn draws_only_lit_pixels_on_screen() {
        let output = RecordingOutput::new();
        let probe = output.clone();
        let mut vectrex = OscilloVectrex::new(output);
        vectrex.begin().unwrap();
        probe.clear();

        vectrex
            .draw_iter([
                Pixel(Point::new(0, 0), BinaryColor::On),
                Pixel(Point::new(10, 10), BinaryColor::Off),
                Pixel(Point::new(300, 10), BinaryColor::On),
            ])
            .unwrap();

        assert_eq!(probe.points(Coord::ORIGIN), vec![Coord::new(-127, 128)]);
    }

    #[test]
    fn primitives_trace_the_beam() {
        let output = RecordingOutput::new();
        let probe = output.clone();
        let mut vectrex = OscilloVectrex::new(output);
        vectrex.begin().unwrap();
        probe.clear();

        Line::new(Point::new(127, 128), Point::new(130, 128))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut vectrex)
            .unwrap();

        assert_eq!(vectrex.current_point(), Coord::new(3, 0));
        assert_eq!(vectrex.size(), Size::new(256, 256));
        assert_eq!(probe.points(Coord::ORIGIN).len(), 3);
    }
}
