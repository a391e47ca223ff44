//! CIE 1931 chromaticity coordinates, bytes 25..=34.

use crate::{
    block::EdidBlock,
    errors::ReadError,
    fragment::Fragment,
    layout,
    report::{Render, Report},
};

/// 10-bit binary fraction in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "f64"))]
pub struct Coordinate(pub u16);

impl Coordinate {
    fn parse(block: &EdidBlock<'_>, fragments: &[Fragment]) -> Result<Self, ReadError> {
        Ok(Self(block.assemble(fragments)? as u16))
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 1024.0
    }
}

impl From<Coordinate> for f64 {
    fn from(value: Coordinate) -> Self {
        value.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chromaticity {
    pub red: Point,
    pub green: Point,
    pub blue: Point,
    pub white: Point,
}

impl Chromaticity {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        let point = |x: &[Fragment], y: &[Fragment]| -> Result<Point, ReadError> {
            Ok(Point {
                x: Coordinate::parse(block, x)?,
                y: Coordinate::parse(block, y)?,
            })
        };

        Ok(Self {
            red: point(layout::RED_X, layout::RED_Y)?,
            green: point(layout::GREEN_X, layout::GREEN_Y)?,
            blue: point(layout::BLUE_X, layout::BLUE_Y)?,
            white: point(layout::WHITE_X, layout::WHITE_Y)?,
        })
    }
}

impl Render for Chromaticity {
    fn render(&self, report: &mut Report) {
        report.push("Color Characteristics (Chromaticity Coordinates):");
        for (name, point) in [
            ("Red  ", self.red),
            ("Green", self.green),
            ("Blue ", self.blue),
            ("White", self.white),
        ] {
            report.push(format!(
                "  {name} : (X = {:.4}, Y = {:.4})",
                point.x.value(),
                point.y.value()
            ));
        }
    }
}
