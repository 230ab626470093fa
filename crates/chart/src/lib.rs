//! Square lattice charts in vector formats.
//!
//! A chart is drawn on the grid `[0, max] x [0, max]`. Both axes share the same extent, so the
//! output always has a square aspect ratio.

use std::{fmt::Display, io};

/// A point on the chart grid, as `(x, y)`.
pub type Coord = (u32, u32);

pub enum Orientation {
    Left,
    Below,
}

pub trait Backend {
    type Error;

    /// If the backend writes to a file, this is the extension commonly taken by the file type
    const EXT: &'static str = "";

    fn header(&mut self, max: u32) -> Result<(), Self::Error>;
    fn line(&mut self, start: Coord, end: Coord, style: &str) -> Result<(), Self::Error>;

    fn text(
        &mut self,
        at: Coord,
        content: impl Display,
        orientation: Orientation,
    ) -> Result<(), Self::Error>;

    /// Draw a single dot. Points outside the grid are silently dropped.
    fn point(&mut self, at: Coord) -> Result<(), Self::Error>;

    /// Write the header and the grid. Every fourth line is a major line and carries a label.
    fn init(&mut self, max: u32) -> Result<(), Self::Error> {
        self.header(max)?;

        for i in 0..=max {
            let style = if i % 4 == 0 { "major-grid" } else { "grid" };
            self.line((i, 0), (i, max), style)?;
            self.line((0, i), (max, i), style)?;
            if i % 4 == 0 {
                self.text((i, 0), i, Orientation::Below)?;
                self.text((0, i), i, Orientation::Left)?;
            }
        }
        Ok(())
    }

    /// Join consecutive points with line segments.
    fn polyline(&mut self, points: &[Coord], style: &str) -> Result<(), Self::Error> {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], style)?;
        }
        Ok(())
    }

    /// Write the closing tag and flush. Dropping an unfinished backend closes it too, but
    /// discards any error.
    fn finish(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}

pub struct SvgBackend<T: io::Write> {
    out: T,
    max: u32,
    closed: bool,
}

impl<T: io::Write> SvgBackend<T> {
    const GRID_WIDTH: u32 = 20;
    const MARGIN: u32 = 30;
    const RADIUS: f32 = 3.0;
    const STYLES: &'static str = r#"
    circle {
        fill: #89c9c8;
    }
    .walk {
        stroke: black;
        opacity: 40%;
        fill: none;
    }
    .major-grid {
        stroke: black;
        opacity: 20%;
        shape-rendering: crispEdges;
        fill: none;
    }
    .grid {
        stroke: black;
        opacity: 10%;
        shape-rendering: crispEdges;
        fill: none;
    }
    .x-label {
     text-anchor: middle;
     dominant-baseline: text-before-edge;
    }
    .y-label {
     text-anchor: end;
     dominant-baseline: middle;
    }
    "#;

    pub fn new(out: T) -> Self {
        Self {
            out,
            max: 0,
            closed: false,
        }
    }

    fn side(&self) -> u32 {
        self.max * Self::GRID_WIDTH + 2 * Self::MARGIN
    }

    /// Pixel position of a grid point. SVG puts the origin at the top-left.
    fn pixel(&self, (x, y): Coord) -> (u32, u32) {
        (
            Self::MARGIN + x * Self::GRID_WIDTH,
            Self::MARGIN + (self.max - y) * Self::GRID_WIDTH,
        )
    }

    fn contains(&self, (x, y): Coord) -> bool {
        x <= self.max && y <= self.max
    }
}

impl<T: io::Write> Backend for SvgBackend<T> {
    type Error = io::Error;

    const EXT: &'static str = "svg";

    fn header(&mut self, max: u32) -> Result<(), Self::Error> {
        self.max = max;
        let side = self.side();

        writeln!(
            self.out,
            r#"<svg version = "1.1" width="{side}" height="{side}" xmlns="http://www.w3.org/2000/svg">"#,
        )?;
        writeln!(self.out, "<style>{}</style>", Self::STYLES)
    }

    fn line(&mut self, start: Coord, end: Coord, style: &str) -> Result<(), Self::Error> {
        if !self.contains(start) || !self.contains(end) {
            return Ok(());
        }
        let (start_x, start_y) = self.pixel(start);
        let (end_x, end_y) = self.pixel(end);

        writeln!(
            self.out,
            r#"<line class="{style}" x1="{start_x}" x2="{end_x}" y1="{start_y}" y2="{end_y}" />"#,
        )
    }

    fn text(
        &mut self,
        at: Coord,
        content: impl Display,
        orientation: Orientation,
    ) -> Result<(), Self::Error> {
        let ((dx, dy), class) = match orientation {
            Orientation::Left => ((-5, 0), "y-label"),
            Orientation::Below => ((0, 3), "x-label"),
        };
        let (x, y) = self.pixel(at);

        writeln!(
            self.out,
            r#"<text class="{class}" x="{x}" y="{y}">{content}</text>"#,
            x = x as i64 + dx,
            y = y as i64 + dy,
        )
    }

    fn point(&mut self, at: Coord) -> Result<(), Self::Error> {
        if !self.contains(at) {
            return Ok(());
        }
        let (x, y) = self.pixel(at);
        writeln!(
            self.out,
            r#"<circle cx="{x}" cy="{y}" r="{r}"/>"#,
            r = Self::RADIUS
        )
    }

    fn finish(mut self) -> Result<(), Self::Error> {
        self.close()
    }
}

impl<T: io::Write> SvgBackend<T> {
    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        writeln!(self.out, "</svg>")?;
        self.out.flush()
    }
}

impl<T: io::Write> Drop for SvgBackend<T> {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.close();
        }
    }
}

pub struct TikzBackend<T: io::Write> {
    out: T,
    max: u32,
    closed: bool,
}

impl<T: io::Write> TikzBackend<T> {
    const HEADER: &'static str = r"\begin{tikzpicture}[
  major-grid/.style={ opacity = 0.2 },
  grid/.style={ opacity = 0.1 },
  walk/.style={ opacity = 0.4 },
]";

    pub fn new(out: T) -> Self {
        Self {
            out,
            max: 0,
            closed: false,
        }
    }

    fn contains(&self, (x, y): Coord) -> bool {
        x <= self.max && y <= self.max
    }
}

impl<T: io::Write> Backend for TikzBackend<T> {
    type Error = io::Error;

    const EXT: &'static str = "tex";

    fn header(&mut self, max: u32) -> Result<(), Self::Error> {
        self.max = max;
        writeln!(self.out, "{}", Self::HEADER)
    }

    fn line(&mut self, start: Coord, end: Coord, style: &str) -> Result<(), Self::Error> {
        if !self.contains(start) || !self.contains(end) {
            return Ok(());
        }
        writeln!(
            self.out,
            r#"\draw [{style}] ({start_x}, {start_y}) -- ({end_x}, {end_y});"#,
            start_x = start.0,
            start_y = start.1,
            end_x = end.0,
            end_y = end.1,
        )
    }

    fn text(
        &mut self,
        (x, y): Coord,
        content: impl Display,
        orientation: Orientation,
    ) -> Result<(), Self::Error> {
        let offset = match orientation {
            Orientation::Left => "left",
            Orientation::Below => "below",
        };

        writeln!(self.out, r#"\node [{offset}] at ({x}, {y}) {{{content}}};"#)
    }

    fn point(&mut self, at: Coord) -> Result<(), Self::Error> {
        if !self.contains(at) {
            return Ok(());
        }
        writeln!(
            self.out,
            r#"\draw [fill] ({x}, {y}) circle (0.1);"#,
            x = at.0,
            y = at.1
        )
    }

    fn finish(mut self) -> Result<(), Self::Error> {
        self.close()
    }
}

impl<T: io::Write> TikzBackend<T> {
    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        writeln!(self.out, r#"\end{{tikzpicture}}"#)?;
        self.out.flush()
    }
}

impl<T: io::Write> Drop for TikzBackend<T> {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.close();
        }
    }
}
