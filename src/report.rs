//! Presentation of the first `end` enumerated fractions: a console table, JSON lines, and a
//! scatter chart of the visited lattice points.

use std::io::{self, Write};

use chart::{Backend, Coord};
use serde::Serialize;

use crate::enumeration::rationals;
use crate::fraction::Fraction;
use crate::lattice::{LatticePoint, Walk};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Row {
    pub index: u64,
    #[serde(flatten)]
    pub fraction: Fraction,
}

/// The first `end` enumerated fractions.
pub fn rows(end: u64) -> impl Iterator<Item = Row> {
    rationals()
        .take_while(move |&(index, _)| index <= end)
        .map(|(index, fraction)| Row { index, fraction })
}

/// One line per fraction: the index left-aligned to the width of `end`, then `n / d`.
pub fn write_table(out: &mut impl Write, end: u64) -> io::Result<()> {
    let width = end.to_string().len();
    for Row { index, fraction } in rows(end) {
        writeln!(
            out,
            "{index:<width$}: {:>8} / {}",
            fraction.numerator(),
            fraction.denominator()
        )?;
    }
    Ok(())
}

pub fn write_json_lines(out: &mut impl Write, end: u64) -> io::Result<()> {
    for row in rows(end) {
        serde_json::to_writer(&mut *out, &row)?;
        writeln!(out)?;
    }
    Ok(())
}

fn coord(p: LatticePoint) -> Coord {
    let clamp = |x: u64| u32::try_from(x).unwrap_or(u32::MAX);
    (clamp(p.numerator()), clamp(p.denominator()))
}

/// Lattice points visited up to the `end`-th fraction, and the enumerated ones among them.
fn visited(end: u64) -> (Vec<Coord>, Vec<Coord>) {
    let mut path = Vec::new();
    let mut points = Vec::new();
    for v in Walk::new() {
        if points.len() as u64 >= end {
            break;
        }
        path.push(coord(v.point));
        if v.index.is_some() {
            points.push(coord(v.point));
        }
    }
    (path, points)
}

/// Draw the first `end` enumerated fractions as `(n, d)` dots on a square grid. With
/// `draw_walk`, the path of the walk through every visited lattice point is drawn underneath.
pub fn plot<B: Backend>(backend: &mut B, end: u64, draw_walk: bool) -> Result<(), B::Error> {
    let (path, points) = visited(end);
    let max = path.iter().map(|&(x, y)| x.max(y)).max().unwrap_or(0);
    tracing::info!(end, max, ext = B::EXT, "plotting enumeration");

    backend.init(max)?;
    if draw_walk {
        backend.polyline(&path, "walk")?;
    }
    for p in points {
        backend.point(p)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stop_at_end() {
        assert_eq!(rows(0).count(), 0);
        let last = rows(12).last().unwrap();
        assert_eq!(last.index, 12);
        assert_eq!(last.fraction.to_string(), "6/1");
    }

    #[test]
    fn path_ends_at_last_fraction() {
        let (path, points) = visited(5);
        assert_eq!(points, [(1, 1), (2, 1), (1, 2), (1, 3), (3, 1)]);
        assert_eq!(path, [(1, 1), (2, 1), (1, 2), (1, 3), (2, 2), (3, 1)]);
    }

    #[test]
    fn json_lines() {
        let mut out = Vec::new();
        write_json_lines(&mut out, 3).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                r#"{"index":1,"numerator":1,"denominator":1}"#,
                "\n",
                r#"{"index":2,"numerator":2,"denominator":1}"#,
                "\n",
                r#"{"index":3,"numerator":1,"denominator":2}"#,
                "\n",
            )
        );
    }
}
