//! The boustrophedon walk over the positive integer lattice.
//!
//! Starting at `(1, 1)`, the walk runs along the anti-diagonals `n + d = 2, 3, 4, ...`, turning
//! around whenever it reaches an axis:
//!
//! ```text
//!  d
//!  4 | 1/4  ...
//!  3 | 1/3  2/3 ...
//!  2 | 1/2  2/2  3/2
//!  1 | 1/1  2/1  3/1  4/1
//!    +------------------- n
//! ```
//!
//! The visiting order is `1/1, 2/1, 1/2, 1/3, 2/2, 3/1, 4/1, 3/2, ...`. Every point is visited
//! exactly once, and a point is assigned a sequence number iff it is irreducible.

use std::fmt::{self, Display, Formatter};

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// A point `(n, d)` of the walk. Both coordinates are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticePoint {
    numerator: u64,
    denominator: u64,
}

impl LatticePoint {
    pub const ORIGIN: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Returns `None` if either coordinate is zero.
    pub fn new(numerator: u64, denominator: u64) -> Option<Self> {
        if numerator == 0 || denominator == 0 {
            None
        } else {
            Some(Self {
                numerator,
                denominator,
            })
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// The anti-diagonal `n + d` this point lies on. The walk exhausts each diagonal before
    /// moving to the next one.
    pub fn diagonal(&self) -> u64 {
        self.numerator + self.denominator
    }

    pub fn is_irreducible(&self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }
}

impl Display for LatticePoint {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.numerator, self.denominator)
    }
}

/// Direction of travel along the current diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+1`: numerator increases, denominator decreases.
    Ascending,
    /// `-1`: numerator decreases, denominator increases.
    Descending,
}

/// The complete state of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraversalState {
    point: LatticePoint,
    direction: Direction,
    /// Number of irreducible points visited strictly before `point`.
    count: u64,
}

impl Default for TraversalState {
    fn default() -> Self {
        Self::start()
    }
}

impl TraversalState {
    pub const fn start() -> Self {
        Self {
            point: LatticePoint::ORIGIN,
            direction: Direction::Ascending,
            count: 0,
        }
    }

    pub fn point(&self) -> LatticePoint {
        self.point
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Visit the current point and move on to the next one. Returns the sequence number of the
    /// visited point if it is irreducible.
    pub fn step(&mut self) -> Option<u64> {
        let index = if self.point.is_irreducible() {
            self.count += 1;
            Some(self.count)
        } else {
            None
        };
        self.advance();
        index
    }

    /// Move one lattice step without visiting. Reaching the `d = 1` edge while ascending, or the
    /// `n = 1` edge while descending, starts the next diagonal and reverses direction.
    fn advance(&mut self) {
        let LatticePoint {
            numerator: n,
            denominator: d,
        } = self.point;

        let (n, d, direction) = match self.direction {
            Direction::Ascending if d == 1 => (n + 1, 1, Direction::Descending),
            Direction::Descending if n == 1 => (1, d + 1, Direction::Ascending),
            Direction::Ascending => (n + 1, d - 1, Direction::Ascending),
            Direction::Descending => (n - 1, d + 1, Direction::Descending),
        };
        self.direction = direction;
        self.point = LatticePoint {
            numerator: n,
            denominator: d,
        };
    }
}

/// One visited lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub point: LatticePoint,
    /// The sequence number, if `point` is irreducible.
    pub index: Option<u64>,
}

/// Infinite iterator over every lattice point in walk order.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    state: TraversalState,
}

impl Walk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume the walk from a previously captured state.
    pub fn from_state(state: TraversalState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }
}

impl Iterator for Walk {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let point = self.state.point;
        let index = self.state.step();
        Some(Visit { point, index })
    }
}
