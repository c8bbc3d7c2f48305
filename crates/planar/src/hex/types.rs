//! Hex grid value types.
//!
//! Axial coordinates `(x, y)` with flat-topped hexes; the cube form is
//! `(x, −x−y, y)`. Rows grow with `y`, columns with `x`:
//!
//! ```text
//!       60  61  62  63  64  65
//!     50  51  52  53  54  55  56
//!   40  41  42  43  44  45  46  47
//! 30  31  32  33  34  35  36  37  38
//!   21  22  23  24  25  26  27  28
//!     12  13  14  15  16  17  18
//!       03  04  05  06  07  08
//! ```
//!
//! Label `yx` is `HexPoint { x, y }`, e.g. `16` is `(6, 1)`.

use std::fmt;

use crate::error::{GeomError, GeomResult};

/// A hex cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexPoint {
    pub x: i32,
    pub y: i32,
}

impl HexPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Back from widened coordinates; `CoordinateOverflow` outside the `i32` range.
    pub(super) fn from_wide(x: i64, y: i64) -> GeomResult<HexPoint> {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(HexPoint::new(x, y)),
            _ => Err(GeomError::CoordinateOverflow),
        }
    }

    /// Number of unit steps between two hexes.
    ///
    /// Computed in `i64`: two `i32` hexes can be more than `i32::MAX` steps apart.
    #[inline]
    pub fn distance(&self, other: &HexPoint) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        (dx.abs() + dy.abs() + (dx + dy).abs()) / 2
    }

    /// Cube coordinates `(x, −x−y, y)`.
    #[inline]
    pub fn to_cube(self) -> [i64; 3] {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        [x, -x - y, y]
    }

    /// Shift by `distance` steps; negative distances go the opposite way.
    ///
    /// Errors: `IncorrectDirection`, or `CoordinateOverflow` when the target
    /// leaves the `i32` grid.
    pub fn moved(&self, direction: Direction, distance: i32) -> GeomResult<HexPoint> {
        let (dx, dy) = direction.offset().ok_or(GeomError::IncorrectDirection)?;
        let k = i64::from(distance);
        HexPoint::from_wide(
            i64::from(self.x) + i64::from(dx) * k,
            i64::from(self.y) + i64::from(dy) * k,
        )
    }

    /// All hexes at exactly `radius` steps, counter-clockwise from the bottom-left corner.
    /// Hexes that fall outside the `i32` grid are left out.
    pub fn ring(&self, radius: i32) -> Vec<HexPoint> {
        if radius <= 0 {
            return vec![*self];
        }
        let r = i64::from(radius);
        let mut out = Vec::with_capacity(6 * radius as usize);
        // start at the corner reached by DownLeft steps
        let (sx, sy) = STEPS[4];
        let mut x = i64::from(self.x) + i64::from(sx) * r;
        let mut y = i64::from(self.y) + i64::from(sy) * r;
        for (dx, dy) in STEPS {
            for _ in 0..radius {
                out.extend(HexPoint::from_wide(x, y).ok());
                x += i64::from(dx);
                y += i64::from(dy);
            }
        }
        out
    }
}

impl fmt::Display for HexPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.y, self.x)
    }
}

/// Regular hexagon: every hex within `radius` steps of `center`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hexagon {
    center: HexPoint,
    radius: i32,
}

impl Hexagon {
    pub fn new(center: HexPoint, radius: i32) -> GeomResult<Self> {
        if radius < 0 {
            return Err(GeomError::NegativeRadius(f64::from(radius)));
        }
        Ok(Self { center, radius })
    }

    /// Caller guarantees `radius >= 0`.
    #[inline]
    pub(super) fn from_radius(center: HexPoint, radius: i32) -> Self {
        debug_assert!(radius >= 0);
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> HexPoint {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Steps between the closest hexes of both hexagons; 0 if they share a hex.
    pub fn distance(&self, other: &Hexagon) -> i64 {
        let reach = i64::from(self.radius) + i64::from(other.radius);
        (self.center.distance(&other.center) - reach).max(0)
    }

    /// Hex inside or on the border.
    #[inline]
    pub fn contains(&self, point: &HexPoint) -> bool {
        self.center.distance(point) <= i64::from(self.radius)
    }
}

/// Straight run between two hexes. Direction is ignored by `==`.
#[derive(Clone, Copy, Debug)]
pub struct HexSegment {
    pub begin: HexPoint,
    pub end: HexPoint,
}

impl HexSegment {
    #[inline]
    pub fn new(begin: HexPoint, end: HexPoint) -> Self {
        Self { begin, end }
    }

    /// Non-empty and parallel to one of the three grid axes.
    pub fn is_valid(&self) -> bool {
        let (b, e) = (self.begin, self.end);
        b != e && (b.x == e.x || b.y == e.y || b.to_cube()[1] == e.to_cube()[1])
    }

    pub fn direction(&self) -> Direction {
        if !self.is_valid() {
            return Direction::Incorrect;
        }
        let (b, e) = (self.begin, self.end);
        if b.y == e.y {
            if b.x > e.x {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if b.x == e.x {
            if b.y > e.y {
                Direction::DownLeft
            } else {
                Direction::UpRight
            }
        } else if b.y > e.y {
            Direction::DownRight
        } else {
            Direction::UpLeft
        }
    }
}

impl PartialEq for HexSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.begin == other.begin && self.end == other.end)
            || (self.begin == other.end && self.end == other.begin)
    }
}

impl Eq for HexSegment {}

/// Axial unit steps, indexed like `Direction::ALL`.
const STEPS: [(i32, i32); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

/// Grid direction, the first six in counter-clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// e.g. 30 -> 34
    Right,
    /// e.g. 32 -> 62
    UpRight,
    /// e.g. 25 -> 61
    UpLeft,
    /// e.g. 34 -> 30
    Left,
    /// e.g. 62 -> 32
    DownLeft,
    /// e.g. 61 -> 25
    DownRight,
    /// Bent or empty run, e.g. 30 -> 55
    Incorrect,
}

impl Direction {
    /// The six proper directions, counter-clockwise from `Right`.
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    fn index(self) -> Option<usize> {
        Direction::ALL.iter().position(|d| *d == self)
    }

    /// Axial unit step; `None` for `Incorrect`.
    pub fn offset(self) -> Option<(i32, i32)> {
        self.index().map(|i| STEPS[i])
    }

    pub fn opposite(self) -> Direction {
        match self.index() {
            Some(i) => Direction::ALL[(i + 3) % 6],
            None => Direction::Incorrect,
        }
    }

    /// Rotate 60° counter-clockwise.
    pub fn next(self) -> GeomResult<Direction> {
        let i = self.index().ok_or(GeomError::IncorrectDirection)?;
        Ok(Direction::ALL[(i + 1) % 6])
    }

    /// Same or opposite direction. `Incorrect` is parallel to nothing.
    pub fn is_parallel(self, other: Direction) -> bool {
        self != Direction::Incorrect && (self == other || self == other.opposite())
    }
}
