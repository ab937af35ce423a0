use std::cmp::Ordering;
use std::fmt;

/// A position on the unbounded plane.
/// Rows grow southwards and columns grow eastwards; both may be negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coordinate {
    row: i64,
    col: i64,
}

impl Coordinate {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> i64 {
        self.row
    }

    pub const fn col(self) -> i64 {
        self.col
    }

    /// The position `rows` south and `cols` east of this one.
    /// Like every step, it wraps at the edges of the `i64` range.
    pub const fn offset(self, rows: i64, cols: i64) -> Self {
        Self::new(self.row.wrapping_add(rows), self.col.wrapping_add(cols))
    }

    pub const fn north(self) -> Self {
        self.offset(-1, 0)
    }

    pub const fn south(self) -> Self {
        self.offset(1, 0)
    }

    pub const fn east(self) -> Self {
        self.offset(0, 1)
    }

    pub const fn west(self) -> Self {
        self.offset(0, -1)
    }

    pub const fn north_west(self) -> Self {
        self.offset(-1, -1)
    }

    pub const fn north_east(self) -> Self {
        self.offset(-1, 1)
    }

    pub const fn south_west(self) -> Self {
        self.offset(1, -1)
    }

    pub const fn south_east(self) -> Self {
        self.offset(1, 1)
    }

    /// The eight adjacent positions, read like a page:
    /// north-west, north, north-east, west, east, south-west, south, south-east.
    #[rustfmt::skip]
    pub const fn neighbors(self) -> [Coordinate; 8] {
        [
            self.north_west(), self.north(), self.north_east(),
            self.west(),       /* self */    self.east(),
            self.south_west(), self.south(), self.south_east(),
        ]
    }

    pub const fn is_north_of(self, other: Self) -> bool {
        self.row < other.row
    }

    pub const fn is_south_of(self, other: Self) -> bool {
        self.row > other.row
    }

    pub const fn is_east_of(self, other: Self) -> bool {
        self.col > other.col
    }

    pub const fn is_west_of(self, other: Self) -> bool {
        self.col < other.col
    }

    /// Number of rows (or columns, if greater) between two positions.
    ///
    /// Each axis contributes the difference of the *magnitudes* of the two
    /// coordinates, so positions on opposite sides of zero look closer than
    /// they are: rows -1 and 1 are 0 apart on that axis, not 2. This matches
    /// true Chebyshev distance only when both positions share a sign on each
    /// axis. Evolution and rendering both depend on this exact measure.
    pub const fn distance(self, other: Self) -> u64 {
        let rows = self.row.unsigned_abs().abs_diff(other.row.unsigned_abs());
        let cols = self.col.unsigned_abs().abs_diff(other.col.unsigned_abs());
        if rows > cols { rows } else { cols }
    }

    /// West-first ordering: columns only, equal columns compare equal.
    pub fn cmp_west_first(&self, other: &Self) -> Ordering {
        if self.is_west_of(*other) {
            Ordering::Less
        } else if self.is_east_of(*other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// A position precedes those south of it, and those level with it but east of it.
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (*self, *other);
        if a.is_north_of(b) || (a.is_west_of(b) && !a.is_south_of(b)) {
            Ordering::Less
        } else if a.is_south_of(b) || (a.is_east_of(b) && !a.is_north_of(b)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}
