/// A pixel position: `x` is the column, `y` the row (row 0 at the top).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
