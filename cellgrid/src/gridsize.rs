use std::ops;
use std::fmt;

#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub const ZERO: GridSize = GridSize { width: 0, height: 0 };

    pub const fn new(width: i32, height: i32) -> Self {
        GridSize { width, height }
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }
}

impl ops::Add<GridSize> for GridSize {
    type Output = GridSize;

    fn add(self, rhs: GridSize) -> GridSize {
        GridSize { width: self.width + rhs.width, height: self.height + rhs.height }
    }
}

impl ops::Sub<GridSize> for GridSize {
    type Output = GridSize;

    fn sub(self, rhs: GridSize) -> GridSize {
        GridSize { width: self.width - rhs.width, height: self.height - rhs.height }
    }
}

impl ops::Mul<i32> for GridSize {
    type Output = GridSize;

    fn mul(self, rhs: i32) -> GridSize {
        GridSize { width: self.width * rhs, height: self.height * rhs }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
