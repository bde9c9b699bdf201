use std::ops;
use std::fmt;

#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ScenePoint {
    pub x: f32,
    pub y: f32,
}

#[derive(PartialEq, Debug, Copy, Clone)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl ScenePoint {
    pub const ZERO: ScenePoint = ScenePoint { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        ScenePoint { x, y }
    }
}

impl CellSize {
    pub const fn new(width: f32, height: f32) -> Self {
        CellSize { width, height }
    }

    pub const fn square(side: f32) -> Self {
        CellSize { width: side, height: side }
    }
}

impl ops::Add<ScenePoint> for ScenePoint {
    type Output = ScenePoint;

    fn add(self, rhs: ScenePoint) -> ScenePoint {
        ScenePoint { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl ops::Sub<ScenePoint> for ScenePoint {
    type Output = ScenePoint;

    fn sub(self, rhs: ScenePoint) -> ScenePoint {
        ScenePoint { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl ops::Mul<f32> for ScenePoint {
    type Output = ScenePoint;

    fn mul(self, rhs: f32) -> ScenePoint {
        ScenePoint { x: self.x * rhs, y: self.y * rhs }
    }
}

impl fmt::Display for ScenePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
