/// Frame geometry of a surface in logical pixels.
///
/// Snapshots are plain values: the controller copies them into animation
/// endpoints, so later changes to a surface never alter a running request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size as a `(width, height)` pair.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Center point, used as the endpoint of position tracks.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn resized(&self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..*self
        }
    }
}
