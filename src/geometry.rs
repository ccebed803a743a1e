//! Basic geometry value types used for hit testing and frame computation.

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inset the rectangle by the given amounts on each axis.
    ///
    /// A positive inset shrinks the rectangle towards its center. Width and
    /// height never go below zero.
    pub fn inset_by(&self, dx: f32, dy: f32) -> Rectangle {
        Rectangle::new(
            self.x + dx,
            self.y + dy,
            (self.width - dx * 2.0).max(0.0),
            (self.height - dy * 2.0).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_includes_edges() {
        let rect = Rectangle::new(10.0, 10.0, 20.0, 10.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(30.0, 20.0)));
        assert!(rect.contains(Point::new(15.0, 15.0)));
        assert!(!rect.contains(Point::new(9.9, 15.0)));
        assert!(!rect.contains(Point::new(15.0, 20.1)));
    }

    #[test]
    fn test_inset_by_clamps_to_zero() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 4.0);
        let inset = rect.inset_by(0.0, 3.0);
        assert_eq!(inset.height, 0.0);
        assert_eq!(inset.y, 3.0);
    }

    #[test]
    fn test_inset_by_vertical() {
        let rect = Rectangle::new(0.0, 0.0, 120.0, 30.0);
        let inset = rect.inset_by(0.0, 10.0);
        assert_eq!(inset, Rectangle::new(0.0, 10.0, 120.0, 10.0));
    }
}
