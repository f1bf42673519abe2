//! Geometry primitives shared across the extraction stages.

/// Axis-aligned bounding box in pixel coordinates.
///
/// Screen coordinates: the y axis grows downward, so `y_min` is the top
/// edge of the box and `y_max` the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Vertical center of the box.
    pub fn y_center(&self) -> f64 {
        (self.y_min + self.y_max) / 2.0
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Computes a minimal box that covers all the points, or `None` when the
    /// iterator is empty.
    pub fn from_points(pts: impl IntoIterator<Item = (f64, f64)>) -> Option<Bounds> {
        let mut pts = pts.into_iter();
        let (x, y) = pts.next()?;
        let mut bounds = Bounds::new(x, x, y, y);
        for (x, y) in pts {
            bounds.x_min = bounds.x_min.min(x);
            bounds.x_max = bounds.x_max.max(x);
            bounds.y_min = bounds.y_min.min(y);
            bounds.y_max = bounds.y_max.max(y);
        }
        Some(bounds)
    }
}
