// view.rs — mapping between diagram space and host (screen) space.
use crate::landmark::Point;

/// Uniform scale + offset, the same mapping an SVG viewBox with
/// `preserveAspectRatio="xMidYMid meet"` applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub origin:   Point,
    pub scale:    f32,
}

impl Default for ViewTransform {
    fn default() -> Self { Self { origin: Point::ZERO, scale: 1.0 } }
}

impl ViewTransform {
    /// Fits a `view_w × view_h` diagram centred inside the screen rect at `screen_min` of `screen_size`.
    pub fn fit(view_w: f32, view_h: f32, screen_min: Point, screen_size: Point) -> Self {
        let scale = (screen_size.x / view_w).min(screen_size.y / view_h).max(1e-3);
        let origin = Point::new(
            screen_min.x + (screen_size.x - view_w * scale) / 2.0,
            screen_min.y + (screen_size.y - view_h * scale) / 2.0,
        );
        Self { origin, scale }
    }

    pub fn to_screen(&self, p: Point) -> Point { self.origin + p * self.scale }

    pub fn to_local(&self, s: Point) -> Point { (s - self.origin) * (1.0 / self.scale) }

    /// The transform's inverse as a plain function, for [`crate::drag::DragController`].
    pub fn screen_to_local(self) -> impl Fn(Point) -> Point { move |s| self.to_local(s) }
}
