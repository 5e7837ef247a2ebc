use crate::color::Color;
use vecmath::Vector2;

// What the particle field draws with. A call that fails just leaves that
// shape out of the frame.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64);

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
        alpha: f64,
    );
}
