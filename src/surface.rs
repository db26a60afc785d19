//! Immediate-mode 2D drawing surface the engine renders onto.

/// Subset of a 2D canvas context plus the surface's pixel size.
///
/// Colors are fixed: the effect only ever draws white.
pub trait DrawSurface {
    type Error;

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Clears the whole surface.
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_alpha(&mut self, alpha: f64);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn rotate(&mut self, angle: f64) -> Result<(), Self::Error>;
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64)
        -> Result<(), Self::Error>;
    fn stroke_white(&mut self);
    fn fill_white(&mut self);
}
