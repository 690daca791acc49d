// THEORY:
// `RunningCentroid` keeps the mean position of every moving pixel seen so far
// without storing the pixels. Each observation folds one point into the mean:
//
//     mean <- (mean * count + p) / (count + 1)
//
// Floating point makes this order sensitive, so callers feed points in raster
// order (row by row, left to right) to reproduce the reference output bit for
// bit. Before the first observation the mean holds the sentinel (-1, -1), which
// is also what a frame without motion reports.

pub const SENTINEL: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCentroid {
    mean_x: f64,
    mean_y: f64,
    count: usize,
}

impl Default for RunningCentroid {
    fn default() -> Self {
        Self {
            mean_x: SENTINEL,
            mean_y: SENTINEL,
            count: 0,
        }
    }
}

impl RunningCentroid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the point `(x, y)` into the mean.
    #[inline]
    pub fn observe(&mut self, x: usize, y: usize) {
        let n = self.count as f64;
        self.mean_x = (self.mean_x * n + x as f64) / (n + 1.0);
        self.mean_y = (self.mean_y * n + y as f64) / (n + 1.0);
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The mean position, or the sentinel `(-1.0, -1.0)` when nothing was observed.
    pub fn mean(&self) -> (f64, f64) {
        (self.mean_x, self.mean_y)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
