// THEORY:
// `WindowSum` is the incremental accumulator behind the box filter. Summing a full
// K x K window of absolute differences at every pixel costs K^2 reads per pixel.
// Instead we keep one partial sum per column of the window and slide it along
// the row: each step drops the column leaving the window on the left and adds the
// single column entering it on the right. Per pixel that is K reads, and the
// total work no longer depends on K^2.
//
// Key architectural principles:
// 1.  **One invariant, one owner**: `running_sum` must always equal the sum of
//     `column_sums`, and `column_sums` must be the real column differences of the
//     current window. Only `reset_row` and `advance` touch that state, and debug
//     builds re-check the first half of the invariant after every step.
// 2.  **Rotating slots**: The column sums live in a fixed ring of K slots. The
//     slot that is about to be overwritten always holds the column leaving the
//     window, so no shifting is ever needed.
// 3.  **Row lifetime**: The state is rebuilt at the start of every row and is
//     meaningless across rows.

use crate::core_modules::frame::Frame;

/// Sliding K x K sum of `|current - previous|` along one row.
pub struct WindowSum<'a> {
    current: Frame<'a>,
    previous: Frame<'a>,
    kernel: usize,
    half: usize,
    /// Center row of the window.
    row: usize,
    /// One entry per window column, in ring order.
    column_sums: Vec<u64>,
    /// Sum of every entry in `column_sums`.
    running_sum: u64,
    /// Ring slot overwritten by the next `advance`.
    current_column: usize,
}

impl<'a> WindowSum<'a> {
    /// Both frames must already be known to share dimensions and `kernel` must be odd.
    pub fn new(current: Frame<'a>, previous: Frame<'a>, kernel: usize) -> Self {
        debug_assert!(kernel % 2 == 1, "kernel size must be odd");
        debug_assert_eq!(current.dimensions(), previous.dimensions());
        Self {
            current,
            previous,
            kernel,
            half: kernel / 2,
            row: 0,
            column_sums: vec![0; kernel],
            running_sum: 0,
            current_column: 0,
        }
    }

    /// Primes the window for center row `y` with the first K-1 columns of the frame.
    ///
    /// The next call to [`advance`](Self::advance) must be for column `H`.
    pub fn reset_row(&mut self, y: usize) {
        debug_assert!(y >= self.half && y + self.half < self.current.height());
        self.row = y;
        self.running_sum = 0;
        for c in 0..self.kernel - 1 {
            let sum = self.column_difference(c);
            self.column_sums[c] = sum;
            self.running_sum += sum;
        }
        self.column_sums[self.kernel - 1] = 0;
        self.current_column = self.kernel - 1;
        self.check();
    }

    /// Slides the window so it is centered on column `x` and returns the new sum.
    ///
    /// Columns must be visited in increasing order starting at `H`.
    pub fn advance(&mut self, x: usize) -> u64 {
        debug_assert!(x >= self.half && x + self.half < self.current.width());
        let slot = self.current_column;
        self.running_sum -= self.column_sums[slot];
        let entering = self.column_difference(x + self.half);
        self.column_sums[slot] = entering;
        self.running_sum += entering;
        self.current_column = (slot + 1) % self.kernel;
        self.check();
        self.running_sum
    }

    /// Sum of absolute differences over the current window.
    pub fn running_sum(&self) -> u64 {
        self.running_sum
    }

    /// Window mean, truncated. Never above 255.
    pub fn smoothed(&self) -> u32 {
        let area = self.kernel as u64 * self.kernel as u64;
        (self.running_sum / area) as u32
    }

    /// Sum of `|current - previous|` down column `x` over the window's rows.
    fn column_difference(&self, x: usize) -> u64 {
        let top = self.row - self.half;
        (top..top + self.kernel)
            .map(|y| self.current.get(x, y).abs_diff(self.previous.get(x, y)) as u64)
            .sum()
    }

    #[inline]
    fn check(&self) {
        debug_assert_eq!(
            self.running_sum,
            self.column_sums.iter().sum::<u64>(),
            "running window sum drifted from its column sums"
        );
    }
}
