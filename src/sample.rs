/// Integer arithmetic used as a smoke test for the build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sample;

impl Sample {
    pub fn new() -> Self {
        Self
    }

    /// Wraps around on overflow.
    pub fn sum(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    /// Like [`Sample::sum`], but `None` on overflow.
    pub fn checked_sum(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_add(b)
    }
}
