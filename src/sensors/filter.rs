//! Fixed-size moving average for smoothing successive ppm readings.

use heapless::HistoryBuffer;

/// Running mean over the last `N` finite samples.
pub struct RunningAverage<const N: usize> {
    window: HistoryBuffer<f32, N>,
}

impl<const N: usize> RunningAverage<N> {
    pub fn new() -> Self {
        Self {
            window: HistoryBuffer::new(),
        }
    }

    /// Add a sample and return the updated mean.  NaN and infinite samples
    /// are dropped so one bad conversion cannot poison the window.
    pub fn push(&mut self, sample: f32) -> Option<f32> {
        if sample.is_finite() {
            self.window.write(sample);
        } else {
            log::debug!("filter: dropped non-finite sample");
        }
        self.mean()
    }

    /// Mean of the window, `None` until the first finite sample.
    pub fn mean(&self) -> Option<f32> {
        let samples = self.window.as_slice();
        if samples.is_empty() {
            return None;
        }
        let sum: f32 = samples.iter().sum();
        Some(sum / samples.len() as f32)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.len() == 0
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}

impl<const N: usize> Default for RunningAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
