//! Stale-value policy for the gesture tension signal.
//!
//! The tracker runs on its own cadence and may stop delivering readings
//! (hand out of frame, camera hiccup). The animator only ever wants the
//! latest value, so readings overwrite rather than queue, and a missing
//! reading drifts the held value toward a configurable default.

/// Latest-wins holder for the normalized tension scalar.
pub struct TensionSignal {
    value: f32,
    default: f32,
    decay: f32,
    fresh: bool,
}

impl TensionSignal {
    /// `default` is the value drifted toward when readings stop; `decay` is
    /// the per-sample blend factor toward it.
    pub fn new(default: f32, decay: f32) -> Self {
        Self {
            value: 0.0,
            default,
            decay,
            fresh: false,
        }
    }

    /// Record a reading from the tracker. Out-of-range values are clamped;
    /// NaN readings are dropped so one bad frame cannot poison the held
    /// value.
    pub fn submit(&mut self, reading: f32) {
        if reading.is_nan() {
            return;
        }
        self.value = reading.clamp(0.0, 1.0);
        self.fresh = true;
    }

    /// Read the signal for one animation frame.
    ///
    /// When no reading arrived since the previous call, the held value
    /// decays one step toward the default instead of sticking forever at
    /// the last gesture.
    pub fn sample(&mut self) -> f32 {
        if !self.fresh {
            self.value += (self.default - self.value) * self.decay;
        }
        self.fresh = false;
        self.value
    }

    /// Last held value, without advancing the decay.
    pub fn get(&self) -> f32 {
        self.value
    }
}

impl Default for TensionSignal {
    /// Matches the tracker's no-hands behavior: drift open (1.0) at 5% per
    /// frame.
    fn default() -> Self {
        Self::new(1.0, 0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_reading_wins() {
        let mut sig = TensionSignal::default();
        sig.submit(0.3);
        sig.submit(0.8);
        assert_eq!(sig.sample(), 0.8);
    }

    #[test]
    fn test_readings_clamped() {
        let mut sig = TensionSignal::default();
        sig.submit(2.5);
        assert_eq!(sig.sample(), 1.0);
        sig.submit(-1.0);
        assert_eq!(sig.sample(), 0.0);
    }

    #[test]
    fn test_nan_reading_dropped() {
        let mut sig = TensionSignal::default();
        sig.submit(0.4);
        sig.submit(f32::NAN);
        assert_eq!(sig.get(), 0.4);
    }

    #[test]
    fn test_stale_signal_decays_to_default() {
        let mut sig = TensionSignal::new(1.0, 0.05);
        sig.submit(0.0);
        assert_eq!(sig.sample(), 0.0);
        // No further readings: each sample moves 5% of the way to 1.0
        let first = sig.sample();
        assert!((first - 0.05).abs() < 1e-6, "first decay step: {first}");
        for _ in 0..500 {
            sig.sample();
        }
        assert!(sig.get() > 0.99, "should converge to default: {}", sig.get());
    }

    #[test]
    fn test_fresh_reading_suppresses_decay() {
        let mut sig = TensionSignal::new(1.0, 0.05);
        sig.submit(0.2);
        sig.sample();
        sig.submit(0.2);
        assert_eq!(sig.sample(), 0.2, "fresh reading should not decay");
    }
}
