/// Min / max / mean of one signal, recomputed for every rendered record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SignalStats {
    /// Returns `None` for an empty signal.
    pub fn from_signal(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut sum = 0.0;
        for &s in samples {
            if s < min { min = s; }
            if s > max { max = s; }
            sum += s;
        }

        Some(Self {
            min,
            max,
            mean: sum / samples.len() as f64,
        })
    }

    pub fn min_text(&self) -> String {
        format!("{:.3}", self.min)
    }

    pub fn max_text(&self) -> String {
        format!("{:.3}", self.max)
    }

    pub fn mean_text(&self) -> String {
        format!("{:.3}", self.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ramp() {
        let stats = SignalStats::from_signal(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.min_text(), "1.000");
        assert_eq!(stats.max_text(), "4.000");
        assert_eq!(stats.mean_text(), "2.500");
    }

    #[test]
    fn test_empty_signal() {
        assert!(SignalStats::from_signal(&[]).is_none());
    }

    #[test]
    fn test_negative_values() {
        let stats = SignalStats::from_signal(&[-0.5, 0.25, -1.75]).unwrap();
        assert_eq!(stats.min, -1.75);
        assert_eq!(stats.max, 0.25);
        assert!((stats.mean - (-2.0 / 3.0)).abs() < 1e-12);
        assert_eq!(stats.mean_text(), "-0.667");
    }

    #[test]
    fn test_single_sample() {
        let stats = SignalStats::from_signal(&[0.123456]).unwrap();
        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.mean_text(), "0.123");
    }
}
