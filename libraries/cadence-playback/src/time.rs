//! Playback progress and time labels

use std::time::Duration;

/// Position within the current item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackProgress {
    pub elapsed: Duration,
    pub duration: Duration,
}

impl PlaybackProgress {
    pub fn new(elapsed: Duration, duration: Duration) -> Self {
        Self { elapsed, duration }
    }

    /// Time left until the end of the item (never negative)
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Elapsed share of the duration, in `0.0..=1.0`
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }
}

/// Render a duration as `m:ss`, or `h:mm:ss` past the hour
///
/// Rounds to the nearest second.
pub fn format_time(time: Duration) -> String {
    let total = time.as_secs_f64().round() as u64;
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Render the time left as a negative label, e.g. `-1:05`
pub fn format_remaining(progress: &PlaybackProgress) -> String {
    format!("-{}", format_time(progress.remaining()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(Duration::ZERO), "0:00");
        assert_eq!(format_time(Duration::from_secs(5)), "0:05");
        assert_eq!(format_time(Duration::from_secs(65)), "1:05");
        assert_eq!(format_time(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn formats_hours() {
        assert_eq!(format_time(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(format_time(Duration::from_secs(3725)), "1:02:05");
    }

    #[test]
    fn rounds_to_nearest_second() {
        assert_eq!(format_time(Duration::from_millis(59_400)), "0:59");
        assert_eq!(format_time(Duration::from_millis(59_500)), "1:00");
    }

    #[test]
    fn remaining_saturates() {
        let progress = PlaybackProgress::new(Duration::from_secs(70), Duration::from_secs(60));
        assert_eq!(progress.remaining(), Duration::ZERO);
        assert_eq!(progress.fraction(), 1.0);

        let progress = PlaybackProgress::new(Duration::from_secs(15), Duration::from_secs(60));
        assert_eq!(format_remaining(&progress), "-0:45");
        assert_eq!(progress.fraction(), 0.25);
    }

    #[test]
    fn zero_duration_has_zero_fraction() {
        let progress = PlaybackProgress::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(progress.fraction(), 0.0);
    }
}
