//! Wall-clock samples and hand angles.

use chrono::Timelike;

use crate::error::ConfigError;

/// One wall-clock reading, already folded onto a 12-hour dial.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeSample {
    hour12: u8,
    minute: u8,
    second: u8,
}

impl TimeSample {
    /// `hour12` in 0..12, `minute` and `second` in 0..60.
    pub fn new(hour12: u32, minute: u32, second: u32) -> Result<Self, ConfigError> {
        if hour12 >= 12 || minute >= 60 || second >= 60 {
            return Err(ConfigError::InvalidTime { hour: hour12, minute, second });
        }
        Ok(Self::wrapped(hour12, minute, second))
    }

    /// Accepts a 24-hour value (0..24) and folds it onto the dial.
    pub fn from_hms(hour24: u32, minute: u32, second: u32) -> Result<Self, ConfigError> {
        if hour24 >= 24 || minute >= 60 || second >= 60 {
            return Err(ConfigError::InvalidTime { hour: hour24, minute, second });
        }
        Ok(Self::wrapped(hour24, minute, second))
    }

    /// Reads hour, minute and second from any chrono time value.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self::wrapped(t.hour(), t.minute(), t.second())
    }

    fn wrapped(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour12: (hour % 12) as u8,
            minute: (minute % 60) as u8,
            second: (second % 60) as u8,
        }
    }

    #[inline]
    pub fn hour12(self) -> u8 {
        self.hour12
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(self) -> u8 {
        self.second
    }

    /// Minutes past the hour including the elapsed part of the current minute.
    pub fn minute_fraction(self) -> f32 {
        self.minute as f32 + self.second as f32 / 60.0
    }

    pub fn angles(self) -> HandAngles {
        HandAngles::from(self)
    }
}

/// Hand angles in degrees, clockwise from 12 o'clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl From<TimeSample> for HandAngles {
    fn from(t: TimeSample) -> Self {
        let minutes = t.minute_fraction();
        Self {
            second: t.second as f32 * 6.0,
            minute: minutes * 6.0,
            hour: (t.hour12 as f32 + minutes / 60.0) * 30.0,
        }
    }
}

/// Source of the time shown on the face.
pub trait ClockSource {
    fn now(&self) -> TimeSample;
}

/// The local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl ClockSource for LocalClock {
    fn now(&self) -> TimeSample {
        TimeSample::from_timelike(&chrono::Local::now())
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub TimeSample);

impl ClockSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> HandAngles {
        TimeSample::from_hms(h, m, s).unwrap().angles()
    }

    // ── angles ─────────────────────────────────────────────────────────────

    #[test]
    fn second_angle_is_six_degrees_per_second() {
        for s in 0..60 {
            assert_eq!(at(0, 0, s).second, s as f32 * 6.0);
        }
    }

    #[test]
    fn minute_angle_tracks_seconds_and_never_goes_back() {
        let mut last = -1.0;
        for m in 0..60 {
            for s in 0..60 {
                let a = at(4, m, s).minute;
                assert!((a - (m as f32 + s as f32 / 60.0) * 6.0).abs() < 1e-4);
                assert!(a >= last);
                last = a;
            }
        }
    }

    #[test]
    fn hour_angle_sweeps_the_dial_in_twelve_hours() {
        assert_eq!(at(0, 0, 0).hour, 0.0);
        assert_eq!(at(12, 0, 0).hour, 0.0);
        let end = at(11, 59, 59).hour;
        assert!(end < 360.0 && end > 359.9);

        let mut last = -1.0;
        for h in 0..12 {
            for m in 0..60 {
                let a = at(h, m, 0).hour;
                assert!((a - (h as f32 + m as f32 / 60.0) * 30.0).abs() < 1e-3);
                assert!(a >= last);
                last = a;
            }
        }
    }

    #[test]
    fn reference_times() {
        let three = at(3, 0, 0);
        assert_eq!((three.hour, three.minute, three.second), (90.0, 0.0, 0.0));

        let half_six = at(18, 30, 0);
        assert_eq!((half_six.hour, half_six.minute, half_six.second), (195.0, 180.0, 0.0));
    }

    // ── samples ────────────────────────────────────────────────────────────

    #[test]
    fn out_of_range_times_are_rejected() {
        assert!(TimeSample::new(12, 0, 0).is_err());
        assert!(TimeSample::from_hms(24, 0, 0).is_err());
        assert_eq!(
            TimeSample::from_hms(1, 60, 0),
            Err(ConfigError::InvalidTime { hour: 1, minute: 60, second: 0 })
        );
        assert!(TimeSample::from_hms(1, 0, 60).is_err());
    }

    #[test]
    fn twenty_four_hour_values_fold() {
        let t = TimeSample::from_hms(23, 5, 9).unwrap();
        assert_eq!((t.hour12(), t.minute(), t.second()), (11, 5, 9));
    }

    #[test]
    fn chrono_times_convert() {
        let t = chrono::NaiveTime::from_hms_opt(15, 42, 7).unwrap();
        assert_eq!(TimeSample::from_timelike(&t), TimeSample::new(3, 42, 7).unwrap());
    }

    #[test]
    fn fixed_clock_is_constant() {
        let sample = TimeSample::new(10, 10, 30).unwrap();
        let clock = FixedClock(sample);
        assert_eq!(clock.now(), sample);
        assert_eq!(clock.now(), sample);
    }
}
