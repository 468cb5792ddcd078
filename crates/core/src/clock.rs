//! Frame/millisecond conversion at a fixed frame rate.
//!
//! Motion constants are "pixels per millisecond" while the loop advances in
//! whole frames; these helpers bridge the two.

/// Convert a frame count to milliseconds at `fps`.
pub fn frames_to_ms(frames: f64, fps: f64) -> f64 {
    1000.0 * frames / fps
}

/// Convert milliseconds to a (fractional) frame count at `fps`.
pub fn ms_to_frames(ms: f64, fps: f64) -> f64 {
    fps * ms / 1000.0
}

/// Whole frames between two events `ms` apart, rounded to the nearest frame.
pub fn interval_frames(ms: f64, fps: f64) -> u64 {
    let frames = ms_to_frames(ms, fps).round();
    if frames.is_finite() && frames > 0.0 {
        frames as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_at_60fps() {
        assert!((frames_to_ms(1.0, 60.0) - 16.666_666).abs() < 1e-4);
        assert!((ms_to_frames(1000.0, 60.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_law() {
        for &fps in &[1.0, 24.0, 30.0, 60.0, 144.0] {
            for &ms in &[0.5, 16.0, 333.3, 3000.0, 123_456.7] {
                let back = frames_to_ms(ms_to_frames(ms, fps), fps);
                assert!((back - ms).abs() < 1e-9 * ms.max(1.0), "{ms} @ {fps}");
            }
        }
    }

    #[test]
    fn spawn_interval_in_frames() {
        assert_eq!(interval_frames(3000.0, 60.0), 180);
        assert_eq!(interval_frames(1.0, 60.0), 0);
        assert_eq!(interval_frames(3000.0, 0.0), 0);
    }
}
