//! Waveform primitives.
//!
//! Pure per-sample formulas shared by tone and sweep generation. Each
//! function takes a phase angle in radians and returns a sample in the
//! nominal [-1, 1] range.

/// Two times pi, the full phase circle.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Waveform selector for tone and sweep generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine wave.
    Sine,
    /// Square wave (sign of the sine).
    Square,
    /// Sawtooth ramp.
    Sawtooth,
    /// Triangle wave.
    Triangle,
}

/// Sine wave at the given phase angle.
#[inline]
pub fn sine(angle: f64) -> f64 {
    angle.sin()
}

/// Square wave at the given phase angle.
///
/// Returns exactly -1.0 or 1.0; a zero crossing maps to +1.0.
#[inline]
pub fn square(angle: f64) -> f64 {
    if angle.sin() >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Sawtooth wave at the given phase angle, a periodic ramp in [-1, 1].
#[inline]
pub fn sawtooth(angle: f64) -> f64 {
    let cycles = angle / TWO_PI;
    2.0 * (cycles - (cycles + 0.5).floor())
}

/// Triangle wave at the given phase angle.
#[inline]
pub fn triangle(angle: f64) -> f64 {
    2.0 * sawtooth(angle).abs() - 1.0
}

/// Evaluates a waveform at the given phase angle.
#[inline]
pub fn sample(waveform: Waveform, angle: f64) -> f64 {
    match waveform {
        Waveform::Sine => sine(angle),
        Waveform::Square => square(angle),
        Waveform::Sawtooth => sawtooth(angle),
        Waveform::Triangle => triangle(angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_range() {
        for i in 0..1000 {
            let angle = i as f64 * 0.01;
            assert!(sine(angle).abs() <= 1.0);
        }
    }

    #[test]
    fn test_square_is_binary() {
        for i in 0..1000 {
            let angle = i as f64 * 0.013;
            let s = square(angle);
            assert!(s == 1.0 || s == -1.0);
        }
    }

    #[test]
    fn test_square_zero_crossing_maps_positive() {
        assert_eq!(square(0.0), 1.0);
    }

    #[test]
    fn test_sawtooth_range() {
        for i in 0..1000 {
            let angle = i as f64 * 0.017;
            let s = sawtooth(angle);
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_sawtooth_periodicity() {
        let a = sawtooth(0.3);
        let b = sawtooth(0.3 + TWO_PI);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_range_and_peak() {
        for i in 0..1000 {
            let angle = i as f64 * 0.019;
            let s = triangle(angle);
            assert!((-1.0..=1.0).contains(&s));
        }
        // Peak of the triangle sits at the half cycle
        assert!((triangle(std::f64::consts::PI) - 1.0).abs() < 1e-9);
    }
}
