//! Procedural animation curves.
//!
//! Every visual effect in the three phases is a pure function of the phase
//! progress and/or the absolute frame index, so each curve is testable
//! without rendering a frame.

/// Hard visibility gate: the element exists only past `threshold`.
pub fn gate(progress: f64, threshold: f64) -> bool {
    progress > threshold
}

/// Linear ramp starting at `start` with slope `rate`, clamped to `[0, 1]`.
pub fn ramp(progress: f64, start: f64, rate: f64) -> f64 {
    ((progress - start) * rate).clamp(0.0, 1.0)
}

/// Interpolate `from -> to` by `t` in `[0, 1]`.
pub fn slide(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Sinusoidal oscillation keyed to the absolute frame index.
pub fn pulse(frame: u64, freq: f64, amp: f64) -> f64 {
    amp * (frame as f64 * freq).sin()
}

/// Intro background particle `index` at `frame`: a fixed 18-degree angular
/// step per particle, orbit radius growing from half reach to full with
/// progress.
pub fn orbit_particle(frame: u64, index: usize, progress: f64, cx: i32, cy: i32) -> (i32, i32) {
    let angle = ((frame * 2 + index as u64 * 18) as f64).to_radians();
    let radius = (50 + index * 30) as f64;
    let reach = 0.5 + progress * 0.5;
    (
        cx + (angle.cos() * radius * reach) as i32,
        cy + (angle.sin() * radius * reach) as i32,
    )
}

/// Outcome celebration particle: a wrapping fall down the canvas with a
/// sinusoidal size wobble. Returns `(x, y, radius)`.
pub fn confetti_particle(frame: u64, index: usize, width: u32, height: u32) -> (i32, i32, i32) {
    let t = ((frame as usize + index * 5) % 100) as f64 / 100.0;
    let x = ((index * 73) % width as usize) as i32;
    let y = (t * f64::from(height) * 1.5) as i32 - 200;
    let radius = 3 + (3.0 * (frame as f64 * 0.1 + index as f64).sin()) as i32;
    (x, y, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_is_strict() {
        assert!(!gate(0.1, 0.1));
        assert!(gate(0.1001, 0.1));
    }

    #[test]
    fn ramp_clamps_both_ends() {
        assert_eq!(ramp(0.0, 0.4, 3.0), 0.0);
        assert_eq!(ramp(0.9, 0.4, 3.0), 1.0);
    }

    #[test]
    fn ramp_is_linear_inside_the_window() {
        let t = ramp(0.5, 0.4, 3.0);
        assert!((t - 0.3).abs() < 1e-12);
    }

    #[test]
    fn slide_hits_endpoints() {
        assert_eq!(slide(-100.0, 200.0, 0.0), -100.0);
        assert_eq!(slide(-100.0, 200.0, 1.0), 200.0);
        assert_eq!(slide(-100.0, 200.0, 2.0), 200.0);
    }

    #[test]
    fn pulse_is_zero_at_frame_zero() {
        assert_eq!(pulse(0, 0.3, 0.1), 0.0);
        assert!(pulse(5, 0.3, 0.1).abs() <= 0.1);
    }

    #[test]
    fn orbit_is_deterministic_and_grows_with_progress() {
        let a = orbit_particle(10, 3, 0.0, 360, 640);
        let b = orbit_particle(10, 3, 0.0, 360, 640);
        assert_eq!(a, b);

        // Radius 140 at index 3: reach 0.5 vs 1.0 from the canvas center.
        let near = orbit_particle(0, 3, 0.0, 0, 0);
        let far = orbit_particle(0, 3, 1.0, 0, 0);
        let d = |(x, y): (i32, i32)| ((x * x + y * y) as f64).sqrt();
        assert!(d(far) > d(near));
    }

    #[test]
    fn confetti_stays_in_horizontal_bounds_and_wraps() {
        for j in 0..30 {
            let (x, _, r) = confetti_particle(17, j, 720, 1280);
            assert!((0..720).contains(&x));
            assert!((0..=6).contains(&r));
        }
        // Fall position wraps with period 100 frames.
        let (_, y0, _) = confetti_particle(0, 0, 720, 1280);
        let (_, y100, _) = confetti_particle(100, 0, 720, 1280);
        assert_eq!(y0, y100);
    }
}
