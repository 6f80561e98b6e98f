use std::time::{Duration, Instant};

use shofyou_core::ProgressView;

use super::constants::{
    ACCENT_COLOR, PROGRESS_BAR_HEIGHT, PROGRESS_FADE_IN, PROGRESS_FADE_OUT,
    PROGRESS_WIDTH_DURATION,
};

const SETTLE_EPSILON: f64 = 1e-6;

/// One drawable state of the top progress bar. `width` is a fraction of the
/// window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFrame {
    pub width: f64,
    pub opacity: f64,
    pub height: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Tween {
    fn settled(value: f64, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        let t = (elapsed / self.duration.as_secs_f64()).min(1.0);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    fn retarget(&mut self, to: f64, duration: Duration, now: Instant) {
        if (self.to - to).abs() < SETTLE_EPSILON {
            return;
        }
        *self = Self {
            from: self.value_at(now),
            to,
            start: now,
            duration,
        };
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Smooths progress targets from the view model into frames.
///
/// Width always eases toward the target, so a finished load reaches the full
/// width while the bar fades out.
#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    width: Tween,
    opacity: Tween,
}

impl ProgressAnimator {
    pub fn new(now: Instant) -> Self {
        Self {
            width: Tween::settled(0.0, now),
            opacity: Tween::settled(0.0, now),
        }
    }

    pub fn set_target(&mut self, target: ProgressView, now: Instant) {
        if target.visible {
            if self.opacity.value_at(now) < SETTLE_EPSILON && self.opacity.to < SETTLE_EPSILON {
                // Fully hidden bar: a new load grows from the left edge.
                self.width = Tween::settled(0.0, now);
            }
            self.opacity.retarget(1.0, PROGRESS_FADE_IN, now);
        } else {
            self.opacity.retarget(0.0, PROGRESS_FADE_OUT, now);
        }
        self.width
            .retarget(target.progress.clamp(0.0, 1.0), PROGRESS_WIDTH_DURATION, now);
    }

    pub fn frame(&self, now: Instant) -> ProgressFrame {
        ProgressFrame {
            width: self.width.value_at(now),
            opacity: self.opacity.value_at(now),
            height: PROGRESS_BAR_HEIGHT,
            color: ACCENT_COLOR,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.width.is_done(now) || !self.opacity.is_done(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(progress: f64, visible: bool) -> ProgressView {
        ProgressView { progress, visible }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_hidden_and_idle() {
        let now = Instant::now();
        let animator = ProgressAnimator::new(now);

        let frame = animator.frame(now);

        assert!(approx(frame.width, 0.0));
        assert!(approx(frame.opacity, 0.0));
        assert_eq!(frame.height, PROGRESS_BAR_HEIGHT);
        assert_eq!(frame.color, ACCENT_COLOR);
        assert!(!animator.is_animating(now));
    }

    #[test]
    fn fades_in_and_grows_toward_target() {
        let t0 = Instant::now();
        let mut animator = ProgressAnimator::new(t0);

        animator.set_target(view(0.5, true), t0);

        let mid = animator.frame(t0 + Duration::from_millis(100));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.width > 0.0 && mid.width < 0.5);
        assert!(animator.is_animating(t0 + Duration::from_millis(100)));

        let end = t0 + PROGRESS_WIDTH_DURATION;
        let frame = animator.frame(end);
        assert!(approx(frame.opacity, 1.0));
        assert!(approx(frame.width, 0.5));
        assert!(!animator.is_animating(end));
    }

    #[test]
    fn finishing_fills_width_while_fading_out() {
        let t0 = Instant::now();
        let mut animator = ProgressAnimator::new(t0);
        animator.set_target(view(0.4, true), t0);

        let t1 = t0 + Duration::from_millis(500);
        animator.set_target(view(1.0, false), t1);

        let done = animator.frame(t1 + PROGRESS_FADE_OUT);
        assert!(approx(done.width, 1.0));
        assert!(approx(done.opacity, 0.0));
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let t0 = Instant::now();
        let mut animator = ProgressAnimator::new(t0);
        animator.set_target(view(1.0, true), t0);

        let t1 = t0 + Duration::from_millis(150);
        let before = animator.frame(t1).width;
        animator.set_target(view(0.2, true), t1);

        assert!(approx(animator.frame(t1).width, before));
    }

    #[test]
    fn new_load_after_fade_out_starts_from_zero_width() {
        let t0 = Instant::now();
        let mut animator = ProgressAnimator::new(t0);
        animator.set_target(view(0.6, true), t0);
        let t1 = t0 + Duration::from_millis(400);
        animator.set_target(view(1.0, false), t1);

        let t2 = t1 + Duration::from_secs(1);
        animator.set_target(view(0.1, true), t2);

        assert!(approx(animator.frame(t2).width, 0.0));
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert!(approx(ease_in_out(0.0), 0.0));
        assert!(approx(ease_in_out(0.5), 0.5));
        assert!(approx(ease_in_out(1.0), 1.0));
    }
}
