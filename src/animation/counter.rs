pub const COUNT_STEPS: u32 = 60;

/// Counts from 0 up to `target` in [`COUNT_STEPS`] equal ticks spread over
/// `duration_ms`.
///
/// Step `n` shows `floor(target * n / COUNT_STEPS)`, so the value never goes
/// down, never overshoots, and the last step lands exactly on `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountAnimation {
    target: u32,
    duration_ms: u32,
}

impl CountAnimation {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self { target, duration_ms }
    }

    pub fn step_interval_ms(&self) -> u32 {
        (self.duration_ms / COUNT_STEPS).max(1)
    }

    pub fn value_at_step(&self, step: u32) -> u32 {
        if step >= COUNT_STEPS {
            return self.target;
        }
        (u64::from(self.target) * u64::from(step) / u64::from(COUNT_STEPS)) as u32
    }

    pub fn is_complete(&self, step: u32) -> bool {
        step >= COUNT_STEPS
    }

    /// Step to schedule `step_interval_ms` after showing `step`, or `None`
    /// when nothing should run.
    pub fn next_step(&self, step: u32, should_start: bool) -> Option<u32> {
        (should_start && !self.is_complete(step)).then(|| step + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_to_exact_target_without_overshoot() {
        let animation = CountAnimation::new(500, 2500);
        let mut step = 0;
        let mut elapsed = 0;
        let mut previous = animation.value_at_step(step);
        assert_eq!(previous, 0);

        while let Some(next) = animation.next_step(step, true) {
            elapsed += animation.step_interval_ms();
            step = next;
            let value = animation.value_at_step(step);
            assert!(value >= previous, "value went down at step {step}");
            assert!(value <= 500);
            previous = value;
        }

        assert_eq!(step, COUNT_STEPS);
        assert_eq!(previous, 500);
        assert!(elapsed <= 2500);
        assert_eq!(animation.next_step(step, true), None);
    }

    #[test]
    fn nothing_is_scheduled_before_start() {
        let animation = CountAnimation::new(350, 2000);
        assert_eq!(animation.next_step(0, false), None);
        assert_eq!(animation.value_at_step(0), 0);
        assert_eq!(animation.next_step(0, true), Some(1));
        assert_eq!(animation.next_step(59, true), Some(60));
    }

    #[test]
    fn sixty_steps_spread_over_duration() {
        let animation = CountAnimation::new(350, 2000);
        assert_eq!(animation.step_interval_ms(), 33);
        assert_eq!(animation.value_at_step(30), 175);
        assert_eq!(animation.value_at_step(59), 344);
        assert_eq!(animation.value_at_step(COUNT_STEPS), 350);
        assert!(!animation.is_complete(59));
        assert!(animation.is_complete(COUNT_STEPS));
    }

    #[test]
    fn small_targets_hold_then_finish_on_last_step() {
        let animation = CountAnimation::new(5, 2500);
        let values: Vec<u32> = (0..=COUNT_STEPS).map(|s| animation.value_at_step(s)).collect();
        assert_eq!(values[0], 0);
        assert_eq!(values[11], 0);
        assert_eq!(values[12], 1);
        assert_eq!(*values.last().unwrap(), 5);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let animation = CountAnimation::new(98, 0);
        assert_eq!(animation.step_interval_ms(), 1);
        assert_eq!(animation.value_at_step(0), 0);
        assert_eq!(animation.value_at_step(COUNT_STEPS), 98);
    }
}
