/// One-shot countdown driven by explicit ticks, used for load timeouts
#[derive(Debug, Clone)]
pub struct Timer {
    to: f32,
    elapsed: f32,
    finished: bool,
}

impl Timer {
    pub fn new(time: f32) -> Self {
        Self {
            to: time.max(0.0),
            elapsed: 0.0,
            finished: false,
        }
    }

    /// Advances the timer by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        if self.finished {
            return;
        }

        self.elapsed += delta;
        self.finished = self.elapsed >= self.to;
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_shot() {
        let mut timer = Timer::new(1.0);
        timer.tick(0.5);
        assert!(!timer.finished(), "Timer should not be finished after 0.5s");

        timer.tick(0.6);
        assert!(
            timer.finished(),
            "Timer should be finished after accumulating 1.1s"
        );

        timer.tick(0.1);
        assert!(timer.finished(), "A finished timer stays finished");
    }

    #[test]
    fn test_zero_time() {
        let mut timer = Timer::new(0.0);
        timer.tick(0.0);
        assert!(timer.finished(), "A zero timer finishes on the first tick");
    }

    #[test]
    fn test_negative_time_is_zero() {
        let mut timer = Timer::new(-3.0);
        assert!(!timer.finished(), "Only ticks finish the timer");
        timer.tick(0.0);
        assert!(timer.finished());
    }
}
