//! First-visit loading counter.

pub const SPLASH_FLAG_KEY: &str = "has-loaded";
pub const SPLASH_FLAG_VALUE: &str = "true";
const COUNT_MAX: u8 = 100;

/// Session-scoped "splash already shown" flag.
pub trait FirstVisitGate {
    fn is_consumed(&self) -> bool;
    fn consume(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    Idle,
    Counting,
    Settling,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashSequencer {
    phase: SplashPhase,
    count: u8,
}

impl SplashSequencer {
    /// Starts in `Idle` on a first visit, otherwise goes straight to
    /// `Revealed` and marks the gate.
    pub fn open(gate: &mut impl FirstVisitGate) -> Self {
        if gate.is_consumed() {
            gate.consume();
            return Self {
                phase: SplashPhase::Revealed,
                count: COUNT_MAX,
            };
        }

        Self {
            phase: SplashPhase::Idle,
            count: 0,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == SplashPhase::Revealed
    }

    pub fn begin_counting(&mut self) -> bool {
        if self.phase != SplashPhase::Idle {
            return false;
        }

        self.phase = SplashPhase::Counting;
        true
    }

    /// Advances the counter by `step` (at least one). Hitting 100 moves to
    /// `Settling`.
    pub fn tick(&mut self, step: u8) -> SplashPhase {
        if self.phase != SplashPhase::Counting {
            return self.phase;
        }

        self.count = self.count.saturating_add(step.max(1)).min(COUNT_MAX);
        if self.count == COUNT_MAX {
            self.phase = SplashPhase::Settling;
        }
        self.phase
    }

    /// Ends the settling pause and records the visit.
    pub fn reveal(&mut self, gate: &mut impl FirstVisitGate) -> bool {
        if self.phase != SplashPhase::Settling {
            return false;
        }

        self.phase = SplashPhase::Revealed;
        gate.consume();
        true
    }
}

/// Maps a uniform sample in `[0, 1)` to a step in `1..=max_step`.
pub fn step_from_unit(sample: f64, max_step: u8) -> u8 {
    let max_step = max_step.max(1);
    let scaled = (sample.clamp(0.0, 1.0) * f64::from(max_step)).floor() as u8;
    scaled.min(max_step - 1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MemoryGate {
        consumed: bool,
        reads: Cell<usize>,
        writes: usize,
    }

    impl FirstVisitGate for MemoryGate {
        fn is_consumed(&self) -> bool {
            self.reads.set(self.reads.get() + 1);
            self.consumed
        }

        fn consume(&mut self) {
            self.consumed = true;
            self.writes += 1;
        }
    }

    #[test]
    fn consumed_gate_reveals_immediately() {
        let mut gate = MemoryGate {
            consumed: true,
            ..MemoryGate::default()
        };

        let mut splash = SplashSequencer::open(&mut gate);
        assert_eq!(splash.phase(), SplashPhase::Revealed);
        assert!(!splash.begin_counting());
        assert_eq!(splash.tick(3), SplashPhase::Revealed);
    }

    #[test]
    fn open_reads_flag_once_and_reports_initial_phase() {
        let mut returning = MemoryGate {
            consumed: true,
            ..MemoryGate::default()
        };
        let splash = SplashSequencer::open(&mut returning);
        assert_eq!(returning.reads.get(), 1);
        assert_eq!(splash.phase(), SplashPhase::Revealed);

        let mut first = MemoryGate::default();
        let mut splash = SplashSequencer::open(&mut first);
        assert_eq!(first.reads.get(), 1);
        assert_eq!(splash.phase(), SplashPhase::Idle);

        splash.begin_counting();
        while splash.tick(3) == SplashPhase::Counting {}
        assert!(splash.reveal(&mut first));
        assert_eq!(first.reads.get(), 1);
    }

    #[test]
    fn first_visit_counts_settles_and_consumes_once() {
        let mut gate = MemoryGate::default();
        let mut splash = SplashSequencer::open(&mut gate);
        assert_eq!(splash.phase(), SplashPhase::Idle);
        assert!(splash.begin_counting());

        let mut ticks = 0;
        while splash.tick(3) == SplashPhase::Counting {
            ticks += 1;
        }

        assert_eq!(ticks, 33);
        assert_eq!(splash.count(), 100);
        assert_eq!(splash.phase(), SplashPhase::Settling);
        assert!(!gate.is_consumed());

        assert!(splash.reveal(&mut gate));
        assert!(!splash.reveal(&mut gate));
        assert!(splash.is_revealed());
        assert_eq!(gate.writes, 1);
    }

    #[test]
    fn ticks_outside_counting_are_ignored() {
        let mut gate = MemoryGate::default();
        let mut splash = SplashSequencer::open(&mut gate);

        assert_eq!(splash.tick(5), SplashPhase::Idle);
        assert_eq!(splash.count(), 0);
        assert!(!splash.reveal(&mut gate));
    }

    #[test]
    fn zero_step_still_advances() {
        let mut gate = MemoryGate::default();
        let mut splash = SplashSequencer::open(&mut gate);
        splash.begin_counting();

        splash.tick(0);
        assert_eq!(splash.count(), 1);
    }

    #[test]
    fn unit_samples_map_into_step_range() {
        assert_eq!(step_from_unit(0.0, 3), 1);
        assert_eq!(step_from_unit(0.34, 3), 2);
        assert_eq!(step_from_unit(0.999, 3), 3);
        assert_eq!(step_from_unit(1.0, 3), 3);
        assert_eq!(step_from_unit(0.5, 0), 1);
    }
}
