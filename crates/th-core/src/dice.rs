//! Random draws for the game engine.
//!
//! Every probability check in a town goes through [`Roller`], so play can use
//! any `rand` generator while tests replay exact draws with
//! [`ScriptedRoller`].

use std::collections::VecDeque;

use rand::Rng;

/// A source of uniform random draws.
pub trait Roller {
    /// A uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform integer in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> Roller for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high.max(low))
    }
}

/// A roller that replays queued draws in order.
///
/// Unit draws and integer draws are queued separately. When a queue runs
/// dry the roller falls back to `0.0` for unit draws and `low` for integer
/// draws, so a short script never panics mid-scenario.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    units: VecDeque<f64>,
    ints: VecDeque<u32>,
}

impl ScriptedRoller {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue unit draws.
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Queue integer draws.
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Append unit draws to an existing script.
    pub fn push_units(&mut self, units: impl IntoIterator<Item = f64>) {
        self.units.extend(units);
    }

    /// Append integer draws to an existing script.
    pub fn push_ints(&mut self, ints: impl IntoIterator<Item = u32>) {
        self.ints.extend(ints);
    }

    /// Number of draws not yet consumed, as `(units, ints)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.units.len(), self.ints.len())
    }
}

impl Roller for ScriptedRoller {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.ints
            .pop_front()
            .map_or(low, |value| value.clamp(low, high.max(low)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rng_unit_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn rng_between_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let v = rng.between(1, 10);
            assert!((1..=10).contains(&v));
            seen.insert(v);
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut r = ScriptedRoller::new()
            .with_units([0.1, 0.9])
            .with_ints([4, 7]);
        assert_eq!(r.unit(), 0.1);
        assert_eq!(r.between(1, 10), 4);
        assert_eq!(r.unit(), 0.9);
        assert_eq!(r.between(1, 10), 7);
        assert_eq!(r.remaining(), (0, 0));
    }

    #[test]
    fn scripted_falls_back_when_empty() {
        let mut r = ScriptedRoller::new();
        assert_eq!(r.unit(), 0.0);
        assert_eq!(r.between(3, 9), 3);
    }

    #[test]
    fn scripted_clamps_ints() {
        let mut r = ScriptedRoller::new().with_ints([50, 0]);
        assert_eq!(r.between(1, 20), 20);
        assert_eq!(r.between(1, 20), 1);
    }
}
