use std::collections::BTreeMap;

use bon::Builder;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng, RngCore};

use crate::rule::{Branch, Rule};
use crate::util::{Id, SIM_ROUNDS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub face: String,
    pub draws: u64,
}

#[derive(Debug, Builder)]
pub struct Simulate<G = ThreadRng>
where
    G: RngCore,
{
    #[builder(finish_fn)]
    rng: G,
    #[builder(default = SIM_ROUNDS)]
    rounds: u64,
}

impl Default for Simulate<ThreadRng> {
    fn default() -> Self {
        Self::builder().build(thread_rng())
    }
}

impl<G> Simulate<G>
where
    G: RngCore,
{
    pub fn once(&mut self, rule: &Rule) -> Outcome {
        let mut draws = 0;
        let mut current = rule;
        loop {
            if current.target().len() == 1 {
                return Outcome {
                    face: current.target().face(0).to_owned(),
                    draws,
                };
            }
            let n = current.source().len() as Id;
            let mut id: Id = 0;
            for _ in 0..current.throws() {
                id = id * n + self.rng.gen_range(0..n);
                draws += 1;
            }
            match current.branch_for(id) {
                Some(Branch::Face(label)) => {
                    return Outcome {
                        face: label.clone(),
                        draws,
                    }
                }
                Some(Branch::Sub(next)) => current = next,
                Some(Branch::Repeat) => {}
                None => unreachable!(),
            }
        }
    }

    pub fn mean_draws(&mut self, rule: &Rule) -> f64 {
        let mut total = 0;
        for _ in 0..self.rounds {
            total += self.once(rule).draws;
        }
        total as f64 / self.rounds as f64
    }

    pub fn tally(&mut self, rule: &Rule) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for _ in 0..self.rounds {
            *counts.entry(self.once(rule).face).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::Simulate;
    use crate::defs::die;
    use crate::rule::best_conversion;

    fn sim(seed: u64, rounds: u64) -> Simulate<StdRng> {
        Simulate::builder()
            .rounds(rounds)
            .build(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn direct_conversion_always_takes_one_draw() {
        let rule = best_conversion(&die(6), &die(2), false).unwrap();
        let mean = sim(1, 10_000).mean_draws(&rule);
        assert!((mean - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn simulated_mean_tracks_the_expectation() {
        let rule = best_conversion(&die(2), &die(6), false).unwrap();
        let mean = sim(2, 50_000).mean_draws(&rule);
        assert!((mean - rule.expectation()).abs() < 0.1, "mean={mean}");
    }

    #[test]
    fn fair_conversion_mean_tracks_the_expectation() {
        let rule = best_conversion(&die(6), &die(2), true).unwrap();
        let mean = sim(3, 50_000).mean_draws(&rule);
        assert!((mean - 2.4).abs() < 0.1, "mean={mean}");
    }

    #[test]
    fn tally_spreads_over_every_face() {
        let rule = best_conversion(&die(2), &die(6), false).unwrap();
        let rounds = 60_000;
        let counts = sim(4, rounds).tally(&rule);
        assert_eq!(counts.len(), 6);
        let share = rounds / 6;
        for (face, count) in counts {
            let off = count.abs_diff(share);
            assert!(off < share / 10, "face {face}: {count} of {rounds}");
        }
    }

    #[test]
    fn single_face_target_needs_no_draws() {
        let rule = best_conversion(&die(6), &die(1), false).unwrap();
        let outcome = sim(5, 1).once(&rule);
        assert_eq!(outcome.face, "1");
        assert_eq!(outcome.draws, 0);
    }
}
