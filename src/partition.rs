use itertools::Itertools;
use log::trace;

use crate::die::Die;
use crate::toss::{ChanceClass, Toss};
use crate::util::{divisors, Id};

#[derive(Debug, Clone)]
pub struct TossRange {
    tosses: Vec<Toss>,
}

impl TossRange {
    fn new(mut tosses: Vec<Toss>) -> Self {
        tosses.sort_by_key(Toss::id);
        Self { tosses }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tosses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tosses.is_empty()
    }

    #[must_use]
    pub fn tosses(&self) -> &[Toss] {
        &self.tosses
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.tosses.iter().map(Toss::id)
    }

    #[must_use]
    pub fn contains(&self, id: Id) -> bool {
        self.tosses.binary_search_by_key(&id, Toss::id).is_ok()
    }

    #[must_use]
    pub fn runs(&self) -> Vec<(Id, Id)> {
        let mut runs: Vec<(Id, Id)> = Vec::new();
        for id in self.ids() {
            match runs.last_mut() {
                Some((_, last)) if *last + 1 == id => *last = id,
                _ => runs.push((id, id)),
            }
        }
        runs
    }
}

#[derive(Debug, Clone)]
pub struct Partition {
    parts: Vec<(TossRange, Die)>,
}

impl Partition {
    #[must_use]
    pub fn split(mut classes: Vec<ChanceClass>, target: &Die) -> Self {
        let m = target.len();
        let mut parts = Vec::new();
        for d in divisors(m) {
            let width = m / d;
            let mut buckets: Vec<Vec<Toss>> = vec![Vec::new(); d];
            for class in &mut classes {
                let share = class.len() / d;
                if share == 0 {
                    continue;
                }
                // member i*share+j goes to bucket i
                let taken = class.drain_front(share * d);
                let groups = taken.into_iter().chunks(share);
                for (bucket, members) in buckets.iter_mut().zip(&groups) {
                    bucket.extend(members);
                }
            }
            classes.retain(|class| !class.is_empty());
            trace!(
                "divisor {d}: {} outcomes allocated to slices of width {width}",
                buckets.iter().map(Vec::len).sum::<usize>(),
            );
            for (i, bucket) in buckets.into_iter().enumerate() {
                if bucket.is_empty() {
                    continue;
                }
                parts.push((TossRange::new(bucket), target.slice(i * width, width)));
            }
        }
        Self { parts }
    }

    #[must_use]
    pub fn parts(&self) -> &[(TossRange, Die)] {
        &self.parts
    }

    pub(crate) fn into_parts(self) -> Vec<(TossRange, Die)> {
        self.parts
    }
}
