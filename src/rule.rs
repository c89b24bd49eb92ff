use log::debug;

use crate::die::Die;
use crate::partition::{Partition, TossRange};
use crate::toss::ChanceClass;
use crate::util::{Error, Id, Result};

#[derive(Debug, Clone)]
pub enum Branch {
    Face(String),
    Sub(Box<Rule>),
    Repeat,
}

#[derive(Debug, Clone)]
pub struct Rule {
    source: Die,
    target: Die,
    fair: bool,
    throws: u32,
    arms: Vec<(TossRange, Branch)>,
    expectation: f64,
}

impl Rule {
    #[must_use]
    pub fn source(&self) -> &Die {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &Die {
        &self.target
    }

    #[must_use]
    pub fn fair(&self) -> bool {
        self.fair
    }

    #[must_use]
    pub fn throws(&self) -> u32 {
        self.throws
    }

    #[must_use]
    pub fn expectation(&self) -> f64 {
        self.expectation
    }

    #[must_use]
    pub fn arms(&self) -> &[(TossRange, Branch)] {
        &self.arms
    }

    #[must_use]
    pub fn branch_for(&self, id: Id) -> Option<&Branch> {
        self.arms
            .iter()
            .find(|(range, _)| range.contains(id))
            .map(|(_, branch)| branch)
    }

    fn settled(source: &Die, target: &Die, fair: bool) -> Self {
        Self {
            source: source.clone(),
            target: target.clone(),
            fair,
            throws: 0,
            arms: Vec::new(),
            expectation: 0.0,
        }
    }
}

pub fn best_conversion(source: &Die, target: &Die, fair: bool) -> Result<Rule> {
    if source.len() < 2 {
        return Err(Error::NarrowSource(source.len()));
    }
    Ok(best_round(source, target, fair))
}

fn best_round(source: &Die, target: &Die, fair: bool) -> Rule {
    if target.len() == 1 {
        return Rule::settled(source, target, fair);
    }
    let mut throws = min_throws(source.len(), target.len());
    let mut best = build_round(source, target, fair, throws);
    debug!(
        "{}->{} throws={throws} expectation={:.4}",
        source.len(),
        target.len(),
        best.expectation,
    );
    while f64::from(throws + 1) < best.expectation {
        throws += 1;
        let round = build_round(source, target, fair, throws);
        debug!(
            "{}->{} throws={throws} expectation={:.4} best={:.4}",
            source.len(),
            target.len(),
            round.expectation,
            best.expectation,
        );
        if round.expectation < best.expectation {
            best = round;
        }
    }
    best
}

fn build_round(source: &Die, target: &Die, fair: bool, throws: u32) -> Rule {
    let classes = ChanceClass::enumerate(source, fair, throws);
    let partition = Partition::split(classes, target);
    let a = (source.len() as Id).pow(throws);
    let mut size_b: Id = 0;
    let mut z = 0.0;
    let mut arms = Vec::new();
    for (range, sub) in partition.into_parts() {
        let weight = range.len() as f64 / a as f64;
        let branch = if sub.len() == target.len() {
            size_b += range.len() as Id;
            Branch::Repeat
        } else if sub.len() == 1 {
            z += weight * f64::from(throws);
            Branch::Face(sub.face(0).to_owned())
        } else {
            let next = best_round(source, &sub, fair);
            z += weight * (f64::from(throws) + next.expectation);
            Branch::Sub(Box::new(next))
        };
        arms.push((range, branch));
    }
    // E = z + (size_b / a) * (throws + E), solved for E. A round where the
    // repeat part swallows everything (size_b == a) comes out at +inf and
    // loses the search to any round that resolves something.
    let expectation =
        (a as f64 * z + size_b as f64 * f64::from(throws)) / (a - size_b) as f64;
    Rule {
        source: source.clone(),
        target: target.clone(),
        fair,
        throws,
        arms,
        expectation,
    }
}

fn min_throws(faces: usize, wanted: usize) -> u32 {
    let mut throws = 1;
    let mut reach = faces;
    while reach < wanted {
        reach *= faces;
        throws += 1;
    }
    throws
}
