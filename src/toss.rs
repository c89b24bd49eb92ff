use std::collections::BTreeMap;

use itertools::Itertools;

use crate::die::Die;
use crate::util::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toss {
    id: Id,
    faces: Vec<u32>,
}

impl Toss {
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    #[must_use]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    #[must_use]
    pub fn labels<'a>(&self, die: &'a Die) -> Vec<&'a str> {
        self.faces.iter().map(|&x| die.face(x as usize)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChanceClass {
    tosses: Vec<Toss>,
}

impl ChanceClass {
    #[must_use]
    pub fn enumerate(die: &Die, unfair: bool, throws: u32) -> Vec<ChanceClass> {
        let n = die.len() as Id;
        let total = n.pow(throws);
        let mut classes = BTreeMap::<Vec<u32>, ChanceClass>::new();
        for id in 0..total {
            // most significant digit = first draw
            let mut faces = vec![0u32; throws as usize];
            let mut rem = id;
            for slot in faces.iter_mut().rev() {
                *slot = (rem % n) as u32;
                rem /= n;
            }
            let key = if unfair {
                faces.iter().copied().sorted().collect_vec()
            } else {
                Vec::new()
            };
            classes
                .entry(key)
                .or_default()
                .tosses
                .push(Toss { id, faces });
        }
        classes.into_values().collect()
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

    pub(crate) fn drain_front(&mut self, count: usize) -> Vec<Toss> {
        self.tosses.drain(..count).collect()
    }
}
