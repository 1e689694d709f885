use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// A shared tally of how many [`Ranked`] values have been dropped.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn ranked(&self, rank: u32, tag: usize) -> Ranked {
        Ranked {
            rank,
            tag,
            counter: self.clone(),
        }
    }

    pub fn take(&self) -> usize {
        self.0.take()
    }
}

/// A value that is ordered by `rank` alone and records its own drop.
///
/// Two values with the same rank compare equal, so `tag` tells them apart when checking that equal
/// elements are never swapped.
#[derive(Debug)]
pub struct Ranked {
    pub rank: u32,
    pub tag: usize,
    counter: DropCounter,
}

impl Drop for Ranked {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}
