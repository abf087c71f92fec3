//! Work list of trace nodes waiting to be expanded.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::trace::NodeId;

/// Access discipline of a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Oldest entry first (breadth-first)
    Fifo,
    /// Newest entry first (depth-first)
    Lifo,
    /// Cheapest entry first, oldest among equal costs (uniform-cost)
    MinCost,
}

/// A node waiting for expansion together with its accumulated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<C> {
    pub node: NodeId,
    pub cost: Option<C>,
}

/// Heap slot ordered so that `BinaryHeap` (a max-heap) pops the lowest cost,
/// and among equal costs the lowest insertion sequence.
#[derive(Debug)]
struct Ranked<C> {
    seq: u64,
    entry: FrontierEntry<C>,
}

impl<C: Ord> Ord for Ranked<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .entry
            .cost
            .cmp(&self.entry.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<C: Ord> PartialOrd for Ranked<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> PartialEq for Ranked<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Ord> Eq for Ranked<C> {}

#[derive(Debug)]
enum Queue<C> {
    Deque(VecDeque<FrontierEntry<C>>),
    Heap(BinaryHeap<Ranked<C>>),
}

#[derive(Debug)]
pub struct Frontier<C> {
    discipline: Discipline,
    queue: Queue<C>,
    next_seq: u64,
    peak: usize,
}

impl<C: Ord> Frontier<C> {
    pub fn new(discipline: Discipline) -> Self {
        let queue = match discipline {
            Discipline::Fifo | Discipline::Lifo => Queue::Deque(VecDeque::new()),
            Discipline::MinCost => Queue::Heap(BinaryHeap::new()),
        };
        Self {
            discipline,
            queue,
            next_seq: 0,
            peak: 0,
        }
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn push(&mut self, entry: FrontierEntry<C>) {
        match &mut self.queue {
            Queue::Deque(deque) => deque.push_back(entry),
            Queue::Heap(heap) => {
                heap.push(Ranked {
                    seq: self.next_seq,
                    entry,
                });
                self.next_seq += 1;
            }
        }
        self.peak = self.peak.max(self.len());
    }

    pub fn pop(&mut self) -> Option<FrontierEntry<C>> {
        match &mut self.queue {
            Queue::Deque(deque) => match self.discipline {
                Discipline::Lifo => deque.pop_back(),
                _ => deque.pop_front(),
            },
            Queue::Heap(heap) => heap.pop().map(|ranked| ranked.entry),
        }
    }

    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Deque(deque) => deque.len(),
            Queue::Heap(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest number of entries held at once.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
