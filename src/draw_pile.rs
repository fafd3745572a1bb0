//! Shuffle-and-deal draw piles
//!
//! A pile remembers the full set of cards it was built from and deals from a
//! shuffled queue. When the queue runs dry the full set is shuffled again and
//! dealing carries on, so a pile with at least one card never runs out.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct DrawPile<T> {
    /// Every card this pile was built from
    full_set: Vec<T>,

    /// Cards left to deal, front first
    queue: VecDeque<T>,
}

impl<T: Clone + PartialEq> DrawPile<T> {
    /// Build a pile and shuffle it for the first deal
    pub fn new<R: Rng + ?Sized>(cards: impl IntoIterator<Item = T>, rng: &mut R) -> Self {
        let mut pile = DrawPile {
            full_set: cards.into_iter().collect(),
            queue: VecDeque::new(),
        };
        pile.reshuffle(rng);
        pile
    }

    /// A pile with no cards; every draw comes back empty
    pub fn empty() -> Self {
        DrawPile {
            full_set: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Size of the full set (constant across reshuffles)
    pub fn len(&self) -> usize {
        self.full_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full_set.is_empty()
    }

    /// Cards left before the next reshuffle
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn draw_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        self.draw_many(1, rng).pop()
    }

    /// Deal `count` cards, reshuffling as often as needed
    ///
    /// Cards already dealt in this batch are moved to the back of a fresh
    /// queue, so a batch no larger than the pile never repeats a card even
    /// when it spans a reshuffle. Returns fewer cards only when the pile is
    /// empty.
    pub fn draw_many<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<T> {
        let mut drawn = Vec::with_capacity(count);
        if self.full_set.is_empty() {
            return drawn;
        }

        while drawn.len() < count {
            match self.queue.pop_front() {
                Some(card) => drawn.push(card),
                None => {
                    self.reshuffle(rng);
                    self.hold_back(&drawn);
                }
            }
        }

        drawn
    }

    /// Shuffle the full set in place and refill the queue from it
    fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.full_set.shuffle(rng);
        self.queue = self.full_set.iter().cloned().collect();
    }

    fn hold_back(&mut self, drawn: &[T]) {
        if drawn.is_empty() {
            return;
        }
        let (held, fresh): (VecDeque<T>, VecDeque<T>) =
            self.queue.drain(..).partition(|card| drawn.contains(card));
        self.queue = fresh;
        self.queue.extend(held);
    }
}

impl<T: Clone + PartialEq> Default for DrawPile<T> {
    fn default() -> Self {
        Self::empty()
    }
}
