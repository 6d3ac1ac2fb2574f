// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! FIFO work queue for strongly typed hospital indices.
//!
//! This module defines `HospitalQueue`, a thin container over
//! `VecDeque<HospitalIndex>` that preserves zero-cost semantics while
//! providing a domain-specific API. The deferred acceptance loop pops the
//! next unmatched hospital from the front and re-enqueues displaced
//! hospitals at the back, so first-in first-out order is the only access
//! pattern the engine needs.
//!
//! The type integrates with Rust's iterator ecosystem for idiomatic
//! traversal and supports `FromIterator` and `Extend`. Display output is
//! formatted as a readable chain of indices to make diagnostics clear
//! during matching runs.
//!
//! Debug assertions guard the queue's uniqueness invariant: an unmatched
//! hospital is enqueued at most once, so duplicates always indicate
//! engine misuse.

use troth_model::index::HospitalIndex;

/// A FIFO queue of hospitals awaiting their next proposal.
///
/// The engine maintains the invariant that every queued hospital is
/// currently unmatched and appears exactly once. Popping order determines
/// proposal order, which keeps runs deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalQueue {
    queue: std::collections::VecDeque<HospitalIndex>,
}

impl HospitalQueue {
    /// Creates a new, empty `HospitalQueue`.
    #[inline]
    pub fn new() -> Self {
        Self {
            queue: std::collections::VecDeque::new(),
        }
    }

    /// Creates a new `HospitalQueue` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: std::collections::VecDeque::with_capacity(capacity),
        }
    }

    /// Creates a new `HospitalQueue` preallocated for the given number of
    /// hospitals.
    #[inline]
    pub fn preallocated(num_hospitals: usize) -> Self {
        Self {
            queue: std::collections::VecDeque::with_capacity(num_hospitals),
        }
    }

    /// Returns the number of hospital indices in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if the queue contains no hospital indices,
    /// `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Clears the queue, removing all hospital indices.
    #[inline]
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Returns the capacity of the queue.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Reserves capacity for at least `additional` more hospital indices.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.queue.reserve(additional);
    }

    /// Returns the hospital index at the front of the queue without
    /// removing it.
    #[inline]
    pub fn front(&self) -> Option<HospitalIndex> {
        self.queue.front().copied()
    }

    /// Pushes a hospital index onto the back of the queue.
    ///
    /// # Panics
    ///
    /// In debug builds, this function will panic if pushing the index
    /// results in duplicate hospital indices.
    #[inline]
    pub fn push_back(&mut self, hospital_index: HospitalIndex) {
        self.queue.push_back(hospital_index);

        debug_assert!(
            self.is_unique(),
            "called `HospitalQueue::push_back` resulting in duplicate hospital indices after pushing {}: {}",
            hospital_index,
            self
        );
    }

    /// Pops the hospital index at the front of the queue.
    #[inline]
    pub fn pop_front(&mut self) -> Option<HospitalIndex> {
        self.queue.pop_front()
    }

    /// Returns an iterator over the hospital indices in front-to-back order.
    #[inline]
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, HospitalIndex> {
        self.queue.iter()
    }

    /// Checks if all hospital indices in the queue are unique.
    ///
    /// This method is intended for internal consistency checks; the engine
    /// only calls it from debug assertions.
    ///
    /// # Note
    ///
    /// This method allocates a `HashSet` to track seen indices, so it is
    /// intended for debug assertions rather than release-build paths.
    #[inline(always)]
    fn is_unique(&self) -> bool {
        match self.queue.len() {
            0 | 1 => return true,
            _ => {}
        }

        let mut seen = std::collections::HashSet::with_capacity(self.queue.len());
        for &h in &self.queue {
            if !seen.insert(h) {
                return false;
            }
        }
        true
    }
}

impl IntoIterator for HospitalQueue {
    type Item = HospitalIndex;
    type IntoIter = std::collections::vec_deque::IntoIter<HospitalIndex>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.queue.into_iter()
    }
}

impl<'a> IntoIterator for &'a HospitalQueue {
    type Item = &'a HospitalIndex;
    type IntoIter = std::collections::vec_deque::Iter<'a, HospitalIndex>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.queue.iter()
    }
}

impl FromIterator<HospitalIndex> for HospitalQueue {
    #[inline]
    fn from_iter<I: IntoIterator<Item = HospitalIndex>>(iter: I) -> Self {
        let mut q = HospitalQueue::new();
        q.queue.extend(iter);
        debug_assert!(
            q.is_unique(),
            "constructed `HospitalQueue` via FromIterator with duplicate hospital indices: {}",
            q
        );
        q
    }
}

impl Extend<HospitalIndex> for HospitalQueue {
    #[inline]
    fn extend<T: IntoIterator<Item = HospitalIndex>>(&mut self, iter: T) {
        self.queue.extend(iter);

        debug_assert!(
            self.is_unique(),
            "called `HospitalQueue::extend` resulting in duplicate hospital indices: {}",
            self
        );
    }
}

impl Default for HospitalQueue {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HospitalQueue {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.queue.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for h in iter {
                write!(f, " -> {}", h)?;
            }
        }
        Ok(())
    }
}
