use tracing::{debug, trace};

use crate::error::{HeapError, Result};

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        trace!(capacity = capacity, "creating heap");
        MinHeap {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn from_vec(vec: Vec<T>) -> Self {
        let capacity = vec.len();
        let mut heap = MinHeap {
            data: vec,
            capacity,
        };
        heap.heapify();
        heap
    }

    /// Returns the minimum without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Adds `value` and returns a reference to it at the slot it settled in.
    ///
    /// Grows the buffer to twice its capacity when full.
    pub fn insert(&mut self, value: T) -> &T {
        self.ensure_capacity();
        self.data.push(value);
        let idx = self.sift_up(self.data.len() - 1);
        &self.data[idx]
    }

    /// Removes and returns the minimum.
    pub fn poll(&mut self) -> Result<T> {
        self.pop_root().ok_or_else(|| {
            debug!("poll on empty heap");
            HeapError::Empty
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Level-order view of the stored elements, for inspection only.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(min) = self.pop_root() {
            sorted.push(min);
        }
        sorted
    }

    fn ensure_capacity(&mut self) {
        if self.data.len() < self.capacity {
            return;
        }
        let new_capacity = if self.capacity == 0 { 1 } else { self.capacity * 2 };
        trace!(from = self.capacity, to = new_capacity, "growing heap buffer");
        let mut grown = Vec::with_capacity(new_capacity);
        grown.append(&mut self.data);
        self.data = grown;
        self.capacity = new_capacity;
    }

    // The last element takes the root's slot before sifting, so sift_down
    // only ever sees live elements.
    fn pop_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    fn heapify(&mut self) {
        if self.data.len() <= 1 {
            return;
        }
        let last_parent = (self.data.len() - 2) / 2;
        for i in (0..=last_parent).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[parent] > self.data[idx] {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
        idx
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // ties go left
            let smaller = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[idx] <= self.data[smaller] {
                break;
            }
            self.data.swap(idx, smaller);
            idx = smaller;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let vec: Vec<T> = iter.into_iter().collect();
        MinHeap::from_vec(vec)
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
