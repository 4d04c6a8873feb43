// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A binary relation over a single key set, with a reverse index.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// A directed, reflexive-free relation `R ⊆ K × K`.
///
/// Both directions are indexed, so incoming and outgoing edges of a key are equally cheap to
/// enumerate. Used to track which navigation lines lie above which others.
#[derive(Clone, Debug)]
pub struct EndoRelation<K> {
    forward: HashMap<K, HashSet<K>>,
    reverse: HashMap<K, HashSet<K>>,
}

impl<K> Default for EndoRelation<K> {
    fn default() -> Self {
        Self {
            forward: HashMap::default(),
            reverse: HashMap::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> EndoRelation<K> {
    /// Creates an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the relation by evaluating `rel(a, b)` for every ordered pair of distinct keys.
    ///
    /// This performs `n * (n - 1)` evaluations.
    pub fn from_binary_relation<I, F>(objects: I, mut rel: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: FnMut(K, K) -> bool,
    {
        let keys: Vec<K> = objects.into_iter().collect();
        let mut out = Self::new();
        for &a in &keys {
            for &b in &keys {
                if a != b && rel(a, b) {
                    out.add(a, b);
                }
            }
        }
        out
    }

    /// Inserts the edge `a → b`.
    ///
    /// Returns `true` if the edge was not present before. Self edges are ignored.
    pub fn add(&mut self, a: K, b: K) -> bool {
        if a == b {
            return false;
        }
        let inserted = self.forward.entry(a).or_default().insert(b);
        self.reverse.entry(b).or_default().insert(a);
        inserted
    }

    /// Returns `true` if the edge `a → b` is present.
    pub fn contains(&self, a: K, b: K) -> bool {
        self.forward.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Keys `b` with an edge `a → b`.
    pub fn outgoing(&self, a: K) -> impl Iterator<Item = K> + '_ {
        self.forward.get(&a).into_iter().flatten().copied()
    }

    /// Keys `a` with an edge `a → b`.
    pub fn incoming(&self, b: K) -> impl Iterator<Item = K> + '_ {
        self.reverse.get(&b).into_iter().flatten().copied()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.forward.values().map(HashSet::len).sum()
    }

    /// Returns `true` if the relation has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `b` can be reached from `a` following edges forward.
    ///
    /// Every key reaches itself.
    pub fn has_path_between(&self, a: K, b: K) -> bool {
        if a == b {
            return true;
        }
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(a);
        queue.push_back(a);
        while let Some(key) = queue.pop_front() {
            for next in self.outgoing(key) {
                if next == b {
                    return true;
                }
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Returns `true` if either key reaches the other, i.e. the two are order-comparable.
    pub fn has_path_or_reverse_path_between(&self, a: K, b: K) -> bool {
        self.has_path_between(a, b) || self.has_path_between(b, a)
    }

    /// Folds `merge_keys` into `result`.
    ///
    /// `result` inherits every outgoing and incoming edge of every merged key. Edges between
    /// members of the merged group become self edges and are dropped. Merged keys are left
    /// without any edges.
    ///
    /// Merging keys that are order-comparable collapses an ordering and is a caller error.
    pub fn merge(&mut self, result: K, merge_keys: &[K]) {
        let in_group = |k: K| k == result || merge_keys.contains(&k);
        for &key in merge_keys {
            if key == result {
                continue;
            }
            if let Some(targets) = self.forward.remove(&key) {
                for target in targets {
                    if let Some(sources) = self.reverse.get_mut(&target) {
                        sources.remove(&key);
                    }
                    if !in_group(target) {
                        self.add(result, target);
                    }
                }
            }
            if let Some(sources) = self.reverse.remove(&key) {
                for source in sources {
                    if let Some(targets) = self.forward.get_mut(&source) {
                        targets.remove(&key);
                    }
                    if !in_group(source) {
                        self.add(source, result);
                    }
                }
            }
        }
    }
}
