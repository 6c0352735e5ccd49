use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::cmp::{Comparator, OrdComparator};
use crate::error::{Error, Result};
use crate::node::{Link, Node, NodeRef};
use crate::random::{GeometricSampler, HeightSampler};

pub const DEFAULT_MAX_HEIGHT: usize = 12;

/// Probabilistic ordered set used as an in-memory index.
///
/// Multiple levels of forward chains let every operation run in expected
/// O(log n) with no rebalancing; level 0 holds all live keys in comparator
/// order. Single threaded, callers needing concurrent access must wrap it
/// in their own synchronization.
pub struct SkipList<K, C = OrdComparator> {
    head: NodeRef<K>,
    size: usize,
    cmp: C,
    sampler: Box<dyn HeightSampler>,
    max_height: usize,
}

impl<K: Ord> SkipList<K, OrdComparator> {
    /// Natural-order list with the default height cap.
    pub fn with_seed(seed: u64) -> Self {
        SkipList {
            head: Node::head(DEFAULT_MAX_HEIGHT),
            size: 0,
            cmp: OrdComparator,
            sampler: Box::new(GeometricSampler::new(DEFAULT_MAX_HEIGHT, seed)),
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl<K, C: Comparator<K>> SkipList<K, C> {
    pub fn new(cmp: C, max_height: usize, seed: u64) -> Result<Self> {
        Self::with_sampler(cmp, Box::new(GeometricSampler::new(max_height, seed)))
    }

    /// Builds a list around a caller-provided height sampler; the sampler's
    /// cap becomes the list's maximum height for its whole lifetime.
    pub fn with_sampler(cmp: C, sampler: Box<dyn HeightSampler>) -> Result<Self> {
        let max_height = sampler.max_height();
        if max_height == 0 {
            return Err(Error::InvalidArgument(
                "max height must be at least 1".to_string(),
            ));
        }
        Ok(SkipList {
            head: Node::head(max_height),
            size: 0,
            cmp,
            sampler,
            max_height,
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }

    fn compare_next(&self, next: &NodeRef<K>, key: &K) -> Ordering {
        match next.borrow().key() {
            Some(k) => self.cmp.compare(k, key),
            // The header never appears as a successor.
            None => Ordering::Greater,
        }
    }

    /// Checks whether a key equivalent to `key` is present, where keys `a`
    /// and `b` are equivalent when neither compares less than the other.
    pub fn contains(&self, key: &K) -> bool {
        let mut cur = Rc::clone(&self.head);
        for level in (0..self.max_height).rev() {
            loop {
                let next = cur.borrow().link(level);
                match next {
                    Some(n) => match self.compare_next(&n, key) {
                        Ordering::Less => cur = n,
                        Ordering::Equal => return true,
                        Ordering::Greater => break,
                    },
                    None => break,
                }
            }
        }
        false
    }

    /// Top-down scan recording, per level, the last node visited before the
    /// descent. Consecutive levels sharing a predecessor collapse into one
    /// record, so each entry serves a contiguous band of levels up to its
    /// own height, the deepest band last. Also reports the node equivalent
    /// to `key` when one exists.
    fn find_prevs(&self, key: &K) -> (Vec<NodeRef<K>>, Link<K>) {
        let mut prevs: Vec<NodeRef<K>> = Vec::new();
        let mut found = None;
        let mut cur = Rc::clone(&self.head);

        for level in (0..self.max_height).rev() {
            loop {
                let next = cur.borrow().link(level);
                match next {
                    Some(n) => match self.compare_next(&n, key) {
                        Ordering::Less => cur = n,
                        Ordering::Equal => {
                            found = Some(n);
                            break;
                        }
                        Ordering::Greater => break,
                    },
                    None => break,
                }
            }
            let recorded = prevs.last().map_or(false, |top| Rc::ptr_eq(top, &cur));
            if !recorded {
                prevs.push(Rc::clone(&cur));
            }
        }
        (prevs, found)
    }

    /// Inserts `key`, returning false without mutation if an equivalent key
    /// is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (mut prevs, found) = self.find_prevs(&key);
        if found.is_some() {
            return false;
        }

        let height = self.sampler.sample();
        debug_assert!((1..=self.max_height).contains(&height));
        let node = Node::new(key, height);

        // Consume predecessor bands bottom-up; each one splices the new
        // node at every level it owns that still needs linking.
        let mut level = 0;
        while level < height {
            let prev = match prevs.pop() {
                Some(p) => p,
                None => break,
            };
            let band = height.min(prev.borrow().height());
            while level < band {
                let next = prev.borrow().link(level);
                node.borrow_mut().set_link(level, next);
                prev.borrow_mut().set_link(level, Some(Rc::clone(&node)));
                level += 1;
            }
        }

        self.size += 1;
        true
    }

    /// Removes the key equivalent to `key`, returning false without
    /// mutation if none is present.
    pub fn remove(&mut self, key: &K) -> bool {
        let (mut prevs, found) = self.find_prevs(key);
        let target = match found {
            Some(t) => t,
            None => return false,
        };

        // Unsplice across the target's levels, taking its own links so it
        // releases its successors and becomes unreachable.
        let height = target.borrow().height();
        let mut level = 0;
        while level < height {
            let prev = match prevs.pop() {
                Some(p) => p,
                None => break,
            };
            let band = height.min(prev.borrow().height());
            while level < band {
                let next = target.borrow_mut().take_link(level);
                prev.borrow_mut().set_link(level, next);
                level += 1;
            }
        }

        self.size -= 1;
        true
    }

    /// Removes every element and resets the count.
    pub fn clear(&mut self) {
        self.size = 0;
        self.drop_chains();
    }

    /// Ascending scan over the level-0 chain.
    ///
    /// The iterator borrows the list, so mutating while one is live does
    /// not compile:
    ///
    /// ```compile_fail
    /// use rskiplist::SkipList;
    ///
    /// let mut list = SkipList::with_seed(0);
    /// list.insert(1);
    /// let mut it = list.iter();
    /// list.clear();
    /// it.next();
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            current: self.head.borrow().link(0),
            _list: PhantomData,
        }
    }
}

impl<K: fmt::Debug, C: Comparator<K>> SkipList<K, C> {
    /// Key/height listing in ascending order, for diagnostics only; the
    /// format carries no stability guarantee.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut cur = self.head.borrow().link(0);
        while let Some(node) = cur {
            let n = node.borrow();
            if let Some(key) = n.key() {
                out.push_str(&format!(
                    "Node {{ key: {:?}, height: {} }}\n",
                    key,
                    n.height()
                ));
            }
            cur = n.link(0);
        }
        out
    }
}

impl<K, C> SkipList<K, C> {
    /// Detaches one link at a time, level by level. Letting the chains drop
    /// as one nested cascade would recurse once per node and can exhaust
    /// the call stack on large lists.
    fn drop_chains(&mut self) {
        for level in 0..self.max_height {
            let mut cur = self.head.borrow_mut().take_link(level);
            while let Some(node) = cur {
                cur = node.borrow_mut().take_link(level);
            }
        }
    }
}

impl<K, C> Drop for SkipList<K, C> {
    fn drop(&mut self) {
        self.drop_chains();
    }
}

/// Forward iterator over the bottom chain; yields keys in comparator order.
/// Holds a shared borrow of the list for its whole lifetime.
pub struct Iter<'a, K> {
    current: Link<K>,
    _list: PhantomData<&'a Node<K>>,
}

impl<'a, K: Clone> Iterator for Iter<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.current.take()?;
        let n = node.borrow();
        let key = n.key().cloned();
        self.current = n.link(0);
        key
    }
}
