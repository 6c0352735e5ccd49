use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

/// Shared handle to a node. A node may be pointed at by up to `max_height`
/// predecessors at once, one per level, so links are reference counted
/// rather than uniquely owned.
pub type NodeRef<K> = Rc<RefCell<Node<K>>>;

/// Forward link at one level; `None` marks the end of the chain.
pub type Link<K> = Option<NodeRef<K>>;

/// One element of the skip list: a key and a tower of forward links,
/// index 0 being the bottom level that contains every live element.
/// The tower height is fixed at creation.
pub struct Node<K> {
    key: Option<K>,
    links: Vec<Link<K>>,
}

impl<K> Node<K> {
    /// Allocates a detached node with `height` empty forward links.
    pub fn new(key: K, height: usize) -> NodeRef<K> {
        Rc::new(RefCell::new(Node {
            key: Some(key),
            links: vec![None; height],
        }))
    }

    /// The keyless sentinel; its tower spans every level of the list.
    pub(crate) fn head(max_height: usize) -> NodeRef<K> {
        Rc::new(RefCell::new(Node {
            key: None,
            links: vec![None; max_height],
        }))
    }

    /// Number of levels this node participates in.
    pub fn height(&self) -> usize {
        self.links.len()
    }

    /// The stored key; `None` only for the sentinel header.
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Forward link at `level`, or an error if `level >= height()`.
    pub fn next(&self, level: usize) -> Result<Link<K>> {
        if level >= self.links.len() {
            return Err(Error::LevelOutOfRange {
                level,
                height: self.links.len(),
            });
        }
        Ok(self.links[level].clone())
    }

    /// Installs `link` at `level`, or an error if `level >= height()`.
    pub fn set_next(&mut self, level: usize, link: Link<K>) -> Result<()> {
        if level >= self.links.len() {
            return Err(Error::LevelOutOfRange {
                level,
                height: self.links.len(),
            });
        }
        self.links[level] = link;
        Ok(())
    }

    // The container computes its level indices from node heights, so it goes
    // through these direct accessors; an out-of-range index here is a bug.

    pub(crate) fn link(&self, level: usize) -> Link<K> {
        self.links[level].clone()
    }

    pub(crate) fn set_link(&mut self, level: usize, link: Link<K>) {
        self.links[level] = link;
    }

    pub(crate) fn take_link(&mut self, level: usize) -> Link<K> {
        self.links[level].take()
    }
}
