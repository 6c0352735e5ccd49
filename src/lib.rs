mod cmp;
mod error;
mod node;
mod random;
mod skiplist;

pub use cmp::{Comparator, OrdComparator, ReverseComparator};
pub use error::{Error, Result};
pub use node::{Link, Node, NodeRef};
pub use random::{GeometricSampler, HeightSampler, BRANCHING_FACTOR};
pub use skiplist::{Iter, SkipList, DEFAULT_MAX_HEIGHT};
