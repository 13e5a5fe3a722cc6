//! A group of paths walked concurrently.

use rustc_hash::FxHashMap;

use af_core::NodeId;
use af_graph::Path;

use crate::{SelectError, SelectResult};

/// Ordered paths whose interiors (rooms other than start and end) are
/// pairwise disjoint.  Order is the selector's acceptance order, which is
/// ascending length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    /// Validate and wrap `paths`.
    ///
    /// # Errors
    ///
    /// [`SelectError::Empty`] for no paths, [`SelectError::Overlap`] if two
    /// paths share an interior room.
    pub fn new(paths: Vec<Path>) -> SelectResult<Self> {
        if paths.is_empty() {
            return Err(SelectError::Empty);
        }
        let mut owner: FxHashMap<NodeId, usize> = FxHashMap::default();
        for (i, p) in paths.iter().enumerate() {
            for &n in p.interior() {
                if let Some(&first) = owner.get(&n) {
                    return Err(SelectError::Overlap { first, second: i, node: n });
                }
                owner.insert(n, i);
            }
        }
        Ok(Self { paths })
    }

    /// A set holding one path.  Always valid.
    pub fn single(path: Path) -> Self {
        Self { paths: vec![path] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    #[inline]
    pub fn get(&self, i: usize) -> &Path {
        &self.paths[i]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Room count of the shortest path in the set.
    pub fn min_len(&self) -> usize {
        self.paths.iter().map(Path::len).min().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item     = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
