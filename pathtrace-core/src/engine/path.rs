//! Path reconstruction from a predecessor table.

use smallvec::SmallVec;

use super::PredecessorTable;
use crate::graph::NodeId;

/// Node ids from source to target, inclusive.
pub type Path = SmallVec<[NodeId; 8]>;

/// Walk `previous` backwards from `target` and return the path from `source`.
///
/// Returns an empty path when `target` is unknown or its predecessor chain
/// does not end at `source`. A target equal to the source yields the
/// single-node path.
pub fn reconstruct_path(previous: &PredecessorTable, source: &NodeId, target: &NodeId) -> Path {
    if !previous.contains_key(target) {
        return Path::new();
    }

    let mut path = Path::new();
    path.push(target.clone());

    let mut current = target;
    while current != source {
        // A well-formed table cannot loop, but the table is caller-supplied.
        if path.len() > previous.len() {
            return Path::new();
        }
        match previous.get(current) {
            Some(Some(prev)) => {
                path.push(prev.clone());
                current = prev;
            }
            _ => return Path::new(),
        }
    }

    path.reverse();
    path
}
