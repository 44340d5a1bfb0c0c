use std::collections::HashSet;

use log::warn;

use crate::algorithm::PredecessorMap;
use crate::graph::NodeId;
use crate::{Error, Result};

/// Reconstructs the path from `start` to `end` by walking predecessor links
/// back from `end`.
///
/// Fails with [`Error::UnknownNode`] if `end` (or a node on its chain) is not a
/// key of `previous`, and with [`Error::Unreachable`] if the chain does not
/// lead back to `start`.
pub fn reconstruct_path<N: NodeId>(previous: &PredecessorMap<N>, start: &N, end: &N) -> Result<Vec<N>> {
    if !previous.contains_key(end) {
        return Err(Error::unknown_node(end));
    }

    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(end);

    // Build path in reverse order
    while let Some(node) = current {
        if !seen.insert(node) {
            warn!("Cycle in predecessor map at {:?} while tracing {:?}", node, end);
            return Err(Error::unreachable(start, end));
        }
        path.push(node.clone());
        current = match previous.get(node) {
            Some(pred) => pred.as_ref(),
            None => return Err(Error::unknown_node(node)),
        };
    }

    path.reverse();

    if path.first() != Some(start) {
        return Err(Error::unreachable(start, end));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn previous(links: &[(&'static str, Option<&'static str>)]) -> PredecessorMap<&'static str> {
        links.iter().cloned().collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_path_follows_links_forward() {
        let prev = previous(&[("A", None), ("B", Some("A")), ("C", Some("A")), ("D", Some("C"))]);
        assert_eq!(reconstruct_path(&prev, &"A", &"D").unwrap(), vec!["A", "C", "D"]);
        assert_eq!(reconstruct_path(&prev, &"A", &"B").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_start_equals_end() {
        let prev = previous(&[("A", None)]);
        assert_eq!(reconstruct_path(&prev, &"A", &"A").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_chain_not_reaching_start_is_unreachable() {
        let prev = previous(&[("A", None), ("B", Some("A")), ("C", None)]);
        assert!(matches!(
            reconstruct_path(&prev, &"A", &"C"),
            Err(Error::Unreachable { .. })
        ));
        // A chain ending at another root is not a path from the start either
        assert!(matches!(
            reconstruct_path(&prev, &"C", &"B"),
            Err(Error::Unreachable { .. })
        ));
    }

    #[test]
    fn test_unknown_end() {
        let prev = previous(&[("A", None)]);
        assert!(matches!(
            reconstruct_path(&prev, &"A", &"Z"),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn test_cyclic_links_terminate() {
        let prev = previous(&[("A", None), ("B", Some("C")), ("C", Some("B"))]);
        assert!(matches!(
            reconstruct_path(&prev, &"A", &"B"),
            Err(Error::Unreachable { .. })
        ));
    }

    #[test]
    fn test_dangling_link_is_unknown_node() {
        let prev = previous(&[("A", None), ("B", Some("X"))]);
        assert!(matches!(
            reconstruct_path(&prev, &"A", &"B"),
            Err(Error::UnknownNode(_))
        ));
    }
}
