use std::collections::HashSet;
use std::collections::VecDeque;

use tracing::debug;

use super::aggregator::Aggregation;

/// Addresses to draw: breadth-first from `root` up to `max_depth` hops, plus
/// the immediate neighbors of every expanded address.
///
/// An expanded node only lifts the depth cutoff for its own neighbors; those
/// neighbors do not inherit the override. When `root` never appeared in the
/// transactions every known address is returned instead.
pub fn select_visible(
    aggregation: &Aggregation,
    root: &str,
    max_depth: usize,
    expanded: &HashSet<String>,
) -> HashSet<String> {
    if !aggregation.contains(root) {
        debug!("select_visible::root_not_found::{}::showing_all::{}", root, aggregation.address_count());
        return aggregation.addresses().map(str::to_string).collect();
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
    visited.insert(root);
    queue.push_back((root, 0));

    while let Some((address, depth)) = queue.pop_front() {
        if depth >= max_depth && !expanded.contains(address) {
            continue;
        }
        for neighbor in aggregation.neighbors(address) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    let mut visible: HashSet<String> = visited.into_iter().map(str::to_string).collect();

    for address in expanded {
        if !aggregation.contains(address) {
            continue;
        }
        visible.insert(address.clone());
        visible.extend(aggregation.neighbors(address).into_iter().map(str::to_string));
    }

    debug!(
        "select_visible::root::{}::max_depth::{}::expanded::{}::visible::{}",
        root,
        max_depth,
        expanded.len(),
        visible.len()
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregator::aggregate_normalized;
    use crate::model::NormalizedTransfer;

    fn chain(addresses: &[&str]) -> Aggregation {
        let transfers: Vec<NormalizedTransfer> = addresses
            .windows(2)
            .map(|pair| NormalizedTransfer {
                signature: format!("{}{}", pair[0], pair[1]),
                block_time: None,
                direction: None,
                from: Some(pair[0].to_string()),
                to: Some(pair[1].to_string()),
                value_usd: 1.0,
                token: None,
            })
            .collect();
        aggregate_normalized(&transfers)
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn depth_bounds_traversal() {
        let aggregation = chain(&["R", "A", "B", "C"]);
        assert_eq!(select_visible(&aggregation, "R", 1, &HashSet::new()), set(&["R", "A"]));
        assert_eq!(select_visible(&aggregation, "R", 2, &HashSet::new()), set(&["R", "A", "B"]));
        assert_eq!(select_visible(&aggregation, "R", 0, &HashSet::new()), set(&["R"]));
    }

    #[test]
    fn expansion_is_not_transitive() {
        let aggregation = chain(&["R", "A", "B", "C", "D"]);
        let visible = select_visible(&aggregation, "R", 1, &set(&["A"]));
        assert_eq!(visible, set(&["R", "A", "B"]));
    }

    #[test]
    fn expanded_node_outside_bfs_is_forced_in() {
        let aggregation = chain(&["R", "A", "B", "C", "D"]);
        let visible = select_visible(&aggregation, "R", 1, &set(&["C"]));
        assert_eq!(visible, set(&["R", "A", "B", "C", "D"]));
    }

    #[test]
    fn unknown_root_shows_everything() {
        let aggregation = chain(&["A", "B", "C"]);
        let visible = select_visible(&aggregation, "Nobody", 1, &HashSet::new());
        assert_eq!(visible, set(&["A", "B", "C"]));
    }

    #[test]
    fn cycles_terminate() {
        let aggregation = chain(&["R", "A", "B", "R"]);
        let visible = select_visible(&aggregation, "R", 10, &HashSet::new());
        assert_eq!(visible, set(&["R", "A", "B"]));
    }
}
