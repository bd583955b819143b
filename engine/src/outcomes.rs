//! Flattened views over the completed series of a tree

use std::collections::BTreeMap;

use crate::node::{Node, NodeId, Outcome, SeriesTree};

/// Iterate every completed series in depth-first order, A's branch first.
///
/// Each call starts a fresh traversal; the iterator owns its own stack.
pub fn collect_outcomes(tree: &SeriesTree) -> Outcomes<'_> {
    let stack = if tree.is_empty() { Vec::new() } else { vec![0] };
    Outcomes { tree, stack }
}

/// Lazy depth-first iterator over final nodes
pub struct Outcomes<'a> {
    tree: &'a SeriesTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Outcomes<'a> {
    type Item = &'a Outcome;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            match self.tree.get(id)? {
                Node::Final { outcome, .. } => return Some(outcome),
                Node::Game { children, .. } => {
                    // B pushed first so that A's branch pops first
                    self.stack.extend(children.iter().rev());
                }
            }
        }
        None
    }
}

/// Partition outcomes by series length.
///
/// Keys iterate in ascending order; each group keeps encounter order.
pub fn group_by_length<'a, I>(outcomes: I) -> BTreeMap<u32, Vec<Outcome>>
where
    I: IntoIterator<Item = &'a Outcome>,
{
    let mut groups: BTreeMap<u32, Vec<Outcome>> = BTreeMap::new();
    for outcome in outcomes {
        groups
            .entry(outcome.length)
            .or_default()
            .push(outcome.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::build_tree;
    use crate::node::Team;

    #[test]
    fn test_outcome_count() {
        let tree = build_tree(4).unwrap();
        assert_eq!(collect_outcomes(&tree).count(), 70);
    }

    #[test]
    fn test_first_and_last_outcome() {
        let tree = build_tree(4).unwrap();
        let outcomes: Vec<_> = collect_outcomes(&tree).collect();

        let first = outcomes.first().unwrap();
        assert_eq!(first.sequence.compact(), "AAAA");
        assert_eq!(first.winner, Team::A);
        assert_eq!(first.length, 4);

        let last = outcomes.last().unwrap();
        assert_eq!(last.sequence.compact(), "BBBB");
        assert_eq!(last.winner, Team::B);
    }

    #[test]
    fn test_order_is_lexicographic() {
        // A before B at every branch means compact strings come out sorted
        // whenever one is not a prefix of another
        let tree = build_tree(4).unwrap();
        let compact: Vec<String> = collect_outcomes(&tree)
            .map(|o| o.sequence.compact())
            .collect();
        let mut sorted = compact.clone();
        sorted.sort();
        assert_eq!(compact, sorted);
    }

    #[test]
    fn test_restartable() {
        let tree = build_tree(3).unwrap();
        let first: Vec<_> = collect_outcomes(&tree).collect();
        let second: Vec<_> = collect_outcomes(&tree).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_by_length() {
        let tree = build_tree(4).unwrap();
        let groups = group_by_length(collect_outcomes(&tree));

        let keys: Vec<u32> = groups.keys().copied().collect();
        assert_eq!(keys, vec![4, 5, 6, 7]);
        let sizes: Vec<usize> = groups.values().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 8, 20, 40]);

        let four: Vec<String> = groups[&4].iter().map(|o| o.sequence.compact()).collect();
        assert_eq!(four, vec!["AAAA", "BBBB"]);
        assert_eq!(groups[&5][0].sequence.compact(), "AAABA");
    }

    #[test]
    fn test_group_by_length_empty() {
        let groups = group_by_length(std::iter::empty::<&Outcome>());
        assert!(groups.is_empty());
    }
}
