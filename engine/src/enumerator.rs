//! Exhaustive enumeration of series outcomes
//!
//! Builds the full tree of win/loss sequences for a series won by the first
//! side to reach `wins_needed` games. Every open state branches into "A wins
//! the next game" and "B wins the next game"; both branches are always
//! explored. The tree has `2·C(2n, n) − 1` nodes for `n` wins, so it grows
//! exponentially and the builder refuses sizes above [`MAX_WINS_NEEDED`].

use crate::error::{Error, Result};
use crate::node::{Node, NodeId, Outcome, Score, Sequence, SeriesTree, Team};
use crate::stats::expected_node_count;

/// Largest supported series.
///
/// 10 wins gives 369,511 nodes. Each node is 64 bytes plus its own heap
/// copy of the sequence, about 100 bytes in all, so the largest tree takes
/// roughly 35 MB. Every extra win roughly quadruples that.
pub const MAX_WINS_NEEDED: u32 = 10;

/// Wins needed in a best-of-seven series
pub const DEFAULT_WINS_NEEDED: u32 = 4;

/// Build the complete series tree for `wins_needed` wins.
///
/// The root is the 0-0 state before game 1. Node IDs follow depth-first
/// pre-order with A's branch first.
pub fn build_tree(wins_needed: i64) -> Result<SeriesTree> {
    if wins_needed <= 0 {
        return Err(Error::InvalidParameter { wins_needed });
    }
    if wins_needed > MAX_WINS_NEEDED as i64 {
        return Err(Error::TooLarge {
            wins_needed,
            max: MAX_WINS_NEEDED,
        });
    }
    let wins_needed = wins_needed as u32;

    let mut builder = Builder {
        wins_needed,
        nodes: Vec::with_capacity(expected_node_count(wins_needed) as usize),
    };
    builder.expand(None, Score::default(), Sequence::new());

    let tree = SeriesTree {
        wins_needed,
        nodes: builder.nodes,
    };
    log::debug!(
        "built series tree for {} wins: {} nodes, {} outcomes",
        wins_needed,
        tree.len(),
        tree.leaf_count()
    );
    Ok(tree)
}

struct Builder {
    wins_needed: u32,
    nodes: Vec<Node>,
}

impl Builder {
    /// Push the node for `score`/`sequence` and everything below it.
    /// Returns the ID of the pushed node.
    fn expand(&mut self, parent: Option<NodeId>, score: Score, sequence: Sequence) -> NodeId {
        let id = self.nodes.len() as NodeId;
        let game = score.games_played() + 1;

        if let Some(winner) = Team::ALL
            .into_iter()
            .find(|&team| score.wins(team) == self.wins_needed)
        {
            let length = sequence.len() as u32;
            self.nodes.push(Node::Final {
                id,
                parent,
                game,
                score,
                outcome: Outcome {
                    winner,
                    sequence,
                    length,
                },
            });
            return id;
        }

        let next_a = sequence.extended(Team::A);
        let next_b = sequence.extended(Team::B);
        self.nodes.push(Node::Game {
            id,
            parent,
            game,
            score,
            sequence,
            children: [0, 0],
        });

        let a = self.expand(Some(id), score.record(Team::A), next_a);
        let b = self.expand(Some(id), score.record(Team::B), next_b);
        if let Some(Node::Game { children, .. }) = self.nodes.get_mut(id as usize) {
            *children = [a, b];
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            build_tree(0).unwrap_err(),
            Error::InvalidParameter { wins_needed: 0 }
        );
        assert_eq!(
            build_tree(-3).unwrap_err(),
            Error::InvalidParameter { wins_needed: -3 }
        );
    }

    #[test]
    fn test_rejects_oversized() {
        assert!(matches!(
            build_tree(MAX_WINS_NEEDED as i64 + 1),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn test_largest_supported_size_builds() {
        let tree = build_tree(MAX_WINS_NEEDED as i64).unwrap();
        assert_eq!(tree.len(), 369_511);
        assert_eq!(tree.len() as u64, expected_node_count(MAX_WINS_NEEDED));
        assert_eq!(
            build_tree(MAX_WINS_NEEDED as i64 + 1).unwrap_err(),
            Error::TooLarge {
                wins_needed: 11,
                max: 10
            }
        );
    }

    #[test]
    fn test_root_is_open_game() {
        let tree = build_tree(4).unwrap();
        match tree.root() {
            Node::Game { id, parent, game, score, sequence, children } => {
                assert_eq!(*id, 0);
                assert_eq!(*parent, None);
                assert_eq!(*game, 1);
                assert_eq!(*score, Score::default());
                assert!(sequence.is_empty());
                assert_eq!(children[0], 1, "A's branch is pushed first");
            }
            _ => panic!("root should be a Game node"),
        }
    }

    #[test]
    fn test_node_and_edge_counts() {
        let tree = build_tree(4).unwrap();
        assert_eq!(tree.len(), 139);
        assert_eq!(tree.edge_count(), 138);
        assert_eq!(tree.leaf_count(), 70);
    }

    #[test]
    fn test_node_ids_match_array_index() {
        let tree = build_tree(4).unwrap();
        for (idx, node) in tree.nodes().iter().enumerate() {
            assert_eq!(node.id() as usize, idx, "node id mismatch at index {}", idx);
        }
    }

    #[test]
    fn test_children_point_back_to_parent() {
        let tree = build_tree(3).unwrap();
        for node in tree.nodes() {
            for &child_id in node.children() {
                let child = tree.get(child_id).expect("child id in bounds");
                assert_eq!(child.parent(), Some(node.id()));
                assert_eq!(child.depth(), node.depth() + 1);
            }
        }
    }

    #[test]
    fn test_game_nodes_have_two_children() {
        let tree = build_tree(4).unwrap();
        for node in tree.nodes() {
            let expected = if node.is_terminal() { 0 } else { 2 };
            assert_eq!(node.children().len(), expected, "node {}", node.id());
        }
    }

    #[test]
    fn test_final_game_index_is_length_plus_one() {
        let tree = build_tree(4).unwrap();
        for node in tree.nodes() {
            if let Some(outcome) = node.outcome() {
                assert_eq!(node.game(), outcome.length + 1);
            }
        }
    }

    #[test]
    fn test_find_follows_path() {
        let tree = build_tree(4).unwrap();
        let node = tree.find(&"AAB".parse().unwrap()).unwrap();
        assert_eq!(node.score(), Score::new(2, 1));
        assert_eq!(node.game(), 4);

        let leaf = tree.find(&"BBBB".parse().unwrap()).unwrap();
        assert_eq!(leaf.outcome().map(|o| o.winner), Some(Team::B));

        assert!(tree.find(&"BBBBA".parse().unwrap()).is_none());
        assert_eq!(tree.find(&Sequence::new()).map(Node::id), Some(0));
    }
}
