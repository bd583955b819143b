//! Display text for series tree nodes

use series_engine::{Node, Score, SeriesTree, Team};

/// Display names for the two sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    pub team_a: String,
    pub team_b: String,
}

impl Names {
    pub fn new(team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Names {
            team_a: team_a.into(),
            team_b: team_b.into(),
        }
    }

    pub fn name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    /// `(A:2-B:1)`
    pub fn score(&self, score: Score) -> String {
        format!(
            "({}:{}-{}:{})",
            self.team_a, score.wins_a, self.team_b, score.wins_b
        )
    }

    /// `(A:X-B:Y)`
    pub fn score_legend(&self) -> String {
        format!("({}:X-{}:Y)", self.team_a, self.team_b)
    }
}

impl Default for Names {
    fn default() -> Self {
        Names::new("A", "B")
    }
}

/// Heading shown on the root row
pub fn root_label(wins_needed: u32) -> String {
    format!("SERIES (first team to win {} games)", wins_needed)
}

/// Tree-widget text for a node.
///
/// Non-root open nodes describe the game that led to them, with the score
/// before that game: `Game 3 (A:1-B:1) → A wins`. Final nodes name the
/// champion: `TEAM A WINS (A-A-B-A-A) - 5 games`.
pub fn node_label(tree: &SeriesTree, node: &Node, names: &Names) -> String {
    match node {
        Node::Final { outcome, .. } => format!(
            "TEAM {} WINS ({}) - {} games",
            names.name(outcome.winner).to_uppercase(),
            outcome.sequence,
            outcome.length
        ),
        Node::Game { sequence, score, .. } => match sequence.last() {
            None => root_label(tree.wins_needed()),
            Some(winner) => {
                let before = match winner {
                    Team::A => Score::new(score.wins_a - 1, score.wins_b),
                    Team::B => Score::new(score.wins_a, score.wins_b - 1),
                };
                format!(
                    "Game {} {} → {} wins",
                    sequence.len(),
                    names.score(before),
                    names.name(winner)
                )
            }
        },
    }
}

/// Short diagram text: `Start 0-0`, `AAB (2-1)`, `A wins AABAA (4-1)`
pub fn compact_label(node: &Node, names: &Names) -> String {
    let score = node.score();
    match node.outcome() {
        Some(outcome) => format!(
            "{} wins {} ({})",
            names.name(outcome.winner),
            outcome.sequence.compact(),
            score
        ),
        None if node.sequence().is_empty() => format!("Start {}", score),
        None => format!("{} ({})", node.sequence().compact(), score),
    }
}
