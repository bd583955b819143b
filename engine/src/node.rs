//! Node definitions for the series tree
//!
//! This module defines the types that represent states of a best-of-N
//! series. Nodes live in a flat arena indexed by `NodeId` and are never
//! mutated once the tree has been built.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// One of the two sides in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Both teams in branch order (A's branch is always enumerated first)
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// Get the opponent of this team
    pub fn opponent(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// One-letter symbol used in sequences
    pub fn symbol(self) -> char {
        match self {
            Team::A => 'A',
            Team::B => 'B',
        }
    }

    /// Child slot for this team's branch in a game node
    pub fn index(self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Games won by each side so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Score {
    pub wins_a: u32,
    pub wins_b: u32,
}

impl Score {
    /// Create a score from each side's wins
    pub fn new(wins_a: u32, wins_b: u32) -> Self {
        Score { wins_a, wins_b }
    }

    /// Get the wins of `team`
    pub fn wins(self, team: Team) -> u32 {
        match team {
            Team::A => self.wins_a,
            Team::B => self.wins_b,
        }
    }

    /// Total games played
    pub fn games_played(self) -> u32 {
        self.wins_a + self.wins_b
    }

    /// Score after one more game won by `team`
    pub fn record(self, team: Team) -> Score {
        match team {
            Team::A => Score::new(self.wins_a + 1, self.wins_b),
            Team::B => Score::new(self.wins_a, self.wins_b + 1),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins_a, self.wins_b)
    }
}

/// Ordered list of game winners
///
/// Displays dash-separated (`A-A-B-A`); `compact()` gives `AABA`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Sequence(Vec<Team>);

impl Sequence {
    pub fn new() -> Self {
        Sequence(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn teams(&self) -> &[Team] {
        &self.0
    }

    pub fn last(&self) -> Option<Team> {
        self.0.last().copied()
    }

    /// Copy of this sequence extended by one game won by `team`
    pub fn extended(&self, team: Team) -> Sequence {
        let mut teams = Vec::with_capacity(self.0.len() + 1);
        teams.extend_from_slice(&self.0);
        teams.push(team);
        Sequence(teams)
    }

    /// Score implied by the sequence
    pub fn score(&self) -> Score {
        self.0
            .iter()
            .fold(Score::default(), |score, &team| score.record(team))
    }

    pub fn compact(&self) -> String {
        self.0.iter().map(|t| t.symbol()).collect()
    }
}

impl From<Vec<Team>> for Sequence {
    fn from(teams: Vec<Team>) -> Self {
        Sequence(teams)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, team) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{team}")?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = Error;

    /// Parse `AABA`, `a-a-b-a` or `A A B A`. Dashes and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut teams = Vec::new();
        for (position, symbol) in s.chars().enumerate() {
            match symbol {
                'A' | 'a' => teams.push(Team::A),
                'B' | 'b' => teams.push(Team::B),
                '-' => {}
                c if c.is_whitespace() => {}
                _ => return Err(Error::InvalidSymbol { symbol, position }),
            }
        }
        Ok(Sequence(teams))
    }
}

/// A completed series: one side reached the required number of wins
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Outcome {
    pub winner: Team,
    pub sequence: Sequence,
    /// Number of games played
    pub length: u32,
}

impl Outcome {
    pub fn score(&self) -> Score {
        self.sequence.score()
    }
}

/// Node ID type (index into flat array storage)
pub type NodeId = u32;

/// Represents a state in the series tree
#[derive(Debug, Clone)]
pub enum Node {
    /// Series still open: the next game can go either way
    Game {
        /// Unique identifier for this node (index in flat array)
        id: NodeId,
        /// Parent node ID (None for root)
        parent: Option<NodeId>,
        /// 1-based index of the next game to be played
        game: u32,
        /// Wins so far
        score: Score,
        /// Winners of the games played to reach this node
        sequence: Sequence,
        /// `[A wins next game, B wins next game]`
        children: [NodeId; 2],
    },
    /// Series decided
    Final {
        id: NodeId,
        parent: Option<NodeId>,
        /// Always `outcome.length + 1`
        game: u32,
        score: Score,
        outcome: Outcome,
    },
}

impl Node {
    /// Get the node ID
    pub fn id(&self) -> NodeId {
        match self {
            Node::Game { id, .. } | Node::Final { id, .. } => *id,
        }
    }

    /// Get the parent node ID (None for root)
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Game { parent, .. } | Node::Final { parent, .. } => *parent,
        }
    }

    /// Child node IDs, A's branch first (empty for final nodes)
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Game { children, .. } => children,
            Node::Final { .. } => &[],
        }
    }

    /// Get the 1-based index of the next game
    pub fn game(&self) -> u32 {
        match self {
            Node::Game { game, .. } | Node::Final { game, .. } => *game,
        }
    }

    /// Get the wins so far
    pub fn score(&self) -> Score {
        match self {
            Node::Game { score, .. } | Node::Final { score, .. } => *score,
        }
    }

    /// Get the winners of the games played to reach this node
    pub fn sequence(&self) -> &Sequence {
        match self {
            Node::Game { sequence, .. } => sequence,
            Node::Final { outcome, .. } => &outcome.sequence,
        }
    }

    /// The completed series (only for final nodes)
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Node::Final { outcome, .. } => Some(outcome),
            Node::Game { .. } => None,
        }
    }

    /// Distance from the root (games played)
    pub fn depth(&self) -> usize {
        self.sequence().len()
    }

    /// Check if this is a final node
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Final { .. })
    }
}

/// Complete series tree
///
/// Contains a flat array of nodes in depth-first pre-order, A's branch
/// before B's at every game node. The root has ID 0.
#[derive(Debug, Clone)]
pub struct SeriesTree {
    pub(crate) wins_needed: u32,
    pub(crate) nodes: Vec<Node>,
}

impl SeriesTree {
    /// Wins required to take the series
    pub fn wins_needed(&self) -> u32 {
        self.wins_needed
    }

    /// Get the root node (0-0, before game 1)
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of final nodes (completed series)
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_terminal()).count()
    }

    /// Every node but the root has exactly one incoming edge
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Walk from the root following `sequence`
    ///
    /// Returns None when the path runs past a decided series.
    pub fn find(&self, sequence: &Sequence) -> Option<&Node> {
        let mut node = self.root();
        for &team in sequence.teams() {
            match node {
                Node::Game { children, .. } => node = self.get(children[team.index()])?,
                Node::Final { .. } => return None,
            }
        }
        Some(node)
    }
}
