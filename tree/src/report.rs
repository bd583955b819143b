//! Text panels: statistics, the full sequence listing, the level diagram
//! and the usage guide
//!
//! Each panel is a small struct with a `Display` impl; the free functions
//! render them to strings.

use std::collections::BTreeMap;
use std::fmt;

use colored::Colorize;
use series_engine::{Node, Outcome, SeriesStats, SeriesTree, Team};

use crate::label::{compact_label, root_label, Names};
use crate::view::Style;

/// Write a title underlined with `rule`, followed by a blank line
fn section(f: &mut fmt::Formatter<'_>, title: &str, rule: &str, width: usize) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}\n", rule.repeat(width))
}

/// Write a `• ` prefixed line
fn bullet(f: &mut fmt::Formatter<'_>, text: fmt::Arguments<'_>) -> fmt::Result {
    writeln!(f, "• {}", text)
}

/// Statistics side panel
pub struct StatsPanel<'a> {
    pub tree: &'a SeriesTree,
    pub stats: &'a SeriesStats,
    pub names: &'a Names,
}

impl fmt::Display for StatsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let StatsPanel { tree, stats, names } = *self;
        let n = stats.wins_needed;
        let shortest = stats.shortest().unwrap_or(n);
        let longest = stats.longest().unwrap_or((2 * n).saturating_sub(1));

        section(f, "SERIES STATISTICS", "═", 35)?;

        writeln!(f, "RULES:")?;
        bullet(f, format_args!("First team to win {} games is champion", n))?;
        bullet(f, format_args!("Minimum: {} games ({}-0)", shortest, n))?;
        bullet(
            f,
            format_args!(
                "Maximum: {} games ({}-{})\n",
                longest,
                n,
                longest.saturating_sub(n)
            ),
        )?;

        writeln!(f, "RESULTS:")?;
        bullet(f, format_args!("Total possible outcomes: {}", stats.total))?;
        bullet(f, format_args!("Each team can win: {} ways", stats.per_winner))?;
        for team in Team::ALL {
            bullet(
                f,
                format_args!("Team {} wins: {}", names.name(team), stats.wins(team)),
            )?;
        }
        bullet(
            f,
            format_args!(
                "Tree size: {} nodes, {} edges\n",
                tree.len(),
                tree.edge_count()
            ),
        )?;

        writeln!(f, "DISTRIBUTION BY LENGTH:")?;
        for (&length, &count) in &stats.count_by_length {
            bullet(
                f,
                format_args!(
                    "{} games: {} ways ({:.1}%)",
                    length,
                    count,
                    stats.share(length)
                ),
            )?;
        }
        writeln!(f)?;

        writeln!(f, "NAVIGATION:")?;
        bullet(f, format_args!("[+] rows can be expanded, [-] rows collapsed"))?;
        bullet(f, format_args!("Use expand all / collapse all to open or fold the tree"))?;
        bullet(f, format_args!("WINS rows mark the end of a series\n"))?;

        writeln!(f, "LEGEND:")?;
        for team in Team::ALL {
            bullet(
                f,
                format_args!("{} = Team {} wins the game", team.symbol(), names.name(team)),
            )?;
        }
        bullet(f, format_args!("{} = current wins", names.score_legend()))
    }
}

/// Every sequence, grouped by series length and numbered within each group
pub struct SequenceListing<'a> {
    pub groups: &'a BTreeMap<u32, Vec<Outcome>>,
    pub names: &'a Names,
}

impl fmt::Display for SequenceListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        section(f, "ALL POSSIBLE SERIES SEQUENCES", "═", 50)?;
        for (length, outcomes) in self.groups {
            writeln!(f, "SERIES OF {} GAMES ({} ways):", length, outcomes.len())?;
            writeln!(f, "{}", "─".repeat(40))?;
            for (i, outcome) in outcomes.iter().enumerate() {
                writeln!(
                    f,
                    "{:2}. {} → Team {} - {} games",
                    i + 1,
                    outcome.sequence,
                    self.names.name(outcome.winner),
                    outcome.length
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Every node of the tree, one level (games played) at a time
pub struct LevelDiagram<'a> {
    pub tree: &'a SeriesTree,
    pub names: &'a Names,
    pub style: Style,
}

impl LevelDiagram<'_> {
    fn paint(&self, node: &Node) -> String {
        let label = compact_label(node, self.names);
        if !self.style.color {
            return label;
        }
        match node.outcome().map(|o| o.winner) {
            Some(Team::A) => label.blue().to_string(),
            Some(Team::B) => label.red().to_string(),
            None => label.green().to_string(),
        }
    }
}

impl fmt::Display for LevelDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut levels: BTreeMap<usize, Vec<&Node>> = BTreeMap::new();
        for node in self.tree.nodes() {
            levels.entry(node.depth()).or_default().push(node);
        }

        section(f, &root_label(self.tree.wins_needed()), "═", 50)?;
        for (depth, nodes) in &levels {
            let noun = if nodes.len() == 1 { "node" } else { "nodes" };
            writeln!(f, "Level {} ({} {}):", depth, nodes.len(), noun)?;
            for node in nodes {
                writeln!(f, "  {}", self.paint(node))?;
            }
        }
        writeln!(
            f,
            "\nTotal: {} nodes, {} edges",
            self.tree.len(),
            self.tree.edge_count()
        )
    }
}

/// Usage guide
pub struct HelpText {
    pub wins_needed: u32,
}

impl fmt::Display for HelpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.wins_needed;
        let longest = 2 * n.max(1) - 1;

        section(f, "SERIES TREE - HELP", "═", 35)?;
        writeln!(f, "HOW TO USE:")?;
        bullet(f, format_args!("The tree shows every way the series can finish"))?;
        bullet(f, format_args!("Each row is one game and who won it"))?;
        bullet(f, format_args!("WINS rows show the end of the series\n"))?;

        writeln!(f, "RULES:")?;
        bullet(f, format_args!("First team to win {} games is champion", n))?;
        bullet(
            f,
            format_args!("A series lasts between {} and {} games\n", n, longest),
        )?;

        writeln!(f, "NAVIGATION:")?;
        bullet(f, format_args!("`series tree --rows N` opens the first N rows"))?;
        bullet(f, format_args!("`series tree --expand-all` opens every row"))?;
        bullet(f, format_args!("`series show AAB` opens the path A, A, B"))?;
        bullet(f, format_args!("`series diagram` prints every node level by level"))?;
        bullet(f, format_args!("`series explore` toggles rows interactively\n"))?;

        writeln!(f, "INTERPRETATION:")?;
        bullet(f, format_args!("(A:X-B:Y) = wins of each team before the game"))?;
        bullet(f, format_args!("A/B = team that won that particular game"))?;
        bullet(
            f,
            format_args!(
                "Total: {} possible ways to finish",
                series_engine::stats::expected_total(n)
            ),
        )
    }
}

pub fn stats_panel(tree: &SeriesTree, stats: &SeriesStats, names: &Names) -> String {
    StatsPanel { tree, stats, names }.to_string()
}

pub fn sequence_listing(groups: &BTreeMap<u32, Vec<Outcome>>, names: &Names) -> String {
    SequenceListing { groups, names }.to_string()
}

pub fn level_diagram(tree: &SeriesTree, names: &Names, style: &Style) -> String {
    LevelDiagram {
        tree,
        names,
        style: *style,
    }
    .to_string()
}

pub fn help_text(wins_needed: u32) -> String {
    HelpText { wins_needed }.to_string()
}
