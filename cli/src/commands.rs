//! Subcommand implementations
//!
//! Each command renders from a `Session`, which holds the tree built once at
//! startup along with the resolved configuration.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use series_engine::{
    build_tree, collect_outcomes, group_by_length, stats, Outcome, Sequence, SeriesStats,
    SeriesTree,
};
use series_tree::{help_text, level_diagram, sequence_listing, stats_panel, TreeView};

use crate::config::SeriesConfig;

/// Tree and configuration shared by every command
pub struct Session {
    pub tree: SeriesTree,
    pub config: SeriesConfig,
}

impl Session {
    pub fn new(config: SeriesConfig) -> Result<Self> {
        let tree = build_tree(config.wins_needed)
            .with_context(|| format!("cannot build a series for {} wins", config.wins_needed))?;
        log::info!(
            "series tree ready: {} wins needed, {} nodes",
            tree.wins_needed(),
            tree.len()
        );
        Ok(Session { tree, config })
    }

    pub fn stats(&self) -> SeriesStats {
        stats(self.tree.wins_needed(), collect_outcomes(&self.tree))
    }
}

/// How much of the tree to open before printing
#[derive(Debug, Clone, Copy, Default)]
pub struct Expansion {
    pub all: bool,
    pub depth: Option<usize>,
    pub rows: Option<usize>,
}

pub fn tree(session: &Session, expansion: Expansion) -> String {
    let mut view = TreeView::new(&session.tree);
    if expansion.all {
        view.expand_all();
    } else if let Some(depth) = expansion.depth {
        view.expand_to_depth(depth);
    } else {
        view.expand_rows(expansion.rows.unwrap_or(session.config.initial_rows));
    }
    view.render(&session.config.names(), &session.config.style())
}

/// Subtree reached by `path`, opened one level
pub fn show(session: &Session, path: &str) -> Result<String> {
    let sequence: Sequence = path
        .parse()
        .with_context(|| format!("invalid sequence '{}'", path))?;
    let mut view = TreeView::new(&session.tree);
    let Some(id) = view.focus(&sequence) else {
        bail!(
            "sequence '{}' continues past the end of the series",
            sequence.compact()
        );
    };
    view.expand(id);
    log::debug!("showing node {} for path '{}'", id, sequence.compact());
    Ok(view.render_from(id, &session.config.names(), &session.config.style()))
}

pub fn list(session: &Session) -> String {
    let groups = group_by_length(collect_outcomes(&session.tree));
    sequence_listing(&groups, &session.config.names())
}

/// Every node, grouped by games played, with node and edge totals
pub fn diagram(session: &Session) -> String {
    level_diagram(
        &session.tree,
        &session.config.names(),
        &session.config.style(),
    )
}

pub fn summary(session: &Session, verify: bool) -> Result<String> {
    let stats = session.stats();
    if verify {
        stats.verify().context("enumeration disagrees with the closed form")?;
        log::info!("outcome counts match 2·C(L−1, n−1) for every length");
    }
    Ok(stats_panel(&session.tree, &stats, &session.config.names()))
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    wins_needed: u32,
    nodes: usize,
    edges: usize,
    stats: SeriesStats,
    outcomes: Vec<&'a Outcome>,
}

/// Outcomes and stats as pretty JSON, to `output` or stdout
pub fn export(session: &Session, output: Option<&Path>) -> Result<()> {
    let document = ExportDocument {
        wins_needed: session.tree.wins_needed(),
        nodes: session.tree.len(),
        edges: session.tree.edge_count(),
        stats: session.stats(),
        outcomes: collect_outcomes(&session.tree).collect(),
    };
    let json = serde_json::to_string_pretty(&document).context("failed to serialize outcomes")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("exported {} outcomes to {}", document.outcomes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("failed to write to stdout")?;
        }
    }
    Ok(())
}

pub fn guide(session: &Session) -> String {
    help_text(session.tree.wins_needed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(wins_needed: i64) -> Session {
        Session::new(SeriesConfig {
            wins_needed,
            color: false,
            ..SeriesConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_session_rejects_invalid_wins() {
        let err = Session::new(SeriesConfig {
            wins_needed: 0,
            ..SeriesConfig::default()
        })
        .err()
        .unwrap();
        assert!(format!("{:#}", err).contains("wins needed must be positive"));
    }

    #[test]
    fn test_tree_default_expansion() {
        let text = tree(&session(4), Expansion::default());
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_tree_expand_all() {
        let text = tree(
            &session(4),
            Expansion {
                all: true,
                ..Expansion::default()
            },
        );
        assert_eq!(text.lines().count(), 139);
    }

    #[test]
    fn test_show_path() {
        let text = show(&session(4), "a-a-a").unwrap();
        assert!(text.starts_with("[-] Game 3 (A:2-B:0) → A wins"));
        assert!(text.contains("TEAM A WINS (A-A-A-A) - 4 games"));
    }

    #[test]
    fn test_show_rejects_bad_paths() {
        let s = session(4);
        assert!(show(&s, "AXB").is_err());
        assert!(show(&s, "AAAAA").is_err());
    }

    #[test]
    fn test_summary_with_verify() {
        let text = summary(&session(4), true).unwrap();
        assert!(text.contains("Total possible outcomes: 70"));
    }

    #[test]
    fn test_diagram_uses_team_names() {
        let s = Session::new(SeriesConfig {
            wins_needed: 1,
            team_a: "Cubs".to_string(),
            color: false,
            ..SeriesConfig::default()
        })
        .unwrap();
        let text = diagram(&s);
        assert!(text.contains("Level 0 (1 node):\n  Start 0-0\n"));
        assert!(text.contains("  Cubs wins A (1-0)\n  B wins B (0-1)\n"));
        assert!(text.ends_with("Total: 3 nodes, 2 edges\n"));
    }

    #[test]
    fn test_list_counts() {
        let text = list(&session(2));
        assert!(text.contains("SERIES OF 2 GAMES (2 ways):"));
        assert!(text.contains("SERIES OF 3 GAMES (4 ways):"));
    }
}
