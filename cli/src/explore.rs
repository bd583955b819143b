//! Interactive tree explorer
//!
//! Lists the visible rows in a `dialoguer` picker; picking a row toggles it.
//! The entries below the rows mirror the buttons of a tree window.

use anyhow::Result;
use dialoguer::Select;
use series_engine::{collect_outcomes, group_by_length, stats};
use series_tree::{help_text, sequence_listing, stats_panel, TreeView};

use crate::commands::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ExpandAll,
    CollapseAll,
    Sequences,
    Stats,
    Help,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::ExpandAll,
        Action::CollapseAll,
        Action::Sequences,
        Action::Stats,
        Action::Help,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::ExpandAll => "» Expand all",
            Action::CollapseAll => "» Collapse all",
            Action::Sequences => "» View all sequences",
            Action::Stats => "» Statistics",
            Action::Help => "» Help",
            Action::Quit => "» Quit",
        }
    }
}

/// Apply a menu action. Returns text to print, if any.
fn apply(view: &mut TreeView<'_>, session: &Session, action: Action) -> Option<String> {
    let names = session.config.names();
    match action {
        Action::ExpandAll => {
            view.expand_all();
            None
        }
        Action::CollapseAll => {
            view.collapse_all();
            None
        }
        Action::Sequences => {
            let groups = group_by_length(collect_outcomes(view.tree()));
            Some(sequence_listing(&groups, &names))
        }
        Action::Stats => {
            let tree = view.tree();
            let summary = stats(tree.wins_needed(), collect_outcomes(tree));
            Some(stats_panel(tree, &summary, &names))
        }
        Action::Help => Some(help_text(view.tree().wins_needed())),
        Action::Quit => None,
    }
}

pub fn run(session: &Session) -> Result<()> {
    let names = session.config.names();
    let style = session.config.style();
    let mut view = TreeView::new(&session.tree);
    view.expand_rows(session.config.initial_rows);

    loop {
        let rows = view.rows();
        let mut items: Vec<String> = rows
            .iter()
            .map(|row| view.row_text(row, &names, &style))
            .collect();
        items.extend(Action::ALL.iter().map(|a| a.label().to_string()));

        let choice = Select::new()
            .with_prompt("Pick a row to expand or collapse")
            .items(&items)
            .default(0)
            .max_length(30)
            .report(false)
            .interact()?;

        if let Some(row) = rows.get(choice) {
            view.toggle(row.id);
            continue;
        }
        let action = Action::ALL[choice - rows.len()];
        log::debug!("explorer action: {:?}", action);
        if action == Action::Quit {
            return Ok(());
        }
        if let Some(text) = apply(&mut view, session, action) {
            println!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeriesConfig;

    fn session() -> Session {
        Session::new(SeriesConfig {
            color: false,
            ..SeriesConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_expand_and_collapse_actions() {
        let session = session();
        let mut view = TreeView::new(&session.tree);
        assert_eq!(apply(&mut view, &session, Action::ExpandAll), None);
        assert_eq!(view.rows().len(), 139);
        apply(&mut view, &session, Action::CollapseAll);
        assert_eq!(view.rows().len(), 3);
    }

    #[test]
    fn test_text_actions() {
        let session = session();
        let mut view = TreeView::new(&session.tree);
        let listing = apply(&mut view, &session, Action::Sequences).unwrap();
        assert!(listing.contains("SERIES OF 7 GAMES (40 ways):"));
        let panel = apply(&mut view, &session, Action::Stats).unwrap();
        assert!(panel.contains("Total possible outcomes: 70"));
        assert!(apply(&mut view, &session, Action::Help).is_some());
    }

    #[test]
    fn test_action_labels_are_distinct() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }
}
