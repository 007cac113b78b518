//! View model.
//!
//! A [`CatalogView`] is a pure function of the grouped snapshot and the
//! [`ViewState`]. Renderers rebuild their output from it wholesale.

use crate::grouping::CategoryGroup;
use crate::search::{Highlighted, Query};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Expansion::Expanded
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct RowState {
    expansion: Expansion,
    activated: bool,
}

/// Per-group and per-row UI state plus the active query.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    groups: HashMap<String, Expansion>,
    rows: HashMap<String, RowState>,
    query: Query,
}

impl ViewState {
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = Query::new(raw);
    }

    pub fn group_expansion(&self, name: &str) -> Expansion {
        self.groups.get(name).copied().unwrap_or_default()
    }

    pub fn row_expansion(&self, uid: &str) -> Expansion {
        self.rows.get(uid).map(|r| r.expansion).unwrap_or_default()
    }

    pub fn row_activated(&self, uid: &str) -> bool {
        self.rows.get(uid).is_some_and(|r| r.activated)
    }

    pub fn toggle_group(&mut self, name: &str) -> Expansion {
        let entry = self.groups.entry(name.to_owned()).or_default();
        *entry = entry.toggled();
        *entry
    }

    /// Flip the row's answer and its activated marker together.
    pub fn toggle_row(&mut self, uid: &str) -> Expansion {
        let entry = self.rows.entry(uid.to_owned()).or_default();
        entry.expansion = entry.expansion.toggled();
        entry.activated = !entry.activated;
        entry.expansion
    }

    /// Drop state for groups and rows not in the current snapshot.
    pub fn retain(&mut self, groups: &[CategoryGroup]) {
        self.groups.retain(|name, _| groups.iter().any(|g| &g.name == name));
        self.rows.retain(|uid, _| {
            groups
                .iter()
                .any(|g| g.items.iter().any(|item| &item.uid == uid))
        });
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub uid: String,
    pub question: Highlighted,
    pub answer: Highlighted,
    pub expansion: Expansion,
    pub activated: bool,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupView {
    pub name: String,
    pub expansion: Expansion,
    pub visible: bool,
    /// Every group offers delete-category, empty ones included.
    pub deletable: bool,
    pub rows: Vec<RowView>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub groups: Vec<GroupView>,
}

impl CatalogView {
    pub fn build(groups: &[CategoryGroup], state: &ViewState) -> Self {
        let query = state.query();
        let groups = groups
            .iter()
            .map(|group| {
                let rows: Vec<RowView> = group
                    .items
                    .iter()
                    .map(|item| {
                        let in_question = query.matches(&item.question);
                        let in_answer = query.matches(&item.answer);
                        let visible = in_question || in_answer;
                        RowView {
                            uid: item.uid.clone(),
                            question: if in_question {
                                query.highlight(&item.question)
                            } else {
                                Highlighted::plain(&item.question)
                            },
                            answer: if in_answer {
                                query.highlight(&item.answer)
                            } else {
                                Highlighted::plain(&item.answer)
                            },
                            expansion: state.row_expansion(&item.uid),
                            activated: state.row_activated(&item.uid),
                            visible,
                        }
                    })
                    .collect();

                GroupView {
                    name: group.name.clone(),
                    expansion: state.group_expansion(&group.name),
                    visible: query.is_empty() || rows.iter().any(|r| r.visible),
                    deletable: true,
                    rows,
                }
            })
            .collect();

        CatalogView { groups }
    }

    pub fn group(&self, name: &str) -> Option<&GroupView> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn row(&self, uid: &str) -> Option<&RowView> {
        self.groups
            .iter()
            .flat_map(|g| g.rows.iter())
            .find(|r| r.uid == uid)
    }

    pub fn visible_rows(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.rows.iter())
            .filter(|r| r.visible)
            .count()
    }
}
