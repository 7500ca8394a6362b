//! Filter state, visibility predicates, option lists, and thread ordering.
//!
//! Five dimensions:
//!
//! | dimension       | kind          | applies to |
//! |-----------------|---------------|------------|
//! | module          | single-select | rules      |
//! | rule status     | multi-select  | rules      |
//! | business rule   | multi-select  | rules      |
//! | thread title    | multi-select  | both       |
//! | thread status   | multi-select  | threads    |
//!
//! Module and business-rule changes cascade: a new module resets the
//! business-rule selection, and a new business-rule selection resets the
//! thread-title selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::entities::{BusinessRule, Thread};
use crate::enums::{RuleStatus, ThreadStatus};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// A multi-select value: either everything, or a non-empty set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(Vec<T>),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Build from values; an empty list means `All`.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut selection = Self::All;
        for value in values {
            selection.select(value);
        }
        selection
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Add a concrete value. Replaces `All`.
    pub fn select(&mut self, value: T) {
        match self {
            Self::All => *self = Self::Only(vec![value]),
            Self::Only(values) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
    }

    pub fn select_all(&mut self) {
        *self = Self::All;
    }

    /// Remove a concrete value. Removing the last one restores `All`.
    pub fn deselect(&mut self, value: &T) {
        if let Self::Only(values) = self {
            values.retain(|v| v != value);
            if values.is_empty() {
                *self = Self::All;
            }
        }
    }

    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(values) => values.contains(value),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        match self {
            Self::All => &[],
            Self::Only(values) => values,
        }
    }
}

impl Selection<String> {
    #[must_use]
    pub fn matches_str(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(values) => values.iter().any(|v| v == value),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// Current filter selections. Construct with `Default` (everything visible).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FilterState {
    /// `None` means all modules.
    module: Option<String>,
    status: Selection<RuleStatus>,
    business_rule: Selection<String>,
    thread_title: Selection<String>,
    thread_status: Selection<ThreadStatus>,
}

impl FilterState {
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> &Selection<RuleStatus> {
        &self.status
    }

    #[must_use]
    pub const fn business_rule(&self) -> &Selection<String> {
        &self.business_rule
    }

    #[must_use]
    pub const fn thread_title(&self) -> &Selection<String> {
        &self.thread_title
    }

    #[must_use]
    pub const fn thread_status(&self) -> &Selection<ThreadStatus> {
        &self.thread_status
    }

    /// Select a module (`None` for all). A different module resets the
    /// business-rule and thread-title selections.
    pub fn set_module(&mut self, module: Option<String>) {
        if self.module != module {
            self.module = module;
            self.business_rule = Selection::All;
            self.thread_title = Selection::All;
        }
    }

    /// Edit the business-rule selection. Any change resets thread titles.
    pub fn update_business_rule(&mut self, edit: impl FnOnce(&mut Selection<String>)) {
        let before = self.business_rule.clone();
        edit(&mut self.business_rule);
        if self.business_rule != before {
            self.thread_title = Selection::All;
        }
    }

    pub const fn status_mut(&mut self) -> &mut Selection<RuleStatus> {
        &mut self.status
    }

    pub const fn thread_title_mut(&mut self) -> &mut Selection<String> {
        &mut self.thread_title
    }

    pub const fn thread_status_mut(&mut self) -> &mut Selection<ThreadStatus> {
        &mut self.thread_status
    }

    /// Whether `rule` passes the rule-level dimensions.
    ///
    /// With a thread-title selection active, at least one of the rule's
    /// threads must carry a selected title.
    #[must_use]
    pub fn rule_matches(&self, board: &Board, rule: &BusinessRule) -> bool {
        self.module.as_ref().is_none_or(|m| *m == rule.module_name)
            && self.status.matches(&rule.status)
            && self.business_rule.matches_str(&rule.description)
            && (self.thread_title.is_all()
                || board
                    .threads_for_rule(&rule.id)
                    .any(|t| self.thread_title.matches_str(&t.title)))
    }

    /// Whether `thread` passes the thread-level dimensions. Independent of
    /// rule-level filtering.
    #[must_use]
    pub fn thread_matches(&self, thread: &Thread) -> bool {
        self.thread_status.matches(&thread.status) && self.thread_title.matches_str(&thread.title)
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Which threads a thread listing covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadScope {
    /// Every thread of one rule.
    Rule(String),
    /// A single thread.
    Thread(String),
}

#[must_use]
pub fn visible_rules<'a>(board: &'a Board, filter: &FilterState) -> Vec<&'a BusinessRule> {
    board
        .rules
        .iter()
        .filter(|rule| filter.rule_matches(board, rule))
        .collect()
}

/// Threads in `scope` that pass the thread filters, open first.
#[must_use]
pub fn visible_threads<'a>(
    board: &'a Board,
    filter: &FilterState,
    scope: &ThreadScope,
) -> Vec<&'a Thread> {
    let mut threads: Vec<&Thread> = board
        .threads
        .iter()
        .filter(|thread| match scope {
            ThreadScope::Rule(rule_id) => thread.rule_id == *rule_id,
            ThreadScope::Thread(thread_id) => thread.id == *thread_id,
        })
        .filter(|thread| filter.thread_matches(thread))
        .collect();
    sort_open_first(&mut threads);
    threads
}

/// Stable sort putting open threads before closed ones.
pub fn sort_open_first(threads: &mut [&Thread]) {
    threads.sort_by_key(|thread| thread.status.sort_rank());
}

/// Values offered for each filter dimension given the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FilterOptions {
    pub modules: Vec<String>,
    pub statuses: Vec<RuleStatus>,
    pub business_rules: Vec<String>,
    pub thread_titles: Vec<String>,
    pub thread_statuses: Vec<ThreadStatus>,
}

#[must_use]
pub fn options(board: &Board, filter: &FilterState) -> FilterOptions {
    let mut business_rules: Vec<String> = Vec::new();
    let mut thread_titles: Vec<String> = Vec::new();

    for rule in &board.rules {
        if filter.module.as_ref().is_some_and(|m| *m != rule.module_name) {
            continue;
        }
        if !business_rules.contains(&rule.description) {
            business_rules.push(rule.description.clone());
        }
    }

    for rule in board
        .rules
        .iter()
        .filter(|rule| filter.business_rule.matches_str(&rule.description))
    {
        for thread in board.threads_for_rule(&rule.id) {
            if !thread_titles.contains(&thread.title) {
                thread_titles.push(thread.title.clone());
            }
        }
    }

    FilterOptions {
        modules: board.module_names(),
        statuses: RuleStatus::ALL.to_vec(),
        business_rules,
        thread_titles,
        thread_statuses: ThreadStatus::ALL.to_vec(),
    }
}
