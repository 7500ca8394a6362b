//! The board: the two leaf stores (rules and threads) plus read-only lookups.
//!
//! Mutation goes through [`Board::apply`](crate::reducer) only. Lookups that
//! miss return `None` or an empty iterator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{BusinessRule, Comment, Thread};
use crate::errors::CoreError;

/// Complete board state. Also the payload of a journal seed entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Board {
    #[serde(default)]
    pub rules: Vec<BusinessRule>,
    #[serde(default)]
    pub threads: Vec<Thread>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&BusinessRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    #[must_use]
    pub fn thread(&self, id: &str) -> Option<&Thread> {
        self.threads.iter().find(|thread| thread.id == id)
    }

    /// Threads of `rule_id` in insertion order.
    pub fn threads_for_rule<'a>(&'a self, rule_id: &'a str) -> impl Iterator<Item = &'a Thread> {
        self.threads.iter().filter(move |thread| thread.rule_id == rule_id)
    }

    /// Rule owning `thread_id`.
    #[must_use]
    pub fn rule_for_thread(&self, thread_id: &str) -> Option<&BusinessRule> {
        self.thread(thread_id)
            .and_then(|thread| self.rule(&thread.rule_id))
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.threads.iter().flat_map(|thread| thread.comments.iter())
    }

    /// Total comments across every thread of `rule_id`.
    #[must_use]
    pub fn comment_count_for_rule(&self, rule_id: &str) -> usize {
        self.threads_for_rule(rule_id)
            .map(|thread| thread.comments.len())
            .sum()
    }

    /// Distinct module names in first-seen order.
    #[must_use]
    pub fn module_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for rule in &self.rules {
            if !names.contains(&rule.module_name) {
                names.push(rule.module_name.clone());
            }
        }
        names
    }

    /// One past the largest `rule_no` in use.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the largest number is `u32::MAX`.
    pub fn next_rule_no(&self) -> Result<u32, CoreError> {
        self.rules
            .iter()
            .map(|rule| rule.rule_no)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| CoreError::Validation("rule numbers exhausted".to_string()))
    }

    pub(crate) fn rule_mut(&mut self, id: &str) -> Option<&mut BusinessRule> {
        self.rules.iter_mut().find(|rule| rule.id == id)
    }

    pub(crate) fn thread_mut(&mut self, id: &str) -> Option<&mut Thread> {
        self.threads.iter_mut().find(|thread| thread.id == id)
    }
}

/// Rules of one module, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGroup<'a> {
    pub module_name: &'a str,
    pub rules: Vec<&'a BusinessRule>,
}

/// Group rules by module, keeping first-seen module order.
#[must_use]
pub fn group_by_module<'a>(rules: &[&'a BusinessRule]) -> Vec<ModuleGroup<'a>> {
    let mut groups: Vec<ModuleGroup<'a>> = Vec::new();
    for &rule in rules {
        match groups
            .iter_mut()
            .find(|group| group.module_name == rule.module_name)
        {
            Some(group) => group.rules.push(rule),
            None => groups.push(ModuleGroup {
                module_name: &rule.module_name,
                rules: vec![rule],
            }),
        }
    }
    groups
}
