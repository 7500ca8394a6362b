use anyhow::Context;
use qc_core::board::Board;
use qc_core::entities::{BusinessRule, Thread};

pub fn require_rule<'a>(board: &'a Board, id: &str) -> anyhow::Result<&'a BusinessRule> {
    board
        .rule(id)
        .with_context(|| format!("rule '{id}' not found"))
}

pub fn require_thread<'a>(board: &'a Board, id: &str) -> anyhow::Result<&'a Thread> {
    board
        .thread(id)
        .with_context(|| format!("thread '{id}' not found"))
}
