//! # qc-core
//!
//! Core types and derivation logic for the QC checklist board.
//!
//! This crate provides the foundational types shared across all `qclist` crates:
//! - Entity structs for business rules, threads, and comments
//! - Closed status enums (rule status, thread status, action status, priority)
//! - ID prefix constants and deterministic ID allocation
//! - The [`board::Board`] state and its command reducer
//! - The status rollup evaluator and the multi-dimensional filter engine
//! - SLA/urgency derivations, close policy, and export row building
//! - Journal envelope for JSONL persistence
//! - CLI response types

pub mod board;
pub mod command;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod filter;
pub mod ids;
pub mod policy;
pub mod reducer;
pub mod responses;
pub mod rollup;
pub mod seed;
pub mod sla;
pub mod trail;
