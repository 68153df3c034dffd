// src/specs/mod.rs
//! # Page extraction rules
//!
//! Each module here encodes *where the numbers live in the HTML* of one
//! source and *how to read them robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** over `core::html::Document`; no networking.
//! - **Selector choice & precedence** (header-anchored lookup first, flat
//!   row-scan as fallback).
//! - **Normalization** of cell text into `PriceValue`s via `core::sanitize`.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), persistence (`store`), change detection (`diff`)
//!   and delivery (`notify`). This layer only extracts; `runner` sequences the rest.
//!
//! ## Conventions
//! - Case-insensitive label and tag matching.
//! - Every lookup returns `Result<PriceValue, ExtractError>`; callers decide
//!   how to degrade. Nothing here panics on odd markup.
//! - Everything is testable offline against small inline fixtures.
pub mod rates;
