// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific readers for the registrar's `timetable.cgi`. Each spec knows
//! *where the facts live in the HTML* of one kind of page and how to pull them
//! out tolerantly.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-decoded page text (see `core::codepage`).
//! - **Selector choice**: date headings + their sibling table, permalink anchors.
//! - **Tolerant extraction**: a bad heading, a missing table or a malformed
//!   href is skipped, never fatal.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **persistence** (`store`). `refresh` wires
//!   those together.
//! - **Rendering** (`render`, `remaining`).
//!
//! ## Typical call chain
//! ```text
//! refresh::update_group → Fetch::get → codepage::decode_page_bytes
//!                       → specs::timetable::parse_group_schedule
//!                       → Store::merge_days
//! ```
//!
//! ## Current specs
//! - `timetable` – per-date lesson lines of one group.
//! - `group_id` – the site-internal id of a group from its permalink.
pub mod group_id;
pub mod timetable;
