//! # lexicon-search
//!
//! A web service for searching a multilingual classical-languages lexicon.
//! Queries are matched literally (case-insensitive substring) against the
//! headword, definition, and transliteration of each entry, ranked by a
//! three-tier relevance rule, and paginated with exact counts.
//!
//! ## Search pipeline
//!
//! ```text
//!   ┌──────────────┐
//!   │ raw request  │  query, language, limit, offset
//!   └──────┬───────┘
//!          ▼
//!   ┌──────────────┐
//!   │  normalize   │  length >= 2 chars or InvalidQuery (no store access);
//!   │              │  language defaults to "all"; limit/offset coerced
//!   └──────┬───────┘
//!          ▼
//!   ┌──────────────┐
//!   │    match     │  lemma OR definition OR transliteration contains query,
//!   │              │  AND language filter; one predicate counts and fetches
//!   └──────┬───────┘
//!          ▼
//!   ┌──────────────┐
//!   │    rank      │  tier (lemma prefix < lemma substring < other field),
//!   │              │  then frequency desc, lemma asc, id asc
//!   └──────┬───────┘
//!          ▼
//!   ┌──────────────┐
//!   │   paginate   │  window [offset, offset+limit); hasMore, currentPage,
//!   │              │  totalPages computed from the full match count
//!   └──────┬───────┘
//!          ▼
//!   ┌──────────────┐
//!   │   assemble   │  entries + pagination + echo of query and language
//!   └──────────────┘
//! ```
//!
//! ## Module overview
//!
//! - [`config`] - Environment-based configuration and named tunables
//! - [`models`] - `LexiconEntry` and the wire request/response types
//! - [`store`] - `EntryStore` trait and the JSON-seeded in-memory store
//! - [`search`] - Query normalization, match predicate, ranking, pagination
//! - [`api`] - Axum HTTP handlers for search and the read-only lookups
//! - [`state`] - Shared application state holding the config and the store

pub mod api;
pub mod config;
pub mod models;
pub mod search;
pub mod state;
pub mod store;
