// src/spider/mod.rs
// =============================================================================
// This module contains the extraction handlers - the site-specific logic.
//
// Submodules:
// - types: shared types (page tags, follow-up requests, records)
// - title: seed title page -> one full-credits request
// - credits: full-credits page -> one request per cast member
// - actor: actor page -> one record per acting credit
//
// Each handler is a pure function of one fetched page to a ParseOutput.
// Handlers hold no state and never touch the network themselves - the
// crawl engine (src/crawl/) fetches pages and dispatches them here based
// on the tag their request carried.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod types;
mod title;
mod credits;
mod actor;

// Re-export public items from submodules
// This lets users write `spider::parse_actor_page()` instead of
// `spider::actor::parse_actor_page()`
pub use types::{CastRecord, FollowUp, PageKind, ParseOutput};
pub use title::parse_title_page;
pub use credits::parse_full_credits;
pub use actor::parse_actor_page;
