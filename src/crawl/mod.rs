// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Features:
// - Breadth-first crawling from a seed title URL, three hops deep
//   (title page -> full cast & crew page -> one page per actor)
// - Requests are tagged with the handler that must process their response
// - Request deduplication (each URL fetched at most once)
// - Concurrent fetching with a bounded limit, retries, and polite delays
//
// The engine owns all the networking; the handlers in src/spider/ never
// touch it. A fetch that keeps failing is logged and its branch dropped.
// =============================================================================

mod queue;

// Re-export the main crawling functions
pub use queue::{crawl_cast, scrape_actor};
