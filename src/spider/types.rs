// src/spider/types.rs
// =============================================================================
// Shared types for the extraction handlers.
//
// The crawl engine and the three handlers communicate through these types:
// - PageKind: which handler a fetched page belongs to
// - FollowUp: a URL the engine should fetch next, tagged with its handler
// - CastRecord: one (actor, production) pair - the final output unit
// - ParseOutput: what a handler returns (new requests and/or finished records)
//
// Rust concepts:
// - Enums: A closed set of variants (the three page types)
// - Derive macros: Serialize/Deserialize for JSON output
// =============================================================================

use serde::{Deserialize, Serialize};

// The three page types the crawler understands
//
// Every request carries one of these tags so the engine knows which
// handler to run on the fetched page. There is no fallback variant:
// a page is always exactly one of the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// A title page (the seed), e.g. https://www.imdb.com/title/tt5348176/
    Title,
    /// A title's full cast & crew page (the seed URL + "fullcredits/")
    FullCredits,
    /// An actor's page with their filmography
    Actor,
}

// A request produced by a handler for the engine to fetch later
//
// Created by a handler, consumed by the crawl engine, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    /// Absolute URL to fetch
    pub url: String,
    /// Which handler processes the response
    pub kind: PageKind,
}

// One emitted (actor, production) pair
//
// The actor name always comes from the same page as the production name.
// A production whose title link could not be found on the page is kept
// with a missing name rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    /// The actor's display name
    pub actor: String,
    /// The production's display title (None when the page lookup missed)
    #[serde(rename = "movie_or_TV_name")]
    pub movie_or_tv_name: Option<String>,
}

// What a handler hands back to the engine
//
// A handler emits zero or more follow-up requests, zero or more records,
// or nothing at all (a structurally empty page). The engine enqueues the
// requests and appends the records to the output stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseOutput {
    /// New pages to fetch, in document order of the elements that produced them
    pub requests: Vec<FollowUp>,
    /// Finished records, in document order of the rows that produced them
    pub records: Vec<CastRecord>,
}

impl ParseOutput {
    /// Builds an output that only carries follow-up requests
    pub fn from_requests(requests: Vec<FollowUp>) -> Self {
        ParseOutput {
            requests,
            records: Vec::new(),
        }
    }

    /// Builds an output that only carries finished records
    pub fn from_records(records: Vec<CastRecord>) -> Self {
        ParseOutput {
            requests: Vec::new(),
            records,
        }
    }
}
