// src/spider/title.rs
// =============================================================================
// Handler for the seed title page.
//
// This is the first hop of the crawl. The page content itself is not used:
// IMDb keeps the full cast & crew list on a separate page whose URL is
// always the title URL plus a fixed suffix, so all we need is the URL the
// page was fetched from.
//
//   https://www.imdb.com/title/tt5348176/
//     -> https://www.imdb.com/title/tt5348176/fullcredits/
// =============================================================================

use super::types::{FollowUp, PageKind, ParseOutput};

// The fixed path suffix of a title's full cast & crew page
pub const FULL_CREDITS_SUFFIX: &str = "fullcredits/";

// Derives the full cast & crew request from a fetched title page
//
// Parameters:
//   page_url: the URL the title page was fetched from (must end in the
//             title's id path segment, e.g. ".../title/tt5348176/")
//   _html: the page content (unused; present to keep the handler contract
//          uniform - every handler takes the fetched page)
//
// Returns: a ParseOutput with exactly one follow-up request, tagged for
// the full-credits handler
pub fn parse_title_page(page_url: &str, _html: &str) -> ParseOutput {
    let credits_url = format!("{}{}", page_url, FULL_CREDITS_SUFFIX);

    ParseOutput::from_requests(vec![FollowUp {
        url: credits_url,
        kind: PageKind::FullCredits,
    }])
}
