// src/spider/credits.rs
// =============================================================================
// Handler for the full cast & crew page.
//
// The cast table lists one row per performer, and each row starts with a
// photo cell (td.primary_photo) whose link points at the performer's page.
// The hrefs are site-relative ("/name/nm0000123/?ref_=..."), so we prefix
// the site origin to get a fetchable URL.
//
// Crew rows (directors, writers, ...) use a different row structure without
// the photo cell, so selecting on the photo cell picks out exactly the cast.
//
// Rust concepts:
// - CSS selectors via the scraper crate (like querySelector in a browser)
// - Iterators over matched elements in document order
// =============================================================================

use scraper::{Html, Selector};

use super::types::{FollowUp, PageKind, ParseOutput};

// The site origin prefixed to the site-relative actor hrefs
pub const SITE_ORIGIN: &str = "https://www.imdb.com";

// Selector for the cast rows' photo links
const CAST_PHOTO_LINKS: &str = "td.primary_photo a";

// Extracts one actor-page request per cast member on a full-credits page
//
// Parameters:
//   html: the fetched full cast & crew page
//
// Returns: a ParseOutput with one follow-up request per cast-photo link,
// tagged for the actor handler, in document order. A page with no cast
// rows yields zero requests - that is a valid (if unusual) page, not an
// error.
pub fn parse_full_credits(html: &str) -> ParseOutput {
    let document = Html::parse_document(html);

    // The selector is a constant and known to be valid, so unwrap is OK here
    let selector = Selector::parse(CAST_PHOTO_LINKS).unwrap();

    let mut requests = Vec::new();

    for element in document.select(&selector) {
        // Rows missing an href (malformed markup) are skipped silently
        if let Some(href) = element.value().attr("href") {
            requests.push(FollowUp {
                url: format!("{}{}", SITE_ORIGIN, href),
                kind: PageKind::Actor,
            });
        }
    }

    ParseOutput::from_requests(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_actor_urls_in_document_order() {
        let html = r#"
            <table class="cast_list">
                <tr>
                    <td class="primary_photo"><a href="/name/nm0000001/"><img></a></td>
                    <td>Actor One</td>
                </tr>
                <tr>
                    <td class="primary_photo"><a href="/name/nm0000002/"><img></a></td>
                    <td>Actor Two</td>
                </tr>
            </table>
        "#;

        let output = parse_full_credits(html);

        assert!(output.records.is_empty());
        assert_eq!(output.requests.len(), 2);
        assert_eq!(output.requests[0].url, "https://www.imdb.com/name/nm0000001/");
        assert_eq!(output.requests[1].url, "https://www.imdb.com/name/nm0000002/");
        assert!(output.requests.iter().all(|r| r.kind == PageKind::Actor));
    }

    #[test]
    fn test_castless_page_yields_zero_requests() {
        let html = "<html><body><h1>No cast listed</h1></body></html>";
        let output = parse_full_credits(html);
        assert!(output.requests.is_empty());
        assert!(output.records.is_empty());
    }

    #[test]
    fn test_links_outside_photo_cells_are_ignored() {
        let html = r#"
            <a href="/name/nm0000009/">somewhere else on the page</a>
            <table>
                <tr><td class="primary_photo"><a href="/name/nm0000001/"><img></a></td></tr>
            </table>
        "#;

        let output = parse_full_credits(html);

        assert_eq!(output.requests.len(), 1);
        assert_eq!(output.requests[0].url, "https://www.imdb.com/name/nm0000001/");
    }

    #[test]
    fn test_photo_link_without_href_is_skipped() {
        let html = r#"
            <table>
                <tr><td class="primary_photo"><a><img></a></td></tr>
                <tr><td class="primary_photo"><a href="/name/nm0000002/"><img></a></td></tr>
            </table>
        "#;

        let output = parse_full_credits(html);

        assert_eq!(output.requests.len(), 1);
        assert_eq!(output.requests[0].url, "https://www.imdb.com/name/nm0000002/");
    }
}
