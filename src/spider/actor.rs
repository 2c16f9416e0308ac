// src/spider/actor.rs
// =============================================================================
// Handler for an actor's page. This is the terminal hop: it emits records,
// not follow-up requests.
//
// Two extractions over the same page:
//
// 1. The actor's display name. Every actor page titles itself
//    "<Name> - IMDb", so the name is the page title minus its fixed
//    7-byte trailing suffix. This is a fixed-offset strip, not a pattern
//    match - a page with a different suffix gets a wrongly truncated name.
//
// 2. The acting credits. Each filmography entry is a div.filmo-row whose
//    id is "<category>-<project id>", e.g. "actor-tt5348176" for an acting
//    credit or "director-tt0123456" for a directing one. We keep only the
//    rows whose id contains the acting marker, strip the fixed 6-byte
//    category prefix to get the project id, then look up the first link on
//    the page whose href contains that id and read its text as the
//    production title. A project id with no matching link keeps its record
//    with a missing title.
// =============================================================================

use scraper::{Html, Selector};

use super::types::{CastRecord, ParseOutput};

// The page title's fixed trailing suffix, " - IMDb" (7 bytes)
const TITLE_SUFFIX_LEN: usize = 7;

// Length of the category prefix on filmography row ids ("actor-")
const CATEGORY_PREFIX_LEN: usize = 6;

// Substring marking a filmography row as an acting credit
const ACTING_MARKER: &str = "actor";

// Selector for the filmography entries
const FILMOGRAPHY_ROWS: &str = "div.filmo-row";

// Extracts one record per acting credit on an actor's page
//
// Parameters:
//   html: the fetched actor page
//
// Returns: a ParseOutput with one CastRecord per acting-credit row, in
// document order. A page with no filmography rows yields zero records.
pub fn parse_actor_page(html: &str) -> ParseOutput {
    let document = Html::parse_document(html);

    let name = extract_actor_name(&document);

    // Collect the project ids of the acting-credit rows
    let row_selector = Selector::parse(FILMOGRAPHY_ROWS).unwrap();
    let projects: Vec<&str> = document
        .select(&row_selector)
        .filter_map(|row| row.value().attr("id"))
        .filter(|id| id.contains(ACTING_MARKER))
        .map(strip_category_prefix)
        .collect();

    // Pair each project id with its title text from the same page
    let records = projects
        .into_iter()
        .map(|project| CastRecord {
            actor: name.clone(),
            movie_or_tv_name: lookup_project_title(&document, project),
        })
        .collect();

    ParseOutput::from_records(records)
}

// Reads the actor's display name from the page title
//
// The title is expected to be "<Name> - IMDb"; we drop the last 7 bytes.
// Degradations (a page that breaks the expectation never panics):
// - no <title> element: empty name
// - title shorter than the suffix: empty name
// - cut landing inside a multi-byte character: the raw title, untruncated
fn extract_actor_name(document: &Html) -> String {
    let selector = Selector::parse("title").unwrap();

    let title = match document.select(&selector).next() {
        Some(element) => element.text().collect::<String>(),
        None => return String::new(),
    };

    let cut = title.len().saturating_sub(TITLE_SUFFIX_LEN);
    match title.get(..cut) {
        Some(name) => name.to_string(),
        None => title,
    }
}

// Strips the fixed-length category prefix from a filmography row id
//
// "actor-tt5348176" -> "tt5348176". The slice is byte-offset based, like
// the suffix strip above; an id shorter than the prefix becomes empty.
fn strip_category_prefix(id: &str) -> &str {
    id.get(CATEGORY_PREFIX_LEN..).unwrap_or("")
}

// Finds the production title for a project id on the same page
//
// Queries the filmography rows for the first link whose href contains the
// project id and returns its text. First match only; a project id that
// matches no link (or cannot form a valid selector) yields None.
fn lookup_project_title(document: &Html, project: &str) -> Option<String> {
    let selector = Selector::parse(&format!(
        "{} a[href*=\"{}\"]",
        FILMOGRAPHY_ROWS, project
    ))
    .ok()?;

    document
        .select(&selector)
        .next()
        .map(|link| link.text().collect::<String>())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why .get(..cut) instead of [..cut]?
//    - String indexing in Rust is by byte offset, and slicing panics if the
//      offset lands inside a multi-byte character
//    - .get() returns Option<&str> instead of panicking
//    - A scraped page is untrusted input, so this handler must never panic
//
// 2. What does a[href*="..."] mean?
//    - A CSS attribute selector: <a> elements whose href CONTAINS the string
//    - We use it to find the link for a project id anywhere in its href
//      (hrefs carry extra query parameters, so equality would never match)
//
// 3. Why Option<String> for the production title?
//    - A filmography row can name a project whose link is missing or
//      malformed; the record is still worth keeping
//    - None serializes to null in the JSON output, so downstream consumers
//      can tell "no title found" apart from an empty title
//
// 4. What does .text().collect::<String>() do?
//    - .text() iterates over all text nodes inside the element
//    - Collecting into String concatenates them into the visible text
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // An actor page with two acting credits and one directing credit
    const JANE_DOE_PAGE: &str = r#"
        <html>
        <head><title>Jane Doe - IMDb</title></head>
        <body>
            <div class="filmo-row" id="actor-tt0000001">
                <a href="/title/tt0000001/">Movie A</a> (2019)
            </div>
            <div class="filmo-row" id="director-tt0000002">
                <a href="/title/tt0000002/">Directed Piece</a> (2020)
            </div>
            <div class="filmo-row" id="actor-tt0000003">
                <a href="/title/tt0000003/">Movie B</a> (2021)
            </div>
        </body>
        </html>
    "#;

    #[test]
    fn test_derives_name_from_page_title() {
        let output = parse_actor_page(JANE_DOE_PAGE);
        assert!(output.records.iter().all(|r| r.actor == "Jane Doe"));
    }

    #[test]
    fn test_keeps_acting_rows_and_drops_other_categories() {
        let output = parse_actor_page(JANE_DOE_PAGE);

        assert!(output.requests.is_empty());
        assert_eq!(output.records.len(), 2);
        assert_eq!(
            output.records[0].movie_or_tv_name.as_deref(),
            Some("Movie A")
        );
        assert_eq!(
            output.records[1].movie_or_tv_name.as_deref(),
            Some("Movie B")
        );
    }

    #[test]
    fn test_rerun_yields_identical_records() {
        let first = parse_actor_page(JANE_DOE_PAGE);
        let second = parse_actor_page(JANE_DOE_PAGE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_project_without_matching_link_keeps_record_without_title() {
        let html = r#"
            <html>
            <head><title>Jane Doe - IMDb</title></head>
            <body>
                <div class="filmo-row" id="actor-tt0000009"></div>
            </body>
            </html>
        "#;

        let output = parse_actor_page(html);

        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].actor, "Jane Doe");
        assert_eq!(output.records[0].movie_or_tv_name, None);
    }

    #[test]
    fn test_page_without_filmography_yields_zero_records() {
        let html = r#"<html><head><title>Jane Doe - IMDb</title></head><body></body></html>"#;
        let output = parse_actor_page(html);
        assert!(output.records.is_empty());
    }

    #[test]
    fn test_short_page_title_degrades_to_empty_name() {
        let html = r#"
            <html>
            <head><title>Oops</title></head>
            <body>
                <div class="filmo-row" id="actor-tt0000001">
                    <a href="/title/tt0000001/">Movie A</a>
                </div>
            </body>
            </html>
        "#;

        let output = parse_actor_page(html);

        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].actor, "");
        assert_eq!(
            output.records[0].movie_or_tv_name.as_deref(),
            Some("Movie A")
        );
    }

    #[test]
    fn test_first_matching_link_wins() {
        let html = r#"
            <html>
            <head><title>Jane Doe - IMDb</title></head>
            <body>
                <div class="filmo-row" id="actor-tt0000001">
                    <a href="/title/tt0000001/">Movie A</a>
                    <a href="/title/tt0000001/fullcredits/">Full credits</a>
                </div>
            </body>
            </html>
        "#;

        let output = parse_actor_page(html);

        assert_eq!(output.records.len(), 1);
        assert_eq!(
            output.records[0].movie_or_tv_name.as_deref(),
            Some("Movie A")
        );
    }
}
