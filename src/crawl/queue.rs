// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl engine: a breadth-first, tagged request
// queue driving the extraction handlers in src/spider/.
//
// How it works:
// 1. Start with the seed title URL in the queue, tagged as a title page
// 2. Drain the queue into a wave and fetch the wave's pages concurrently
// 3. Dispatch each fetched page to the handler named by its tag
// 4. Enqueue the follow-up requests the handler returned (if not visited)
//    and collect the records it returned
// 5. Repeat until the queue is empty
//
// The crawl is three hops deep by construction - title -> full credits ->
// actor pages - so there is no depth counter; the tags carry all the
// routing the engine needs.
//
// Politeness:
// - Bounded fetch concurrency per wave
// - A small delay between waves
// - Each URL is fetched at most once (visited set)
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - buffer_unordered: Run up to N fetches at once, yield as they complete
// =============================================================================

use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use url::Url;

use crate::spider::{self, CastRecord, FollowUp, PageKind, ParseOutput};

// How many pages to fetch at once within a wave
//
// Why 16? Balance between:
// - Too low: the cast list of a large production crawls slowly
// - Too high: IMDb starts rate-limiting or serving captcha pages
const MAX_CONCURRENT_FETCHES: usize = 16;

// Delay between waves, to avoid hammering the server
const WAVE_DELAY: Duration = Duration::from_millis(100);

// How many times to try fetching one URL before giving up on its branch
const FETCH_ATTEMPTS: usize = 3;

// Delay before a retry
const RETRY_DELAY: Duration = Duration::from_millis(500);

// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// IMDb serves an error page to the default library user agent, so we
// present a browser-like one
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

// Represents a page in the crawl queue
#[derive(Debug, Clone)]
struct CrawlItem {
    url: String,
    kind: PageKind, // Which handler processes the fetched page
}

// Crawls IMDb starting from a title page and collects cast records
//
// Parameters:
//   seed_url: the title page URL to start from
//             (e.g. "https://www.imdb.com/title/tt5348176/")
//
// Returns: Vec of CastRecord - one per acting credit per cast member.
// Records from different actor pages arrive in whatever order the fetches
// complete; within one actor page they follow the page's document order.
pub async fn crawl_cast(seed_url: &str) -> Result<Vec<CastRecord>> {
    // Parse and validate the seed URL before touching the network
    let seed = Url::parse(seed_url)
        .map_err(|e| anyhow!("Invalid URL '{}': {}", seed_url, e))?;

    if seed.domain().is_none() {
        return Err(anyhow!("URL has no domain: {}", seed_url));
    }

    let client = build_client()?;

    // Queue of pages to crawl, seeded with the title page
    let mut queue = VecDeque::new();
    queue.push_back(CrawlItem {
        url: seed_url.to_string(),
        kind: PageKind::Title,
    });

    // Track visited URLs so no page is fetched twice
    let mut visited = HashSet::new();

    let mut records = Vec::new();

    // Process the queue wave by wave until empty
    while !queue.is_empty() {
        // Drain the current queue contents into one wave
        let mut wave = Vec::new();
        while let Some(item) = queue.pop_front() {
            // insert() returns false if the URL was already visited
            if visited.insert(item.url.clone()) {
                wave.push(item);
            }
        }

        println!("  Fetching {} page(s)...", wave.len());

        // Fetch the whole wave concurrently, up to the fetch limit
        let fetches = wave.into_iter().map(|item| {
            let client = client.clone(); // Clone the client for each task
            async move {
                let result = fetch_page(&client, &item.url).await;
                (item, result)
            }
        });

        let pages: Vec<(CrawlItem, Result<String>)> = stream::iter(fetches)
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        // Dispatch each fetched page to its handler
        for (item, result) in pages {
            match result {
                Ok(html) => {
                    let output = dispatch(&item, &html);
                    enqueue_new(&mut queue, &visited, output.requests);
                    records.extend(output.records);
                }
                Err(e) => {
                    // A branch that never arrives produces no records;
                    // the warning is the only trace it leaves
                    eprintln!("  Warning: Failed to fetch {}: {}", item.url, e);
                }
            }
        }

        // Polite crawling: pause before the next wave
        if !queue.is_empty() {
            tokio::time::sleep(WAVE_DELAY).await;
        }
    }

    Ok(records)
}

// Fetches a single actor page and extracts its records, skipping the
// title and credits hops. Used by the 'actor' subcommand.
pub async fn scrape_actor(actor_url: &str) -> Result<Vec<CastRecord>> {
    Url::parse(actor_url).map_err(|e| anyhow!("Invalid URL '{}': {}", actor_url, e))?;

    let client = build_client()?;
    let html = fetch_page(&client, actor_url).await?;

    Ok(spider::parse_actor_page(&html).records)
}

// Routes a fetched page to the handler its request was tagged for
//
// This is the whole engine/handler contract: one tag, one handler,
// one ParseOutput.
fn dispatch(item: &CrawlItem, html: &str) -> ParseOutput {
    match item.kind {
        PageKind::Title => spider::parse_title_page(&item.url, html),
        PageKind::FullCredits => spider::parse_full_credits(html),
        PageKind::Actor => spider::parse_actor_page(html),
    }
}

// Adds a handler's follow-up requests to the queue, skipping URLs that
// were already fetched
fn enqueue_new(
    queue: &mut VecDeque<CrawlItem>,
    visited: &HashSet<String>,
    requests: Vec<FollowUp>,
) {
    for request in requests {
        if !visited.contains(&request.url) {
            queue.push_back(CrawlItem {
                url: request.url,
                kind: request.kind,
            });
        }
    }
}

// Builds the HTTP client shared by all fetches in one crawl
fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

// Fetches a page, retrying a couple of times before giving up
async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let mut attempt = 1;
    loop {
        match try_fetch(client, url).await {
            Ok(html) => return Ok(html),
            Err(e) if attempt < FETCH_ATTEMPTS => {
                eprintln!(
                    "  Warning: attempt {}/{} failed for {}: {}",
                    attempt, FETCH_ATTEMPTS, url, e
                );
                tokio::time::sleep(RETRY_DELAY).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

// One fetch attempt: GET the URL and return its body on a 2xx status
async fn try_fetch(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }

    let html = response.text().await?;
    Ok(html)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is buffer_unordered?
//    - It runs up to N futures at once and yields results as they complete
//    - "unordered" means completion order, not submission order - an actor
//      page that loads fast is handled before a slow one that was queued
//      earlier, which is fine because no handler depends on arrival order
//
// 2. Why waves instead of one task per page?
//    - The queue only grows when a wave's pages have been parsed, so
//      draining it between fetch rounds keeps the engine a simple loop
//    - Wave 1 is the title page, wave 2 the credits page, wave 3 all the
//      actor pages - the natural shape of this crawl
//
// 3. Why does dispatch() take the item and not just the HTML?
//    - The title handler derives its follow-up from the URL the page was
//      fetched from; the content never matters for that hop
//    - The tag on the item is what picks the handler in the first place
//
// 4. What is visited.insert() returning?
//    - HashSet::insert returns false if the value was already present
//    - That gives us "mark and test" in one call when building a wave
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_routes_title_pages() {
        let item = CrawlItem {
            url: "https://www.imdb.com/title/tt0000001/".to_string(),
            kind: PageKind::Title,
        };

        let output = dispatch(&item, "<html></html>");

        assert_eq!(output.requests.len(), 1);
        assert_eq!(
            output.requests[0].url,
            "https://www.imdb.com/title/tt0000001/fullcredits/"
        );
        assert_eq!(output.requests[0].kind, PageKind::FullCredits);
    }

    #[test]
    fn test_dispatch_routes_credits_pages() {
        let item = CrawlItem {
            url: "https://www.imdb.com/title/tt0000001/fullcredits/".to_string(),
            kind: PageKind::FullCredits,
        };
        let html = r#"<table><tr><td class="primary_photo"><a href="/name/nm0000001/"></a></td></tr></table>"#;

        let output = dispatch(&item, html);

        assert_eq!(output.requests.len(), 1);
        assert_eq!(output.requests[0].kind, PageKind::Actor);
        assert!(output.records.is_empty());
    }

    #[test]
    fn test_dispatch_routes_actor_pages() {
        let item = CrawlItem {
            url: "https://www.imdb.com/name/nm0000001/".to_string(),
            kind: PageKind::Actor,
        };
        let html = r#"
            <html><head><title>Jane Doe - IMDb</title></head>
            <body>
                <div class="filmo-row" id="actor-tt0000001">
                    <a href="/title/tt0000001/">Movie A</a>
                </div>
            </body></html>
        "#;

        let output = dispatch(&item, html);

        assert!(output.requests.is_empty());
        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].actor, "Jane Doe");
    }

    #[test]
    fn test_enqueue_skips_visited_urls() {
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        visited.insert("https://www.imdb.com/name/nm0000001/".to_string());

        enqueue_new(
            &mut queue,
            &visited,
            vec![
                FollowUp {
                    url: "https://www.imdb.com/name/nm0000001/".to_string(),
                    kind: PageKind::Actor,
                },
                FollowUp {
                    url: "https://www.imdb.com/name/nm0000002/".to_string(),
                    kind: PageKind::Actor,
                },
            ],
        );

        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].url, "https://www.imdb.com/name/nm0000002/");
        assert_eq!(queue[0].kind, PageKind::Actor);
    }
}
