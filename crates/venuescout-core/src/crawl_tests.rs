use std::time::Duration;

use super::*;
use crate::testing::{FakeEngine, PageFixture};

fn article(name: &str) -> String {
    format!(
        r#"<div class="c-entry-content"><h2>{}</h2><p>A cocktail bar.</p></div>"#,
        name
    )
}

fn driver(engine: Arc<FakeEngine>) -> CrawlDriver {
    let config = ScoutConfig::default();
    CrawlDriver::new(
        engine,
        Arc::new(ArticleParser::new(&config).unwrap()),
        Arc::new(Classifier::default()),
        &config,
    )
}

fn url(i: usize) -> String {
    format!("https://ny.eater.com/article-{}", i)
}

#[tokio::test]
async fn test_empty_links() {
    let engine = Arc::new(FakeEngine::new());
    let results = driver(engine.clone()).crawl(&[]).await;
    assert!(results.is_empty());
    assert!(engine.untouched());
}

#[tokio::test(start_paused = true)]
async fn test_results_follow_input_order() {
    let mut engine = FakeEngine::new().with_content_delay(Duration::from_millis(5));
    let links: Vec<String> = (0..9).map(url).collect();
    for (i, link) in links.iter().enumerate() {
        engine = engine.with_html(link, "Bars", &article(&format!("Venue {}", i)));
    }
    let results = driver(Arc::new(engine)).crawl(&links).await;

    assert_eq!(results.len(), 9);
    for (i, venues) in results.iter().enumerate() {
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].name, format!("Venue {}", i));
    }
}

#[tokio::test]
async fn test_failures_are_isolated() {
    let links = vec![url(0), url(1), url(2), url(3)];
    let engine = FakeEngine::new()
        .with_html(&links[0], "Bars", &article("First Place"))
        .with_page(&links[1], PageFixture::FailNavigation("navigation timed out".to_string()))
        .with_page(&links[2], PageFixture::FailContent)
        .with_html(&links[3], "Bars", &article("Last Place"));
    let engine = Arc::new(engine);

    let results = driver(engine.clone()).crawl(&links).await;

    assert_eq!(results[0][0].name, "First Place");
    assert!(results[1].is_empty());
    assert!(results[2].is_empty());
    assert_eq!(results[3][0].name, "Last Place");
    assert_eq!(engine.opened().len(), 4);
    // The page whose content failed was still closed.
    assert_eq!(engine.active.current(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_concurrency_is_bounded() {
    let mut engine = FakeEngine::new().with_content_delay(Duration::from_millis(20));
    let links: Vec<String> = (0..40).map(url).collect();
    for link in &links {
        engine = engine.with_html(link, "Bars", &article("Somewhere"));
    }
    let engine = Arc::new(engine);

    let results = driver(engine.clone()).crawl(&links).await;

    assert_eq!(results.len(), 40);
    assert!(results.iter().all(|v| v.len() == 1));
    assert_eq!(engine.active.peak(), 4);
    assert_eq!(engine.active.current(), 0);

    let mut opened = engine.opened();
    opened.sort();
    let mut expected = links.clone();
    expected.sort();
    assert_eq!(opened, expected);
}

#[tokio::test(start_paused = true)]
async fn test_custom_concurrency() {
    let mut engine = FakeEngine::new().with_content_delay(Duration::from_millis(20));
    let links: Vec<String> = (0..6).map(url).collect();
    for link in &links {
        engine = engine.with_html(link, "Bars", &article("Somewhere"));
    }
    let engine = Arc::new(engine);

    driver(engine.clone()).with_concurrency(2).crawl(&links).await;
    assert_eq!(engine.active.peak(), 2);
}

#[tokio::test]
async fn test_classifies_records() {
    let link = url(0);
    let engine = FakeEngine::new().with_html(&link, "Best Bars", &article("Dante"));
    let results = driver(Arc::new(engine)).crawl(&[link]).await;
    assert_eq!(
        results[0][0].venue_type,
        venuescout_protocols::VenueType::Bar
    );
}
