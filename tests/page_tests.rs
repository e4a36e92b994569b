use yt_assist::page::{HtmlSnapshot, PageDom, scrape_comments};

const SAMPLE_PAGE: &str = r#"<html>
<head>
  <title>Cats Compilation</title>
  <meta name="description" content="An hour of cats">
</head>
<body>
  <yt-formatted-string id="content-text">First comment &amp; more</yt-formatted-string>
  <span id="content-text">Second comment</span>
</body>
</html>"#;

#[test]
fn test_snapshot_parses_title_description_and_comments() {
    let page = HtmlSnapshot::parse(SAMPLE_PAGE);
    assert_eq!(page.title(), "Cats Compilation");
    assert_eq!(page.description(), "An hour of cats");
    assert_eq!(
        page.comment_texts(),
        vec!["First comment & more".to_string(), "Second comment".to_string()]
    );
}

#[test]
fn test_empty_page_yields_empty_fields() {
    let page = HtmlSnapshot::parse("<html><body></body></html>");
    assert_eq!(page.title(), "");
    assert_eq!(page.description(), "");
    assert!(page.comment_texts().is_empty());

    let none = HtmlSnapshot::empty();
    assert!(none.comment_texts().is_empty());
}

/// Fake page with a configurable comment list.
struct FakePage {
    comments: Vec<String>,
}

impl PageDom for FakePage {
    fn title(&self) -> String {
        String::new()
    }

    fn description(&self) -> String {
        String::new()
    }

    fn comment_texts(&self) -> Vec<String> {
        self.comments.clone()
    }
}

#[test]
fn test_scrape_caps_and_drops_empty_strings() {
    let mut comments: Vec<String> = (0..40).map(|i| format!("comment {i}")).collect();
    comments[3] = String::new();
    comments[7] = String::new();

    let page = FakePage { comments };
    let scraped = scrape_comments(&page, 30);

    // 30 taken in order, then the two empties dropped.
    assert_eq!(scraped.len(), 28);
    assert_eq!(scraped[0], "comment 0");
    assert_eq!(scraped.last().map(String::as_str), Some("comment 29"));
    assert!(scraped.iter().all(|text| !text.is_empty()));
}

#[test]
fn test_scrape_of_empty_page_never_fails() {
    let page = FakePage { comments: Vec::new() };
    assert!(scrape_comments(&page, 30).is_empty());
}
