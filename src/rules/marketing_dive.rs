//! Extraction rule for the Marketing Dive news feed.
//!
//! The feed is plain server-rendered HTML: a `ul` carrying the `feed` class
//! token wraps `li.feed__item` entries. Sponsored entries reuse the item
//! markup but add the `feed-item-ad` class token and are dropped. The
//! headline lives in `h3.feed__title` with the story link as its first
//! anchor; `p.feed__description` and `a.topic-tag` are optional.

use crate::dom::{self, Signature};
use crate::models::NewsRecord;
use crate::rules::{ExtractionRule, absolutize};
use once_cell::sync::Lazy;
use scraper::ElementRef;
use url::Url;

static ORIGIN: Lazy<Url> =
    Lazy::new(|| Url::parse("https://www.marketingdive.com").expect("valid origin URL"));

const LISTING: Signature = Signature::new("ul", "feed");
const ITEM: Signature = Signature::new("li", "feed__item");
const TITLE: Signature = Signature::new("h3", "feed__title");
const DESCRIPTION: Signature = Signature::new("p", "feed__description");
const CATEGORY: Signature = Signature::new("a", "topic-tag");
const AD_MARKER: &str = "feed-item-ad";

/// Rule for `https://www.marketingdive.com/news/`.
#[derive(Debug, Default)]
pub struct MarketingDive;

impl ExtractionRule for MarketingDive {
    fn site(&self) -> &'static str {
        "marketing_dive"
    }

    fn listing_container(&self) -> Option<Signature> {
        Some(LISTING)
    }

    fn item_signature(&self) -> Signature {
        ITEM
    }

    fn is_excluded(&self, item: ElementRef<'_>) -> bool {
        dom::has_class_token(item, AD_MARKER)
    }

    fn extract(&self, item: ElementRef<'_>) -> Option<NewsRecord> {
        let title_element = dom::find_first(item, &TITLE)?;
        let anchor = dom::find_first(title_element, &Signature::tag_only("a"))?;
        let href = dom::attribute(anchor, "href")?;
        let link = absolutize(href, &ORIGIN)?;

        let description = dom::find_first(item, &DESCRIPTION).map(dom::text_of);
        let category = dom::find_first(item, &CATEGORY).map(dom::text_of);

        NewsRecord::new(dom::text_of(title_element), link, description, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn item_from(html: &str) -> NewsRecord {
        try_item_from(html).expect("item should yield a record")
    }

    fn try_item_from(html: &str) -> Option<NewsRecord> {
        let document = Html::parse_document(html);
        let item = dom::find_first(document.root_element(), &ITEM)?;
        MarketingDive.extract(item)
    }

    #[test]
    fn test_extract_fully_populated_item() {
        let record = item_from(
            r#"<li class="row feed__item">
                <h3 class="feed__title"><a href="/news/big-story/1234/">Big Story</a></h3>
                <p class="feed__description">A teaser paragraph.</p>
                <a class="topic-tag" href="/topic/advertising/">Advertising</a>
            </li>"#,
        );
        assert_eq!(record.title, "Big Story");
        assert_eq!(record.link, "https://www.marketingdive.com/news/big-story/1234/");
        assert_eq!(record.description, "A teaser paragraph.");
        assert_eq!(record.category, "Advertising");
    }

    #[test]
    fn test_missing_description_and_category_degrade_to_empty() {
        let record = item_from(
            r#"<li class="row feed__item">
                <h3 class="feed__title"><a href="https://www.marketingdive.com/news/x/">X</a></h3>
            </li>"#,
        );
        assert_eq!(record.description, "");
        assert_eq!(record.category, "");
    }

    #[test]
    fn test_missing_anchor_yields_no_record() {
        let result = try_item_from(
            r#"<li class="row feed__item">
                <h3 class="feed__title">Headline without a link</h3>
            </li>"#,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_anchor_without_href_yields_no_record() {
        let result = try_item_from(
            r#"<li class="row feed__item">
                <h3 class="feed__title"><a>Headline</a></h3>
            </li>"#,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_ad_item_is_excluded() {
        let document = Html::parse_document(
            r#"<li class="row feed__item feed-item-ad">
                <h3 class="feed__title"><a href="/sponsored/x/">Sponsored</a></h3>
            </li>"#,
        );
        let item = dom::find_first(document.root_element(), &ITEM).unwrap();
        assert!(MarketingDive.is_excluded(item));
    }

    #[test]
    fn test_emitted_link_is_absolute() {
        let record = item_from(
            r#"<li class="feed__item">
                <h3 class="feed__title"><a href="/news/relative/">Relative</a></h3>
            </li>"#,
        );
        assert!(record.link.starts_with("http"));
    }
}
