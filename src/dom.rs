//! Thin query layer over the parsed document tree.
//!
//! Extraction rules address elements by tag name plus a single class token.
//! Matching is token-membership, not whole-attribute equality: both target
//! sites emit multi-token class attributes (`class="row feed__item"`), so an
//! element matches when its class list *contains* the token.

use scraper::ElementRef;
use std::fmt;

/// A tag-plus-class-token element signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub tag: &'static str,
    /// Class token the element must carry; `None` matches on tag alone.
    pub class: Option<&'static str>,
}

impl Signature {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class: Some(class),
        }
    }

    pub const fn tag_only(tag: &'static str) -> Self {
        Self { tag, class: None }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            Some(class) => write!(f, "{}.{}", self.tag, class),
            None => write!(f, "{}", self.tag),
        }
    }
}

/// Whether the element's class list contains `token`.
pub fn has_class_token(element: ElementRef<'_>, token: &str) -> bool {
    element.value().classes().any(|c| c == token)
}

fn matches(element: ElementRef<'_>, signature: &Signature) -> bool {
    element.value().name() == signature.tag
        && signature
            .class
            .is_none_or(|token| has_class_token(element, token))
}

/// First descendant of `scope` matching `signature`, in document order.
pub fn find_first<'a>(scope: ElementRef<'a>, signature: &Signature) -> Option<ElementRef<'a>> {
    descendants(scope).find(|el| matches(*el, signature))
}

/// All descendants of `scope` matching `signature`, in document order.
pub fn find_all<'a>(scope: ElementRef<'a>, signature: &Signature) -> Vec<ElementRef<'a>> {
    descendants(scope)
        .filter(|el| matches(*el, signature))
        .collect()
}

/// Nearest ancestor of `node` that is a `tag` element carrying `token` in its
/// class list.
pub fn ancestor_with_class<'a>(
    node: ElementRef<'a>,
    tag: &str,
    token: &str,
) -> Option<ElementRef<'a>> {
    node.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag && has_class_token(*el, token))
}

/// Text content of `node`, trimmed and with internal whitespace collapsed to
/// single spaces.
pub fn text_of(node: ElementRef<'_>) -> String {
    node.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attribute value on `node`, if present.
pub fn attribute<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

// Descendant elements excluding `scope` itself.
fn descendants<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_li(document: &Html) -> ElementRef<'_> {
        find_first(document.root_element(), &Signature::tag_only("li")).unwrap()
    }

    #[test]
    fn test_class_token_membership_not_exact_match() {
        let document = Html::parse_document(r#"<ul class="feed layout-stack-xxl"><li>x</li></ul>"#);
        let feed = find_first(document.root_element(), &Signature::new("ul", "feed"));
        assert!(feed.is_some());

        // Substring of a token must not match.
        let fee = find_first(document.root_element(), &Signature::new("ul", "fee"));
        assert!(fee.is_none());
    }

    #[test]
    fn test_find_all_preserves_document_order() {
        let document = Html::parse_document(
            r#"<ul>
                <li class="row feed__item">one</li>
                <li class="other">skip</li>
                <li class="feed__item">two</li>
            </ul>"#,
        );
        let items = find_all(document.root_element(), &Signature::new("li", "feed__item"));
        assert_eq!(items.len(), 2);
        assert_eq!(text_of(items[0]), "one");
        assert_eq!(text_of(items[1]), "two");
    }

    #[test]
    fn test_find_first_excludes_scope_itself() {
        let document = Html::parse_document(r#"<div class="a"><div class="a">inner</div></div>"#);
        let outer = find_first(document.root_element(), &Signature::new("div", "a")).unwrap();
        let inner = find_first(outer, &Signature::new("div", "a")).unwrap();
        assert_eq!(text_of(inner), "inner");
        assert!(find_first(inner, &Signature::new("div", "a")).is_none());
    }

    #[test]
    fn test_ancestor_with_class() {
        let document = Html::parse_document(
            r#"<div class="wrap f9uzM extra"><ul><li><a href="/x">y</a></li></ul></div>"#,
        );
        let anchor = find_first(document.root_element(), &Signature::tag_only("a")).unwrap();
        assert!(ancestor_with_class(anchor, "div", "f9uzM").is_some());
        assert!(ancestor_with_class(anchor, "div", "absent").is_none());
        assert!(ancestor_with_class(anchor, "span", "f9uzM").is_none());
    }

    #[test]
    fn test_text_of_normalizes_whitespace() {
        let document =
            Html::parse_document("<ul><li>  A   headline\n    with   spaces  </li></ul>");
        assert_eq!(text_of(first_li(&document)), "A headline with spaces");
    }

    #[test]
    fn test_attribute_access() {
        let document = Html::parse_document(r#"<ul><li><a href="./foo">t</a></li></ul>"#);
        let anchor = find_first(document.root_element(), &Signature::tag_only("a")).unwrap();
        assert_eq!(attribute(anchor, "href"), Some("./foo"));
        assert_eq!(attribute(anchor, "title"), None);
    }

    #[test]
    fn test_signature_display() {
        assert_eq!(Signature::new("ul", "feed").to_string(), "ul.feed");
        assert_eq!(Signature::tag_only("a").to_string(), "a");
    }
}
