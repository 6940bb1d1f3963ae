// src/core/markup.rs
//! Queryable view of a decoded page, backed by `scraper`.
//!
//! Document-level lookups live on [`Markup`]; the free functions below work
//! on single nodes (text, attributes, sibling/child navigation).

use scraper::{ElementRef, Html, Selector};

use crate::error::{LookupError, Result};

pub struct Markup {
    doc: Html,
}

impl Markup {
    pub fn parse(markup: &str) -> Self {
        Self { doc: Html::parse_document(markup) }
    }

    /// All elements matching `css`, in document order.
    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let sel = selector(css)?;
        Ok(self.doc.select(&sel).collect())
    }

    pub fn select_first(&self, css: &str) -> Result<Option<ElementRef<'_>>> {
        let sel = selector(css)?;
        Ok(self.doc.select(&sel).next())
    }

    pub fn count(&self, css: &str) -> Result<usize> {
        let sel = selector(css)?;
        Ok(self.doc.select(&sel).count())
    }

    /// Like `select_all`, for an already compiled selector.
    pub fn select(&self, sel: &Selector) -> Vec<ElementRef<'_>> {
        self.doc.select(sel).collect()
    }
}

/// Compile a CSS selector. Selectors are fixed strings, so a failure means
/// the grammar itself is broken rather than the page.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| LookupError::UnsupportedLayout(format!("selector `{css}`: {e}")))
}

/// Concatenated text of every descendant text node.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn trimmed_text(el: ElementRef<'_>) -> String {
    s!(text(el).trim())
}

/// Text of the element's first child, if that child is a text node.
pub fn first_text_child(el: ElementRef<'_>) -> Option<String> {
    el.first_child()
        .and_then(|node| node.value().as_text().map(|t| s!(&**t)))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Nearest preceding sibling that is an element (text and comments skipped).
pub fn prev_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// The element itself or its nearest ancestor matching `sel`.
pub fn closest<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    if sel.matches(&el) {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| sel.matches(a))
}

/// Direct element children matching `sel`.
pub fn children<'a>(el: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| sel.matches(c))
        .collect()
}

/// Walk a chain of direct-child steps, `a > b > c`, starting below `roots`.
pub fn child_path<'a>(roots: &[ElementRef<'a>], steps: &[&Selector]) -> Vec<ElementRef<'a>> {
    steps.iter().fold(roots.to_vec(), |level, step| {
        level.iter().flat_map(|el| children(*el, step)).collect()
    })
}

/// Number of siblings after `el` matching `sel` (the `el ~ sel` set).
pub fn following_siblings_matching(el: ElementRef<'_>, sel: &Selector) -> usize {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|s| sel.matches(s))
        .count()
}

/// Number of descendants matching `sel`.
pub fn descendant_count(el: ElementRef<'_>, sel: &Selector) -> usize {
    el.select(sel).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const PAGE: &str = r##"
        <div id="wrap">
          <h2 class="hwg"><span class="hw">bank<sup>1</sup></span></h2>
          <section class="gramb"><p>one</p></section>
          <div class="pron"><span class="speaker"><a href="#"><audio src="b.mp3"></audio></a></span></div>
          <section class="gramb"><p>two</p></section>
        </div>
    "##;

    #[test]
    fn select_and_text() {
        let m = Markup::parse(PAGE);
        let hw = m.select_first(".hwg .hw").unwrap().unwrap();
        assert_eq!(text(hw), "bank1");
        assert_eq!(first_text_child(hw).as_deref(), Some("bank"));
        assert_eq!(m.count("section.gramb").unwrap(), 2);
        assert!(m.select_first(".missing").unwrap().is_none());
    }

    #[test]
    fn attribute_and_navigation() {
        let m = Markup::parse(PAGE);
        let audio = m.select_first(".speaker a audio").unwrap().unwrap();
        assert_eq!(attr(audio, "src"), Some("b.mp3"));

        let wrap_sel = selector("#wrap").unwrap();
        let wrap = closest(audio, &wrap_sel).unwrap();
        assert_eq!(attr(wrap, "id"), Some("wrap"));
        assert_eq!(descendant_count(wrap, &selector("section").unwrap()), 2);

        let pron = m.select_first(".pron").unwrap().unwrap();
        let before = prev_element(pron).unwrap();
        assert_eq!(trimmed_text(before), "one");

        let hwg = m.select_first(".hwg").unwrap().unwrap();
        assert_eq!(following_siblings_matching(hwg, &selector(".gramb").unwrap()), 2);
    }

    #[test]
    fn child_path_only_follows_direct_children() {
        let m = Markup::parse(r#"<ul><li><div class="trg"><p><span class="ind">x</span></p></div>
            <div><div class="trg"><p><span class="ind">nested</span></p></div></div></li></ul>"#);
        let li = m.select_first("li").unwrap().unwrap();
        let trg = selector(".trg").unwrap();
        let p = selector("p").unwrap();
        let ind = selector(".ind").unwrap();
        let hits = child_path(&[li], &[&trg, &p, &ind]);
        assert_eq!(hits.len(), 1);
        assert_eq!(text(hits[0]), "x");
    }

    #[test]
    fn bad_selector_is_layout_error() {
        let err = selector("..nope").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedLayout);
    }
}
