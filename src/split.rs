//! Word splitting for staggered text animation
//!
//! Each word of a text node is wrapped in `<span class="split-word">` with a
//! `--index` custom property; whitespace stays as bare text between spans and
//! inline elements (`<br>`, `<em>`, ...) are deep-cloned through in place.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word { text: &'a str, index: usize },
    Space(&'a str),
}

/// Whitespace as an ECMAScript `\s` class sees it (WhiteSpace plus
/// LineTerminator). Differs from `char::is_whitespace` on U+FEFF and U+0085.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

/// Direct child of an element about to be split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child<'a> {
    Text(&'a str),
    Element,
    Other,
}

/// One node to append when rebuilding the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Word { text: &'a str, index: usize },
    Space(&'a str),
    /// Deep clone of the original child at this position
    Clone(usize),
}

/// Replacement children, in order, for the given original children. Word
/// indices run across all text children; non-element, non-text children
/// are dropped.
pub fn layout<'a>(children: &[Child<'a>]) -> Vec<Piece<'a>> {
    let mut counter = WordCounter::default();
    let mut pieces = Vec::new();
    for (i, child) in children.iter().enumerate() {
        match *child {
            Child::Text(text) => pieces.extend(counter.tokenize(text).into_iter().map(|t| match t {
                Token::Word { text, index } => Piece::Word { text, index },
                Token::Space(text) => Piece::Space(text),
            })),
            Child::Element => pieces.push(Piece::Clone(i)),
            Child::Other => {}
        }
    }
    pieces
}

/// Hands out word indices across every text segment of one element.
#[derive(Debug, Default)]
pub struct WordCounter(usize);

impl WordCounter {
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.0
    }

    fn next(&mut self) -> usize {
        let i = self.0;
        self.0 += 1;
        i
    }

    /// Alternating runs of whitespace and non-whitespace, in order.
    pub fn tokenize<'a>(&mut self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut in_space = None;

        for (i, c) in text.char_indices() {
            let space = is_space(c);
            match in_space {
                Some(prev) if prev != space => {
                    tokens.push(self.token(&text[start..i], prev));
                    start = i;
                }
                _ => {}
            }
            in_space = Some(space);
        }
        if let Some(space) = in_space {
            tokens.push(self.token(&text[start..], space));
        }
        tokens
    }

    fn token<'a>(&mut self, run: &'a str, space: bool) -> Token<'a> {
        if space {
            Token::Space(run)
        } else {
            Token::Word { text: run, index: self.next() }
        }
    }
}

/// Rebuild `element`'s children as split words. Returns the word count.
pub fn split_words(document: &Document, element: &Element, config: &SiteConfig) -> Result<usize> {
    let children = element.child_nodes();
    let original: Vec<Node> = (0..children.length()).filter_map(|i| children.item(i)).collect();
    let texts: Vec<Option<String>> = original
        .iter()
        .map(|node| (node.node_type() == Node::TEXT_NODE).then(|| node.text_content().unwrap_or_default()))
        .collect();
    let kinds: Vec<Child> = original
        .iter()
        .zip(&texts)
        .map(|(node, text)| match (text, node.node_type()) {
            (Some(text), _) => Child::Text(text),
            (None, Node::ELEMENT_NODE) => Child::Element,
            _ => Child::Other,
        })
        .collect();

    let pieces = layout(&kinds);
    element.set_text_content(None);

    let mut words = 0;
    for piece in pieces {
        let node: Node = match piece {
            Piece::Word { text, index } => {
                words += 1;
                word_span(document, text, index, config)?.into()
            }
            Piece::Space(text) => document.create_text_node(text).into(),
            Piece::Clone(i) => original[i].clone_node_with_deep(true)?,
        };
        element.append_child(&node)?;
    }

    dom::add_class(element, config.classes.split_container);
    Ok(words)
}

fn word_span(document: &Document, text: &str, index: usize, config: &SiteConfig) -> Result<HtmlElement> {
    let span = document.create_element("span")?.unchecked_into::<HtmlElement>();
    span.set_text_content(Some(text));
    dom::add_class(&span, config.classes.split_word);
    dom::set_style(&span, "--index", &index.to_string());
    Ok(span)
}

/// Split every service title and description on the page.
pub fn split_page(document: &Document, config: &SiteConfig) -> Result<usize> {
    let mut elements = dom::query_all(document, config.selectors.split_titles)?;
    elements.extend(dom::query_all(document, config.selectors.split_descriptions)?);

    let mut words = 0;
    for el in &elements {
        words += split_words(document, el, config)?;
    }
    Ok(words)
}
