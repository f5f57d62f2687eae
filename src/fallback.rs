//! Sibling fallback resolver.
//!
//! Runs only when the primary pass produced zero pairs, against a fresh
//! parse of the original document. Structural assumptions are weaker: any
//! h3/h4/emphasis/paragraph whose text reads as a question becomes a
//! marker, and up to `sibling_scan_limit` of its following element siblings
//! are inspected with a single linear stopping rule — first sibling
//! matching any answer rule, else the first non-empty sibling of an
//! accepted tag, else the sentinel.

use dom_query::{Document, Selection};

use crate::blocks::{BlockTag, TextBlock};
use crate::options::Options;
use crate::patterns::{
    normalize_text, ANSWER_SENTINEL, FALLBACK_CANDIDATE_SELECTOR, FALLBACK_SIBLING_TAGS,
};
use crate::resolver::{clean_question, is_question, scrub_answer, ANSWER_RULES};
use crate::result::QaPair;

/// Scan the raw document for question headings and sibling answers.
#[must_use]
pub fn resolve_from_document(doc: &Document, options: &Options) -> Vec<QaPair> {
    let mut pairs: Vec<QaPair> = Vec::new();

    for node in doc.select(FALLBACK_CANDIDATE_SELECTOR).nodes() {
        if pairs.len() >= options.max_questions {
            break;
        }

        let marker = Selection::from(*node);
        let text = normalize_text(&marker.text());
        if text.is_empty() || !is_question(&text, options) {
            continue;
        }

        let question = clean_question(&text, options);
        if question.is_empty() {
            continue;
        }
        // A marker nested in a matching ancestor (strong inside p) shows up
        // twice in the candidate scan; emit it once.
        if pairs.last().is_some_and(|p| p.question == question) {
            continue;
        }

        let answer = match scan_siblings(&marker, options) {
            Some(raw) => {
                let cleaned = scrub_answer(&raw);
                if cleaned.is_empty() {
                    continue;
                }
                cleaned
            }
            None => ANSWER_SENTINEL.to_string(),
        };

        pairs.push(QaPair { question, answer });
    }

    pairs
}

/// Walk following element siblings looking for answer material.
fn scan_siblings(marker: &Selection, options: &Options) -> Option<String> {
    let mut first_text: Option<String> = None;
    let mut current = next_element_sibling(marker);
    let mut inspected = 0;

    while let Some(sibling) = current {
        if inspected >= options.sibling_scan_limit {
            break;
        }
        inspected += 1;

        let text = normalize_text(&sibling.text());
        // The next question ends this marker's reach regardless of tag;
        // heading markers are not in the accepted-sibling set.
        if !text.is_empty() && is_question(&text, options) {
            break;
        }

        let name = sibling
            .nodes()
            .first()
            .and_then(dom_query::NodeRef::node_name)
            .map(|n| n.to_lowercase())
            .unwrap_or_default();

        if FALLBACK_SIBLING_TAGS.contains(&name.as_str()) && !text.is_empty() {
            if let Some(tag) = BlockTag::from_name(&name) {
                let block = TextBlock { tag, text };
                // The substantive-paragraph last resort is replaced here
                // by the plain first-non-empty sibling rule below.
                for (rule_name, rule) in &ANSWER_RULES[..ANSWER_RULES.len() - 1] {
                    if let Some(answer) = rule(&block) {
                        tracing::debug!(rule = %rule_name, "fallback answer matched");
                        return Some(answer);
                    }
                }
                if first_text.is_none() {
                    first_text = Some(block.text);
                }
            }
        }

        current = next_element_sibling(&sibling);
    }

    first_text
}

/// Next sibling element, skipping text nodes.
fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}
