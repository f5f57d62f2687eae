//! Pipeline orchestration.
//!
//! Locate → linearize → resolve, with the sibling fallback against a fresh
//! parse when the primary pass yields nothing. Title resolution happens
//! first, before the locator prunes the tree.

use dom_query::Document;

use crate::options::Options;
use crate::result::ExtractResult;
use crate::{blocks, fallback, locate, metadata, resolver};

pub(crate) fn run_pipeline(html: &str, options: &Options) -> ExtractResult {
    let document = Document::from(html);

    let title = metadata::resolve_title(&document);

    let root = locate::find_content_root(&document);
    let sequence = blocks::linearize(&root, options);
    tracing::debug!(blocks = sequence.len(), "linearized content root");

    let mut questions = resolver::resolve_pairs(&sequence, options);

    if questions.is_empty() && options.use_sibling_fallback {
        tracing::debug!("primary resolver found nothing, scanning raw document siblings");
        // The locator pruned `document` in place; the fallback needs the
        // original markup, so it gets its own parse.
        let backup = Document::from(html);
        questions = fallback::resolve_from_document(&backup, options);
    }

    tracing::debug!(pairs = questions.len(), "extraction finished");

    ExtractResult {
        title,
        questions,
        source_url: options.url.clone(),
    }
}
