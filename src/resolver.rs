//! Question/answer resolver.
//!
//! Single forward scan over the block sequence. A block matching the
//! question pattern opens a bounded look-ahead window that closes at the
//! next question marker or at the window limit; the answer cascade then
//! runs over that window, one rule at a time in fixed priority order. Each
//! rule scans the whole window before the next rule is attempted, so an
//! explicit `Answer:` block late in the window still beats a bold block at
//! the front.
//!
//! This component never fails: a question whose cascade exhausts every rule
//! is reported with the sentinel answer, not dropped.

use crate::blocks::{BlockTag, TextBlock};
use crate::options::Options;
use crate::patterns::{
    normalize_text, option_prefixes, ANSWER_PREFIX, ANSWER_SENTINEL, CORRECT_LEAD,
    QUESTION_PREFIX, TRAILING_QMARKS,
};
use crate::result::QaPair;

/// True when `text` reads as a question lead-in under the given options.
#[must_use]
pub fn is_question(text: &str, options: &Options) -> bool {
    if !QUESTION_PREFIX.is_match(text) {
        return false;
    }
    if options.require_question_mark && !text.contains('?') {
        return false;
    }
    true
}

/// Strip the question-marker prefix and tidy the remainder.
#[must_use]
pub fn clean_question(text: &str, options: &Options) -> String {
    let stripped = QUESTION_PREFIX.replace(text, "");
    let question = normalize_text(&stripped);
    if options.require_question_mark {
        TRAILING_QMARKS.replace(&question, "?").to_string()
    } else {
        question
    }
}

/// One answer-detection rule. Returns the cleaned answer when the block
/// matches, `None` otherwise (including when stripping leaves nothing).
pub type AnswerRule = fn(&TextBlock) -> Option<String>;

/// The answer cascade, in priority order. First match wins; each rule scans
/// the full window before the next is tried.
pub static ANSWER_RULES: &[(&str, AnswerRule)] = &[
    ("explicit-marker", explicit_marker),
    ("emphasis", emphasized),
    ("enumerated-option", enumerated_option),
    ("substantive-paragraph", substantive_paragraph),
];

/// Rule 1: a block opening with `Answer`/`Ans`/`Correct Answer`.
fn explicit_marker(block: &TextBlock) -> Option<String> {
    if !ANSWER_PREFIX.is_match(&block.text) {
        return None;
    }
    non_empty(ANSWER_PREFIX.replace(&block.text, "").into_owned())
}

/// Rule 2: a bold/strong block, usually the highlighted correct option.
fn emphasized(block: &TextBlock) -> Option<String> {
    if block.tag != BlockTag::Emphasis || block.text.chars().count() <= 1 {
        return None;
    }
    non_empty(CORRECT_LEAD.replace(&block.text, "").into_owned())
}

/// Rule 3: a list item or paragraph opening with an enumeration prefix.
/// Only the recognized prefix is stripped; the remainder stays verbatim.
fn enumerated_option(block: &TextBlock) -> Option<String> {
    if !matches!(block.tag, BlockTag::ListItem | BlockTag::Paragraph) {
        return None;
    }
    for prefix in option_prefixes() {
        if prefix.is_match(&block.text) {
            return non_empty(prefix.replace(&block.text, "").into_owned());
        }
    }
    None
}

/// Rule 4: the first substantive paragraph, with a defensive `Answer:`
/// strip in case a differently-phrased lead-in slipped past rule 1.
fn substantive_paragraph(block: &TextBlock) -> Option<String> {
    if block.tag != BlockTag::Paragraph || block.text.chars().count() <= 2 {
        return None;
    }
    non_empty(ANSWER_PREFIX.replace(&block.text, "").into_owned())
}

fn non_empty(text: String) -> Option<String> {
    let text = normalize_text(&text);
    if text.is_empty() { None } else { Some(text) }
}

/// Run the cascade over a window. Whole-window scan per rule.
fn resolve_answer(window: &[&TextBlock]) -> Option<String> {
    for (name, rule) in ANSWER_RULES {
        for block in window {
            if let Some(answer) = rule(block) {
                tracing::debug!(rule = %name, "answer rule matched");
                return Some(answer);
            }
        }
    }
    None
}

/// Residual lead-in strip applied to every cascade hit. Rule 2/3 can match
/// a block phrased as `Correct Answer: ...` without consuming that prefix.
pub(crate) fn scrub_answer(answer: &str) -> String {
    let answer = ANSWER_PREFIX.replace(answer, "");
    let answer = CORRECT_LEAD.replace(&answer, "");
    normalize_text(&answer)
}

/// Scan `blocks` for question markers and resolve an answer for each.
#[must_use]
pub fn resolve_pairs(blocks: &[TextBlock], options: &Options) -> Vec<QaPair> {
    let mut pairs = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        if pairs.len() >= options.max_questions {
            break;
        }
        if !is_question(&block.text, options) {
            continue;
        }

        let question = clean_question(&block.text, options);
        if question.is_empty() {
            continue;
        }

        // Window runs to the next question marker or the scan bound,
        // whichever comes first.
        let bound = blocks.len().min(i + 1 + options.window_limit);
        let window: Vec<&TextBlock> = blocks[i + 1..bound]
            .iter()
            .take_while(|b| !is_question(&b.text, options))
            .collect();

        let answer = match resolve_answer(&window) {
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
