use quizwire::{extract, extract_with_options, Options};

const SENTINEL: &str = "Answer not found";

#[test]
fn fallback_runs_when_primary_pass_finds_nothing() {
    // The anchored root has no questions at all; the real quiz sits in
    // markup the locator never selects.
    let html = r#"
        <html><body>
          <div class="entry-content"><p>Intro text only, no quiz here.</p></div>
          <div class="weird-wrapper">
            <h3>Question 1: What is 2+2?</h3>
            <p>Answer: 4</p>
            <h3>Question 2: No material follows?</h3>
          </div>
        </body></html>
    "#;

    let result = extract(html);
    assert_eq!(result.questions.len(), 2);
    assert_eq!(result.questions[0].question, "What is 2+2?");
    assert_eq!(result.questions[0].answer, "4");
    assert_eq!(result.questions[1].answer, SENTINEL);
}

#[test]
fn fallback_accepts_plain_sibling_text() {
    let html = r#"
        <html><body>
          <div class="entry-content"><p>Nothing to see.</p></div>
          <section>
            <h4>Question 1: Capital of France?</h4>
            <p>Paris is the capital of France.</p>
          </section>
        </body></html>
    "#;

    let result = extract(html);
    assert_eq!(result.questions.len(), 1);
    assert_eq!(result.questions[0].answer, "Paris is the capital of France.");
}

#[test]
fn fallback_strips_enumeration_prefixes_too() {
    let html = r#"
        <html><body>
          <div class="entry-content"><p>Nothing to see.</p></div>
          <div>
            <h3>Question 1: Largest city of Pakistan by area?</h3>
            <li>B) Lahore</li>
          </div>
        </body></html>
    "#;

    let result = extract(html);
    assert_eq!(result.questions.len(), 1);
    assert_eq!(result.questions[0].answer, "Lahore");
}

#[test]
fn fallback_can_be_disabled() {
    let html = r#"
        <html><body>
          <div class="entry-content"><p>Nothing to see.</p></div>
          <div><h3>Question 1: Hidden?</h3><p>Answer: yes</p></div>
        </body></html>
    "#;

    let options = Options {
        use_sibling_fallback: false,
        ..Options::default()
    };
    let result = extract_with_options(html, &options);
    assert!(result.questions.is_empty());
}

#[test]
fn fallback_respects_the_result_cap() {
    let mut body = String::new();
    for n in 1..=7 {
        body.push_str(&format!("<h3>Question {n}: Number {n}?</h3><p>Answer: {n}</p>"));
    }
    let html = format!(
        "<html><body><div class=\"entry-content\"><p>Nothing to see.</p></div>\
         <div>{body}</div></body></html>"
    );

    let result = extract(&html);
    assert_eq!(result.questions.len(), 5);
    assert_eq!(result.questions[0].question, "Number 1?");
    assert_eq!(result.questions[4].question, "Number 5?");
}
