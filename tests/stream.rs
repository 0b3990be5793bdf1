use crossbeam_channel::bounded;
use metalex::lexing::*;
use std::thread;
use std::time::Duration;

mod common;
use common::*;

#[test]
fn matches_pull_lexer() -> TestResult {
    let text = "head {{ one two_2 }} middle {{три}} tail";
    let pulled = lex("<test>", text).lex();
    let streamed: Vec<Token> = spawn("<test>", text).map_err(|e| e.to_string())?.collect();
    assert_slices_equal(
        "tokens",
        &streamed,
        &pulled,
        |lhs, rhs| lhs == rhs && lhs.span == rhs.span,
        &streamed.token_string(),
    )
}

#[test]
fn ends_after_error() -> TestResult {
    let streamed: Vec<Token> = spawn("<test>", "{{a#b}} rest")
        .map_err(|e| e.to_string())?
        .collect();
    assert_slices_equal(
        "tokens",
        &streamed,
        &[
            test_token::left(),
            test_token::identifier("a"),
            test_token::error("unexpected symbol '#'"),
        ],
        |lhs, rhs| lhs == rhs,
        &streamed.token_string(),
    )
}

#[test]
fn abandoned_stream_releases_producer() -> TestResult {
    let text = "{{x}}".repeat(1000);
    let mut stream = spawn("<test>", &text).map_err(|e| e.to_string())?;
    assert_eq!(stream.next(), Some(test_token::left()));

    // Dropping joins the producer, so this only finishes if the producer exits.
    let (done, finished) = bounded(1);
    thread::spawn(move || {
        drop(stream);
        done.send(()).ok();
    });
    finished
        .recv_timeout(Duration::from_secs(10))
        .map_err(|_| String::from("producer still blocked after the stream was dropped"))
}

#[test]
fn exhausted_stream_drops_cleanly() -> TestResult {
    let mut stream = spawn("<test>", "a {{b}}").map_err(|e| e.to_string())?;
    while stream.next().is_some() {}
    assert_eq!(stream.next(), None);
    drop(stream);
    Ok(())
}
