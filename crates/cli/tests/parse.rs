//! Tests for CLI argument parsing.

use clap::Parser;
use groq_cli::{App, Command, Config};

#[test]
fn app_parse_send() {
    let app = App::parse_from(["groq", "send", "What is the capital of France?"]);
    match app.command {
        Command::Send(cmd) => {
            assert_eq!(cmd.prompt, "What is the capital of France?");
            assert_eq!(cmd.max_tokens, 100);
        }
        _ => panic!("expected Send command"),
    }
}

#[test]
fn app_parse_chat_defaults() {
    let app = App::parse_from(["groq", "chat"]);
    match app.command {
        Command::Chat(cmd) => assert_eq!(cmd.max_tokens, 150),
        _ => panic!("expected Chat command"),
    }
    assert_eq!(app.model, "llama-3.3-70b-versatile");
    assert_eq!(app.temperature, 0.7);
    assert_eq!(app.base_url, groq::endpoint::GROQ);
    assert!(app.timeout.is_none());
}

#[test]
fn app_parse_global_flags_after_subcommand() {
    let app = App::parse_from([
        "groq",
        "chat",
        "--model",
        "llama-3.1-8b-instant",
        "--temperature",
        "0",
        "--timeout",
        "30",
        "--max-tokens",
        "64",
    ]);
    assert_eq!(app.model, "llama-3.1-8b-instant");
    assert_eq!(app.temperature, 0.0);
    assert_eq!(app.timeout, Some(30));
    assert!(matches!(app.command, Command::Chat(cmd) if cmd.max_tokens == 64));
}

#[test]
fn app_parse_verbosity() {
    let app = App::parse_from(["groq", "-vv", "send", "hi"]);
    assert_eq!(app.verbose, 2);
}

#[test]
fn send_request_uses_config() {
    let app = App::parse_from(["groq", "--temperature", "0.2", "send", "hi"]);
    let config = Config {
        key: "k".into(),
        model: app.model.clone(),
        temperature: app.temperature,
        base_url: app.base_url.clone(),
        timeout: None,
    };
    let Command::Send(cmd) = &app.command else {
        panic!("expected Send command");
    };
    let req = cmd.request(&config);
    assert_eq!(req.model, "llama-3.3-70b-versatile");
    assert_eq!(req.temperature, Some(0.2));
    assert_eq!(req.max_tokens, Some(100));
    assert_eq!(req.messages.len(), 2);
    assert_eq!(req.messages[1], groq::Message::user("hi"));
}
