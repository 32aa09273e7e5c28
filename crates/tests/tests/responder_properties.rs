use parley_core::{Matcher, RuleCatalog, DEFAULT_FALLBACK};
use parley_tests::{builtin_matcher, precedence_catalog};

fn precedence_matcher() -> Matcher {
    let catalog = RuleCatalog::from_json_str(&precedence_catalog().to_string())
        .expect("fixture catalog is valid");
    Matcher::with_default_normalizer(catalog)
}

#[test]
fn every_input_gets_a_non_empty_reply() {
    let bot = builtin_matcher();
    let inputs = [
        "",
        " ",
        "\t\n",
        "HeLLo",
        "ÉCOLE ΣΟΦΙΑ",
        "🤖🤖🤖",
        "what's your favorite color?",
        "\u{0}",
    ];

    for input in inputs {
        assert!(!bot.get_response(input).is_empty(), "input: {input:?}");
    }

    let long = "blah ".repeat(10_000);
    assert_eq!(bot.get_response(&long), DEFAULT_FALLBACK);
}

#[test]
fn replies_are_deterministic() {
    let bot = builtin_matcher();
    for input in ["hello", "tell me a story", "no idea", ""] {
        let first = bot.get_response(input).to_string();
        for _ in 0..5 {
            assert_eq!(bot.get_response(input), first);
        }
    }
}

#[test]
fn catalog_order_beats_specificity() {
    let bot = precedence_matcher();
    assert_eq!(bot.get_response("tell me a joke"), "R1");
}

#[test]
fn builtin_joke_rule_shadows_tell_me_a_joke() {
    let bot = builtin_matcher();
    assert_eq!(
        bot.get_response("Tell me a joke"),
        "Why did the developer quit his job? Because he didn't get arrays! 😄"
    );
}

#[test]
fn matching_ignores_case() {
    let bot = builtin_matcher();
    assert_eq!(bot.get_response("HELLO there"), bot.get_response("hello there"));
    assert_eq!(
        bot.get_response("HELLO there"),
        "Hello! I'm here to help. What can I do for you today?"
    );
}

#[test]
fn unmatched_input_uses_fallback() {
    assert_eq!(builtin_matcher().get_response("asdkjasdkj"), DEFAULT_FALLBACK);
    assert_eq!(precedence_matcher().get_response("asdkjasdkj"), "Come again?");
}

#[test]
fn triggers_match_inside_words() {
    let bot = precedence_matcher();
    for input in ["time", "what time is it", "sometimes"] {
        assert_eq!(bot.get_response(input), "Check your clock.", "input: {input}");
    }
}

#[test]
fn builtin_earlier_rules_win_inside_longer_questions() {
    let bot = builtin_matcher();

    // "help" appears before "what is python" in the catalog.
    assert_eq!(
        bot.get_response("can you help: what is python"),
        "I can assist you with various tasks. Just let me know what you need!"
    );
    // "time" is contained in "sometimes".
    assert_eq!(
        bot.get_response("sometimes i wonder what is the meaning of life"),
        "I'm not equipped to tell the time, but your device can! Let me know if there's something else I can assist with."
    );
    assert_eq!(
        bot.get_response("What is the meaning of life?"),
        "The meaning of life is subjective and often depends on your beliefs and experiences."
    );
}

#[test]
fn normalized_builtin_triggers_fire() {
    let bot = builtin_matcher();
    assert_eq!(
        bot.get_response("What is Artificial Intelligence?"),
        "Artificial intelligence is the simulation of human intelligence in machines that are programmed to think and learn."
    );
    assert_eq!(
        bot.get_response("Who is Virat Kohli"),
        "Virat Kohli is a world-class Indian cricketer known for his consistency and aggressive batting style."
    );
}

#[test]
fn last_builtin_rules_return_plain_strings() {
    let bot = builtin_matcher();
    assert_eq!(
        bot.get_response("tell me a cricket fact"),
        "Did you know? The longest cricket match in history lasted 14 days."
    );
}

#[test]
fn multi_line_responses_survive_loading() {
    let bot = precedence_matcher();
    assert_eq!(bot.get_response("well hello"), "Hi there!\nHow can I help?");
}
