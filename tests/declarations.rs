use setcal::config::Settings;
use setcal::engine::Engine;
use setcal::error::SetcalError;

fn engine() -> Engine {
    Engine::new(Settings::default())
}

#[test]
fn universe_is_echoed_sorted() {
    let lines = engine().execute_collect("U b a c\nS a\nC card 2\n").expect("script ok");
    assert_eq!(lines[0], "U a b c");
}

#[test]
fn sets_are_sorted_and_counted_by_distinct_tokens() {
    let lines = engine()
        .execute_collect("U e d c b a\nS c a e\nC card 2\n")
        .expect("script ok");
    assert_eq!(lines, vec!["U a b c d e", "S a c e", "3"]);
}

#[test]
fn sorting_is_byte_lexicographic_and_case_sensitive() {
    let lines = engine()
        .execute_collect("U b B a A ab\nS ab a B\nC card 2\n")
        .expect("script ok");
    assert_eq!(lines[0], "U A B a ab b");
    assert_eq!(lines[1], "S B a ab");
}

#[test]
fn empty_declarations_print_only_their_tag() {
    let lines = engine().execute_collect("U\nS\nR\nC empty 2\n").expect("script ok");
    assert_eq!(lines, vec!["U", "S", "R", "true"]);
}

#[test]
fn relations_keep_declaration_order() {
    let lines = engine()
        .execute_collect("U a b c\nR (b a) (a c) (c c)\nC function 2\n")
        .expect("script ok");
    assert_eq!(lines, vec!["U a b c", "R (b a) (a c) (c c)", "true"]);
}

#[test]
fn last_line_may_end_without_newline() {
    let lines = engine().execute_collect("U a\nS a\nC card 2").expect("script ok");
    assert_eq!(lines, vec!["U a", "S a", "1"]);
}

#[test]
fn thirty_letters_is_the_longest_element() {
    let longest = "a".repeat(30);
    let script = format!("U {}\nS {}\nC card 2\n", longest, longest);
    let lines = engine().execute_collect(&script).expect("script ok");
    assert_eq!(lines[2], "1");

    let too_long = "a".repeat(31);
    let err = engine().execute_collect(&format!("U {}\n", too_long)).unwrap_err();
    assert!(matches!(err, SetcalError::Syntax { line: 1, .. }), "got {err}");
}

#[test]
fn illegal_characters_are_syntax_errors() {
    for script in ["U a1\n", "U a-b\n", "U a\tb\n", "U a\r\n"] {
        let err = engine().execute_collect(script).unwrap_err();
        assert!(matches!(err, SetcalError::Syntax { line: 1, .. }), "{script:?} gave {err}");
    }
}

#[test]
fn empty_elements_are_syntax_errors() {
    for script in ["U a  b\n", "U a \n", "U a\nS \n"] {
        let err = engine().execute_collect(script).unwrap_err();
        assert!(matches!(err, SetcalError::Syntax { .. }), "{script:?} gave {err}");
    }
}

#[test]
fn keywords_and_booleans_are_reserved() {
    for word in ["card", "bijective", "true", "false"] {
        let err = engine().execute_collect(&format!("U a {}\n", word)).unwrap_err();
        match err {
            SetcalError::ReservedWord { token, line } => {
                assert_eq!(token, word);
                assert_eq!(line, 1);
            }
            other => panic!("expected a reserved word error for {word}, got {other}"),
        }
    }
    // only exact matches are reserved
    let lines = engine().execute_collect("U Card cards\nS cards\nC card 2\n").expect("script ok");
    assert_eq!(lines[0], "U Card cards");
}

#[test]
fn reserved_words_are_reported_before_membership() {
    let err = engine().execute_collect("U a\nS card\n").unwrap_err();
    assert!(
        matches!(err, SetcalError::ReservedWord { ref token, line: 2 } if token == "card"),
        "got {err}"
    );
}

#[test]
fn elements_must_belong_to_the_universe() {
    let err = engine().execute_collect("U a b\nS a c\n").unwrap_err();
    match err {
        SetcalError::Membership { token, line } => {
            assert_eq!(token, "c");
            assert_eq!(line, 2);
        }
        other => panic!("expected a membership error, got {other}"),
    }
    let err = engine().execute_collect("U a b\nR (a z)\n").unwrap_err();
    assert!(matches!(err, SetcalError::Membership { ref token, line: 2 } if token == "z"));
}

#[test]
fn duplicates_are_rejected() {
    let err = engine().execute_collect("U a a\n").unwrap_err();
    assert!(matches!(err, SetcalError::Duplicate { line: 1, .. }), "got {err}");
    let err = engine().execute_collect("U a b\nS b a b\n").unwrap_err();
    assert!(matches!(err, SetcalError::Duplicate { line: 2, .. }), "got {err}");
    let err = engine().execute_collect("U a b\nR (a b) (b a) (a b)\n").unwrap_err();
    assert!(matches!(err, SetcalError::Duplicate { line: 2, .. }), "got {err}");
    // the same components in the other order are a different pair
    let lines = engine().execute_collect("U a b\nR (a b) (b a)\nC symmetric 2\n").expect("script ok");
    assert_eq!(lines[2], "true");
}

#[test]
fn malformed_relations_are_format_errors() {
    for script in [
        "U a b\nR a b\n",
        "U a b\nR (a b\n",
        "U a b\nR (a b)(b a)\n",
        "U a b\nR (a b) \n",
        "U a b\nR \n",
    ] {
        let err = engine().execute_collect(script).unwrap_err();
        assert!(matches!(err, SetcalError::Format { line: 2, .. }), "{script:?} gave {err}");
    }
}

#[test]
fn universe_must_come_first_and_only_once() {
    let err = engine().execute_collect("S a\n").unwrap_err();
    assert!(matches!(err, SetcalError::Format { line: 1, .. }), "got {err}");
    let err = engine().execute_collect("R (a a)\n").unwrap_err();
    assert!(matches!(err, SetcalError::Format { line: 1, .. }), "got {err}");
    let err = engine().execute_collect("U a\nS a\nU a\n").unwrap_err();
    assert!(matches!(err, SetcalError::Format { line: 3, .. }), "got {err}");
}

#[test]
fn declarations_must_precede_commands() {
    let err = engine().execute_collect("U a\nS a\nC card 2\nS a\n").unwrap_err();
    assert!(matches!(err, SetcalError::Format { line: 4, .. }), "got {err}");
}

#[test]
fn unknown_markers_and_empty_lines_are_rejected() {
    for script in ["U a\nX a\n", "U a\n\nS a\n", "U a\ns a\n", "Ua\n"] {
        let err = engine().execute_collect(script).unwrap_err();
        assert!(matches!(err, SetcalError::Format { .. }), "{script:?} gave {err}");
    }
}

#[test]
fn a_complete_file_needs_universe_declarations_and_commands() {
    for script in ["", "U a\n", "U a\nS a\n", "U a\nR (a a)\n", "U a\nC card 1\n"] {
        let err = engine().execute_collect(script).unwrap_err();
        assert!(matches!(err, SetcalError::Format { .. }), "{script:?} gave {err}");
    }
}

#[test]
fn row_ceiling_comes_from_settings() {
    let settings = Settings {
        max_rows: 3,
        ..Settings::default()
    };
    let engine = Engine::new(settings);
    let lines = engine.execute_collect("U a\nS a\nS\nC card 3\n").expect("script ok");
    assert_eq!(lines[3], "0");
    let err = engine.execute_collect("U a\nS a\nS\nR\nC card 3\n").unwrap_err();
    assert!(matches!(err, SetcalError::Format { line: 4, .. }), "got {err}");
}

#[test]
fn default_ceiling_is_one_thousand_rows() {
    let mut script = String::from("U a\n");
    for _ in 1..1000 {
        script.push_str("S a\n");
    }
    script.push_str("C card 1000\n");
    let lines = engine().execute_collect(&script).expect("1000 rows are fine");
    assert_eq!(lines.last().map(String::as_str), Some("1"));

    let mut script = String::from("U a\n");
    for _ in 0..1000 {
        script.push_str("S a\n");
    }
    let err = engine().execute_collect(&script).unwrap_err();
    assert!(matches!(err, SetcalError::Format { line: 1001, .. }), "got {err}");
}
