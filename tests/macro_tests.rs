use tidy_config::{tidy_config, Config, Error, OptionId, TagKind, TriState};

#[test]
fn test_macro_empty_is_default_session() {
    let config = tidy_config!();
    assert!(!config.diff_against_default());
    assert!(config.option_errors().is_empty());
}

#[test]
fn test_macro_mixed_value_types() {
    let spaces = 3;
    let config = tidy_config! {
        "indent" => "auto",
        "indent-spaces" => spaces,
        "quiet" => true,
        "alt-text" => String::from("spacer image"),
    };
    assert_eq!(config.get_auto_bool(OptionId::IndentContent), TriState::Auto);
    assert_eq!(config.get_int(OptionId::IndentSpaces), 3);
    assert!(config.get_bool(OptionId::Quiet));
    assert_eq!(config.get_str(OptionId::AltText), Some("spacer image"));
}

#[test]
fn test_macro_runs_adjuster() {
    let config = tidy_config! {
        "indent" => "no",
        "indent-spaces" => 4,
        "wrap" => 0,
        "input-xml" => "yes",
    };
    assert_eq!(config.get_int(OptionId::IndentSpaces), 0);
    assert_eq!(config.get_int(OptionId::WrapLen), u64::MAX);
    assert!(config.get_bool(OptionId::XmlOut));
    assert!(config.get_bool(OptionId::XmlPis));
}

#[test]
fn test_macro_declares_tags() {
    let config = tidy_config! {
        "new-inline-tags" => "foo, bar",
        "new-empty-tags" => "spacer",
    };
    assert_eq!(config.tags().declared(TagKind::Inline), vec!["foo", "bar"]);
    assert_eq!(config.tags().declared(TagKind::Empty), vec!["spacer"]);
}

#[test]
fn test_macro_matches_set_option() {
    let from_macro = tidy_config! {
        "doctype" => "strict",
        "char-encoding" => "latin1",
        "sort-attributes" => "alpha",
    };

    let mut by_hand = Config::new();
    by_hand.set_option("doctype", "strict");
    by_hand.set_option("char-encoding", "latin1");
    by_hand.set_option("sort-attributes", "alpha");
    by_hand.adjust();

    assert_eq!(
        from_macro.to_config_string().unwrap(),
        by_hand.to_config_string().unwrap()
    );
}

#[test]
fn test_macro_keeps_errors() {
    let config = tidy_config! {
        "tab-size" => "eight",
        "bogus" => 1,
        "wrap" => 40,
    };
    assert_eq!(
        config.option_errors(),
        &[Error::bad_argument("tab-size"), Error::unknown_option("bogus")]
    );
    assert_eq!(config.get_int(OptionId::WrapLen), 40);
}
