mod setup;

use mathbox::Settings;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use setup::*;

fn leaf() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "x", "1", "\\alpha", "+", "=", "(", ")", "\\sum", "\\sin", "a'", "\\,", "\\infty",
    ])
    .prop_map(ToOwned::to_owned)
}

/// Well-formed expressions built from registered commands only.
fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 48, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(|parts| parts.join(" ")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("\\frac{{{a}}}{{{b}}}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{{{a} \\over {b}}}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{{{a}}}^{{{b}}}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{{{a}}}_{{{b}}}")),
            inner.clone().prop_map(|a| format!("\\sqrt{{{a}}}")),
            inner.clone().prop_map(|a| format!("\\left({a}\\right)")),
            inner.clone().prop_map(|a| format!("{{\\color{{blue}}{a}}}")),
            inner.clone().prop_map(|a| format!("\\mathbf{{{a}}}")),
            inner.clone().prop_map(|a| format!("\\hat{{{a}}}")),
            inner.prop_map(|a| format!("\\displaystyle {a}")),
            Just("\\text{if a}".to_owned()),
        ]
    })
}

fn round_trip(source: &str) -> String {
    get_parsed(source, &nonstrict_settings()).unwrap().to_latex()
}

proptest! {
    #[test]
    fn well_formed_input_has_no_errors(source in expression()) {
        let parsed = get_parsed(&source, &nonstrict_settings()).unwrap();
        prop_assert!(error_codes(&parsed).is_empty(), "{source}: {:?}", error_codes(&parsed));
    }

    #[test]
    fn serialization_is_idempotent(source in expression()) {
        let once = round_trip(&source);
        let twice = round_trip(&once);
        assert_eq!(once, twice, "from {}", source);
    }

    #[test]
    fn layout_is_deterministic(source in expression()) {
        let first = get_built(&source, &nonstrict_settings()).unwrap();
        let second = get_built(&source, &nonstrict_settings()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_input_never_fails(source in "[a-z0-9{}^_'()\\[\\]+=\\\\ ]{0,40}") {
        let parsed = get_parsed(&source, &nonstrict_settings());
        prop_assert!(parsed.is_ok(), "{source}");
        prop_assert!(get_built(&source, &nonstrict_settings()).is_ok(), "{source}");
    }

    #[test]
    fn unbalanced_braces_are_reported(source in expression()) {
        let unbalanced = format!("{{{source}");
        expect!(&unbalanced).to_have_error(
            &mathbox::types::ErrorCode::UnbalancedBraces,
            &nonstrict_settings(),
        ).unwrap();
    }
}
