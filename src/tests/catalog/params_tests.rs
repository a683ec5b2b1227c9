use super::*;

#[test]
fn empty_params_show_empty_object() {
    assert_eq!(format_params(""), ParamsView::Empty);
    assert_eq!(format_params("  \n").text(), "{}");
}

#[test]
fn valid_params_are_pretty_printed_in_source_order() {
    let view = format_params(r#"{"zeta":1,"alpha":[true]}"#);
    assert_eq!(
        view.text(),
        "{\n  \"zeta\": 1,\n  \"alpha\": [\n    true\n  ]\n}"
    );
}

#[test]
fn invalid_params_render_inline() {
    let view = format_params("{limit: 3");
    assert!(view.is_invalid());
    assert_eq!(view.text(), "invalid params: {limit: 3");
}
