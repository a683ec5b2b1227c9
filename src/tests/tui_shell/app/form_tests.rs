use super::*;
use crate::model::App;

fn typed(form: &mut FormState, text: &str) {
    for c in text.chars() {
        form.input_char(c);
    }
}

#[test]
fn tags_field_turns_separators_into_chips() {
    let mut form = FormState::from_draft(AppDraft::new());
    form.focus_next();
    assert_eq!(form.focus, FormField::Tags);

    typed(&mut form, "etl，ops,dup");
    assert_eq!(form.draft.tags.tags(), ["etl", "ops"]);
    assert_eq!(form.draft.tags.pending(), "dup");

    form.focus_next();
    assert_eq!(form.focus, FormField::Description);
    assert_eq!(form.draft.tags.csv(), "etl,ops,dup");
}

#[test]
fn backspace_in_empty_tag_input_drops_last_chip() {
    let mut form = FormState::from_draft(AppDraft::new());
    form.focus = FormField::Tags;
    typed(&mut form, "a,b,");
    form.backspace();
    assert_eq!(form.draft.tags.tags(), ["a"]);
}

#[test]
fn enter_breaks_lines_only_in_code() {
    let mut form = FormState::from_draft(AppDraft::new());
    form.focus = FormField::Code;
    typed(&mut form, "x = 1");
    form.enter();
    typed(&mut form, "print(x)");
    assert_eq!(form.code, "x = 1\nprint(x)");
    assert_eq!(form.focus, FormField::Code);

    form.focus = FormField::Name;
    form.enter();
    assert_eq!(form.focus, FormField::Tags);
}

#[test]
fn sync_copies_inputs_into_the_draft() {
    let app = App {
        id: Some(3),
        name: "Report".to_string(),
        tags: "a,b".to_string(),
        ..Default::default()
    };
    let mut form = FormState::from_draft(AppDraft::from_app(&app));
    assert_eq!(form.title(), "Edit app 3");
    form.focus = FormField::Note;
    typed(&mut form, "fix typo");
    form.sync_to_draft();

    let payload = form.draft.submit().expect("submit");
    assert_eq!(payload.id, Some(3));
    assert_eq!(payload.name, "Report");
    assert_eq!(payload.tags, "a,b");
    assert_eq!(payload.note, "fix typo");
}

#[test]
fn history_replaces_fields_and_keeps_id() {
    let app = App {
        id: Some(8),
        name: "Current".to_string(),
        ..Default::default()
    };
    let mut form = FormState::from_draft(AppDraft::from_app(&app));
    typed(&mut form, " edited");

    let record = HistoryRecord {
        id: 41,
        app_id: Some(8),
        app_name: "Older".to_string(),
        tags: "x".to_string(),
        code: "print(1)".to_string(),
        created_at: "2024-03-01 10:00:00".to_string(),
        ..Default::default()
    };
    form.apply_history(&record);

    assert_eq!(form.draft.id, Some(8));
    assert_eq!(form.name.buf, "Older");
    assert_eq!(form.code, "print(1)");
    assert_eq!(form.draft.tags.tags(), ["x"]);
    assert_eq!(
        form.note.buf,
        "Restored from history (id: 41, time: 2024-03-01 10:00:00)"
    );
    assert_eq!(form.focus, FormField::Note);
}

#[test]
fn chip_cursor_walks_chips_and_removes_the_one_under_it() {
    let app = App {
        tags: "a,b,c".to_string(),
        ..Default::default()
    };
    let mut form = FormState::from_draft(AppDraft::from_app(&app));
    form.focus = FormField::Tags;

    form.move_left();
    assert_eq!(form.selected_chip(), Some("c"));
    form.move_left();
    form.move_left();
    form.move_left();
    assert_eq!(form.selected_chip(), Some("a"));

    form.move_right();
    form.delete();
    assert_eq!(form.draft.tags.tags(), ["a", "c"]);
    assert_eq!(form.draft.tags.csv(), "a,c");
    assert_eq!(form.selected_chip(), Some("c"));

    form.move_right();
    assert_eq!(form.chip, None);
    form.delete();
    assert_eq!(form.draft.tags.tags(), ["a", "c"]);
}

#[test]
fn typing_in_tags_leaves_the_chip_cursor() {
    let mut form = FormState::from_draft(AppDraft::new());
    form.focus = FormField::Tags;
    typed(&mut form, "x,y,");
    form.move_left();
    assert_eq!(form.selected_chip(), Some("y"));

    typed(&mut form, "z");
    assert_eq!(form.chip, None);
    form.backspace();
    assert_eq!(form.draft.tags.pending(), "");
    assert_eq!(form.draft.tags.tags(), ["x", "y"]);

    form.move_left();
    form.move_left();
    form.backspace();
    assert_eq!(form.draft.tags.tags(), ["y"]);
    assert_eq!(form.selected_chip(), Some("y"));
}
