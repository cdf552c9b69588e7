use super::*;

fn tent() -> Item {
    serde_json::from_value(serde_json::json!({
        "id": 4,
        "title": "Tent",
        "description": "Two person",
        "location": "Berlin",
        "price": "12.50",
        "category": { "id": 2, "name": "Camping" }
    }))
    .expect("item should decode")
}

#[test]
fn loaded_item_prefills_form_and_allows_submit() {
    let (state, form) = edit_load(Ok(tent()));
    assert_eq!(state, EditLoad::Ready);
    assert!(state.can_submit());
    let form = form.expect("form");
    assert_eq!(form.title, "Tent");
    assert_eq!(form.price, "12.50");
    assert_eq!(form.category_id, Some(2));
}

#[test]
fn failed_load_blocks_submit_and_leaves_form_untouched() {
    let (state, form) = edit_load(Err(ApiError::Status(404)));
    assert!(matches!(state, EditLoad::Failed(ref msg) if msg.contains("404")));
    assert!(!state.can_submit());
    assert!(form.is_none());
}

#[test]
fn still_loading_cannot_submit() {
    assert!(!EditLoad::Loading.can_submit());
}
