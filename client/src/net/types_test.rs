use super::*;

// =============================================================
// Helpers
// =============================================================

fn item_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Cordless drill",
        "description": "18V with two batteries",
        "location": "Berlin",
        "available": false,
        "owner": 3,
        "category": { "id": 2, "name": "Tools", "description": "Hand and power tools" },
        "price": "12.50",
        "photo": "http://localhost:8000/media/drill.jpg",
        "reviews": [
            { "id": 1, "rating": 4, "comment": "solid", "created_at": "2024-05-01T10:00:00Z" },
            { "id": 2, "rating": 5, "comment": "great", "created_at": "2024-05-02T10:00:00Z" }
        ],
        "latitude": 52.52,
        "longitude": 13.405
    })
}

fn parse_item(value: serde_json::Value) -> Item {
    serde_json::from_value(value).expect("item should decode")
}

// =============================================================
// Item decoding
// =============================================================

#[test]
fn item_decodes_full_payload() {
    let item = parse_item(item_json());
    assert_eq!(item.id, 7);
    assert_eq!(item.owner, Some(3));
    assert!(!item.available);
    assert_eq!(item.category.as_ref().map(|c| c.name.as_str()), Some("Tools"));
    assert_eq!(item.price, "12.50");
    assert_eq!(item.reviews.len(), 2);
}

#[test]
fn item_decodes_minimal_payload_with_defaults() {
    let item = parse_item(serde_json::json!({ "id": 1, "title": "Tent", "price": "5.00" }));
    assert!(item.available);
    assert!(item.category.is_none());
    assert!(item.photo.is_none());
    assert!(item.reviews.is_empty());
    assert!(item.latitude.is_none());
    assert_eq!(item.description, "");
}

#[test]
fn item_price_accepts_numeric_json() {
    let item = parse_item(serde_json::json!({ "id": 1, "title": "Tent", "price": 9.5 }));
    assert_eq!(item.price, "9.5");
    assert!((item.price_value() - 9.5).abs() < f64::EPSILON);
}

#[test]
fn item_price_value_falls_back_to_zero() {
    let item = parse_item(serde_json::json!({ "id": 1, "title": "Tent", "price": "n/a" }));
    assert_eq!(item.price_value(), 0.0);
}

#[test]
fn item_average_rating_is_mean_of_reviews() {
    let item = parse_item(item_json());
    assert!((item.average_rating() - 4.5).abs() < f64::EPSILON);
}

#[test]
fn item_average_rating_zero_without_reviews() {
    let item = parse_item(serde_json::json!({ "id": 1, "title": "Tent", "price": "5" }));
    assert_eq!(item.average_rating(), 0.0);
}

#[test]
fn item_coordinates_require_both_non_zero() {
    let item = parse_item(item_json());
    assert_eq!(item.coordinates(), Some((52.52, 13.405)));

    let mut missing = item.clone();
    missing.longitude = None;
    assert_eq!(missing.coordinates(), None);

    let mut zero = item;
    zero.latitude = Some(0.0);
    assert_eq!(zero.coordinates(), None);
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn booking_request_omits_unset_times() {
    let req = BookingRequest { item_id: "7".to_owned(), start_time: None, end_time: None };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "item_id": "7" }));
}

#[test]
fn booking_request_includes_set_times() {
    let req = BookingRequest {
        item_id: "7".to_owned(),
        start_time: Some("2024-06-01T08:00:00.000Z".to_owned()),
        end_time: Some("2024-06-02T08:00:00.000Z".to_owned()),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["start_time"], "2024-06-01T08:00:00.000Z");
    assert_eq!(value["end_time"], "2024-06-02T08:00:00.000Z");
}

#[test]
fn review_request_serializes_null_rating_when_unset() {
    let req = ReviewRequest { item: "7".to_owned(), rating: None, comment: "ok".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "item": "7", "rating": null, "comment": "ok" })
    );
}

#[test]
fn checkout_session_url_is_optional() {
    let session: CheckoutSession = serde_json::from_str(r#"{"id":"cs_test_1"}"#).unwrap();
    assert_eq!(session.id, "cs_test_1");
    assert!(session.url.is_none());
}

// =============================================================
// Chat messages
// =============================================================

#[test]
fn chat_message_normalizes_numeric_user_references() {
    let msg: ChatMessage = serde_json::from_value(serde_json::json!({
        "id": 11,
        "sender": 3,
        "receiver": "alice",
        "content": "Is it free on Friday?",
        "timestamp": "2024-05-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(msg.id, Some(11));
    assert_eq!(msg.sender, "3");
    assert_eq!(msg.receiver, "alice");
}

#[test]
fn incoming_socket_message_unwraps_message_field() {
    let frame: IncomingSocketMessage =
        serde_json::from_str(r#"{"message":{"sender":1,"receiver":2,"content":"hi"}}"#).unwrap();
    assert_eq!(frame.message.content, "hi");
    assert_eq!(frame.message.id, None);
    assert_eq!(frame.message.timestamp, None);
}

#[test]
fn outgoing_socket_message_shape() {
    let out = OutgoingSocketMessage { content: "hello".to_owned(), receiver_id: 4 };
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({ "content": "hello", "receiver_id": 4 })
    );
}

// =============================================================
// Item form
// =============================================================

#[test]
fn item_form_text_fields_send_empty_category_when_unset() {
    let form = ItemForm {
        title: "Kayak".to_owned(),
        description: "Two seats".to_owned(),
        location: "Hamburg".to_owned(),
        price: "30".to_owned(),
        category_id: None,
    };
    let fields = form.text_fields();
    assert_eq!(fields[0], ("title", "Kayak".to_owned()));
    assert_eq!(fields[4], ("category_id", String::new()));
}

#[test]
fn item_form_from_item_copies_editable_fields() {
    let item = parse_item(item_json());
    let form = ItemForm::from_item(&item);
    assert_eq!(form.title, "Cordless drill");
    assert_eq!(form.price, "12.50");
    assert_eq!(form.category_id, Some(2));
    assert_eq!(form.text_fields()[4], ("category_id", "2".to_owned()));
}
