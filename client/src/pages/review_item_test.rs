use super::*;

#[test]
fn review_request_keeps_picked_rating() {
    let req = review_request("4".to_owned(), Some(5), "Great tent".to_owned());
    assert_eq!(req.rating, Some(5));
    assert_eq!(req.item, "4");
}

#[test]
fn review_request_sends_null_without_rating() {
    let req = review_request("4".to_owned(), None, String::new());
    assert_eq!(serde_json::to_value(&req).unwrap()["rating"], serde_json::Value::Null);
}

#[test]
fn review_request_drops_out_of_range_rating() {
    assert_eq!(review_request("4".to_owned(), Some(0), String::new()).rating, None);
    assert_eq!(review_request("4".to_owned(), Some(6), String::new()).rating, None);
}
