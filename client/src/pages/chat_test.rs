use super::*;

#[test]
fn prepare_send_builds_socket_and_persist_payloads() {
    let (frame, request) = prepare_send("12", "Is it free Friday?", " 4 ").expect("payloads");
    assert_eq!(frame, OutgoingSocketMessage { content: "Is it free Friday?".to_owned(), receiver_id: 4 });
    assert_eq!(
        request,
        NewMessageRequest { item: "12".to_owned(), receiver: 4, content: "Is it free Friday?".to_owned() }
    );
}

#[test]
fn prepare_send_requires_receiver() {
    assert_eq!(prepare_send("12", "hi", ""), Err(MISSING_RECEIVER));
    assert_eq!(prepare_send("12", "hi", "0"), Err(MISSING_RECEIVER));
    assert_eq!(prepare_send("12", "hi", "bob"), Err(MISSING_RECEIVER));
}

#[test]
fn prepare_send_allows_empty_content() {
    let (frame, _) = prepare_send("12", "", "3").expect("payloads");
    assert_eq!(frame.content, "");
}
