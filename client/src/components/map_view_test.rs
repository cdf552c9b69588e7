use super::*;

fn item(id: i64, lat: Option<f64>, lng: Option<f64>) -> Item {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Item {id}"),
        "price": "10",
        "latitude": lat,
        "longitude": lng
    }))
    .expect("item should decode")
}

#[test]
fn viewport_requires_a_plotted_item() {
    let items = vec![item(1, None, None), item(2, Some(0.0), Some(13.4))];
    assert!(map_viewport(&items).is_none());
}

#[test]
fn single_item_is_centered_at_default_zoom() {
    let items = vec![item(1, None, Some(2.0)), item(2, Some(52.52), Some(13.405))];
    let viewport = map_viewport(&items).expect("viewport");
    let (x, y) = viewport.to_screen(52.52, 13.405);
    assert!((x - MAP_WIDTH / 2.0).abs() < 1e-6);
    assert!((y - MAP_HEIGHT / 2.0).abs() < 1e-6);
    assert_eq!(viewport.zoom, DEFAULT_ZOOM);
}

#[test]
fn markers_skip_items_without_coordinates() {
    let items = vec![item(1, Some(52.52), Some(13.405)), item(2, None, None), item(3, Some(52.521), Some(13.41))];
    let viewport = map_viewport(&items).expect("viewport");
    let ids: Vec<i64> = map_markers(&items, &viewport).iter().map(|m| m.item_id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn every_plotted_item_gets_a_visible_marker() {
    let items = vec![
        item(1, Some(52.52), Some(13.405)),
        item(2, Some(52.39), Some(13.06)),
        item(3, Some(48.137), Some(11.575)),
    ];
    let viewport = map_viewport(&items).expect("viewport");
    let markers = map_markers(&items, &viewport);
    let ids: Vec<i64> = markers.iter().map(|m| m.item_id).collect();
    assert_eq!(ids, [1, 2, 3]);
    for marker in &markers {
        assert!((0.0..=MAP_WIDTH).contains(&marker.left), "left={}", marker.left);
        assert!((0.0..=MAP_HEIGHT).contains(&marker.top), "top={}", marker.top);
    }
    assert_eq!(markers[0].title, "Item 1");
    assert_eq!(markers[0].price, "10");
}

#[test]
fn nearby_items_keep_a_street_level_zoom() {
    let items = vec![item(1, Some(52.52), Some(13.405)), item(2, Some(52.39), Some(13.06))];
    let viewport = map_viewport(&items).expect("viewport");
    assert!(viewport.zoom >= 8, "zoom={}", viewport.zoom);
    assert_eq!(map_markers(&items, &viewport).len(), 2);
}
