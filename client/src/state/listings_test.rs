use super::*;
use crate::net::types::Review;

// =============================================================
// Helpers
// =============================================================

fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.to_owned(), description: String::new() }
}

fn review(id: i64, rating: f64) -> Review {
    Review { id, rating, comment: String::new(), created_at: String::new() }
}

fn item(id: i64, title: &str, price: &str, category_id: Option<i64>, ratings: &[f64]) -> Item {
    Item {
        id,
        title: title.to_owned(),
        description: format!("{title} for rent"),
        location: "Berlin".to_owned(),
        available: true,
        owner: Some(1),
        category: category_id.map(|id| category(id, if id == 1 { "A" } else { "B" })),
        price: price.to_owned(),
        photo: None,
        reviews: ratings
            .iter()
            .enumerate()
            .map(|(i, r)| review(i64::try_from(i).unwrap(), *r))
            .collect(),
        latitude: None,
        longitude: None,
    }
}

fn loaded(items: Vec<Item>) -> ListingsState {
    let mut state = ListingsState::default();
    state.finish_loading(vec![category(1, "A"), category(2, "B")], items);
    state
}

fn ids(items: &[Item]) -> Vec<i64> {
    items.iter().map(|i| i.id).collect()
}

// =============================================================
// SortBy
// =============================================================

#[test]
fn sort_by_round_trips_form_values() {
    for sort in SortBy::ALL {
        assert_eq!(SortBy::from_value(sort.value()), sort);
    }
    assert_eq!(SortBy::from_value("bogus"), SortBy::Newest);
}

#[test]
fn price_asc_puts_cheapest_first() {
    let mut state = loaded(vec![
        item(1, "Drill", "12.50", Some(1), &[]),
        item(2, "Tent", "4.00", Some(2), &[]),
        item(3, "Kayak", "30", Some(1), &[]),
    ]);
    state.set_sort(SortBy::PriceAsc);
    let page = state.page_items();
    assert_eq!(page[0].id, 2);
    assert_eq!(ids(&page), [2, 1, 3]);
}

#[test]
fn price_desc_puts_most_expensive_first() {
    let mut items = vec![
        item(1, "Drill", "12.50", None, &[]),
        item(2, "Tent", "4.00", None, &[]),
        item(3, "Kayak", "30", None, &[]),
    ];
    sort_items(&mut items, SortBy::PriceDesc);
    assert_eq!(ids(&items), [3, 1, 2]);
}

#[test]
fn price_sort_compares_numerically_not_lexically() {
    let mut items = vec![item(1, "A", "100", None, &[]), item(2, "B", "9", None, &[])];
    sort_items(&mut items, SortBy::PriceAsc);
    assert_eq!(ids(&items), [2, 1]);
}

#[test]
fn unparsable_price_sorts_as_zero() {
    let mut items = vec![item(1, "A", "5", None, &[]), item(2, "B", "call me", None, &[])];
    sort_items(&mut items, SortBy::PriceAsc);
    assert_eq!(ids(&items), [2, 1]);
}

#[test]
fn rating_sort_uses_mean_and_unrated_last() {
    let mut items = vec![
        item(1, "Unrated", "5", None, &[]),
        item(2, "Mixed", "5", None, &[5.0, 3.0]),
        item(3, "Perfect", "5", None, &[5.0]),
    ];
    sort_items(&mut items, SortBy::Rating);
    assert_eq!(ids(&items), [3, 2, 1]);
}

#[test]
fn newest_keeps_server_order() {
    let mut items = vec![item(3, "C", "1", None, &[]), item(1, "A", "9", None, &[])];
    sort_items(&mut items, SortBy::Newest);
    assert_eq!(ids(&items), [3, 1]);
}

#[test]
fn sort_is_stable_for_ties() {
    let mut items = vec![
        item(1, "A", "5", None, &[]),
        item(2, "B", "5", None, &[]),
        item(3, "C", "1", None, &[]),
    ];
    sort_items(&mut items, SortBy::PriceAsc);
    assert_eq!(ids(&items), [3, 1, 2]);
}

// =============================================================
// Category filter
// =============================================================

#[test]
fn category_filter_keeps_only_members() {
    let mut state = loaded(vec![
        item(1, "Drill", "12", Some(1), &[]),
        item(2, "Tent", "4", Some(2), &[]),
        item(3, "Loose", "4", None, &[]),
    ]);
    state.select_category(Some(2));
    assert_eq!(ids(&state.visible()), [2]);
    state.select_category(None);
    assert_eq!(state.visible().len(), 3);
}

#[test]
fn selecting_category_resets_page() {
    let mut state = loaded((1..=20).map(|i| item(i, "X", "1", Some(1), &[])).collect());
    state.set_page(3);
    state.select_category(Some(1));
    assert_eq!(state.page, 1);
}

// =============================================================
// Panel filters
// =============================================================

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let filters = ListingFilters { search: "DRILL".to_owned(), ..Default::default() };
    assert!(filters.matches(&item(1, "Cordless drill", "1", None, &[])));
    let mut other = item(2, "Saw", "1", None, &[]);
    assert!(!filters.matches(&other));
    other.description = "Comes with a drill bit set".to_owned();
    assert!(filters.matches(&other));
}

#[test]
fn price_bounds_are_inclusive_and_blank_is_unbounded() {
    let filters = ListingFilters {
        min_price: "5".to_owned(),
        max_price: "10".to_owned(),
        ..Default::default()
    };
    assert!(filters.matches(&item(1, "A", "5", None, &[])));
    assert!(filters.matches(&item(2, "B", "10.00", None, &[])));
    assert!(!filters.matches(&item(3, "C", "10.01", None, &[])));
    assert!(!filters.matches(&item(4, "D", "4.99", None, &[])));
    assert!(ListingFilters::default().matches(&item(5, "E", "999", None, &[])));
}

#[test]
fn location_filter_is_substring_match() {
    let filters = ListingFilters { location: "berl".to_owned(), ..Default::default() };
    assert!(filters.matches(&item(1, "A", "1", None, &[])));
    let mut elsewhere = item(2, "B", "1", None, &[]);
    elsewhere.location = "Munich".to_owned();
    assert!(!filters.matches(&elsewhere));
}

#[test]
fn draft_filters_apply_only_on_commit() {
    let mut state = loaded(vec![item(1, "Drill", "12", None, &[]), item(2, "Tent", "4", None, &[])]);
    state.draft.search = "tent".to_owned();
    assert_eq!(state.visible().len(), 2);
    state.set_page(2);
    state.apply_filters();
    assert_eq!(ids(&state.visible()), [2]);
    assert_eq!(state.page, 1);
}

#[test]
fn reset_clears_category_and_filters() {
    let mut state = loaded(vec![item(1, "Drill", "12", Some(1), &[]), item(2, "Tent", "4", Some(2), &[])]);
    state.select_category(Some(1));
    state.draft.max_price = "1".to_owned();
    state.apply_filters();
    assert!(state.visible().is_empty());
    state.reset_filters();
    assert_eq!(state.selected_category, None);
    assert_eq!(state.draft, ListingFilters::default());
    assert_eq!(state.visible().len(), 2);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, PAGE_SIZE), 0);
    assert_eq!(page_count(8, PAGE_SIZE), 1);
    assert_eq!(page_count(9, PAGE_SIZE), 2);
    assert_eq!(page_count(17, PAGE_SIZE), 3);
}

#[test]
fn paginate_slices_fixed_pages() {
    let data: Vec<u32> = (1..=10).collect();
    assert_eq!(paginate(&data, 1, PAGE_SIZE), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(paginate(&data, 2, PAGE_SIZE), &[9, 10]);
}

#[test]
fn paginate_out_of_range_is_empty() {
    let data: Vec<u32> = (1..=10).collect();
    assert!(paginate(&data, 0, PAGE_SIZE).is_empty());
    assert!(paginate(&data, 3, PAGE_SIZE).is_empty());
}

#[test]
fn pager_shown_only_when_more_than_one_page() {
    let eight = loaded((1..=8).map(|i| item(i, "X", "1", None, &[])).collect());
    assert!(!eight.shows_pager());
    let nine = loaded((1..=9).map(|i| item(i, "X", "1", None, &[])).collect());
    assert!(nine.shows_pager());
    assert_eq!(nine.page_count(), 2);
}

#[test]
fn set_page_clamps_to_one() {
    let mut state = ListingsState::default();
    state.set_page(0);
    assert_eq!(state.page, 1);
}

// =============================================================
// Local mutation and labels
// =============================================================

#[test]
fn remove_item_drops_only_matching_id() {
    let mut state = loaded(vec![item(1, "A", "1", None, &[]), item(2, "B", "1", None, &[])]);
    assert_eq!(state.remove_item(1).map(|i| i.id), Some(1));
    assert_eq!(ids(&state.items), [2]);
    assert!(state.remove_item(99).is_none());
}

#[test]
fn remove_last_item_on_last_page_steps_back_a_page() {
    let items = (1..=9).map(|id| item(id, &format!("Item {id}"), "1", None, &[])).collect();
    let mut state = loaded(items);
    state.set_page(2);
    assert_eq!(ids(&state.page_items()), [9]);

    state.remove_item(9);
    assert_eq!(state.page, 1);
    assert_eq!(state.page_items().len(), PAGE_SIZE);
    assert_eq!(state.page_count(), 1);
}

#[test]
fn remove_item_keeps_page_when_it_still_has_entries() {
    let items = (1..=10).map(|id| item(id, &format!("Item {id}"), "1", None, &[])).collect();
    let mut state = loaded(items);
    state.set_page(2);
    state.remove_item(10);
    assert_eq!(state.page, 2);
    assert_eq!(state.page_items().len(), 1);
}

#[test]
fn finish_loading_clears_loading_flag() {
    let state = loaded(Vec::new());
    assert!(!state.loading);
    assert_eq!(state.categories.len(), 2);
}

#[test]
fn results_label_pluralizes() {
    assert_eq!(results_label(0), "0 Results Found");
    assert_eq!(results_label(1), "1 Result Found");
    assert_eq!(results_label(12), "12 Results Found");
}

#[test]
fn half_star_rating_rounds_to_nearest_half() {
    assert_eq!(half_star_rating(4.24), 4.0);
    assert_eq!(half_star_rating(4.26), 4.5);
    assert_eq!(half_star_rating(0.0), 0.0);
}
