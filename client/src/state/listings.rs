//! Listings view model: sort, filter, and paginate fetched items.
//!
//! DESIGN
//! ======
//! The listings page fetches every item once and does all narrowing on the
//! client. The pipeline is `sort -> category filter -> panel filters ->
//! page slice`, kept here as plain functions over `Vec<Item>` so the page
//! component only wires signals to it.
//!
//! Panel filters (search, price bounds, location) are edited as a draft and
//! only take effect on "Apply Filters"; category and sort apply immediately.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::types::{Category, Item};

/// Cards per page.
pub const PAGE_SIZE: usize = 8;

/// Sort order selected in the filter panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Server order.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    /// Mean review rating, best first.
    Rating,
}

impl SortBy {
    pub const ALL: [Self; 4] = [Self::Newest, Self::PriceAsc, Self::PriceDesc, Self::Rating];

    /// Form value used by the `<select>`.
    pub fn value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::Rating => "Best Rated",
        }
    }

    /// Parse a form value; unknown values fall back to server order.
    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == value).unwrap_or_default()
    }
}

/// Grid cards or map markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Map,
}

/// Free-text filters from the "More Filters" panel, kept as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub search: String,
    pub min_price: String,
    pub max_price: String,
    pub location: String,
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl ListingFilters {
    /// Whether `item` passes every non-blank filter.
    pub fn matches(&self, item: &Item) -> bool {
        let search = self.search.trim();
        if !search.is_empty() && !contains_ci(&item.title, search) && !contains_ci(&item.description, search) {
            return false;
        }
        let location = self.location.trim();
        if !location.is_empty() && !contains_ci(&item.location, location) {
            return false;
        }
        let price = item.price_value();
        if parse_bound(&self.min_price).is_some_and(|min| price < min) {
            return false;
        }
        if parse_bound(&self.max_price).is_some_and(|max| price > max) {
            return false;
        }
        true
    }
}

/// Sort `items` in place. Stable, so ties keep server order.
pub fn sort_items(items: &mut [Item], sort: SortBy) {
    match sort {
        SortBy::Newest => {}
        SortBy::PriceAsc => items.sort_by(|a, b| a.price_value().total_cmp(&b.price_value())),
        SortBy::PriceDesc => items.sort_by(|a, b| b.price_value().total_cmp(&a.price_value())),
        SortBy::Rating => items.sort_by(|a, b| b.average_rating().total_cmp(&a.average_rating())),
    }
}

/// Whether `item` belongs to `category` (`None` accepts everything).
pub fn in_category(item: &Item, category: Option<i64>) -> bool {
    category.is_none_or(|id| item.category.as_ref().is_some_and(|c| c.id == id))
}

/// Number of pages needed for `len` entries.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

/// The 1-based `page` of `items`; out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Header text above the results.
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 Result Found".to_owned()
    } else {
        format!("{count} Results Found")
    }
}

/// Rating rounded to the nearest half star.
pub fn half_star_rating(rating: f64) -> f64 {
    (rating * 2.0).round() / 2.0
}

/// Listings page state.
#[derive(Clone, Debug)]
pub struct ListingsState {
    pub items: Vec<Item>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub selected_category: Option<i64>,
    pub sort_by: SortBy,
    pub draft: ListingFilters,
    pub applied: ListingFilters,
    pub show_filters: bool,
    /// 1-based page number.
    pub page: usize,
    pub view_mode: ViewMode,
}

impl Default for ListingsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            loading: true,
            selected_category: None,
            sort_by: SortBy::Newest,
            draft: ListingFilters::default(),
            applied: ListingFilters::default(),
            show_filters: false,
            page: 1,
            view_mode: ViewMode::Grid,
        }
    }
}

impl ListingsState {
    /// Store fetch results and leave the loading state.
    pub fn finish_loading(&mut self, categories: Vec<Category>, items: Vec<Item>) {
        self.categories = categories;
        self.items = items;
        self.loading = false;
    }

    pub fn select_category(&mut self, category: Option<i64>) {
        self.selected_category = category;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortBy) {
        self.sort_by = sort;
        self.page = 1;
    }

    /// Commit the draft panel filters.
    pub fn apply_filters(&mut self) {
        self.applied = self.draft.clone();
        self.page = 1;
    }

    /// Clear category and panel filters.
    pub fn reset_filters(&mut self) {
        self.selected_category = None;
        self.draft = ListingFilters::default();
        self.applied = ListingFilters::default();
        self.page = 1;
    }

    /// Drop an item locally, returning it if it was present.
    pub fn remove_item(&mut self, item_id: i64) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        let removed = self.items.remove(index);
        self.page = self.page.min(page_count(self.visible().len(), PAGE_SIZE).max(1));
        Some(removed)
    }

    /// Sorted and filtered items across all pages.
    pub fn visible(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|item| in_category(item, self.selected_category) && self.applied.matches(item))
            .cloned()
            .collect();
        sort_items(&mut items, self.sort_by);
        items
    }

    /// Items on the current page.
    pub fn page_items(&self) -> Vec<Item> {
        paginate(&self.visible(), self.page, PAGE_SIZE).to_vec()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.visible().len(), PAGE_SIZE)
    }

    /// Pager only shows when results overflow one page.
    pub fn shows_pager(&self) -> bool {
        self.visible().len() > PAGE_SIZE
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}
