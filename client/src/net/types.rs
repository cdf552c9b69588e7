//! Wire DTOs for the marketplace REST and chat websocket API.
//!
//! DESIGN
//! ======
//! These types mirror backend response shapes. Optional fields default so a
//! partial payload still renders; numeric-or-string fields (prices, user
//! references) are normalized at decode time instead of at every call site.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A listing category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A review left on an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    /// Star rating, normally 1 through 5.
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    /// Creation timestamp as sent by the backend (ISO 8601).
    #[serde(default)]
    pub created_at: String,
}

/// A rentable item as returned by `/api/items/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_available")]
    pub available: bool,
    /// Owning user id.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub owner: Option<i64>,
    #[serde(default)]
    pub category: Option<Category>,
    /// Daily price as a decimal string (the backend sends `"12.50"`).
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub price: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_available() -> bool {
    true
}

impl Item {
    /// Parsed daily price; unparsable values count as zero.
    pub fn price_value(&self) -> f64 {
        self.price.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    /// Mean review rating, or zero with no reviews.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.reviews.len() as f64;
        self.reviews.iter().map(|r| r.rating).sum::<f64>() / count
    }

    /// Map coordinates when both are present and non-zero.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Access/refresh pair returned by `POST /api/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Login payload for `POST /api/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Account creation payload for `POST /api/signup/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Booking payload for `POST /api/bookings/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// A created booking. Only the id is used client-side.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Booking {
    pub id: i64,
}

/// Payment processor checkout session created for a booking.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Review payload for `POST /api/reviews/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewRequest {
    pub item: String,
    pub rating: Option<u8>,
    pub comment: String,
}

/// A chat message between two users about an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub sender: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub receiver: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Frame pushed to the chat socket when sending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingSocketMessage {
    pub content: String,
    pub receiver_id: i64,
}

/// Frame received from the chat socket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IncomingSocketMessage {
    pub message: ChatMessage,
}

/// Persist payload for `POST /api/messages/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMessageRequest {
    pub item: String,
    pub receiver: i64,
    pub content: String,
}

/// Text fields of the add/edit item form, sent as multipart form data
/// together with an optional photo file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: String,
    pub category_id: Option<i64>,
}

impl ItemForm {
    /// Pre-fill from an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            location: item.location.clone(),
            price: item.price.clone(),
            category_id: item.category.as_ref().map(|c| c.id),
        }
    }

    /// Multipart text parts in submission order. An unset category is sent
    /// as an empty string.
    pub fn text_fields(&self) -> [(&'static str, String); 5] {
        [
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("location", self.location.clone()),
            ("price", self.price.clone()),
            ("category_id", self.category_id.map(|id| id.to_string()).unwrap_or_default()),
        ]
    }
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected integer, got {s:?}"))),
        _ => Err(D::Error::custom("expected integer")),
    }
}
