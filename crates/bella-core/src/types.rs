//! # Domain Types
//!
//! Core domain types used throughout Bella Vista.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │      Order      │   │     Event       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id ("main1")   │   │  id (UUID)      │   │  id             │       │
//! │  │  name           │   │  customer       │   │  title / date   │       │
//! │  │  price_cents    │   │  lines          │   │  status         │       │
//! │  │  category       │   │  status         │   │  media          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  MenuCategory   │   │   OrderStatus   │   │   AdminUser     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Appetizer      │   │  Placed         │   │  id, name       │       │
//! │  │  Main           │   │  Cooking        │   │  email, role    │       │
//! │  │  Dessert        │   │  Ready          │   └─────────────────┘       │
//! │  │  Beverage       │   │  Delivering     │                             │
//! │  └─────────────────┘   │  Delivered      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Menu
// =============================================================================

/// The fixed set of menu sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Appetizer,
    Main,
    Dessert,
    Beverage,
}

impl MenuCategory {
    /// All categories in menu order.
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Appetizer,
        MenuCategory::Main,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
    ];

    /// Section heading shown on the menu page.
    pub const fn label(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "Appetizers",
            MenuCategory::Main => "Main Courses",
            MenuCategory::Dessert => "Desserts",
            MenuCategory::Beverage => "Beverages",
        }
    }
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable business id ("app1", "main2", ...), also the cart key.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in cents.
    pub price_cents: i64,
    pub category: MenuCategory,
    /// Image URL.
    pub image: String,
    /// Shown in the "featured" strip on the home page.
    #[serde(default)]
    pub featured: bool,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// The subset of fields the cart needs.
    pub fn summary(&self) -> MenuItemSummary {
        MenuItemSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            price_cents: self.price_cents,
            category: self.category,
        }
    }
}

/// What the menu view hands to the cart when a guest clicks "add".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemSummary {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub category: MenuCategory,
}

impl From<&MenuItem> for MenuItemSummary {
    fn from(item: &MenuItem) -> Self {
        item.summary()
    }
}

// =============================================================================
// Events
// =============================================================================

/// Lifecycle of a restaurant event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[default]
    Music,
    Food,
    Art,
    Sports,
    Other,
}

/// Promotional media for an event. An event shows an image or a video,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum EventMedia {
    Image(String),
    Video(String),
}

impl EventMedia {
    pub fn url(&self) -> &str {
        match self {
            EventMedia::Image(url) | EventMedia::Video(url) => url,
        }
    }
}

/// A scheduled (or past) restaurant event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Start time, serialized as `HH:MM`.
    #[ts(as = "String")]
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub location: String,
    pub category: EventCategory,
    pub status: EventStatus,
    pub media: Option<EventMedia>,
}

/// `HH:MM` encoding for event start times, matching the form input.
pub(crate) mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Kitchen-to-door pipeline of a delivery order.
///
/// ```text
/// Placed ──► Cooking ──► Ready ──► Delivering ──► Delivered
///                                                 (leaves the board)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Placed,
    Cooking,
    Ready,
    Delivering,
    Delivered,
}

impl OrderStatus {
    /// All statuses in pipeline order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Placed,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
    ];

    /// The following step, or `None` once delivered.
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivering),
            OrderStatus::Delivering => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Position in the pipeline (0 = placed), for progress bars.
    pub const fn step(&self) -> usize {
        *self as usize
    }

    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Order Placed",
            OrderStatus::Cooking => "Cooking",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivering => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// Delivery details collected by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// A line item frozen into an order at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: String,
    /// Name at time of ordering (frozen).
    pub name: String,
    pub quantity: u32,
    /// Unit price at time of ordering (frozen).
    pub unit_price_cents: i64,
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// A submitted delivery order as seen on the admin board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: CustomerInfo,
    pub lines: Vec<OrderLine>,
    pub total_cents: i64,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl Order {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Contact
// =============================================================================

/// A guest's message from the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    /// Optional; blank means not given.
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

// =============================================================================
// Admin identity
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    #[default]
    Admin,
    Manager,
    Staff,
}

/// The acting identity of an authenticated admin session.
///
/// This is the record persisted as JSON under the `admin-user` key:
/// `{"id": "...", "name": "...", "email": "...", "role": "admin"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
}

/// Identity proof presented on the admin login form.
///
/// Deployments collect either a username or an email; both shapes are
/// accepted and mean the same account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credential {
    UsernamePassword { username: String, password: String },
    EmailPassword { email: String, password: String },
}

impl Credential {
    pub fn username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::UsernamePassword {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::EmailPassword {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The username or email, whichever this credential carries.
    pub fn identifier(&self) -> &str {
        match self {
            Credential::UsernamePassword { username, .. } => username,
            Credential::EmailPassword { email, .. } => email,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Credential::UsernamePassword { password, .. }
            | Credential::EmailPassword { password, .. } => password,
        }
    }
}

/// Never print the password, even in debug logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::UsernamePassword { username, .. } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credential::EmailPassword { email, .. } => f
                .debug_struct("EmailPassword")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
