//! # Catalog
//!
//! The restaurant's menu and event list. Both are in-memory and start from
//! the seed data below; the admin screens edit them in place.
//!
//! ## Reads vs. Writes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Guest pages (read)                Admin screens (write)               │
//! │  ──────────────────                ─────────────────────               │
//! │  items(CategoryFilter)             add_item(draft)                     │
//! │  featured()                        update_item(id, draft)              │
//! │  find_item(id)                     remove_item(id)                     │
//! │  upcoming_events()                 add_event(draft)                    │
//! │  past_events()                     update_event(id, draft)             │
//! │                                    remove_event(id)                    │
//! │                                                                         │
//! │  Drafts are validated before they touch the catalog.                   │
//! │  Unknown ids on update/remove are errors.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Event, EventCategory, EventMedia, EventStatus, MenuCategory, MenuItem};
use crate::validation::{
    validate_optional_text, validate_price_cents, validate_required_text, ValidationResult,
    MAX_DESCRIPTION_LEN, MAX_LOCATION_LEN, MAX_TITLE_LEN,
};
use crate::DEFAULT_ITEM_IMAGE;

/// Which part of the menu to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", tag = "kind", content = "category")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MenuCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: MenuCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Option<MenuCategory>> for CategoryFilter {
    fn from(category: Option<MenuCategory>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

/// Admin form input for creating or editing a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub category: MenuCategory,
    /// Falls back to the stock photo when absent or blank.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl MenuItemDraft {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required_text("name", &self.name, MAX_TITLE_LEN)?;
        validate_optional_text("description", &self.description, MAX_DESCRIPTION_LEN)?;
        validate_price_cents(self.price_cents)?;
        Ok(())
    }

    fn into_item(self, id: String) -> MenuItem {
        let image = self
            .image
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ITEM_IMAGE.to_string());

        MenuItem {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price_cents: self.price_cents,
            category: self.category,
            image,
            featured: self.featured,
        }
    }
}

/// Admin form input for creating or editing an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "String")]
    #[serde(default = "default_event_time", with = "crate::types::hh_mm")]
    pub time: NaiveTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub status: EventStatus,
    /// One image or one video. Uploading a video replaces an image and vice versa.
    #[serde(default)]
    pub media: Option<EventMedia>,
}

fn default_event_time() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl EventDraft {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required_text("title", &self.title, MAX_TITLE_LEN)?;
        validate_optional_text("description", &self.description, MAX_DESCRIPTION_LEN)?;
        validate_optional_text("location", &self.location, MAX_LOCATION_LEN)?;
        if let Some(media) = &self.media {
            validate_required_text("media", media.url(), MAX_DESCRIPTION_LEN)?;
        }
        Ok(())
    }

    fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date,
            time: self.time,
            location: self.location.trim().to_string(),
            category: self.category,
            status: self.status,
            media: self.media,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    events: Vec<Event>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// The restaurant's opening menu and event calendar.
    pub fn seed() -> Self {
        Catalog {
            items: seed::menu_items(),
            events: seed::events(),
        }
    }

    // -------------------------------------------------------------------------
    // Menu
    // -------------------------------------------------------------------------

    /// Menu items in menu order, optionally narrowed to one category.
    pub fn items(&self, filter: CategoryFilter) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    pub fn featured(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.featured).collect()
    }

    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Adds a new item at the end of the menu and returns it.
    pub fn add_item(&mut self, draft: MenuItemDraft) -> CoreResult<&MenuItem> {
        draft.validate()?;

        let item = draft.into_item(format!("item-{}", Uuid::new_v4()));
        self.items.push(item);

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Replaces every editable field of an item. The id is kept.
    pub fn update_item(&mut self, id: &str, draft: MenuItemDraft) -> CoreResult<&MenuItem> {
        draft.validate()?;

        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))?;

        *slot = draft.into_item(id.to_string());
        Ok(slot)
    }

    pub fn remove_item(&mut self, id: &str) -> CoreResult<MenuItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))?;

        Ok(self.items.remove(index))
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Upcoming events, soonest first.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.status == EventStatus::Upcoming)
            .collect();
        upcoming.sort_by_key(|e| (e.date, e.time));
        upcoming
    }

    /// Completed events, most recent first.
    pub fn past_events(&self) -> Vec<&Event> {
        let mut past: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.status == EventStatus::Completed)
            .collect();
        past.sort_by_key(|e| std::cmp::Reverse((e.date, e.time)));
        past
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn add_event(&mut self, draft: EventDraft) -> CoreResult<&Event> {
        draft.validate()?;

        let event = draft.into_event(format!("event-{}", Uuid::new_v4()));
        self.events.push(event);

        let index = self.events.len() - 1;
        Ok(&self.events[index])
    }

    pub fn update_event(&mut self, id: &str, draft: EventDraft) -> CoreResult<&Event> {
        draft.validate()?;

        let slot = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::EventNotFound(id.to_string()))?;

        *slot = draft.into_event(id.to_string());
        Ok(slot)
    }

    pub fn remove_event(&mut self, id: &str) -> CoreResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::EventNotFound(id.to_string()))?;

        Ok(self.events.remove(index))
    }
}

// =============================================================================
// Seed Data
// =============================================================================

mod seed {
    use super::*;

    fn item(
        id: &str,
        name: &str,
        description: &str,
        dollars: i64,
        category: MenuCategory,
        photo: u32,
        featured: bool,
    ) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_cents: Money::from_dollars(dollars).cents(),
            category,
            image: pexels(photo),
            featured,
        }
    }

    fn pexels(photo: u32) -> String {
        format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg",
            photo = photo
        )
    }

    pub(super) fn menu_items() -> Vec<MenuItem> {
        use MenuCategory::*;

        vec![
            item("app1", "Truffle Arancini", "Crispy risotto balls with black truffle and parmesan", 18, Appetizer, 1279330, true),
            item("app2", "Pan-Seared Scallops", "Fresh scallops with cauliflower purée and pancetta", 24, Appetizer, 1410235, false),
            item("app3", "Burrata Caprese", "Fresh burrata with heirloom tomatoes and basil oil", 16, Appetizer, 1438672, false),
            item("main1", "Wagyu Beef Tenderloin", "Premium wagyu with roasted vegetables and red wine reduction", 65, Main, 299347, true),
            item("main2", "Lobster Thermidor", "Classic French lobster with cognac cream sauce", 52, Main, 1109197, false),
            item("main3", "Duck à l'Orange", "Roasted duck breast with orange glaze and confit leg", 38, Main, 1211887, false),
            item("main4", "Chilean Sea Bass", "Miso-glazed sea bass with shiitake mushrooms and bok choy", 42, Main, 1640777, false),
            item("des1", "Chocolate Soufflé", "Dark chocolate soufflé with vanilla bean ice cream", 14, Dessert, 291528, false),
            item("des2", "Crème Brûlée", "Vanilla custard with caramelized sugar and fresh berries", 12, Dessert, 1126359, false),
            item("des3", "Tiramisu", "Classic Italian dessert with mascarpone and coffee", 13, Dessert, 6880219, false),
            item("bev1", "Château Margaux 2015", "Premium Bordeaux red wine", 180, Beverage, 338713, false),
            item("bev2", "Dom Pérignon", "Vintage champagne, perfectly aged", 250, Beverage, 1693650, false),
            item("bev3", "Craft Cocktails", "Signature cocktails crafted by our mixologist", 16, Beverage, 1304540, false),
        ]
    }

    fn event(
        id: &str,
        title: &str,
        description: &str,
        (y, m, d): (i32, u32, u32),
        status: EventStatus,
        photo: u32,
    ) -> Option<Event> {
        Some(Event {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            time: default_event_time(),
            location: "Main Dining Room".to_string(),
            category: EventCategory::Food,
            status,
            media: Some(EventMedia::Image(pexels(photo))),
        })
    }

    pub(super) fn events() -> Vec<Event> {
        [
            event("event1", "Wine Tasting Evening", "Join us for an exclusive wine tasting featuring rare vintages", (2024, 2, 15), EventStatus::Upcoming, 1407846),
            event("event2", "Chef's Table Experience", "An intimate dining experience with our executive chef", (2024, 2, 20), EventStatus::Upcoming, 958545),
            event("event3", "Valentine's Special Menu", "A romantic evening with our specially curated menu", (2024, 1, 14), EventStatus::Completed, 1395967),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price_cents: i64) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: "House special".to_string(),
            price_cents,
            category: MenuCategory::Main,
            image: None,
            featured: false,
        }
    }

    fn event_draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            location: "Terrace".to_string(),
            category: EventCategory::Music,
            status: EventStatus::Upcoming,
            media: Some(EventMedia::Image("https://example.com/jazz.jpg".to_string())),
        }
    }

    #[test]
    fn test_seed_contents() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.item_count(), 13);
        assert_eq!(catalog.events().len(), 3);

        let arancini = catalog.find_item("app1").unwrap();
        assert_eq!(arancini.price_cents, 1800);

        let featured: Vec<&str> = catalog.featured().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(featured, ["app1", "main1"]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::seed();

        assert_eq!(catalog.items(CategoryFilter::All).len(), 13);

        let desserts = catalog.items(CategoryFilter::Only(MenuCategory::Dessert));
        assert_eq!(desserts.len(), 3);
        assert!(desserts.iter().all(|i| i.category == MenuCategory::Dessert));

        let mains = catalog.items(Some(MenuCategory::Main).into());
        assert_eq!(mains.len(), 4);
    }

    #[test]
    fn test_event_views() {
        let catalog = Catalog::seed();

        let upcoming: Vec<&str> = catalog.upcoming_events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(upcoming, ["event1", "event2"]);

        let past: Vec<&str> = catalog.past_events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(past, ["event3"]);
    }

    #[test]
    fn test_add_update_remove_item() {
        let mut catalog = Catalog::seed();

        let id = catalog.add_item(draft("Osso Buco", 4400)).unwrap().id.clone();
        assert!(id.starts_with("item-"));
        assert_eq!(catalog.item_count(), 14);

        let added = catalog.find_item(&id).unwrap();
        assert_eq!(added.image, DEFAULT_ITEM_IMAGE);

        let updated = catalog.update_item(&id, draft("Osso Buco alla Milanese", 4600)).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.price_cents, 4600);

        let removed = catalog.remove_item(&id).unwrap();
        assert_eq!(removed.name, "Osso Buco alla Milanese");
        assert!(catalog.find_item(&id).is_none());
    }

    #[test]
    fn test_item_validation() {
        let mut catalog = Catalog::new();

        assert!(matches!(
            catalog.add_item(draft("  ", 100)),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            catalog.add_item(draft("Free Bread", -1)),
            Err(CoreError::Validation(_))
        ));
        assert!(catalog.add_item(draft("Free Bread", 0)).is_ok());
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let mut catalog = Catalog::seed();

        assert!(matches!(
            catalog.update_item("ghost", draft("X", 1)),
            Err(CoreError::MenuItemNotFound(_))
        ));
        assert!(matches!(
            catalog.remove_item("ghost"),
            Err(CoreError::MenuItemNotFound(_))
        ));
        assert!(matches!(
            catalog.remove_event("ghost"),
            Err(CoreError::EventNotFound(_))
        ));
    }

    #[test]
    fn test_event_crud_and_media_swap() {
        let mut catalog = Catalog::new();

        let id = catalog.add_event(event_draft("Live Jazz Night")).unwrap().id.clone();

        let mut edit = event_draft("Live Jazz Night");
        edit.media = Some(EventMedia::Video("https://example.com/jazz.mp4".to_string()));
        let updated = catalog.update_event(&id, edit).unwrap();
        assert_eq!(
            updated.media,
            Some(EventMedia::Video("https://example.com/jazz.mp4".to_string()))
        );

        catalog.remove_event(&id).unwrap();
        assert!(catalog.events().is_empty());
    }

    #[test]
    fn test_event_draft_defaults_from_json() {
        let draft: EventDraft =
            serde_json::from_str(r#"{"title":"Pasta Workshop","date":"2024-03-02"}"#).unwrap();
        assert_eq!(draft.time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(draft.status, EventStatus::Upcoming);
        assert!(draft.media.is_none());
    }
}
