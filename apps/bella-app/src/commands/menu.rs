//! # Menu Commands
//!
//! Guest menu browsing plus the admin menu editor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Guest                               Admin (session required)           │
//! │  ─────                               ────────────────────────           │
//! │  list_menu(filter)                   admin_add_menu_item(draft)         │
//! │  featured_menu()                     admin_update_menu_item(id, draft)  │
//! │                                      admin_delete_menu_item(id)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edits are visible to guests immediately. Lines already in a cart keep
//! the name and price they were added with.

use bella_core::{CategoryFilter, MenuCategory, MenuItem, MenuItemDraft};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use crate::commands::require_admin;
use crate::error::ApiResult;
use crate::state::{CatalogState, SessionState};

/// One menu section as shown on the menu page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub category: MenuCategory,
    pub label: String,
    pub items: Vec<MenuItem>,
}

/// Menu response: the matching items, and the same items grouped by section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub filter: CategoryFilter,
    pub items: Vec<MenuItem>,
    /// Empty sections are left out.
    pub sections: Vec<MenuSection>,
}

/// Lists menu items, optionally narrowed to one category.
pub fn list_menu(catalog: &CatalogState, filter: CategoryFilter) -> MenuResponse {
    debug!(?filter, "list_menu command");

    let items: Vec<MenuItem> = catalog.read(|c| c.items(filter).into_iter().cloned().collect());

    let sections = MenuCategory::ALL
        .iter()
        .filter_map(|&category| {
            let section: Vec<MenuItem> = items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect();
            (!section.is_empty()).then(|| MenuSection {
                category,
                label: category.label().to_string(),
                items: section,
            })
        })
        .collect();

    MenuResponse {
        filter,
        items,
        sections,
    }
}

/// Items flagged for the home page strip.
pub fn featured_menu(catalog: &CatalogState) -> Vec<MenuItem> {
    debug!("featured_menu command");
    catalog.read(|c| c.featured().into_iter().cloned().collect())
}

pub fn admin_add_menu_item(
    session: &SessionState,
    catalog: &CatalogState,
    draft: MenuItemDraft,
) -> ApiResult<MenuItem> {
    debug!(name = %draft.name, "admin_add_menu_item command");
    let admin = require_admin(session, "admin_add_menu_item")?;

    let item = catalog.write(|c| c.add_item(draft).cloned())?;
    info!(item_id = %item.id, admin = %admin.id, "Menu item added");
    Ok(item)
}

pub fn admin_update_menu_item(
    session: &SessionState,
    catalog: &CatalogState,
    item_id: String,
    draft: MenuItemDraft,
) -> ApiResult<MenuItem> {
    debug!(item_id = %item_id, "admin_update_menu_item command");
    let admin = require_admin(session, "admin_update_menu_item")?;

    let item = catalog.write(|c| c.update_item(&item_id, draft).cloned())?;
    info!(item_id = %item.id, admin = %admin.id, "Menu item updated");
    Ok(item)
}

/// Removes an item and returns what was removed.
pub fn admin_delete_menu_item(
    session: &SessionState,
    catalog: &CatalogState,
    item_id: String,
) -> ApiResult<MenuItem> {
    debug!(item_id = %item_id, "admin_delete_menu_item command");
    let admin = require_admin(session, "admin_delete_menu_item")?;

    let item = catalog.write(|c| c.remove_item(&item_id))?;
    info!(item_id = %item.id, admin = %admin.id, "Menu item deleted");
    Ok(item)
}
