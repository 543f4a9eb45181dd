//! End-to-end: a guest orders, the kitchen works the order board, and the
//! admin session survives a reload of the app.

use std::sync::Arc;

use bella_app::commands::{cart, checkout, events, menu, orders, session};
use bella_app::error::ErrorCode;
use bella_app::state::ConfigState;
use bella_app::AppContext;
use bella_core::{
    CategoryFilter, Credential, CustomerInfo, EventCategory, EventDraft, EventMedia, EventStatus,
    MenuCategory, MenuItemDraft, OrderStatus,
};
use bella_db::{Database, DbConfig, KeyValueStore};
use chrono::{NaiveDate, NaiveTime};

async fn sqlite() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

fn context_on(db: &Database) -> AppContext {
    AppContext::new(ConfigState::default(), Arc::new(db.kv()))
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Jane Smith".to_string(),
        phone: "+1 (555) 987-6543".to_string(),
        address: "12 Olive Street, Napa".to_string(),
    }
}

#[tokio::test]
async fn guest_order_to_delivery() {
    let db = sqlite().await;
    let app = context_on(&db);

    // Guest browses the mains and fills the cart
    let mains = menu::list_menu(&app.catalog, CategoryFilter::Only(MenuCategory::Main));
    assert_eq!(mains.items.len(), 4);

    cart::add_to_cart(&app.catalog, &app.cart, "main1".to_string()).unwrap();
    cart::add_to_cart(&app.catalog, &app.cart, "app1".to_string()).unwrap();
    cart::add_to_cart(&app.catalog, &app.cart, "app1".to_string()).unwrap();
    let response = cart::get_cart(&app.cart);
    assert_eq!(response.totals.total_cents, 6500 + 2 * 1800);

    let confirmation =
        checkout::submit_order(&app.cart, &app.orders, &app.config, customer()).unwrap();
    assert_eq!(confirmation.order.total_cents, 10100);
    assert!(confirmation.message.contains("$101.00"));
    assert!(cart::get_cart(&app.cart).lines.is_empty());

    // Kitchen can't see the board until an admin signs in
    let err = orders::admin_list_orders(&app.session, &app.orders).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unauthorized);

    let login = session::login(&app.session, Credential::username("user1", "123"))
        .await
        .unwrap();
    assert!(login.success);

    let board = orders::admin_list_orders(&app.session, &app.orders).unwrap();
    assert_eq!(board.len(), 1);
    let order_id = board[0].id.clone();

    let mut last = OrderStatus::Placed;
    while last != OrderStatus::Delivered {
        last = orders::admin_advance_order(&app.session, &app.orders, order_id.clone())
            .unwrap()
            .order
            .status;
    }
    assert!(orders::admin_list_orders(&app.session, &app.orders)
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn checkout_rejections_keep_the_cart() {
    let db = sqlite().await;
    let app = context_on(&db);

    let err = checkout::submit_order(&app.cart, &app.orders, &app.config, customer()).unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyOrder);

    cart::add_to_cart(&app.catalog, &app.cart, "des2".to_string()).unwrap();
    let mut nameless = customer();
    nameless.name = "   ".to_string();

    let err = checkout::submit_order(&app.cart, &app.orders, &app.config, nameless).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(cart::get_cart(&app.cart).totals.total_cents, 1200);
}

#[tokio::test]
async fn admin_edits_reach_guests() {
    let db = sqlite().await;
    let app = context_on(&db);
    session::login(&app.session, Credential::email("admin@bellavista.com", "123"))
        .await
        .unwrap();

    let item = menu::admin_add_menu_item(
        &app.session,
        &app.catalog,
        MenuItemDraft {
            name: "Panna Cotta".to_string(),
            description: "Vanilla bean with berry coulis".to_string(),
            price_cents: 1100,
            category: MenuCategory::Dessert,
            image: None,
            featured: true,
        },
    )
    .unwrap();

    assert!(menu::featured_menu(&app.catalog)
        .iter()
        .any(|i| i.id == item.id));
    cart::add_to_cart(&app.catalog, &app.cart, item.id.clone()).unwrap();

    // Deleting from the menu leaves existing cart lines alone
    menu::admin_delete_menu_item(&app.session, &app.catalog, item.id.clone()).unwrap();
    assert_eq!(cart::get_cart(&app.cart).lines[0].name, "Panna Cotta");
    let err = cart::add_to_cart(&app.catalog, &app.cart, item.id).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);

    let event = events::admin_add_event(
        &app.session,
        &app.catalog,
        EventDraft {
            title: "Harvest Dinner".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            location: "Garden".to_string(),
            category: EventCategory::Food,
            status: EventStatus::Upcoming,
            media: Some(EventMedia::Video("https://example.com/harvest.mp4".to_string())),
        },
    )
    .unwrap();

    let listing = events::list_events(&app.catalog);
    assert_eq!(listing.upcoming[0].id, event.id);

    session::logout(&app.session).await;
    let err = events::admin_delete_event(&app.session, &app.catalog, event.id).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unauthorized);
}

#[tokio::test]
async fn session_survives_reload() {
    let db = sqlite().await;

    let first = context_on(&db);
    session::login(&first.session, Credential::username("user1", "123"))
        .await
        .unwrap();
    cart::add_to_cart(&first.catalog, &first.cart, "bev3".to_string()).unwrap();

    // Same database, fresh state
    let second = context_on(&db);
    assert!(!session::get_session(&second.session).authenticated);

    let restored = second.session.restore_session().await;
    assert!(restored.is_authenticated());
    assert_eq!(restored.user().map(|u| u.id.as_str()), Some("1"));

    // The cart is not durable
    assert!(cart::get_cart(&second.cart).lines.is_empty());

    session::logout(&second.session).await;
    let kv = db.kv();
    assert_eq!(kv.get("admin-token").await.unwrap(), None);
    assert_eq!(kv.get("admin-user").await.unwrap(), None);

    let third = context_on(&db);
    assert!(!third.session.restore_session().await.is_authenticated());
}

#[tokio::test]
async fn corrupt_stored_session_is_cleared() {
    let db = sqlite().await;
    let kv = db.kv();
    kv.set("admin-token", "6b1c7a52-2f1e-4f7e-9d8e-3c2a1b0f9e8d")
        .await
        .unwrap();
    kv.set("admin-user", "{not json").await.unwrap();

    let app = context_on(&db);
    assert!(!app.session.restore_session().await.is_authenticated());
    assert_eq!(kv.get("admin-token").await.unwrap(), None);
    assert_eq!(kv.get("admin-user").await.unwrap(), None);
}
