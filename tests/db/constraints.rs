use chrono::NaiveDate;
use coffeeshop::db_interaction::categories::{add_category, add_category_to_menu_item, MenuItemCategoryInsertError};
use coffeeshop::db_interaction::menu_items::{add_menu_item, MenuItemInsertError};
use coffeeshop::db_interaction::orders::{add_menu_item_to_order, create_order, OrderMenuItemInsertError};
use coffeeshop::db_interaction::user::{insert_user, UserInsertError};
use coffeeshop::db_interaction::user_menu_items::{add_menu_item_to_user, UserMenuItemInsertError};
use coffeeshop::models::{NewCategory, NewMenuItem, NewMenuItemCategory, NewOrder, NewOrderMenuItem, NewUser, NewUserMenuItem};
use coffeeshop::schema_reset::reset_schema;

use crate::helpers::TestDb;

fn sample_user(email: &str) -> NewUser{
    NewUser{
        email: email.to_string(),
        password: "pw".to_string(),
        address: "1 Roast Row".to_string(),
        is_admin: false
    }
}

fn sample_menu_item(name: &str) -> NewMenuItem{
    NewMenuItem{
        name: name.to_string(),
        description: "A test roast.".to_string(),
        image_url: "https://images.example.com/menu/test-roast.jpeg".to_string(),
        price_in_cents: 250,
        inventory_quantity: 4
    }
}

#[tokio::test]
async fn duplicate_user_email_is_rejected(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    insert_user(conn, sample_user("noa.barista@example.com")).await.unwrap();

    let conn = db.pool.get().unwrap();
    let result = insert_user(conn, sample_user("noa.barista@example.com")).await;

    assert!(matches!(result, Err(UserInsertError::EmailNotUnique(_))));
}

#[tokio::test]
async fn duplicate_menu_item_name_is_rejected(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    add_menu_item(conn, sample_menu_item("Flat White")).await.unwrap();

    let conn = db.pool.get().unwrap();
    let result = add_menu_item(conn, sample_menu_item("Flat White")).await;

    assert!(matches!(result, Err(MenuItemInsertError::NameNotUnique(_))));
}

#[tokio::test]
async fn duplicate_order_line_item_pair_is_rejected(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    let buyer = insert_user(conn, sample_user("noa.barista@example.com")).await.unwrap();

    let conn = db.pool.get().unwrap();
    let menu_item = add_menu_item(conn, sample_menu_item("Flat White")).await.unwrap();

    let conn = db.pool.get().unwrap();
    let order = create_order(conn, NewOrder{
        buyer_id: buyer.id,
        order_placed_on: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        status: None
    })
    .await
    .unwrap();

    let line_item = NewOrderMenuItem{
        menu_item_id: menu_item.id,
        order_id: order.id,
        price_per_item_in_cents: 250,
        quantity: 1
    };

    let conn = db.pool.get().unwrap();
    add_menu_item_to_order(conn, line_item.clone()).await.unwrap();

    let conn = db.pool.get().unwrap();
    let result = add_menu_item_to_order(conn, line_item).await;

    assert!(matches!(result, Err(OrderMenuItemInsertError::DuplicateOrderItem(_))));
}

#[tokio::test]
async fn duplicate_category_association_is_rejected(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    let menu_item = add_menu_item(conn, sample_menu_item("Flat White")).await.unwrap();

    let conn = db.pool.get().unwrap();
    let category = add_category(conn, NewCategory{
        name: "Hot Coffees".to_string(),
        image_url: "https://images.example.com/categories/hot-coffees.jpeg".to_string()
    })
    .await
    .unwrap();

    let association = NewMenuItemCategory{
        menu_item_id: menu_item.id,
        category_id: category.id
    };

    let conn = db.pool.get().unwrap();
    add_category_to_menu_item(conn, association.clone()).await.unwrap();

    let conn = db.pool.get().unwrap();
    let result = add_category_to_menu_item(conn, association).await;

    assert!(matches!(result, Err(MenuItemCategoryInsertError::DuplicateAssociation(_))));
}

#[tokio::test]
async fn category_association_requires_existing_parents(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    let result = add_category_to_menu_item(conn, NewMenuItemCategory{
        menu_item_id: 1,
        category_id: 1
    })
    .await;

    assert!(matches!(result, Err(MenuItemCategoryInsertError::MissingParent(_))));
}

#[tokio::test]
async fn cart_quantity_defaults_to_one_and_pairs_are_unique(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    let user = insert_user(conn, sample_user("noa.barista@example.com")).await.unwrap();

    let conn = db.pool.get().unwrap();
    let menu_item = add_menu_item(conn, sample_menu_item("Flat White")).await.unwrap();

    let conn = db.pool.get().unwrap();
    let cart_entry = add_menu_item_to_user(conn, NewUserMenuItem{
        user_id: user.id,
        menu_item_id: menu_item.id,
        quantity: None
    })
    .await
    .unwrap();

    assert_eq!(cart_entry.quantity, 1);

    let conn = db.pool.get().unwrap();
    let result = add_menu_item_to_user(conn, NewUserMenuItem{
        user_id: user.id,
        menu_item_id: menu_item.id,
        quantity: Some(2)
    })
    .await;

    assert!(matches!(result, Err(UserMenuItemInsertError::DuplicateCartEntry(_))));
}
