use coffeeshop::models::OrderStatus;
use coffeeshop::schema::{categories, menu_item_categories, menu_items, order_menu_items, orders, user_menu_items, users};
use coffeeshop::schema_reset::reset_schema;
use coffeeshop::seed::seed_all;
use diesel::{QueryDsl, RunQueryDsl};

use crate::helpers::TestDb;

#[tokio::test]
async fn seeding_populates_the_expected_row_counts(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();
    seed_all(&db.pool).await.unwrap();

    let mut conn = db.pool.get().unwrap();

    let user_rows: i64 = users::table.count().get_result(&mut conn).unwrap();
    let menu_item_rows: i64 = menu_items::table.count().get_result(&mut conn).unwrap();
    let order_rows: i64 = orders::table.count().get_result(&mut conn).unwrap();
    let category_rows: i64 = categories::table.count().get_result(&mut conn).unwrap();
    let line_item_rows: i64 = order_menu_items::table.count().get_result(&mut conn).unwrap();
    let association_rows: i64 = menu_item_categories::table.count().get_result(&mut conn).unwrap();
    let cart_rows: i64 = user_menu_items::table.count().get_result(&mut conn).unwrap();

    assert_eq!(user_rows, 5);
    assert_eq!(menu_item_rows, 6);
    assert_eq!(order_rows, 3);
    assert_eq!(category_rows, 2);
    assert_eq!(line_item_rows, 3);
    assert_eq!(association_rows, 6);
    assert_eq!(cart_rows, 0);
}

#[tokio::test]
async fn seeded_join_rows_reference_existing_parents(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();
    seed_all(&db.pool).await.unwrap();

    let mut conn = db.pool.get().unwrap();

    let order_rows: i64 = orders::table.count().get_result(&mut conn).unwrap();
    let orders_with_buyer: i64 = orders::table
        .inner_join(users::table)
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(order_rows, orders_with_buyer);

    let line_item_rows: i64 = order_menu_items::table.count().get_result(&mut conn).unwrap();
    let line_items_with_parents: i64 = order_menu_items::table
        .inner_join(menu_items::table)
        .inner_join(orders::table)
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(line_item_rows, line_items_with_parents);

    let association_rows: i64 = menu_item_categories::table.count().get_result(&mut conn).unwrap();
    let associations_with_parents: i64 = menu_item_categories::table
        .inner_join(menu_items::table)
        .inner_join(categories::table)
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(association_rows, associations_with_parents);
}

#[tokio::test]
async fn seeded_orders_carry_their_declared_statuses(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();
    seed_all(&db.pool).await.unwrap();

    let mut conn = db.pool.get().unwrap();

    let mut statuses: Vec<OrderStatus> = orders::table
        .select(orders::status)
        .load(&mut conn)
        .unwrap();
    statuses.sort_by_key(|status| status.as_str());

    let mut expected = vec![OrderStatus::Received, OrderStatus::Cancelled, OrderStatus::Ready];
    expected.sort_by_key(|status| status.as_str());

    assert_eq!(statuses, expected);
}

#[tokio::test]
async fn reseeding_without_a_reset_fails_on_unique_constraints(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();
    seed_all(&db.pool).await.unwrap();

    let second_run = seed_all(&db.pool).await;

    assert!(second_run.is_err());
}
