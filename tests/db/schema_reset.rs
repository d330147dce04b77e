use chrono::NaiveDate;
use claim::assert_ok;
use coffeeshop::db_interaction::orders::{create_order, OrderInsertError};
use coffeeshop::db_interaction::user::insert_user;
use coffeeshop::models::{NewOrder, NewUser, OrderStatus};
use coffeeshop::schema_reset::reset_schema;
use diesel::RunQueryDsl;

use crate::helpers::TestDb;

#[tokio::test]
async fn reset_schema_builds_a_fresh_database(){
    let db = TestDb::spawn_db();

    assert_ok!(reset_schema(&db.pool).await);
}

#[tokio::test]
async fn reset_schema_twice_in_a_row_succeeds(){
    let db = TestDb::spawn_db();

    assert_ok!(reset_schema(&db.pool).await);
    assert_ok!(reset_schema(&db.pool).await);
}

#[tokio::test]
async fn order_status_outside_the_enum_is_rejected(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let mut conn = db.pool.get().unwrap();
    diesel::sql_query(
        "INSERT INTO users (email, password, address) \
         VALUES ('noa.barista@example.com', 'pw', '1 Roast Row')"
    )
    .execute(&mut conn)
    .unwrap();

    let result = diesel::sql_query(
        "INSERT INTO orders (buyer_id, order_placed_on, status) \
         SELECT id, DATE '2023-01-05', 'Order Shipped' FROM users"
    )
    .execute(&mut conn);

    assert!(result.is_err());
}

#[tokio::test]
async fn create_order_without_existing_user_fails_with_foreign_key_violation(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    let result = create_order(conn, NewOrder{
        buyer_id: 1,
        order_placed_on: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        status: None
    })
    .await;

    assert!(matches!(result, Err(OrderInsertError::BuyerMissing(_))));
}

#[tokio::test]
async fn create_order_without_status_defaults_to_order_received(){
    let db = TestDb::spawn_db();
    reset_schema(&db.pool).await.unwrap();

    let conn = db.pool.get().unwrap();
    let buyer = insert_user(conn, NewUser{
        email: "noa.barista@example.com".to_string(),
        password: "pw".to_string(),
        address: "1 Roast Row".to_string(),
        is_admin: false
    })
    .await
    .unwrap();

    let conn = db.pool.get().unwrap();
    let order = create_order(conn, NewOrder{
        buyer_id: buyer.id,
        order_placed_on: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        status: None
    })
    .await
    .unwrap();

    assert_eq!(order.status, OrderStatus::Received);
    assert_eq!(order.buyer_id, buyer.id);
}
