use std::io::Write;

use chrono::NaiveDate;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::{Insertable, Queryable};
use diesel::serialize::{self, IsNull, Output, ToSql};
use serde::{Deserialize, Serialize};

use crate::schema::{
    categories, menu_item_categories, menu_items, order_menu_items, orders, user_menu_items, users,
};

// Mirrors the order_status enum type in postgres; the database labels are the
// serde names, not the variant names
#[derive(AsExpression, FromSqlRow, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[diesel(sql_type = crate::schema::sql_types::OrderStatus)]
pub enum OrderStatus{
    #[serde(rename = "Order Received")]
    Received,
    #[serde(rename = "Order Cancelled")]
    Cancelled,
    #[serde(rename = "Order Ready")]
    Ready
}

impl OrderStatus{
    pub fn as_str(&self) -> &'static str{
        match self {
            OrderStatus::Received => "Order Received",
            OrderStatus::Cancelled => "Order Cancelled",
            OrderStatus::Ready => "Order Ready"
        }
    }
}

impl ToSql<crate::schema::sql_types::OrderStatus, Pg> for OrderStatus{
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<crate::schema::sql_types::OrderStatus, Pg> for OrderStatus{
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"Order Received" => Ok(OrderStatus::Received),
            b"Order Cancelled" => Ok(OrderStatus::Cancelled),
            b"Order Ready" => Ok(OrderStatus::Ready),
            other => Err(format!(
                "Unrecognized order status: {}",
                String::from_utf8_lossy(other)
            ).into())
        }
    }
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct User{
    pub id: i32,
    pub email: String,
    pub password: String,
    pub address: String,
    pub is_admin: bool
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUser{
    pub email: String,
    pub password: String,
    pub address: String,
    pub is_admin: bool
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct MenuItem{
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price_in_cents: i32,
    pub inventory_quantity: i32
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem{
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price_in_cents: i32,
    pub inventory_quantity: i32
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Order{
    pub id: i32,
    pub buyer_id: i32,
    pub order_placed_on: NaiveDate,
    pub status: OrderStatus
}

// A None status falls back to the column default, Order Received
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder{
    pub buyer_id: i32,
    pub order_placed_on: NaiveDate,
    pub status: Option<OrderStatus>
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Category{
    pub id: i32,
    pub name: String,
    pub image_url: String
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct NewCategory{
    pub name: String,
    pub image_url: String
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct OrderMenuItem{
    pub id: i32,
    pub menu_item_id: i32,
    pub order_id: i32,
    pub price_per_item_in_cents: i32,
    pub quantity: i32
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = order_menu_items)]
pub struct NewOrderMenuItem{
    pub menu_item_id: i32,
    pub order_id: i32,
    pub price_per_item_in_cents: i32,
    pub quantity: i32
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct MenuItemCategory{
    pub id: i32,
    pub menu_item_id: i32,
    pub category_id: i32
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = menu_item_categories)]
pub struct NewMenuItemCategory{
    pub menu_item_id: i32,
    pub category_id: i32
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct UserMenuItem{
    pub id: i32,
    pub user_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32
}

// A None quantity falls back to the column default of 1
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user_menu_items)]
pub struct NewUserMenuItem{
    pub user_id: i32,
    pub menu_item_id: i32,
    pub quantity: Option<i32>
}
