use anyhow::{anyhow, Context};
use futures_util::future::{try_join, try_join3, try_join_all};

use crate::db_interaction::categories::{add_category, add_category_to_menu_item};
use crate::db_interaction::menu_items::add_menu_item;
use crate::db_interaction::orders::{add_menu_item_to_order, create_order};
use crate::db_interaction::user::insert_user;
use crate::models::{Category, MenuItem, NewMenuItemCategory, NewOrder, NewOrderMenuItem, Order, User};
use crate::utils::{get_pooled_connection, DbPool};

pub mod fixtures;

#[tracing::instrument(
    "Seeding sample users",
    skip_all
)]
async fn seed_users(pool: &DbPool) -> Result<Vec<User>, anyhow::Error>{
    tracing::info!("Creating sample users...");

    let seeds = fixtures::sample_users().context("Invalid user fixture data")?;

    let inserts = seeds.iter().map(|seed| async move {
        let conn = get_pooled_connection(pool).await?;
        let user = insert_user(conn, seed.as_new_user()).await?;

        Ok::<User, anyhow::Error>(user)
    });

    let users = try_join_all(inserts)
        .await
        .context("Failed to create sample users")?;

    tracing::info!("Finished creating sample users!");
    Ok(users)
}

#[tracing::instrument(
    "Seeding menu items",
    skip_all
)]
async fn seed_menu_items(pool: &DbPool) -> Result<Vec<MenuItem>, anyhow::Error>{
    tracing::info!("Seeding menu items...");

    let seeds = fixtures::sample_menu_items().context("Invalid menu item fixture data")?;

    let inserts = seeds.iter().map(|seed| async move {
        let conn = get_pooled_connection(pool).await?;
        let menu_item = add_menu_item(conn, seed.as_new_menu_item()).await?;

        Ok::<MenuItem, anyhow::Error>(menu_item)
    });

    let menu_items = try_join_all(inserts)
        .await
        .context("Failed to seed menu items")?;

    tracing::info!("Finished seeding menu items.");
    Ok(menu_items)
}

#[tracing::instrument(
    "Seeding categories",
    skip_all
)]
async fn seed_categories(pool: &DbPool) -> Result<Vec<Category>, anyhow::Error>{
    tracing::info!("Starting to create categories...");

    let seeds = fixtures::sample_categories();

    let inserts = seeds.iter().map(|seed| async move {
        let conn = get_pooled_connection(pool).await?;
        let category = add_category(conn, seed.as_new_category()).await?;

        Ok::<Category, anyhow::Error>(category)
    });

    let categories = try_join_all(inserts)
        .await
        .context("Failed to create categories")?;

    tracing::info!("Finished creating categories.");
    Ok(categories)
}

#[tracing::instrument(
    "Seeding sample orders",
    skip_all
)]
async fn seed_orders(pool: &DbPool, users: &[User]) -> Result<Vec<Order>, anyhow::Error>{
    tracing::info!("Seeding initial sample orders...");

    let seeds = fixtures::sample_orders().context("Invalid order fixture data")?;

    let inserts = seeds.iter().map(|seed| async move {
        let buyer = users.get(seed.buyer)
            .ok_or_else(|| anyhow!("Order fixture references unknown user position {}", seed.buyer))?;

        let conn = get_pooled_connection(pool).await?;
        let order = create_order(conn, NewOrder{
            buyer_id: buyer.id,
            order_placed_on: seed.order_placed_on,
            status: Some(seed.status)
        })
        .await?;

        Ok::<Order, anyhow::Error>(order)
    });

    let orders = try_join_all(inserts)
        .await
        .context("Failed to seed sample orders")?;

    tracing::info!("Finished seeding initial sample orders.");
    Ok(orders)
}

#[tracing::instrument(
    "Seeding ordered menu items",
    skip_all
)]
async fn seed_order_menu_items(
    pool: &DbPool,
    menu_items: &[MenuItem],
    orders: &[Order]
) -> Result<(), anyhow::Error>{
    tracing::info!("Seeding ordered menu items...");

    let seeds = fixtures::sample_order_menu_items().context("Invalid order line item fixture data")?;

    let inserts = seeds.iter().map(|seed| async move {
        let menu_item = menu_items.get(seed.menu_item)
            .ok_or_else(|| anyhow!("Line item fixture references unknown menu item position {}", seed.menu_item))?;
        let order = orders.get(seed.order)
            .ok_or_else(|| anyhow!("Line item fixture references unknown order position {}", seed.order))?;

        let conn = get_pooled_connection(pool).await?;
        add_menu_item_to_order(conn, NewOrderMenuItem{
            menu_item_id: menu_item.id,
            order_id: order.id,
            price_per_item_in_cents: seed.price_per_item.inner(),
            quantity: seed.quantity.inner()
        })
        .await?;

        Ok::<(), anyhow::Error>(())
    });

    try_join_all(inserts)
        .await
        .context("Failed to seed ordered menu items")?;

    tracing::info!("Finished seeding ordered menu items.");
    Ok(())
}

#[tracing::instrument(
    "Seeding menu item categories",
    skip_all
)]
async fn seed_menu_item_categories(
    pool: &DbPool,
    menu_items: &[MenuItem],
    categories: &[Category]
) -> Result<(), anyhow::Error>{
    tracing::info!("Starting to create item categories...");

    let seeds = fixtures::sample_menu_item_categories();

    let inserts = seeds.iter().map(|seed| async move {
        let menu_item = menu_items.get(seed.menu_item)
            .ok_or_else(|| anyhow!("Association fixture references unknown menu item position {}", seed.menu_item))?;
        let category = categories.get(seed.category)
            .ok_or_else(|| anyhow!("Association fixture references unknown category position {}", seed.category))?;

        let conn = get_pooled_connection(pool).await?;
        add_category_to_menu_item(conn, NewMenuItemCategory{
            menu_item_id: menu_item.id,
            category_id: category.id
        })
        .await?;

        Ok::<(), anyhow::Error>(())
    });

    try_join_all(inserts)
        .await
        .context("Failed to create item categories")?;

    tracing::info!("Finished creating item categories.");
    Ok(())
}

// Entities without dependencies seed as one concurrent wave; each later wave
// starts only after every table it references is populated, resolving fixture
// positions against the rows returned by the previous wave.
#[tracing::instrument(
    "Populating initial data",
    skip_all
)]
pub async fn seed_all(pool: &DbPool) -> Result<(), anyhow::Error>{
    let (users, menu_items, categories) = try_join3(
        seed_users(pool),
        seed_menu_items(pool),
        seed_categories(pool)
    )
    .await?;

    let orders = seed_orders(pool, &users).await?;

    try_join(
        seed_order_menu_items(pool, &menu_items, &orders),
        seed_menu_item_categories(pool, &menu_items, &categories)
    )
    .await?;

    Ok(())
}
