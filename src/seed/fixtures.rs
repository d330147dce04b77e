use anyhow::{anyhow, Context};
use chrono::NaiveDate;

use crate::domain::{price_cents::PriceCents, quantity::Quantity, user_email::UserEmail};
use crate::models::{NewCategory, NewMenuItem, NewUser, OrderStatus};

// Fixture records reference their parents by position in the parent fixture
// list, never by a hard-coded database id; the orchestrator resolves each
// position against the rows the database actually returned.

pub struct UserSeed{
    pub email: UserEmail,
    pub password: String,
    pub address: String,
    pub is_admin: bool
}

impl UserSeed{
    pub fn as_new_user(&self) -> NewUser{
        NewUser{
            email: self.email.inner(),
            password: self.password.clone(),
            address: self.address.clone(),
            is_admin: self.is_admin
        }
    }
}

pub struct MenuItemSeed{
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: PriceCents,
    pub inventory: Quantity
}

impl MenuItemSeed{
    pub fn as_new_menu_item(&self) -> NewMenuItem{
        NewMenuItem{
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            price_in_cents: self.price.inner(),
            inventory_quantity: self.inventory.inner()
        }
    }
}

pub struct CategorySeed{
    pub name: String,
    pub image_url: String
}

impl CategorySeed{
    pub fn as_new_category(&self) -> NewCategory{
        NewCategory{
            name: self.name.clone(),
            image_url: self.image_url.clone()
        }
    }
}

pub struct OrderSeed{
    pub buyer: usize,
    pub order_placed_on: NaiveDate,
    pub status: OrderStatus
}

pub struct OrderMenuItemSeed{
    pub menu_item: usize,
    pub order: usize,
    pub price_per_item: PriceCents,
    pub quantity: Quantity
}

pub struct MenuItemCategorySeed{
    pub menu_item: usize,
    pub category: usize
}

fn user(email: &str, password: &str, address: &str, is_admin: bool) -> Result<UserSeed, anyhow::Error>{
    Ok(UserSeed{
        email: UserEmail::parse(email.to_string()).map_err(|e| anyhow!(e))?,
        password: password.to_string(),
        address: address.to_string(),
        is_admin
    })
}

fn menu_item(
    name: &str,
    description: &str,
    image_url: &str,
    price_in_cents: i32,
    inventory_quantity: i32
) -> Result<MenuItemSeed, anyhow::Error>{
    Ok(MenuItemSeed{
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        price: PriceCents::parse(price_in_cents).map_err(|e| anyhow!(e))?,
        inventory: Quantity::parse(inventory_quantity).map_err(|e| anyhow!(e))?
    })
}

fn order(buyer: usize, year: i32, month: u32, day: u32, status: OrderStatus) -> Result<OrderSeed, anyhow::Error>{
    let order_placed_on = NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("{}-{}-{} is not a valid order date", year, month, day))?;

    Ok(OrderSeed{
        buyer,
        order_placed_on,
        status
    })
}

fn order_menu_item(
    menu_item: usize,
    order: usize,
    price_per_item_in_cents: i32,
    quantity: i32
) -> Result<OrderMenuItemSeed, anyhow::Error>{
    Ok(OrderMenuItemSeed{
        menu_item,
        order,
        price_per_item: PriceCents::parse(price_per_item_in_cents).map_err(|e| anyhow!(e))?,
        quantity: Quantity::parse(quantity).map_err(|e| anyhow!(e))?
    })
}

pub fn sample_users() -> Result<Vec<UserSeed>, anyhow::Error>{
    Ok(vec![
        user("imogen.reyes@example.com", "m4Ks8vTq0w", "19 Dovetail Crossing", true)?,
        user("carla.boulanger@example.net", "v4GfYH8GO", "160 Marcy Junction", false)?,
        user("tom.dautry@example.org", "jys4d9Qp", "8984 Amoth Parkway", false)?,
        user("sofia.fitzpatrick@example.com", "QUlZFchcou", "1 Mallory Court", false)?,
        user("sam.washbrook@example.net", "FZKWNv6E4", "663 Cascade Pass", false)?,
    ])
}

pub fn sample_menu_items() -> Result<Vec<MenuItemSeed>, anyhow::Error>{
    Ok(vec![
        menu_item(
            "Cappuccino",
            "A rich cappuccino with a deep crema.",
            "https://images.example.com/menu/cappuccino.jpeg",
            436,
            2
        )?,
        menu_item(
            "Espresso",
            "A double shot of our house espresso.",
            "https://images.example.com/menu/espresso.jpeg",
            175,
            3
        )?,
        menu_item(
            "Latte",
            "A sweet latte with silky steamed milk.",
            "https://images.example.com/menu/latte.jpeg",
            275,
            5
        )?,
        menu_item(
            "Mocha",
            "A chocolatey mocha topped with cocoa.",
            "https://images.example.com/menu/mocha.jpeg",
            345,
            4
        )?,
        menu_item(
            "Ham, Egg & Cheese Breakfast Sandwich",
            "A toasted ham, egg, and cheese breakfast sandwich.",
            "https://images.example.com/menu/ham-egg-cheese.jpeg",
            375,
            10
        )?,
        menu_item(
            "Lettuce Tomato Breakfast Sandwich",
            "A fresh lettuce and tomato breakfast sandwich.",
            "https://images.example.com/menu/lettuce-tomato.jpeg",
            345,
            11
        )?,
    ])
}

pub fn sample_categories() -> Vec<CategorySeed>{
    vec![
        CategorySeed{
            name: "Hot Breakfasts".to_string(),
            image_url: "https://images.example.com/categories/hot-breakfasts.jpeg".to_string()
        },
        CategorySeed{
            name: "Hot Coffees".to_string(),
            image_url: "https://images.example.com/categories/hot-coffees.jpeg".to_string()
        },
    ]
}

pub fn sample_orders() -> Result<Vec<OrderSeed>, anyhow::Error>{
    Ok(vec![
        order(0, 2022, 11, 24, OrderStatus::Received)?,
        order(2, 2022, 12, 1, OrderStatus::Cancelled)?,
        order(3, 2022, 12, 25, OrderStatus::Ready)?,
    ])
}

pub fn sample_order_menu_items() -> Result<Vec<OrderMenuItemSeed>, anyhow::Error>{
    Ok(vec![
        order_menu_item(0, 0, 275, 1)?,
        order_menu_item(1, 1, 345, 1)?,
        order_menu_item(2, 2, 375, 1)?,
    ])
}

pub fn sample_menu_item_categories() -> Vec<MenuItemCategorySeed>{
    vec![
        MenuItemCategorySeed{ menu_item: 0, category: 1 },
        MenuItemCategorySeed{ menu_item: 1, category: 1 },
        MenuItemCategorySeed{ menu_item: 2, category: 1 },
        MenuItemCategorySeed{ menu_item: 3, category: 1 },
        MenuItemCategorySeed{ menu_item: 4, category: 0 },
        MenuItemCategorySeed{ menu_item: 5, category: 0 },
    ]
}
