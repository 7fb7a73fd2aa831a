//! Demo driver: assembles the sample storefront and runs every report,
//! writing human-readable results to stdout.

use anyhow::Result;
use chrono::NaiveDate;

use orderlens_analytics::{
    average_age, most_expensive_product, most_popular_product, product_user_map,
    sort_orders_by_user_age_desc, sort_products_by_price, weight_per_order,
};
use orderlens_catalog::{CodeRegistry, Product};
use orderlens_orders::Order;
use orderlens_users::User;

fn main() -> Result<()> {
    orderlens_observability::init();

    let alice = User::create("Alice", 32);
    let bob = User::create("Bob", 19);
    let charlie = User::create("Charlie", 20);
    let john = User::create("John", 27);

    let product_a = Product::new_real("Product A", 2050, 10, 25);
    let product_b = Product::new_real("Product B", 5000, 6, 17);
    let product_c = Product::new_virtual(
        "Product C",
        10000,
        "xxx",
        NaiveDate::from_ymd_opt(2023, 5, 12).expect("valid date"),
    );
    let product_d = Product::new_virtual(
        "Product D",
        8125,
        "yyy",
        NaiveDate::from_ymd_opt(2024, 6, 20).expect("valid date"),
    );

    let orders = vec![
        Order::create(
            alice,
            vec![product_a.clone(), product_c.clone(), product_d.clone()],
        ),
        Order::create(bob, vec![product_a.clone(), product_b.clone()]),
        Order::create(charlie, vec![product_a.clone(), product_d.clone()]),
        Order::create(
            john,
            vec![
                product_c.clone(),
                product_d.clone(),
                product_a.clone(),
                product_b.clone(),
            ],
        ),
    ];

    tracing::info!(orders = orders.len(), "assembled sample storefront");

    println!("1. Redemption-code registry");
    let mut registry = CodeRegistry::new();
    registry.mark_used(product_c.redemption_code().expect("virtual product"));
    println!("   is \"xxx\" used: {}", registry.is_used("xxx"));
    println!("   is \"yyy\" used: {}", registry.is_used("yyy"));

    let most_expensive = most_expensive_product(&orders)?;
    println!("\n2. Most expensive product: {most_expensive}");

    let most_popular = most_popular_product(&orders)?;
    println!("\n3. Most popular product: {most_popular}");

    let average = average_age(&product_b, &orders)?;
    println!("\n4. Average buyer age for {}: {average}", product_b.name());

    println!("\n5. Buyers per product:");
    for entry in product_user_map(&orders) {
        let buyers: Vec<&str> = entry.buyers.iter().map(User::name).collect();
        println!("   {}: {}", entry.product.name(), buyers.join(", "));
    }

    let catalog = vec![
        product_a.clone(),
        product_b.clone(),
        product_c.clone(),
        product_d.clone(),
    ];
    println!("\n6a. Products by price:");
    for product in sort_products_by_price(&catalog) {
        println!("   {product}");
    }
    println!("\n6b. Orders by user age, descending:");
    for order in sort_orders_by_user_age_desc(&orders) {
        println!("   {order}");
    }

    println!("\n7. Shipping weight per order:");
    for (order, weight) in orders.iter().zip(weight_per_order(&orders)) {
        println!("   {}: total weight {}", order.user(), weight.total_weight);
    }

    Ok(())
}
