//! Black-box checks of the report queries over the demo storefront data.

use chrono::NaiveDate;

use orderlens_analytics::{
    average_age, most_expensive_product, most_popular_product, product_user_map,
    sort_orders_by_user_age_desc, sort_products_by_price, weight_per_order,
};
use orderlens_catalog::{CodeRegistry, Product};
use orderlens_orders::Order;
use orderlens_users::User;

struct Fixture {
    product_a: Product,
    product_b: Product,
    product_c: Product,
    product_d: Product,
    orders: Vec<Order>,
}

fn demo_data() -> Fixture {
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
        NaiveDate::from_ymd_opt(2023, 5, 12).unwrap(),
    );
    let product_d = Product::new_virtual(
        "Product D",
        8125,
        "yyy",
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
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

    Fixture {
        product_a,
        product_b,
        product_c,
        product_d,
        orders,
    }
}

#[test]
fn registry_tracks_consumed_codes() {
    let mut registry = CodeRegistry::new();

    registry.mark_used("xxx");

    assert!(registry.is_used("xxx"));
    // "yyy" exists on Product D but was never consumed.
    assert!(!registry.is_used("yyy"));
}

#[test]
fn most_expensive_product_is_product_c() {
    let fixture = demo_data();

    let found = most_expensive_product(&fixture.orders).unwrap();
    assert_eq!(found.id_typed(), fixture.product_c.id_typed());
    assert_eq!(found.price(), 10000);
}

#[test]
fn most_popular_product_is_product_a() {
    let fixture = demo_data();

    // Product A appears in all four orders; nothing else does.
    let found = most_popular_product(&fixture.orders).unwrap();
    assert_eq!(found.id_typed(), fixture.product_a.id_typed());
}

#[test]
fn average_age_of_product_b_buyers() {
    let fixture = demo_data();

    // Bob (19) and John (27) ordered Product B.
    let average = average_age(&fixture.product_b, &fixture.orders).unwrap();
    assert_eq!(average, 23.0);
}

#[test]
fn product_user_map_groups_buyers_per_product() {
    let fixture = demo_data();

    let map = product_user_map(&fixture.orders);
    assert_eq!(map.len(), 4);

    let buyers_of = |product: &Product| -> Vec<&str> {
        map.iter()
            .find(|entry| entry.product.id_typed() == product.id_typed())
            .expect("product missing from map")
            .buyers
            .iter()
            .map(User::name)
            .collect()
    };

    assert_eq!(
        buyers_of(&fixture.product_a),
        vec!["Alice", "Bob", "Charlie", "John"]
    );
    assert_eq!(buyers_of(&fixture.product_b), vec!["Bob", "John"]);
    assert_eq!(buyers_of(&fixture.product_c), vec!["Alice", "John"]);
    assert_eq!(
        buyers_of(&fixture.product_d),
        vec!["Alice", "Charlie", "John"]
    );
}

#[test]
fn products_sort_ascending_by_price() {
    let fixture = demo_data();
    let catalog = vec![
        fixture.product_a.clone(),
        fixture.product_b.clone(),
        fixture.product_c.clone(),
        fixture.product_d.clone(),
    ];

    let sorted = sort_products_by_price(&catalog);
    let names: Vec<&str> = sorted.iter().map(Product::name).collect();
    assert_eq!(
        names,
        vec!["Product A", "Product B", "Product D", "Product C"]
    );
}

#[test]
fn orders_sort_descending_by_user_age() {
    let fixture = demo_data();

    let sorted = sort_orders_by_user_age_desc(&fixture.orders);
    let ages: Vec<u32> = sorted.iter().map(|o| o.user().age()).collect();
    assert_eq!(ages, vec![32, 27, 20, 19]);
}

#[test]
fn weight_per_order_counts_only_real_products() {
    let fixture = demo_data();

    let weights = weight_per_order(&fixture.orders);
    let by_order: Vec<u64> = weights.iter().map(|w| w.total_weight).collect();
    // Alice [A,C,D] = 25; Bob [A,B] = 42; Charlie [A,D] = 25;
    // John [C,D,A,B] = 42.
    assert_eq!(by_order, vec![25, 42, 25, 42]);

    for (order, weight) in fixture.orders.iter().zip(&weights) {
        assert_eq!(order.id_typed(), weight.order_id);
    }
}
