//! Integration tests for cart persistence through the file store.
//!
//! These tests verify that cart state written by one process lifetime is
//! readable by the next, and that corrupt on-disk state degrades to an
//! empty cart instead of an error.

#![allow(clippy::unwrap_used)]

use std::fs;

use rust_decimal::Decimal;
use std::str::FromStr;

use meridian_core::ProductId;
use meridian_storefront::{CartStore, FileStore, LocalStore, Product};

fn product(id: &str, name: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: price.parse().unwrap(),
        image: format!("Time/{id}.jpeg"),
    }
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_cart_round_trips_across_store_reopens() {
    let dir = tempfile::tempdir().unwrap();

    // First "session": build up a cart
    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::load(store).unwrap();
        cart.add(product("watch2", "Model Two", "2495.99")).unwrap();
        cart.add(product("watch5", "Model Five", "3995.99")).unwrap();
        cart.add(product("watch2", "Model Two", "2495.99")).unwrap();
        cart.set_quantity(&ProductId::new("watch5"), 3).unwrap();
    }

    // Second "session": everything is still there, in insertion order
    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::load(store).unwrap();

    let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["watch2", "watch5"]);
    assert_eq!(cart.items()[0].quantity.get(), 2);
    assert_eq!(cart.items()[1].quantity.get(), 3);
    assert_eq!(cart.total_count(), 5);
    assert_eq!(
        cart.total_price(),
        Decimal::from_str("16979.95").unwrap() // 2*2495.99 + 3*3995.99
    );
}

#[test]
fn test_persisted_cart_is_a_json_array_of_line_items() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut cart = CartStore::load(store).unwrap();
    cart.add(product("watch8", "Model Eight", "5495.99")).unwrap();

    let raw = cart.store().get("cart").unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(parsed.is_array());
    assert_eq!(parsed[0]["id"], "watch8");
    assert_eq!(parsed[0]["name"], "Model Eight");
    assert_eq!(parsed[0]["quantity"], 1);
}

// =============================================================================
// Corrupt State Tests
// =============================================================================

#[test]
fn test_corrupt_cart_file_degrades_to_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cart"), "][ not json").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::load(store).unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_count(), 0);
}

#[test]
fn test_mutating_after_corruption_replaces_the_bad_state() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cart"), "{\"oops\":true}").unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::load(store).unwrap();
        cart.add(product("watch2", "Model Two", "2495.99")).unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::load(store).unwrap();
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn test_absent_cart_file_means_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::load(store).unwrap();
    assert!(cart.is_empty());
}
