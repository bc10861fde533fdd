//! Integration tests for the full checkout flow over the file store.
//!
//! Covers the page flow the storefront replaces: sign in, build a cart,
//! review the summary, submit payment, and confirm the cart is cleared
//! on success and untouched on decline.

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use meridian_core::ProductId;
use meridian_storefront::{
    CartStore, CheckoutError, FileStore, PaymentError, PaymentFields, Product, checkout, session,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn product(id: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Model {id}"),
        price: price.parse().unwrap(),
        image: format!("Time/{id}.jpeg"),
    }
}

fn valid_fields() -> PaymentFields {
    PaymentFields {
        cardholder_name: "Jane Smith".to_owned(),
        card_number: "4111 1111 1111 1111".to_owned(),
        expiry: "12/33".to_owned(),
        cvc: "1234".to_owned(),
    }
}

#[test]
fn test_full_checkout_clears_persisted_cart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::load(store).unwrap();
        session::sign_in(cart.store_mut()).unwrap();

        cart.add(product("watch2", "10.00")).unwrap();
        cart.add(product("watch2", "10.00")).unwrap();
        cart.add(product("watch5", "5.50")).unwrap();

        let summary = checkout::begin(&cart).unwrap();
        assert_eq!(summary.total, Decimal::from_str("25.50").unwrap());

        let receipt = checkout::submit_payment_at(&mut cart, &valid_fields(), now()).unwrap();
        assert_eq!(receipt.total, Decimal::from_str("25.50").unwrap());
        assert!(cart.is_empty());
    }

    // The clear is persisted: a fresh load sees an empty cart
    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::load(store).unwrap();
    assert!(cart.is_empty());
}

#[test]
fn test_declined_payment_keeps_persisted_cart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::load(store).unwrap();
        session::sign_in(cart.store_mut()).unwrap();
        cart.add(product("watch2", "2495.99")).unwrap();

        let fields = PaymentFields {
            expiry: "12/20".to_owned(),
            ..valid_fields()
        };
        let err = checkout::submit_payment_at(&mut cart, &fields, now()).unwrap_err();
        match err {
            CheckoutError::PaymentDeclined(errors) => {
                assert_eq!(errors, [PaymentError::ExpiredCard]);
            }
            other => panic!("expected PaymentDeclined, got {other}"),
        }
    }

    let store = FileStore::open(dir.path()).unwrap();
    let cart = CartStore::load(store).unwrap();
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn test_checkout_is_gated_on_sign_in_flag() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut cart = CartStore::load(store).unwrap();
    cart.add(product("watch2", "2495.99")).unwrap();

    assert!(matches!(
        checkout::begin(&cart),
        Err(CheckoutError::NotSignedIn)
    ));

    session::sign_in(cart.store_mut()).unwrap();
    assert!(checkout::begin(&cart).is_ok());

    session::sign_out(cart.store_mut()).unwrap();
    assert!(matches!(
        checkout::begin(&cart),
        Err(CheckoutError::NotSignedIn)
    ));
}

#[test]
fn test_sign_in_flag_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        session::sign_in(&mut store).unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert!(session::is_signed_in(&store).unwrap());
}
