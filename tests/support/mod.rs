// Copyright 2025 Cowboy AI, LLC.

//! Shared order fixtures for integration tests
#![allow(dead_code)]

use domain_kit::{
    AggregateRoot, Entity, FieldAccessors, Identity, Query, QueryBuilder, Queryable, Record,
    Value, ValueObject,
};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy)]
pub struct OrderMarker;

pub type OrderId = Identity<String, OrderMarker>;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl Address {
    pub fn new(street: &str, city: &str, zip: &str) -> Self {
        Self {
            street: street.to_string(),
            city: city.to_string(),
            zip: zip.to_string(),
        }
    }
}

impl ValueObject for Address {
    fn to_record(&self) -> Record {
        Record::new("Address")
            .with("street", &self.street)
            .with("city", &self.city)
            .with("zip", &self.zip)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub client_name: String,
    pub delivery_address: Address,
    pub price: u32,
    pub tags: Vec<String>,
    pub note: Option<String>,
}

impl Order {
    pub fn new(id: &str, client_name: &str, address: Address, price: u32, tags: &[&str]) -> Self {
        Self {
            id: OrderId::new(id.to_string()),
            client_name: client_name.to_string(),
            delivery_address: address,
            price,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            note: None,
        }
    }
}

impl Queryable for Order {
    fn accessors() -> &'static FieldAccessors<Self> {
        static ACCESSORS: OnceLock<FieldAccessors<Order>> = OnceLock::new();
        ACCESSORS.get_or_init(|| {
            FieldAccessors::new()
                .field("id", |o: &Order| (&o.id).into())
                .field("clientName", |o: &Order| (&o.client_name).into())
                .field("deliveryAddress", |o: &Order| o.delivery_address.to_value())
                .field("price", |o: &Order| o.price.into())
                .field("tags", |o: &Order| Value::list(o.tags.iter()))
                .field("note", |o: &Order| o.note.clone().into())
        })
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Order {}

/// John, 2nd Avenue, New York, price 100
pub fn john() -> Order {
    Order::new(
        "123",
        "John",
        Address::new("2nd Avenue", "New York", "Zip"),
        100,
        &["tag1", "tag2", "new"],
    )
}

/// Alex, Liberation Bulevard, Belgrade, price 200
pub fn alex() -> Order {
    Order::new(
        "1234",
        "Alex",
        Address::new("Liberation Bulevard", "Belgrade", "Zip"),
        200,
        &["tag1"],
    )
}

pub fn orders() -> Vec<Order> {
    vec![john(), alex()]
}

pub fn client_name(name: &str) -> Query {
    QueryBuilder::new().eq("clientName", name)
}

pub fn price(amount: u32) -> Query {
    QueryBuilder::new().eq("price", amount)
}

pub fn address(street: &str, city: &str, zip: &str) -> Query {
    QueryBuilder::new().eq("deliveryAddress", Address::new(street, city, zip).to_value())
}
