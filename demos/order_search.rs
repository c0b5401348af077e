// Copyright 2025 Cowboy AI, LLC.

//! Order search demo
//!
//! Stores a few orders, runs builder and JSON queries against them and undoes
//! a price change through the command processor.

use anyhow::Result;
use domain_kit::{
    AggregateRoot, Command, Entity, FieldAccessors, InMemoryRepository, Processor, Query,
    QueryBuilder, QueryOptions, Queryable, Record, Repository, Transaction, UuidIdentity, Value,
    ValueObject,
};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy)]
struct OrderMarker;

type OrderId = UuidIdentity<OrderMarker>;

#[derive(Debug, Clone, PartialEq)]
struct Address {
    street: String,
    city: String,
}

impl ValueObject for Address {
    fn to_record(&self) -> Record {
        Record::new("Address")
            .with("street", &self.street)
            .with("city", &self.city)
    }
}

#[derive(Debug, Clone)]
struct Order {
    id: OrderId,
    client_name: String,
    address: Address,
    price: u32,
    tags: Vec<String>,
}

impl Queryable for Order {
    fn accessors() -> &'static FieldAccessors<Self> {
        static ACCESSORS: OnceLock<FieldAccessors<Order>> = OnceLock::new();
        ACCESSORS.get_or_init(|| {
            FieldAccessors::new()
                .field("id", |o: &Order| (&o.id).into())
                .field("clientName", |o: &Order| (&o.client_name).into())
                .field("deliveryAddress", |o: &Order| o.address.to_value())
                .field("price", |o: &Order| o.price.into())
                .field("tags", |o: &Order| Value::list(o.tags.iter()))
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

fn order(client_name: &str, street: &str, city: &str, price: u32, tags: &[&str]) -> Order {
    Order {
        id: OrderId::generate(),
        client_name: client_name.to_string(),
        address: Address {
            street: street.to_string(),
            city: city.to_string(),
        },
        price,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

struct Reprice {
    new_price: u32,
    old_price: u32,
}

impl Command<Order> for Reprice {
    type Output = u32;
    type Error = String;

    fn execute(&mut self, order: &mut Order) -> Result<u32, String> {
        if self.new_price == 0 {
            return Err("price must be positive".to_string());
        }
        self.old_price = order.price;
        order.price = self.new_price;
        Ok(order.price)
    }

    fn revert(&mut self, order: &mut Order) {
        order.price = self.old_price;
    }
}

fn print_names(label: &str, orders: impl IntoIterator<Item = Order>) {
    let names: Vec<String> = orders.into_iter().map(|o| o.client_name).collect();
    println!("{label}: {names:?}");
}

#[tokio::main]
async fn main() -> Result<()> {
    let repo: InMemoryRepository<Order> = InMemoryRepository::new();
    for o in [
        order("John", "2nd Avenue", "New York", 100, &["tag1", "new"]),
        order("Alex", "Liberation Bulevard", "Belgrade", 200, &["tag1"]),
        order("Dhṛtarāṣṭra", "Rajpath", "Delhi", 350, &["gift"]),
    ] {
        repo.save(&o).await?;
    }

    let q = QueryBuilder::new();

    let cheap_or_tagged = q.lt("price", 150) | q.contains("tags", "GIFT");
    print_names(
        "cheap or gift",
        repo.find(&cheap_or_tagged, QueryOptions::new()).await?,
    );

    print_names(
        "folded name",
        repo.find(&q.contains("clientName", "dhrtarastra"), QueryOptions::new())
            .await?,
    );

    let from_json = Query::from_json(
        r#"{
            "operator": "not",
            "queries": [
                {"field": "deliveryAddress.city", "operator": "eq",
                 "value": {"kind": "scalar", "value": {"kind": "text", "value": "Belgrade"}}}
            ]
        }"#,
    )?;
    let page = repo.find(&from_json, QueryOptions::new().limit(1)).await?;
    println!(
        "outside Belgrade: {} of {} (more: {})",
        page.len(),
        page.total_count,
        page.has_more
    );

    let john = repo
        .find(&q.eq("clientName", "John"), QueryOptions::new())
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("order for John is missing"))?;
    let mut processor = Processor::new(john);
    let tx = Transaction::new();
    processor.execute_in(&tx, Reprice { new_price: 120, old_price: 0 });
    processor.execute_in(&tx, Reprice { new_price: 130, old_price: 0 });
    println!("repriced to {}", processor.context().price);

    let reverted = processor.revert()?;
    println!("reverted {reverted} commands, price back to {}", processor.context().price);
    repo.save(processor.context()).await?;

    Ok(())
}
