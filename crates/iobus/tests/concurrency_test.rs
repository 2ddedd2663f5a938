//! Buses are shared freely across threads.

use iobus::prelude::*;
use serde_json::json;
use std::thread;

#[test]
fn one_bus_many_threads() {
    let cat = Complex::builder("Cat")
        .field("name", &string())
        .field("lives", &vector(&positive_number()))
        .build();

    thread::scope(|scope| {
        for worker in 0..8_i64 {
            let cat = &cat;
            scope.spawn(move || {
                for round in 0..100_i64 {
                    let good = json!({ "name": format!("cat-{worker}"), "lives": [round + 1] });
                    assert_eq!(cat.decode(&good).unwrap(), good);

                    let bad = json!({ "name": worker, "lives": [-round] });
                    let errors = cat.decode(&bad).unwrap_err();
                    assert_eq!(errors.nodes()[0].branches.len(), 2);
                }
            });
        }
    });
}

#[test]
fn clones_move_into_threads() {
    let bus = number().or_else(&string());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let bus = bus.clone();
            thread::spawn(move || bus.decode(&json!(i)).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
