//! Decodes a litter of kittens and prints why it was rejected.
//!
//! ```text
//! cargo run -p iobus --example litter
//! ```

use iobus::complex;
use iobus::prelude::*;
use serde_json::json;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();

    let cat = complex!("Cat" {
        name: string(),
        age: positive_number(),
        isAdopted: boolean(),
    });

    let litter = complex!("Litter" {
        birthplace: string(),
        mother: cat,
        father: optional(&cat),
        kittens: vector(&cat),
        born: date(),
    });

    let input = json!({
        "birthplace": false,
        "mother": { "name": "Mittens", "age": 5, "isAdopted": true },
        "father": null,
        "kittens": [
            { "name": "Suku", "age": 1, "isAdopted": false },
            { "name": "Sif", "age": -1, "isAdopted": "bit too soon" },
        ],
        "born": "2024-04-01T08:30:00Z",
    });

    match litter.decode(&input) {
        Ok(decoded) => println!("{decoded:#}"),
        Err(errors) => {
            println!("{errors}");
            println!();
            let ascii = Humanizer {
                glyphs: Glyphs::Ascii,
                ..Humanizer::default()
            };
            println!("{}", ascii.render(&errors));
        }
    }
}
