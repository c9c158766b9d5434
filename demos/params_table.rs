//! Parameter table demonstration.
//!
//! This demo shows:
//! - The builtin type table, row by row
//! - Default values in native and host (JSON) form
//! - A widget edit cycle: host JSON in, native value out, and back
//! - The errors malformed widget values produce
//!
//! Run with: cargo run --example `params_table`

use serde_json::json;
use stagegraph_params::{HostValue, Registry, SceneValue, TypeTag};

fn main() {
    env_logger::init();

    let registry = Registry::builtin();

    println!("Parameter Type Table");
    println!("====================");
    println!();
    println!("{:<12} {:<14} {:<10} default (host JSON)", "tag", "storage", "element");
    for descriptor in registry.iter() {
        let element = descriptor
            .element()
            .map_or(String::from("-"), |e| e.to_string());
        println!(
            "{:<12} {:<14} {:<10} {}",
            descriptor.tag().to_string(),
            descriptor.value_type().to_string(),
            element,
            descriptor.default_host().to_json()
        );
    }

    println!();
    println!("Edit cycle");
    println!("----------");

    // A color widget hands back an edited triple as JSON.
    let edited = json!([0.18, 0.18, 0.22]);
    let host = HostValue::from_json(&edited)
        .expect("widget JSON is well formed")
        .expect("widget sent a value");
    let value = registry
        .from_host(TypeTag::Color3f, Some(&host))
        .expect("triple fits a color")
        .expect("present in, present out");
    println!("color3f   <- {edited}  =>  {value}");

    let round = registry
        .to_host(TypeTag::Color3f, Some(&value))
        .expect("storage matches the tag")
        .expect("present in, present out");
    println!("color3f   -> {}", round.to_json());

    // A cleared widget sends null; null comes back out, not an error.
    let cleared = HostValue::from_json(&serde_json::Value::Null).expect("null is well formed");
    let absent = registry
        .from_host(TypeTag::Color3f, cleared.as_ref())
        .expect("absence is not an error");
    println!("color3f   <- null  =>  {absent:?}");

    // An asset widget only ever sees the authored path.
    let asset = SceneValue::Asset("textures/plates/beauty.exr".into());
    let path = registry
        .to_host(TypeTag::Asset, Some(&asset))
        .expect("storage matches the tag")
        .expect("present in, present out");
    println!("asset     -> {}", path.to_json());

    println!();
    println!("Rejected widget values");
    println!("----------------------");
    for (tag, bad) in [
        (TypeTag::Float3, json!([1.0, 2.0])),
        (TypeTag::Int, json!(9_000_000_000_i64)),
        (TypeTag::Bool, json!("yes")),
        (TypeTag::IntArray, json!([1, "two", 3])),
    ] {
        let host = HostValue::from_json(&bad).expect("well formed JSON").expect("non-null");
        let name = tag.as_str();
        match registry.from_host(tag, Some(&host)) {
            Ok(v) => println!("{name:<9} <- {bad}  =>  {v:?}"),
            Err(e) => println!("{name:<9} <- {bad}  =>  error: {e}"),
        }
    }
}
