//! Path Resolution Performance Benchmarks
//!
//! Measures step compilation and resolution cost for shallow, deep and
//! indexed paths.

use std::hint::black_box;
use std::time::{Duration, Instant};

use keypath_core::{compile, resolve};
use serde_json::{Map, Value, json};

const ITERATIONS: u32 = 100_000;

fn main() {
    println!("Path Resolution Performance Benchmarks\n");

    bench_compile_only();
    bench_shallow_lookup();
    bench_deep_lookup();
    bench_indexed_lookup();
}

fn report(name: &str, elapsed: Duration) {
    let per_op = elapsed / ITERATIONS;
    println!("  {name:<28} {per_op:?} per lookup ({ITERATIONS} iterations)");
}

fn bench_compile_only() {
    println!("1. Step compilation");
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let steps = compile(black_box("root.branches[12].leaves[3].item")).count();
        black_box(steps);
    }
    report("compile 5 segments", start.elapsed());
}

fn bench_shallow_lookup() {
    println!("2. Shallow lookup");
    let doc = json!({"name": "gateway", "port": 443});
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let found = resolve(black_box(&doc), compile(black_box("port")));
        black_box(found.ok());
    }
    report("single key", start.elapsed());
}

fn bench_deep_lookup() {
    println!("3. Deep lookup");
    let mut doc = json!("leaf");
    let mut path = Vec::new();
    for depth in 0..32 {
        let key = format!("level{depth}");
        let mut map = Map::new();
        map.insert(key.clone(), doc);
        doc = Value::Object(map);
        path.push(key);
    }
    path.reverse();
    let path = path.join(".");

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let found = resolve(black_box(&doc), compile(black_box(&path)));
        black_box(found.ok());
    }
    report("32 nested keys", start.elapsed());
}

fn bench_indexed_lookup() {
    println!("4. Indexed lookup");
    let mut entries = Map::new();
    for i in 0..256 {
        entries.insert(format!("entry{i}"), json!({"item": i}));
    }
    let doc = json!({"root": {"branches": Value::Object(entries)}});

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let found = resolve(black_box(&doc), compile(black_box("root.branches[200].item")));
        black_box(found.ok());
    }
    report("entry 200 of 256", start.elapsed());
}
