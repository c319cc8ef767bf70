use std::collections::BTreeMap;

use collections::{char_positions, index_lines, indexed_lines, lookup, render_map, value_lines};

fn main() {
    env_logger::init();

    // Arrays
    let values = [1, 2, 3, 4, 5];
    println!("{:?}", values);
    let lines = value_lines(&values)
        .into_iter()
        .chain(indexed_lines(&values))
        .chain(index_lines(&values));
    for line in lines {
        println!("{}", line);
    }

    // Strings
    for (index, ch) in char_positions("golang") {
        println!("index = {} rune = {}", index, ch as u32);
        println!("index = {} character = {}", index, ch);
    }

    // Maps
    let person_age: BTreeMap<String, i32> = [("Alice", 25), ("Bob", 30), ("Carol", 22)]
        .into_iter()
        .map(|(name, age)| (name.to_string(), age))
        .collect();
    for (name, age) in &person_age {
        println!("name = {} age = {}", name, age);
    }
    for name in person_age.keys() {
        println!("name only = {}", name);
    }
    for age in person_age.values() {
        println!("age only = {}", age);
    }

    let mut m = BTreeMap::new();
    m.insert("alice".to_string(), 23);
    m.insert("bob".to_string(), 34);
    for (key, value) in &m {
        println!("{} -> {}", key, value);
    }

    let (val, exists) = lookup(&m, "ashrith");
    if exists {
        println!("current value {}", val);
    } else {
        println!("current value doesn't exist {}", val);
    }

    m.remove("bob");
    log::debug!("{} entries left", m.len());
    println!("{}", render_map(&m));
}
