use closures::{SharedCounter, counter_closure, create_counter};
use rayon::prelude::*;

fn main() {
    env_logger::init();

    let mut increment = create_counter();

    println!("1st call: {}", increment.next());
    println!("2nd call: {}", increment.next());

    // Each factory call gets its own tally.
    let mut new_increment = create_counter();
    println!("New closure instance first call: {}", new_increment.next());
    println!("Old closure instance next call: {}", increment.next());

    let mut bump = counter_closure();
    bump();
    bump();
    let mut new_bump = counter_closure();
    println!("New capturing closure first call: {}", new_bump());
    println!("Old capturing closure next call: {}", bump());

    let shared = SharedCounter::new();
    (0..100).into_par_iter().for_each(|_| {
        shared.next();
    });
    println!("Shared counter after 100 parallel calls: {}", shared.current());
}
