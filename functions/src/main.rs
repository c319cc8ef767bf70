use functions::{apply, divide, greet, rectangle, total2, total3};

fn main() {
    env_logger::init();

    println!("{}", greet());
    println!("{} {}", total3(3, 4, 5), total2(1, 2));

    // Pattern matching on the result
    for (a, b) in [(10, 2), (1, 0)] {
        match divide(a, b) {
            Ok(value) => println!("{} / {} = {}", a, b, value),
            Err(e) => println!("{} / {}: {}", a, b, e),
        }
    }

    let rect = rectangle(2, 3);
    println!("area {} perimeter {}", rect.area, rect.perimeter);

    let add = |a: i32, b: i32| a + b;
    let multi = |a: i32, b: i32| a * b;
    println!("Adding {}", apply(add, 3, 4));
    println!("Multiplying {}", apply(multi, 5, 6));
}
