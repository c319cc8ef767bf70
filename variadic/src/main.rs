use variadic::{sum, sum_iter};

fn main() {
    env_logger::init();

    println!("{}", sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));

    let nums: Vec<i64> = (1..=11).collect();
    log::debug!("summing {} values", nums.len());
    println!("passing a Vec as the argument list: {}", sum(&nums));
    println!("passing a range: {}", sum_iter(1..=10));
}
