use pointers::{change_by_reference, change_by_value};

fn main() {
    env_logger::init();

    let mut num = 1;

    println!("----- Pass by Value -----");
    println!("Before calling change_by_value: {}", num);
    println!("Memory address of num: {:p}", &num);
    change_by_value(num);
    println!("After calling change_by_value: {}", num);

    println!("\n----- Pass by Reference -----");
    println!("Before calling change_by_reference: {}", num);
    println!("Memory address of num: {:p}", &num);
    change_by_reference(Some(&mut num));
    println!("After calling change_by_reference: {}", num);

    println!("\n----- Edge Case: Missing Reference -----");
    change_by_reference(None);
}
