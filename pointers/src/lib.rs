/// Takes its own copy of `num`; the caller's value is left alone.
pub fn change_by_value(mut num: i32) -> i32 {
    log::debug!("change_by_value received {}", num);
    num = 5;
    println!("Inside change_by_value: {}", num);
    num
}

/// Writes 6 through the reference. A missing reference is a no-op and
/// returns `false`.
pub fn change_by_reference(num: Option<&mut i32>) -> bool {
    let Some(num) = num else {
        println!("Pointer is nil — cannot modify the value!");
        log::debug!("change_by_reference called without a target");
        return false;
    };

    *num = 6;
    println!("Inside change_by_reference: {}", num);
    true
}
