use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DivideError {
    #[error("division with zero")]
    ByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub area: i32,
    pub perimeter: i32,
}

// Function without arguments
pub fn greet() -> &'static str {
    "Good morning"
}

pub fn total2(a: i32, b: i32) -> i32 {
    a + b
}

pub fn total3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

// Function returning Result type (for error handling)
pub fn divide(a: i32, b: i32) -> Result<i32, DivideError> {
    if b == 0 {
        log::debug!("refusing to divide {} by zero", a);
        return Err(DivideError::ByZero);
    }
    Ok(a / b)
}

pub fn rectangle(a: i32, b: i32) -> Rectangle {
    Rectangle {
        area: a * b,
        perimeter: 2 * (a + b),
    }
}

// Higher order function: takes any callable over two ints
pub fn apply<F>(f: F, a: i32, b: i32) -> i32
where
    F: Fn(i32, i32) -> i32,
{
    f(a, b)
}
