use enums::OrderStatus;

fn main() {
    env_logger::init();

    let mut order = OrderStatus::Pending;
    print!("{}", order);
    order = order.next();
    println!(" -> {}", order);
}
