use chrono::Utc;
use structs::{Order, User};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let order = Order {
        id: 1,
        name: "tea".to_string(),
        price: 35,
        created_at: Utc::now(),
    };
    println!("{}", Order::new(1, "ram", 34, Utc::now()));
    println!("{}", order);

    let user = User::new("ashrith", 23);
    let data = user.to_json()?;
    log::debug!("serialized {} bytes", data.len());
    println!("{}", data);

    Ok(())
}
