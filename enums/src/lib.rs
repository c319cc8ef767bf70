use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum OrderStatus {
    Pending = 0,
    Received = 1,
    Confirmed = 2,
    Preparing = 3,
    Shipped = 4,
    Delivered = 5,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid order status: {0}")]
pub struct InvalidStatus(pub u8);

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Received,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    /// Advance one step. `Delivered` stays `Delivered`.
    pub fn next(self) -> OrderStatus {
        use OrderStatus::*;
        match self {
            Pending => Received,
            Received => Confirmed,
            Confirmed => Preparing,
            Preparing => Shipped,
            Shipped | Delivered => Delivered,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Received => "received",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = InvalidStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        OrderStatus::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidStatus(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_whole_lifecycle() {
        let mut status = OrderStatus::Pending;
        let mut seen = vec![status.to_string()];
        while !status.is_terminal() {
            status = status.next();
            seen.push(status.to_string());
        }
        assert_eq!(
            seen,
            vec!["pending", "received", "confirmed", "preparing", "shipped", "delivered"]
        );
    }

    #[test]
    fn delivered_is_terminal() {
        assert_eq!(OrderStatus::Delivered.next(), OrderStatus::Delivered);
    }

    #[test]
    fn discriminants_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::try_from(status as u8), Ok(status));
        }
    }

    #[test]
    fn out_of_range_discriminant() {
        let err = OrderStatus::try_from(6).unwrap_err();
        assert_eq!(err, InvalidStatus(6));
        assert_eq!(err.to_string(), "invalid order status: 6");
    }
}
