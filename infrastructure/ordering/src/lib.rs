pub mod client;
pub mod order_gateway;
pub mod points_ledger;
