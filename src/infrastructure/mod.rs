pub mod http_gateway;
pub mod in_memory;
pub mod wallet_bridge;
