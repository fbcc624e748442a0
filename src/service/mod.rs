pub mod chat_relay;
pub mod geocoding;
pub mod search;
