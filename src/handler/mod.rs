pub mod agents;
pub mod chat;
pub mod favorites;
pub mod listings;
pub mod properties;
pub mod users;
pub mod visits;
