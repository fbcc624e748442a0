pub mod bookingdb;
pub mod db;
pub mod favoritedb;
pub mod profiledb;
pub mod propertydb;
pub mod userdb;
