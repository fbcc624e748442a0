pub mod bookingmodel;
pub mod propertymodel;
pub mod usermodel;
