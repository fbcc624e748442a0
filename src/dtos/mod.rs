pub mod bookingdtos;
pub mod chatdtos;
pub mod propertydtos;
pub mod userdtos;
