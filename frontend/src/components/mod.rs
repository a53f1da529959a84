pub mod layout;
pub mod switch;
