pub mod quote;
pub mod services;
