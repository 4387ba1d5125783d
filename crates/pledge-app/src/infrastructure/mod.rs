pub mod checkout;
pub mod json_source;
