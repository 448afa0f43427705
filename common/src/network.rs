pub mod address;
pub mod source;
