pub mod bind;
pub mod interface;
pub mod route;
