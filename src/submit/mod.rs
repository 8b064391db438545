pub mod controller;
pub mod payload;
pub mod sink;
