pub mod app;
pub mod footer;
pub mod header;
pub mod quote;
