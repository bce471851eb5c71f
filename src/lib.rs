#![doc = "The `tickbox` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, authentication mechanisms, database"]
#![doc = "access, routing configuration, and error handling for the tickbox todo list"]
#![doc = "backend. It is used by the main binary (`main.rs`) to construct and run the"]
#![doc = "application."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
