pub mod db;
pub mod error;
pub mod model;
pub mod ops;
pub mod output;
pub mod server;
pub mod views;
