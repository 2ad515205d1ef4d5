pub mod bundle;
pub mod codings;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
