pub mod config;
pub mod dispatch;
pub mod health;
pub mod indices;
pub mod routes;
pub mod run;
pub mod schema;
pub mod search;
pub mod upload;
