//! Common library exports shared between the frontend and the data client.

extern crate serde;


pub mod archive_query;
pub mod archive_records;
pub mod archive_const;
pub mod user_admin;
