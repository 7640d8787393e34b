mod client;
mod models;

pub use client::{Error, PrintifyClient, BASE_URL};
pub use models::Blueprint;
