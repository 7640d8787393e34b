mod authenticator;
mod client;
mod models;

pub use authenticator::PasswordAuthenticator;
pub use client::{AuthorizedClient, Error, Result};
