//! Request / response types exchanged over HTTP.

pub mod health;
pub mod record;
