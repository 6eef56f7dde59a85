//! Property map for a Nepal listings site: a map widget with listing markers
//! and a geocoding search box, plus the HTTP host that renders it.

pub mod config;
pub mod domain;
pub mod errors;
pub mod geocode;
pub mod map;
pub mod page;
pub mod responses;
pub mod router;
pub mod templates;

#[cfg(test)]
mod tests;
