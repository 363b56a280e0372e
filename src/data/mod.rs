//! External data access.
//!
//! The only network call in the application is the forward-geocoding lookup
//! (`geocode`); everything downstream of it is pure computation.

pub mod geocode;

pub use geocode::GeocodeClient;
