//! Ports the engine depends on

mod lookup;

pub use lookup::UserLookup;
