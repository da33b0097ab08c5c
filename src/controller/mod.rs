//! Controller Layer
//!
//! State and persistence logic for the contact list.

mod state;
mod mutation;

#[cfg(test)]
mod tests;

pub use state::ContactState;
pub use mutation::Pending;
