//! Wire types exchanged between the filmorate server and its clients.

pub mod protocol;

pub use protocol::*;
