//! Domain records exchanged with the customer directory.

pub mod address;
pub mod customer;
