//! OCPP 2.0.1 message contracts.
//!
//! Every request and response payload of the catalog is a plain value with
//! field-level constraint checks on construction and mutation, plus an
//! aggregate [`contract::Validate::validate`] that a codec runs before
//! sending and after receiving. Framing, transport and correlation by
//! message id live elsewhere in the stack.

#![no_std]

extern crate alloc;

#[macro_use]
pub mod contract;
pub mod v201;
