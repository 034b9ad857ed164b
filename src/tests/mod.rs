//! Integration tests for the endpoint factory.
//!
//! End-to-end scenarios that exercise resolution, slot swapping and
//! concurrent endpoint creation against one shared factory.


pub mod support;
