//! External Service Adapters

pub mod usajobs;
