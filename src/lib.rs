//! This crate provides customizers that prepare JSON messages for OData producers, plus the Salesforce
//! picklist enumerations those messages may carry.
pub mod config;
pub mod customizer;
pub mod error;
pub mod message;
pub mod picklist;
pub mod producer;
