//! Outerspace: a thin aggregation service over three public APIs.
//!
//! - [`upstream`]: clients for the launch catalog, math trivia and astronomy APIs
//! - [`api`]: the JSON HTTP front end
//! - [`grpc`]: the `LaunchService` gRPC front end
//! - [`client`]: consumers of both front ends, used by the `client` command

pub mod api;
pub mod client;
pub mod config;
pub mod grpc;
pub mod models;
pub mod upstream;
