//! itemd - CRUD HTTP service for items stored in PostgreSQL
//!
//! Five routes map to five single-statement operations on the `items` table.
//! The store is injected into the router, so the HTTP contract can be
//! exercised against [`store::InMemoryItemStore`] as well as PostgreSQL.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
