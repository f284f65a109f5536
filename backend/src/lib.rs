//! HTTP backend for a simple todo application.
//!
//! Serves CRUD routes over a SQLite database. Every repository call runs on a
//! connection opened, wrapped in a transaction, and closed for that call
//! alone; the HTTP layer stays fully async on top of it.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod router;
