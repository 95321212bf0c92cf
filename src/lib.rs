//! Contacts Service - a small HTTP API for creating, listing, and deleting
//! contacts stored in SQLite.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, emails, phones, pagination)
//! - **models**: The stored contact record and request/response bodies
//! - **error**: Error taxonomy and HTTP status mapping
//! - **config**: Configuration management from environment variables
//! - **db**: Connection pool and schema bootstrap
//! - **repositories**: Storage abstraction and its SQLite implementation
//! - **services**: Business rules for each operation
//! - **server**: axum router, handlers, and middleware
//! - **observability**: Request metrics

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use db::Database;
pub use domain::{ContactId, EmailAddress, Pagination, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{Contact, CreateContactRequest, DeleteOutcome, NewContact};
pub use observability::MetricsTracker;
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use server::{router, AppState};
pub use services::{ContactService, ContactServiceImpl};
