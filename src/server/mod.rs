//! HTTP backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules orchestrating the data layer and task queue
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token service, task queue, storage)
//! - **Startup** (`startup`) - Tracing, database, mailer, SMS client and CORS setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Task** (`task/`) - Background queue for emails, SMS and file cleanup
//! - **Scheduler** (`scheduler/`) - Cron jobs, currently the pending registration purge
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates through `AuthGuard` when required and converts the DTO
//! 3. **Service** applies business rules, queries the data layer and queues notifications
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod task;
pub mod util;
