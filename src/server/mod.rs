//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database access. It exposes
//! a read-only directory of community servers, filterable by category, membership and id.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Listing pipeline, authorization rules
//! - **Data Layer** (`data/`) - Query composition and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and parsed request records
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, migrations, sessions and CORS setup
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses query parameters and resolves the session user
//! 3. **Service** checks authorization and builds the filter pipeline
//! 4. **Data** executes the composed query and converts rows to domain models
//! 5. **Controller** converts domain models to DTOs and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
