//! Core library for deptest
//!
//! This crate is the **Functional Core** of the deptest server, following the
//! Functional Core - Imperative Shell split used across the workspace:
//!
//! - **`deptest_core`** (this crate): records, the in-memory store, validation,
//!   ordering and the transformation primitives. No network or filesystem I/O.
//! - **`deptest`**: the axum server, request handlers, the error boundary and the
//!   upstream HTTP call (the Imperative Shell).
//!
//! # Module Organization
//!
//! - [`identity`]: id generation and the monotonic clock
//! - [`store`]: append-only, uniquely keyed collections
//! - [`ordering`]: listing order (newest first, stable)
//! - [`validation`]: required-field checks for creation payloads
//! - [`resources`]: users, posts, their payloads and listing envelopes
//! - [`transform`]: one narrow trait per transformation endpoint, with defaults
//! - [`service`]: root metadata and the route table
//!
//! # Example Usage
//!
//! ```rust
//! use deptest_core::identity::{Clock, IdGenerator, SystemClock, UuidGenerator};
//! use deptest_core::ordering::order_for_listing;
//! use deptest_core::resources::{CreateUserRequest, User};
//! use deptest_core::store::ResourceStore;
//!
//! let clock = SystemClock::new();
//! let mut users = ResourceStore::new();
//!
//! let request = CreateUserRequest {
//!     name: Some("Ada".to_string()),
//!     email: Some("ada@example.com".to_string()),
//! };
//! let user = User::create(request, UuidGenerator.generate(), clock.now()).unwrap();
//! users.insert(user).unwrap();
//!
//! assert_eq!(order_for_listing(users.list_all()).len(), 1);
//! ```

pub mod identity;
pub mod ordering;
pub mod resources;
pub mod service;
pub mod store;
pub mod transform;
pub mod validation;
