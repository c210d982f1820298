//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and service results into wire
//! models.
//!
//! # Modules
//!
//! - [`dto`] - Wire models (`CampModel`, `TalkModel`, `SpeakerModel`) and query parameters
//! - [`extract`] - Validating JSON extractor
//! - [`handlers`] - HTTP request handlers
//! - [`mapper`] - Entity ⇄ wire model conversions
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod routes;
