//! End-to-end tests for nest-seed.
//!
//! REST tests run against a local HTTP stub that records every request and
//! answers with scripted status codes; file tests write into temp dirs.

mod commands;
mod rest_submit;
mod stub_server;
