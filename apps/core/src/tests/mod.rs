//! Test Module
//!
//! Test suite for the AFOA assistant.
//!
//! ## Test Categories
//! - `brain_tests`: keyword scoring, tie-breaks and fallback on the real knowledge base
//! - `session_tests`: transcript invariants and the composing flag
//! - `console_tests`: scripted terminal conversations
//! - `config_tests`: defaults and environment overrides

pub mod config_tests;
