//! Completion fallback service: prompt assembly, ordered model fallback and
//! classification of the terminal failure.

pub mod classify;
pub mod service;

pub use classify::{
    ClassifiedError, ErrorKind, POLICY_RESTRICTION_MESSAGE, RATE_LIMITED_MESSAGE, classify,
    classify_message,
};
pub use service::{ChatService, ChatSettings};
