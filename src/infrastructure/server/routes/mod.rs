pub mod chat;
pub mod docs;
pub mod hello;
pub mod session;
