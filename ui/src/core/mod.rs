//! Platform-agnostic building blocks shared by the views.

pub mod config;
pub mod platform;
pub mod scroll;
pub mod storage;
pub mod timing;
