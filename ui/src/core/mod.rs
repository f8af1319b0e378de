//! Platform-agnostic plumbing shared by every view: configuration, persisted
//! session state, navigation and timers.

pub mod config;
pub mod navigation;
pub mod storage;
pub mod timing;
