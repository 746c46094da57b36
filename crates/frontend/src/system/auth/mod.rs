pub mod api;
pub mod context;
pub mod session;
pub mod storage;
