pub mod domain;
pub mod http;
pub mod infra;
pub mod storage;
