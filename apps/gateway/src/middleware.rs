//! # ミドルウェア
//!
//! ゲートウェイ用のミドルウェアを提供する。

pub mod request_id;

pub use request_id::{current_request_id, inject_request_id, store_request_id};
