//! # ユースケース層
//!
//! 社員名簿 API を組み合わせた業務操作を実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: クライアントを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//! - **キャッシュしない**: 各操作は必要なデータを毎回上流から取得する

pub mod employee;

pub use employee::{EmployeeUseCaseError, EmployeeUseCaseImpl, TOP_EARNERS_LIMIT};
