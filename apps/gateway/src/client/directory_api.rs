//! # 社員名簿 API クライアント
//!
//! ゲートウェイから上流の社員名簿 API への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /employee` - 社員一覧を取得
//! - `GET /employee/{id}` - 社員を 1 件取得
//! - `POST /employee` - 社員を作成
//! - `DELETE /employee/{id}` - 社員を削除
//!
//! ## レスポンスの分類
//!
//! 上流 API は HTTP ステータスとエンベロープ内の `status` の 2 箇所で成否を返す。
//! 両者を [`response`] モジュールで 1 つのタグ付き結果（`Ok` / `NotFound` /
//! `Rejected` / `Unavailable`）に畳み込み、各メソッドはその結果を
//! 操作ごとの契約に写像する。

mod client_impl;
mod employee_client;
mod error;
mod response;
mod types;

pub use client_impl::DirectoryApiClientImpl;
pub use employee_client::DirectoryApiClient;
pub use error::DirectoryApiError;
pub use types::{EnvelopeStatus, UpstreamEnvelope};
