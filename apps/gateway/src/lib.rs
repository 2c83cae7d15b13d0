//! # Meibo ゲートウェイ ライブラリ
//!
//! 社員名簿 API の前段に立ち、社員の一覧・検索・集計・作成・削除を
//! HTTP で公開するゲートウェイのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `client`: 外部 API クライアント（社員名簿 API）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP エラーレスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（Request ID 伝播）
//! - `openapi`: OpenAPI 仕様定義
//! - `usecase`: 社員ユースケース

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod usecase;
