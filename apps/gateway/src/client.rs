//! # 外部 API クライアント
//!
//! ゲートウェイから上流の社員名簿 API への通信を担当する。

pub mod directory_api;

pub use directory_api::{
    DirectoryApiClient,
    DirectoryApiClientImpl,
    DirectoryApiError,
    EnvelopeStatus,
    UpstreamEnvelope,
};
