//! # Meibo ゲートウェイ サーバー
//!
//! 社員名簿 API の前段に立つ HTTP ゲートウェイ。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Client     │────▶│   Gateway    │────▶│ Directory API│
//! │              │     │  port: 8111  │     │  port: 8112  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `GATEWAY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `GATEWAY_PORT` | No | ポート番号（デフォルト: `8111`） |
//! | `DIRECTORY_API_URL` | No | 社員名簿 API のベース URL（デフォルト: `http://localhost:8112/api/v1`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,meibo=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p meibo-gateway
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use meibo_gateway::{app_builder::build_app, config::GatewayConfig};
use meibo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("gateway");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "gateway").entered();

    let config = GatewayConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "ゲートウェイを起動します: {}:{} (社員名簿 API: {})",
        config.host,
        config.port,
        config.directory_api_url
    );

    let app = build_app(&config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("ゲートウェイが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
