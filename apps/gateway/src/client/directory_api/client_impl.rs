//! 社員名簿 API クライアント実装の構造体

/// 社員名簿 API クライアント実装
#[derive(Clone)]
pub struct DirectoryApiClientImpl {
    pub(super) base_url: String,
    pub(super) client:   reqwest::Client,
}

impl DirectoryApiClientImpl {
    /// 新しい DirectoryApiClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: 社員名簿 API のベース URL（例: `http://localhost:8112/api/v1`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    pub(super) fn collection_url(&self) -> String {
        format!("{}/employee", self.base_url)
    }

    /// ID はパスセグメントとしてエンコードする
    pub(super) fn record_url(&self, id: &str) -> String {
        format!("{}/employee/{}", self.base_url, urlencoding::encode(id))
    }
}
