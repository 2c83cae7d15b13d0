//! 社員関連の社員名簿 API クライアント

use async_trait::async_trait;
use meibo_domain::employee::{Employee, NewEmployee};

use super::{
    client_impl::DirectoryApiClientImpl,
    error::DirectoryApiError,
    response::{UpstreamOutcome, classify_ack, classify_response},
};
use crate::middleware::inject_request_id;

/// 社員関連の社員名簿 API クライアントトレイト
#[async_trait]
pub trait DirectoryApiClient: Send + Sync {
    /// 社員一覧を取得する
    ///
    /// 社員名簿 API の `GET /employee` を呼び出す。
    /// 上流がエラーエンベロープを返した場合は空の一覧として扱う。
    async fn fetch_all(&self) -> Result<Vec<Employee>, DirectoryApiError>;

    /// 社員を 1 件取得する
    ///
    /// 社員名簿 API の `GET /employee/{id}` を呼び出す。
    /// 404 またはエラーエンベロープの場合は `None` を返す。
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>, DirectoryApiError>;

    /// 社員を作成する
    ///
    /// 社員名簿 API の `POST /employee` を呼び出し、採番済みのレコードを返す。
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DirectoryApiError>;

    /// 社員を削除する
    ///
    /// 社員名簿 API の `DELETE /employee/{id}` を呼び出す。
    /// 既に存在しない（404）場合も成功として扱う。
    async fn delete_by_id(&self, id: &str) -> Result<(), DirectoryApiError>;
}

#[async_trait]
impl DirectoryApiClient for DirectoryApiClientImpl {
    async fn fetch_all(&self) -> Result<Vec<Employee>, DirectoryApiError> {
        let url = self.collection_url();

        let response = inject_request_id(self.client.get(&url)).send().await?;
        match classify_response(response).await {
            UpstreamOutcome::Ok(employees) => Ok(employees),
            UpstreamOutcome::Rejected(message) => {
                tracing::warn!(
                    upstream.message = %message,
                    "社員一覧の取得で上流 API がエラーを返したため空の一覧として扱う"
                );
                Ok(Vec::new())
            }
            UpstreamOutcome::NotFound => Err(DirectoryApiError::Unavailable(format!(
                "予期しないステータス 404: {url}"
            ))),
            UpstreamOutcome::Unavailable(reason) => Err(DirectoryApiError::Unavailable(reason)),
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>, DirectoryApiError> {
        let url = self.record_url(id);

        let response = inject_request_id(self.client.get(&url)).send().await?;
        match classify_response(response).await {
            UpstreamOutcome::Ok(employee) => Ok(Some(employee)),
            UpstreamOutcome::NotFound => Ok(None),
            UpstreamOutcome::Rejected(message) => {
                tracing::warn!(
                    employee.id = %id,
                    upstream.message = %message,
                    "社員の取得で上流 API がエラーを返したため未登録として扱う"
                );
                Ok(None)
            }
            UpstreamOutcome::Unavailable(reason) => Err(DirectoryApiError::Unavailable(reason)),
        }
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DirectoryApiError> {
        let url = self.collection_url();

        let response = inject_request_id(self.client.post(&url))
            .json(employee)
            .send()
            .await?;
        match classify_response(response).await {
            UpstreamOutcome::Ok(created) => Ok(created),
            UpstreamOutcome::Rejected(message) => Err(DirectoryApiError::UpstreamRejected(message)),
            UpstreamOutcome::NotFound => Err(DirectoryApiError::Unavailable(format!(
                "予期しないステータス 404: {url}"
            ))),
            UpstreamOutcome::Unavailable(reason) => Err(DirectoryApiError::Unavailable(reason)),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DirectoryApiError> {
        let url = self.record_url(id);

        let response = inject_request_id(self.client.delete(&url)).send().await?;
        match classify_ack(response).await {
            UpstreamOutcome::Ok(()) => Ok(()),
            UpstreamOutcome::NotFound => {
                tracing::warn!(
                    employee.id = %id,
                    "削除対象の社員は既に存在しないため成功として扱う"
                );
                Ok(())
            }
            UpstreamOutcome::Rejected(message) => Err(DirectoryApiError::UpstreamRejected(message)),
            UpstreamOutcome::Unavailable(reason) => Err(DirectoryApiError::Unavailable(reason)),
        }
    }
}
