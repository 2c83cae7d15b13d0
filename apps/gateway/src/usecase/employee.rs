//! 社員ユースケース
//!
//! 一覧・検索・取得・集計・作成・削除を、社員名簿 API クライアントの
//! 呼び出しとメモリ上の絞り込み・並べ替えで組み立てる。

use std::sync::Arc;

use meibo_domain::{
    DomainError,
    employee::{Employee, EmployeeCreateRequest, NameFragment, NewEmployee},
};
use thiserror::Error;

use crate::client::{DirectoryApiClient, DirectoryApiError};

/// 高給与ランキングで返す最大件数
pub const TOP_EARNERS_LIMIT: usize = 10;

const OPERATION_LIST: &str = "社員一覧の取得";
const OPERATION_GET: &str = "社員の取得";
const OPERATION_CREATE: &str = "社員の作成";
const OPERATION_DELETE: &str = "社員の削除";

/// 社員ユースケースのエラー
#[derive(Debug, Clone, Error)]
pub enum EmployeeUseCaseError {
    /// 呼び出し元の入力が不正（ネットワーク呼び出し前に検出）
    #[error("入力が不正です: {0}")]
    InvalidInput(String),

    /// 上流 API の呼び出しに失敗した
    #[error("{operation}に失敗しました: {source}")]
    Upstream {
        operation: &'static str,
        #[source]
        source:    DirectoryApiError,
    },
}

impl EmployeeUseCaseError {
    fn upstream(operation: &'static str) -> impl FnOnce(DirectoryApiError) -> Self {
        move |source| Self::Upstream { operation, source }
    }
}

impl From<DomainError> for EmployeeUseCaseError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.reason().to_string())
    }
}

/// 社員ユースケース
pub struct EmployeeUseCaseImpl {
    client: Arc<dyn DirectoryApiClient>,
}

impl EmployeeUseCaseImpl {
    pub fn new(client: Arc<dyn DirectoryApiClient>) -> Self {
        Self { client }
    }

    /// 全社員を取得する
    ///
    /// 上流の並び順をそのまま返す。
    #[tracing::instrument(skip_all)]
    pub async fn list_all(&self) -> Result<Vec<Employee>, EmployeeUseCaseError> {
        tracing::info!("社員一覧を取得");

        self.client
            .fetch_all()
            .await
            .map_err(EmployeeUseCaseError::upstream(OPERATION_LIST))
    }

    /// 名前の部分一致で社員を検索する
    ///
    /// 検索語と社員名の両方を正規化してから比較する。
    /// 空白のみの検索語は上流を呼び出さずに空の一覧を返す。
    #[tracing::instrument(skip_all, fields(%fragment))]
    pub async fn search_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<Employee>, EmployeeUseCaseError> {
        tracing::info!("社員を名前で検索");

        let Some(fragment) = NameFragment::parse(fragment) else {
            return Ok(Vec::new());
        };

        let employees = self.list_all().await?;
        Ok(employees
            .into_iter()
            .filter(|employee| employee.name_matches(&fragment))
            .collect())
    }

    /// ID で社員を取得する
    ///
    /// 前後の空白は除去する。空の ID と未登録の ID はどちらも `None`。
    #[tracing::instrument(skip_all, fields(%id))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeUseCaseError> {
        tracing::info!("社員を取得");

        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }

        self.client
            .fetch_by_id(id)
            .await
            .map_err(EmployeeUseCaseError::upstream(OPERATION_GET))
    }

    /// 最高給与額を取得する
    ///
    /// 給与が欠損した社員は除外する。対象がいなければ `None`。
    #[tracing::instrument(skip_all)]
    pub async fn highest_salary(&self) -> Result<Option<i64>, EmployeeUseCaseError> {
        tracing::info!("最高給与額を取得");

        let employees = self.list_all().await?;
        Ok(employees
            .into_iter()
            .filter_map(|employee| employee.salary)
            .max())
    }

    /// 給与の高い順に最大 10 名の社員名を取得する
    ///
    /// 名前が空または給与が欠損した社員は除外する。
    /// 同額の社員は上流の並び順を保つ。
    #[tracing::instrument(skip_all)]
    pub async fn top_ten_by_earnings(&self) -> Result<Vec<String>, EmployeeUseCaseError> {
        tracing::info!("高給与の社員名を取得");

        let employees = self.list_all().await?;
        let mut earners: Vec<(&str, i64)> = employees
            .iter()
            .filter_map(|employee| Some((employee.display_name()?, employee.salary?)))
            .collect();

        // sort_by は安定ソート
        earners.sort_by(|(_, a), (_, b)| b.cmp(a));

        Ok(earners
            .into_iter()
            .take(TOP_EARNERS_LIMIT)
            .map(|(name, _)| name.to_string())
            .collect())
    }

    /// 社員を作成する
    ///
    /// 1. 入力を検証（名前 → 給与 → 年齢 → 役職の順）
    /// 2. 上流 API に作成を依頼し、採番済みのレコードを返す
    #[tracing::instrument(skip_all)]
    pub async fn create(
        &self,
        request: EmployeeCreateRequest,
    ) -> Result<Employee, EmployeeUseCaseError> {
        tracing::info!("社員を作成");

        let new_employee = NewEmployee::try_from(request)?;

        self.client
            .create(&new_employee)
            .await
            .map_err(EmployeeUseCaseError::upstream(OPERATION_CREATE))
    }

    /// 社員を削除し、削除した社員の名前を返す
    ///
    /// 1. ID で社員を取得（未登録なら何もせず `None`）
    /// 2. 上流 API に削除を依頼
    ///
    /// 削除後に存在確認は行わない。
    /// 名前が欠損した社員を削除した場合は空文字列の名前を返す。
    #[tracing::instrument(skip_all, fields(%id))]
    pub async fn delete_by_id(&self, id: &str) -> Result<Option<String>, EmployeeUseCaseError> {
        tracing::info!("社員を削除");

        let id = id.trim();
        if id.is_empty() {
            return Err(EmployeeUseCaseError::InvalidInput(
                "社員 ID は必須です".to_string(),
            ));
        }

        let Some(employee) = self.get_by_id(id).await? else {
            tracing::info!("削除対象の社員が存在しない");
            return Ok(None);
        };

        self.client
            .delete_by_id(id)
            .await
            .map_err(EmployeeUseCaseError::upstream(OPERATION_DELETE))?;

        Ok(Some(employee.name.unwrap_or_default()))
    }
}
