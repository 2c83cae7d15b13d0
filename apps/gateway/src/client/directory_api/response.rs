//! 社員名簿 API レスポンスの共通ハンドリング

use serde::de::DeserializeOwned;

use super::types::{EnvelopeStatus, UpstreamEnvelope};

/// エンベロープが理由を持たない場合のメッセージ
const DEFAULT_REJECTION: &str = "上流 API がリクエストの処理に失敗しました";

/// 上流レスポンスの分類結果
#[derive(Debug, PartialEq, Eq)]
pub(super) enum UpstreamOutcome<T> {
    /// 2xx かつ成功エンベロープ
    Ok(T),
    /// 404
    NotFound,
    /// 2xx だがエラーエンベロープ、データ欠損、またはデコード不能
    Rejected(String),
    /// 404 以外の非 2xx
    Unavailable(String),
}

/// 社員名簿 API レスポンスの共通ハンドリング
///
/// HTTP ステータスを先に判定し、2xx の場合のみボディを
/// `UpstreamEnvelope<T>` としてデコードしてエンベロープの成否を判定する。
pub(super) async fn classify_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> UpstreamOutcome<T> {
    let body = match read_success_body(response).await {
        Ok(body) => body,
        Err(outcome) => return outcome,
    };

    match serde_json::from_str::<UpstreamEnvelope<T>>(&body) {
        Ok(envelope) => unwrap_envelope(envelope),
        Err(err) => UpstreamOutcome::Rejected(format!("レスポンスのデコードに失敗しました: {err}")),
    }
}

/// ペイロードを持たないレスポンス（削除）の共通ハンドリング
///
/// 2xx のボディは空でもよい。エラーエンベロープが返った場合のみ
/// `Rejected` として扱う。
pub(super) async fn classify_ack(response: reqwest::Response) -> UpstreamOutcome<()> {
    let body = match read_success_body(response).await {
        Ok(body) => body,
        Err(outcome) => return outcome,
    };

    match serde_json::from_str::<UpstreamEnvelope<serde_json::Value>>(&body) {
        Ok(UpstreamEnvelope {
            status: Some(EnvelopeStatus::Error),
            error,
            ..
        }) => UpstreamOutcome::Rejected(error.unwrap_or_else(|| DEFAULT_REJECTION.to_string())),
        _ => UpstreamOutcome::Ok(()),
    }
}

async fn read_success_body<T>(response: reqwest::Response) -> Result<String, UpstreamOutcome<T>> {
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(UpstreamOutcome::NotFound);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamOutcome::Unavailable(format!(
            "予期しないステータス {}: {}",
            status, body
        )));
    }

    response.text().await.map_err(|err| {
        UpstreamOutcome::Unavailable(format!("レスポンスの読み取りに失敗しました: {err}"))
    })
}

fn unwrap_envelope<T>(envelope: UpstreamEnvelope<T>) -> UpstreamOutcome<T> {
    match envelope {
        UpstreamEnvelope {
            data: Some(data),
            status: Some(EnvelopeStatus::Handled),
            ..
        } => UpstreamOutcome::Ok(data),
        UpstreamEnvelope { error, .. } => {
            UpstreamOutcome::Rejected(error.unwrap_or_else(|| DEFAULT_REJECTION.to_string()))
        }
    }
}
