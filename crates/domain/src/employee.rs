//! # 社員
//!
//! 社員レコードと、作成入力・名前検索のための値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Employee`] | 社員レコード | リモートの社員名簿 API が所有するレコードの一時的なコピー |
//! | [`EmployeeCreateRequest`] | 社員作成リクエスト | 呼び出し元が組み立てる未検証の入力 |
//! | [`NewEmployee`] | 新規社員 | 検証済みの作成入力。上流 API へそのまま送信される |
//! | [`NameFragment`] | 検索語 | 正規化済みの部分一致検索語 |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: EmployeeId は UUID をラップし、型安全性を確保
//! - **バリデーション**: `NewEmployee` の生成時に検証ロジックを実行し、
//!   不正な入力が上流 API へ送信されることを型で防ぐ
//! - **欠損許容**: 上流レコードの ID 以外のフィールドは欠損し得るため `Option` で保持する

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// 年齢の下限（この値を含む）
pub const MIN_AGE: i32 = 16;

/// 年齢の上限（この値を含む）
pub const MAX_AGE: i32 = 75;

/// 社員 ID（一意識別子）
///
/// 上流 API が採番する UUID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[display("{_0}")]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// 既存の UUID から社員 ID を作成する
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 内部の UUID 参照を取得する
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// 社員レコード
///
/// 上流 API のペイロードをそのまま表現する。未知のフィールドは無視し、
/// 欠損したフィールドは `None` になる。`id` だけは必須であり、
/// 識別子を持たないレコードはデコードの段階で弾かれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Employee {
    pub id:     EmployeeId,
    pub name:   Option<String>,
    pub salary: Option<i64>,
    pub age:    Option<i32>,
    pub title:  Option<String>,
    pub email:  Option<String>,
}

impl Employee {
    /// 正規化した名前が検索語を部分文字列として含むかを判定する
    ///
    /// 名前が欠損しているレコードと、正規化後の名前が空になるレコードは
    /// どの検索語にも一致しない。
    pub fn name_matches(&self, fragment: &NameFragment) -> bool {
        let normalized = normalize_name(self.name.as_deref().unwrap_or_default());
        !normalized.is_empty() && normalized.contains(fragment.as_str())
    }

    /// 空白以外の文字を含む名前を取得する
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// 社員作成リクエスト（未検証）
///
/// 欠損フィールドをデコードエラーではなくバリデーションエラーとして
/// 報告するため、全フィールドを `Option` で受け取る。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeCreateRequest {
    pub name:   Option<String>,
    pub salary: Option<i64>,
    pub age:    Option<i32>,
    pub title:  Option<String>,
}

/// 新規社員（検証済みの作成入力）
///
/// 上流 API の `POST /employee` ボディ `{name, salary, age, title}` として
/// そのままシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    name:   String,
    salary: i64,
    age:    i32,
    title:  String,
}

impl NewEmployee {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl TryFrom<EmployeeCreateRequest> for NewEmployee {
    type Error = DomainError;

    /// 作成リクエストを検証する
    ///
    /// # バリデーション
    ///
    /// 以下の順に検証し、最初に違反した制約をエラーとして返す。
    ///
    /// 1. 名前が空白以外の文字を含む
    /// 2. 給与が 0 以上
    /// 3. 年齢が 16 以上 75 以下
    /// 4. 役職が空白以外の文字を含む
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    fn try_from(request: EmployeeCreateRequest) -> Result<Self, Self::Error> {
        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DomainError::Validation("社員名は必須です".to_string()))?
            .to_string();

        let salary = request.salary.filter(|salary| *salary >= 0).ok_or_else(|| {
            DomainError::Validation("給与は 0 以上である必要があります".to_string())
        })?;

        let age = request
            .age
            .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "年齢は {MIN_AGE} 歳以上 {MAX_AGE} 歳以下である必要があります"
                ))
            })?;

        let Some(title) = request.title.filter(|title| !title.trim().is_empty()) else {
            return Err(DomainError::Validation("役職は必須です".to_string()));
        };

        Ok(Self {
            name,
            salary,
            age,
            title,
        })
    }
}

/// 名前検索用の検索語（正規化済み）
///
/// 記号のみの入力は空の検索語に正規化され、正規化後の名前が空でないレコードすべてに一致する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFragment(String);

impl NameFragment {
    /// 入力文字列から検索語を作成する
    ///
    /// 空文字列・空白のみの入力は検索語として扱わず `None` を返す。
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(normalize_name(raw)))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 名前を比較用に正規化する
///
/// 小文字化 → 空白除去 → ASCII 英数字以外の除去、の順に適用する。
pub fn normalize_name(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn valid_request() -> EmployeeCreateRequest {
        EmployeeCreateRequest {
            name:   Some("Dan Brown".to_string()),
            salary: Some(200_000),
            age:    Some(40),
            title:  Some("Architect".to_string()),
        }
    }

    fn employee_named(name: Option<&str>) -> Employee {
        Employee {
            id:     EmployeeId::from_uuid(Uuid::nil()),
            name:   name.map(str::to_string),
            salary: Some(100_000),
            age:    Some(30),
            title:  Some("Dev".to_string()),
            email:  None,
        }
    }

    // ===== NewEmployee::try_from テスト =====

    #[test]
    fn test_有効なリクエストで新規社員を作成できる() {
        let sut = NewEmployee::try_from(valid_request()).unwrap();

        assert_eq!(sut.name(), "Dan Brown");
        assert_eq!(sut.salary(), 200_000);
        assert_eq!(sut.age(), 40);
        assert_eq!(sut.title(), "Architect");
    }

    #[test]
    fn test_名前の前後の空白は除去される() {
        let request = EmployeeCreateRequest {
            name: Some("  Dan Brown \t".to_string()),
            ..valid_request()
        };

        let sut = NewEmployee::try_from(request).unwrap();

        assert_eq!(sut.name(), "Dan Brown");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn test_名前が空のときバリデーションエラー(#[case] name: Option<&str>) {
        let request = EmployeeCreateRequest {
            name: name.map(str::to_string),
            ..valid_request()
        };

        let result = NewEmployee::try_from(request);

        assert_eq!(
            result,
            Err(DomainError::Validation("社員名は必須です".to_string()))
        );
    }

    #[test]
    fn test_名前の違反は他の違反より優先される() {
        let request = EmployeeCreateRequest {
            name:   Some(String::new()),
            salary: Some(-100),
            age:    Some(100),
            title:  Some(String::new()),
        };

        let result = NewEmployee::try_from(request);

        assert_eq!(
            result,
            Err(DomainError::Validation("社員名は必須です".to_string()))
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(-1))]
    fn test_給与が不正なときバリデーションエラー(#[case] salary: Option<i64>) {
        let request = EmployeeCreateRequest {
            salary,
            ..valid_request()
        };

        let result = NewEmployee::try_from(request);

        assert_eq!(
            result,
            Err(DomainError::Validation(
                "給与は 0 以上である必要があります".to_string()
            ))
        );
    }

    #[test]
    fn test_給与0は有効() {
        let request = EmployeeCreateRequest {
            salary: Some(0),
            ..valid_request()
        };

        assert!(NewEmployee::try_from(request).is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(15))]
    #[case(Some(76))]
    fn test_年齢が範囲外のときバリデーションエラー(#[case] age: Option<i32>) {
        let request = EmployeeCreateRequest {
            age,
            ..valid_request()
        };

        let result = NewEmployee::try_from(request);

        assert_eq!(
            result,
            Err(DomainError::Validation(
                "年齢は 16 歳以上 75 歳以下である必要があります".to_string()
            ))
        );
    }

    #[rstest]
    #[case(16)]
    #[case(75)]
    fn test_年齢の境界値は有効(#[case] age: i32) {
        let request = EmployeeCreateRequest {
            age: Some(age),
            ..valid_request()
        };

        assert!(NewEmployee::try_from(request).is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(" "))]
    fn test_役職が空のときバリデーションエラー(#[case] title: Option<&str>) {
        let request = EmployeeCreateRequest {
            title: title.map(str::to_string),
            ..valid_request()
        };

        let result = NewEmployee::try_from(request);

        assert_eq!(
            result,
            Err(DomainError::Validation("役職は必須です".to_string()))
        );
    }

    #[test]
    fn test_新規社員は上流apiのボディ形式にシリアライズされる() {
        let sut = NewEmployee::try_from(valid_request()).unwrap();

        let json = serde_json::to_value(&sut).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Dan Brown",
                "salary": 200000,
                "age": 40,
                "title": "Architect"
            })
        );
    }

    // ===== normalize_name テスト =====

    #[rstest]
    #[case("Alice", "alice")]
    #[case("Mary Jane", "maryjane")]
    #[case("O'Brien-Smith", "obriensmith")]
    #[case(" R2 D2 ", "r2d2")]
    #[case("山田 太郎", "")]
    fn test_normalize_nameで比較用に正規化される(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(input), expected);
    }

    // ===== NameFragment / name_matches テスト =====

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_空の検索語はparseできない(#[case] raw: &str) {
        assert_eq!(NameFragment::parse(raw), None);
    }

    #[test]
    fn test_部分一致で名前がマッチする() {
        let fragment = NameFragment::parse("ali").unwrap();

        assert!(employee_named(Some("Alice")).name_matches(&fragment));
        assert!(!employee_named(Some("Bob")).name_matches(&fragment));
    }

    #[test]
    fn test_記号と空白を無視してマッチする() {
        let fragment = NameFragment::parse("o'bri en").unwrap();

        assert!(employee_named(Some("Mr. O'Brien")).name_matches(&fragment));
    }

    #[test]
    fn test_名前のないレコードは通常の検索語にマッチしない() {
        let fragment = NameFragment::parse("a").unwrap();

        assert!(!employee_named(None).name_matches(&fragment));
    }

    #[test]
    fn test_記号のみの検索語は正規化後の名前が空のレコードにマッチしない() {
        let fragment = NameFragment::parse("!!!").unwrap();

        assert_eq!(fragment.as_str(), "");
        assert!(employee_named(Some("Alice")).name_matches(&fragment));
        assert!(!employee_named(None).name_matches(&fragment));
        assert!(!employee_named(Some("山田 太郎")).name_matches(&fragment));
    }

    // ===== Employee デシリアライズ テスト =====

    #[test]
    fn test_未知のフィールドは無視され欠損フィールドはnoneになる() {
        let json = r#"{
            "id": "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507",
            "name": "Alice",
            "unknown": true
        }"#;

        let sut: Employee = serde_json::from_str(json).unwrap();

        assert_eq!(
            sut.id.to_string(),
            "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507"
        );
        assert_eq!(sut.name.as_deref(), Some("Alice"));
        assert_eq!(sut.salary, None);
        assert_eq!(sut.email, None);
    }

    #[test]
    fn test_idのないレコードはデコードできない() {
        let result = serde_json::from_str::<Employee>(r#"{"name": "Alice"}"#);

        assert!(result.is_err());
    }

    #[rstest]
    #[case(Some("Alice"), Some("Alice"))]
    #[case(Some("  "), None)]
    #[case(None, None)]
    fn test_display_nameは空白のみの名前を除外する(
        #[case] name: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(employee_named(name).display_name(), expected);
    }
}
