//! # Meibo ドメイン層
//!
//! 社員名簿のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つ社員レコード（[`employee::Employee`]）
//! - **値オブジェクト**: 検証済みの作成入力（[`employee::NewEmployee`]）、
//!   正規化済みの検索語（[`employee::NameFragment`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! 社員データの永続化はリモートの社員名簿 API が担う。
//! ドメイン層は HTTP や外部 API には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use meibo_domain::employee::{EmployeeCreateRequest, NewEmployee};
//!
//! let request = EmployeeCreateRequest {
//!     name:   Some("山田 太郎".to_string()),
//!     salary: Some(500_000),
//!     age:    Some(31),
//!     title:  Some("Engineer".to_string()),
//! };
//! let new_employee = NewEmployee::try_from(request).unwrap();
//! assert_eq!(new_employee.name(), "山田 太郎");
//! ```

pub mod employee;
pub mod error;

pub use error::DomainError;
