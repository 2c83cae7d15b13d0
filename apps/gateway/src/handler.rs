//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケースに委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `employee`: 社員関連（一覧、検索、取得、集計、作成、削除）

pub mod employee;
pub mod health;

pub use employee::{
    EmployeeState,
    create_employee,
    delete_employee,
    get_employee,
    get_highest_salary,
    get_top_ten_earner_names,
    list_employees,
    search_employees,
};
pub use health::health_check;
