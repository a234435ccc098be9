/// 共有モジュール
///
/// 機能モジュール間で共有される基盤（エラー型、設定、画面遷移の契約）を提供します。
pub mod config;
pub mod errors;
pub mod routes;
