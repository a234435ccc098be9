// 機能モジュール構造
pub mod features;
pub mod shared;

use features::bills::{ApiBillStore, BillsService};
use features::new_bill::NewBillSubmission;
use features::session::UserSession;
use shared::config::environment::{initialize_logging_system, load_environment_variables};
use shared::errors::AppResult;
use shared::routes::Navigator;
use std::sync::Arc;

/// アプリケーションを初期化する
///
/// # 処理内容
/// 1. 環境に応じた.envファイルを読み込み（ログシステム初期化前に実行）
/// 2. ログシステムを初期化
///
/// 表示層の起動時に一度だけ呼び出してください。
pub fn initialize_application() {
    load_environment_variables();
    initialize_logging_system();

    log::info!("アプリケーション初期化が完了しました");
}

/// 請求一覧サービスを構築する
///
/// # 引数
/// * `session` - セッションコンテキスト
///
/// # 戻り値
/// HTTPバックエンドに接続された `BillsService`
pub fn build_bills_service(session: UserSession) -> AppResult<BillsService> {
    let store = Arc::new(ApiBillStore::from_env()?);
    Ok(BillsService::new(store, session))
}

/// 新規請求の提出フローを構築する
///
/// # 引数
/// * `session` - セッションコンテキスト
/// * `navigate` - 提出完了時に呼び出される画面遷移コールバック
///
/// # 戻り値
/// HTTPバックエンドに接続された `NewBillSubmission`
pub fn build_new_bill_submission(
    session: UserSession,
    navigate: Navigator,
) -> AppResult<NewBillSubmission> {
    let store = Arc::new(ApiBillStore::from_env()?);
    Ok(NewBillSubmission::new(store, session, navigate))
}
