/// 新規請求機能モジュール
///
/// このモジュールは新規請求の提出フローに関連する機能を提供します：
/// - 添付ファイル（justificatif）の検証
/// - フォームモデルとデフォルト値の方針
/// - 提出フローの状態機械（検証 → アップロード → 提出 → 画面遷移）
// サブモジュールの宣言
pub mod models;
pub mod submission;
pub mod validator;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート

// モデル
pub use models::{BillForm, NewBillDto, DEFAULT_PCT};

// 検証
pub use validator::{is_acceptable, INVALID_ATTACHMENT_MESSAGE};

// 提出フロー
pub use submission::{NewBillSubmission, SubmissionState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // モジュールが正しくエクスポートされていることを確認
        let _form: Option<BillForm> = None;
        let _state: Option<SubmissionState> = None;
        assert_eq!(DEFAULT_PCT, 20);
    }
}
