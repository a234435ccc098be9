/// 請求機能モジュール
///
/// このモジュールは請求一覧の取得と正規化に関連する機能を提供します：
/// - 請求データモデル（永続化形状と表示形状）
/// - 日付・ステータスの表示用整形
/// - ストア契約とHTTPバックエンド実装
/// - 一覧取得サービス（レコード単位の失敗回復と並び替え）
// サブモジュールの宣言
pub mod api_store;
pub mod formatter;
pub mod models;
pub mod service;
pub mod store;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート

// モデル
pub use models::{BillRecord, DisplayBill, EXPENSE_TYPES};

// 整形関数
pub use formatter::{format_date, format_status};

// ストア契約とHTTP実装
pub use api_store::ApiBillStore;
pub use store::{AttachmentPayload, BillStore, BillUpdate, UploadReference};

// サービス
pub use service::BillsService;
