use crate::features::bills::models::BillRecord;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::Deserialize;

/// 添付ファイルのアップロードペイロード
#[derive(Debug, Clone)]
pub struct AttachmentPayload {
    /// 添付ファイル名
    pub file_name: String,
    /// メディアタイプ（例: "image/jpeg"）
    pub media_type: String,
    /// ファイルの内容
    pub content: Vec<u8>,
    /// 提出するユーザーのメールアドレス
    pub email: String,
}

/// アップロード参照
///
/// アップロード成功時にストアが返す `{fileUrl, key}` のペアです。
/// `key` は後続の更新呼び出しの宛先指定に使用します。
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReference {
    /// 保存された添付ファイルのURL
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// 永続化の宛先を指定する不透明なキー
    pub key: String,
}

/// 請求レコードの更新リクエスト
#[derive(Debug, Clone)]
pub struct BillUpdate {
    /// シリアライズ済みの請求レコード
    pub data: String,
    /// 宛先を指定するキー（アップロード時に取得したもの）
    pub selector: String,
}

/// 請求ストアの契約
///
/// リモートストアの3つの操作を明示的なインターフェースとして定義します。
/// 本番実装はHTTPバックエンド（`ApiBillStore`）、テストでは
/// インメモリのテストダブルがこの契約を実装します。
#[async_trait]
pub trait BillStore: Send + Sync {
    /// 請求レコードの一覧を取得する
    async fn list(&self) -> AppResult<Vec<BillRecord>>;

    /// 添付ファイルをアップロードし、新しい請求のドラフトを作成する
    async fn create(&self, payload: AttachmentPayload) -> AppResult<UploadReference>;

    /// 請求レコードを更新する
    async fn update(&self, update: BillUpdate) -> AppResult<()>;
}
