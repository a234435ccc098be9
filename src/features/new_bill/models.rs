use serde::Serialize;

/// パーセンテージのデフォルト値（未入力・数値として不正な場合に適用）
pub const DEFAULT_PCT: u32 = 20;

/// 新規請求の提出時に固定されるステータス
const INITIAL_STATUS: &str = "pending";

/// 新規請求フォームの入力値
///
/// 表示層から渡される生のフォーム値です。`pct` は未入力の可能性が
/// あるため文字列のまま受け取り、デフォルト値の適用は提出時に行います。
#[derive(Debug, Clone, Default)]
pub struct BillForm {
    /// 経費カテゴリ
    pub expense_type: String,
    /// 経費の名称
    pub name: String,
    /// 日付（ISO-8601形式の暦日）
    pub date: String,
    /// 金額
    pub amount: f64,
    /// 付加価値税（未入力時は空文字列のまま）
    pub vat: String,
    /// パーセンテージ（生の入力値）
    pub pct: String,
    /// コメント
    pub commentary: String,
}

/// 永続化される新規請求レコード
///
/// フォーム値・アップロード参照・セッションのメールアドレスから
/// 組み立てられ、シリアライズしてストアの更新呼び出しに渡されます。
#[derive(Debug, Clone, Serialize)]
pub struct NewBillDto {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub status: String,
}

impl NewBillDto {
    /// フォーム値とアップロード参照から永続化レコードを組み立てる
    ///
    /// # 引数
    /// * `form` - フォームの入力値
    /// * `file_url` - アップロード済み添付ファイルのURL
    /// * `file_name` - 添付ファイル名
    /// * `email` - 提出するユーザーのメールアドレス
    ///
    /// # デフォルト値の方針
    /// * `pct` が未入力または数値として不正な場合は20を適用する
    /// * `vat` は未入力時に空文字列のまま
    /// * `status` は常に `pending`
    pub fn from_parts(form: &BillForm, file_url: &str, file_name: &str, email: &str) -> Self {
        let pct = form.pct.trim().parse::<u32>().unwrap_or(DEFAULT_PCT);

        Self {
            email: email.to_string(),
            expense_type: form.expense_type.clone(),
            name: form.name.clone(),
            amount: form.amount,
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct,
            commentary: form.commentary.clone(),
            file_url: file_url.to_string(),
            file_name: file_name.to_string(),
            status: INITIAL_STATUS.to_string(),
        }
    }
}
