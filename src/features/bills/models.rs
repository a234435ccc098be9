use serde::{Deserialize, Serialize};

/// 経費カテゴリの一覧（表示層のセレクトボックスと共有する固定の列挙）
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// 請求データモデル（リモートストアに永続化される形状）
///
/// ワイヤ上のフィールド名はキャメルケース（`fileUrl` など）で、
/// すべてフラットな文字列・数値フィールドです。リモート側の
/// 不完全なレコードも読み込めるよう、省略され得るフィールドには
/// デフォルト値を適用します。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRecord {
    /// ストアが採番する一意なID
    pub id: String,
    /// 日付（ISO-8601形式の暦日、例: "2024-06-15"）
    pub date: String,
    /// ステータスの生コード（pending / accepted / refused）
    pub status: String,
    /// 金額
    #[serde(default)]
    pub amount: f64,
    /// 経費の名称
    #[serde(default)]
    pub name: String,
    /// 付加価値税（未設定時は空文字列）
    #[serde(default)]
    pub vat: String,
    /// パーセンテージ
    #[serde(default)]
    pub pct: Option<u32>,
    /// コメント
    #[serde(default)]
    pub commentary: Option<String>,
    /// 添付ファイル（justificatif）のURL（アップロード後に設定される）
    #[serde(rename = "fileUrl", default)]
    pub file_url: String,
    /// 添付ファイル名
    #[serde(rename = "fileName", default)]
    pub file_name: String,
    /// 提出したユーザーのメールアドレス
    #[serde(default)]
    pub email: String,
    /// 経費カテゴリ
    #[serde(rename = "type", default)]
    pub expense_type: String,
}

/// 表示用の請求データ
///
/// `BillRecord` の `date` と `status` を人間向けの表示値に置き換えた形状です。
/// 不変条件: `status` は必ず表示ラベルに置換される（未知のコードは
/// デフォルトラベルに落ちる）。`date` は整形に成功した場合のみ置換され、
/// 失敗時は元の生の値を保持する。
#[derive(Debug, Clone, Serialize)]
pub struct DisplayBill {
    pub id: String,
    /// 表示用に整形された日付（整形に失敗した場合は元の生の値）
    pub date: String,
    /// ステータスの表示ラベル
    pub status: String,
    pub amount: f64,
    pub name: String,
    pub vat: String,
    pub pct: Option<u32>,
    pub commentary: Option<String>,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_record_deserialization() {
        // ワイヤ形状（キャメルケース）からのデシリアライゼーションテスト
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "date": "2004-04-04",
            "status": "pending",
            "amount": 400,
            "name": "encore",
            "vat": "80",
            "pct": 20,
            "commentary": "séminaire billed",
            "fileUrl": "https://test.storage.tld/justificatif.jpg",
            "fileName": "preview-facture.jpg",
            "email": "a@a",
            "type": "Hôtel et logement"
        }"#;

        let record: BillRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(record.status, "pending");
        assert_eq!(record.amount, 400.0);
        assert_eq!(record.pct, Some(20));
        assert_eq!(record.file_url, "https://test.storage.tld/justificatif.jpg");
        assert_eq!(record.expense_type, "Hôtel et logement");
    }

    #[test]
    fn test_partial_record_still_deserializes() {
        // リモート側の不完全なレコード（必須以外のフィールド欠落）も読み込める
        let json = r#"{
            "id": "test-id",
            "date": "invalid-date",
            "status": "pending",
            "amount": 100,
            "name": "test"
        }"#;

        let record: BillRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "test-id");
        assert_eq!(record.date, "invalid-date");
        assert_eq!(record.vat, "");
        assert_eq!(record.pct, None);
        assert_eq!(record.file_url, "");
        assert_eq!(record.email, "");
    }

    #[test]
    fn test_bill_record_serialization_uses_wire_names() {
        let record = BillRecord {
            id: "1".to_string(),
            date: "2024-01-15".to_string(),
            status: "pending".to_string(),
            amount: 50.0,
            name: "Taxi".to_string(),
            vat: "10".to_string(),
            pct: Some(20),
            commentary: None,
            file_url: "https://test.storage.tld/file.jpg".to_string(),
            file_name: "file.jpg".to_string(),
            email: "employee@test.tld".to_string(),
            expense_type: "Transports".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"fileUrl\""));
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"type\":\"Transports\""));
    }

    #[test]
    fn test_expense_types_enumeration() {
        // 経費カテゴリは表示層のセレクトボックスと共有する固定の一覧
        assert_eq!(EXPENSE_TYPES.len(), 7);
        assert!(EXPENSE_TYPES.contains(&"Transports"));
        assert!(EXPENSE_TYPES.contains(&"Restaurants et bars"));
        assert!(EXPENSE_TYPES.contains(&"Fournitures de bureau"));
    }
}
