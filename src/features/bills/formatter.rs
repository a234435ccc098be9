use crate::shared::errors::DataFormatError;
use chrono::{Datelike, NaiveDate};

/// 表示用のフランス語月略称（3文字 + ピリオド）
///
/// juin と juillet はどちらも "Jui" に丸められる。既存の表示仕様を
/// そのまま引き継いだ挙動であり、並び替えには使用しない。
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// 保存形式（ISO-8601の暦日）
const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 日付を表示用に整形する
///
/// 保存形式（例: "2004-04-04"）を表示規約（例: "4 Avr. 04"）に変換します。
/// 日は先頭ゼロなし、月は3文字の略称、年は下2桁です。表示専用であり、
/// 並び替えには常に元の生の値を使用します。
///
/// # 引数
/// * `raw` - 保存形式の日付文字列
///
/// # 戻り値
/// 表示用に整形された日付、または解釈できない場合は `DataFormatError`
pub fn format_date(raw: &str) -> Result<String, DataFormatError> {
    let date = NaiveDate::parse_from_str(raw, STORAGE_DATE_FORMAT)
        .map_err(|_| DataFormatError::new(raw))?;

    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    Ok(format!("{} {}. {:02}", date.day(), month, date.year() % 100))
}

/// ステータスの生コードを表示ラベルに変換する
///
/// 全域写像であり、決して失敗しません。未知のコードは安定した
/// デフォルトラベルに落ちます。
///
/// # 引数
/// * `raw` - ステータスの生コード
///
/// # 戻り値
/// 表示ラベル
pub fn format_status(raw: &str) -> String {
    match raw {
        "pending" => "En attente",
        "accepted" => "Accepté",
        "refused" => "Refusé",
        _ => "Inconnu",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_display_convention() {
        // 日は先頭ゼロなし、月は3文字略称、年は下2桁
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2023-01-01").unwrap(), "1 Jan. 23");
        assert_eq!(format_date("2024-06-15").unwrap(), "15 Jui. 24");
        assert_eq!(format_date("2021-11-30").unwrap(), "30 Nov. 21");
    }

    #[test]
    fn test_format_date_leap_day() {
        assert_eq!(format_date("2024-02-29").unwrap(), "29 Fév. 24");
    }

    #[test]
    fn test_format_date_rejects_unparsable_input() {
        // 解釈できない入力は元の値を保持したエラーになる
        let error = format_date("invalid-date").unwrap_err();
        assert_eq!(error.raw, "invalid-date");

        assert!(format_date("").is_err());
        assert!(format_date("2023-13-01").is_err());
        assert!(format_date("2023-02-30").is_err());
    }

    #[test]
    fn test_format_status_known_codes() {
        assert_eq!(format_status("pending"), "En attente");
        assert_eq!(format_status("accepted"), "Accepté");
        assert_eq!(format_status("refused"), "Refusé");
    }

    #[test]
    fn test_format_status_unknown_code_falls_back_to_default() {
        // 未知のコードは空でない安定したデフォルトラベルに落ちる
        assert_eq!(format_status("archived"), "Inconnu");
        assert_eq!(format_status(""), "Inconnu");
        assert!(!format_status("whatever").is_empty());
    }
}
