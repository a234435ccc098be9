use crate::features::bills::formatter::{format_date, format_status};
use crate::features::bills::models::{BillRecord, DisplayBill};
use crate::features::bills::store::BillStore;
use crate::features::session::UserSession;
use crate::shared::errors::AppResult;
use chrono::NaiveDate;
use log::{debug, error};
use std::cmp::Ordering;
use std::sync::Arc;

/// 請求一覧の取得と正規化を行うサービス
///
/// 注入されたストアから生のレコードを取得し、レコード単位の
/// 失敗回復を行いながら表示値に整形し、並び替えて返します。
pub struct BillsService {
    store: Arc<dyn BillStore>,
    session: UserSession,
}

impl BillsService {
    /// 新しいサービスを作成する
    ///
    /// # 引数
    /// * `store` - 請求ストア
    /// * `session` - セッションコンテキスト
    pub fn new(store: Arc<dyn BillStore>, session: UserSession) -> Self {
        Self { store, session }
    }

    /// 請求一覧を取得する
    ///
    /// # 処理内容
    /// 1. ストアから生のレコード一覧を取得する（拒否はそのまま伝播する）
    /// 2. 元の生の日付値で降順に並び替える（安定ソート）
    /// 3. 各レコードを独立に表示値へ整形する。日付の整形に失敗した
    ///    レコードは元の値を保持し、診断ログを出力して処理を継続する
    ///
    /// # 戻り値
    /// 表示用の請求一覧。要素数は常にストアが返した一覧と一致します。
    pub async fn get_bills(&self) -> AppResult<Vec<DisplayBill>> {
        debug!("請求一覧を取得します: user={}", self.session.email);

        let mut records = self.store.list().await?;
        records.sort_by(compare_by_raw_date_descending);

        let bills = records.into_iter().map(to_display_bill).collect();
        Ok(bills)
    }
}

/// 元の生の日付値による降順比較
///
/// 解釈可能な日付同士は新しい順に並べる。解釈できない日付は
/// 解釈可能なものの後ろに置き、解釈できないもの同士は生の文字列の
/// 降順で比較する。同値は安定ソートにより元の並び順を保つ。
fn compare_by_raw_date_descending(a: &BillRecord, b: &BillRecord) -> Ordering {
    let parsed_a = NaiveDate::parse_from_str(&a.date, "%Y-%m-%d");
    let parsed_b = NaiveDate::parse_from_str(&b.date, "%Y-%m-%d");

    match (parsed_a, parsed_b) {
        (Ok(date_a), Ok(date_b)) => date_b.cmp(&date_a),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        // 解釈できない日付同士は生の文字列で比較する（観測された挙動の維持）
        (Err(_), Err(_)) => b.date.cmp(&a.date),
    }
}

/// 生のレコードを表示用に整形する
///
/// ステータスは必ず表示ラベルに置換する（失敗しない）。日付は整形に
/// 失敗した場合、元の値を保持して診断ログを出力する。1件の不正な
/// レコードが一覧全体の表示を妨げることはない。
fn to_display_bill(record: BillRecord) -> DisplayBill {
    let status = format_status(&record.status);
    let date = match format_date(&record.date) {
        Ok(formatted) => formatted,
        Err(e) => {
            error!("{e} for {record:?}");
            record.date.clone()
        }
    };

    DisplayBill {
        id: record.id,
        date,
        status,
        amount: record.amount,
        name: record.name,
        vat: record.vat,
        pct: record.pct,
        commentary: record.commentary,
        file_url: record.file_url,
        file_name: record.file_name,
        email: record.email,
        expense_type: record.expense_type,
    }
}
