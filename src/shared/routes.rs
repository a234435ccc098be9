/// 画面遷移の宛先を表す列挙型
///
/// コアロジックは画面遷移そのものを行わず、注入されたコールバックに
/// 宛先を渡すだけです。ルーティングの実装は表示層の責務です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// 請求一覧画面
    Bills,
    /// 新規請求の作成画面
    NewBill,
}

impl Destination {
    /// 宛先に対応するルート識別子を取得する
    ///
    /// # 戻り値
    /// 表示層のルーターが解釈するルート識別子
    pub fn route_path(&self) -> &'static str {
        match self {
            Destination::Bills => "#employee/bills",
            Destination::NewBill => "#employee/bill/new",
        }
    }
}

/// 画面遷移コールバックの型
///
/// 提出完了時などに宛先を渡して一度だけ呼び出されます。
pub type Navigator = Box<dyn Fn(Destination) + Send + Sync>;
