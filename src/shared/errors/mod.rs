use thiserror::Error;

/// 日付の整形に失敗したことを表すエラー
///
/// リモートストアから取得したレコードの `date` フィールドが
/// ISO-8601 形式の暦日として解釈できない場合に発生します。
/// 元の文字列を保持し、診断ログに出力できるようにします。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("date invalide: {raw}")]
pub struct DataFormatError {
    /// 解釈できなかった元の日付文字列
    pub raw: String,
}

impl DataFormatError {
    /// 新しい日付整形エラーを作成する
    ///
    /// # 引数
    /// * `raw` - 解釈できなかった元の文字列
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self { raw: raw.into() }
    }
}

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー（添付ファイル選択など、ユーザーに直接表示される）
    #[error("{0}")]
    Validation(String),

    /// データ形式のエラー（日付の整形失敗）
    #[error(transparent)]
    DataFormat(#[from] DataFormatError),

    /// 外部サービス連携でのエラー
    ///
    /// ストアからの拒否理由をそのまま保持します。呼び出し側が
    /// メッセージの文字列照合（"Erreur 404" など）を行うため、
    /// 表示時にも加工しません。
    #[error("{0}")]
    ExternalService(String),

    /// 設定関連のエラー
    #[error("erreur de configuration: {0}")]
    Configuration(String),

    /// JSON解析エラー
    #[error("erreur de sérialisation: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::DataFormat(_) => "Le format de la date est invalide".to_string(),
            AppError::ExternalService(msg) => msg.clone(),
            AppError::Configuration(_) => "Erreur de configuration de l'application".to_string(),
            AppError::Json(_) => "Erreur de traitement des données".to_string(),
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - バリデーションエラーメッセージ
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// 外部サービスエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - エラーメッセージ（そのまま呼び出し側へ伝播する）
    pub fn external_service<S: Into<String>>(message: S) -> Self {
        AppError::ExternalService(message.into())
    }

    /// 設定エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 設定エラーメッセージ
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// AppErrorからStringへの変換（UI層への受け渡しのため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
