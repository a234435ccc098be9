// HTTPバックエンドに対する請求ストアの実装

use crate::features::bills::models::BillRecord;
use crate::features::bills::store::{AttachmentPayload, BillStore, BillUpdate, UploadReference};
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{multipart, Client, Response, StatusCode};
use std::time::Duration;

/// HTTPバックエンドを利用する請求ストア
///
/// `BillStore` 契約のリモート実装です。失敗したリクエストの
/// リトライは行いません。発行された呼び出しは完了または拒否まで
/// 実行されます。
pub struct ApiBillStore {
    client: Client,
    config: ApiConfig,
}

impl ApiBillStore {
    /// 設定を指定してストアを作成する
    ///
    /// # 引数
    /// * `config` - API接続設定
    ///
    /// # 戻り値
    /// ストアのインスタンス、またはHTTPクライアントの初期化に失敗した場合はエラー
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// 環境変数の設定からストアを作成する
    pub fn from_env() -> AppResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// レスポンスのステータスを確認し、失敗時はエラーに変換する
    ///
    /// 表示層はエラーメッセージの文字列照合（"Erreur 404" など）を
    /// 行うため、メッセージ形式は固定です。
    fn ensure_success(response: &Response) -> AppResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AppError::external_service(format!(
                "Erreur {}",
                status.as_u16()
            )))
        }
    }

    /// 接続エラーをアプリケーションエラーに変換する
    fn connection_error(error: reqwest::Error) -> AppError {
        if let Some(status) = error.status() {
            return AppError::external_service(format!("Erreur {}", status.as_u16()));
        }
        if error.is_timeout() {
            return AppError::external_service(format!(
                "Erreur {}",
                StatusCode::GATEWAY_TIMEOUT.as_u16()
            ));
        }
        AppError::external_service(format!("Erreur de connexion au serveur: {error}"))
    }
}

#[async_trait]
impl BillStore for ApiBillStore {
    async fn list(&self) -> AppResult<Vec<BillRecord>> {
        let url = format!("{}/bills", self.config.base_url);
        debug!("請求一覧を取得します: url={url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::connection_error)?;
        Self::ensure_success(&response)?;

        let records: Vec<BillRecord> = response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("réponse illisible: {e}")))?;

        info!("請求一覧の取得に成功しました: count={}", records.len());
        Ok(records)
    }

    async fn create(&self, payload: AttachmentPayload) -> AppResult<UploadReference> {
        let url = format!("{}/bills", self.config.base_url);
        info!(
            "添付ファイルのアップロードを開始します: file_name={}",
            payload.file_name
        );

        let part = multipart::Part::bytes(payload.content)
            .file_name(payload.file_name)
            .mime_str(&payload.media_type)
            .map_err(|e| AppError::validation(format!("メディアタイプが不正です: {e}")))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", payload.email);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(Self::connection_error)?;
        Self::ensure_success(&response)?;

        let reference: UploadReference = response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("réponse illisible: {e}")))?;

        info!(
            "添付ファイルのアップロードに成功しました: key={}",
            reference.key
        );
        Ok(reference)
    }

    async fn update(&self, update: BillUpdate) -> AppResult<()> {
        let url = format!("{}/bills/{}", self.config.base_url, update.selector);
        info!("請求レコードを更新します: selector={}", update.selector);

        let response = self
            .client
            .patch(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(update.data)
            .send()
            .await
            .map_err(Self::connection_error)?;
        Self::ensure_success(&response)?;

        info!("請求レコードの更新に成功しました: selector={}", update.selector);
        Ok(())
    }
}
