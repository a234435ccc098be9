use crate::features::bills::store::{AttachmentPayload, BillStore, BillUpdate, UploadReference};
use crate::features::new_bill::models::{BillForm, NewBillDto};
use crate::features::new_bill::validator::{is_acceptable, INVALID_ATTACHMENT_MESSAGE};
use crate::features::session::UserSession;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::routes::{Destination, Navigator};
use log::{info, warn};
use std::sync::Arc;

/// 提出フローの状態
///
/// 1回のフォーム操作のライフサイクルを表します。`Idle` が初期状態、
/// `Submitted` が終端状態です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// 初期状態（有効な添付ファイルが未選択）
    Idle,
    /// 添付ファイルのアップロード中
    AttachmentPending,
    /// アップロード完了（提出可能）
    AttachmentUploaded,
    /// 提出完了（終端状態）
    Submitted,
}

/// 選択された添付ファイル
#[derive(Debug, Clone)]
struct SelectedAttachment {
    file_name: String,
}

/// 新規請求の提出フロー
///
/// 添付ファイルの検証とアップロード（create）、フォーム提出時の
/// レコード組み立てと永続化（update）、完了後の画面遷移を統括します。
/// ストア・セッション・画面遷移コールバックはすべて構築時に注入されます。
pub struct NewBillSubmission {
    store: Arc<dyn BillStore>,
    session: UserSession,
    navigate: Navigator,
    state: SubmissionState,
    attachment: Option<SelectedAttachment>,
    upload: Option<UploadReference>,
}

impl NewBillSubmission {
    /// 新しい提出フローを作成する
    ///
    /// # 引数
    /// * `store` - 請求ストア
    /// * `session` - セッションコンテキスト
    /// * `navigate` - 提出完了時に呼び出される画面遷移コールバック
    pub fn new(store: Arc<dyn BillStore>, session: UserSession, navigate: Navigator) -> Self {
        Self {
            store,
            session,
            navigate,
            state: SubmissionState::Idle,
            attachment: None,
            upload: None,
        }
    }

    /// 現在の状態を取得する
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// 添付ファイルを選択する
    ///
    /// 検証に失敗した場合は候補を破棄し、ユーザー向けメッセージを
    /// エラーとして返します（ストアへの呼び出しは一切行わない）。
    /// 受理済みの選択がある場合、そのドラフトは提出可能なまま残ります。
    /// 検証を通過した場合は直ちにアップロード（create）を発行し、
    /// 成功時に返されたアップロード参照を保持します。
    ///
    /// # 引数
    /// * `file_name` - 候補ファイルの名前
    /// * `media_type` - 候補ファイルのメディアタイプ
    /// * `content` - ファイルの内容
    pub async fn select_attachment(
        &mut self,
        file_name: &str,
        media_type: &str,
        content: Vec<u8>,
    ) -> AppResult<()> {
        if self.state == SubmissionState::Submitted {
            return Err(AppError::validation("la note de frais a déjà été envoyée"));
        }

        if !is_acceptable(file_name, media_type) {
            // 候補は破棄される。受理済みの選択（self.attachment）には触れないため、
            // アップロード完了済みのドラフトはそのまま提出可能なまま残る。
            warn!("添付ファイルを拒否しました: file_name={file_name}, media_type={media_type}");
            return Err(AppError::validation(INVALID_ATTACHMENT_MESSAGE));
        }

        self.attachment = Some(SelectedAttachment {
            file_name: file_name.to_string(),
        });
        self.state = SubmissionState::AttachmentPending;

        let payload = AttachmentPayload {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
            content,
            email: self.session.email.clone(),
        };
        let reference = self.store.create(payload).await?;

        info!(
            "添付ファイルのアップロードが完了しました: file_name={file_name}, key={}",
            reference.key
        );
        self.upload = Some(reference);
        self.state = SubmissionState::AttachmentUploaded;
        Ok(())
    }

    /// フォームを提出する
    ///
    /// アップロード済みの添付ファイル参照が存在する場合のみ進行します。
    /// フォーム値・アップロード参照・セッションのメールアドレスから
    /// レコードを組み立てて永続化（update）し、成功時に画面遷移
    /// コールバックを一度だけ呼び出します。失敗時はエラーが伝播し、
    /// 画面遷移は発生しません。
    ///
    /// # 引数
    /// * `form` - フォームの入力値
    pub async fn submit(&mut self, form: BillForm) -> AppResult<()> {
        if self.state != SubmissionState::AttachmentUploaded {
            return Err(AppError::validation(
                "aucun justificatif n'a été téléversé pour cette note de frais",
            ));
        }

        // AttachmentUploaded 状態では必ず両方が存在する
        let upload = self
            .upload
            .as_ref()
            .ok_or_else(|| AppError::validation("référence de justificatif manquante"))?;
        let attachment = self
            .attachment
            .as_ref()
            .ok_or_else(|| AppError::validation("justificatif manquant"))?;

        let dto = NewBillDto::from_parts(
            &form,
            &upload.file_url,
            &attachment.file_name,
            &self.session.email,
        );
        let data = serde_json::to_string(&dto)?;
        let selector = upload.key.clone();

        self.store.update(BillUpdate { data, selector }).await?;

        info!(
            "新規請求の提出が完了しました: name={}, user={}",
            dto.name, self.session.email
        );
        self.state = SubmissionState::Submitted;
        (self.navigate)(Destination::Bills);
        Ok(())
    }
}
