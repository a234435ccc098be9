use serde::{Deserialize, Serialize};

/// ユーザーの種別を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserKind {
    /// 一般従業員
    Employee,
    /// 管理者
    Admin,
}

/// セッションコンテキスト（読み取り専用）
///
/// 表示層が保持する認証済みユーザー情報のうち、コアロジックが
/// 必要とする部分だけを切り出した値です。グローバルな参照は行わず、
/// サービスの構築時に明示的に渡します。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    /// ユーザー種別
    #[serde(rename = "type")]
    pub kind: UserKind,
    /// メールアドレス（提出される請求に記録される）
    pub email: String,
}

impl UserSession {
    /// 新しいセッションコンテキストを作成する
    ///
    /// # 引数
    /// * `kind` - ユーザー種別
    /// * `email` - メールアドレス
    pub fn new<S: Into<String>>(kind: UserKind, email: S) -> Self {
        Self {
            kind,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_deserialization_from_stored_shape() {
        // 表示層が保存しているJSON形状（typeフィールド）と互換であることを確認
        let json = r#"{"type":"Employee","email":"employee@test.tld"}"#;
        let session: UserSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.kind, UserKind::Employee);
        assert_eq!(session.email, "employee@test.tld");
    }

    #[test]
    fn test_session_serialization_uses_type_field() {
        let session = UserSession::new(UserKind::Admin, "admin@test.tld");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"type\":\"Admin\""));
        assert!(json.contains("\"email\":\"admin@test.tld\""));
    }
}
