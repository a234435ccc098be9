/// 添付ファイルが拒否されたときにユーザーへ表示するメッセージ
pub const INVALID_ATTACHMENT_MESSAGE: &str =
    "Please select a valid image file (JPG, JPEG, or PNG)";

/// 受理する拡張子（小文字で比較する）
const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 受理するメディアタイプ
const ACCEPTED_MEDIA_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// 添付ファイル候補が受理可能かを判定する
///
/// ファイル名の最後のドット区切りセグメントを拡張子として扱い
/// （大文字小文字は区別しない）、拡張子とメディアタイプの両方が
/// 画像（jpg / jpeg / png）を示す場合のみ受理します。純粋な述語で
/// あり、副作用もI/Oもありません。
///
/// # 引数
/// * `file_name` - 候補ファイルの名前
/// * `media_type` - 候補ファイルのメディアタイプ
///
/// # 戻り値
/// 受理可能な場合はtrue
pub fn is_acceptable(file_name: &str, media_type: &str) -> bool {
    let extension = file_name.rsplit('.').next().unwrap_or("").to_lowercase();

    ACCEPTED_EXTENSIONS.contains(&extension.as_str())
        && ACCEPTED_MEDIA_TYPES.contains(&media_type)
}
