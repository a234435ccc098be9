/// 機能モジュール
///
/// アプリケーションの機能を領域ごとにまとめたモジュール群です。
pub mod bills;
pub mod new_bill;
pub mod session;
