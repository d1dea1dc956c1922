use chrono::NaiveDate;

use super::errors::Result;
use crate::domain::{Member, value_objects::MemberId};

/// 会員名簿ポート
///
/// 会員レコードを排他的に所有する。
pub trait Roster: Send + Sync {
    /// 会員を登録する
    ///
    /// 有効状態（active=true）で保存し、発行したIDを返す。
    fn register(&mut self, name: &str, email: &str, joined_date: NaiveDate) -> MemberId;

    /// IDで会員を取得する
    fn get(&self, id: &MemberId) -> Option<Member>;

    /// 会員が有効か確認する
    ///
    /// # エラー
    /// 存在しないIDの場合は`StoreError::MemberNotFound`
    fn is_active(&self, id: &MemberId) -> Result<bool>;

    /// 会員の有効/無効を切り替える
    ///
    /// # エラー
    /// 存在しないIDの場合は`StoreError::MemberNotFound`
    fn set_active(&mut self, id: &MemberId, active: bool) -> Result<()>;

    /// 登録会員数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
