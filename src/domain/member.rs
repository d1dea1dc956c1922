use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MemberId;

/// 会員 - 会員名簿が所有するレコード
///
/// `active`は会員管理側で切り替えられる。無効な会員は貸出不可。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub joined_date: NaiveDate,
    pub active: bool,
}

impl Member {
    /// 新規登録（有効状態）
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        email: impl Into<String>,
        joined_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            joined_date,
            active: true,
        }
    }
}
