use std::fmt::Display;

pub const MEMBER: &str = "メンバー";
pub const BALANCE: &str = "収支";
pub const FROM: &str = "支払人";
pub const TO: &str = "受取人";
pub const AMOUNT: &str = "金額";
pub const TITLE: &str = "項目";
pub const PAYER: &str = "立替者";
pub const SHARED_BY: &str = "負担者";
pub const EVERYONE: &str = "全員";
pub const TOTAL_EXPENSES: &str = "支出合計";
pub const PER_PERSON_SHARE: &str = "一人あたり";
pub const ALL_SETTLED: &str = "すべて精算済みです。";
pub const NO_FRIENDS: &str = "メンバーがいません。";
pub const NO_EXPENSES: &str = "支出がありません。";
pub const UNNAMED_TRIP: &str = "(名称未設定)";
pub const EMPTY_ROSTER: &str = "メンバーがいないため収支はすべて0です";

pub fn expense_skipped(index: usize, title: impl Display, reason: impl Display) -> String {
    format!("支出 #{index} 「{title}」を除外しました: {reason}")
}

pub fn unknown_sharer(index: usize, title: impl Display, name: impl Display) -> String {
    format!("支出 #{index} 「{title}」: '{name}' はメンバーではないため除外しました")
}

pub fn non_positive_amount() -> String {
    "金額は正の数である必要があります".to_string()
}

pub fn unknown_payer(name: impl Display) -> String {
    format!("立替者 '{name}' はメンバーではありません")
}

pub fn unknown_participant(name: impl Display) -> String {
    format!("'{name}' はメンバーではありません")
}

pub fn payer_not_on_roster() -> String {
    "立替者がメンバーではありません".to_string()
}

pub fn empty_shared_by() -> String {
    "負担者を1人以上指定してください".to_string()
}

pub fn no_known_sharers() -> String {
    "負担者にメンバーが含まれていません".to_string()
}

pub fn empty_participant_name() -> String {
    "名前を入力してください".to_string()
}

pub fn duplicate_participant(name: impl Display) -> String {
    format!("'{name}' はすでにメンバーです")
}

pub fn empty_title() -> String {
    "項目名を入力してください".to_string()
}

pub fn no_participant_at(index: usize) -> String {
    format!("{index} 番のメンバーはいません")
}

pub fn no_expense_at(index: usize) -> String {
    format!("{index} 番の支出はありません")
}

pub fn no_settlement_at(index: usize) -> String {
    format!("{index} 番の精算はありません")
}

pub fn corrupt_record(key: impl Display, detail: impl Display) -> String {
    format!("保存データ '{key}' が壊れています: {detail}")
}

pub fn store_failed(detail: impl Display) -> String {
    format!("保存先にアクセスできません: {detail}")
}

pub fn trip_renamed(name: impl Display) -> String {
    format!("旅行名を「{name}」に設定しました")
}

pub fn friend_added(name: impl Display) -> String {
    format!("{name} を追加しました")
}

pub fn friend_removed(name: impl Display) -> String {
    format!("{name} を削除しました")
}

pub fn expense_added(title: impl Display, amount: impl Display) -> String {
    format!("支出「{title}」({amount}) を追加しました")
}

pub fn expense_removed(title: impl Display) -> String {
    format!("支出「{title}」を削除しました")
}

pub fn amount_too_large(max: impl Display) -> String {
    format!("金額は {max} 以下である必要があります")
}

pub fn amount_too_precise() -> String {
    "金額は小数点以下2桁までで入力してください".to_string()
}

pub fn amount_out_of_range() -> String {
    "金額が大きすぎるため収支に加算できません".to_string()
}
