/// 在庫操作のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopiesError {
    /// 貸出可能な冊数がない
    NoCopiesAvailable,
    /// 全冊が在庫にあり、これ以上返却を受け付けられない
    AllCopiesOnShelf,
}

/// 貸出のエラー
///
/// 図書・会員の存在確認はアプリケーション層で行うため、
/// ここには貸出ルール違反のみが含まれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowError {
    /// 在庫切れ
    NoCopiesAvailable,
    /// 会員の貸出冊数が上限に達している
    LoanLimitExceeded { max: usize },
    /// 貸出期間を加えると日付の表現範囲を超える
    DueDateOutOfRange,
}

impl From<CopiesError> for BorrowError {
    fn from(err: CopiesError) -> Self {
        match err {
            CopiesError::NoCopiesAvailable | CopiesError::AllCopiesOnShelf => {
                BorrowError::NoCopiesAvailable
            }
        }
    }
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnError {
    /// 既に返却済み
    AlreadyReturned,
}
