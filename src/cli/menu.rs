/// Menu actions, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    ListBooks,
    SearchBook,
    AddMember,
    ListMembers,
    BorrowBook,
    ListBorrowedBooks,
    ReturnBook,
    CalculateFines,
    ShowMemberBooks,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::AddBook,
        MenuChoice::ListBooks,
        MenuChoice::SearchBook,
        MenuChoice::AddMember,
        MenuChoice::ListMembers,
        MenuChoice::BorrowBook,
        MenuChoice::ListBorrowedBooks,
        MenuChoice::ReturnBook,
        MenuChoice::CalculateFines,
        MenuChoice::ShowMemberBooks,
        MenuChoice::Exit,
    ];

    /// Map a 1-based menu number to its action.
    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| choice == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add a book",
            MenuChoice::ListBooks => "List books",
            MenuChoice::SearchBook => "Search for a book",
            MenuChoice::AddMember => "Add a member",
            MenuChoice::ListMembers => "List members",
            MenuChoice::BorrowBook => "Borrow a book",
            MenuChoice::ListBorrowedBooks => "List borrowed books",
            MenuChoice::ReturnBook => "Return a book",
            MenuChoice::CalculateFines => "Calculate overdue fines",
            MenuChoice::ShowMemberBooks => "Show a member's borrowed books",
            MenuChoice::Exit => "Exit",
        }
    }
}
