use chrono::{Local, NaiveDate};
use std::future::Future;
use std::io::{ErrorKind, Write};
use std::pin::Pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::application::{ServiceDependencies, catalog, loan, membership};
use crate::domain::commands::{AddBook, AddMember, BorrowBook, ReturnBook};
use crate::domain::{BookId, MemberId};

use super::errors::CliError;
use super::menu::MenuChoice;
use super::render;

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the exit entry.
    Exit,
    /// The shutdown signal fired while waiting for input.
    Interrupted,
    /// The input stream was closed.
    EndOfInput,
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over a line-oriented reader and a writer.
///
/// Each action runs to completion before the next line is read. The shutdown
/// future is only raced against input reads, so an interrupt never lands in
/// the middle of an operation.
pub struct Session<'a, R, W> {
    deps: &'a ServiceDependencies,
    lines: Lines<R>,
    out: W,
    shutdown: Pin<Box<dyn Future<Output = ()> + 'a>>,
    today: Box<dyn Fn() -> NaiveDate + 'a>,
}

impl<'a, R, W> Session<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(deps: &'a ServiceDependencies, reader: R, out: W) -> Self {
        Self {
            deps,
            lines: reader.lines(),
            out,
            shutdown: Box::pin(std::future::pending()),
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Future that ends the session when it resolves (e.g. Ctrl-C).
    pub fn with_shutdown(mut self, shutdown: impl Future<Output = ()> + 'a) -> Self {
        self.shutdown = Box::pin(shutdown);
        self
    }

    /// Source of "today" for borrow dates and fine calculation.
    pub fn with_today(mut self, today: impl Fn() -> NaiveDate + 'a) -> Self {
        self.today = Box::new(today);
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run(&mut self) -> Result<SessionEnd, CliError> {
        loop {
            writeln!(self.out, "{}", render::menu())?;

            match self.next_action().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    writeln!(self.out, "Exiting the library catalog.")?;
                    return Ok(SessionEnd::Exit);
                }
                Err(err) => {
                    if let Some(end) = self.report(err)? {
                        return Ok(end);
                    }
                }
            }
        }
    }

    async fn next_action(&mut self) -> Result<Flow, CliError> {
        let input = self.prompt("\nSelect an option (1-11): ").await?;
        let number: i64 = parse_number(&input)?;

        let Some(choice) = MenuChoice::from_number(number) else {
            writeln!(
                self.out,
                "Invalid choice. Please enter a number from 1 to 11."
            )?;
            return Ok(Flow::Continue);
        };

        tracing::debug!(?choice, "menu selection");
        self.dispatch(choice).await
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, CliError> {
        match choice {
            MenuChoice::AddBook => {
                let book_id = self.prompt("Book ID: ").await?;
                let title = self.prompt("Title: ").await?;
                let author = self.prompt("Author: ").await?;
                let copies = self.prompt("Number of copies: ").await?;
                let copies: u32 = parse_number(&copies)?;

                let cmd = AddBook {
                    book_id: BookId::new(book_id),
                    title,
                    author,
                    copies,
                };
                let book = catalog::add_book(self.deps, cmd).await?;
                writeln!(self.out, "{}", render::book_added(&book))?;
            }

            MenuChoice::ListBooks => {
                let books = catalog::list_books(self.deps).await?;
                if books.is_empty() {
                    writeln!(self.out, "No books are registered.")?;
                } else {
                    writeln!(self.out, "\n--- Books ---")?;
                    for book in &books {
                        writeln!(self.out, "{}", render::book(book))?;
                    }
                }
            }

            MenuChoice::SearchBook => {
                let book_id = self.prompt("Book ID to search: ").await?;
                let book = catalog::search_book(self.deps, &BookId::new(book_id)).await?;
                writeln!(self.out, "\n{}", render::book(&book))?;
            }

            MenuChoice::AddMember => {
                let member_id = self.prompt("Member ID: ").await?;
                let name = self.prompt("Name: ").await?;

                let cmd = AddMember {
                    member_id: MemberId::new(member_id),
                    name,
                };
                let member = membership::add_member(self.deps, cmd).await?;
                writeln!(self.out, "{}", render::member_added(&member))?;
            }

            MenuChoice::ListMembers => {
                let members = membership::list_members(self.deps).await?;
                if members.is_empty() {
                    writeln!(self.out, "No members are registered.")?;
                } else {
                    writeln!(self.out, "\n--- Members ---")?;
                    for summary in &members {
                        writeln!(self.out, "{}", render::member_summary(summary))?;
                    }
                }
            }

            MenuChoice::BorrowBook => {
                let book_id = self.prompt("Book ID to borrow: ").await?;
                let member_id = self.prompt("Member ID: ").await?;

                let cmd = BorrowBook {
                    book_id: BookId::new(book_id),
                    member_id: MemberId::new(member_id),
                    borrowed_on: (self.today)(),
                };
                let receipt = loan::borrow_book(self.deps, cmd).await?;
                writeln!(self.out, "{}", render::borrow_receipt(&receipt))?;
            }

            MenuChoice::ListBorrowedBooks => {
                let rows = loan::list_borrowed_books(self.deps).await?;
                writeln!(self.out, "\n--- Borrowed books ---")?;
                if rows.is_empty() {
                    writeln!(self.out, "No books are currently on loan.")?;
                }
                for row in &rows {
                    writeln!(self.out, "{}", render::borrowed_book(row))?;
                }
            }

            MenuChoice::ReturnBook => {
                let book_id = self.prompt("Book ID to return: ").await?;
                let member_id = self.prompt("Member ID: ").await?;

                let cmd = ReturnBook {
                    book_id: BookId::new(book_id),
                    member_id: MemberId::new(member_id),
                };
                let receipt = loan::return_book(self.deps, cmd).await?;
                writeln!(self.out, "{}", render::return_receipt(&receipt))?;
            }

            MenuChoice::CalculateFines => {
                let fines = loan::calculate_fines(self.deps, (self.today)()).await?;
                writeln!(self.out, "\n--- Overdue fines ---")?;
                if fines.is_empty() {
                    writeln!(self.out, "No loans are overdue.")?;
                }
                for row in &fines {
                    writeln!(self.out, "{}", render::overdue_fine(row))?;
                }
            }

            MenuChoice::ShowMemberBooks => {
                let member_id = self.prompt("Member ID: ").await?;
                let member_loans =
                    loan::show_member_borrowed_books(self.deps, &MemberId::new(member_id)).await?;

                let name = &member_loans.member.name;
                writeln!(self.out, "\n--- Books borrowed by '{name}' ---")?;
                if member_loans.loans.is_empty() {
                    writeln!(self.out, "Member '{name}' has no borrowed books.")?;
                }
                for (record, book) in &member_loans.loans {
                    writeln!(self.out, "{}", render::member_loan(record, book))?;
                }
            }

            MenuChoice::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Print a prompt and wait for the next input line, kept as typed.
    async fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        tokio::select! {
            line = self.lines.next_line() => match line {
                Ok(Some(line)) => Ok(line),
                Ok(None) => Err(CliError::EndOfInput),
                Err(e) if e.kind() == ErrorKind::InvalidData => Err(CliError::InvalidText),
                Err(e) => Err(CliError::Read(e)),
            },
            () = &mut self.shutdown => Err(CliError::Interrupted),
        }
    }

    /// Report a failed action. Returns `Some` when the session has to end.
    fn report(&mut self, err: CliError) -> Result<Option<SessionEnd>, CliError> {
        match err {
            CliError::Interrupted => {
                writeln!(self.out, "\n\nOperation cancelled.")?;
                Ok(Some(SessionEnd::Interrupted))
            }
            CliError::EndOfInput => {
                writeln!(self.out)?;
                Ok(Some(SessionEnd::EndOfInput))
            }
            CliError::Io(e) => Err(CliError::Io(e)),
            CliError::InvalidNumber(input) => {
                tracing::debug!(%input, "rejected non-numeric input");
                writeln!(self.out, "\nInput error: please enter a valid number.")?;
                Ok(None)
            }
            CliError::InvalidText => {
                tracing::debug!("rejected input that is not valid UTF-8");
                writeln!(self.out, "\nInput error: please enter valid text.")?;
                Ok(None)
            }
            err if err.is_unexpected() => {
                let description = describe(&err);
                tracing::error!(error = %description, "operation failed");
                writeln!(self.out, "\nUnexpected error: {description}")?;
                Ok(None)
            }
            err => {
                writeln!(self.out, "{err}")?;
                Ok(None)
            }
        }
    }
}

/// Parse a numeric field, ignoring surrounding whitespace.
fn parse_number<T: std::str::FromStr>(input: &str) -> Result<T, CliError> {
    input
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber(input.to_string()))
}

/// Error message followed by its source chain.
fn describe(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_rejects_negative_copies() {
        assert!(matches!(
            parse_number::<u32>("-1"),
            Err(CliError::InvalidNumber(input)) if input == "-1"
        ));
        assert_eq!(parse_number::<u32>("3").unwrap(), 3);
    }

    #[test]
    fn test_parse_number_ignores_surrounding_whitespace() {
        assert_eq!(parse_number::<i64>(" 7 ").unwrap(), 7);
        assert_eq!(parse_number::<u32>("2\r").unwrap(), 2);
    }

    #[test]
    fn test_read_failure_is_unexpected_but_bad_text_is_not() {
        let err = CliError::Read(std::io::Error::other("device gone"));
        assert!(err.is_unexpected());
        assert_eq!(describe(&err), "failed to read input: device gone");
        assert!(!CliError::InvalidText.is_unexpected());
    }

    #[test]
    fn test_describe_includes_source_chain() {
        let inner: Box<dyn std::error::Error + Send + Sync> = "store unavailable".into();
        let err = CliError::Loan(loan::LoanApplicationError::LoanLedgerError(inner));
        assert_eq!(describe(&err), "Loan ledger error: store unavailable");
    }
}
