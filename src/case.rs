/// Separator placed between SQL fragments
pub const SQL_SEPARATOR: &str = " ";

/// Separator placed between expected output lines
pub const EXPECTED_SEPARATOR: &str = "\n";

/// A named SQL query and the exact output the engine must produce for it
///
/// The SQL is kept as fragments and the expected output as lines so cases
/// read naturally when declared. Both sides are joined in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase<'a> {
    pub name: &'a str,
    pub sql: &'a [&'a str],
    pub expected: &'a [&'a str],
}

impl<'a> TestCase<'a> {
    pub const fn new(name: &'a str, sql: &'a [&'a str], expected: &'a [&'a str]) -> Self {
        Self {
            name,
            sql,
            expected,
        }
    }

    /// The text submitted to the engine, fragments joined by single spaces
    pub fn sql_text(&self) -> String {
        self.sql.join(SQL_SEPARATOR)
    }

    /// The text the engine output is compared against, lines joined by
    /// single newlines
    ///
    /// A case with no expected lines expects the engine to print nothing.
    pub fn expected_text(&self) -> String {
        self.expected.join(EXPECTED_SEPARATOR)
    }
}
