//! The conformance cases, run top to bottom against `testing/testing.db`.
//!
//! The fixture holds a `users` table of 10000 rows and a `products` table of
//! 11 rows. Expected output is written exactly as the engine prints it in its
//! default list mode: columns separated by `|`, one row per line.

use crate::case::TestCase;

macro_rules! execsql_test {
    ($name:literal, [$($sql:literal),+ $(,)?], [$($expected:literal),* $(,)?]) => {
        TestCase::new($name, &[$($sql),+], &[$($expected),*])
    };
}

pub static CASES: &[TestCase<'static>] = &[
    // constants and limits
    execsql_test!("select-const-1", ["SELECT 1"], ["1"]),
    execsql_test!("select-const-2", ["SELECT 2"], ["2"]),
    execsql_test!("select-limit-0", ["SELECT id FROM users LIMIT 0"], []),
    execsql_test!("select-limit", ["SELECT id FROM users LIMIT 1"], ["1"]),
    execsql_test!("realify", ["select price from products limit 1"], ["79.0"]),
    execsql_test!(
        "select-add",
        ["select u.age + 1 from users u", "where u.age = 91 limit 1"],
        ["92"]
    ),
    // aggregates
    execsql_test!("select-avg", ["SELECT avg(age) FROM users"], ["50.396"]),
    execsql_test!("select-sum", ["SELECT sum(age) FROM users"], ["503960"]),
    execsql_test!("select-total", ["SELECT total(age) FROM users"], ["503960.0"]),
    execsql_test!("select-count", ["SELECT count(id) FROM users"], ["10000"]),
    execsql_test!("select-max", ["SELECT max(age) FROM users"], ["100"]),
    execsql_test!("select-min", ["SELECT min(age) FROM users"], ["1"]),
    execsql_test!(
        "select-group-concat",
        ["SELECT group_concat(name) FROM products"],
        ["hat,cap,shirt,sweater,sweatshirt,shorts,jeans,sneakers,boots,coat,accessories"]
    ),
    // constant conditions
    execsql_test!("where-clause-no-table-constant-condition-true", ["select 1 where 1"], ["1"]),
    execsql_test!("where-clause-no-table-constant-condition-false", ["select 1 where 0"], []),
    execsql_test!("where-clause-unary-true", ["select count(1) from users where 1"], ["10000"]),
    execsql_test!("where-clause-unary-false", ["select count(1) from users where 0"], ["0"]),
    // rowid lookups and comparisons
    execsql_test!(
        "where-clause-eq",
        ["select last_name from users where id = 2000"],
        ["Rodriguez"]
    ),
    execsql_test!("where-clause-ne", ["select count(1) from users where id != 2000"], ["9999"]),
    execsql_test!("where-clause-gt", ["select count(1) from users where id > 2000"], ["8000"]),
    execsql_test!("where-clause-gte", ["select count(1) from users where id >= 2000"], ["8001"]),
    execsql_test!("where-clause-lt", ["select count(1) from users where id < 2000"], ["1999"]),
    execsql_test!("where-clause-lte", ["select count(1) from users where id <= 2000"], ["2000"]),
    execsql_test!(
        "where-clause-and",
        ["select first_name, age from users", "where first_name = 'Jamie' and age > 80"],
        ["Jamie|94", "Jamie|88", "Jamie|99", "Jamie|92", "Jamie|87", "Jamie|88"]
    ),
    execsql_test!(
        "where-clause-or-rowid",
        ["select id from users", "where id = 1 or id = 2 or id = 3"],
        ["1", "2", "3"]
    ),
    // joins
    execsql_test!(
        "cross-join",
        ["select * from users, products limit 1"],
        ["1|Jamie|Foster|dylan00@example.com|496-522-9493|62375 Johnson Rest Suite 322|West Lindsey|Maine|24300|94|1|hat|79.0"]
    ),
    execsql_test!(
        "cross-join-specific-columns",
        ["select first_name, price from users, products limit 1"],
        ["Jamie|79.0"]
    ),
    execsql_test!(
        "cross-join-where-right-tbl",
        [
            "select users.first_name, products.name",
            "from users join products",
            "where products.id = 1 limit 2",
        ],
        ["Jamie|hat", "Cindy|hat"]
    ),
    execsql_test!(
        "inner-join-on",
        [
            "select u.first_name, p.name",
            "from users u join products p on u.id = p.id",
            "limit 3",
        ],
        ["Jamie|hat", "Cindy|cap", "Tommy|shirt"]
    ),
    // pragmas
    execsql_test!("pragma-cache-size", ["PRAGMA cache_size"], ["-2000"]),
];
