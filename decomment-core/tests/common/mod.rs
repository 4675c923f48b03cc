//! Test helpers
//!
//! Shared helpers for the scanner integration suites.

#![allow(dead_code)]

use decomment_core::CommentScanner;

/// Strip comments with a fresh scanner, logging to the test writer
pub fn strip(source: &str) -> String {
    init_test_logger();
    CommentScanner::new().transform(source)
}

/// Number of `\n` characters
pub fn line_count(text: &str) -> usize {
    text.matches('\n').count()
}

/// Assert that stripping leaves `source` untouched
pub fn assert_unchanged(source: &str) {
    assert_eq!(strip(source), source, "expected no change for {:?}", source);
}

/// Initialise a debug-level subscriber that prints through the test harness
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Comment-free inputs covering every literal form
pub const CLEAN_SOURCES: &[&str] = &[
    "",
    "class A {}\n",
    "int d = a / b;\n",
    "String s = \"// in string\";\n",
    "String s = \"/* in string */\";\n",
    "char c = '/'; char d = '*';\n",
    "String e = \"He said \\\"hi // there\\\"\";\n",
    "String t = \"\"\"\n  // text\n  /* block */\n  \"\"\";\n",
    "String u = \"https://example.com/a//b\";\n",
    "see http://example.com\n",
    "s = \"\"\"x\";\n",
    "\r\nint a;\r\n",
];

/// Inputs containing comments, unterminated constructs and odd endings
pub const NOISY_SOURCES: &[&str] = &[
    "int x = 1; // comment\n",
    "a();\n/* line1\nline2 */\nb();\n",
    "/**\n * doc\n */\nclass A {}\n",
    "a; // one\r\n/* two\r\nthree */\r\nb;\r\n",
    "/* never closed\n\n",
    "// c\nString s = \"never closed // \n x;\n",
    "/* a */String t = \"\"\"\n never closed // x\n",
    "char c = '\\'' ; // tail",
    "x = 1; /* a */ /* b\n */ // c\n// d",
];
