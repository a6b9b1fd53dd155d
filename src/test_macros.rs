//! Declarative macros for generating CLI parsing and output tests.
//!
//! Instead of writing repetitive test functions, declare the test cases and
//! let the macro generate the actual test code.

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "check",
///     test_name: test_requires_manifest,
///     required_arg: "--manifest",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["soql_gen", $cmd]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     command: "compile",
///     test_name: test_manifest_must_exist,
///     args: ["--manifest", "nonexistent.json"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "soql_gen",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

/// Generate a test comparing formatted output against an expected string.
///
/// Without `format:` the table rendering is compared.
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json, Toon)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies table output contains expected strings.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let output = $fixture.to_table();
            $(
                assert!(output.contains($needle), concat!("Table output should contain: ", $needle));
            )*
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: warning_result,
///     fixture_type: CheckResult,
///     assertions: {
///         "objects": 1,
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
