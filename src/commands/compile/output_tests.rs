//! Output formatting tests for compile command.

#[cfg(test)]
mod tests {
    use super::super::execute::CompileResult;
    use crate::compiler::compile_all;
    use crate::diagnostics::DiagnosticSummary;
    use crate::fixtures;
    use crate::output::OutputFormat;
    use crate::test_utils::build_fixture;
    use rstest::{fixture, rstest};

    const EMPTY_TABLE_OUTPUT: &str = "\
Compile: manifest.json

No queries compiled.

Errors: 0, Warnings: 0";

    const CYCLE_TABLE_OUTPUT: &str = "\
Compile: manifest.json

App.A [K]
  FAILED SOQL006 error: Cyclic dependency detected in object 'A' with Key 'K'
App.B [K]
  FAILED SOQL006 error: Cyclic dependency detected in object 'B' with Key 'K'
App.C [K]
  SELECT Name FROM C

Errors: 2, Warnings: 0";

    const WARNING_TABLE_OUTPUT: &str = "\
Compile: manifest.json

App.User [K]
  SELECT Username FROM User

Errors: 0, Warnings: 1

Diagnostics (1):
  SOQL005 warning: Class 'App.Empty' with Key 'K' has no associated SoqlField declarations (at Empty.cs:3:2)";

    fn result_for(json: &str) -> CompileResult {
        let output = build_fixture(json);
        let compiled = compile_all(&output.graph);
        let summary = DiagnosticSummary::from_diagnostics(
            output
                .diagnostics
                .iter()
                .chain(compiled.iter().filter_map(|c| c.diagnostic())),
        );
        CompileResult {
            manifest: "manifest.json".to_string(),
            summary,
            diagnostics: output.diagnostics,
            compiled,
        }
    }

    #[fixture]
    fn empty_result() -> CompileResult {
        CompileResult {
            manifest: "manifest.json".to_string(),
            ..Default::default()
        }
    }

    #[fixture]
    fn cycle_result() -> CompileResult {
        result_for(fixtures::CYCLE)
    }

    #[fixture]
    fn warning_result() -> CompileResult {
        result_for(fixtures::OBJECT_WITHOUT_FIELDS)
    }

    #[fixture]
    fn accounts_result() -> CompileResult {
        result_for(fixtures::ACCOUNTS)
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: CompileResult,
        expected: EMPTY_TABLE_OUTPUT,
    }

    crate::output_table_test! {
        test_name: test_to_table_with_failures,
        fixture: cycle_result,
        fixture_type: CompileResult,
        expected: CYCLE_TABLE_OUTPUT,
    }

    crate::output_table_test! {
        test_name: test_to_table_with_diagnostics,
        fixture: warning_result,
        fixture_type: CompileResult,
        expected: WARNING_TABLE_OUTPUT,
    }

    crate::output_table_contains_test! {
        test_name: test_to_table_nested_query,
        fixture: accounts_result,
        fixture_type: CompileResult,
        contains: [
            "App.Account [MyQuery]",
            "(SELECT LastName, CreatedDate FROM Contacts)",
            "Owner.Username",
        ],
    }

    #[rstest]
    fn test_format_json(cycle_result: CompileResult) {
        use crate::output::Outputable;
        let parsed: serde_json::Value = serde_json::from_str(&cycle_result.format(OutputFormat::Json)).unwrap();

        assert_eq!(parsed["summary"]["errors"], 2);
        let compiled = parsed["compiled"].as_array().unwrap();
        assert_eq!(compiled.len(), 3);
        assert_eq!(compiled[0]["status"], "failed");
        assert_eq!(compiled[0]["diagnostic"]["kind"], "CyclicDependency");
        assert_eq!(compiled[2]["status"], "query");
        assert_eq!(compiled[2]["text"], "SELECT Name FROM C");
        assert_eq!(compiled[2]["plan"]["fields"][0]["json_key"], "Name");
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: cycle_result,
        fixture_type: CompileResult,
        contains: ["compiled[3]", "SOQL006"],
    }
}
