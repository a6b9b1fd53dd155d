//! CLI parsing tests for compile command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::commands::Command;
    use clap::Parser;
    use rstest::{fixture, rstest};
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    #[fixture]
    fn temp_file() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        File::create(&path).unwrap();
        (dir, path)
    }

    fn parse(path: &PathBuf, extra: &[&str]) -> crate::commands::CompileCmd {
        let mut argv = vec!["soql_gen", "compile", "--manifest", path.to_str().unwrap()];
        argv.extend_from_slice(extra);
        match Args::try_parse_from(argv).unwrap().command {
            Command::Compile(cmd) => cmd,
            _ => panic!("Expected Compile command"),
        }
    }

    // =========================================================================
    // Macro-generated tests (standard patterns)
    // =========================================================================

    crate::cli_required_arg_test! {
        command: "compile",
        test_name: test_requires_manifest,
        required_arg: "--manifest",
    }

    crate::cli_error_test! {
        command: "compile",
        test_name: test_manifest_must_exist,
        args: ["--manifest", "nonexistent.json"],
    }

    // =========================================================================
    // Option tests
    // =========================================================================

    #[rstest]
    fn test_defaults(temp_file: (TempDir, PathBuf)) {
        let (_dir, path) = temp_file;
        let cmd = parse(&path, &[]);
        assert_eq!(cmd.manifest, path);
        assert_eq!(cmd.class, None);
        assert_eq!(cmd.key, None);
    }

    #[rstest]
    #[case(&["--class", "App.Account"], Some("App.Account"), None)]
    #[case(&["-c", "App.Account", "-k", "Q"], Some("App.Account"), Some("Q"))]
    #[case(&["--key", "Detail"], None, Some("Detail"))]
    fn test_filter_options(
        temp_file: (TempDir, PathBuf),
        #[case] extra: &[&str],
        #[case] class: Option<&str>,
        #[case] key: Option<&str>,
    ) {
        let (_dir, path) = temp_file;
        let cmd = parse(&path, extra);
        assert_eq!(cmd.class.as_deref(), class);
        assert_eq!(cmd.key.as_deref(), key);
    }

    #[rstest]
    fn test_global_options_after_subcommand(temp_file: (TempDir, PathBuf)) {
        let (_dir, path) = temp_file;
        let args = Args::try_parse_from([
            "soql_gen",
            "compile",
            "-m",
            path.to_str().unwrap(),
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.format, crate::output::OutputFormat::Json);
    }
}
