use crate::config::OutputConfig;
use crate::llm::{prompt, script_response_schema, LlmClient};
use crate::script::{self, ScriptResponse};
use crate::ScriptgenError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What one successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    pub path: PathBuf,
    pub content: String,
}

/// Read one line of requirements, trimmed
pub fn read_requirements<R: BufRead>(mut reader: R) -> Result<String, ScriptgenError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Err(ScriptgenError::Input(
            "No requirements provided (end of input)".to_string(),
        ));
    }
    Ok(line.trim().to_string())
}

/// Print the script followed by the line naming where it was written
pub fn report<W: Write>(script: &GeneratedScript, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", script.content)?;
    writeln!(out, "### Script written to {}", script.path.display())?;
    Ok(())
}

/// Ask the model for a script meeting `requirements` and write it out.
///
/// Nothing is written unless the reply decodes into a `ScriptResponse`.
pub async fn generate(
    client: &dyn LlmClient,
    requirements: &str,
    output: &OutputConfig,
) -> Result<GeneratedScript, ScriptgenError> {
    let prompt = prompt::build_prompt(requirements);
    let schema = script_response_schema();

    tracing::info!("Requesting script from LLM");
    let reply = client.complete(&prompt, &schema).await?;

    let response: ScriptResponse = script::decode_response(&reply)?;
    if response.filename.trim().is_empty() {
        tracing::warn!(
            "Model returned no filename, using {}",
            output.fallback_filename
        );
    }

    let path = script::write_script(&output.directory, &response, &output.fallback_filename)?;

    Ok(GeneratedScript {
        path,
        content: response.content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn output_in(temp_dir: &TempDir) -> OutputConfig {
        OutputConfig {
            directory: temp_dir.path().to_path_buf(),
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_read_requirements_trims() {
        let requirements = read_requirements(Cursor::new("  rotate logs daily \nsecond line\n")).unwrap();
        assert_eq!(requirements, "rotate logs daily");
    }

    #[test]
    fn test_read_requirements_without_newline() {
        let requirements = read_requirements(Cursor::new("count lines")).unwrap();
        assert_eq!(requirements, "count lines");
    }

    #[test]
    fn test_read_requirements_empty_line() {
        let requirements = read_requirements(Cursor::new("\n")).unwrap();
        assert_eq!(requirements, "");
    }

    #[test]
    fn test_read_requirements_end_of_input() {
        let err = read_requirements(Cursor::new("")).unwrap_err();
        assert!(matches!(err, ScriptgenError::Input(_)));
    }

    #[tokio::test]
    async fn test_generate_writes_script() {
        let temp_dir = TempDir::new().unwrap();
        let mut client = MockLlmClient::new();
        client
            .expect_complete()
            .withf(|prompt, schema| {
                prompt.contains("<user-requirements>\nsay hi\n</user-requirements>")
                    && schema.strict
            })
            .times(1)
            .returning(|_, _| {
                Ok(r##"{"filename":"deploy.sh","content":"#!/bin/bash\necho hi"}"##.to_string())
            });

        let script = generate(&client, "  say hi  ", &output_in(&temp_dir)).await.unwrap();

        assert_eq!(script.path, temp_dir.path().join("deploy.sh"));
        assert_eq!(script.content, "#!/bin/bash\necho hi");
        assert_eq!(
            std::fs::read_to_string(&script.path).unwrap(),
            "#!/bin/bash\necho hi"
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&script.path).unwrap().permissions().mode();
            assert_eq!(mode & 0o100, 0o100);
        }
    }

    #[test]
    fn test_report_in_working_directory() {
        let output = OutputConfig::default();
        let script = GeneratedScript {
            path: script::output_path(&output.directory, "deploy.sh"),
            content: "#!/bin/bash\necho hi".to_string(),
        };

        let mut out = Vec::new();
        report(&script, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "#!/bin/bash\necho hi\n### Script written to deploy.sh\n");
    }

    #[tokio::test]
    async fn test_generate_then_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut client = MockLlmClient::new();
        client
            .expect_complete()
            .returning(|_, _| Ok(r#"{"filename":"hello.sh","content":"echo hello"}"#.to_string()));

        let script = generate(&client, "say hello", &output_in(&temp_dir)).await.unwrap();

        let mut out = Vec::new();
        report(&script, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("echo hello"));
        assert!(printed.contains(&format!(
            "### Script written to {}",
            temp_dir.path().join("hello.sh").display()
        )));
    }

    #[tokio::test]
    async fn test_generate_empty_filename_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let mut client = MockLlmClient::new();
        client
            .expect_complete()
            .returning(|_, _| Ok(r#"{"filename":"","content":"echo hi"}"#.to_string()));

        let script = generate(&client, "say hi", &output_in(&temp_dir)).await.unwrap();

        assert_eq!(script.path, temp_dir.path().join("output.sh"));
        assert!(script.path.exists());
    }

    #[tokio::test]
    async fn test_generate_malformed_reply_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut client = MockLlmClient::new();
        client
            .expect_complete()
            .returning(|_, _| Ok(r#"{"filename":"deploy.sh","content":"ec"#.to_string()));

        let err = generate(&client, "say hi", &output_in(&temp_dir)).await.unwrap_err();

        assert!(matches!(err, ScriptgenError::Decode(_)));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_generate_remote_failure_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut client = MockLlmClient::new();
        client.expect_complete().returning(|_, _| {
            Err(ScriptgenError::Llm(
                "API request failed with status 401 Unauthorized".to_string(),
            ))
        });

        let err = generate(&client, "say hi", &output_in(&temp_dir)).await.unwrap_err();

        match err {
            ScriptgenError::Llm(msg) => assert!(msg.contains("401")),
            other => panic!("expected an LLM error, got {other:?}"),
        }
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
