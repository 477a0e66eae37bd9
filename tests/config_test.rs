use planview::cli::Cli;
use planview::config::Settings;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_plans_from_dir() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::create_dir_all(root.join("config/plans"))?;

    let planview_toml = r#"
[server]
host = "127.0.0.1"
port = 3000

[planner]
reserved_words = ["server_url", "INPUT"]

[ui]
step_delete_enabled = false
"#;
    fs::write(root.join("planview.toml"), planview_toml)?;

    let plan_json = r#"
{
    "name": "summarize",
    "description": "Summarize and translate",
    "steps": [
        {
            "index": 0,
            "skill_name": "WriterSkill",
            "name": "Summarize",
            "description": "Summarize the input",
            "parameters": [{"Key": "input", "Value": "$INPUT"}],
            "outputs": ["SUMMARY"]
        }
    ]
}
"#;
    fs::write(root.join("config/plans/summarize.json"), plan_json)?;

    let plan_yaml = r#"
name: email
steps:
  - index: 0
    skill_name: EmailSkill
    name: Send
    parameters:
      - Key: to
        Value: someone@example.com
      - Key: server_url
        Value: http://localhost
    outputs: []
"#;
    fs::write(root.join("config/plans/email.yaml"), plan_yaml)?;
    fs::write(root.join("config/plans/notes.txt"), "ignored")?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.planner.reserved_words, vec!["server_url", "INPUT"]);
    assert!(settings.ui.edits_enabled);
    assert!(!settings.ui.step_delete_enabled);

    // Files load in path order
    assert_eq!(settings.plans.len(), 2);
    assert_eq!(settings.plans[0].name, "email");
    assert_eq!(settings.plans[0].steps[0].parameters.len(), 2);
    assert_eq!(settings.plans[1].name, "summarize");
    assert_eq!(settings.plans[1].steps[0].outputs, vec!["SUMMARY"]);

    Ok(())
}

#[test]
fn test_defaults_without_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let settings = Settings::from_root(temp_dir.path().to_str().unwrap())?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.planner.reserved_words, vec!["server_url", "server-url"]);
    assert!(settings.plans.is_empty());

    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("planview.toml");
    fs::write(
        &config_path,
        r#"
[server]
host = "127.0.0.1"
port = 3000
"#,
    )?;

    let cli = Cli::parse_from([
        "planview",
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "8088",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.server.host, "127.0.0.1");

    Ok(())
}

#[test]
fn test_duplicate_plan_names_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("config/plans"))?;

    let plan = r#"{"name": "dup", "steps": []}"#;
    fs::write(root.join("config/plans/a.json"), plan)?;
    fs::write(root.join("config/plans/b.json"), plan)?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("plan name 'dup'"));

    Ok(())
}
