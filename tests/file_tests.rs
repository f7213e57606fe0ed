use serde_envfile::{env_fields, to_file, to_file_with_options, EnvOptions, EnvStruct, Error, Field};
use std::fs;

struct Smtp {
    host: String,
    port: Option<u16>,
}

impl EnvStruct for Smtp {
    fn fields() -> Vec<Field<Self>> {
        env_fields! {
            leaf "Host" => |s: &Smtp| &s.host;
            leaf "Port" => |s: &Smtp| &s.port;
        }
    }
}

struct Mailer {
    from: String,
    smtp: Smtp,
}

impl EnvStruct for Mailer {
    fn fields() -> Vec<Field<Self>> {
        env_fields! {
            leaf "From" => |m: &Mailer| &m.from;
            nested "Smtp" => |m: &Mailer| Some(&m.smtp);
        }
    }
}

fn mailer() -> Mailer {
    Mailer {
        from: "noreply@example.com".to_string(),
        smtp: Smtp {
            host: "mail.example.com".to_string(),
            port: None,
        },
    }
}

#[test]
fn test_to_file_writes_plain_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailer.env");

    to_file(&path, &mailer(), false).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "From = noreply@example.com\nSmtp_Host = mail.example.com\n"
    );
}

#[test]
fn test_to_file_with_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailer.env");

    to_file(&path, &mailer(), true).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\n#\n# Smtp\n#\n"));
    assert!(contents.ends_with("# Smtp_Port = null\n"));
}

#[test]
fn test_to_file_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailer.env");
    fs::write(&path, "STALE = 1\n".repeat(100)).unwrap();

    to_file_with_options(&path, &mailer(), EnvOptions::new().with_separator("__")).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("STALE"));
    assert!(contents.contains("Smtp__Host = mail.example.com"));
}

#[test]
fn test_to_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("mailer.env");

    let err = to_file(&path, &mailer(), false).unwrap_err();
    assert!(matches!(err, Error::Io(ref msg) if msg.contains("cannot create")));
}
