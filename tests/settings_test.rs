use std::time::Duration;

use a11y_scan::presentation::{Environment, Settings};

#[test]
fn given_no_settings_file_when_loading_then_uses_service_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.gemini.analysis_model, "gemini-2.5-flash");
    assert_eq!(settings.gemini.speech_model, "gemini-2.5-flash-preview-tts");
    assert_eq!(settings.gemini.voice_name, "Kore");
    assert_eq!(settings.gemini.api_key_env, "API_KEY");
    assert_eq!(settings.gemini.timeout(), Duration::from_secs(120));
    assert_eq!(settings.server.max_upload_bytes(), 20 * 1024 * 1024);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("LOCAL".to_string()),
        Ok(Environment::Local)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_suffix() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::Test.to_string(), "test");
}
