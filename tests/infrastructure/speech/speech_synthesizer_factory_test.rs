use elemnote::application::ports::SpeechSynthesisError;
use elemnote::infrastructure::speech::SpeechSynthesizerFactory;
use elemnote::presentation::config::SpeechSettings;
use elemnote::presentation::SpeechProviderSetting;

#[tokio::test]
async fn given_mock_provider_when_creating_then_synthesizer_returns_audio() {
    let settings = SpeechSettings {
        provider: SpeechProviderSetting::Mock,
        ..SpeechSettings::default()
    };

    let synthesizer = SpeechSynthesizerFactory::create(&settings).unwrap();
    let audio = synthesizer.synthesize("hello").await.unwrap();

    assert!(!audio.is_empty());
}

#[test]
fn given_default_settings_when_creating_then_google_translate_is_built() {
    assert!(SpeechSynthesizerFactory::create(&SpeechSettings::default()).is_ok());
}

#[test]
fn given_cloud_provider_without_key_when_creating_then_returns_configuration_error() {
    let settings = SpeechSettings {
        provider: SpeechProviderSetting::GoogleCloud,
        api_key: Some("  ".to_string()),
        ..SpeechSettings::default()
    };

    let result = SpeechSynthesizerFactory::create(&settings);

    assert!(matches!(
        result,
        Err(SpeechSynthesisError::Configuration(_))
    ));
}

#[test]
fn given_cloud_provider_with_key_when_creating_then_succeeds() {
    let settings = SpeechSettings {
        provider: SpeechProviderSetting::GoogleCloud,
        api_key: Some("test-key".to_string()),
        ..SpeechSettings::default()
    };

    assert!(SpeechSynthesizerFactory::create(&settings).is_ok());
}
