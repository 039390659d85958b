use chrono::{Duration, Utc};

use elemnote::domain::{AudioArtifact, AudioArtifactId};

#[test]
fn given_new_artifact_id_when_created_then_is_unique_mp3_name() {
    let a = AudioArtifactId::new();
    let b = AudioArtifactId::new();

    assert_ne!(a, b);
    assert!(a.as_str().ends_with(".mp3"));
}

#[test]
fn given_artifact_id_when_building_url_then_points_at_audio_route() {
    let id = AudioArtifactId::from_raw("clip.mp3");

    assert_eq!(id.audio_url(), "/audio/clip.mp3");
}

#[test]
fn given_artifact_when_checking_expiry_then_compares_age_with_ttl() {
    let artifact = AudioArtifact::new(AudioArtifactId::new(), 10);
    let now = artifact.created_at;

    assert!(!artifact.is_expired(now + Duration::seconds(59), Duration::seconds(60)));
    assert!(artifact.is_expired(now + Duration::seconds(60), Duration::seconds(60)));
    assert!(artifact.is_expired(Utc::now(), Duration::zero()));
}
