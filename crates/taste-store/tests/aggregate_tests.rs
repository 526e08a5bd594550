use pretty_assertions::assert_eq;

use taste_core::PitchClass;
use taste_store::{aggregate_taste, TrackFeatures};

fn track(key: i64, instrumentalness: f64, valence: f64, energy: f64, popularity: u8, artist: &str) -> TrackFeatures {
    TrackFeatures {
        key,
        instrumentalness,
        valence,
        energy,
        popularity,
        artist_id: artist.to_string(),
    }
}

#[test]
fn empty_list_yields_none() {
    assert!(aggregate_taste(&[]).is_none());
}

#[test]
fn single_track_passes_its_features_through() {
    let taste = aggregate_taste(&[track(9, 0.5, 0.8, 0.25, 64, "artist-a")]).unwrap();
    assert_eq!(taste.instrumentalness, 50);
    assert_eq!(taste.valence, 80);
    assert_eq!(taste.energy, 25);
    assert_eq!(taste.popularity, 64);
    assert_eq!(taste.average_key, PitchClass::A);
    // One artist over one track.
    assert_eq!(taste.artist_diversity, 100);
    // A single value has no dispersion.
    assert_eq!(taste.internal_coherence, 100);
}

#[test]
fn artist_diversity_counts_unique_artists() {
    let tracks = [
        track(0, 0.0, 0.5, 0.5, 50, "artist-a"),
        track(0, 0.0, 0.5, 0.5, 50, "artist-a"),
        track(0, 0.0, 0.5, 0.5, 50, "artist-b"),
        track(0, 0.0, 0.5, 0.5, 50, "artist-b"),
    ];
    assert_eq!(aggregate_taste(&tracks).unwrap().artist_diversity, 50);
}

#[test]
fn modal_key_wins_by_count() {
    let tracks = [
        track(9, 0.0, 0.5, 0.5, 50, "a"),
        track(9, 0.0, 0.5, 0.5, 50, "b"),
        track(4, 0.0, 0.5, 0.5, 50, "c"),
    ];
    assert_eq!(aggregate_taste(&tracks).unwrap().average_key, PitchClass::A);
}

#[test]
fn modal_key_ties_resolve_to_the_lowest_class() {
    let tracks = [
        track(9, 0.0, 0.5, 0.5, 50, "a"),
        track(2, 0.0, 0.5, 0.5, 50, "b"),
        track(9, 0.0, 0.5, 0.5, 50, "c"),
        track(2, 0.0, 0.5, 0.5, 50, "d"),
    ];
    assert_eq!(aggregate_taste(&tracks).unwrap().average_key, PitchClass::D);
}

#[test]
fn undetected_keys_are_skipped() {
    let tracks = [
        track(-1, 0.0, 0.5, 0.5, 50, "a"),
        track(-1, 0.0, 0.5, 0.5, 50, "b"),
        track(7, 0.0, 0.5, 0.5, 50, "c"),
    ];
    assert_eq!(aggregate_taste(&tracks).unwrap().average_key, PitchClass::G);

    let all_unknown = [track(-1, 0.0, 0.5, 0.5, 50, "a")];
    assert_eq!(
        aggregate_taste(&all_unknown).unwrap().average_key,
        PitchClass::C,
        "no detected key reads as the baseline"
    );
}

#[test]
fn coherence_tracks_valence_dispersion() {
    let tight = [
        track(0, 0.0, 0.6, 0.5, 50, "a"),
        track(0, 0.0, 0.6, 0.5, 50, "b"),
    ];
    assert_eq!(aggregate_taste(&tight).unwrap().internal_coherence, 100);

    let split = [
        track(0, 0.0, 0.0, 0.5, 50, "a"),
        track(0, 0.0, 1.0, 0.5, 50, "b"),
    ];
    // Mean 50, both values 50 away from it.
    assert_eq!(aggregate_taste(&split).unwrap().internal_coherence, 50);

    let loose = [
        track(0, 0.0, 0.1, 0.5, 50, "a"),
        track(0, 0.0, 0.9, 0.5, 50, "b"),
    ];
    let mid = aggregate_taste(&loose).unwrap().internal_coherence;
    assert!(mid > 50 && mid < 100, "got {mid}");
}

#[test]
fn all_outputs_stay_in_the_level_domain() {
    let tracks = [
        track(11, 1.0, 1.0, 1.0, 100, "a"),
        track(0, 0.0, 0.0, 0.0, 0, "b"),
        track(5, 0.7, 0.2, 0.9, 83, "c"),
    ];
    let taste = aggregate_taste(&tracks).unwrap();
    for level in [
        taste.instrumentalness,
        taste.popularity,
        taste.valence,
        taste.artist_diversity,
        taste.energy,
        taste.internal_coherence,
    ] {
        assert!(level <= 100, "level {level} above the domain");
    }
}
