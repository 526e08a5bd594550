use pretty_assertions::assert_eq;
use serde_json::json;

use taste_core::{PitchClass, VisualParams};

#[test]
fn default_record_matches_documented_values() {
    let params = VisualParams::default();
    assert_eq!(params.fresnel, 50);
    assert_eq!(params.depth_dark_top, 50);
    assert_eq!(params.depth_dark_bottom, 50);
    assert_eq!((params.red, params.green, params.blue), (33, 33, 33));
    assert_eq!(params.noise, 30);
    assert_eq!(params.displace, 50);
    assert_eq!(params.speed, 50);
    assert_eq!(params.normal, 20);
    // displace 50 sits in the middle third.
    assert_eq!(
        (params.sphere_low, params.sphere_mid, params.sphere_high),
        (0, 250, 0)
    );
}

#[test]
fn pitch_labels_round_trip() {
    for pitch in PitchClass::ALL {
        assert_eq!(PitchClass::parse_or_default(pitch.label()), pitch);
        assert_eq!(PitchClass::from_index(pitch.index() as i64), Some(pitch));
    }
}

#[test]
fn pitch_index_covers_the_provider_convention() {
    assert_eq!(PitchClass::C.index(), 0);
    assert_eq!(PitchClass::GSharp.index(), 8);
    assert_eq!(PitchClass::B.index(), 11);
    assert_eq!(PitchClass::from_index(-1), None);
    assert_eq!(PitchClass::from_index(12), None);
}

#[test]
fn unknown_labels_fold_to_c() {
    for label in ["Z-invalid", "", "c", "H", "C♯"] {
        assert_eq!(PitchClass::parse_or_default(label), PitchClass::C, "{label}");
    }
}

#[test]
fn visual_params_serialize_under_wire_names() {
    let value = serde_json::to_value(VisualParams::default()).unwrap();
    assert_eq!(
        value,
        json!({
            "fresnel": 50,
            "depthDarkTop": 50,
            "depthDarkBottom": 50,
            "red": 33,
            "green": 33,
            "blue": 33,
            "noise": 30,
            "displace": 50,
            "sphereLow": 0,
            "sphereMid": 250,
            "sphereHigh": 0,
            "speed": 50,
            "normal": 20,
        })
    );
}

#[test]
fn visual_params_json_round_trip() {
    let mut params = VisualParams::default();
    params.displace = 70;
    params.refresh_spheres();
    let raw = serde_json::to_string(&params).unwrap();
    let back: VisualParams = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, params);
}

#[test]
fn pitch_class_serde_uses_labels() {
    assert_eq!(
        serde_json::to_value(PitchClass::GSharp).unwrap(),
        json!("G#")
    );
    let parsed: PitchClass = serde_json::from_value(json!("A#")).unwrap();
    assert_eq!(parsed, PitchClass::ASharp);
    // Unknown labels deserialize to the baseline rather than failing.
    let folded: PitchClass = serde_json::from_value(json!("X")).unwrap();
    assert_eq!(folded, PitchClass::C);
}
