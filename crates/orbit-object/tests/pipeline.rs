//! Pipeline Integration Tests
//!
//! Exercises a record end to end the way a renderer front-end does:
//! load from a document, override with a partial block, transform through
//! scene placement, apply shared modifiers, and re-serialize.

use std::sync::Arc;

use approx::assert_relative_eq;
use orbit_base::{ParameterSet, Position, PositionTransform, Quaternion};
use orbit_object::{Modifier, ModifierList, ModifierEffect, ObjectContext, ObjectParameters};

use serde_json::json;

struct Stem;

impl ObjectContext for Stem {
    fn id(&self) -> &str {
        "AO_0042"
    }

    fn name(&self) -> &str {
        "ambience"
    }

    fn channel_count(&self) -> u32 {
        2
    }
}

struct ClampGain(f64);

impl ModifierEffect for ClampGain {
    fn apply(&self, params: &mut ObjectParameters, _object: Option<&dyn ObjectContext>) {
        if params.gain() > self.0 {
            params.set_gain(self.0);
        }
    }
}

fn block_document() -> serde_json::Value {
    json!({
        "channel": 2,
        "duration": 500_000_000u64,
        "position": {"x": 0.0, "y": 0.0, "z": 0.0},
        "gain": 0.5,
        "width": 2.0,
        "height": 3.0,
        "depth": 1.0,
        "importance": 6,
        "interpolate": false,
        "interpolationtime": 100_000_000u64,
        "othervalues": {"stem": "ambience"},
        "excludedzones": [
            {"name": "booth", "minx": 9.0, "miny": -1.0, "minz": -1.0,
             "maxx": 11.0, "maxy": 1.0, "maxz": 1.0}
        ]
    })
}

#[test]
fn load_override_transform_apply_export() {
    let mut params = ObjectParameters::from_json_doc(&block_document());

    assert_eq!(params.channel(), 2);
    assert_eq!(params.actual_interpolation_time(), 500_000_000);
    assert_eq!(params.other_values().get("stem"), Some("ambience"));

    // Override block: only the fields it explicitly sets win
    let mut over = ObjectParameters::new();
    over.set_gain(0.8);
    over.set_interpolate(true);
    params.merge(&over);
    assert_eq!(params.gain(), 0.8);
    assert_eq!(params.actual_interpolation_time(), 100_000_000);
    assert_eq!(params.importance(), 6);

    // Scene placement: translate into the booth's corner of the room
    params.apply_transform(&PositionTransform::identity().with_translation(10.0, 0.0, 0.0));
    assert_eq!(params.position(), Position::cartesian(10.0, 0.0, 0.0));
    assert_relative_eq!(params.width(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(params.height(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(params.depth(), 1.0, epsilon = 1e-9);

    // The transformed position now sits inside the excluded zone
    assert!(params.within(&params.position()));

    // Shared modifier chain: attenuate, then clamp through the custom hook
    let modifiers: ModifierList = vec![
        Arc::new(Modifier::new().with_gain(2.0)),
        Arc::new(Modifier::new().with_effect(Arc::new(ClampGain(1.0)))),
    ];
    params.modify_all(&modifiers, Some(&Stem));
    assert_relative_eq!(params.gain(), 1.0);

    // Full round trip through the document codec preserves effective state
    let restored = ObjectParameters::from_json_doc(&params.to_json(true));
    assert_eq!(restored, params);
}

#[test]
fn rotated_scene_keeps_extent_region() {
    let mut params = ObjectParameters::new();
    params.set_position(Position::cartesian(1.0, 0.0, 0.0));
    params.set_width(2.0);

    let quarter_turn = PositionTransform::identity()
        .with_rotation(Quaternion::from_axis_angle(90.0, [0.0, 0.0, 1.0]));
    params.apply_transform(&quarter_turn);

    // Position and extent rotate together: width moves into height
    let c = params.position().to_cartesian();
    assert_relative_eq!(c.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(c.y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(params.width(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(params.height(), 2.0, epsilon = 1e-9);
}

#[test]
fn polar_block_survives_text_surfaces() {
    let mut params = ObjectParameters::new();
    params.set_position(Position::polar(-30.0, 0.0, 1.0));
    params.set_gain(2.5);

    let mut flat = ParameterSet::new();
    params.get_all(&mut flat, false);
    let position = flat.get_tree("position").unwrap();
    assert_eq!(position.get("polar"), Some("true"));
    assert_eq!(position.get("azimuth"), Some("-30"));

    assert!(params.set_value("diffuseness", "0.4"));
    assert_eq!(params.get_value("diffuseness").as_deref(), Some("0.4"));

    let text = params.to_json_string(false).unwrap();
    let restored = ObjectParameters::from_json_str(&text).unwrap();
    assert_eq!(restored, params);
    assert!(restored.position().is_polar());
}
