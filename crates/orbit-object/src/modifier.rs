//! Composable parameter modifiers
//!
//! A [`Modifier`] is an immutable delta shared (via `Arc`) across many
//! records: optional rotation, position offset, gain and scale multipliers,
//! plus a custom-effect hook for caller-defined behavior. Application order
//! is fixed: rotate, translate, scale, gain, custom hook.

use std::fmt;
use std::sync::Arc;

use orbit_base::{Position, Quaternion};

use crate::object::ObjectParameters;

/// Caller-supplied custom effect invoked after the built-in steps
pub trait ModifierEffect: Send + Sync {
    fn apply(&self, params: &mut ObjectParameters, object: Option<&dyn ObjectContext>);
}

/// The audio object a record belongs to, as seen by custom effects
pub trait ObjectContext {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    /// First channel of the object
    fn start_channel(&self) -> u32 {
        0
    }

    fn channel_count(&self) -> u32 {
        1
    }

    /// Start time (ns)
    fn start_time(&self) -> u64 {
        0
    }

    /// Duration (ns)
    fn duration(&self) -> u64 {
        0
    }
}

/// An ordered list of shared modifiers, applied in sequence
pub type ModifierList = Vec<Arc<Modifier>>;

/// A shareable parameter delta
///
/// Treat a modifier as immutable once it is shared: build it up front,
/// wrap it in an `Arc`, and reuse it across records and threads.
#[derive(Clone, Default)]
pub struct Modifier {
    rotation: Option<Quaternion>,
    position: Option<Position>,
    gain: Option<f64>,
    scale: Option<f64>,
    effect: Option<Arc<dyn ModifierEffect>>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation(mut self, rotation: Quaternion) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Gain multiplier (unset behaves as 1.0)
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = Some(gain);
        self
    }

    /// Scale multiplier (unset behaves as 1.0)
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_effect(mut self, effect: Arc<dyn ModifierEffect>) -> Self {
        self.effect = Some(effect);
        self
    }

    #[inline]
    pub fn rotation(&self) -> Option<Quaternion> {
        self.rotation
    }

    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[inline]
    pub fn gain(&self) -> Option<f64> {
        self.gain
    }

    #[inline]
    pub fn scale(&self) -> Option<f64> {
        self.scale
    }

    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    pub(crate) fn apply_effect(
        &self,
        params: &mut ObjectParameters,
        object: Option<&dyn ObjectContext>,
    ) {
        if let Some(effect) = &self.effect {
            effect.apply(params, object);
        }
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("rotation", &self.rotation)
            .field("position", &self.position)
            .field("gain", &self.gain)
            .field("scale", &self.scale)
            .field("effect", &self.effect.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Delta equality; the custom effect is not compared
impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        self.rotation == other.rotation
            && self.position == other.position
            && self.gain == other.gain
            && self.scale == other.scale
    }
}

impl ObjectParameters {
    /// Apply one modifier: rotate, translate, scale, gain, then the custom
    /// hook, in that fixed order
    pub fn modify(&mut self, modifier: &Modifier, object: Option<&dyn ObjectContext>) {
        if let Some(rotation) = modifier.rotation() {
            self.set_position(self.position().rotated(&rotation));
            // The extent rotates as a free vector, not a point
            let [w, h, d] = rotation.rotate([self.width(), self.height(), self.depth()]);
            self.set_width(w);
            self.set_height(h);
            self.set_depth(d);
        }
        if let Some(delta) = modifier.position() {
            self.set_position(self.position() + delta);
        }
        if let Some(scale) = modifier.scale() {
            self.set_position(self.position() * scale);
            self.set_width(self.width() * scale);
            self.set_height(self.height() * scale);
            self.set_depth(self.depth() * scale);
        }
        if let Some(gain) = modifier.gain() {
            self.set_gain(self.gain() * gain);
        }
        modifier.apply_effect(self, object);
    }

    /// Apply a list of modifiers in order, each one's full sequence before
    /// the next begins
    pub fn modify_all(&mut self, modifiers: &[Arc<Modifier>], object: Option<&dyn ObjectContext>) {
        for modifier in modifiers {
            self.modify(modifier, object);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct MuteWhenDialogue;

    impl ModifierEffect for MuteWhenDialogue {
        fn apply(&self, params: &mut ObjectParameters, _object: Option<&dyn ObjectContext>) {
            if params.dialogue() > 0 {
                params.set_gain(0.0);
            }
        }
    }

    struct TestObject;

    impl ObjectContext for TestObject {
        fn id(&self) -> &str {
            "AO_1001"
        }

        fn name(&self) -> &str {
            "dialogue stem"
        }
    }

    #[test]
    fn test_translate_then_scale_order() {
        let mut p = ObjectParameters::new();
        p.set_position(Position::cartesian(1.0, 0.0, 0.0));
        p.set_width(1.0);

        // Translation happens before scaling within one modifier
        let m = Modifier::new()
            .with_position(Position::cartesian(1.0, 0.0, 0.0))
            .with_scale(2.0);
        p.modify(&m, None);

        assert_eq!(p.position(), Position::cartesian(4.0, 0.0, 0.0));
        assert_relative_eq!(p.width(), 2.0);
    }

    #[test]
    fn test_rotation_rotates_extent() {
        let mut p = ObjectParameters::new();
        p.set_position(Position::cartesian(1.0, 0.0, 0.0));
        p.set_width(2.0);

        let m = Modifier::new().with_rotation(Quaternion::from_axis_angle(90.0, [0.0, 0.0, 1.0]));
        p.modify(&m, None);

        let c = p.position().to_cartesian();
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-9);
        // Width rotated into height
        assert_relative_eq!(p.width(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.height(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gain_multiplies() {
        let mut p = ObjectParameters::new();
        p.set_gain(0.5);
        p.modify(&Modifier::new().with_gain(4.0), None);
        assert_relative_eq!(p.gain(), 2.0);
    }

    #[test]
    fn test_custom_effect_with_context() {
        let mut p = ObjectParameters::new();
        p.set_dialogue(1);
        p.set_gain(0.8);

        let m = Modifier::new().with_effect(Arc::new(MuteWhenDialogue));
        p.modify(&m, Some(&TestObject));
        assert_eq!(p.gain(), 0.0);
    }

    #[test]
    fn test_modifier_list_sequencing() {
        let mut p = ObjectParameters::new();
        p.set_position(Position::cartesian(1.0, 0.0, 0.0));

        let list: ModifierList = vec![
            Arc::new(Modifier::new().with_scale(2.0)),
            Arc::new(Modifier::new().with_position(Position::cartesian(0.0, 1.0, 0.0))),
        ];
        p.modify_all(&list, None);

        assert_eq!(p.position(), Position::cartesian(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_equality_ignores_effect() {
        let a = Modifier::new().with_gain(2.0);
        let b = Modifier::new()
            .with_gain(2.0)
            .with_effect(Arc::new(MuteWhenDialogue));
        assert_eq!(a, b);
        assert_ne!(a, Modifier::new().with_gain(3.0));
    }
}
