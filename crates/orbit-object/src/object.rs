//! The per-channel object parameter record

use orbit_base::{ParameterSet, Position, PositionTransform};

use crate::param::{Param, ParamMask};
use crate::zone::ExcludedZone;

/// Nanoseconds per second, the fixed scale for all time conversions
const NS_PER_S: f64 = 1.0e9;

#[inline]
pub(crate) fn secs_to_ns(secs: f64) -> u64 {
    (secs.max(0.0) * NS_PER_S) as u64
}

#[inline]
pub(crate) fn ns_to_secs(ns: u64) -> f64 {
    ns as f64 / NS_PER_S
}

#[inline]
fn at_least_zero(v: f64) -> f64 {
    v.max(0.0)
}

#[inline]
fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Rendering parameters for one audio channel-segment
///
/// Every field holds a well-defined value at all times; a separate presence
/// bit per field records whether it was explicitly assigned. Setters clamp,
/// store and mark the bit as one step; resets restore the type default and
/// clear the bit. Cloning deep-copies everything, including the excluded
/// zone list.
#[derive(Debug, Clone)]
pub struct ObjectParameters {
    pub(crate) position: Position,
    pub(crate) channel: u32,
    pub(crate) duration: u64,
    pub(crate) gain: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) depth: f64,
    pub(crate) divergence_balance: f64,
    pub(crate) divergence_azimuth: f64,
    pub(crate) diffuseness: f64,
    pub(crate) delay: f64,
    pub(crate) importance: u8,
    pub(crate) dialogue: u8,
    pub(crate) channel_lock: bool,
    pub(crate) channel_lock_max_distance: f64,
    pub(crate) interact: bool,
    pub(crate) interpolate: bool,
    pub(crate) interpolation_time: u64,
    pub(crate) on_screen: bool,
    pub(crate) other_values: ParameterSet,
    pub(crate) excluded_zones: Vec<ExcludedZone>,
    pub(crate) mask: ParamMask,
}

impl ObjectParameters {
    /// All fields at type defaults, no presence bits set
    pub fn new() -> Self {
        Self {
            position: Position::origin(),
            channel: 0,
            duration: 0,
            gain: 1.0,
            width: 0.0,
            height: 0.0,
            depth: 0.0,
            divergence_balance: 0.0,
            divergence_azimuth: 0.0,
            diffuseness: 0.0,
            delay: 0.0,
            importance: 0,
            dialogue: 0,
            channel_lock: false,
            channel_lock_max_distance: 0.0,
            interact: false,
            interpolate: false,
            interpolation_time: 0,
            on_screen: false,
            other_values: ParameterSet::new(),
            excluded_zones: Vec::new(),
            mask: ParamMask::EMPTY,
        }
    }

    #[inline]
    pub fn is_set(&self, param: Param) -> bool {
        self.mask.is_set(param)
    }

    fn if_set<T>(&self, param: Param, value: T) -> Option<T> {
        if self.mask.is_set(param) { Some(value) } else { None }
    }

    // --- channel ---

    #[inline]
    pub fn channel(&self) -> u32 {
        self.channel
    }

    pub fn channel_if_set(&self) -> Option<u32> {
        self.if_set(Param::Channel, self.channel)
    }

    pub fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
        self.mask.mark(Param::Channel);
    }

    pub fn reset_channel(&mut self) {
        self.channel = 0;
        self.mask.clear(Param::Channel);
    }

    // --- duration (ns) ---

    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn duration_s(&self) -> f64 {
        ns_to_secs(self.duration)
    }

    pub fn duration_if_set(&self) -> Option<u64> {
        self.if_set(Param::Duration, self.duration)
    }

    pub fn set_duration(&mut self, ns: u64) {
        self.duration = ns;
        self.mask.mark(Param::Duration);
    }

    pub fn set_duration_s(&mut self, secs: f64) {
        self.set_duration(secs_to_ns(secs));
    }

    pub fn reset_duration(&mut self) {
        self.duration = 0;
        self.mask.clear(Param::Duration);
    }

    // --- position ---

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn position_if_set(&self) -> Option<Position> {
        self.if_set(Param::Position, self.position)
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        self.mask.mark(Param::Position);
    }

    pub fn reset_position(&mut self) {
        self.position = Position::origin();
        self.mask.clear(Param::Position);
    }

    // --- gain ---

    #[inline]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn gain_if_set(&self) -> Option<f64> {
        self.if_set(Param::Gain, self.gain)
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.gain = gain;
        self.mask.mark(Param::Gain);
    }

    /// Restore the non-zero default of 1.0
    pub fn reset_gain(&mut self) {
        self.gain = 1.0;
        self.mask.clear(Param::Gain);
    }

    // --- extents ---

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn width_if_set(&self) -> Option<f64> {
        self.if_set(Param::Width, self.width)
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = at_least_zero(width);
        self.mask.mark(Param::Width);
    }

    pub fn reset_width(&mut self) {
        self.width = 0.0;
        self.mask.clear(Param::Width);
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn height_if_set(&self) -> Option<f64> {
        self.if_set(Param::Height, self.height)
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = at_least_zero(height);
        self.mask.mark(Param::Height);
    }

    pub fn reset_height(&mut self) {
        self.height = 0.0;
        self.mask.clear(Param::Height);
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn depth_if_set(&self) -> Option<f64> {
        self.if_set(Param::Depth, self.depth)
    }

    pub fn set_depth(&mut self, depth: f64) {
        self.depth = at_least_zero(depth);
        self.mask.mark(Param::Depth);
    }

    pub fn reset_depth(&mut self) {
        self.depth = 0.0;
        self.mask.clear(Param::Depth);
    }

    // --- divergence ---

    #[inline]
    pub fn divergence_balance(&self) -> f64 {
        self.divergence_balance
    }

    pub fn divergence_balance_if_set(&self) -> Option<f64> {
        self.if_set(Param::DivergenceBalance, self.divergence_balance)
    }

    pub fn set_divergence_balance(&mut self, balance: f64) {
        self.divergence_balance = clamp01(balance);
        self.mask.mark(Param::DivergenceBalance);
    }

    pub fn reset_divergence_balance(&mut self) {
        self.divergence_balance = 0.0;
        self.mask.clear(Param::DivergenceBalance);
    }

    #[inline]
    pub fn divergence_azimuth(&self) -> f64 {
        self.divergence_azimuth
    }

    pub fn divergence_azimuth_if_set(&self) -> Option<f64> {
        self.if_set(Param::DivergenceAzimuth, self.divergence_azimuth)
    }

    pub fn set_divergence_azimuth(&mut self, azimuth: f64) {
        self.divergence_azimuth = at_least_zero(azimuth);
        self.mask.mark(Param::DivergenceAzimuth);
    }

    pub fn reset_divergence_azimuth(&mut self) {
        self.divergence_azimuth = 0.0;
        self.mask.clear(Param::DivergenceAzimuth);
    }

    // --- diffuseness / delay ---

    #[inline]
    pub fn diffuseness(&self) -> f64 {
        self.diffuseness
    }

    pub fn diffuseness_if_set(&self) -> Option<f64> {
        self.if_set(Param::Diffuseness, self.diffuseness)
    }

    pub fn set_diffuseness(&mut self, diffuseness: f64) {
        self.diffuseness = clamp01(diffuseness);
        self.mask.mark(Param::Diffuseness);
    }

    pub fn reset_diffuseness(&mut self) {
        self.diffuseness = 0.0;
        self.mask.clear(Param::Diffuseness);
    }

    #[inline]
    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn delay_if_set(&self) -> Option<f64> {
        self.if_set(Param::Delay, self.delay)
    }

    pub fn set_delay(&mut self, delay: f64) {
        self.delay = at_least_zero(delay);
        self.mask.mark(Param::Delay);
    }

    pub fn reset_delay(&mut self) {
        self.delay = 0.0;
        self.mask.clear(Param::Delay);
    }

    // --- importance / dialogue ---

    #[inline]
    pub fn importance(&self) -> u8 {
        self.importance
    }

    pub fn importance_if_set(&self) -> Option<u8> {
        self.if_set(Param::Importance, self.importance)
    }

    pub fn set_importance(&mut self, importance: i32) {
        self.importance = importance.clamp(0, 10) as u8;
        self.mask.mark(Param::Importance);
    }

    pub fn reset_importance(&mut self) {
        self.importance = 0;
        self.mask.clear(Param::Importance);
    }

    #[inline]
    pub fn dialogue(&self) -> u8 {
        self.dialogue
    }

    pub fn dialogue_if_set(&self) -> Option<u8> {
        self.if_set(Param::Dialogue, self.dialogue)
    }

    pub fn set_dialogue(&mut self, dialogue: i32) {
        self.dialogue = dialogue.clamp(0, 2) as u8;
        self.mask.mark(Param::Dialogue);
    }

    pub fn reset_dialogue(&mut self) {
        self.dialogue = 0;
        self.mask.clear(Param::Dialogue);
    }

    // --- channel lock ---

    #[inline]
    pub fn channel_lock(&self) -> bool {
        self.channel_lock
    }

    pub fn channel_lock_if_set(&self) -> Option<bool> {
        self.if_set(Param::ChannelLock, self.channel_lock)
    }

    pub fn set_channel_lock(&mut self, lock: bool) {
        self.channel_lock = lock;
        self.mask.mark(Param::ChannelLock);
    }

    pub fn reset_channel_lock(&mut self) {
        self.channel_lock = false;
        self.mask.clear(Param::ChannelLock);
    }

    #[inline]
    pub fn channel_lock_max_distance(&self) -> f64 {
        self.channel_lock_max_distance
    }

    pub fn channel_lock_max_distance_if_set(&self) -> Option<f64> {
        self.if_set(Param::ChannelLockMaxDistance, self.channel_lock_max_distance)
    }

    pub fn set_channel_lock_max_distance(&mut self, distance: f64) {
        self.channel_lock_max_distance = distance.clamp(0.0, 2.0);
        self.mask.mark(Param::ChannelLockMaxDistance);
    }

    pub fn reset_channel_lock_max_distance(&mut self) {
        self.channel_lock_max_distance = 0.0;
        self.mask.clear(Param::ChannelLockMaxDistance);
    }

    // --- interaction / interpolation / screen ---

    #[inline]
    pub fn interact(&self) -> bool {
        self.interact
    }

    pub fn interact_if_set(&self) -> Option<bool> {
        self.if_set(Param::Interact, self.interact)
    }

    pub fn set_interact(&mut self, interact: bool) {
        self.interact = interact;
        self.mask.mark(Param::Interact);
    }

    pub fn reset_interact(&mut self) {
        self.interact = false;
        self.mask.clear(Param::Interact);
    }

    #[inline]
    pub fn interpolate(&self) -> bool {
        self.interpolate
    }

    pub fn interpolate_if_set(&self) -> Option<bool> {
        self.if_set(Param::Interpolate, self.interpolate)
    }

    pub fn set_interpolate(&mut self, interpolate: bool) {
        self.interpolate = interpolate;
        self.mask.mark(Param::Interpolate);
    }

    pub fn reset_interpolate(&mut self) {
        self.interpolate = false;
        self.mask.clear(Param::Interpolate);
    }

    #[inline]
    pub fn interpolation_time(&self) -> u64 {
        self.interpolation_time
    }

    pub fn interpolation_time_s(&self) -> f64 {
        ns_to_secs(self.interpolation_time)
    }

    pub fn interpolation_time_if_set(&self) -> Option<u64> {
        self.if_set(Param::InterpolationTime, self.interpolation_time)
    }

    pub fn set_interpolation_time(&mut self, ns: u64) {
        self.interpolation_time = ns;
        self.mask.mark(Param::InterpolationTime);
    }

    pub fn set_interpolation_time_s(&mut self, secs: f64) {
        self.set_interpolation_time(secs_to_ns(secs));
    }

    pub fn reset_interpolation_time(&mut self) {
        self.interpolation_time = 0;
        self.mask.clear(Param::InterpolationTime);
    }

    /// Interpolation time the renderer should actually use: the explicit
    /// interpolation time when interpolation is enabled, otherwise the
    /// whole block duration
    pub fn actual_interpolation_time(&self) -> u64 {
        if self.interpolate {
            self.interpolation_time
        } else {
            self.duration
        }
    }

    #[inline]
    pub fn on_screen(&self) -> bool {
        self.on_screen
    }

    pub fn on_screen_if_set(&self) -> Option<bool> {
        self.if_set(Param::OnScreen, self.on_screen)
    }

    pub fn set_on_screen(&mut self, on_screen: bool) {
        self.on_screen = on_screen;
        self.mask.mark(Param::OnScreen);
    }

    pub fn reset_on_screen(&mut self) {
        self.on_screen = false;
        self.mask.clear(Param::OnScreen);
    }

    // --- other values ---

    #[inline]
    pub fn other_values(&self) -> &ParameterSet {
        &self.other_values
    }

    pub fn other_values_if_set(&self) -> Option<&ParameterSet> {
        if self.mask.is_set(Param::OtherValues) {
            Some(&self.other_values)
        } else {
            None
        }
    }

    /// Setting an empty bag is a reset
    pub fn set_other_values(&mut self, values: ParameterSet) {
        if values.is_empty() {
            self.reset_other_values();
        } else {
            self.other_values = values;
            self.mask.mark(Param::OtherValues);
        }
    }

    pub fn reset_other_values(&mut self) {
        self.other_values = ParameterSet::new();
        self.mask.clear(Param::OtherValues);
    }

    // --- excluded zones ---

    #[inline]
    pub fn excluded_zones(&self) -> &[ExcludedZone] {
        &self.excluded_zones
    }

    /// Append a zone to the list
    pub fn add_excluded_zone(
        &mut self,
        name: impl Into<String>,
        min_corner: [f64; 3],
        max_corner: [f64; 3],
    ) {
        self.excluded_zones
            .push(ExcludedZone::new(name, min_corner, max_corner));
    }

    pub fn reset_excluded_zones(&mut self) {
        self.excluded_zones.clear();
    }

    /// Whether `position` lies inside any excluded zone
    pub fn within(&self, position: &Position) -> bool {
        self.excluded_zones.iter().any(|z| z.contains(position))
    }

    // --- merge ---

    /// Copy every explicitly-set field of `other` into self
    ///
    /// Fields not set in `other` are left untouched; the excluded zone list
    /// is not merged.
    pub fn merge(&mut self, other: &ObjectParameters) {
        if other.mask.is_set(Param::Channel) {
            self.set_channel(other.channel);
        }
        if other.mask.is_set(Param::Duration) {
            self.set_duration(other.duration);
        }
        if other.mask.is_set(Param::Position) {
            self.set_position(other.position);
        }
        if other.mask.is_set(Param::Gain) {
            self.set_gain(other.gain);
        }
        if other.mask.is_set(Param::Width) {
            self.set_width(other.width);
        }
        if other.mask.is_set(Param::Height) {
            self.set_height(other.height);
        }
        if other.mask.is_set(Param::Depth) {
            self.set_depth(other.depth);
        }
        if other.mask.is_set(Param::DivergenceBalance) {
            self.set_divergence_balance(other.divergence_balance);
        }
        if other.mask.is_set(Param::DivergenceAzimuth) {
            self.set_divergence_azimuth(other.divergence_azimuth);
        }
        if other.mask.is_set(Param::Diffuseness) {
            self.set_diffuseness(other.diffuseness);
        }
        if other.mask.is_set(Param::Delay) {
            self.set_delay(other.delay);
        }
        if other.mask.is_set(Param::Importance) {
            self.set_importance(other.importance as i32);
        }
        if other.mask.is_set(Param::Dialogue) {
            self.set_dialogue(other.dialogue as i32);
        }
        if other.mask.is_set(Param::ChannelLock) {
            self.set_channel_lock(other.channel_lock);
        }
        if other.mask.is_set(Param::ChannelLockMaxDistance) {
            self.set_channel_lock_max_distance(other.channel_lock_max_distance);
        }
        if other.mask.is_set(Param::Interact) {
            self.set_interact(other.interact);
        }
        if other.mask.is_set(Param::Interpolate) {
            self.set_interpolate(other.interpolate);
        }
        if other.mask.is_set(Param::InterpolationTime) {
            self.set_interpolation_time(other.interpolation_time);
        }
        if other.mask.is_set(Param::OnScreen) {
            self.set_on_screen(other.on_screen);
        }
        if other.mask.is_set(Param::OtherValues) {
            self.set_other_values(other.other_values.clone());
        }
    }

    // --- transform ---

    /// Transform position and extent in place
    ///
    /// The extent is carried through as the difference of two transformed
    /// points (center and center + extent offset), so rotation and scaling
    /// act on the bounding region rather than on scalar magnitudes. The
    /// resulting extent components are stored unclamped: a transform may
    /// legitimately invert an axis.
    pub fn apply_transform(&mut self, transform: &PositionTransform) {
        let centre = self.position;
        let corner = centre.offset([self.width, self.height, self.depth]);

        let new_centre = transform.apply(&centre);
        let new_corner = transform.apply(&corner);

        self.set_position(new_centre);

        let [w, h, d] = new_corner.delta_from(&new_centre);
        self.width = w;
        self.height = h;
        self.depth = d;
        self.mask.mark(Param::Width);
        self.mask.mark(Param::Height);
        self.mask.mark(Param::Depth);
    }

    /// Transformed copy
    pub fn transformed(&self, transform: &PositionTransform) -> Self {
        let mut copy = self.clone();
        copy.apply_transform(transform);
        copy
    }
}

impl Default for ObjectParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Effective-value equality: presence bits are deliberately excluded, so
/// two records with the same values but different "was it explicit"
/// history compare equal
impl PartialEq for ObjectParameters {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.channel == other.channel
            && self.duration == other.duration
            && self.gain == other.gain
            && self.width == other.width
            && self.height == other.height
            && self.depth == other.depth
            && self.divergence_balance == other.divergence_balance
            && self.divergence_azimuth == other.divergence_azimuth
            && self.diffuseness == other.diffuseness
            && self.delay == other.delay
            && self.importance == other.importance
            && self.dialogue == other.dialogue
            && self.channel_lock == other.channel_lock
            && self.channel_lock_max_distance == other.channel_lock_max_distance
            && self.interact == other.interact
            && self.interpolate == other.interpolate
            && self.interpolation_time == other.interpolation_time
            && self.on_screen == other.on_screen
            && self.other_values == other.other_values
            && self.excluded_zones == other.excluded_zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_unset() {
        let p = ObjectParameters::new();
        assert_eq!(p.gain(), 1.0);
        assert_eq!(p.gain_if_set(), None);
        assert_eq!(p.position(), Position::origin());
        assert_eq!(p.position_if_set(), None);
        assert_eq!(p.importance(), 0);
        assert!(p.excluded_zones().is_empty());
    }

    #[test]
    fn test_set_then_reset() {
        let mut p = ObjectParameters::new();

        p.set_gain(2.5);
        assert_eq!(p.gain_if_set(), Some(2.5));
        p.reset_gain();
        assert_eq!(p.gain(), 1.0);
        assert_eq!(p.gain_if_set(), None);

        p.set_diffuseness(0.25);
        assert_eq!(p.diffuseness_if_set(), Some(0.25));
        p.reset_diffuseness();
        assert_eq!(p.diffuseness_if_set(), None);
        assert_eq!(p.diffuseness(), 0.0);
    }

    #[test]
    fn test_clamps() {
        let mut p = ObjectParameters::new();

        p.set_importance(15);
        assert_eq!(p.importance(), 10);
        p.set_importance(-3);
        assert_eq!(p.importance(), 0);

        p.set_dialogue(7);
        assert_eq!(p.dialogue(), 2);

        p.set_diffuseness(1.5);
        assert_eq!(p.diffuseness(), 1.0);

        p.set_width(-4.0);
        assert_eq!(p.width(), 0.0);

        p.set_channel_lock_max_distance(3.5);
        assert_eq!(p.channel_lock_max_distance(), 2.0);
    }

    #[test]
    fn test_time_conversions() {
        let mut p = ObjectParameters::new();

        p.set_interpolation_time_s(0.5);
        assert_eq!(p.interpolation_time(), 500_000_000);
        assert_relative_eq!(p.interpolation_time_s(), 0.5);

        // Negative seconds clamp to zero before scaling
        p.set_interpolation_time_s(-1.0);
        assert_eq!(p.interpolation_time(), 0);

        p.set_duration_s(1.25);
        assert_eq!(p.duration(), 1_250_000_000);
    }

    #[test]
    fn test_actual_interpolation_time() {
        let mut p = ObjectParameters::new();
        p.set_duration(500_000_000);
        p.set_interpolate(false);
        p.set_interpolation_time(100_000_000);
        assert_eq!(p.actual_interpolation_time(), 500_000_000);

        p.set_interpolate(true);
        assert_eq!(p.actual_interpolation_time(), 100_000_000);
    }

    #[test]
    fn test_merge() {
        let mut base = ObjectParameters::new();
        base.set_gain(0.5);
        base.set_importance(3);

        let mut over = ObjectParameters::new();
        over.set_gain(2.0);
        over.set_on_screen(true);

        base.merge(&over);
        assert_eq!(base.gain(), 2.0);
        assert_eq!(base.importance(), 3); // untouched
        assert!(base.on_screen());

        // Merging a record with itself is idempotent
        let snapshot = base.clone();
        base.merge(&snapshot);
        assert_eq!(base, snapshot);

        // Merging an empty record changes nothing
        base.merge(&ObjectParameters::new());
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_transform_translation() {
        let mut p = ObjectParameters::new();
        p.set_position(Position::cartesian(0.0, 0.0, 0.0));
        p.set_width(2.0);
        p.set_height(3.0);
        p.set_depth(1.0);

        let t = PositionTransform::identity().with_translation(10.0, 0.0, 0.0);
        p.apply_transform(&t);

        assert_eq!(p.position(), Position::cartesian(10.0, 0.0, 0.0));
        assert_relative_eq!(p.width(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(p.height(), 3.0, epsilon = 1e-9);
        assert_relative_eq!(p.depth(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transform_scale() {
        let mut p = ObjectParameters::new();
        p.set_position(Position::cartesian(0.0, 0.0, 0.0));
        p.set_width(2.0);
        p.set_height(3.0);
        p.set_depth(1.0);

        let copy = p.transformed(&PositionTransform::identity().with_scale(2.0));

        assert_relative_eq!(copy.width(), 4.0, epsilon = 1e-9);
        assert_relative_eq!(copy.height(), 6.0, epsilon = 1e-9);
        assert_relative_eq!(copy.depth(), 2.0, epsilon = 1e-9);
        // The source is untouched
        assert_relative_eq!(p.width(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_within_zones() {
        let mut p = ObjectParameters::new();
        p.add_excluded_zone("left", [-1.0, -1.0, -1.0], [-0.5, 1.0, 1.0]);
        p.add_excluded_zone("unit", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);

        assert!(p.within(&Position::cartesian(0.5, 0.5, 0.5)));
        assert!(p.within(&Position::cartesian(-0.75, 0.0, 0.0)));
        assert!(!p.within(&Position::cartesian(2.0, 0.5, 0.5)));

        p.reset_excluded_zones();
        assert!(!p.within(&Position::cartesian(0.5, 0.5, 0.5)));
    }

    #[test]
    fn test_equality_ignores_presence() {
        let explicit = {
            let mut p = ObjectParameters::new();
            p.set_gain(1.0); // explicit default
            p
        };
        let implicit = ObjectParameters::new();

        assert_eq!(explicit, implicit);
        assert_ne!(explicit.gain_if_set(), implicit.gain_if_set());
    }

    #[test]
    fn test_deep_copy() {
        let mut p = ObjectParameters::new();
        p.add_excluded_zone("a", [0.0; 3], [1.0; 3]);

        let mut copy = p.clone();
        copy.add_excluded_zone("b", [2.0; 3], [3.0; 3]);

        assert_eq!(p.excluded_zones().len(), 1);
        assert_eq!(copy.excluded_zones().len(), 2);
        assert_ne!(p, copy);
    }
}
