//! Serialization surfaces: structured documents and the flat string map
//!
//! Both surfaces speak the canonical [`Param`] names. Import failures are
//! always local: a field that cannot be decoded keeps its prior state, a
//! malformed excluded-zone entry is skipped with a warning, and by-name
//! access reports unknown names as plain failure.

use std::fmt;

use log::warn;
use orbit_base::{OrbitError, OrbitResult, ParameterSet, Position};
use serde_json::{Map, Value};

use crate::modifier::Modifier;
use crate::object::ObjectParameters;
use crate::param::Param;
use crate::zone::ExcludedZone;

/// Reserved document key for the excluded-zone array
pub const EXCLUDED_ZONES_KEY: &str = "excludedzones";

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn render_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn zone_to_json(zone: &ExcludedZone) -> Value {
    let [minx, miny, minz] = zone.min_corner();
    let [maxx, maxy, maxz] = zone.max_corner();
    let mut obj = Map::new();
    obj.insert("name".into(), Value::from(zone.name()));
    obj.insert("minx".into(), Value::from(minx));
    obj.insert("miny".into(), Value::from(miny));
    obj.insert("minz".into(), Value::from(minz));
    obj.insert("maxx".into(), Value::from(maxx));
    obj.insert("maxy".into(), Value::from(maxy));
    obj.insert("maxz".into(), Value::from(maxz));
    Value::Object(obj)
}

/// Decode one zone entry; every one of the seven components is required
fn zone_from_json(entry: &Value) -> OrbitResult<ExcludedZone> {
    let obj = entry
        .as_object()
        .ok_or_else(|| OrbitError::InvalidParam("excluded zone entry is not an object".into()))?;
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or(OrbitError::MissingField("name"))?;
    let corner = |key: &'static str| {
        obj.get(key)
            .and_then(Value::as_f64)
            .ok_or(OrbitError::MissingField(key))
    };
    Ok(ExcludedZone::new(
        name,
        [corner("minx")?, corner("miny")?, corner("minz")?],
        [corner("maxx")?, corner("maxy")?, corner("maxz")?],
    ))
}

impl ObjectParameters {
    /// Export to a structured document
    ///
    /// Fields are written under their canonical names when explicitly set
    /// (or unconditionally with `force`); durations are integer
    /// nanoseconds. A non-empty zone list is always written as the
    /// `excludedzones` array.
    pub fn to_json(&self, force: bool) -> Value {
        let mut obj = Map::new();

        self.put(&mut obj, Param::Channel, force, Value::from(self.channel));
        self.put(&mut obj, Param::Duration, force, Value::from(self.duration));
        if let Ok(position) = serde_json::to_value(self.position) {
            self.put(&mut obj, Param::Position, force, position);
        }
        self.put(&mut obj, Param::Gain, force, Value::from(self.gain));
        self.put(&mut obj, Param::Width, force, Value::from(self.width));
        self.put(&mut obj, Param::Height, force, Value::from(self.height));
        self.put(&mut obj, Param::Depth, force, Value::from(self.depth));
        self.put(
            &mut obj,
            Param::DivergenceBalance,
            force,
            Value::from(self.divergence_balance),
        );
        self.put(
            &mut obj,
            Param::DivergenceAzimuth,
            force,
            Value::from(self.divergence_azimuth),
        );
        self.put(
            &mut obj,
            Param::Diffuseness,
            force,
            Value::from(self.diffuseness),
        );
        self.put(&mut obj, Param::Delay, force, Value::from(self.delay));
        self.put(
            &mut obj,
            Param::Importance,
            force,
            Value::from(u64::from(self.importance)),
        );
        self.put(
            &mut obj,
            Param::Dialogue,
            force,
            Value::from(u64::from(self.dialogue)),
        );
        self.put(
            &mut obj,
            Param::ChannelLock,
            force,
            Value::from(self.channel_lock),
        );
        self.put(
            &mut obj,
            Param::ChannelLockMaxDistance,
            force,
            Value::from(self.channel_lock_max_distance),
        );
        self.put(&mut obj, Param::Interact, force, Value::from(self.interact));
        self.put(
            &mut obj,
            Param::Interpolate,
            force,
            Value::from(self.interpolate),
        );
        self.put(
            &mut obj,
            Param::InterpolationTime,
            force,
            Value::from(self.interpolation_time),
        );
        self.put(&mut obj, Param::OnScreen, force, Value::from(self.on_screen));
        if let Ok(values) = serde_json::to_value(&self.other_values) {
            self.put(&mut obj, Param::OtherValues, force, values);
        }

        if !self.excluded_zones.is_empty() {
            let zones = self.excluded_zones.iter().map(zone_to_json).collect();
            obj.insert(EXCLUDED_ZONES_KEY.into(), Value::Array(zones));
        }

        Value::Object(obj)
    }

    /// Export to document text
    pub fn to_json_string(&self, force: bool) -> OrbitResult<String> {
        serde_json::to_string_pretty(&self.to_json(force))
            .map_err(|e| OrbitError::Serialization(e.to_string()))
    }

    /// Record constructed from a document (all absent fields at defaults)
    pub fn from_json_doc(doc: &Value) -> Self {
        let mut params = Self::new();
        params.from_json(doc, true);
        params
    }

    /// Record parsed from document text
    pub fn from_json_str(text: &str) -> OrbitResult<Self> {
        let doc: Value =
            serde_json::from_str(text).map_err(|e| OrbitError::Serialization(e.to_string()))?;
        Ok(Self::from_json_doc(&doc))
    }

    /// Import from a structured document
    ///
    /// Each canonical field present in `doc` is decoded and set through its
    /// clamp; absent fields are reset to defaults iff `reset`, otherwise
    /// left untouched. A present `excludedzones` array fully replaces the
    /// zone list; malformed entries are skipped individually. Never aborts:
    /// undecodable values keep the prior state and are logged.
    pub fn from_json(&mut self, doc: &Value, reset: bool) {
        let Some(obj) = doc.as_object() else {
            warn!("object parameter document is not an object: {doc}");
            return;
        };

        self.field(obj, Param::Channel, reset, decode_u32, Self::set_channel, Self::reset_channel);
        self.field(obj, Param::Duration, reset, decode_u64, Self::set_duration, Self::reset_duration);
        self.field(obj, Param::Position, reset, decode_position, Self::set_position, Self::reset_position);
        self.field(obj, Param::Gain, reset, decode_f64, Self::set_gain, Self::reset_gain);
        self.field(obj, Param::Width, reset, decode_f64, Self::set_width, Self::reset_width);
        self.field(obj, Param::Height, reset, decode_f64, Self::set_height, Self::reset_height);
        self.field(obj, Param::Depth, reset, decode_f64, Self::set_depth, Self::reset_depth);
        self.field(obj, Param::DivergenceBalance, reset, decode_f64, Self::set_divergence_balance, Self::reset_divergence_balance);
        self.field(obj, Param::DivergenceAzimuth, reset, decode_f64, Self::set_divergence_azimuth, Self::reset_divergence_azimuth);
        self.field(obj, Param::Diffuseness, reset, decode_f64, Self::set_diffuseness, Self::reset_diffuseness);
        self.field(obj, Param::Delay, reset, decode_f64, Self::set_delay, Self::reset_delay);
        self.field(obj, Param::Importance, reset, decode_i32, Self::set_importance, Self::reset_importance);
        self.field(obj, Param::Dialogue, reset, decode_i32, Self::set_dialogue, Self::reset_dialogue);
        self.field(obj, Param::ChannelLock, reset, decode_bool, Self::set_channel_lock, Self::reset_channel_lock);
        self.field(obj, Param::ChannelLockMaxDistance, reset, decode_f64, Self::set_channel_lock_max_distance, Self::reset_channel_lock_max_distance);
        self.field(obj, Param::Interact, reset, decode_bool, Self::set_interact, Self::reset_interact);
        self.field(obj, Param::Interpolate, reset, decode_bool, Self::set_interpolate, Self::reset_interpolate);
        self.field(obj, Param::InterpolationTime, reset, decode_u64, Self::set_interpolation_time, Self::reset_interpolation_time);
        self.field(obj, Param::OnScreen, reset, decode_bool, Self::set_on_screen, Self::reset_on_screen);
        self.field(obj, Param::OtherValues, reset, decode_parameter_set, Self::set_other_values, Self::reset_other_values);

        match obj.get(EXCLUDED_ZONES_KEY) {
            Some(Value::Array(entries)) => {
                self.excluded_zones.clear();
                for entry in entries {
                    match zone_from_json(entry) {
                        Ok(zone) => self.excluded_zones.push(zone),
                        Err(e) => warn!("skipping malformed excluded zone {entry}: {e}"),
                    }
                }
            }
            Some(other) => {
                warn!("ignoring '{EXCLUDED_ZONES_KEY}': expected an array, got {other}");
            }
            None if reset => self.reset_excluded_zones(),
            None => {}
        }
    }

    fn put(&self, obj: &mut Map<String, Value>, param: Param, force: bool, value: Value) {
        if force || self.mask.is_set(param) {
            obj.insert(param.name().into(), value);
        }
    }

    /// Decode-and-set one field: present → set (or keep prior state when
    /// undecodable), absent → reset iff requested
    fn field<T>(
        &mut self,
        obj: &Map<String, Value>,
        param: Param,
        reset: bool,
        decode: fn(&Value) -> Option<T>,
        set: fn(&mut Self, T),
        reset_field: fn(&mut Self),
    ) {
        match obj.get(param.name()) {
            Some(value) => match decode(value) {
                Some(decoded) => set(self, decoded),
                None => warn!("cannot decode '{}' from {value}, keeping prior value", param.name()),
            },
            None if reset => reset_field(self),
            None => {}
        }
    }

    /// Render all parameters into a flat string map
    ///
    /// Scalar fields become text entries; position, other values and the
    /// zone list become subtrees.
    pub fn get_all(&self, set: &mut ParameterSet, force: bool) {
        self.put_text(set, Param::Channel, force, self.channel.to_string());
        self.put_text(set, Param::Duration, force, self.duration.to_string());
        if force || self.mask.is_set(Param::Position) {
            set.set_tree(Param::Position.name(), self.position.to_parameter_set());
        }
        self.put_text(set, Param::Gain, force, self.gain.to_string());
        self.put_text(set, Param::Width, force, self.width.to_string());
        self.put_text(set, Param::Depth, force, self.depth.to_string());
        self.put_text(set, Param::Height, force, self.height.to_string());
        self.put_text(
            set,
            Param::DivergenceBalance,
            force,
            self.divergence_balance.to_string(),
        );
        self.put_text(
            set,
            Param::DivergenceAzimuth,
            force,
            self.divergence_azimuth.to_string(),
        );
        self.put_text(set, Param::Diffuseness, force, self.diffuseness.to_string());
        self.put_text(set, Param::Delay, force, self.delay.to_string());
        self.put_text(set, Param::Importance, force, self.importance.to_string());
        self.put_text(set, Param::Dialogue, force, self.dialogue.to_string());
        self.put_text(
            set,
            Param::ChannelLock,
            force,
            render_bool(self.channel_lock).to_string(),
        );
        self.put_text(
            set,
            Param::ChannelLockMaxDistance,
            force,
            self.channel_lock_max_distance.to_string(),
        );
        self.put_text(set, Param::Interact, force, render_bool(self.interact).to_string());
        self.put_text(
            set,
            Param::Interpolate,
            force,
            render_bool(self.interpolate).to_string(),
        );
        self.put_text(
            set,
            Param::InterpolationTime,
            force,
            self.interpolation_time.to_string(),
        );
        self.put_text(set, Param::OnScreen, force, render_bool(self.on_screen).to_string());
        if force || self.mask.is_set(Param::OtherValues) {
            set.set_tree(Param::OtherValues.name(), self.other_values.clone());
        }

        if !self.excluded_zones.is_empty() {
            let mut zones = ParameterSet::new();
            for (n, zone) in self.excluded_zones.iter().enumerate() {
                let mut rep = ParameterSet::new();
                let [minx, miny, minz] = zone.min_corner();
                let [maxx, maxy, maxz] = zone.max_corner();
                rep.set("name", zone.name());
                rep.set("minx", minx.to_string());
                rep.set("miny", miny.to_string());
                rep.set("minz", minz.to_string());
                rep.set("maxx", maxx.to_string());
                rep.set("maxy", maxy.to_string());
                rep.set("maxz", maxz.to_string());
                zones.set_tree(n.to_string(), rep);
            }
            set.set_tree(EXCLUDED_ZONES_KEY, zones);
        }
    }

    fn put_text(&self, set: &mut ParameterSet, param: Param, force: bool, value: String) {
        if force || self.mask.is_set(param) {
            set.set(param.name(), value);
        }
    }

    /// Set a single field from text by canonical name
    ///
    /// Returns false when the name is not settable this way or the value
    /// does not parse. `channel`, `position` and `othervalues` cannot be
    /// set from a single text value.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        let Some(param) = Param::from_name(name) else {
            return false;
        };
        match param {
            Param::Duration => match value.trim().parse::<i64>() {
                Ok(v) => {
                    self.set_duration(v.max(0) as u64);
                    true
                }
                Err(_) => false,
            },
            Param::Gain => self.parse_set(value, Self::set_gain),
            Param::Width => self.parse_set(value, Self::set_width),
            Param::Depth => self.parse_set(value, Self::set_depth),
            Param::Height => self.parse_set(value, Self::set_height),
            Param::DivergenceBalance => self.parse_set(value, Self::set_divergence_balance),
            Param::DivergenceAzimuth => self.parse_set(value, Self::set_divergence_azimuth),
            Param::Diffuseness => self.parse_set(value, Self::set_diffuseness),
            Param::Delay => self.parse_set(value, Self::set_delay),
            Param::Importance => self.parse_set(value, Self::set_importance),
            Param::Dialogue => self.parse_set(value, Self::set_dialogue),
            Param::ChannelLock => match parse_bool(value) {
                Some(v) => {
                    self.set_channel_lock(v);
                    true
                }
                None => false,
            },
            Param::ChannelLockMaxDistance => {
                self.parse_set(value, Self::set_channel_lock_max_distance)
            }
            Param::Interact => match parse_bool(value) {
                Some(v) => {
                    self.set_interact(v);
                    true
                }
                None => false,
            },
            Param::Interpolate => match parse_bool(value) {
                Some(v) => {
                    self.set_interpolate(v);
                    true
                }
                None => false,
            },
            Param::InterpolationTime => match value.trim().parse::<i64>() {
                Ok(v) => {
                    self.set_interpolation_time(v.max(0) as u64);
                    true
                }
                Err(_) => false,
            },
            Param::OnScreen => match parse_bool(value) {
                Some(v) => {
                    self.set_on_screen(v);
                    true
                }
                None => false,
            },
            Param::Channel | Param::Position | Param::OtherValues => false,
        }
    }

    fn parse_set<T: std::str::FromStr>(&mut self, value: &str, set: fn(&mut Self, T)) -> bool {
        match value.trim().parse::<T>() {
            Ok(v) => {
                set(self, v);
                true
            }
            Err(_) => false,
        }
    }

    /// Get a single field as text by canonical name
    ///
    /// `position` and `othervalues` have no single-text rendering and yield
    /// `None`, as do unknown names.
    pub fn get_value(&self, name: &str) -> Option<String> {
        let param = Param::from_name(name)?;
        match param {
            Param::Channel => Some(self.channel.to_string()),
            Param::Duration => Some(self.duration.to_string()),
            Param::Gain => Some(self.gain.to_string()),
            Param::Width => Some(self.width.to_string()),
            Param::Depth => Some(self.depth.to_string()),
            Param::Height => Some(self.height.to_string()),
            Param::DivergenceBalance => Some(self.divergence_balance.to_string()),
            Param::DivergenceAzimuth => Some(self.divergence_azimuth.to_string()),
            Param::Diffuseness => Some(self.diffuseness.to_string()),
            Param::Delay => Some(self.delay.to_string()),
            Param::Importance => Some(self.importance.to_string()),
            Param::Dialogue => Some(self.dialogue.to_string()),
            Param::ChannelLock => Some(render_bool(self.channel_lock).to_string()),
            Param::ChannelLockMaxDistance => Some(self.channel_lock_max_distance.to_string()),
            Param::Interact => Some(render_bool(self.interact).to_string()),
            Param::Interpolate => Some(render_bool(self.interpolate).to_string()),
            Param::InterpolationTime => Some(self.interpolation_time.to_string()),
            Param::OnScreen => Some(render_bool(self.on_screen).to_string()),
            Param::Position | Param::OtherValues => None,
        }
    }

    /// Reset a single field to its default by canonical name
    ///
    /// Returns false for unknown names and for `othervalues`.
    pub fn reset_value(&mut self, name: &str) -> bool {
        let Some(param) = Param::from_name(name) else {
            return false;
        };
        match param {
            Param::Channel => self.reset_channel(),
            Param::Duration => self.reset_duration(),
            Param::Position => self.reset_position(),
            Param::Gain => self.reset_gain(),
            Param::Width => self.reset_width(),
            Param::Height => self.reset_height(),
            Param::Depth => self.reset_depth(),
            Param::DivergenceBalance => self.reset_divergence_balance(),
            Param::DivergenceAzimuth => self.reset_divergence_azimuth(),
            Param::Diffuseness => self.reset_diffuseness(),
            Param::Delay => self.reset_delay(),
            Param::Importance => self.reset_importance(),
            Param::Dialogue => self.reset_dialogue(),
            Param::ChannelLock => self.reset_channel_lock(),
            Param::ChannelLockMaxDistance => self.reset_channel_lock_max_distance(),
            Param::Interact => self.reset_interact(),
            Param::Interpolate => self.reset_interpolate(),
            Param::InterpolationTime => self.reset_interpolation_time(),
            Param::OnScreen => self.reset_on_screen(),
            Param::OtherValues => return false,
        }
        true
    }

    /// Render set parameters as flat text
    pub fn to_text(&self, pretty: bool) -> String {
        let mut set = ParameterSet::new();
        self.get_all(&mut set, false);
        set.to_text(pretty)
    }
}

impl Modifier {
    /// Export the set deltas to a structured document; unset deltas are
    /// absent
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        if let Some(rotation) = self.rotation() {
            if let Ok(v) = serde_json::to_value(rotation) {
                obj.insert("rotation".into(), v);
            }
        }
        if let Some(position) = self.position() {
            if let Ok(v) = serde_json::to_value(position) {
                obj.insert("position".into(), v);
            }
        }
        if let Some(gain) = self.gain() {
            obj.insert("gain".into(), Value::from(gain));
        }
        if let Some(scale) = self.scale() {
            obj.insert("scale".into(), Value::from(scale));
        }
        Value::Object(obj)
    }

    /// Modifier built from a structured document
    ///
    /// Absent keys leave the delta unset; an undecodable value is skipped
    /// with a warning. The custom-effect hook has no document form.
    pub fn from_json_doc(doc: &Value) -> Self {
        let mut modifier = Self::new();
        let Some(obj) = doc.as_object() else {
            warn!("modifier document is not an object: {doc}");
            return modifier;
        };
        if let Some(value) = obj.get("rotation") {
            match serde_json::from_value(value.clone()) {
                Ok(rotation) => modifier = modifier.with_rotation(rotation),
                Err(_) => warn!("cannot decode modifier rotation from {value}"),
            }
        }
        if let Some(value) = obj.get("position") {
            match decode_position(value) {
                Some(position) => modifier = modifier.with_position(position),
                None => warn!("cannot decode modifier position from {value}"),
            }
        }
        if let Some(value) = obj.get("gain") {
            match decode_f64(value) {
                Some(gain) => modifier = modifier.with_gain(gain),
                None => warn!("cannot decode modifier gain from {value}"),
            }
        }
        if let Some(value) = obj.get("scale") {
            match decode_f64(value) {
                Some(scale) => modifier = modifier.with_scale(scale),
                None => warn!("cannot decode modifier scale from {value}"),
            }
        }
        modifier
    }
}

impl fmt::Display for ObjectParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(false))
    }
}

fn decode_f64(value: &Value) -> Option<f64> {
    value.as_f64()
}

fn decode_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|v| u32::try_from(v).ok())
}

fn decode_u64(value: &Value) -> Option<u64> {
    value.as_u64()
}

fn decode_i32(value: &Value) -> Option<i32> {
    value
        .as_i64()
        .map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

fn decode_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

fn decode_position(value: &Value) -> Option<Position> {
    serde_json::from_value(value.clone()).ok()
}

/// Supplementary values arrive with mixed scalar types; numbers and bools
/// are stored as their text rendering, nested objects become subtrees
fn decode_parameter_set(value: &Value) -> Option<ParameterSet> {
    let obj = value.as_object()?;
    let mut set = ParameterSet::new();
    for (key, entry) in obj {
        match entry {
            Value::String(s) => set.set(key.clone(), s.clone()),
            Value::Number(n) => set.set(key.clone(), n.to_string()),
            Value::Bool(b) => set.set(key.clone(), render_bool(*b)),
            Value::Object(_) => {
                if let Some(tree) = decode_parameter_set(entry) {
                    set.set_tree(key.clone(), tree);
                }
            }
            _ => warn!("skipping supplementary value '{key}': {entry}"),
        }
    }
    Some(set)
}
