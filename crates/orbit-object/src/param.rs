//! Parameter identifiers and the presence bitmap

/// Closed enumeration of object parameters
///
/// Variant order fixes each parameter's bit position in [`ParamMask`] and
/// the canonical serialization order; `name()` is the stable wire/text key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Param {
    Channel = 0,
    Duration,
    Position,
    Gain,
    Width,
    Height,
    Depth,
    DivergenceBalance,
    DivergenceAzimuth,
    Diffuseness,
    Delay,
    Importance,
    Dialogue,
    ChannelLock,
    ChannelLockMaxDistance,
    Interact,
    Interpolate,
    InterpolationTime,
    OnScreen,
    OtherValues,
}

impl Param {
    /// Every parameter, in canonical order
    pub const ALL: [Param; 20] = [
        Param::Channel,
        Param::Duration,
        Param::Position,
        Param::Gain,
        Param::Width,
        Param::Height,
        Param::Depth,
        Param::DivergenceBalance,
        Param::DivergenceAzimuth,
        Param::Diffuseness,
        Param::Delay,
        Param::Importance,
        Param::Dialogue,
        Param::ChannelLock,
        Param::ChannelLockMaxDistance,
        Param::Interact,
        Param::Interpolate,
        Param::InterpolationTime,
        Param::OnScreen,
        Param::OtherValues,
    ];

    /// Canonical name used by every codec surface
    pub fn name(self) -> &'static str {
        match self {
            Param::Channel => "channel",
            Param::Duration => "duration",
            Param::Position => "position",
            Param::Gain => "gain",
            Param::Width => "width",
            Param::Height => "height",
            Param::Depth => "depth",
            Param::DivergenceBalance => "divergencebalance",
            Param::DivergenceAzimuth => "divergenceazimuth",
            Param::Diffuseness => "diffuseness",
            Param::Delay => "delay",
            Param::Importance => "importance",
            Param::Dialogue => "dialogue",
            Param::ChannelLock => "channellock",
            Param::ChannelLockMaxDistance => "channellockmaxdistance",
            Param::Interact => "interact",
            Param::Interpolate => "interpolate",
            Param::InterpolationTime => "interpolationtime",
            Param::OnScreen => "onscreen",
            Param::OtherValues => "othervalues",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Param::Channel => "Channel number (0-based)",
            Param::Duration => "Block duration (ns)",
            Param::Position => "Channel position",
            Param::Gain => "Channel gain (linear)",
            Param::Width => "Channel width",
            Param::Height => "Channel height",
            Param::Depth => "Channel depth",
            Param::DivergenceBalance => "Channel divergence balance (0-1)",
            Param::DivergenceAzimuth => "Channel divergence azimuth (degrees)",
            Param::Diffuseness => "Channel diffuseness (0-1)",
            Param::Delay => "Channel delay (seconds)",
            Param::Importance => "Channel importance (0-10)",
            Param::Dialogue => "Whether channel is dialogue (0, 1 or 2)",
            Param::ChannelLock => "Channel is locked to channel (speaker)",
            Param::ChannelLockMaxDistance => "Channel is locked to channel (speaker) max distance",
            Param::Interact => "Channel can be interacted with",
            Param::Interpolate => "Interpolate channel metadata changes",
            Param::InterpolationTime => "Time for interpolation of channel metadata changes (ns)",
            Param::OnScreen => "Channel is on screen",
            Param::OtherValues => "Other channel values",
        }
    }

    /// Look up a parameter by canonical name
    pub fn from_name(name: &str) -> Option<Param> {
        Param::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Whether the parameter may be overridden by downstream metadata
    ///
    /// `channel` and `othervalues` cannot be overridden.
    pub fn overrideable(self) -> bool {
        !matches!(self, Param::Channel | Param::OtherValues)
    }

    #[inline]
    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Presence bitmap: one bit per [`Param`]
///
/// A set bit means the parameter was explicitly assigned rather than left
/// at its type default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamMask(u32);

impl ParamMask {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub fn mark(&mut self, param: Param) {
        self.0 |= param.bit();
    }

    #[inline]
    pub fn clear(&mut self, param: Param) {
        self.0 &= !param.bit();
    }

    #[inline]
    pub fn is_set(&self, param: Param) -> bool {
        self.0 & param.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for p in Param::ALL {
            assert_eq!(Param::from_name(p.name()), Some(p));
        }
        assert_eq!(Param::from_name("excludedzones"), None);
        assert_eq!(Param::from_name("bogus"), None);
    }

    #[test]
    fn test_mask() {
        let mut mask = ParamMask::EMPTY;
        assert!(mask.is_empty());

        mask.mark(Param::Gain);
        mask.mark(Param::OnScreen);
        assert!(mask.is_set(Param::Gain));
        assert!(mask.is_set(Param::OnScreen));
        assert!(!mask.is_set(Param::Width));

        mask.clear(Param::Gain);
        assert!(!mask.is_set(Param::Gain));
        assert!(!mask.is_empty());
    }

    #[test]
    fn test_overrideable() {
        assert!(!Param::Channel.overrideable());
        assert!(!Param::OtherValues.overrideable());
        assert!(Param::Gain.overrideable());
        assert!(Param::Position.overrideable());
    }
}
