use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapKind(pub String);

impl fmt::Display for UnknownColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown palette '{}', expected one of: cycle, fire", self.0)
    }
}

impl Error for UnknownColourMapKind {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKind {
    #[default]
    ChannelCycle,
    FireGradient,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[Self::ChannelCycle, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ChannelCycle => "Channel cycle",
            Self::FireGradient => "Fire gradient",
        }
    }
}

impl FromStr for MandelbrotColourMapKind {
    type Err = UnknownColourMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cycle" => Ok(Self::ChannelCycle),
            "fire" => Ok(Self::FireGradient),
            _ => Err(UnknownColourMapKind(s.to_string())),
        }
    }
}

impl fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKind::ALL.first(),
            Some(&MandelbrotColourMapKind::default())
        );
    }

    #[test]
    fn parses_config_names() {
        assert_eq!("cycle".parse(), Ok(MandelbrotColourMapKind::ChannelCycle));
        assert_eq!(" FIRE ".parse(), Ok(MandelbrotColourMapKind::FireGradient));
        assert_eq!(
            "rainbow".parse::<MandelbrotColourMapKind>(),
            Err(UnknownColourMapKind("rainbow".to_string()))
        );
    }
}
