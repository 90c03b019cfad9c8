//! # Special Effects
//!
//! Rolled equipment effects. In the document an effect is a compact string
//! such as `burn_on_hit:17%:4s` or `thorns`; in code it is a [`SpecialEffect`]
//! over the closed [`SpecialEffectKind`] set, so an unknown label can neither be
//! generated nor parsed back.

use crate::{EffectShape, SpecialEffectKind};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A special effect with its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialEffect {
    /// Proc on hit with a percentage chance, lasting some seconds
    OnHit {
        kind: SpecialEffectKind,
        chance_pct: u32,
        duration_secs: u32,
    },
    /// Flat percentage bonus
    Percent {
        kind: SpecialEffectKind,
        bonus_pct: u32,
    },
    /// Effect without magnitude
    Flag(SpecialEffectKind),
}

impl SpecialEffect {
    pub fn kind(&self) -> SpecialEffectKind {
        match *self {
            SpecialEffect::OnHit { kind, .. } => kind,
            SpecialEffect::Percent { kind, .. } => kind,
            SpecialEffect::Flag(kind) => kind,
        }
    }
}

impl fmt::Display for SpecialEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SpecialEffect::OnHit {
                kind,
                chance_pct,
                duration_secs,
            } => write!(f, "{}:{}%:{}s", kind.label(), chance_pct, duration_secs),
            SpecialEffect::Percent { kind, bonus_pct } => {
                write!(f, "{}:{}%", kind.label(), bonus_pct)
            }
            SpecialEffect::Flag(kind) => f.write_str(kind.label()),
        }
    }
}

/// Error returned when an effect string does not describe a known effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized special effect '{0}'")]
pub struct ParseEffectError(pub String);

fn parse_number(part: Option<&str>, suffix: char) -> Option<u32> {
    part?.strip_suffix(suffix)?.parse().ok()
}

impl FromStr for SpecialEffect {
    type Err = ParseEffectError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseEffectError(text.to_string());

        let kind = SpecialEffectKind::ALL
            .into_iter()
            .filter(|kind| {
                let label = kind.label();
                text == label
                    || text
                        .strip_prefix(label)
                        .is_some_and(|rest| rest.starts_with(':'))
            })
            .max_by_key(|kind| kind.label().len())
            .ok_or_else(unknown)?;

        let rest = &text[kind.label().len()..];
        let mut parts = rest.split(':').skip(1);

        let effect = match kind.shape() {
            EffectShape::Flag if rest.is_empty() => SpecialEffect::Flag(kind),
            EffectShape::Percent => SpecialEffect::Percent {
                kind,
                bonus_pct: parse_number(parts.next(), '%').ok_or_else(unknown)?,
            },
            EffectShape::OnHit => SpecialEffect::OnHit {
                kind,
                chance_pct: parse_number(parts.next(), '%').ok_or_else(unknown)?,
                duration_secs: parse_number(parts.next(), 's').ok_or_else(unknown)?,
            },
            EffectShape::Flag => return Err(unknown()),
        };

        if parts.next().is_some() {
            return Err(unknown());
        }
        Ok(effect)
    }
}

impl Serialize for SpecialEffect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpecialEffect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
