//! Book audience enumeration.

use std::str::FromStr;

use crate::errors::AppError;

const AUDIENCE_CHILDREN: &str = "CHILDREN";
const AUDIENCE_YOUNG_ADULT: &str = "YOUNG_ADULT";
const AUDIENCE_ADULT: &str = "ADULT";
const AUDIENCE_ALL: &str = "ALL";

/// Readership category of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Audience {
    Children,
    YoungAdult,
    Adult,
    #[default]
    All,
}

impl Audience {
    /// Every audience, in the order forms list them
    pub const VARIANTS: [Audience; 4] = [
        Audience::Children,
        Audience::YoungAdult,
        Audience::Adult,
        Audience::All,
    ];

    /// Stored and submitted name (e.g. `YOUNG_ADULT`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Children => AUDIENCE_CHILDREN,
            Audience::YoungAdult => AUDIENCE_YOUNG_ADULT,
            Audience::Adult => AUDIENCE_ADULT,
            Audience::All => AUDIENCE_ALL,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Children => "Children",
            Audience::YoungAdult => "Young Adult",
            Audience::Adult => "Adult",
            Audience::All => "All",
        }
    }
}

impl FromStr for Audience {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            AUDIENCE_CHILDREN => Ok(Audience::Children),
            AUDIENCE_YOUNG_ADULT => Ok(Audience::YoungAdult),
            AUDIENCE_ADULT => Ok(Audience::Adult),
            AUDIENCE_ALL => Ok(Audience::All),
            _ => Err(AppError::validation(format!("Not a valid audience: {}", s))),
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_names() {
        assert_eq!("CHILDREN".parse::<Audience>().unwrap(), Audience::Children);
        assert_eq!("YOUNG_ADULT".parse::<Audience>().unwrap(), Audience::YoungAdult);
        assert_eq!("ADULT".parse::<Audience>().unwrap(), Audience::Adult);
        assert_eq!("ALL".parse::<Audience>().unwrap(), Audience::All);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("children".parse::<Audience>().unwrap(), Audience::Children);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let result = "TEENS".parse::<Audience>();
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_display_round_trips() {
        for audience in Audience::VARIANTS {
            assert_eq!(audience.to_string().parse::<Audience>().unwrap(), audience);
        }
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Audience::default(), Audience::All);
        assert_eq!(Audience::YoungAdult.label(), "Young Adult");
    }
}
