use strum::{Display, EnumString};

/// Modal sizing vocabulary shared between trigger attributes
/// (`data-modal-size`) and the `size` response directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Size {
    Small,
    Normal,
    Large,
}

impl Default for Size {
    fn default() -> Self {
        Self::Normal
    }
}

impl Size {
    /// The class applied to the sizing wrapper, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Small => Some("modal-sm"),
            Self::Normal => None,
            Self::Large => Some("modal-lg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("small", Some(Size::Small))]
    #[case("normal", Some(Size::Normal))]
    #[case("large", Some(Size::Large))]
    #[case("giant", None)]
    #[case("", None)]
    #[case("Large", None)]
    fn test_from_str(#[case] input: &str, #[case] size: Option<Size>) {
        assert_eq!(Size::from_str(input).ok(), size);
    }

    #[rstest]
    #[case(Size::Small, Some("modal-sm"))]
    #[case(Size::Normal, None)]
    #[case(Size::Large, Some("modal-lg"))]
    fn test_class(#[case] size: Size, #[case] class: Option<&str>) {
        assert_eq!(size.class(), class);
    }
}
