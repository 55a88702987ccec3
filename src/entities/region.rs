/// Known wine regions and their card and map styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Rioja,
    Tarragona,
    CostaBrava,
    Penedes,
}

impl Region {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rioja" => Some(Self::Rioja),
            "tarragona" => Some(Self::Tarragona),
            "costa-brava" => Some(Self::CostaBrava),
            "penedes" => Some(Self::Penedes),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rioja => "La Rioja",
            Self::Tarragona => "Tarragona",
            Self::CostaBrava => "Costa Brava",
            Self::Penedes => "Penedès",
        }
    }

    /// Inline style fragment for the region badge background and text color.
    pub fn badge_style(&self) -> &'static str {
        match self {
            Self::Rioja => "rgba(102, 126, 234, 0.1); color: #667eea",
            Self::Tarragona => "rgba(52, 152, 219, 0.1); color: #3498db",
            Self::CostaBrava => "rgba(46, 204, 113, 0.1); color: #2ecc71",
            Self::Penedes => "rgba(241, 196, 15, 0.1); color: #f1c40f",
        }
    }

    pub fn line_color(&self) -> &'static str {
        match self {
            Self::Rioja => "#667eea",
            Self::Tarragona => "#3498db",
            Self::CostaBrava => "#2ecc71",
            Self::Penedes => "#f1c40f",
        }
    }
}

/// Styling for an arbitrary region tag. Unknown tags keep their raw text as
/// the display name and borrow Tarragona's colors.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionStyle {
    pub name: String,
    pub badge_style: &'static str,
    pub line_color: &'static str,
}

impl RegionStyle {
    pub fn for_tag(tag: &str) -> Self {
        match Region::from_tag(tag) {
            Some(region) => Self {
                name: region.display_name().into(),
                badge_style: region.badge_style(),
                line_color: region.line_color(),
            },
            None => Self {
                name: tag.into(),
                badge_style: Region::Tarragona.badge_style(),
                line_color: Region::Tarragona.line_color(),
            },
        }
    }
}

#[test]
fn known_region_styles() {
    let style = RegionStyle::for_tag("penedes");
    assert_eq!(style.name, "Penedès");
    assert_eq!(style.line_color, "#f1c40f");

    let style = RegionStyle::for_tag("costa-brava");
    assert_eq!(style.name, "Costa Brava");
    assert_eq!(style.badge_style, "rgba(46, 204, 113, 0.1); color: #2ecc71");
}

#[test]
fn unknown_region_falls_back_to_tarragona_colors() {
    let style = RegionStyle::for_tag("priorat");
    assert_eq!(style.name, "priorat");
    assert_eq!(style.badge_style, Region::Tarragona.badge_style());
    assert_eq!(style.line_color, "#3498db");
}
