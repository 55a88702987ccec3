use serde::{Deserialize, Serialize};

/// A winery or restaurant listed on a route card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub phone: String,
}

impl Venue {
    /// Phone numbers are linked as given, without normalization.
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

#[test]
fn tel_href_keeps_phone_verbatim() {
    let venue = Venue {
        name: "Bodegas Muga".into(),
        details: "Barrio de la Estación".into(),
        phone: "+34 941 311 825".into(),
    };
    assert_eq!(venue.tel_href(), "tel:+34 941 311 825");
}
