use serde::Deserialize;
use serde_json::Value;

// page
//  ├── props[]          raw listing objects, kept as Value for the snapshot
//  └── totalPages       reported on page 1; absent means single page

#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub props: Vec<Value>,
    #[serde(rename = "totalPages")]
    pub total_pages: Option<u32>,
}

/// Raw listing entry as the search API returns it. Everything is
/// optional on the wire; normalization fills in defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    pub address: Option<String>,
    #[serde(rename = "detailUrl")]
    pub detail_url: Option<String>,
    pub price: Option<i64>,
    #[serde(rename = "lotAreaValue")]
    pub lot_area_value: Option<f64>,
    #[serde(rename = "lotAreaUnit")]
    pub lot_area_unit: Option<String>,
    #[serde(rename = "livingArea")]
    pub living_area: Option<f64>,
    #[serde(rename = "imgSrc")]
    pub img_src: Option<String>,
}
