use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// A review record, upstream-shaped. Only the fields the generator rewrites
// are typed; everything else the template carries passes through untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub rating: Option<i64>,
    #[serde(default)]
    pub review_category: Vec<CategoryRating>,
    pub submitted_at: String,
    pub guest_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// One per-category score attached to a review.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryRating {
    pub rating: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Response envelope for a review listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewBatch {
    pub status: String,
    pub result: Vec<Review>,
    pub count: usize,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    result: Vec<Review>,
}

// Static template reviews bundled with the binary, parsed once at startup
// and immutable afterwards.
#[derive(Clone, Debug)]
pub struct ReviewTemplateSet {
    templates: Vec<Review>,
}

impl ReviewTemplateSet {
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(include_str!("../../data/review_templates.json"))
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let file: TemplateFile = serde_json::from_str(raw)?;
        if file.result.is_empty() {
            return Err(serde_json::Error::custom("template set has no reviews"));
        }

        Ok(Self {
            templates: file.result,
        })
    }

    pub fn records(&self) -> &[Review] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
