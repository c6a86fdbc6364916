use serde::{Deserialize, Serialize};
use validator::Validate;

/// A treatment offered by the clinic. `icon` is a symbolic name the view resolves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct Service {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::models::image::validate_image_source"))]
    pub image: Option<String>,
}
