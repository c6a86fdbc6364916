use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct Doctor {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub specialty: String,
    pub description: String,
    #[validate(custom(function = "crate::models::image::validate_image_source"))]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_requires_name_and_specialty() {
        let doctor = Doctor {
            image: "https://images.unsplash.com/photo-1565090567208-c8038cfcf6cd".to_string(),
            ..Doctor::default()
        };
        let errors = doctor.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("specialty"));
    }

    #[test]
    fn doctor_with_inline_image_is_valid() {
        let doctor = Doctor {
            id: String::new(),
            name: "Dra. Ana Martínez".to_string(),
            specialty: "Estética Dental".to_string(),
            description: String::new(),
            image: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        };
        assert!(doctor.validate().is_ok());
    }
}
