use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Testimonial {
    pub id: String,
    /// Author's full name as it was when the testimonial was written.
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub approved: bool,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct TestimonialRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[validate(length(min = 1))]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_must_be_between_one_and_five() {
        for rating in [0u8, 6] {
            let request = TestimonialRequest {
                rating,
                comment: "ok".to_string(),
            };
            assert!(request.validate().is_err(), "rating {} should be rejected", rating);
        }

        let request = TestimonialRequest {
            rating: 5,
            comment: "Great service".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_comment_is_rejected() {
        let request = TestimonialRequest {
            rating: 4,
            comment: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("comment"));
    }
}
