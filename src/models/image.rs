use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static DATA_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:image/(png|jpe?g|gif|webp|svg\+xml);base64,(?P<payload>[A-Za-z0-9+/=\s]+)$").expect("valid data url pattern"));

/// Where an image points: a remote URL, or bytes inlined by the admin upload form.
#[derive(Debug, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Remote(&'a str),
    Inline { mime: &'a str, bytes: Vec<u8> },
}

pub fn parse_image_source(value: &str) -> Option<ImageSource<'_>> {
    if value.starts_with("https://") || value.starts_with("http://") {
        return Some(ImageSource::Remote(value));
    }

    let captures = DATA_URL.captures(value)?;
    let mime = value.strip_prefix("data:")?.split(';').next()?;
    let payload: String = captures["payload"].chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(payload).ok()?;

    Some(ImageSource::Inline { mime, bytes })
}

pub(crate) fn validate_image_source(value: &str) -> Result<(), ValidationError> {
    match parse_image_source(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_image_source")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_remote_urls() {
        let url = "https://images.unsplash.com/photo-1565090567208-c8038cfcf6cd";
        assert_eq!(parse_image_source(url), Some(ImageSource::Remote(url)));
    }

    #[test]
    fn decodes_inline_data_urls() {
        let parsed = parse_image_source("data:image/png;base64,iVBORw0KGgo=").unwrap();
        match parsed {
            ImageSource::Inline { mime, bytes } => {
                assert_eq!(mime, "image/png");
                assert_eq!(&bytes[1..4], b"PNG");
            }
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn rejects_non_image_data_urls() {
        assert!(parse_image_source("data:text/html;base64,PGgxPg==").is_none());
    }

    #[test]
    fn rejects_corrupt_base64() {
        assert!(validate_image_source("data:image/jpeg;base64,%%%").is_err());
        assert!(validate_image_source("data:image/jpeg;base64,abc").is_err());
    }

    #[test]
    fn rejects_relative_paths() {
        assert!(validate_image_source("/static/doctor.png").is_err());
    }
}
