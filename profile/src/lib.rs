//! Shared profile model and URL codec for the shareable page address.
//!
//! This crate owns the canonical [`ProfileState`] record used by both
//! `server` and `client`. The codec serializes the record to camelCase JSON
//! and wraps it in base64 so the whole profile travels inside a single
//! `portfolio` query parameter; decoding the parameter reconstructs the
//! page purely from its address.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Error returned by [`decode_profile`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The query parameter was present but empty.
    #[error("empty profile payload")]
    Empty,
    /// The payload is not valid base64.
    #[error("failed to decode base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not valid UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The decoded text is not valid profile JSON.
    #[error("failed to parse profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One certificate entry displayed in the certificates section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Stable identity key, unique within the sequence (UUID v4 string).
    /// Assigned at creation, never changed, never reused after deletion.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Image path or data-URL of the scanned certificate.
    pub image: String,
    /// Non-unique grouping key; the section renders one folder per category.
    pub category: String,
    /// Issuing organization, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Issue date as free text, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// The canonical record describing the portfolio owner's editable content.
///
/// Wire format: camelCase JSON under base64 in the `portfolio` query
/// parameter. Missing fields take defaults and unknown fields are ignored,
/// so older links keep decoding as the record grows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileState {
    /// Display name shown in the hero section.
    pub name: String,
    /// Free-text bio shown under the name.
    pub bio: String,
    /// Static asset path or data-URL for the hero image.
    pub profile_image: String,
    /// Degree line of the education details.
    pub degree: String,
    /// College line of the education details.
    pub college: String,
    /// Batch (years attended) line of the education details.
    pub batch: String,
    /// School line of the education details.
    pub school: String,
    /// Ordered skill list; insertion order is display order and duplicates
    /// are permitted.
    pub skills: Vec<String>,
    /// Ordered certificate records keyed by [`Certificate::id`].
    pub certificates: Vec<Certificate>,
}

impl Default for ProfileState {
    /// Hard-coded placeholder profile used whenever the address carries no
    /// (valid) state.
    fn default() -> Self {
        Self {
            name: "John Doe".to_owned(),
            bio: "I am a passionate software developer with expertise in web \
                  technologies and a love for creating innovative solutions."
                .to_owned(),
            profile_image: "/placeholder.svg".to_owned(),
            degree: "Bachelor of Computer Science".to_owned(),
            college: "University of Technology".to_owned(),
            batch: "2020-2024".to_owned(),
            school: "Greenwood High School".to_owned(),
            skills: vec![
                "JavaScript".to_owned(),
                "TypeScript".to_owned(),
                "React".to_owned(),
                "Node.js".to_owned(),
                "PostgreSQL".to_owned(),
                "Docker".to_owned(),
            ],
            certificates: vec![
                Certificate {
                    id: "cert-1-1".to_owned(),
                    title: "1-1 Marks Sheet".to_owned(),
                    image: "/placeholder.svg".to_owned(),
                    category: "University Marks Sheets".to_owned(),
                    issuer: Some("University of Technology".to_owned()),
                    date: Some("2023".to_owned()),
                },
                Certificate {
                    id: "cert-1-2".to_owned(),
                    title: "1-2 Marks Sheet".to_owned(),
                    image: "/placeholder.svg".to_owned(),
                    category: "University Marks Sheets".to_owned(),
                    issuer: Some("University of Technology".to_owned()),
                    date: Some("2023".to_owned()),
                },
                Certificate {
                    id: "cert-2-1".to_owned(),
                    title: "2-1 Marks Sheet".to_owned(),
                    image: "/placeholder.svg".to_owned(),
                    category: "University Marks Sheets".to_owned(),
                    issuer: Some("University of Technology".to_owned()),
                    date: Some("2024".to_owned()),
                },
            ],
        }
    }
}

/// A partial [`ProfileState`]: `Some` fields overwrite, `None` fields are
/// left untouched.
///
/// This is a shallow merge: a `skills` or `certificates` update supplies
/// the entire new sequence, never a delta.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub degree: Option<String>,
    pub college: Option<String>,
    pub batch: Option<String>,
    pub school: Option<String>,
    pub skills: Option<Vec<String>>,
    pub certificates: Option<Vec<Certificate>>,
}

impl ProfileState {
    /// Shallow-merge `update` into this record in place.
    ///
    /// Fields the update does not supply are preserved; supplied fields
    /// overwrite wholesale. Always succeeds.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(profile_image) = update.profile_image {
            self.profile_image = profile_image;
        }
        if let Some(degree) = update.degree {
            self.degree = degree;
        }
        if let Some(college) = update.college {
            self.college = college;
        }
        if let Some(batch) = update.batch {
            self.batch = batch;
        }
        if let Some(school) = update.school {
            self.school = school;
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        if let Some(certificates) = update.certificates {
            self.certificates = certificates;
        }
    }

    /// Return a copy of this record with `update` applied.
    #[must_use]
    pub fn merged(&self, update: ProfileUpdate) -> Self {
        let mut next = self.clone();
        next.apply(update);
        next
    }
}

/// Encode a profile into the base64 text carried by the `portfolio` query
/// parameter.
///
/// # Panics
///
/// Never panics in practice; the record contains only strings and sequences
/// of strings, which always serialize. The degenerate branch encodes the
/// empty string, which callers treat as "leave the address unchanged".
#[must_use]
pub fn encode_profile(state: &ProfileState) -> String {
    let json = serde_json::to_string(state).unwrap_or_default();
    STANDARD.encode(json)
}

/// Decode the base64 text of a `portfolio` query parameter back into a
/// profile.
///
/// # Errors
///
/// Returns [`DecodeError::Empty`] for empty input, [`DecodeError::Base64`]
/// for text that is not valid base64, and [`DecodeError::Utf8`] /
/// [`DecodeError::Json`] when the decoded bytes are not a profile. Callers
/// treat every error as "no data" and fall back to defaults; a corrupt
/// payload never yields a partially-applied state.
pub fn decode_profile(encoded: &str) -> Result<ProfileState, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }
    let bytes = STANDARD.decode(encoded)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}
