//! Static portfolio content.
//!
//! Records mirror the JSON shipped in `data/portfolio.json`. Every field is
//! optional on the wire: missing keys and explicit `null`s both collapse to
//! empty strings and empty lists, so formatters never see a hole.

use crate::error::{PortfolioError, Result};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

const EMBEDDED: &str = include_str!("../data/portfolio.json");

fn nullable<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// One decorated line: optional icon glyph and colour, optional link.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub url: Option<String>,
}

impl Item {
    pub fn text(text: &str) -> Self {
        Item {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banners {
    #[serde(deserialize_with = "nullable")]
    pub whoami: Vec<String>,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub role: String,
    #[serde(deserialize_with = "nullable")]
    pub tagline: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub summary: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub interests: Vec<Item>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "nullable")]
    pub institution: String,
    #[serde(deserialize_with = "nullable")]
    pub degree: String,
    #[serde(deserialize_with = "nullable")]
    pub period: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub notes: Vec<Item>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "nullable")]
    pub entries: Vec<EducationEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub role: String,
    #[serde(deserialize_with = "nullable")]
    pub period: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub highlights: Vec<Item>,
    #[serde(deserialize_with = "nullable")]
    pub stack: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "nullable")]
    pub entries: Vec<ExperienceEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub items: Vec<Item>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "nullable")]
    pub categories: Vec<SkillCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub issuer: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    pub credential_id: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certifications {
    #[serde(deserialize_with = "nullable")]
    pub entries: Vec<Certification>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub links: Vec<Item>,
}

/// Read-only holder of every section, built once at startup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStore {
    #[serde(deserialize_with = "nullable")]
    banners: Banners,
    #[serde(deserialize_with = "nullable")]
    profile: Profile,
    #[serde(deserialize_with = "nullable")]
    education: Education,
    #[serde(deserialize_with = "nullable")]
    experience: Experience,
    #[serde(deserialize_with = "nullable")]
    skills: Skills,
    #[serde(deserialize_with = "nullable")]
    certifications: Certifications,
    #[serde(deserialize_with = "nullable")]
    contact: Contact,
}

impl ContentStore {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PortfolioError::Content)
    }

    /// The bundled content. A broken bundle yields an empty store.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED).unwrap_or_else(|e| {
            warn!("embedded portfolio content unreadable, starting empty: {}", e);
            Self::default()
        })
    }

    pub fn banners(&self) -> &Banners {
        &self.banners
    }
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
    pub fn education(&self) -> &Education {
        &self.education
    }
    pub fn experience(&self) -> &Experience {
        &self.experience
    }
    pub fn skills(&self) -> &Skills {
        &self.skills
    }
    pub fn certifications(&self) -> &Certifications {
        &self.certifications
    }
    pub fn contact(&self) -> &Contact {
        &self.contact
    }
}
