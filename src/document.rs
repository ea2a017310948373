// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document models as the registry expects them on the wire.
//!
//! Field names follow the registry's snake_case contract, with two
//! camelCase exceptions (`importRequest`, `participantInn`). Dates carry no
//! time of day and are always written as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document submitted for registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    #[serde(rename = "importRequest", default)]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    #[serde(with = "date_format")]
    pub production_date: NaiveDate,
    pub production_type: String,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "date_format::option"
    )]
    pub reg_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_number: Option<String>,
}

/// Participant on whose behalf the document is filed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

/// One product entry of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "date_format::option"
    )]
    pub certificate_document_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document_number: Option<String>,
    pub owner_inn: String,
    pub producer_inn: String,
    #[serde(with = "date_format")]
    pub production_date: NaiveDate,
    pub tnved_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uit_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uitu_code: Option<String>,
}

impl Document {
    /// Encode the document as the registry's JSON body
    pub fn to_wire(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Date-only `YYYY-MM-DD` encoding
mod date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }

    pub mod option {
        use super::FORMAT;
        use chrono::NaiveDate;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.serialize_some(&date.format(FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| NaiveDate::parse_from_str(&raw, FORMAT).map_err(de::Error::custom))
                .transpose()
        }
    }
}
