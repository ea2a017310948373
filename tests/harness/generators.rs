// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Test data generators.

use chrono::NaiveDate;
use registry_submitter::{Description, Document, Product};

/// Build a date, panicking on invalid input.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A product entry with a UIT code and certificate data.
pub fn product(index: usize) -> Product {
    Product {
        certificate_document: Some("CONFORMITY_CERTIFICATE".to_string()),
        certificate_document_date: Some(date(2023, 4, 20)),
        certificate_document_number: Some(format!("RU-{index:04}")),
        owner_inn: "7701000001".to_string(),
        producer_inn: "7703000003".to_string(),
        production_date: date(2023, 5, 1),
        tnved_code: "6401100000".to_string(),
        uit_code: Some(format!("0104630034070012{index:05}")),
        uitu_code: None,
    }
}

/// A fully populated document with `products` product entries.
pub fn document(id: usize, products: usize) -> Document {
    Document {
        description: Description {
            participant_inn: "7700000000".to_string(),
        },
        doc_id: format!("doc-{id}"),
        doc_status: "DRAFT".to_string(),
        doc_type: "LP_INTRODUCE_GOODS".to_string(),
        import_request: false,
        owner_inn: "7701000001".to_string(),
        participant_inn: "7702000002".to_string(),
        producer_inn: "7703000003".to_string(),
        production_date: date(2023, 5, 1),
        production_type: "OWN_PRODUCTION".to_string(),
        products: (0..products).map(product).collect(),
        reg_date: None,
        reg_number: None,
    }
}
