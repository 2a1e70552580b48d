//! Shared test helpers.
#![allow(dead_code)]

use uac_portal::domain::entities::agreement::{Agreement, Document};
use uac_portal::domain::entities::statistics::StatisticsSummary;
use uac_portal::domain::values::agreement_status::AgreementStatus;
use uac_portal::domain::values::agreement_type::AgreementType;
use uac_portal::domain::values::document_kind::DocumentKind;
use uac_portal::infrastructure::seed::SeedData;
use uac_portal::UacPortal;

pub fn seeded() -> UacPortal {
    UacPortal::new(None).unwrap()
}

pub fn make_agreement(
    id: &str,
    title: &str,
    country: &str,
    domain: &str,
    agreement_type: AgreementType,
    status: AgreementStatus,
) -> Agreement {
    Agreement {
        id: id.to_string(),
        title: title.to_string(),
        agreement_type,
        domain: domain.to_string(),
        country: country.to_string(),
        country_code: String::new(),
        start_date: "2021-01-01".parse().unwrap(),
        end_date: "2026-01-01".parse().unwrap(),
        status,
        signature_date: "2020-12-01".parse().unwrap(),
        partners: vec![format!("Partenaire {id}")],
        documents: vec![],
        description: None,
    }
}

/// The MIT / Tokyo pair used throughout the filtering scenarios.
pub fn mit_and_tokyo() -> UacPortal {
    let a = make_agreement(
        "A",
        "Convention UAC-MIT",
        "États-Unis",
        "Informatique",
        AgreementType::Convention,
        AgreementStatus::Active,
    );
    let mut b = make_agreement(
        "B",
        "Accord UAC-Tokyo",
        "Japon",
        "Ingénierie",
        AgreementType::FrameworkAgreement,
        AgreementStatus::Expired,
    );
    b.documents = vec![Document {
        id: "B-1".to_string(),
        name: "Accord signé".to_string(),
        kind: DocumentKind::Pdf,
        url: "/documents/b-1.pdf".to_string(),
        size: "1.2 MB".to_string(),
    }];

    UacPortal::from_seed(SeedData {
        agreements: vec![a, b],
        partners: vec![],
        statistics: StatisticsSummary::default(),
    })
}

pub fn ids(agreements: &[Agreement]) -> Vec<&str> {
    agreements.iter().map(|a| a.id.as_str()).collect()
}
