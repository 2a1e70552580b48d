use crate::domain::entities::agreement::Agreement;
use crate::domain::values::filter_category::FilterCategory;
use crate::domain::values::filter_selection::FilterSelection;

/// Returns the agreements that satisfy every active constraint of
/// `selection`, in their original order.
///
/// An empty value set places no constraint on its category. A non-empty
/// query must appear, ignoring case, in the title, the country or the domain.
pub fn filter_agreements<'a>(
    agreements: &'a [Agreement],
    selection: &FilterSelection,
) -> Vec<&'a Agreement> {
    let needle = selection.query().to_lowercase();
    agreements
        .iter()
        .filter(|a| record_matches(selection, &needle, a))
        .collect()
}

/// `needle` is the selection's query, already lowercased.
pub(crate) fn record_matches(
    selection: &FilterSelection,
    needle: &str,
    agreement: &Agreement,
) -> bool {
    let matches_search = needle.is_empty()
        || agreement.title.to_lowercase().contains(needle)
        || agreement.country.to_lowercase().contains(needle)
        || agreement.domain.to_lowercase().contains(needle);

    matches_search
        && FilterCategory::ALL.iter().all(|&category| {
            let selected = selection.values(category);
            selected.is_empty() || selected.contains(agreement.value_for(category))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::agreement_status::AgreementStatus;
    use crate::domain::values::agreement_type::AgreementType;

    fn record(
        id: &str,
        title: &str,
        country: &str,
        domain: &str,
        agreement_type: AgreementType,
        status: AgreementStatus,
    ) -> Agreement {
        Agreement {
            id: id.into(),
            title: title.into(),
            agreement_type,
            domain: domain.into(),
            country: country.into(),
            country_code: String::new(),
            start_date: "2020-01-01".parse().unwrap(),
            end_date: "2025-01-01".parse().unwrap(),
            status,
            signature_date: "2019-12-01".parse().unwrap(),
            partners: vec!["Partenaire".into()],
            documents: vec![],
            description: None,
        }
    }

    fn store() -> Vec<Agreement> {
        vec![
            record(
                "A",
                "Convention UAC-MIT",
                "États-Unis",
                "Informatique",
                AgreementType::Convention,
                AgreementStatus::Active,
            ),
            record(
                "B",
                "Accord UAC-Tokyo",
                "Japon",
                "Ingénierie",
                AgreementType::FrameworkAgreement,
                AgreementStatus::Expired,
            ),
        ]
    }

    fn ids(result: &[&Agreement]) -> Vec<String> {
        result.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_empty_selection_returns_everything_in_order() {
        let agreements = store();
        let result = filter_agreements(&agreements, &FilterSelection::new());
        assert_eq!(ids(&result), vec!["A", "B"]);
    }

    #[test]
    fn test_query_is_case_insensitive_on_title() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.set_query("tokyo");
        assert_eq!(ids(&filter_agreements(&agreements, &sel)), vec!["B"]);
    }

    #[test]
    fn test_query_matches_country_and_domain() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.set_query("ÉTATS");
        assert_eq!(ids(&filter_agreements(&agreements, &sel)), vec!["A"]);
        sel.set_query("ingé");
        assert_eq!(ids(&filter_agreements(&agreements, &sel)), vec!["B"]);
    }

    #[test]
    fn test_query_does_not_match_other_fields() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.set_query("partenaire");
        assert!(filter_agreements(&agreements, &sel).is_empty());
    }

    #[test]
    fn test_untrimmed_query_is_taken_literally() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.set_query(" tokyo");
        assert!(filter_agreements(&agreements, &sel).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.toggle(FilterCategory::Status, "En cours");
        assert_eq!(ids(&filter_agreements(&agreements, &sel)), vec!["A"]);
    }

    #[test]
    fn test_categories_combine_with_and() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.toggle(FilterCategory::Types, "Convention");
        sel.toggle(FilterCategory::Status, "Expiré");
        assert!(filter_agreements(&agreements, &sel).is_empty());
    }

    #[test]
    fn test_values_within_category_combine_with_or() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.toggle(FilterCategory::Countries, "Japon");
        sel.toggle(FilterCategory::Countries, "États-Unis");
        assert_eq!(ids(&filter_agreements(&agreements, &sel)), vec!["A", "B"]);
    }

    #[test]
    fn test_selection_matches_agrees_with_engine() {
        let agreements = store();
        let mut sel = FilterSelection::new();
        sel.set_query("UAC");
        sel.toggle(FilterCategory::Domains, "Ingénierie");
        let result = filter_agreements(&agreements, &sel);
        for a in &agreements {
            assert_eq!(sel.matches(a), result.iter().any(|r| r.id == a.id));
        }
    }
}
