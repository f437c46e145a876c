//! Title-based category classification. Ordered keyword groups, first match
//! wins; the order is load-bearing ("Nursing Manager" must land on the
//! nursing rule, not the management one).

use crate::taxonomy::CATCH_ALL;

/// Keyword groups in precedence order, each paired with its taxonomy label.
const RULES: [(&str, &[&str]); 8] = [
    (
        "Medical Laboratory Scientists",
        &["medical laboratory", "lab scientist", "laboratory scientist", "laboratory technician"],
    ),
    ("Dentists", &["dentist", "dental"]),
    ("Pharmacists", &["pharmacist", "pharmacy", "pharmaceutical"]),
    (
        "Nurses & Midwives",
        &["nurse", "nursing", "midwife", "midwifery", "matron"],
    ),
    (
        "Doctors",
        &[
            "medical officer",
            "doctor",
            "physician",
            "obstetrician",
            "gynaecologist",
            "gynecologist",
            "general practitioner",
            "surgeon",
            "oncology",
            "paediatrician",
            "pediatrician",
        ],
    ),
    (
        "Public Health",
        &[
            "public health",
            "program officer",
            "programme officer",
            "project officer",
            "epidemiology",
            "epidemiologist",
            "surveillance",
            "health systems",
            "health security",
            "community health",
        ],
    ),
    (
        "Healthcare Management",
        &[
            "director",
            "manager",
            "coordinator",
            "administrator",
            "provost",
            "quality officer",
            "inventory",
            "warehouse",
        ],
    ),
    (
        "Allied Health",
        &[
            "physiotherapist",
            "optometrist",
            "therapist",
            "radiographer",
            "sonographer",
            "dietitian",
            "nutritionist",
        ],
    ),
];

/// Maps a job title to exactly one taxonomy label. Empty or unmatched titles
/// fall through to the catch-all; there is no "unclassifiable" error.
pub fn classify_title(title: &str) -> &'static str {
    let t = title.trim().to_lowercase();
    if t.is_empty() {
        return CATCH_ALL;
    }
    for (label, keywords) in RULES {
        if keywords.iter().any(|k| t.contains(k)) {
            return label;
        }
    }
    CATCH_ALL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::CATEGORIES;

    #[test]
    fn every_result_is_a_taxonomy_member() {
        for title in [
            "Medical Laboratory Scientist",
            "Dental Surgeon Assistant",
            "Superintendent Pharmacist",
            "Registered Nurse",
            "Consultant Physician",
            "Public Health Analyst",
            "Hospital Administrator",
            "Physiotherapist",
            "Gardener",
            "",
        ] {
            assert!(CATEGORIES.contains(&classify_title(title)), "title {title:?}");
        }
    }

    #[test]
    fn classification_is_deterministic() {
        assert_eq!(
            classify_title("Senior Registered Nurse"),
            classify_title("Senior Registered Nurse"),
        );
    }

    #[test]
    fn nursing_outranks_management() {
        assert_eq!(classify_title("Nursing Manager"), "Nurses & Midwives");
        assert_eq!(classify_title("Matron / Ward Coordinator"), "Nurses & Midwives");
    }

    #[test]
    fn laboratory_outranks_physician_terms() {
        // "Medical Laboratory Scientist" contains no physician keyword, but a
        // combined title must still resolve to the lab rule tested first.
        assert_eq!(
            classify_title("Medical Laboratory Scientist / Medical Officer"),
            "Medical Laboratory Scientists",
        );
    }

    #[test]
    fn physician_synonyms_map_to_doctors() {
        for title in [
            "Medical Officer",
            "Obstetrician & Gynaecologist",
            "General Practitioner (Locum)",
        ] {
            assert_eq!(classify_title(title), "Doctors", "title {title:?}");
        }
    }

    #[test]
    fn unmatched_titles_fall_to_catch_all() {
        assert_eq!(classify_title("Driver"), CATCH_ALL);
        assert_eq!(classify_title(""), CATCH_ALL);
        assert_eq!(classify_title("   "), CATCH_ALL);
    }
}
