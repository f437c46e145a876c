//! Static reference tables: the category taxonomy, Nigerian states, a
//! city-to-state lookup and a country alias table. Pure data, loaded once.

/// Ordered category taxonomy as shown in the filter bar. "All" first,
/// catch-all last. Order also fixes classifier precedence (see `classify`).
pub const CATEGORIES: [&str; 10] = [
    ALL_CATEGORY,
    "Medical Laboratory Scientists",
    "Dentists",
    "Pharmacists",
    "Nurses & Midwives",
    "Doctors",
    "Public Health",
    "Healthcare Management",
    "Allied Health",
    CATCH_ALL,
];

pub const ALL_CATEGORY: &str = "All";
pub const CATCH_ALL: &str = "Others";

/// The 36 Nigerian states. The Federal Capital Territory is deliberately not
/// in this list; it is reachable only through the city table and keeps the
/// literal bucket label "FCT" (no " State" suffix).
pub const STATES: [&str; 36] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

pub const FCT: &str = "FCT";

/// Lowercase city/district name -> state. Cities that share their state's
/// name (Kano, Enugu, ...) are covered by the state match already.
pub const CITY_STATES: [(&str, &str); 40] = [
    ("abuja", FCT),
    ("garki", FCT),
    ("wuse", FCT),
    ("maitama", FCT),
    ("gwarinpa", FCT),
    ("ikeja", "Lagos"),
    ("lekki", "Lagos"),
    ("victoria island", "Lagos"),
    ("ikoyi", "Lagos"),
    ("yaba", "Lagos"),
    ("surulere", "Lagos"),
    ("ajah", "Lagos"),
    ("ibadan", "Oyo"),
    ("port harcourt", "Rivers"),
    ("benin city", "Edo"),
    ("calabar", "Cross River"),
    ("uyo", "Akwa Ibom"),
    ("abeokuta", "Ogun"),
    ("ota", "Ogun"),
    ("warri", "Delta"),
    ("asaba", "Delta"),
    ("owerri", "Imo"),
    ("jos", "Plateau"),
    ("ilorin", "Kwara"),
    ("makurdi", "Benue"),
    ("maiduguri", "Borno"),
    ("abakaliki", "Ebonyi"),
    ("awka", "Anambra"),
    ("onitsha", "Anambra"),
    ("nnewi", "Anambra"),
    ("ado ekiti", "Ekiti"),
    ("akure", "Ondo"),
    ("osogbo", "Osun"),
    ("minna", "Niger"),
    ("lokoja", "Kogi"),
    ("yenagoa", "Bayelsa"),
    ("umuahia", "Abia"),
    ("aba", "Abia"),
    ("lafia", "Nasarawa"),
    ("yola", "Adamawa"),
];

/// Lowercase keyword -> canonical country label. Tried in order as a
/// substring match, first hit wins, so longer keywords sit above their
/// shorter cousins ("united arab emirates" before "uae").
pub const COUNTRY_ALIASES: [(&str, &str); 29] = [
    ("south africa", "South Africa"),
    ("ghana", "Ghana"),
    ("kenya", "Kenya"),
    ("rwanda", "Rwanda"),
    ("uganda", "Uganda"),
    ("tanzania", "Tanzania"),
    ("ethiopia", "Ethiopia"),
    ("egypt", "Egypt"),
    ("gambia", "The Gambia"),
    ("sierra leone", "Sierra Leone"),
    ("liberia", "Liberia"),
    ("cameroon", "Cameroon"),
    ("niger republic", "Niger Republic"),
    ("benin republic", "Benin Republic"),
    ("united kingdom", "United Kingdom"),
    ("england", "United Kingdom"),
    ("london", "United Kingdom"),
    ("united states", "United States"),
    ("usa", "United States"),
    ("canada", "Canada"),
    ("germany", "Germany"),
    ("ireland", "Ireland"),
    ("saudi arabia", "Saudi Arabia"),
    ("saudi", "Saudi Arabia"),
    ("united arab emirates", "United Arab Emirates"),
    ("dubai", "United Arab Emirates"),
    ("uae", "United Arab Emirates"),
    ("qatar", "Qatar"),
    ("remote", "Remote"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_is_ordered_all_first_catch_all_last() {
        assert_eq!(CATEGORIES.first(), Some(&ALL_CATEGORY));
        assert_eq!(CATEGORIES.last(), Some(&CATCH_ALL));
    }

    #[test]
    fn fct_is_not_a_state() {
        assert!(!STATES.contains(&FCT));
        assert!(CITY_STATES.iter().any(|(c, s)| *c == "abuja" && *s == FCT));
    }

    #[test]
    fn longer_country_aliases_come_before_their_prefixes() {
        let pos = |k: &str| COUNTRY_ALIASES.iter().position(|(a, _)| *a == k).unwrap();
        assert!(pos("united arab emirates") < pos("uae"));
        assert!(pos("saudi arabia") < pos("saudi"));
    }
}
