//! Brazilian state lookup
//!
//! Maps two-letter state codes to display names for the customer map.

use crate::data::CustomerLocation;

/// The 26 states plus the Federal District
pub const BRAZILIAN_STATES: [(&str, &str); 27] = [
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AM", "Amazonas"),
    ("AP", "Amapá"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MG", "Minas Gerais"),
    ("MS", "Mato Grosso do Sul"),
    ("MT", "Mato Grosso"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("PR", "Paraná"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("RS", "Rio Grande do Sul"),
    ("SC", "Santa Catarina"),
    ("SE", "Sergipe"),
    ("SP", "São Paulo"),
    ("TO", "Tocantins"),
];

/// Full state name for a code; case and surrounding whitespace are ignored
pub fn state_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    BRAZILIAN_STATES
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Fill `state_name` on every location. Unmapped codes are left as `None`.
pub fn enrich_locations(locations: &mut [CustomerLocation]) {
    let mut unmapped = 0usize;
    for location in locations.iter_mut() {
        location.state_name = state_name(&location.customer_state).map(str::to_string);
        if location.state_name.is_none() {
            unmapped += 1;
        }
    }

    if unmapped > 0 {
        tracing::warn!(unmapped, "Customer locations with unknown state codes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_lookup() {
        assert_eq!(state_name("SP"), Some("São Paulo"));
        assert_eq!(state_name(" rj "), Some("Rio de Janeiro"));
        assert_eq!(state_name("DF"), Some("Distrito Federal"));
        assert_eq!(state_name("XX"), None);
        assert_eq!(state_name(""), None);
    }

    #[test]
    fn test_table_has_unique_codes() {
        let mut codes: Vec<&str> = BRAZILIAN_STATES.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn test_enrich_locations() {
        let mut locations = vec![
            CustomerLocation::new("BA", -12.97, -38.5, 3380),
            CustomerLocation::new("??", 0.0, 0.0, 1),
        ];
        enrich_locations(&mut locations);

        assert_eq!(locations[0].display_state(), "Bahia");
        assert_eq!(locations[1].state_name, None);
        assert_eq!(locations[1].display_state(), "Unknown");
    }
}
