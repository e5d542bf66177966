use std::collections::HashMap;

use crate::interfaces::AreaLookup;

/// Main Swedish destination codes (riktnummer) without trunk prefix.
pub const SWEDISH_AREA_CODES: &[(&str, &str)] = &[
    ("8", "Stockholm"),
    ("11", "Norrköping"),
    ("13", "Linköping"),
    ("16", "Eskilstuna-Torshälla"),
    ("18", "Uppsala"),
    ("19", "Örebro-Kumla"),
    ("21", "Västerås"),
    ("23", "Falun"),
    ("26", "Gävle-Sandviken"),
    ("31", "Göteborg"),
    ("33", "Borås"),
    ("35", "Halmstad"),
    ("36", "Jönköping-Huskvarna"),
    ("40", "Malmö"),
    ("42", "Helsingborg-Höganäs"),
    ("44", "Kristianstad"),
    ("46", "Lund"),
    ("54", "Karlstad"),
    ("60", "Sundsvall-Timrå"),
    ("63", "Östersund"),
    ("70", "Mobiltelefoni"),
    ("72", "Mobiltelefoni"),
    ("73", "Mobiltelefoni"),
    ("76", "Mobiltelefoni"),
    ("79", "Mobiltelefoni"),
    ("90", "Umeå"),
    ("920", "Luleå"),
];

/// Area names for one country from an in-memory table.
#[derive(Debug, Clone)]
pub struct StaticAreaLookup {
    country_code: u32,
    areas: HashMap<&'static str, &'static str>,
}

impl StaticAreaLookup {
    pub fn new(country_code: u32, areas: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            country_code,
            areas: areas.iter().copied().collect(),
        }
    }

    pub fn swedish() -> Self {
        Self::new(46, SWEDISH_AREA_CODES)
    }
}

impl AreaLookup for StaticAreaLookup {
    fn country_code(&self) -> u32 {
        self.country_code
    }

    fn lookup(&self, ndc: &str) -> String {
        self.areas
            .get(ndc)
            .map(|area| area.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::StaticAreaLookup;
    use crate::interfaces::AreaLookup;

    #[test]
    fn swedish_areas() {
        let areas = StaticAreaLookup::swedish();
        assert_eq!(areas.country_code(), 46);
        assert_eq!(areas.lookup("8"), "Stockholm");
        assert_eq!(areas.lookup("920"), "Luleå");
        assert_eq!(areas.lookup("08"), "");
        assert_eq!(areas.lookup("9"), "");
        assert_eq!(areas.lookup(""), "");
    }
}
