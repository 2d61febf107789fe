use crate::models::CityRecord;

/// Known city names mapped to fixed weather attributes. Lookup is a
/// case-insensitive substring scan in declaration order; the first listed
/// city whose name (or alias) appears in the message wins.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    cities: Vec<CityRecord>,
    aliases: Vec<(&'static str, &'static str)>,
    default_city: &'static str,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            aliases: vec![
                ("vizag", "Visakhapatnam"),
                ("vishakapatnam", "Visakhapatnam"),
                ("siddhipet", "Siddipet"),
            ],
            default_city: "Hyderabad",
        }
    }
}

impl Gazetteer {
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn by_name(&self, name: &str) -> Option<&CityRecord> {
        self.cities
            .iter()
            .find(|city| city.name.eq_ignore_ascii_case(name.trim()))
    }

    /// First city mentioned in the normalized message, in gazetteer order.
    pub fn extract(&self, normalized: &str) -> Option<&CityRecord> {
        for city in &self.cities {
            if normalized.contains(&city.name.to_lowercase()) {
                return Some(city);
            }
        }
        for (alias, canonical) in &self.aliases {
            if normalized.contains(alias) {
                return self.by_name(canonical);
            }
        }
        None
    }

    /// Lookup with the configured fallback city; the fallback is always
    /// present in the table, so this cannot fail for any input.
    pub fn extract_or_default(&self, normalized: &str) -> &CityRecord {
        self.extract(normalized)
            .or_else(|| self.by_name(self.default_city))
            .unwrap_or(&self.cities[0])
    }
}

fn city(
    name: &'static str,
    state: &'static str,
    temp: i32,
    humidity: u8,
    condition: &'static str,
    wind_kmh: u8,
) -> CityRecord {
    CityRecord {
        name,
        state,
        temp,
        humidity,
        condition,
        wind_kmh,
    }
}

fn default_cities() -> Vec<CityRecord> {
    vec![
        // Telangana
        city("Hyderabad", "Telangana", 32, 58, "Partly Cloudy", 15),
        city("Warangal", "Telangana", 34, 52, "Sunny", 12),
        city("Nizamabad", "Telangana", 33, 55, "Clear", 10),
        city("Khammam", "Telangana", 35, 60, "Hot & Humid", 8),
        city("Karimnagar", "Telangana", 33, 54, "Partly Cloudy", 13),
        city("Siddipet", "Telangana", 34, 54, "Clear", 11),
        city("Ramagundam", "Telangana", 34, 56, "Sunny", 11),
        city("Mahbubnagar", "Telangana", 36, 48, "Hot", 14),
        city("Nalgonda", "Telangana", 35, 50, "Sunny", 12),
        city("Adilabad", "Telangana", 31, 62, "Pleasant", 9),
        city("Suryapet", "Telangana", 34, 53, "Partly Cloudy", 10),
        city("Miryalaguda", "Telangana", 35, 51, "Sunny", 11),
        city("Jagtial", "Telangana", 33, 57, "Clear", 12),
        city("Nirmal", "Telangana", 32, 59, "Partly Cloudy", 10),
        city("Kamareddy", "Telangana", 33, 56, "Sunny", 13),
        city("Palwancha", "Telangana", 35, 61, "Hot & Humid", 9),
        city("Kothagudem", "Telangana", 35, 60, "Hot", 10),
        city("Bodhan", "Telangana", 33, 55, "Partly Cloudy", 12),
        city("Sangareddy", "Telangana", 32, 57, "Pleasant", 14),
        city("Metpally", "Telangana", 33, 56, "Sunny", 11),
        city("Zahirabad", "Telangana", 34, 52, "Clear", 13),
        city("Medak", "Telangana", 32, 58, "Partly Cloudy", 10),
        city("Vikarabad", "Telangana", 31, 60, "Pleasant", 12),
        city("Mancherial", "Telangana", 33, 55, "Sunny", 11),
        city("Wanaparthy", "Telangana", 36, 49, "Hot", 14),
        city("Bhongir", "Telangana", 34, 53, "Partly Cloudy", 12),
        city("Jangaon", "Telangana", 34, 54, "Sunny", 10),
        city("Gadwal", "Telangana", 36, 47, "Hot", 15),
        city("Bhupalpally", "Telangana", 32, 59, "Pleasant", 11),
        city("Narayanpet", "Telangana", 35, 50, "Sunny", 13),
        city("Secunderabad", "Telangana", 32, 58, "Partly Cloudy", 15),
        // Andhra Pradesh
        city("Visakhapatnam", "Andhra Pradesh", 30, 75, "Humid & Cloudy", 18),
        city("Vijayawada", "Andhra Pradesh", 35, 62, "Hot & Humid", 10),
        city("Guntur", "Andhra Pradesh", 36, 58, "Hot", 12),
        city("Nellore", "Andhra Pradesh", 34, 70, "Humid", 14),
        city("Kurnool", "Andhra Pradesh", 37, 45, "Very Hot", 16),
        city("Kakinada", "Andhra Pradesh", 32, 72, "Humid & Warm", 15),
        city("Rajahmundry", "Andhra Pradesh", 33, 68, "Warm & Humid", 13),
        city("Tirupati", "Andhra Pradesh", 33, 60, "Warm", 11),
        city("Kadapa", "Andhra Pradesh", 36, 50, "Hot", 14),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warangal_entry_is_fixed() {
        let gazetteer = Gazetteer::default();
        let city = gazetteer.by_name("Warangal").unwrap();
        assert_eq!(city.temp, 34);
        assert_eq!(city.humidity, 52);
        assert_eq!(city.condition, "Sunny");
    }

    #[test]
    fn extract_finds_city_as_substring() {
        let gazetteer = Gazetteer::default();
        let city = gazetteer.extract("weather in warangal today").unwrap();
        assert_eq!(city.name, "Warangal");
    }

    #[test]
    fn alias_resolves_to_canonical_city() {
        let gazetteer = Gazetteer::default();
        let city = gazetteer.extract("rain in vizag?").unwrap();
        assert_eq!(city.name, "Visakhapatnam");
    }

    #[test]
    fn unknown_city_falls_back_to_hyderabad() {
        let gazetteer = Gazetteer::default();
        assert_eq!(gazetteer.extract_or_default("weather in pune").name, "Hyderabad");
    }
}
