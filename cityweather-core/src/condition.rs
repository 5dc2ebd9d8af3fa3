use serde::{Deserialize, Serialize};

/// Coarse weather condition derived from a provider weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Showers,
    Thunderstorm,
    Other,
}

impl WeatherCondition {
    /// Classify a weather code. Total: unknown codes map to `Other`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51..=55 => Self::Drizzle,
            61..=65 => Self::Rain,
            71..=75 => Self::Snow,
            80..=82 => Self::Showers,
            95 => Self::Thunderstorm,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Showers => "Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Other => "Other Weather",
        }
    }
}

/// Label for a weather code.
pub fn describe(code: i64) -> &'static str {
    WeatherCondition::from_code(code).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_codes() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(1), "Mainly clear");
        assert_eq!(describe(2), "Partly cloudy");
        assert_eq!(describe(3), "Overcast");
        assert_eq!(describe(95), "Thunderstorm");
    }

    #[test]
    fn fog_codes() {
        assert_eq!(describe(45), "Fog");
        assert_eq!(describe(48), "Fog");
        assert_eq!(describe(46), "Other Weather");
        assert_eq!(describe(47), "Other Weather");
    }

    #[test]
    fn ranges_are_inclusive() {
        for code in 51..=55 {
            assert_eq!(describe(code), "Drizzle", "code {code}");
        }
        for code in 61..=65 {
            assert_eq!(describe(code), "Rain", "code {code}");
        }
        for code in 71..=75 {
            assert_eq!(describe(code), "Snow", "code {code}");
        }
        for code in 80..=82 {
            assert_eq!(describe(code), "Showers", "code {code}");
        }
    }

    #[test]
    fn codes_just_outside_ranges() {
        for code in [4, 44, 49, 50, 56, 60, 66, 70, 76, 79, 83, 94, 96, 99] {
            assert_eq!(describe(code), "Other Weather", "code {code}");
        }
    }

    #[test]
    fn negative_and_large_codes() {
        assert_eq!(WeatherCondition::from_code(-1), WeatherCondition::Other);
        assert_eq!(WeatherCondition::from_code(i64::MIN), WeatherCondition::Other);
        assert_eq!(WeatherCondition::from_code(i64::MAX), WeatherCondition::Other);
        assert_eq!(describe(1000), "Other Weather");
    }
}
