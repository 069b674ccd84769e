//! Defines the `WeatherCondition` enum, mapping 7Timer's `civillight` weather tokens
//! to descriptive variants, and the [`ConditionCode`] carried by each forecast day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a daily weather condition reported by the 7Timer `civillight` product.
///
/// The upstream service owns this vocabulary. Tokens outside it are still passed
/// through as a [`ConditionCode`]; they simply have no `WeatherCondition`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCondition {
    /// `clear`: total cloud cover less than 20%.
    Clear,
    /// `pcloudy`: total cloud cover between 20% and 60%.
    PartlyCloudy,
    /// `mcloudy`: total cloud cover between 60% and 80%.
    MostlyCloudy,
    /// `cloudy`: total cloud cover over 80%.
    Cloudy,
    /// `humid`: relative humidity over 90% with cloud cover under 60%.
    Humid,
    /// `lightrain`: precipitation rate below 4mm/hr.
    LightRain,
    /// `oshower`: occasional showers.
    OccasionalShowers,
    /// `ishower`: isolated showers.
    IsolatedShowers,
    /// `lightsnow`: snowfall rate below 4mm/hr.
    LightSnow,
    /// `rain`: precipitation rate over 4mm/hr.
    Rain,
    /// `snow`: snowfall rate over 4mm/hr.
    Snow,
    /// `rainsnow`: mixed rain and snow.
    RainSnow,
    /// `ts`: thunderstorm possible.
    Thunderstorm,
    /// `tsrain`: thunderstorm with rain.
    ThunderstormRain,
}

impl WeatherCondition {
    /// Looks up the condition for a raw 7Timer token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cityweather::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_code("tsrain"), Some(WeatherCondition::ThunderstormRain));
    /// assert_eq!(WeatherCondition::from_code("volcano"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "clear" => Some(WeatherCondition::Clear),
            "pcloudy" => Some(WeatherCondition::PartlyCloudy),
            "mcloudy" => Some(WeatherCondition::MostlyCloudy),
            "cloudy" => Some(WeatherCondition::Cloudy),
            "humid" => Some(WeatherCondition::Humid),
            "lightrain" => Some(WeatherCondition::LightRain),
            "oshower" => Some(WeatherCondition::OccasionalShowers),
            "ishower" => Some(WeatherCondition::IsolatedShowers),
            "lightsnow" => Some(WeatherCondition::LightSnow),
            "rain" => Some(WeatherCondition::Rain),
            "snow" => Some(WeatherCondition::Snow),
            "rainsnow" => Some(WeatherCondition::RainSnow),
            "ts" => Some(WeatherCondition::Thunderstorm),
            "tsrain" => Some(WeatherCondition::ThunderstormRain),
            _ => None,
        }
    }

    /// The upstream token for this condition.
    pub fn code(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::PartlyCloudy => "pcloudy",
            WeatherCondition::MostlyCloudy => "mcloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Humid => "humid",
            WeatherCondition::LightRain => "lightrain",
            WeatherCondition::OccasionalShowers => "oshower",
            WeatherCondition::IsolatedShowers => "ishower",
            WeatherCondition::LightSnow => "lightsnow",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Snow => "snow",
            WeatherCondition::RainSnow => "rainsnow",
            WeatherCondition::Thunderstorm => "ts",
            WeatherCondition::ThunderstormRain => "tsrain",
        }
    }

    /// Short English description, suitable for an icon's alt text.
    pub fn description(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::MostlyCloudy => "Mostly cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Humid => "Foggy",
            WeatherCondition::LightRain => "Light rain or showers",
            WeatherCondition::OccasionalShowers => "Occasional showers",
            WeatherCondition::IsolatedShowers => "Isolated showers",
            WeatherCondition::LightSnow => "Light or occasional snow",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::RainSnow => "Mixed rain and snow",
            WeatherCondition::Thunderstorm => "Thunderstorm possible",
            WeatherCondition::ThunderstormRain => "Thunderstorm",
        }
    }
}

/// The raw condition token of a forecast day, kept verbatim.
///
/// Unrecognized tokens are not an error; [`ConditionCode::condition`] just
/// returns `None` for them and renderers fall back to a default icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionCode(String);

impl ConditionCode {
    /// Wraps a raw token without checking it against the known vocabulary.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The token exactly as the service sent it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known condition behind this token, if any.
    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_code(&self.0)
    }

    /// True when the token is part of the known vocabulary.
    pub fn is_recognized(&self) -> bool {
        self.condition().is_some()
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WeatherCondition; 14] = [
        WeatherCondition::Clear,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::MostlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Humid,
        WeatherCondition::LightRain,
        WeatherCondition::OccasionalShowers,
        WeatherCondition::IsolatedShowers,
        WeatherCondition::LightSnow,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
        WeatherCondition::RainSnow,
        WeatherCondition::Thunderstorm,
        WeatherCondition::ThunderstormRain,
    ];

    #[test]
    fn every_condition_maps_back_from_its_code() {
        for condition in ALL {
            assert_eq!(WeatherCondition::from_code(condition.code()), Some(condition));
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(WeatherCondition::from_code("Clear"), None);
    }

    #[test]
    fn unknown_code_passes_through() {
        let code = ConditionCode::new("clearday");
        assert_eq!(code.as_str(), "clearday");
        assert!(!code.is_recognized());
        assert_eq!(code.to_string(), "clearday");
    }
}
