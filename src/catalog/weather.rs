//! Weather widget data
//!
//! Fixed sample conditions; there is no weather service behind this.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rain => "Rain",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁️",
            Condition::Rain => "🌧️",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub location: &'static str,
    pub temperature_c: i32,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_kph: u8,
}

impl CurrentWeather {
    /// One-line field advice for the conditions
    pub fn advice(&self) -> &'static str {
        match self.condition {
            Condition::Rain => "Rain expected: hold irrigation and cover harvested produce",
            _ if self.temperature_c >= 35 => "Heat alert: irrigate early morning or evening",
            _ if self.humidity >= 80 => "High humidity: watch for fungal disease",
            _ => "Good conditions for field work",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub day: &'static str,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: Condition,
}

static CURRENT: CurrentWeather = CurrentWeather {
    location: "Nashik, IN",
    temperature_c: 26,
    condition: Condition::PartlyCloudy,
    humidity: 62,
    wind_kph: 11,
};

static FORECAST: [DailyForecast; 4] = [
    DailyForecast {
        day: "Mon",
        high_c: 27,
        low_c: 14,
        condition: Condition::Sunny,
    },
    DailyForecast {
        day: "Tue",
        high_c: 25,
        low_c: 15,
        condition: Condition::PartlyCloudy,
    },
    DailyForecast {
        day: "Wed",
        high_c: 22,
        low_c: 16,
        condition: Condition::Rain,
    },
    DailyForecast {
        day: "Thu",
        high_c: 24,
        low_c: 15,
        condition: Condition::Cloudy,
    },
];

pub fn current() -> &'static CurrentWeather {
    &CURRENT
}

pub fn forecast() -> &'static [DailyForecast] {
    &FORECAST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice() {
        assert_eq!(current().advice(), "Good conditions for field work");

        let rain = CurrentWeather {
            condition: Condition::Rain,
            temperature_c: 40,
            ..current().clone()
        };
        assert!(rain.advice().starts_with("Rain expected"));

        let hot = CurrentWeather {
            temperature_c: 36,
            ..current().clone()
        };
        assert!(hot.advice().starts_with("Heat alert"));
    }
}
