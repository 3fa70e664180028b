// Unit convention declared in the plot header

use crate::core::constants::UNIT_SYSTEM_SIZE;
use crate::core::error::{NexError, Result};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitSystem {
    English,
    MetricBars,
    MetricKpa,
    MetricKgCm2,
    Lab,
}

impl UnitSystem {
    pub fn from_code(code: &[u8; UNIT_SYSTEM_SIZE]) -> Result<Self> {
        match code {
            b"ENGLSH" => Ok(UnitSystem::English),
            b"METBAR" => Ok(UnitSystem::MetricBars),
            b"METKPA" => Ok(UnitSystem::MetricKpa),
            b"METKG " => Ok(UnitSystem::MetricKgCm2),
            b"LAB   " => Ok(UnitSystem::Lab),
            other => Err(NexError::UnknownUnitSystem(
                String::from_utf8_lossy(other).into_owned(),
            )),
        }
    }

    pub fn code(&self) -> &'static [u8; UNIT_SYSTEM_SIZE] {
        match self {
            UnitSystem::English => b"ENGLSH",
            UnitSystem::MetricBars => b"METBAR",
            UnitSystem::MetricKpa => b"METKPA",
            UnitSystem::MetricKgCm2 => b"METKG ",
            UnitSystem::Lab => b"LAB   ",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitSystem::English => "english",
            UnitSystem::MetricBars => "metric (bars)",
            UnitSystem::MetricKpa => "metric (kPa)",
            UnitSystem::MetricKgCm2 => "metric (kg/cm2)",
            UnitSystem::Lab => "lab",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        for unit in [
            UnitSystem::English,
            UnitSystem::MetricBars,
            UnitSystem::MetricKpa,
            UnitSystem::MetricKgCm2,
            UnitSystem::Lab,
        ] {
            assert_eq!(UnitSystem::from_code(unit.code()).unwrap(), unit);
        }
    }

    #[test]
    fn test_trailing_space_is_significant() {
        assert!(UnitSystem::from_code(b"METKG ").is_ok());
        assert!(matches!(
            UnitSystem::from_code(b"METKGX"),
            Err(NexError::UnknownUnitSystem(code)) if code == "METKGX"
        ));
    }
}
