// Data structures for the Nexus plot format

use crate::core::constants::{CLASS_NAME_SIZE, INSTANCE_NAME_SIZE, VAR_NAME_SIZE};
use crate::core::unit_system::UnitSystem;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Exactly `N` bytes off the wire, compared byte for byte.
///
/// Trailing spaces are part of the value: `"STOP    "` and `"STOP"`
/// padded with anything else are different keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedStr<const N: usize>([u8; N]);

pub type ClassName = FixedStr<CLASS_NAME_SIZE>;
pub type InstanceName = FixedStr<INSTANCE_NAME_SIZE>;
pub type VarName = FixedStr<VAR_NAME_SIZE>;

impl<const N: usize> FixedStr<N> {
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Space-pad `name` to `N` bytes. `None` if it is longer than `N`.
    pub fn padded(name: &str) -> Option<Self> {
        let raw = name.as_bytes();
        if raw.len() > N {
            return None;
        }
        let mut bytes = [b' '; N];
        bytes[..raw.len()].copy_from_slice(raw);
        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Lossy text with trailing spaces removed, for display only.
    pub fn trimmed(&self) -> String {
        String::from_utf8_lossy(&self.0).trim_end().to_string()
    }
}

impl<const N: usize> From<[u8; N]> for FixedStr<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> PartialEq<[u8; N]> for FixedStr<N> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

impl<const N: usize> Serialize for FixedStr<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub unit_system: UnitSystem,
    pub num_classes: u32,
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub nx: u32,
    pub ny: u32,
    pub nz: u32,
    pub ncomp: u32,
}

/// Class name -> ordered variable names. The order is the column order
/// of every values array written for that class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableCatalog {
    classes: Vec<ClassName>,
    varnames: HashMap<ClassName, Vec<VarName>>,
}

impl VariableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated class name replaces the earlier entry and keeps its position.
    pub(crate) fn insert(&mut self, class_name: ClassName, varnames: Vec<VarName>) {
        if self.varnames.insert(class_name, varnames).is_none() {
            self.classes.push(class_name);
        }
    }

    pub fn get(&self, class_name: &ClassName) -> Option<&[VarName]> {
        self.varnames.get(class_name).map(Vec::as_slice)
    }

    pub fn contains(&self, class_name: &ClassName) -> bool {
        self.varnames.contains_key(class_name)
    }

    /// Classes in the order they appear in the file.
    pub fn class_names(&self) -> &[ClassName] {
        &self.classes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassName, &[VarName])> {
        self.classes
            .iter()
            .filter_map(|class| self.get(class).map(|vars| (class, vars)))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub timestep: i32,
    pub time: f32,
    pub max_perfs: i32,
    pub class_name: ClassName,
    pub instance_name: InstanceName,
    pub var_name: VarName,
    pub value: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    pub timesteps: Vec<i32>,
    pub times: Vec<f32>,
    pub values: Vec<f32>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A decoded plot file. `records` are in file order: block, then
/// instance, then catalog variable order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub header: Header,
    pub catalog: VariableCatalog,
    pub records: Vec<Record>,
}

impl Plot {
    pub fn class_names(&self) -> &[ClassName] {
        self.catalog.class_names()
    }

    /// Distinct instances of `class_name`, first-seen order.
    pub fn instance_names(&self, class_name: &ClassName) -> Vec<InstanceName> {
        let mut names: Vec<InstanceName> = Vec::new();
        for record in self.records.iter().filter(|r| r.class_name == *class_name) {
            if !names.contains(&record.instance_name) {
                names.push(record.instance_name);
            }
        }
        names
    }

    pub fn series(
        &self,
        class_name: &ClassName,
        instance_name: &InstanceName,
        var_name: &VarName,
    ) -> TimeSeries {
        let mut series = TimeSeries::new();
        for record in self.records.iter().filter(|r| {
            r.class_name == *class_name
                && r.instance_name == *instance_name
                && r.var_name == *var_name
        }) {
            series.timesteps.push(record.timestep);
            series.times.push(record.time);
            series.values.push(record.value);
        }
        series
    }

    pub fn records_in_time_range(
        &self,
        start_time: f32,
        end_time: f32,
    ) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |r| r.time >= start_time && r.time <= end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: f32, instance: &str, var: &str, value: f32) -> Record {
        Record {
            timestep: time as i32,
            time,
            max_perfs: 0,
            class_name: ClassName::padded("WELL").unwrap(),
            instance_name: InstanceName::padded(instance).unwrap(),
            var_name: VarName::padded(var).unwrap(),
            value,
        }
    }

    fn plot(records: Vec<Record>) -> Plot {
        let mut catalog = VariableCatalog::new();
        catalog.insert(
            ClassName::padded("WELL").unwrap(),
            vec![VarName::new(*b"WOPR"), VarName::new(*b"WWPR")],
        );
        Plot {
            header: Header {
                unit_system: UnitSystem::MetricBars,
                num_classes: 1,
                day: 1,
                month: 1,
                year: 2000,
                nx: 0,
                ny: 0,
                nz: 0,
                ncomp: 0,
            },
            catalog,
            records,
        }
    }

    #[test]
    fn test_fixed_str_padding_is_significant() {
        let stop = ClassName::padded("STOP").unwrap();
        assert_eq!(stop, *b"STOP    ");
        assert_ne!(ClassName::new(*b"STOPWELL"), stop);
        assert_ne!(ClassName::new(*b"STOP\0\0\0\0"), stop);
        assert_eq!(stop.trimmed(), "STOP");
        assert_eq!(stop.to_string(), "STOP    ");
        assert!(VarName::padded("TOOLONG").is_none());
    }

    #[test]
    fn test_fixed_str_serializes_untrimmed() {
        let json = serde_json::to_string(&ClassName::padded("WELL").unwrap()).unwrap();
        assert_eq!(json, "\"WELL    \"");
    }

    #[test]
    fn test_catalog_keeps_file_order() {
        let mut catalog = VariableCatalog::new();
        let field = ClassName::padded("FIELD").unwrap();
        let well = ClassName::padded("WELL").unwrap();
        catalog.insert(well, vec![VarName::new(*b"WOPR")]);
        catalog.insert(field, vec![]);
        catalog.insert(well, vec![VarName::new(*b"WWPR")]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.class_names(), &[well, field]);
        assert_eq!(catalog.get(&well).unwrap(), &[VarName::new(*b"WWPR")]);
        assert_eq!(catalog.get(&field).unwrap(), &[] as &[VarName]);
        assert!(catalog.get(&ClassName::padded("GROUP").unwrap()).is_none());
    }

    #[test]
    fn test_series_and_instances() {
        let plot = plot(vec![
            record(1.0, "P1", "WOPR", 10.0),
            record(1.0, "P1", "WWPR", 1.0),
            record(1.0, "I1", "WOPR", 0.0),
            record(2.0, "P1", "WOPR", 12.0),
        ]);
        let well = ClassName::padded("WELL").unwrap();
        let p1 = InstanceName::padded("P1").unwrap();

        assert_eq!(
            plot.instance_names(&well),
            vec![p1, InstanceName::padded("I1").unwrap()]
        );

        let series = plot.series(&well, &p1, &VarName::new(*b"WOPR"));
        assert_eq!(series.len(), 2);
        assert_eq!(series.times, vec![1.0, 2.0]);
        assert_eq!(series.values, vec![10.0, 12.0]);
        assert_eq!(series.timesteps, vec![1, 2]);

        assert!(plot
            .series(&well, &p1, &VarName::new(*b"WGPR"))
            .is_empty());
    }

    #[test]
    fn test_records_in_time_range() {
        let plot = plot(vec![
            record(1.0, "P1", "WOPR", 10.0),
            record(2.0, "P1", "WOPR", 11.0),
            record(3.0, "P1", "WOPR", 12.0),
        ]);
        let values: Vec<f32> = plot
            .records_in_time_range(2.0, 3.0)
            .map(|r| r.value)
            .collect();
        assert_eq!(values, vec![11.0, 12.0]);
    }
}
