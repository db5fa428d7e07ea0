use std::cmp::Reverse;
use std::collections::HashMap;

use anyhow::{Context, Result};

/// One input record: a state code and a city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub state_code: String,
    pub city_name: String,
}

impl Record {
    /// Parses a `CODE;NAME` line, splitting on the first `;`.
    /// Everything after the first separator belongs to the city name.
    pub fn parse(line: &str) -> Result<Self> {
        let Some((code, name)) = line.split_once(';') else {
            anyhow::bail!("missing `;` separator in record: {line:?}");
        };
        Ok(Record {
            state_code: code.to_string(),
            city_name: name.to_string(),
        })
    }
}

/// City names grouped by state code.
///
/// States keep the order in which they first appear in the input; within a
/// state, cities accumulate in input order until `sort_by_length` runs.
#[derive(Debug, Default)]
pub struct GroupTable {
    groups: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl GroupTable {
    /// Builds the table from raw input lines. Fails on the first line
    /// without a separator, before anything is written downstream.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut table = GroupTable::default();
        for (n, line) in lines.into_iter().enumerate() {
            let record =
                Record::parse(line).with_context(|| format!("invalid input at line {}", n + 1))?;
            table.insert(record);
        }
        Ok(table)
    }

    pub fn insert(&mut self, record: Record) {
        match self.index.get(&record.state_code) {
            Some(&i) => self.groups[i].1.push(record.city_name),
            None => {
                self.index.insert(record.state_code.clone(), self.groups.len());
                self.groups.push((record.state_code, vec![record.city_name]));
            }
        }
    }

    /// Orders every group from the longest city name to the shortest.
    /// The sort is stable, so names of equal length keep their input order.
    pub fn sort_by_length(&mut self) {
        for (_, cities) in &mut self.groups {
            cities.sort_by_key(|name| Reverse(name.chars().count()));
        }
    }

    /// Groups in first-seen state order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(code, cities)| (code.as_str(), cities.as_slice()))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, cities)| cities.len()).sum()
    }
}
