//! Core data types

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Bike model produced on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeModel {
    IBv1,
    #[serde(rename = "evIB100")]
    EvIb100,
    #[serde(rename = "evIB200")]
    EvIb200,
    #[serde(rename = "undefined")]
    Undefined,
}

impl BikeModel {
    /// Map a partition key from the CSV to its model.
    ///
    /// Keys outside `1..=3` map to [`BikeModel::Undefined`].
    pub fn from_partition_key(key: i32) -> Self {
        match key {
            1 => BikeModel::IBv1,
            2 => BikeModel::EvIb100,
            3 => BikeModel::EvIb200,
            _ => BikeModel::Undefined,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BikeModel::IBv1 => "IBv1",
            BikeModel::EvIb100 => "evIB100",
            BikeModel::EvIb200 => "evIB200",
            BikeModel::Undefined => "undefined",
        }
    }
}

impl fmt::Display for BikeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of production for a single model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    pub date: NaiveDateTime,
    pub model: BikeModel,
    pub items_produced: i32,
}

impl ProductionRecord {
    pub fn new(date: NaiveDateTime, model: BikeModel, items_produced: i32) -> Self {
        Self {
            date,
            model,
            items_produced,
        }
    }
}
