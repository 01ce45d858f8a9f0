//! Input schema for benchmark measurement files.
//!
//! A metrics file is a JSON array with one object per observed call.
//! Wei amounts may arrive either as JSON numbers or as decimal strings,
//! because the producers serialize big numbers as strings.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// One observed contract call (or deployment)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    /// Contract variant name
    pub contract: String,

    /// Action label, e.g. "deploy" or "aggregateQuotes"
    pub action: String,

    /// Benchmark iteration (absent on deploy rows)
    #[serde(default)]
    pub iteration: Option<u32>,

    /// Gas consumed by the call
    #[serde(deserialize_with = "deserialize_gas")]
    pub gas_used: u64,

    /// Fee paid, in wei
    #[serde(deserialize_with = "deserialize_wei")]
    pub fee_wei: u128,

    /// Gas price the fee was computed with, in wei
    #[serde(default, deserialize_with = "deserialize_optional_wei")]
    pub gas_price: Option<u128>,

    /// Compiled bytecode size (deploy rows only)
    #[serde(default)]
    pub bytecode_size_bytes: Option<u64>,

    /// Transaction payload size
    #[serde(default)]
    pub tx_size_bytes: Option<u64>,
}

impl MeasurementRecord {
    /// Check if this record is a deployment
    pub fn is_deploy(&self) -> bool {
        self.action == crate::utils::config::DEPLOY_ACTION
    }
}

/// The full, immutable set of loaded records
#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    records: Vec<MeasurementRecord>,
}

impl MetricsTable {
    pub fn new(records: Vec<MeasurementRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct contract names, sorted lexicographically
    pub fn contracts(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.contract.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct action names, sorted lexicographically
    pub fn actions(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.action.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Non-negative integer field; error messages name the JSON field
struct IntegerVisitor {
    field: &'static str,

    /// Also accept decimal strings
    text: bool,
}

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.text {
            write!(f, "`{}` as a non-negative integer or decimal string", self.field)
        } else {
            write!(f, "`{}` as a non-negative integer", self.field)
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
        Ok(u128::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
        u128::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u128, E> {
        // JSON integers beyond u64 arrive as floats
        if v.is_finite() && v.fract() == 0.0 && v >= u64::MAX as f64 {
            Ok(v as u128)
        } else {
            Err(E::invalid_type(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
        if !self.text {
            return Err(E::invalid_type(Unexpected::Str(v), &self));
        }
        v.trim()
            .parse::<u128>()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

fn deserialize_gas<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserializer.deserialize_any(IntegerVisitor {
        field: "gasUsed",
        text: false,
    })?;
    u64::try_from(value)
        .map_err(|_| de::Error::custom(format!("`gasUsed` out of range: {}", value)))
}

fn deserialize_wei<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor {
        field: "feeWei",
        text: true,
    })
}

struct GasPrice(u128);

impl<'de> Deserialize<'de> for GasPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(IntegerVisitor {
                field: "gasPrice",
                text: true,
            })
            .map(GasPrice)
    }
}

fn deserialize_optional_wei<'de, D>(deserializer: D) -> Result<Option<u128>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<GasPrice>::deserialize(deserializer)?.map(|p| p.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_wei_as_string() {
        let record: MeasurementRecord = serde_json::from_str(
            r#"{"contract":"A","action":"deploy","gasUsed":1000,"feeWei":"1000000000000000","bytecodeSizeBytes":500}"#,
        )
        .unwrap();

        assert_eq!(record.fee_wei, 1_000_000_000_000_000);
        assert_eq!(record.bytecode_size_bytes, Some(500));
        assert!(record.is_deploy());
        assert!(record.iteration.is_none());
    }

    #[test]
    fn test_fee_wei_as_number() {
        let record: MeasurementRecord = serde_json::from_str(
            r#"{"contract":"A","action":"claimReward","iteration":3,"gasUsed":21000,"feeWei":42000,"gasPrice":"2"}"#,
        )
        .unwrap();

        assert_eq!(record.fee_wei, 42_000);
        assert_eq!(record.gas_price, Some(2));
        assert_eq!(record.iteration, Some(3));
        assert!(!record.is_deploy());
    }

    #[test]
    fn test_fee_wei_larger_than_u64() {
        let record: MeasurementRecord = serde_json::from_str(
            r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":"100000000000000000000"}"#,
        )
        .unwrap();

        assert_eq!(record.fee_wei, 100_000_000_000_000_000_000);
    }

    fn parse_error(json: &str) -> String {
        serde_json::from_str::<MeasurementRecord>(json)
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_fee_wei_number_larger_than_u64() {
        let record: MeasurementRecord = serde_json::from_str(
            r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":100000000000000000000}"#,
        )
        .unwrap();

        assert_eq!(record.fee_wei, 100_000_000_000_000_000_000);
    }

    #[test]
    fn test_non_integer_fee_wei_names_field() {
        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":12.5}"#);
        assert!(err.contains("feeWei"), "{}", err);

        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":"12.5"}"#);
        assert!(err.contains("feeWei"), "{}", err);

        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":"abc"}"#);
        assert!(err.contains("feeWei"), "{}", err);

        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":-3}"#);
        assert!(err.contains("feeWei"), "{}", err);
    }

    #[test]
    fn test_non_integer_gas_used_names_field() {
        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":12.5,"feeWei":1}"#);
        assert!(err.contains("gasUsed"), "{}", err);

        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":"1000","feeWei":1}"#);
        assert!(err.contains("gasUsed"), "{}", err);

        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":-1,"feeWei":1}"#);
        assert!(err.contains("gasUsed"), "{}", err);
    }

    #[test]
    fn test_gas_price_null_is_absent() {
        let record: MeasurementRecord = serde_json::from_str(
            r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":1,"gasPrice":null}"#,
        )
        .unwrap();
        assert!(record.gas_price.is_none());

        let err = parse_error(r#"{"contract":"A","action":"deploy","gasUsed":1,"feeWei":1,"gasPrice":true}"#);
        assert!(err.contains("gasPrice"), "{}", err);
    }

    #[test]
    fn test_missing_gas_used_is_error() {
        let err = parse_error(r#"{"contract":"A","action":"deploy","feeWei":"1"}"#);
        assert!(err.contains("gasUsed"), "{}", err);
    }

    #[test]
    fn test_table_contracts_sorted_and_distinct() {
        let records: Vec<MeasurementRecord> = serde_json::from_str(
            r#"[
                {"contract":"OraTransient","action":"deploy","gasUsed":1,"feeWei":"1"},
                {"contract":"OraMemory","action":"deploy","gasUsed":1,"feeWei":"1"},
                {"contract":"OraTransient","action":"aggregateQuotes","gasUsed":1,"feeWei":"1"}
            ]"#,
        )
        .unwrap();
        let table = MetricsTable::new(records);

        assert_eq!(table.len(), 3);
        assert_eq!(table.contracts(), vec!["OraMemory", "OraTransient"]);
        assert_eq!(table.actions(), vec!["aggregateQuotes", "deploy"]);
    }
}
