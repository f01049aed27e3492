//! Console encoder that appends a record's key/values after the formatted message.
//!
//! Pairs are collected before anything is written, so a line is either complete or
//! not written past the message. Values containing whitespace are quoted so
//! `reason="no route"` stays one field.

use log::{
    Record,
    kv::{self, Key, Value, VisitSource},
};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::{Color, Encode, Style, Write};
use serde::Deserialize;

const DEFAULT_PATTERN: &str = "{d} {l} {m}";

#[derive(Debug, Default, Deserialize)]
pub struct KeyValueEncoderConfig {
    pub pattern: Option<String>,
    /// Highlight keys. Defaults to `true`.
    pub colored: Option<bool>,
}

#[derive(Debug)]
pub struct KeyValueEncoder {
    message: PatternEncoder,
    colored: bool,
}

impl KeyValueEncoder {
    pub fn new(pattern: &str, colored: bool) -> Self {
        Self {
            message: PatternEncoder::new(pattern),
            colored,
        }
    }

    pub fn from_config(config: &KeyValueEncoderConfig) -> Self {
        Self::new(
            config.pattern.as_deref().unwrap_or(DEFAULT_PATTERN),
            config.colored.unwrap_or(true),
        )
    }

    fn write_pairs(&self, w: &mut dyn Write, pairs: &[(String, String)]) -> std::io::Result<()> {
        for (key, value) in pairs {
            if self.colored {
                w.set_style(Style::new().text(Color::Cyan))?;
                write!(w, " {}=", key)?;
                w.set_style(&Style::default())?;
            } else {
                write!(w, " {}=", key)?;
            }
            write!(w, "{}", value)?;
        }
        Ok(())
    }
}

impl Encode for KeyValueEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        let pairs = collect_pairs(record).map_err(|e| anyhow::anyhow!("KV error: {}", e))?;
        self.message.encode(w, record)?;
        self.write_pairs(w, &pairs)?;
        w.write_all(b"\n")?;
        Ok(())
    }
}

#[derive(Default)]
struct PairCollector {
    pairs: Vec<(String, String)>,
}

impl<'kvs> VisitSource<'kvs> for PairCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.pairs.push((key.to_string(), format_value(&value)));
        Ok(())
    }
}

fn collect_pairs(record: &Record) -> Result<Vec<(String, String)>, kv::Error> {
    let mut collector = PairCollector::default();
    record.key_values().visit(&mut collector)?;
    Ok(collector.pairs)
}

fn format_value(value: &Value<'_>) -> String {
    let text = value.to_string();
    if text.is_empty() || text.chars().any(char::is_whitespace) {
        format!("{:?}", text)
    } else {
        text
    }
}

pub struct KeyValueEncoderDeserializer;

impl log4rs::config::Deserialize for KeyValueEncoderDeserializer {
    type Trait = dyn Encode;
    type Config = KeyValueEncoderConfig;

    fn deserialize(
        &self,
        config: KeyValueEncoderConfig,
        _: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<dyn Encode>> {
        Ok(Box::new(KeyValueEncoder::from_config(&config)))
    }
}
