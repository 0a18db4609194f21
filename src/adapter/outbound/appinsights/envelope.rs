//! Application Insights ingestion envelopes.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::port::outbound::telemetry::TelemetryItem;

const SDK_VERSION: &str = concat!("rust:captureorder-", env!("CARGO_PKG_VERSION"));

/// One telemetry item in the wire format of the `v2/track` endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope {
    name: String,
    time: String,
    #[serde(rename = "iKey")]
    instrumentation_key: String,
    tags: BTreeMap<&'static str, String>,
    data: Data,
}

#[derive(Debug, Serialize)]
struct Data {
    #[serde(rename = "baseType")]
    base_type: &'static str,
    #[serde(rename = "baseData")]
    base_data: Value,
}

impl Envelope {
    #[must_use]
    pub fn new(instrumentation_key: &str, item: &TelemetryItem, now: DateTime<Utc>) -> Self {
        let (suffix, base_type, base_data, time) = match item {
            TelemetryItem::Event { name } => (
                "Event",
                "EventData",
                json!({ "ver": 2, "name": name }),
                now,
            ),
            TelemetryItem::Exception(e) => (
                "Exception",
                "ExceptionData",
                json!({
                    "ver": 2,
                    "exceptions": [{
                        "typeName": e.type_name,
                        "message": e.message,
                        "hasFullStack": false,
                    }],
                }),
                now,
            ),
            TelemetryItem::Dependency(d) => (
                "RemoteDependency",
                "RemoteDependencyData",
                json!({
                    "ver": 2,
                    "id": Uuid::new_v4().to_string(),
                    "name": d.name,
                    "type": d.kind,
                    "target": d.target,
                    "data": d.operation,
                    "success": d.success,
                    "resultCode": "",
                    "duration": format_duration(d.duration()),
                }),
                d.started_at,
            ),
        };

        let mut tags = BTreeMap::new();
        tags.insert("ai.internal.sdkVersion", SDK_VERSION.to_string());

        Self {
            name: format!(
                "Microsoft.ApplicationInsights.{}.{suffix}",
                instrumentation_key.replace('-', "")
            ),
            time: time.to_rfc3339_opts(SecondsFormat::Micros, true),
            instrumentation_key: instrumentation_key.to_string(),
            tags,
            data: Data {
                base_type,
                base_data,
            },
        }
    }
}

/// Render a duration as `d.hh:mm:ss.ffffff`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    format!(
        "{days}.{hours:02}:{minutes:02}:{seconds:02}.{:06}",
        duration.subsec_micros()
    )
}
