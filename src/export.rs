//! Client-side export of a generated plan as JSON or CSV.
//!
//! Both exports are pure functions of the last-received plan; no
//! server round-trip is involved. The CSV encoding deliberately does
//! not quote or escape embedded commas or newlines in field values —
//! a pre-existing limitation kept for output parity.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use serde_json::Value;

use crate::{Error, GeneratedPlan, Result, RoomDescriptor};

pub const JSON_FILE_NAME: &str = "floor_plan_summary.json";
pub const JSON_MIME_TYPE: &str = "application/json";
pub const CSV_FILE_NAME: &str = "floor_plan_data.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// A downloadable artifact: name, MIME type, and bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

impl ExportFile {
    /// Encode the file as a `data:` URI, the transient-reference
    /// counterpart of a blob URL: nothing outlives the returned string.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            BASE64.encode(&self.data)
        )
    }
}

#[derive(Serialize)]
struct ProjectInfo<'a> {
    total_area: u32,
    style: &'a str,
    special_requirements: &'a [String],
}

#[derive(Serialize)]
struct DesignSummary<'a> {
    project_info: ProjectInfo<'a>,
    rooms: &'a [RoomDescriptor],
}

/// Pretty-printed (2-space indented) JSON summary of a plan.
///
/// Parsing the result yields a `rooms` array that deep-equals the
/// input room list and a `project_info.total_area` equal to the
/// originating house size.
pub fn design_summary_json(plan: &GeneratedPlan) -> Result<String> {
    let summary = DesignSummary {
        project_info: ProjectInfo {
            total_area: plan.request.house_size,
            style: &plan.request.style,
            special_requirements: &plan.request.requirements,
        },
        rooms: &plan.rooms,
    };
    serde_json::to_string_pretty(&summary).map_err(|e| Error::ExportError(e.to_string()))
}

// CSV scalar rendering. JSON integers stay integers; floats print via
// f64 Display so integral values lose the trailing ".0" (100.0 -> 100).
fn csv_scalar(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else if let Some(f) = n.as_f64() {
                format!("{}", f)
            } else {
                n.to_string()
            }
        }
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Flat-table CSV of a room list.
///
/// The header row is the property names of the FIRST room in iteration
/// order; every data row resolves its values against that exact header
/// list, so extra keys on later rooms are ignored and missing keys
/// become empty fields. Rows are newline-joined with no trailing
/// newline. An empty room list is a programming error.
pub fn room_data_csv(rooms: &[RoomDescriptor]) -> Result<String> {
    let first = rooms
        .first()
        .ok_or_else(|| Error::ExportError("cannot export an empty room list".to_string()))?;

    let first_value =
        serde_json::to_value(first).map_err(|e| Error::ExportError(e.to_string()))?;
    let header: Vec<String> = match &first_value {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => return Err(Error::ExportError("room did not serialize to an object".to_string())),
    };

    let mut lines = Vec::with_capacity(rooms.len() + 1);
    lines.push(header.join(","));

    for room in rooms {
        let value = serde_json::to_value(room).map_err(|e| Error::ExportError(e.to_string()))?;
        let row: Vec<String> = match &value {
            Value::Object(map) => header.iter().map(|key| csv_scalar(map.get(key))).collect(),
            _ => return Err(Error::ExportError("room did not serialize to an object".to_string())),
        };
        lines.push(row.join(","));
    }

    Ok(lines.join("\n"))
}

/// Package the JSON summary as a downloadable file.
pub fn json_export(plan: &GeneratedPlan) -> Result<ExportFile> {
    Ok(ExportFile {
        file_name: JSON_FILE_NAME.to_string(),
        mime_type: JSON_MIME_TYPE,
        data: design_summary_json(plan)?.into_bytes(),
    })
}

/// Package the room-data CSV as a downloadable file.
pub fn csv_export(plan: &GeneratedPlan) -> Result<ExportFile> {
    Ok(ExportFile {
        file_name: CSV_FILE_NAME.to_string(),
        mime_type: CSV_MIME_TYPE,
        data: room_data_csv(&plan.rooms)?.into_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DesignRequest;

    fn sample_plan() -> GeneratedPlan {
        GeneratedPlan {
            request: DesignRequest::builder()
                .bedrooms(3)
                .bathrooms(2)
                .additional_rooms(1)
                .house_size(2000)
                .style("modern")
                .requirements(["open_floor_plan"])
                .build(),
            rooms: vec![
                RoomDescriptor::new("kitchen", 0.0, 0.0, 10.0, 10.0, 100.0),
                RoomDescriptor::new("bedroom", 10.0, 0.0, 12.5, 10.0, 125.0),
            ],
        }
    }

    #[test]
    fn json_summary_round_trips() {
        let plan = sample_plan();
        let json = design_summary_json(&plan).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["project_info"]["total_area"], 2000);
        assert_eq!(parsed["project_info"]["style"], "modern");
        let rooms: Vec<RoomDescriptor> =
            serde_json::from_value(parsed["rooms"].clone()).unwrap();
        assert_eq!(rooms, plan.rooms);
    }

    #[test]
    fn json_summary_is_pretty_printed() {
        let json = design_summary_json(&sample_plan()).unwrap();
        assert!(json.contains("\n  \"project_info\""));
    }

    #[test]
    fn csv_matches_expected_shape_for_single_kitchen() {
        let rooms = vec![RoomDescriptor::new("kitchen", 0.0, 0.0, 10.0, 10.0, 100.0)];
        let csv = room_data_csv(&rooms).unwrap();
        assert_eq!(csv, "room_type,x,y,width,height,size\nkitchen,0,0,10,10,100");
    }

    #[test]
    fn csv_rows_align_to_first_room_header() {
        let mut second = RoomDescriptor::new("bedroom", 1.0, 2.0, 3.0, 4.0, 12.0);
        second
            .extra
            .insert("floor".to_string(), serde_json::json!(2));
        let rooms = vec![
            RoomDescriptor::new("kitchen", 0.0, 0.0, 10.0, 10.0, 100.0),
            second,
        ];
        let csv = room_data_csv(&rooms).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        let header_fields = lines[0].split(',').count();
        for row in &lines[1..] {
            // The second room's extra "floor" column is ignored because
            // the first room's keys define the header.
            assert_eq!(row.split(',').count(), header_fields);
        }
        assert_eq!(lines[0], "room_type,x,y,width,height,size");
    }

    #[test]
    fn csv_missing_keys_become_empty_fields() {
        let mut first = RoomDescriptor::new("kitchen", 0.0, 0.0, 10.0, 10.0, 100.0);
        first
            .extra
            .insert("wing".to_string(), serde_json::json!("east"));
        let rooms = vec![
            first,
            RoomDescriptor::new("bathroom", 0.0, 10.0, 5.0, 5.0, 25.0),
        ];
        let csv = room_data_csv(&rooms).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "room_type,x,y,width,height,size,wing");
        assert!(lines[1].ends_with(",east"));
        assert!(lines[2].ends_with(","));
        assert_eq!(lines[2].split(',').count(), 7);
    }

    #[test]
    fn csv_does_not_escape_embedded_commas() {
        // Known limitation: a comma inside a value shifts columns.
        let rooms = vec![RoomDescriptor::new("den, cozy", 0.0, 0.0, 5.0, 5.0, 25.0)];
        let csv = room_data_csv(&rooms).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("den, cozy,"));
    }

    #[test]
    fn csv_rejects_empty_room_list() {
        let err = room_data_csv(&[]).expect_err("should fail");
        assert!(matches!(err, Error::ExportError(_)));
    }

    #[test]
    fn export_files_carry_names_and_mime_types() {
        let plan = sample_plan();
        let json = json_export(&plan).unwrap();
        assert_eq!(json.file_name, "floor_plan_summary.json");
        assert_eq!(json.mime_type, "application/json");
        let csv = csv_export(&plan).unwrap();
        assert_eq!(csv.file_name, "floor_plan_data.csv");
        assert_eq!(csv.mime_type, "text/csv");
    }

    #[test]
    fn data_uri_wraps_the_payload() {
        let plan = sample_plan();
        let file = csv_export(&plan).unwrap();
        let uri = file.to_data_uri();
        assert!(uri.starts_with("data:text/csv;base64,"));
        let encoded = uri.strip_prefix("data:text/csv;base64,").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), file.data);
    }
}
