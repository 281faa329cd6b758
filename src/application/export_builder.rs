// Export assembly - turns a telemetry model into a workbook descriptor
use crate::domain::telemetry::TelemetryModel;
use crate::domain::workbook::{Cell, Sheet, Workbook};

/// Build the ordered sheet list for one dataset: speed samples, travel per
/// axis, and torque samples when recorded. Column order follows the model's
/// field order, not the source document's key order.
pub fn build_workbook(dataset_id: &str, model: &TelemetryModel) -> Workbook {
    let mut sheets = vec![speed_sheet(model), travel_sheet(model)];
    if let Some(torques) = &model.torque_samples {
        sheets.push(torque_sheet(model.num_axes(), torques));
    }

    Workbook {
        file_name: format!("analyse_{dataset_id}.xlsx"),
        sheets,
    }
}

fn speed_sheet(model: &TelemetryModel) -> Sheet {
    let mut columns = vec!["Time".to_string(), "TCP_Speed".to_string()];
    columns.extend((1..=model.num_axes()).map(|axis| format!("J{axis}_Speed")));

    let rows = model
        .samples
        .iter()
        .map(|sample| {
            let mut row = vec![Cell::Number(sample.time), Cell::Number(sample.tcp_speed)];
            row.extend(sample.joint_speeds.iter().map(|&v| Cell::Number(v)));
            row
        })
        .collect();

    Sheet {
        name: "Speed Data".to_string(),
        columns,
        rows,
    }
}

fn travel_sheet(model: &TelemetryModel) -> Sheet {
    let rows = model
        .total_travel
        .iter()
        .enumerate()
        .map(|(axis, &travel)| {
            vec![
                Cell::Text(format!("Axis {}", axis + 1)),
                Cell::Number(travel),
            ]
        })
        .collect();

    Sheet {
        name: "Travel Per Axis".to_string(),
        columns: vec!["Axis".to_string(), "Total Travel (degrees)".to_string()],
        rows,
    }
}

fn torque_sheet(num_axes: usize, torques: &[crate::domain::telemetry::TorqueSample]) -> Sheet {
    let mut columns = vec!["Time".to_string()];
    columns.extend((1..=num_axes).map(|axis| format!("J{axis}_Torque")));

    let rows = torques
        .iter()
        .map(|sample| {
            let mut row = vec![Cell::Number(sample.time)];
            row.extend(sample.joint_torques.iter().map(|&v| Cell::Number(v)));
            row
        })
        .collect();

    Sheet {
        name: "Torque Data".to_string(),
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::{TelemetrySample, TorqueSample};

    fn model(torques: bool) -> TelemetryModel {
        TelemetryModel {
            samples: vec![
                TelemetrySample {
                    time: 0.0,
                    tcp_speed: 1.5,
                    joint_speeds: vec![0.2, 0.9],
                },
                TelemetrySample {
                    time: 0.1,
                    tcp_speed: 2.5,
                    joint_speeds: vec![0.4, 0.7],
                },
            ],
            total_travel: vec![10.0, 25.5],
            torque_samples: torques.then(|| {
                vec![TorqueSample {
                    time: 0.0,
                    joint_torques: vec![12.0, -3.0],
                }]
            }),
            path: None,
            dominant_joint: None,
            commanded_speeds: Vec::new(),
        }
    }

    #[test]
    fn sheet_order_is_speed_travel_torque() {
        let workbook = build_workbook("run_42", &model(true));

        assert_eq!(workbook.file_name, "analyse_run_42.xlsx");
        let names: Vec<_> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Speed Data", "Travel Per Axis", "Torque Data"]);
    }

    #[test]
    fn torque_sheet_is_absent_without_torque_data() {
        let workbook = build_workbook("run_42", &model(false));
        assert_eq!(workbook.sheets.len(), 2);
    }

    #[test]
    fn speed_sheet_columns_follow_field_order() {
        let workbook = build_workbook("run_42", &model(false));
        let sheet = &workbook.sheets[0];

        assert_eq!(sheet.columns, vec!["Time", "TCP_Speed", "J1_Speed", "J2_Speed"]);
        assert_eq!(
            sheet.rows[1],
            vec![
                Cell::Number(0.1),
                Cell::Number(2.5),
                Cell::Number(0.4),
                Cell::Number(0.7)
            ]
        );
    }

    #[test]
    fn travel_sheet_round_trips_axis_travel() {
        let source = model(false);
        let workbook = build_workbook("run_42", &source);
        let sheet = &workbook.sheets[1];

        assert_eq!(sheet.rows.len(), source.num_axes());
        for (row, &travel) in sheet.rows.iter().zip(&source.total_travel) {
            assert_eq!(row[1], Cell::Number(travel));
        }
        assert_eq!(sheet.rows[0][0], Cell::Text("Axis 1".to_string()));
    }

    #[test]
    fn torque_sheet_columns_cover_every_axis() {
        let workbook = build_workbook("run_42", &model(true));
        let sheet = &workbook.sheets[2];

        assert_eq!(sheet.columns, vec!["Time", "J1_Torque", "J2_Torque"]);
        assert_eq!(
            sheet.rows[0],
            vec![Cell::Number(0.0), Cell::Number(12.0), Cell::Number(-3.0)]
        );
    }
}
