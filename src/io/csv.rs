use std::io::{self, Write};

use crate::sim::runner::Sample;

/// Write trajectory samples in CSV format.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z,
///          speed, air_density, deployed
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[Sample]) -> io::Result<()> {
    writeln!(
        writer,
        "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,speed,air_density,deployed"
    )?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.6},{}",
            s.time,
            s.position.x, s.position.y, s.position.z,
            s.velocity.x, s.velocity.y, s.velocity.z,
            s.speed(),
            s.air_density,
            u8::from(s.deployed),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[Sample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            Sample {
                time: 0.0,
                position: Vector3::new(0.0, 1_500.0, 0.0),
                velocity: Vector3::zeros(),
                air_density: 1.225,
                deployed: false,
            },
            Sample {
                time: 0.016,
                position: Vector3::new(0.0, 1_499.9, 0.0),
                velocity: Vector3::new(0.0, -0.157, 0.0),
                air_density: 1.2,
                deployed: true,
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,"));
        assert!(lines[2].ends_with(",1"));
    }
}
