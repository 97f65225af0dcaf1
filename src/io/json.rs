use std::io::{Read, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::dynamics::params::SimulationParameters;
use crate::error::SimResult;
use crate::sim::engine::PhysicsEngine;
use crate::sim::landing::LandingQuality;

/// Landing history keeps only the most recent jumps.
pub const MAX_LOG_ENTRIES: usize = 10;

// ---------------------------------------------------------------------------
// Landing record
// ---------------------------------------------------------------------------

/// Summary of one completed jump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingRecord {
    /// Unix timestamp, s
    pub timestamp: u64,
    pub velocity: f64,
    pub quality: LandingQuality,
    pub flight_time: f64,
    pub parachute_deployed: bool,
    pub parameters: SimulationParameters,
}

impl LandingRecord {
    /// Build a record from the engine's current state and an impact speed.
    pub fn from_engine(engine: &PhysicsEngine, impact_speed: f64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            timestamp,
            velocity: impact_speed,
            quality: LandingQuality::from_speed(impact_speed),
            flight_time: engine.state().time,
            parachute_deployed: engine.parameters().parachute_deployed,
            parameters: engine.parameters().clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rolling landing log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandingLog {
    records: Vec<LandingRecord>,
}

impl LandingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, dropping the oldest beyond `MAX_LOG_ENTRIES`.
    pub fn push(&mut self, record: LandingRecord) {
        self.records.push(record);
        if self.records.len() > MAX_LOG_ENTRIES {
            let excess = self.records.len() - MAX_LOG_ENTRIES;
            self.records.drain(..excess);
        }
    }

    pub fn records(&self) -> &[LandingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lowest impact speed on record.
    pub fn best(&self) -> Option<&LandingRecord> {
        self.records
            .iter()
            .min_by(|a, b| a.velocity.total_cmp(&b.velocity))
    }

    pub fn read_from<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> SimResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load a log file; a missing file is an empty log.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        match std::fs::File::open(path.as_ref()) {
            Ok(file) => Self::read_from(std::io::BufReader::new(file)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SimResult<()> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_to(std::io::BufWriter::new(file))
    }
}
