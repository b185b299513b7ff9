use crate::core::models::atom::Atom;
use nalgebra::Point3;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Frame {frame} has {positions} positions for {atoms} atoms")]
    AtomCountMismatch {
        frame: usize,
        positions: usize,
        atoms: usize,
    },
}

#[derive(Debug, Serialize)]
struct TrajectoryRow<'a> {
    frame: usize,
    time: f64,
    phase: &'a str,
    atom: usize,
    element: &'a str,
    x: f64,
    y: f64,
    z: f64,
}

/// Writes animation frames as long-format CSV, one row per atom per frame.
///
/// Columns: `frame,time,phase,atom,element,x,y,z`, with `time` in seconds.
pub struct TrajectoryWriter<W: Write> {
    writer: csv::Writer<W>,
    frames_written: usize,
}

impl TrajectoryWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TrajectoryError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
            frames_written: 0,
        })
    }
}

impl<W: Write> TrajectoryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            frames_written: 0,
        }
    }

    /// Appends one frame. Frames are numbered in the order they are written.
    pub fn write_frame(
        &mut self,
        time_secs: f64,
        phase: &str,
        atoms: &[Atom],
        positions: &[Point3<f64>],
    ) -> Result<(), TrajectoryError> {
        let frame = self.frames_written;
        if atoms.len() != positions.len() {
            return Err(TrajectoryError::AtomCountMismatch {
                frame,
                positions: positions.len(),
                atoms: atoms.len(),
            });
        }
        for (atom, (a, p)) in atoms.iter().zip(positions).enumerate() {
            self.writer.serialize(TrajectoryRow {
                frame,
                time: time_secs,
                phase,
                atom,
                element: &a.element,
                x: p.x,
                y: p.y,
                z: p.z,
            })?;
        }
        self.frames_written += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn finish(self) -> Result<W, TrajectoryError> {
        self.writer
            .into_inner()
            .map_err(|e| TrajectoryError::Io(e.into_error()))
    }
}
