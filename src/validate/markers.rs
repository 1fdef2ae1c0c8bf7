// src/validate/markers.rs

//! The four protocol markers and a single-pass scanner that locates them.

/// One of the literal marker lines a monitor must print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    StartDiagnostic,
    EndDiagnostic,
    StartResult,
    EndResult,
}

impl Marker {
    /// All markers, in the order they must appear.
    pub const ALL: [Marker; 4] = [
        Marker::StartDiagnostic,
        Marker::EndDiagnostic,
        Marker::StartResult,
        Marker::EndResult,
    ];

    pub fn literal(self) -> &'static str {
        match self {
            Marker::StartDiagnostic => "<-Start Diagnostic->",
            Marker::EndDiagnostic => "<-End Diagnostic->",
            Marker::StartResult => "<-Start Result->",
            Marker::EndResult => "<-End Result->",
        }
    }

    fn from_line(line: &str) -> Option<Marker> {
        let trimmed = line.trim();
        Marker::ALL.into_iter().find(|m| m.literal() == trimmed)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Line indices at which each marker was found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkerPositions {
    positions: [Vec<usize>; 4],
}

impl MarkerPositions {
    /// Scan `lines` once, recording every line that is exactly a marker.
    pub fn scan(lines: &[&str]) -> Self {
        let mut found = Self::default();
        for (idx, line) in lines.iter().enumerate() {
            if let Some(marker) = Marker::from_line(line) {
                found.positions[marker.index()].push(idx);
            }
        }
        found
    }

    pub fn of(&self, marker: Marker) -> &[usize] {
        &self.positions[marker.index()]
    }

    /// The unique position of each marker, in [`Marker::ALL`] order, or
    /// `None` if any marker occurs zero or several times.
    pub fn unique(&self) -> Option<[usize; 4]> {
        let mut out = [0usize; 4];
        for marker in Marker::ALL {
            match self.of(marker) {
                [only] => out[marker.index()] = *only,
                _ => return None,
            }
        }
        Some(out)
    }
}
