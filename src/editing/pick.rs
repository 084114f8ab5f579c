use tracing::debug;

use crate::error::{EditError, Result};

/// One hit record from a GL selection pass.
///
/// Control points are drawn with name `index + 1`, so name `0` means "no
/// control point" (the placeholder pushed before the first load).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickHit {
    /// Name stack at the time of the hit, outermost first.
    pub names: Vec<u32>,
    /// Minimum window depth of the hit, scaled to the full `u32` range.
    pub z_min: u32,
    /// Maximum window depth of the hit.
    pub z_max: u32,
}

impl PickHit {
    /// Creates a hit for a single name.
    #[must_use]
    pub fn new(name: u32, z_min: u32, z_max: u32) -> Self {
        Self {
            names: vec![name],
            z_min,
            z_max,
        }
    }

    /// The control point index this hit refers to, if any.
    #[must_use]
    pub fn control_point(&self) -> Option<usize> {
        let name = *self.names.last()?;
        let index = name.checked_sub(1)?;
        usize::try_from(index).ok()
    }
}

/// Decodes `hits` records from a GL selection buffer.
///
/// Each record is `[name_count, z_min, z_max, name_0, …, name_{count-1}]`.
///
/// # Errors
///
/// Returns [`EditError::MalformedSelectBuffer`] if the buffer ends in the
/// middle of a record.
pub fn parse_select_buffer(buffer: &[u32], hits: usize) -> Result<Vec<PickHit>> {
    let mut records = Vec::with_capacity(hits);
    let mut rest = buffer;
    for record in 0..hits {
        let [count, z_min, z_max, tail @ ..] = rest else {
            return Err(EditError::MalformedSelectBuffer(format!(
                "record {record} has no header"
            ))
            .into());
        };
        let count = usize::try_from(*count).map_err(|_| {
            EditError::MalformedSelectBuffer(format!("record {record} has an invalid name count"))
        })?;
        if tail.len() < count {
            return Err(EditError::MalformedSelectBuffer(format!(
                "record {record} needs {count} names, {} left",
                tail.len()
            ))
            .into());
        }
        let (names, remaining) = tail.split_at(count);
        records.push(PickHit {
            names: names.to_vec(),
            z_min: *z_min,
            z_max: *z_max,
        });
        rest = remaining;
    }
    Ok(records)
}

/// Resolves a selection pass to a control point index.
pub struct PickControlPoint<'a> {
    hits: &'a [PickHit],
}

impl<'a> PickControlPoint<'a> {
    /// Creates a new `PickControlPoint` query.
    #[must_use]
    pub fn new(hits: &'a [PickHit]) -> Self {
        Self { hits }
    }

    /// Returns the control point nearest the camera among the hits, or `None`
    /// when no hit names a point of a track with `track_len` points.
    #[must_use]
    pub fn execute(&self, track_len: usize) -> Option<usize> {
        let picked = self
            .hits
            .iter()
            .filter_map(|hit| {
                hit.control_point()
                    .filter(|&index| index < track_len)
                    .map(|index| (hit.z_min, index))
            })
            .min_by_key(|&(z_min, _)| z_min)
            .map(|(_, index)| index);
        debug!(hits = self.hits.len(), ?picked, "resolved pick");
        picked
    }
}
