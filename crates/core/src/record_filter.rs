//! Selection of one equipment's records and its failure subset.

use crate::intervention::InterventionRecord;

/// Records belonging to one piece of equipment.
///
/// Holds owned copies so the derived report never aliases the caller's
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct EquipmentRecords {
    pub all: Vec<InterventionRecord>,
    pub curative: Vec<InterventionRecord>,
}

impl EquipmentRecords {
    pub fn total_count(&self) -> usize {
        self.all.len()
    }

    pub fn completed_count(&self) -> usize {
        self.all.iter().filter(|r| r.status.is_completed()).count()
    }
}

/// Select every record whose equipment code equals `equipment_code` exactly,
/// plus the curative subset. Input order is preserved; an unknown code simply
/// yields empty sets.
pub fn filter_equipment(records: &[InterventionRecord], equipment_code: &str) -> EquipmentRecords {
    let all: Vec<InterventionRecord> = records
        .iter()
        .filter(|r| r.equipment_code == equipment_code)
        .cloned()
        .collect();
    let curative = all.iter().filter(|r| r.is_curative()).cloned().collect();
    EquipmentRecords { all, curative }
}
