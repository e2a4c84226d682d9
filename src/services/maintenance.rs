//! Equipment lifecycle model
//!
//! Maintenance urgency is derived from the equipment's dates on every
//! render: `today` advances and the alert gate is user-controlled, so
//! nothing here is cached.

use chrono::NaiveDate;

use crate::models::Equipment;

/// Date format used throughout the record collections
const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Whether the overdue alert should show for the current render.
///
/// True iff the equipment is present, its next maintenance date parses, the
/// alert gate is open, and the date is strictly earlier than `today`.
/// Malformed dates count as not due.
pub fn is_maintenance_due(
    equipment: Option<&Equipment>,
    today: NaiveDate,
    alerts_enabled: bool,
) -> bool {
    if !alerts_enabled {
        return false;
    }
    let Some(equipment) = equipment else {
        return false;
    };
    match parse_date(&equipment.next_maintenance) {
        Some(next) => next < today,
        None => false,
    }
}

/// Advisory banner text for an overdue record; never gates a write.
pub fn overdue_message(equipment: &Equipment, today: NaiveDate) -> Option<String> {
    let next = parse_date(&equipment.next_maintenance)?;
    (next < today).then(|| {
        format!(
            "Maintenance is overdue for {}. Please schedule it immediately.",
            equipment.title
        )
    })
}

/// Dismissal state for one detail-view instance.
///
/// Dismissing suppresses the alert for the remainder of that instance's
/// lifetime; a fresh load starts enabled again.
#[derive(Debug, Clone)]
pub struct AlertBanner {
    enabled: bool,
}

impl Default for AlertBanner {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AlertBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn dismiss(&mut self) {
        self.enabled = false;
    }

    pub fn is_due(&self, equipment: Option<&Equipment>, today: NaiveDate) -> bool {
        is_maintenance_due(equipment, today, self.enabled)
    }
}
