/// One named tier the schedule will attempt, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSpec {
    pub label: String,
    pub capacity: f64,
}

impl TierSpec {
    pub fn new(label: impl Into<String>, capacity: f64) -> Self {
        Self {
            label: label.into(),
            capacity,
        }
    }
}

/// The capacity schedule driving allocation: a fixed list of named tiers,
/// then unlimited "Extra Slot N" tiers of one fixed capacity for whatever
/// records remain. Validated on construction so the allocator never sees a
/// zero or negative capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacitySchedule {
    named: Vec<TierSpec>,
    extra_label: String,
    extra_capacity: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("tier \"{label}\" must have a finite, positive capacity (got {value})")]
    InvalidCapacity { label: String, value: f64 },
    #[error("every scheduled tier needs a non-empty label")]
    EmptyLabel,
}

impl CapacitySchedule {
    pub fn new(
        named: Vec<TierSpec>,
        extra_label: impl Into<String>,
        extra_capacity: f64,
    ) -> Result<Self, ScheduleError> {
        let extra_label = extra_label.into();
        for spec in &named {
            validate_spec(&spec.label, spec.capacity)?;
        }
        validate_spec(&extra_label, extra_capacity)?;

        Ok(Self {
            named,
            extra_label,
            extra_capacity,
        })
    }

    /// The tracker's stock schedule: Initial 75, Average 250, Dominant 300,
    /// then Extra Slot tiers of 100 apiece.
    pub fn standard() -> Self {
        Self {
            named: vec![
                TierSpec::new("Initial", 75.0),
                TierSpec::new("Average", 250.0),
                TierSpec::new("Dominant", 300.0),
            ],
            extra_label: "Extra Slot".to_string(),
            extra_capacity: 100.0,
        }
    }

    pub fn named(&self) -> &[TierSpec] {
        &self.named
    }

    pub fn extra_capacity(&self) -> f64 {
        self.extra_capacity
    }

    /// Display label for the k-th synthesized extra tier (1-based).
    pub fn extra_label(&self, k: usize) -> String {
        format!("{} {}", self.extra_label, k)
    }
}

fn validate_spec(label: &str, capacity: f64) -> Result<(), ScheduleError> {
    if label.trim().is_empty() {
        return Err(ScheduleError::EmptyLabel);
    }
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(ScheduleError::InvalidCapacity {
            label: label.to_string(),
            value: capacity,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schedule_carries_tracker_capacities() {
        let schedule = CapacitySchedule::standard();
        let named = schedule.named();
        assert_eq!(named.len(), 3);
        assert_eq!(named[0], TierSpec::new("Initial", 75.0));
        assert_eq!(named[1], TierSpec::new("Average", 250.0));
        assert_eq!(named[2], TierSpec::new("Dominant", 300.0));
        assert_eq!(schedule.extra_capacity(), 100.0);
        assert_eq!(schedule.extra_label(1), "Extra Slot 1");
        assert_eq!(schedule.extra_label(12), "Extra Slot 12");
    }

    #[test]
    fn rejects_non_positive_capacities() {
        let err = CapacitySchedule::new(vec![TierSpec::new("Initial", 0.0)], "Extra Slot", 100.0)
            .expect_err("zero capacity rejected");
        assert_eq!(
            err,
            ScheduleError::InvalidCapacity {
                label: "Initial".to_string(),
                value: 0.0
            }
        );

        let err = CapacitySchedule::new(Vec::new(), "Extra Slot", -5.0)
            .expect_err("negative extra capacity rejected");
        assert!(matches!(err, ScheduleError::InvalidCapacity { .. }));
    }

    #[test]
    fn rejects_blank_labels() {
        let err = CapacitySchedule::new(vec![TierSpec::new("  ", 10.0)], "Extra Slot", 100.0)
            .expect_err("blank label rejected");
        assert_eq!(err, ScheduleError::EmptyLabel);
    }

    #[test]
    fn empty_named_list_is_allowed() {
        let schedule =
            CapacitySchedule::new(Vec::new(), "Extra Slot", 40.0).expect("extras-only schedule");
        assert!(schedule.named().is_empty());
        assert_eq!(schedule.extra_capacity(), 40.0);
    }
}
