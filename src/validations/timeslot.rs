use validator::{ValidationError, ValidationErrors};

use crate::constants::MAX_TIMESLOT_CAPACITY;
use crate::types::requests::workday::timeslot_input::TimeslotInput;
use crate::utils::time_utils::{parse_hhmm, ranges_overlap};
use crate::utils::validation_utils::add_error;

fn field_error(message: &str, value: &str) -> ValidationError {
    add_error("timeslot.invalid", message.to_string(), value)
}

fn validate_single(slot: &TimeslotInput) -> Result<(u32, u32), ValidationError> {
    let start = parse_hhmm(&slot.start_time).ok_or_else(|| {
        field_error("Start time must be in HH:mm format", &slot.start_time)
    })?;
    let end = parse_hhmm(&slot.end_time)
        .ok_or_else(|| field_error("End time must be in HH:mm format", &slot.end_time))?;

    if start >= end {
        return Err(field_error(
            "Start time must be before end time",
            &slot.start_time,
        ));
    }

    if slot.max_employees < 1 || slot.max_employees > MAX_TIMESLOT_CAPACITY {
        return Err(field_error(
            &format!("Max employees must be between 1 and {MAX_TIMESLOT_CAPACITY}"),
            &slot.max_employees.to_string(),
        ));
    }

    Ok((start, end))
}

/// Validates a full set of timeslots for one workday, including the pairwise
/// half-open overlap rule.
pub fn validate_timeslots(slots: &[TimeslotInput]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut ranges: Vec<(u32, u32)> = Vec::with_capacity(slots.len());

    for slot in slots {
        match validate_single(slot) {
            Ok(range) => ranges.push(range),
            Err(e) => errors.add("timeslots", e),
        }
    }

    for i in 0..ranges.len() {
        for j in (i + 1)..ranges.len() {
            let (a_start, a_end) = ranges[i];
            let (b_start, b_end) = ranges[j];
            if ranges_overlap(a_start, a_end, b_start, b_end) {
                errors.add(
                    "timeslots",
                    field_error("Timeslots cannot overlap", &slots[j].start_time),
                );
            }
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: &str, end: &str, max_employees: u32) -> TimeslotInput {
        TimeslotInput {
            id: None,
            start_time: start.to_string(),
            end_time: end.to_string(),
            max_employees,
        }
    }

    fn messages(errors: ValidationErrors) -> Vec<String> {
        errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect()
    }

    #[test]
    fn accepts_back_to_back_slots() {
        let slots = [input("09:00", "11:00", 2), input("11:00", "13:00", 2)];
        assert!(validate_timeslots(&slots).is_ok());
    }

    #[test]
    fn rejects_overlapping_slot() {
        let slots = [
            input("09:00", "11:00", 2),
            input("11:00", "13:00", 2),
            input("10:00", "12:00", 2),
        ];
        let errors = validate_timeslots(&slots).unwrap_err();
        assert!(messages(errors).iter().any(|m| m == "Timeslots cannot overlap"));
    }

    #[test]
    fn rejects_inverted_range() {
        let errors = validate_timeslots(&[input("12:00", "10:00", 2)]).unwrap_err();
        assert!(
            messages(errors)
                .iter()
                .any(|m| m == "Start time must be before end time")
        );
    }

    #[test]
    fn rejects_bad_format_and_capacity() {
        let errors = validate_timeslots(&[input("9:00", "11:00", 2)]).unwrap_err();
        assert!(
            messages(errors)
                .iter()
                .any(|m| m == "Start time must be in HH:mm format")
        );

        let errors = validate_timeslots(&[input("09:00", "11:00", 0)]).unwrap_err();
        assert!(
            messages(errors)
                .iter()
                .any(|m| m.starts_with("Max employees must be between"))
        );

        let errors = validate_timeslots(&[input("09:00", "11:00", 11)]).unwrap_err();
        assert!(!messages(errors).is_empty());
    }
}
