use shared::WeightStatus;
use tracing::{info, warn};

use crate::domain::commands::babies::{
    AgeQuery, BabyComparison, CreateBabyCommand, WeightChangeResult, WeightCheckResult,
};
use crate::domain::models::baby::Baby;
use crate::domain::models::date::Date;

/// Service for working with a single baby record at a time
#[derive(Debug, Clone, Default)]
pub struct BabyService;

impl BabyService {
    pub fn new() -> Self {
        Self
    }

    /// Create a baby. Invalid fields fall back to their defaults and are
    /// reported as warnings.
    pub fn create_baby(&self, command: CreateBabyCommand) -> Baby {
        info!(
            "Creating baby: name={} {}, born={}/{}/{}, weight={}g",
            command.first_name,
            command.last_name,
            command.day,
            command.month,
            command.year,
            command.birth_weight_grams
        );

        if !Baby::is_valid_id(&command.id) {
            warn!("Id {:?} is not 9 characters long, using default id", command.id);
        }
        if !Date::is_valid(command.day, command.month, command.year) {
            warn!(
                "Date of birth {}/{}/{} is invalid, using {}",
                command.day,
                command.month,
                command.year,
                Date::default()
            );
        }
        if command.birth_weight_grams < 1000 {
            warn!(
                "Birth weight {}g is under 1 kg, using default weight",
                command.birth_weight_grams
            );
        }

        let baby = Baby::new(
            command.first_name,
            command.last_name,
            command.id,
            command.day,
            command.month,
            command.year,
            command.birth_weight_grams,
        );

        info!("Created baby with id {}", baby.id());
        baby
    }

    /// Check a baby's current weight for the given age in days
    pub fn check_weight(&self, baby: &Baby, age_in_days: i32) -> WeightCheckResult {
        let status = baby.is_weight_in_valid_range(age_in_days);
        let result = WeightCheckResult {
            status,
            age_in_days,
            current_weight: baby.current_weight(),
            minimum_healthy_grams: baby.minimum_healthy_weight(age_in_days),
        };

        match result.minimum_healthy_grams {
            Some(floor) => info!(
                "Weight check for {}: day {}, weight {}g, minimum {:.1}g, status {}",
                baby.id(),
                age_in_days,
                result.current_weight.to_grams(),
                floor,
                status
            ),
            None => warn!(
                "Weight check for {}: age {} days is outside the growth curve",
                baby.id(),
                age_in_days
            ),
        }

        result
    }

    /// Check a baby's current weight as of a calendar date
    pub fn check_weight_on(&self, baby: &Baby, on: &Date) -> WeightCheckResult {
        info!("Checking weight of {} on {}", baby.id(), on);
        self.check_weight(baby, baby.age_in_days(on))
    }

    pub fn check_weight_for(&self, baby: &Baby, query: AgeQuery) -> WeightCheckResult {
        match query {
            AgeQuery::Days(days) => self.check_weight(baby, days),
            AgeQuery::On(date) => self.check_weight_on(baby, &date),
        }
    }

    /// Apply a weight delta in grams; rejected deltas leave the weight as is
    pub fn record_weight_change(&self, baby: &mut Baby, grams: i32) -> WeightChangeResult {
        let previous = baby.current_weight();
        baby.update_current_weight(grams);
        let current = baby.current_weight();
        let applied = current.to_grams() == previous.to_grams() + grams as i64;

        if applied {
            info!("Updated weight of {}: {} -> {}", baby.id(), previous, current);
        } else {
            warn!(
                "Rejected weight change of {}g for {}: result would be under 1 kg",
                grams,
                baby.id()
            );
        }

        WeightChangeResult {
            previous,
            current,
            applied,
        }
    }

    pub fn compare(&self, baby: &Baby, other: &Baby) -> BabyComparison {
        info!("Comparing babies {} and {}", baby.id(), other.id());

        BabyComparison {
            same_baby: baby.equals(other),
            twins: baby.are_twins(other),
            heavier: baby.heavier(other),
            older: baby.older(other),
            days_apart: baby.date_of_birth().difference(&other.date_of_birth()),
        }
    }

    /// User-facing text for a weight status
    pub fn status_message(status: WeightStatus) -> &'static str {
        match status {
            WeightStatus::InvalidAge => "Invalid age",
            WeightStatus::Underweight => "Underweight",
            WeightStatus::Healthy => "Healthy weight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::weight::Weight;
    use crate::domain::models::baby::DEFAULT_ID;

    fn setup_test() -> BabyService {
        BabyService::new()
    }

    fn create_test_command(first_name: &str, id: &str, day: i32) -> CreateBabyCommand {
        CreateBabyCommand {
            first_name: first_name.to_string(),
            last_name: "Cohen".to_string(),
            id: id.to_string(),
            day,
            month: 1,
            year: 2024,
            birth_weight_grams: 3200,
        }
    }

    #[test]
    fn test_create_baby() {
        let service = setup_test();

        let baby = service.create_baby(create_test_command("Noa", "123456789", 1));

        assert_eq!(baby.first_name(), "Noa");
        assert_eq!(baby.last_name(), "Cohen");
        assert_eq!(baby.id(), "123456789");
        assert_eq!(baby.date_of_birth(), Date::new(1, 1, 2024));
        assert_eq!(baby.birth_weight(), Weight::new(3, 200));
    }

    #[test]
    fn test_create_baby_with_invalid_fields() {
        let service = setup_test();

        let mut command = create_test_command("Noa", "123", 32);
        command.birth_weight_grams = 900;
        let baby = service.create_baby(command);

        assert_eq!(baby.id(), DEFAULT_ID);
        assert_eq!(baby.date_of_birth(), Date::default());
        assert_eq!(baby.birth_weight(), Weight::default());
    }

    #[test]
    fn test_check_weight() {
        let service = setup_test();
        let mut baby = service.create_baby(create_test_command("Noa", "123456789", 1));
        baby.set_current_weight(Weight::from_grams(3100));

        let result = service.check_weight(&baby, 3);
        assert_eq!(result.status, WeightStatus::Healthy);
        assert_eq!(result.age_in_days, 3);
        assert_eq!(result.current_weight, Weight::new(3, 100));
        let floor = result.minimum_healthy_grams.unwrap();
        assert!((floor - 3062.857).abs() < 0.001);

        let result = service.check_weight(&baby, 366);
        assert_eq!(result.status, WeightStatus::InvalidAge);
        assert_eq!(result.minimum_healthy_grams, None);
    }

    #[test]
    fn test_check_weight_on_date() {
        let service = setup_test();
        let mut baby = service.create_baby(create_test_command("Noa", "123456789", 1));
        baby.set_current_weight(Weight::from_grams(3000));

        let result = service.check_weight_on(&baby, &Date::new(4, 1, 2024));
        assert_eq!(result.age_in_days, 3);
        assert_eq!(result.status, WeightStatus::Underweight);

        // Day of birth is not a valid age
        let result = service.check_weight_on(&baby, &Date::new(1, 1, 2024));
        assert_eq!(result.status, WeightStatus::InvalidAge);
    }

    #[test]
    fn test_check_weight_for_query() {
        let service = setup_test();
        let baby = service.create_baby(create_test_command("Noa", "123456789", 1));

        let by_days = service.check_weight_for(&baby, AgeQuery::Days(3));
        let by_date = service.check_weight_for(&baby, AgeQuery::On(Date::new(4, 1, 2024)));
        assert_eq!(by_days, by_date);
    }

    #[test]
    fn test_record_weight_change() {
        let service = setup_test();
        let mut baby = service.create_baby(create_test_command("Noa", "123456789", 1));

        let result = service.record_weight_change(&mut baby, 250);
        assert!(result.applied);
        assert_eq!(result.previous, Weight::new(3, 200));
        assert_eq!(result.current, Weight::new(3, 450));
        assert_eq!(baby.current_weight(), Weight::new(3, 450));

        let result = service.record_weight_change(&mut baby, -3000);
        assert!(!result.applied);
        assert_eq!(result.current, Weight::new(3, 450));
        assert_eq!(baby.current_weight(), Weight::new(3, 450));

        let result = service.record_weight_change(&mut baby, 0);
        assert!(result.applied);
    }

    #[test]
    fn test_compare_twins() {
        let service = setup_test();
        let first = service.create_baby(create_test_command("Noa", "111111111", 1));
        let mut second = service.create_baby(create_test_command("Maya", "222222222", 2));
        second.update_current_weight(-100);

        let comparison = service.compare(&first, &second);
        assert_eq!(
            comparison,
            BabyComparison {
                same_baby: false,
                twins: true,
                heavier: true,
                older: true,
                days_apart: 1,
            }
        );

        let third = service.create_baby(create_test_command("Maya", "222222222", 3));
        let comparison = service.compare(&first, &third);
        assert!(!comparison.twins);
        assert_eq!(comparison.days_apart, 2);
    }

    #[test]
    fn test_compare_same_baby() {
        let service = setup_test();
        let baby = service.create_baby(create_test_command("Noa", "111111111", 1));

        let comparison = service.compare(&baby, &baby.clone());
        assert!(comparison.same_baby);
        assert!(!comparison.twins);
        assert!(!comparison.heavier);
        assert!(!comparison.older);
        assert_eq!(comparison.days_apart, 0);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(BabyService::status_message(WeightStatus::InvalidAge), "Invalid age");
        assert_eq!(BabyService::status_message(WeightStatus::Underweight), "Underweight");
        assert_eq!(BabyService::status_message(WeightStatus::Healthy), "Healthy weight");
    }
}
