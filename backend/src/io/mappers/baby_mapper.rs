//! backend/src/io/mappers/baby_mapper.rs

use anyhow::{Context, Result};
use shared::{BabyComparisonResponse, BabyRecord, CreateBabyRequest, WeightCheckResponse};

use crate::domain::baby_service::BabyService;
use crate::domain::commands::babies::{BabyComparison, CreateBabyCommand, WeightCheckResult};
use crate::domain::models::baby::Baby;
use crate::domain::models::date::Date;

/// Mapper to convert between shared baby DTOs and domain models.
pub struct BabyMapper;

impl BabyMapper {
    /// Converts a create request into a domain command.
    ///
    /// The date of birth text must parse as DD/MM/YYYY. Other fields are passed
    /// through unchanged and fall back inside the domain if invalid.
    pub fn to_command(request: CreateBabyRequest) -> Result<CreateBabyCommand> {
        let date_of_birth: Date = request
            .date_of_birth
            .parse()
            .with_context(|| format!("Failed to parse date of birth {:?}", request.date_of_birth))?;

        Ok(CreateBabyCommand {
            first_name: request.first_name,
            last_name: request.last_name,
            id: request.id,
            day: date_of_birth.day(),
            month: date_of_birth.month(),
            year: date_of_birth.year(),
            birth_weight_grams: request.birth_weight_grams,
        })
    }

    /// Converts a domain Baby into a shared record DTO.
    pub fn to_record(baby: &Baby) -> BabyRecord {
        BabyRecord {
            first_name: baby.first_name().to_string(),
            last_name: baby.last_name().to_string(),
            id: baby.id().to_string(),
            date_of_birth: baby.date_of_birth().to_string(),
            birth_weight_grams: baby.birth_weight().to_grams(),
            current_weight_grams: baby.current_weight().to_grams(),
            birth_weight_display: baby.birth_weight().to_string(),
            current_weight_display: baby.current_weight().to_string(),
        }
    }

    pub fn to_weight_check_response(result: &WeightCheckResult) -> WeightCheckResponse {
        WeightCheckResponse {
            status: result.status,
            age_in_days: result.age_in_days,
            current_weight_grams: result.current_weight.to_grams(),
            minimum_healthy_grams: result.minimum_healthy_grams,
            message: BabyService::status_message(result.status).to_string(),
        }
    }

    pub fn to_comparison_response(comparison: &BabyComparison) -> BabyComparisonResponse {
        BabyComparisonResponse {
            same_baby: comparison.same_baby,
            twins: comparison.twins,
            heavier: comparison.heavier,
            older: comparison.older,
            days_apart: comparison.days_apart,
        }
    }
}
