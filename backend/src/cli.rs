use anyhow::Context;
use shared::{CreateBabyRequest, ReportFormat};

use crate::domain::commands::babies::AgeQuery;
use crate::domain::models::date::Date;

/// Check a newborn's weight against the first-year growth curve
#[derive(Debug, argh::FromArgs)]
pub struct CliOptions {
    /// first name
    #[argh(option)]
    pub first_name: String,

    /// last name
    #[argh(option)]
    pub last_name: String,

    /// nine character id
    #[argh(option)]
    pub id: String,

    /// date of birth, DD/MM/YYYY
    #[argh(option)]
    pub born: String,

    /// birth weight in grams
    #[argh(option)]
    pub birth_weight: i32,

    /// current weight in grams (defaults to the birth weight)
    #[argh(option)]
    pub current_weight: Option<i32>,

    /// grams to add to the current weight, negative to subtract
    #[argh(option)]
    pub gain: Option<i32>,

    /// age in days to evaluate the weight at
    #[argh(option)]
    pub age: Option<i32>,

    /// date to evaluate the weight on, DD/MM/YYYY (defaults to today)
    #[argh(option)]
    pub on: Option<String>,

    /// first name of a sibling to compare with
    #[argh(option)]
    pub sibling_first_name: Option<String>,

    /// last name of the sibling (defaults to the baby's last name)
    #[argh(option)]
    pub sibling_last_name: Option<String>,

    /// id of the sibling
    #[argh(option)]
    pub sibling_id: Option<String>,

    /// sibling's date of birth, DD/MM/YYYY
    #[argh(option)]
    pub sibling_born: Option<String>,

    /// sibling's birth weight in grams
    #[argh(option)]
    pub sibling_weight: Option<i32>,

    /// print the report as JSON
    #[argh(switch)]
    pub json: bool,

    /// logging level (0 = Info, 1 = Debug, 2 = Trace) [env NEWBORN_VERBOSE]
    #[argh(option, short = 'v')]
    pub verbose: Option<u8>,
}

impl CliOptions {
    pub fn parse() -> Result<Self, anyhow::Error> {
        let mut args: CliOptions = argh::from_env();

        if args.verbose.is_none() {
            if let Ok(verbose) = std::env::var("NEWBORN_VERBOSE") {
                args.verbose = verbose.parse().ok();
            }
        }

        if args.age.is_some() && args.on.is_some() {
            anyhow::bail!("--age and --on cannot be used together");
        }

        Ok(args)
    }

    pub fn format(&self) -> ReportFormat {
        ReportFormat::from_json_flag(self.json)
    }

    pub fn baby_request(&self) -> CreateBabyRequest {
        CreateBabyRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            id: self.id.clone(),
            date_of_birth: self.born.clone(),
            birth_weight_grams: self.birth_weight,
        }
    }

    /// Sibling request, None unless a sibling first name was given
    pub fn sibling_request(&self) -> Result<Option<CreateBabyRequest>, anyhow::Error> {
        let Some(first_name) = self.sibling_first_name.clone() else {
            return Ok(None);
        };

        let date_of_birth = self
            .sibling_born
            .clone()
            .context("--sibling-born is required with --sibling-first-name")?;

        Ok(Some(CreateBabyRequest {
            first_name,
            last_name: self
                .sibling_last_name
                .clone()
                .unwrap_or_else(|| self.last_name.clone()),
            id: self.sibling_id.clone().unwrap_or_default(),
            date_of_birth,
            birth_weight_grams: self.sibling_weight.unwrap_or(self.birth_weight),
        }))
    }

    pub fn age_query(&self) -> Result<AgeQuery, anyhow::Error> {
        if let Some(days) = self.age {
            return Ok(AgeQuery::Days(days));
        }

        match &self.on {
            Some(text) => {
                let date: Date = text
                    .parse()
                    .with_context(|| format!("Failed to parse --on date {:?}", text))?;
                Ok(AgeQuery::On(date))
            }
            None => Ok(AgeQuery::On(Date::today())),
        }
    }
}
