//! SubmitIntake - Command handler for the onboarding anamnesis.
//!
//! Saving the last step of the form:
//! 1. parses the raw form and scores the Fagerström answers
//! 2. upserts the participant profile and the clinical sections
//! 3. enrolls the participant in the program (week 1 current) if needed
//! 4. creates the stats row, taking the desired quit date, if needed

use std::sync::Arc;

use crate::domain::assessment::DependenceScore;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::domain::intake::RawIntakeForm;
use crate::domain::participant::UserProfile;
use crate::domain::program::ProgramEnrollment;
use crate::domain::tracking::UserStats;
use crate::ports::{IntakeRepository, ProfileRepository, ProgramRepository, StatsRepository};

#[derive(Debug, Clone)]
pub struct SubmitIntakeCommand {
    pub form: RawIntakeForm,
    /// Email of the account, used when the form leaves it blank.
    pub account_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitIntakeResult {
    pub score: DependenceScore,
    /// True when this submission created the profile.
    pub first_submission: bool,
}

pub struct SubmitIntakeHandler {
    profiles: Arc<dyn ProfileRepository>,
    intakes: Arc<dyn IntakeRepository>,
    program: Arc<dyn ProgramRepository>,
    stats: Arc<dyn StatsRepository>,
}

impl SubmitIntakeHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        intakes: Arc<dyn IntakeRepository>,
        program: Arc<dyn ProgramRepository>,
        stats: Arc<dyn StatsRepository>,
    ) -> Self {
        Self {
            profiles,
            intakes,
            program,
            stats,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitIntakeCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitIntakeResult, DomainError> {
        let user_id = metadata.user_id.clone();
        let now = Timestamp::now();

        let submission = cmd.form.parse(cmd.account_email.as_deref())?;
        let score = submission.clinical.fagerstrom.score;

        let existing = self.profiles.find_by_user(&user_id).await?;
        let first_submission = existing.is_none();
        let profile = match existing {
            Some(mut profile) => {
                profile.update(submission.identification, now);
                profile
            }
            None => UserProfile::new(user_id.clone(), submission.identification, now),
        };
        self.profiles.upsert(&profile).await?;
        self.intakes.save(&user_id, &submission.clinical).await?;

        if self.program.find_enrollment(&user_id).await?.is_none() {
            self.program
                .save_enrollment(&ProgramEnrollment::start(user_id.clone()))
                .await?;
        }

        let quit_date = submission.clinical.motivation.desired_quit_date;
        match self.stats.find_by_user(&user_id).await? {
            None => {
                self.stats
                    .save(&UserStats::new(user_id.clone(), quit_date, now))
                    .await?;
            }
            Some(mut stats) if stats.quit_date.is_none() && quit_date.is_some() => {
                stats.quit_date = quit_date;
                stats.updated_at = now;
                self.stats.save(&stats).await?;
            }
            Some(_) => {}
        }

        tracing::info!(
            user_id = %user_id,
            correlation_id = %metadata.correlation_id(),
            points = score.points(),
            level = score.level().code(),
            first_submission,
            "intake submitted"
        );

        Ok(SubmitIntakeResult {
            score,
            first_submission,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryIntakeRepository, InMemoryProfileRepository, InMemoryProgramRepository,
        InMemoryStatsRepository,
    };
    use crate::domain::assessment::{DependenceLevel, RawAnswer};
    use crate::domain::foundation::{ErrorCode, UserId};
    use crate::domain::program::WeekNumber;
    use chrono::NaiveDate;

    struct Fixture {
        handler: SubmitIntakeHandler,
        profiles: Arc<InMemoryProfileRepository>,
        intakes: Arc<InMemoryIntakeRepository>,
        program: Arc<InMemoryProgramRepository>,
        stats: Arc<InMemoryStatsRepository>,
    }

    fn fixture() -> Fixture {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let intakes = Arc::new(InMemoryIntakeRepository::new());
        let program = Arc::new(InMemoryProgramRepository::new(vec![]));
        let stats = Arc::new(InMemoryStatsRepository::new());
        Fixture {
            handler: SubmitIntakeHandler::new(
                profiles.clone(),
                intakes.clone(),
                program.clone(),
                stats.clone(),
            ),
            profiles,
            intakes,
            program,
            stats,
        }
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(user()).with_correlation_id("test")
    }

    fn form() -> RawIntakeForm {
        let mut form = RawIntakeForm::default();
        form.identification.full_name = "Carlos Alberto".into();
        form.motivation.desired_quit_date = "10/06/2025".into();
        form.fagerstrom.minutes_to_first_use = Some(RawAnswer::Text("≤ 5 min".into()));
        form.fagerstrom.cigarettes_per_day = Some(RawAnswer::Text("21–30".into()));
        form.fagerstrom.smokes_when_ill = Some(RawAnswer::Flag(true));
        form
    }

    #[tokio::test]
    async fn first_submission_creates_everything() {
        let f = fixture();
        let result = f
            .handler
            .handle(
                SubmitIntakeCommand {
                    form: form(),
                    account_email: Some("carlos@example.com".into()),
                },
                metadata(),
            )
            .await
            .unwrap();

        assert_eq!(result.score.points(), 6);
        assert_eq!(result.score.level(), DependenceLevel::Moderate);
        assert!(result.first_submission);

        let profile = f.profiles.find_by_user(&user()).await.unwrap().unwrap();
        assert_eq!(profile.first_name(), "Carlos");
        assert_eq!(
            profile.identification.email.as_deref(),
            Some("carlos@example.com")
        );
        assert!(f.intakes.find_by_user(&user()).await.unwrap().is_some());

        let enrollment = f.program.find_enrollment(&user()).await.unwrap().unwrap();
        assert_eq!(enrollment.progress().current_week, WeekNumber::FIRST);

        let stats = f.stats.find_by_user(&user()).await.unwrap().unwrap();
        assert_eq!(stats.quit_date, NaiveDate::from_ymd_opt(2025, 6, 10));
    }

    #[tokio::test]
    async fn resubmission_keeps_progress() {
        let f = fixture();
        let cmd = SubmitIntakeCommand {
            form: form(),
            account_email: None,
        };
        f.handler.handle(cmd.clone(), metadata()).await.unwrap();

        let mut enrollment = f.program.find_enrollment(&user()).await.unwrap().unwrap();
        enrollment.complete(WeekNumber::FIRST, Timestamp::now()).unwrap();
        f.program.save_enrollment(&enrollment).await.unwrap();

        let second = f.handler.handle(cmd, metadata()).await.unwrap();
        assert!(!second.first_submission);
        let after = f.program.find_enrollment(&user()).await.unwrap().unwrap();
        assert_eq!(after.progress().completed_weeks, 1);
    }

    #[tokio::test]
    async fn invalid_date_is_a_validation_error() {
        let f = fixture();
        let mut bad = form();
        bad.identification.birth_date = "1990/31/12".into();

        let err = f
            .handler
            .handle(
                SubmitIntakeCommand {
                    form: bad,
                    account_email: None,
                },
                metadata(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(f.profiles.find_by_user(&user()).await.unwrap().is_none());
    }
}
