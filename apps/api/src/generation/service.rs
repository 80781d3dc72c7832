//! Content Generation Service. Validates a profile and runs the narrative backend.
//!
//! Flow: validate required fields → simulated remote latency (non-blocking sleep) →
//!       narrate only the requested documents.
//!
//! Stateless: nothing is stored between calls. A caller that goes away simply drops
//! the future; there is nothing to clean up.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::errors::AppError;
use crate::generation::models::{GeneratedContent, GenerationScope};
use crate::generation::narrative::{NarrativeGenerator, TemplateNarrator};
use crate::profile::ApplicationProfile;

#[derive(Clone)]
pub struct ContentGenerationService {
    narrator: Arc<dyn NarrativeGenerator>,
    latency: Duration,
}

impl ContentGenerationService {
    pub fn new(narrator: Arc<dyn NarrativeGenerator>, latency: Duration) -> Self {
        Self { narrator, latency }
    }

    /// Service backed by the deterministic `TemplateNarrator`.
    pub fn with_templates(latency: Duration) -> Self {
        Self::new(Arc::new(TemplateNarrator), latency)
    }

    pub fn backend(&self) -> &'static str {
        self.narrator.backend()
    }

    pub async fn generate(
        &self,
        profile: &ApplicationProfile,
        scope: GenerationScope,
    ) -> Result<GeneratedContent, AppError> {
        validate_request(profile, scope)?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let resume = if scope.includes_resume() {
            Some(self.narrator.resume(profile).await?)
        } else {
            None
        };
        let cover_letter = if scope.includes_cover_letter() {
            Some(self.narrator.cover_letter(profile).await?)
        } else {
            None
        };

        info!(
            "Generated {:?} content for '{}' via {} backend",
            scope,
            profile.full_name(),
            self.narrator.backend()
        );

        Ok(GeneratedContent {
            resume,
            cover_letter,
        })
    }
}

/// Rejects requests missing the fields a scope needs, before any work happens.
pub fn validate_request(
    profile: &ApplicationProfile,
    scope: GenerationScope,
) -> Result<(), AppError> {
    if scope.requires_job_title() {
        if !profile.has_full_name() || !profile.has_job_title() {
            return Err(AppError::Validation(
                "Missing required fields: personal.fullName and jobRole.title are required"
                    .to_string(),
            ));
        }
    } else if !profile.has_full_name() {
        return Err(AppError::Validation(
            "Missing required field: personal.fullName is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::generation::models::{CoverLetterContent, ResumeContent};

    fn jane() -> ApplicationProfile {
        let mut p = ApplicationProfile::default();
        p.personal.full_name = "Jane Doe".into();
        p.job_role.title = "Backend Engineer".into();
        p.skills.add_technical("Go");
        p
    }

    /// Counts calls so tests can prove validation short-circuits.
    #[derive(Default)]
    struct CountingNarrator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl NarrativeGenerator for CountingNarrator {
        async fn resume(&self, _: &ApplicationProfile) -> Result<ResumeContent, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ResumeContent::default())
        }

        async fn cover_letter(
            &self,
            _: &ApplicationProfile,
        ) -> Result<CoverLetterContent, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CoverLetterContent::default())
        }

        fn backend(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_generate_both() {
        let service = ContentGenerationService::with_templates(Duration::ZERO);
        let content = service
            .generate(&jane(), GenerationScope::Both)
            .await
            .unwrap();
        assert!(content.resume.is_some());
        assert!(content
            .cover_letter
            .unwrap()
            .content
            .contains("Backend Engineer"));
    }

    #[tokio::test]
    async fn test_scope_limits_output() {
        let service = ContentGenerationService::with_templates(Duration::ZERO);
        let resume = service
            .generate(&jane(), GenerationScope::Resume)
            .await
            .unwrap();
        assert!(resume.cover_letter.is_none());

        let letter = service
            .generate(&jane(), GenerationScope::CoverLetter)
            .await
            .unwrap();
        assert!(letter.resume.is_none());
    }

    #[tokio::test]
    async fn test_missing_full_name_fails_before_generation() {
        let narrator = Arc::new(CountingNarrator::default());
        let service = ContentGenerationService::new(narrator.clone(), Duration::ZERO);

        let mut profile = jane();
        profile.personal.full_name = "   ".into();

        for scope in [
            GenerationScope::Both,
            GenerationScope::Resume,
            GenerationScope::CoverLetter,
        ] {
            let err = service.generate(&profile, scope).await.unwrap_err();
            match err {
                AppError::Validation(msg) => assert!(msg.contains("fullName")),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
        assert_eq!(narrator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resume_scope_does_not_need_job_title() {
        let service = ContentGenerationService::with_templates(Duration::ZERO);
        let mut profile = jane();
        profile.job_role.title.clear();

        assert!(service
            .generate(&profile, GenerationScope::Resume)
            .await
            .is_ok());
        assert!(matches!(
            service.generate(&profile, GenerationScope::CoverLetter).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_generation_is_idempotent() {
        let service = ContentGenerationService::with_templates(Duration::ZERO);
        let first = service
            .generate(&jane(), GenerationScope::Both)
            .await
            .unwrap();
        let second = service
            .generate(&jane(), GenerationScope::Both)
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_a_non_blocking_sleep() {
        let service = ContentGenerationService::with_templates(Duration::from_secs(2));
        let start = tokio::time::Instant::now();

        let other = tokio::spawn(async { 42 });
        let content = service
            .generate(&jane(), GenerationScope::Resume)
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(other.await.unwrap(), 42);
        assert!(content.resume.is_some());
    }
}
