//! Builds service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rigcheck::{
    builds::{Build, BuildItem, BuildStatus, BuildUuid, DEFAULT_BUILD_NAME, UserUuid},
    catalog::Catalog,
    compatibility::check_addition,
    hydration::{HydratedBuild, hydrate},
    parts::PartUuid,
};
use rustc_hash::FxHashSet;
use tracing::{Span, debug, info, warn};

use crate::domain::{
    builds::{
        data::{NewBuild, NewBuildItem, UserBuilds},
        errors::BuildsServiceError,
        repository::BuildsRepository,
    },
    parts::{PartsService, PartsServiceError},
    payments::{PaymentConfirmation, PaymentVerifier},
};

/// Builds service that runs every addition through the compatibility gate before persisting it.
#[derive(Clone)]
pub struct GatedBuildsService {
    builds: Arc<dyn BuildsRepository>,
    parts: Arc<dyn PartsService>,
    payments: Arc<dyn PaymentVerifier>,
}

impl GatedBuildsService {
    #[must_use]
    pub fn new(
        builds: Arc<dyn BuildsRepository>,
        parts: Arc<dyn PartsService>,
        payments: Arc<dyn PaymentVerifier>,
    ) -> Self {
        Self {
            builds,
            parts,
            payments,
        }
    }

    /// Resolve the distinct parts a build references.
    async fn catalog_for(&self, build: &Build) -> Result<Catalog, BuildsServiceError> {
        let mut seen = FxHashSet::default();

        let uuids: Vec<PartUuid> = build
            .iter()
            .map(|item| item.part)
            .filter(|part| seen.insert(*part))
            .collect();

        if uuids.is_empty() {
            return Ok(Catalog::new());
        }

        Ok(self.parts.get_parts(uuids).await?)
    }
}

#[async_trait]
impl BuildsService for GatedBuildsService {
    #[tracing::instrument(name = "builds.service.get_or_create_active", skip(self), err)]
    async fn get_or_create_active(
        &self,
        owner: UserUuid,
    ) -> Result<UserBuilds, BuildsServiceError> {
        let active = match self.builds.find_draft(owner).await? {
            Some(draft) => draft,
            None => {
                let created = self
                    .builds
                    .create_build(NewBuild {
                        uuid: BuildUuid::new(),
                        owner,
                        name: DEFAULT_BUILD_NAME.to_string(),
                    })
                    .await?;

                debug!(build_uuid = %created.uuid, "created draft build");

                created
            }
        };

        let builds = self.builds.list_builds(owner).await?;

        Ok(UserBuilds { active, builds })
    }

    #[tracing::instrument(name = "builds.service.create_build", skip(self, name), err)]
    async fn create_build(
        &self,
        owner: UserUuid,
        name: Option<String>,
    ) -> Result<Build, BuildsServiceError> {
        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_BUILD_NAME.to_string());

        let build = self
            .builds
            .create_build(NewBuild {
                uuid: BuildUuid::new(),
                owner,
                name,
            })
            .await?;

        Ok(build)
    }

    async fn list_builds(&self, owner: UserUuid) -> Result<Vec<Build>, BuildsServiceError> {
        Ok(self.builds.list_builds(owner).await?)
    }

    #[tracing::instrument(
        name = "builds.service.get_hydrated",
        skip(self),
        fields(
            item_count = tracing::field::Empty,
            report_status = tracing::field::Empty
        ),
        err
    )]
    async fn get_hydrated(
        &self,
        build: BuildUuid,
        owner: UserUuid,
    ) -> Result<HydratedBuild, BuildsServiceError> {
        let build = self.builds.get_build(build, owner).await?;
        let catalog = self.catalog_for(&build).await?;

        let hydrated = hydrate(build, &catalog);

        Span::current().record("item_count", hydrated.items.len());
        Span::current().record(
            "report_status",
            tracing::field::debug(&hydrated.compatibility.status),
        );

        Ok(hydrated)
    }

    #[tracing::instrument(
        name = "builds.service.add_part",
        skip(self, item),
        fields(
            part_uuid = %item.part,
            category = %item.category,
            quantity = item.quantity.get(),
            item_count = tracing::field::Empty
        ),
        err
    )]
    async fn add_part(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        item: NewBuildItem,
    ) -> Result<Build, BuildsServiceError> {
        let current = self.builds.get_build(build, owner).await?;

        let candidate = self
            .parts
            .get_part(item.part)
            .await
            .map_err(|error| match error {
                PartsServiceError::NotFound => BuildsServiceError::PartNotFound(item.part),
                other => BuildsServiceError::Parts(other),
            })?;

        let addition = BuildItem::for_part(&candidate, item.category, item.quantity)?;

        let catalog = self.catalog_for(&current).await?;

        if let Err(violation) = check_addition(&current, &candidate, item.quantity, &catalog) {
            info!(
                rule = violation.rule().as_str(),
                reason = %violation.conflict,
                "rejected part addition"
            );

            return Err(violation.into());
        }

        let updated = self.builds.append_item(build, owner, addition).await?;

        Span::current().record("item_count", updated.len());

        Ok(updated)
    }

    #[tracing::instrument(
        name = "builds.service.remove_part",
        skip(self),
        fields(item_count = tracing::field::Empty),
        err
    )]
    async fn remove_part(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        part: PartUuid,
    ) -> Result<Build, BuildsServiceError> {
        let updated = self.builds.remove_part(build, owner, part).await?;

        Span::current().record("item_count", updated.len());

        Ok(updated)
    }

    #[tracing::instrument(name = "builds.service.mark_paid", skip(self, confirmation), err)]
    async fn mark_paid(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        confirmation: PaymentConfirmation,
    ) -> Result<Build, BuildsServiceError> {
        if let Err(error) = self.payments.verify(&confirmation).await {
            warn!(order_id = %confirmation.order_id, %error, "payment confirmation refused");

            return Err(error.into());
        }

        let paid = self
            .builds
            .set_status(build, owner, BuildStatus::Paid)
            .await?;

        info!(order_id = %confirmation.order_id, "build paid");

        Ok(paid)
    }
}

#[automock]
#[async_trait]
pub trait BuildsService: Send + Sync {
    /// The owner's draft build, created on first use, alongside all of their builds.
    async fn get_or_create_active(
        &self,
        owner: UserUuid,
    ) -> Result<UserBuilds, BuildsServiceError>;

    /// Create an empty draft. A missing or blank name falls back to the default.
    async fn create_build(
        &self,
        owner: UserUuid,
        name: Option<String>,
    ) -> Result<Build, BuildsServiceError>;

    /// Every build the owner has, oldest first.
    async fn list_builds(&self, owner: UserUuid) -> Result<Vec<Build>, BuildsServiceError>;

    /// Resolve a build's parts, totals and compatibility. Never mutates.
    async fn get_hydrated(
        &self,
        build: BuildUuid,
        owner: UserUuid,
    ) -> Result<HydratedBuild, BuildsServiceError>;

    /// Add a part after it passes the compatibility gate.
    async fn add_part(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        item: NewBuildItem,
    ) -> Result<Build, BuildsServiceError>;

    /// Remove every item referencing a part. Removing an absent part is not an error.
    async fn remove_part(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        part: PartUuid,
    ) -> Result<Build, BuildsServiceError>;

    /// Mark a build paid once the payment confirmation verifies.
    async fn mark_paid(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        confirmation: PaymentConfirmation,
    ) -> Result<Build, BuildsServiceError>;
}


#[cfg(all(test, feature = "docker-tests"))]
mod pg_tests {
    use std::num::NonZeroU32;

    use rigcheck::{
        compatibility::Rule,
        parts::{CpuSpec, MotherboardSpec, Part, PartSpec},
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{domain::payments::PaymentError, test::TestContext};

    use super::*;

    fn cpu(name: &str, socket: &str) -> Part {
        Part::new(
            name,
            Decimal::from(18_999),
            PartSpec::Cpu(CpuSpec {
                socket: Some(socket.to_string()),
                cores: Some(6),
                draw_watts: Some(65),
            }),
        )
    }

    fn add(part: &Part) -> NewBuildItem {
        NewBuildItem {
            part: part.uuid,
            category: part.category(),
            quantity: NonZeroU32::MIN,
        }
    }

    #[tokio::test]
    async fn gated_additions_persist_only_compatible_parts() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = UserUuid::new();

        let board = Part::new(
            "B650 Tomahawk",
            Decimal::from(21_999),
            PartSpec::Motherboard(MotherboardSpec {
                socket: Some("AM5".to_string()),
                memory_type: Some("DDR5".to_string()),
                form_factor: Some("ATX".to_string()),
                max_memory_speed_mhz: None,
            }),
        );
        let am4 = cpu("Ryzen 5 5600", "AM4");
        let am5 = cpu("Ryzen 5 7600", "AM5");

        for part in [&board, &am4, &am5] {
            ctx.parts.upsert_part(part.clone()).await?;
        }

        let active = ctx.builds.get_or_create_active(owner).await?.active;

        ctx.builds.add_part(active.uuid, owner, add(&board)).await?;

        let refused = ctx.builds.add_part(active.uuid, owner, add(&am4)).await;

        assert!(
            matches!(
                &refused,
                Err(BuildsServiceError::Incompatible(violation)) if violation.rule() == Rule::Socket
            ),
            "expected a socket violation, got {refused:?}"
        );

        ctx.builds.add_part(active.uuid, owner, add(&am5)).await?;

        let hydrated = ctx.builds.get_hydrated(active.uuid, owner).await?;

        assert!(hydrated.compatibility.is_success());
        assert_eq!(hydrated.totals.price, Decimal::from(40_998));

        let removed = ctx.builds.remove_part(active.uuid, owner, am5.uuid).await?;

        assert_eq!(removed.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn get_or_create_active_is_stable() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = UserUuid::new();

        let first = ctx.builds.get_or_create_active(owner).await?;
        let second = ctx.builds.get_or_create_active(owner).await?;

        assert_eq!(first.active.uuid, second.active.uuid);
        assert_eq!(second.builds.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn unverified_payment_leaves_build_in_draft() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = UserUuid::new();
        let build = ctx.builds.create_build(owner, None).await?;

        let result = ctx
            .builds
            .mark_paid(
                build.uuid,
                owner,
                PaymentConfirmation {
                    order_id: "order_1".to_string(),
                    payment_id: "pay_1".to_string(),
                    signature: "forged".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(BuildsServiceError::Payment(PaymentError::Rejected))),
            "expected a rejected payment, got {result:?}"
        );

        let stored = ctx.builds.list_builds(owner).await?;

        assert_eq!(stored.first().map(|build| build.status), Some(BuildStatus::Draft));

        Ok(())
    }
}
