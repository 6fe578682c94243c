//! PostgreSQL adapter tests
//!
//! These run against a throwaway PostgreSQL container:
//!
//! ```bash
//! cargo test -p test_utils --test postgres_adapters_tests -- --ignored
//! ```

use std::sync::Arc;

use chrono::Duration;
use core_kernel::{KlantId, OpstalverzekeringId};
use domain_klant::{KlantPort, KlantPortExt};
use domain_opstal::{OpstalverzekeringPort, VerzekeringQuery};
use infra_db::{PostgresKlantAdapter, PostgresOpstalverzekeringAdapter};
use test_utils::{
    create_isolated_test_database, KlantBuilder, OpstalverzekeringBuilder, TemporalFixtures,
};

mod klant_adapter {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_insert_get_and_close() {
        let db = create_isolated_test_database().await.unwrap();
        let adapter = PostgresKlantAdapter::new(db.pool().clone());

        let klant = KlantBuilder::new().with_naam("Jan", "Dijk").with_tussenvoegsel("van").build();
        let stored = adapter.insert_klant(&klant).await.unwrap();
        assert_eq!(stored.id, klant.id);

        let fetched = adapter.get_klant(klant.id).await.unwrap();
        assert_eq!(fetched.volledige_naam(), "Jan van Dijk");
        assert!(fetched.is_active());

        let end = TemporalFixtures::now() + Duration::days(1);
        let closed = adapter.close_klant(klant.id, end).await.unwrap();
        assert_eq!(closed.eind_datum(), Some(end));

        let again = adapter.close_klant(klant.id, end).await;
        assert!(again.unwrap_err().is_conflict());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_unknown_klant() {
        let db = create_isolated_test_database().await.unwrap();
        let adapter = PostgresKlantAdapter::new(db.pool().clone());

        let id = KlantId::new_v7();
        assert!(adapter.get_klant(id).await.unwrap_err().is_not_found());
        assert!(adapter.find_klant(id).await.unwrap().is_none());
        assert!(adapter
            .close_klant(id, TemporalFixtures::now())
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_concurrent_close_has_one_winner() {
        let db = create_isolated_test_database().await.unwrap();
        let adapter = Arc::new(PostgresKlantAdapter::new(db.pool().clone()));
        let klant = adapter.insert_klant(&KlantBuilder::new().build()).await.unwrap();

        let (first, second) = tokio::join!(
            adapter.close_klant(klant.id, TemporalFixtures::now()),
            adapter.close_klant(klant.id, TemporalFixtures::end_of_year()),
        );

        assert_eq!([first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(), 1);
    }
}

mod opstal_adapter {
    use super::*;

    async fn setup() -> (
        test_utils::TestDatabase,
        PostgresKlantAdapter,
        PostgresOpstalverzekeringAdapter,
    ) {
        let db = create_isolated_test_database().await.unwrap();
        let klanten = PostgresKlantAdapter::new(db.pool().clone());
        let verzekeringen = PostgresOpstalverzekeringAdapter::new(db.pool().clone());
        (db, klanten, verzekeringen)
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_insert_and_find_active() {
        let (_db, klanten, verzekeringen) = setup().await;
        let klant = klanten.insert_klant(&KlantBuilder::new().build()).await.unwrap();

        let all_risk = OpstalverzekeringBuilder::new(klant.id)
            .with_polis_nummer(5001)
            .with_type_dekking("All-risk")
            .build();
        let shouted = OpstalverzekeringBuilder::new(klant.id)
            .with_polis_nummer(5002)
            .with_type_dekking("All-Risk")
            .build();
        let ended = OpstalverzekeringBuilder::new(klant.id)
            .with_polis_nummer(5003)
            .with_type_dekking("All-risk")
            .beeindigd_op(TemporalFixtures::now())
            .build();
        for v in [&all_risk, &shouted, &ended] {
            verzekeringen.insert_verzekering(v).await.unwrap();
        }

        let found = verzekeringen
            .find_verzekeringen(VerzekeringQuery::actief_by_type_dekking("All-risk"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, all_risk.id);
        assert_eq!(found[0].premie, all_risk.premie);

        let by_klant = verzekeringen
            .find_verzekeringen(VerzekeringQuery::actief_by_klant(klant.id))
            .await
            .unwrap();
        assert_eq!(by_klant.len(), 2);

        let by_number = verzekeringen
            .find_verzekeringen(VerzekeringQuery::actief_by_polis_nummer(5003))
            .await
            .unwrap();
        assert!(by_number.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_duplicate_polis_nummer_is_conflict() {
        let (_db, klanten, verzekeringen) = setup().await;
        let klant = klanten.insert_klant(&KlantBuilder::new().build()).await.unwrap();

        let first = OpstalverzekeringBuilder::new(klant.id)
            .with_polis_nummer(1001)
            .beeindigd_op(TemporalFixtures::now())
            .build();
        verzekeringen.insert_verzekering(&first).await.unwrap();

        let second = OpstalverzekeringBuilder::new(klant.id).with_polis_nummer(1001).build();
        let err = verzekeringen.insert_verzekering(&second).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_close_is_conditional() {
        let (_db, klanten, verzekeringen) = setup().await;
        let klant = klanten.insert_klant(&KlantBuilder::new().build()).await.unwrap();
        let verzekering = verzekeringen
            .insert_verzekering(&OpstalverzekeringBuilder::new(klant.id).build())
            .await
            .unwrap();

        verzekeringen
            .close_verzekering(verzekering.id, TemporalFixtures::now())
            .await
            .unwrap();
        let again = verzekeringen
            .close_verzekering(verzekering.id, TemporalFixtures::now())
            .await;
        assert!(again.unwrap_err().is_conflict());

        let missing = verzekeringen
            .close_verzekering(OpstalverzekeringId::new_v7(), TemporalFixtures::now())
            .await;
        assert!(missing.unwrap_err().is_not_found());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_deleting_klant_cascades() {
        let (db, klanten, verzekeringen) = setup().await;
        let klant = klanten.insert_klant(&KlantBuilder::new().build()).await.unwrap();
        let verzekering = verzekeringen
            .insert_verzekering(&OpstalverzekeringBuilder::new(klant.id).build())
            .await
            .unwrap();

        sqlx::query("DELETE FROM klanten WHERE id = $1")
            .bind(*klant.id.as_uuid())
            .execute(db.pool())
            .await
            .unwrap();

        assert!(verzekeringen
            .get_verzekering(verzekering.id)
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_health_check() {
        use core_kernel::HealthCheckable;

        let (_db, klanten, verzekeringen) = setup().await;
        assert!(klanten.health_check().await.is_healthy());
        assert!(verzekeringen.health_check().await.is_healthy());
    }
}
