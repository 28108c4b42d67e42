//! Tests for the brand lifecycle rules.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::brands::{
    BrandService, LocalBrandRepository, NewCurrentBrand, NewLiveBrand, NewPipelineBrand,
    ReorderDirection,
};
use crate::errors::{Error, ValidationError};
use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};

fn service() -> BrandService {
    let store = Arc::new(LocalStore::new(
        Arc::new(MemoryLocalStore::new()),
        Arc::new(NullSyncNotifier),
    ));
    BrandService::new(Arc::new(LocalBrandRepository::new(store)), None)
}

fn pipeline_payload(name: &str) -> NewPipelineBrand {
    NewPipelineBrand {
        name: name.to_string(),
        description: String::new(),
        category: String::new(),
        planned_start_date: String::new(),
        source_idea: String::new(),
    }
}

#[tokio::test]
async fn pipeline_orders_are_assigned_incrementally() {
    let service = service();
    let first = service.add_pipeline(pipeline_payload("one")).await.unwrap();
    let second = service.add_pipeline(pipeline_payload("two")).await.unwrap();
    assert_eq!(first.sort_order, 1);
    assert_eq!(second.sort_order, 2);
}

#[tokio::test]
async fn promotion_is_rejected_while_a_current_brand_exists() {
    let service = service();
    service
        .save_current(NewCurrentBrand {
            name: "Zen".into(),
            category: String::new(),
            description: String::new(),
        })
        .await
        .unwrap();
    let entry = service.add_pipeline(pipeline_payload("Acme")).await.unwrap();

    let result = service.promote_pipeline(&entry.id).await;
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::CurrentBrandExists))
    ));

    // Neither collection changed.
    assert_eq!(service.current().await.unwrap().unwrap().name, "Zen");
    let pipeline = service.pipeline().await.unwrap();
    assert_eq!(pipeline.len(), 1);
    assert_eq!(pipeline[0].name, "Acme");
}

#[tokio::test]
async fn promotion_moves_the_entry_into_the_current_slot() {
    let service = service();
    let entry = service.add_pipeline(pipeline_payload("Acme")).await.unwrap();

    let current = service.promote_pipeline(&entry.id).await.unwrap();
    assert_eq!(current.name, "Acme");
    assert_eq!(current.phase, 1);
    assert!(service.pipeline().await.unwrap().is_empty());
}

#[tokio::test]
async fn reorder_up_at_the_top_is_a_no_op() {
    let service = service();
    let first = service.add_pipeline(pipeline_payload("p1")).await.unwrap();
    service.add_pipeline(pipeline_payload("p2")).await.unwrap();

    service
        .reorder_pipeline(&first.id, ReorderDirection::Up)
        .await
        .unwrap();

    let pipeline = service.pipeline().await.unwrap();
    assert_eq!(pipeline[0].name, "p1");
    assert_eq!(pipeline[0].sort_order, 1);
    assert_eq!(pipeline[1].sort_order, 2);
}

#[tokio::test]
async fn reorder_swaps_only_the_adjacent_pair() {
    let service = service();
    service.add_pipeline(pipeline_payload("p1")).await.unwrap();
    let second = service.add_pipeline(pipeline_payload("p2")).await.unwrap();
    service.add_pipeline(pipeline_payload("p3")).await.unwrap();

    service
        .reorder_pipeline(&second.id, ReorderDirection::Up)
        .await
        .unwrap();

    let names: Vec<_> = service
        .pipeline()
        .await
        .unwrap()
        .into_iter()
        .map(|brand| brand.name)
        .collect();
    assert_eq!(names, vec!["p2", "p1", "p3"]);
}

#[tokio::test]
async fn mark_automated_graduates_the_current_brand() {
    let service = service();
    service
        .save_current(NewCurrentBrand {
            name: "Zen".into(),
            category: String::new(),
            description: String::new(),
        })
        .await
        .unwrap();

    let live = service.mark_automated().await.unwrap().unwrap();
    assert_eq!(live.name, "Zen");
    assert_eq!(live.phase, Some(3));
    assert_eq!(live.source.as_deref(), Some("current_brand_transition"));

    assert!(service.current().await.unwrap().is_none());
    assert_eq!(service.live().await.unwrap().len(), 1);

    // Without a current brand the transition does nothing.
    assert!(service.mark_automated().await.unwrap().is_none());
}

#[tokio::test]
async fn zero_revenue_is_recorded_not_absent() {
    let service = service();
    let brand = service
        .add_live(NewLiveBrand {
            name: "Zen".into(),
            start_date: None,
        })
        .await
        .unwrap();

    service
        .log_revenue(&brand.id, Decimal::ZERO, Some("2026-04-02".into()))
        .await
        .unwrap();

    let live = service.live().await.unwrap();
    let log = &live[0].revenue_log;
    assert_eq!(log.get("2026-04-02"), Some(&Decimal::ZERO));
    assert_eq!(log.get("2026-04-03"), None);
}

#[tokio::test]
async fn revenue_writes_are_last_write_wins_per_day() {
    let service = service();
    let brand = service
        .add_live(NewLiveBrand {
            name: "Zen".into(),
            start_date: None,
        })
        .await
        .unwrap();

    service
        .log_revenue(&brand.id, Decimal::from(10), Some("2026-04-02".into()))
        .await
        .unwrap();
    service
        .log_revenue(&brand.id, Decimal::from(25), Some("2026-04-02".into()))
        .await
        .unwrap();

    let live = service.live().await.unwrap();
    assert_eq!(live[0].revenue_log.get("2026-04-02"), Some(&Decimal::from(25)));
    assert_eq!(live[0].revenue_log.len(), 1);
}

#[tokio::test]
async fn closing_a_live_brand_archives_its_totals() {
    let service = service();
    let brand = service
        .add_live(NewLiveBrand {
            name: "Zen".into(),
            start_date: None,
        })
        .await
        .unwrap();
    service
        .log_revenue(&brand.id, Decimal::from(40), Some("2026-04-01".into()))
        .await
        .unwrap();
    service
        .log_revenue(&brand.id, Decimal::from(60), Some("2026-04-02".into()))
        .await
        .unwrap();

    let archived = service.close_live(&brand.id, None).await.unwrap();
    assert_eq!(archived.total_revenue, Decimal::from(100));
    assert_eq!(archived.reason, "didn't work out");
    assert!(service.live().await.unwrap().is_empty());
    assert_eq!(service.archive().await.unwrap().len(), 1);
}

#[tokio::test]
async fn daily_log_overwrites_same_day_and_skips_blank_text() {
    let service = service();
    service
        .save_current(NewCurrentBrand {
            name: "Zen".into(),
            category: String::new(),
            description: String::new(),
        })
        .await
        .unwrap();

    service
        .add_daily_log("first draft", Some("2026-04-02".into()))
        .await
        .unwrap();
    service
        .add_daily_log("  final  ", Some("2026-04-02".into()))
        .await
        .unwrap();
    service.add_daily_log("   ", Some("2026-04-03".into())).await.unwrap();

    let current = service.current().await.unwrap().unwrap();
    assert_eq!(current.daily_logs.len(), 1);
    assert_eq!(current.daily_logs["2026-04-02"].text, "final");
}
