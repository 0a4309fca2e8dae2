//! Concurrent posting tests.

mod common;

use common::{object, service, setup_chart, setup_db};
use futures::future::join_all;
use ledgerline_db::TransactionRepository;
use ledgerline_shared::types::OwnerId;
use serde_json::json;

const POSTS_PER_OWNER: usize = 10;

#[tokio::test]
async fn test_concurrent_postings_from_two_owners() {
    let db = setup_db().await;
    let alice = setup_chart(&db, OwnerId::from_db(1)).await;
    let bob = setup_chart(&db, OwnerId::from_db(2)).await;
    let service = service(&db);

    let mut handles = Vec::new();
    for chart in [&alice, &bob] {
        for i in 0..POSTS_PER_OWNER {
            let service = service.clone();
            let owner = chart.owner;
            let payload = object(json!({
                "txn_type": "credit_card_payment",
                "amount": format!("{}.25", i + 1),
                "card_principal_account_id": chart.card.get(),
                "bank_account_id": chart.bank.get()
            }));
            handles.push(tokio::spawn(async move {
                service
                    .create_transaction(owner, &payload)
                    .await
                    .map(|id| (owner, id))
            }));
        }
    }

    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked").expect("posting failed"))
        .collect();
    assert_eq!(results.len(), 2 * POSTS_PER_OWNER);

    let repo = TransactionRepository::new(db.clone());
    for (owner, id) in &results {
        assert_eq!(repo.count_entries(*id).await.unwrap(), 2);
        let stored = repo.get_transaction(*owner, *id).await.unwrap();
        assert_eq!(stored.transaction.owner_id, owner.get());
        assert!(stored.entries.iter().all(|e| e.owner_id == owner.get()));
    }

    let mut ids: Vec<i64> = results.iter().map(|(_, id)| id.get()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 2 * POSTS_PER_OWNER);
}
