use std::sync::Arc;

use footprint_core::{compute, RawInput};
use footprint_repository::seed::{seed_demo, DEMO_OWNER};
use footprint_repository::{
    FootprintRepository, GoalRepository, InMemoryRepository, RepositoryError,
};

fn household(people: i64) -> RawInput {
    RawInput {
        waste_people: Some(people),
        ..RawInput::default()
    }
}

#[tokio::test]
async fn append_assigns_identity_and_lists_per_owner() {
    let repo = InMemoryRepository::new();

    let first = repo.append("alice", compute(household(1))).await.unwrap();
    let second = repo.append("alice", compute(household(2))).await.unwrap();
    repo.append("bob", compute(household(3))).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.owner_id, "alice");
    assert!(first.created_at <= second.created_at);

    let alice = repo.list("alice").await.unwrap();
    let totals: Vec<f64> = alice.iter().map(|r| r.total()).collect();
    assert_eq!(totals, vec![66.88, 133.76]);

    assert_eq!(repo.list("bob").await.unwrap().len(), 1);
    assert!(repo.list("carol").await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_owner_is_rejected() {
    let repo = InMemoryRepository::new();
    let err = repo
        .append("  ", compute(RawInput::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidOwner));
    assert!(matches!(
        repo.list("").await.unwrap_err(),
        RepositoryError::InvalidOwner
    ));
}

#[tokio::test]
async fn setting_a_goal_replaces_the_previous_one() {
    let repo = InMemoryRepository::new();
    assert!(repo.goal("alice").await.unwrap().is_none());

    let first = repo.set_goal("alice", 10.0).await.unwrap();
    let second = repo.set_goal("alice", 25.0).await.unwrap();
    assert_ne!(first.id, second.id);

    let current = repo.goal("alice").await.unwrap().expect("goal");
    assert_eq!(current.reduction_percent, 25.0);
    assert_eq!(current.id, second.id);
}

#[tokio::test]
async fn out_of_range_goal_is_rejected_and_previous_kept() {
    let repo = InMemoryRepository::new();
    repo.set_goal("alice", 20.0).await.unwrap();

    let err = repo.set_goal("alice", 0.0).await.unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidGoal(_)));
    assert_eq!(
        repo.goal("alice").await.unwrap().map(|g| g.reduction_percent),
        Some(20.0)
    );
}

#[tokio::test]
async fn demo_seed_provides_history_and_goal() {
    let repo = InMemoryRepository::new();
    seed_demo(&repo).await.unwrap();

    let history = repo.list(DEMO_OWNER).await.unwrap();
    let totals: Vec<f64> = history.iter().map(|r| r.total()).collect();
    assert_eq!(totals, vec![1050.75, 980.5, 950.0]);
    assert!(history.windows(2).all(|w| w[0].created_at < w[1].created_at));

    let goal = repo.goal(DEMO_OWNER).await.unwrap().expect("seeded goal");
    assert_eq!(goal.reduction_percent, 15.0);
}

#[tokio::test]
async fn concurrent_appends_are_all_kept() {
    let repo = Arc::new(InMemoryRepository::new());

    let mut handles = Vec::new();
    for people in 1..=20 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.append("shared", compute(household(people))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.list("shared").await.unwrap().len(), 20);
}
