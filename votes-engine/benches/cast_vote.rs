use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;
use votes_engine::VoteEngine;
use votes_repository::InMemoryVotesStore;
use votes_shared::types::{UserId, VoteTarget};

/// Creates an engine over a fresh in-memory store with one post and `voters` users.
fn make_engine(voters: usize) -> (VoteEngine, VoteTarget, Vec<UserId>) {
    let store = Arc::new(InMemoryVotesStore::new());
    let author = store.add_user();
    let post = store.add_post(author);
    let voters = (0..voters).map(|_| store.add_user()).collect();
    let engine = VoteEngine::new(store.clone(), store.clone(), store);
    (engine, post, voters)
}

/// Benchmark a first vote on a fresh target
fn first_vote(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("cast_first_vote", |b| {
        b.to_async(&rt).iter_batched(
            || make_engine(1),
            |(engine, post, voters)| async move {
                engine.cast_vote(black_box(voters[0]), post, "upvote").await.unwrap()
            },
            BatchSize::SmallInput,
        )
    });
}

/// Benchmark a repeated vote, the idempotent no-op path
fn repeated_vote(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let (engine, post, voters) = make_engine(1);
    rt.block_on(engine.cast_vote(voters[0], post, "upvote")).unwrap();

    c.bench_function("cast_repeated_vote", |b| {
        b.to_async(&rt)
            .iter(|| engine.cast_vote(black_box(voters[0]), post, "upvote"))
    });
}

/// Benchmark 100 voters flipping their votes on one post
fn vote_changes(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("cast_100_vote_changes", |b| {
        b.to_async(&rt).iter_batched(
            || make_engine(100),
            |(engine, post, voters)| async move {
                for voter in &voters {
                    engine.cast_vote(*voter, post, "upvote").await.unwrap();
                    engine.cast_vote(*voter, post, "downvote").await.unwrap();
                }
                engine.get_tally(post).await.unwrap()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, first_vote, repeated_vote, vote_changes);
criterion_main!(benches);
