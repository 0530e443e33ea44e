mod common;

use canteen_backend::db::{RepositoryError, ReviewOperations};

#[actix_rt::test]
async fn reviews_are_listed_newest_first() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let review_ops = ReviewOperations::new(pool);

    review_ops
        .create_review(fixtures.student_id, 4, "Thali was fresh")
        .expect("first review");
    review_ops
        .create_review(fixtures.student_id, 2, "Lassi too sweet")
        .expect("second review");

    let listed = review_ops.list_visible().expect("list reviews");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].comment, "Lassi too sweet");
    assert_eq!(listed[1].comment, "Thali was fresh");
}

#[actix_rt::test]
async fn out_of_range_ratings_are_rejected() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let review_ops = ReviewOperations::new(pool);

    for rating in [0, 6, -1] {
        let err = review_ops
            .create_review(fixtures.student_id, rating, "should not land")
            .expect_err("invalid rating");
        assert!(matches!(err, RepositoryError::ValidationError(_)));
    }
    assert!(review_ops.list_visible().expect("list").is_empty());
}

#[actix_rt::test]
async fn toggling_visibility_hides_and_restores_a_review() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let review_ops = ReviewOperations::new(pool);

    let review = review_ops
        .create_review(fixtures.student_id, 1, "Cold food")
        .expect("create review");
    assert!(review.visible);

    let hidden = review_ops
        .toggle_visibility(review.review_id)
        .expect("hide");
    assert!(!hidden.visible);

    // Students no longer see it; admins still do.
    assert!(review_ops.list_visible().expect("visible").is_empty());
    assert_eq!(review_ops.list_all().expect("all").len(), 1);

    let restored = review_ops
        .toggle_visibility(review.review_id)
        .expect("restore");
    assert!(restored.visible);
}

#[actix_rt::test]
async fn toggling_a_missing_review_is_not_found() {
    let pool = common::setup_pool();
    let review_ops = ReviewOperations::new(pool);

    let err = review_ops
        .toggle_visibility(123_456)
        .expect_err("missing review");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}
