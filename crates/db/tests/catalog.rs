//! Integration tests for the catalog repositories: categories,
//! destinations, packages, package child items, itinerary, and reviews.

use sqlx::PgPool;

use geleza_db::models::category::{CreateCategory, UpdateCategory};
use geleza_db::models::destination::CreateDestination;
use geleza_db::models::package::{CreateItineraryDay, CreatePackage, UpdatePackage};
use geleza_db::models::package_item::{CreatePackageItem, PackageItemKind, UpdatePackageItem};
use geleza_db::models::review::CreateReview;
use geleza_db::repositories::{
    CategoryRepo, DestinationRepo, ItineraryRepo, PackageItemRepo, PackageRepo, ReviewRepo,
};

async fn seed_catalog(pool: &PgPool) -> (i64, i64, i64) {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Safari".into(),
            slug: "safari".into(),
            description: Some("Game drives and wildlife".into()),
            icon: Some("binoculars".into()),
        },
    )
    .await
    .unwrap();

    let destination = DestinationRepo::create(
        pool,
        &CreateDestination {
            slug: "kruger".into(),
            name: "Kruger National Park".into(),
            country: Some("South Africa".into()),
            region: Some("Mpumalanga".into()),
            image: None,
            description: None,
            starting_price: Some("650.00".into()),
            category_id: category.id,
            rating: Some("4.80".into()),
            best_time: Some("May to September".into()),
        },
    )
    .await
    .unwrap();

    let package = PackageRepo::create(
        pool,
        &CreatePackage {
            slug: "kruger-big-five".into(),
            title: "Kruger Big Five Safari".into(),
            destination_id: destination.id,
            category_id: category.id,
            duration: Some("5 days".into()),
            price: "2450.00".into(),
            original_price: Some("2800.00".into()),
            rating: Some("4.7".into()),
            review_count: None,
            image: None,
            featured: Some(true),
            description: Some("Five days tracking the big five".into()),
        },
    )
    .await
    .unwrap();

    (category.id, destination.id, package.id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_crud_round_trip(pool: PgPool) {
    let created = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Beach".into(),
            slug: "beach".into(),
            description: None,
            icon: None,
        },
    )
    .await
    .unwrap();

    let fetched = CategoryRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched.slug, "beach");

    let updated = CategoryRepo::update(
        &pool,
        created.id,
        &UpdateCategory {
            name: None,
            slug: None,
            description: Some("Sun and sand".into()),
            icon: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Beach");
    assert_eq!(updated.description.as_deref(), Some("Sun and sand"));

    assert!(CategoryRepo::delete(&pool, created.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_category_slug_violates_unique_constraint(pool: PgPool) {
    let input = CreateCategory {
        name: "Beach".into(),
        slug: "beach".into(),
        description: None,
        icon: None,
    };
    CategoryRepo::create(&pool, &input).await.unwrap();

    let mut second = input.clone();
    second.name = "Coastal".into();
    let err = CategoryRepo::create(&pool, &second).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn destination_reads_carry_category_join(pool: PgPool) {
    let (_, destination_id, _) = seed_catalog(&pool).await;

    let destination = DestinationRepo::find_by_id(&pool, destination_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(destination.category.as_deref(), Some("Safari"));
    assert_eq!(destination.category_slug.as_deref(), Some("safari"));
    // Decimal fields read back as strings.
    assert_eq!(destination.starting_price.as_deref(), Some("650.00"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn destination_with_missing_category_is_rejected(pool: PgPool) {
    let err = DestinationRepo::create(
        &pool,
        &CreateDestination {
            slug: "nowhere".into(),
            name: "Nowhere".into(),
            country: None,
            region: None,
            image: None,
            description: None,
            starting_price: None,
            category_id: 9999,
            rating: None,
            best_time: None,
        },
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            // Foreign key violation.
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected FK violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn package_joins_and_featured_listing(pool: PgPool) {
    let (_, _, package_id) = seed_catalog(&pool).await;

    let package = PackageRepo::find_by_id(&pool, package_id).await.unwrap().unwrap();
    assert_eq!(package.destination.as_deref(), Some("Kruger National Park"));
    assert_eq!(package.category.as_deref(), Some("Safari"));
    assert_eq!(package.price, "2450.00");
    assert_eq!(package.original_price.as_deref(), Some("2800.00"));

    let by_slug = PackageRepo::find_by_slug(&pool, "kruger-big-five")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_slug.id, package_id);

    let featured = PackageRepo::list_featured(&pool).await.unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, package_id);

    let filtered = PackageRepo::list(&pool, Some("kruger")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert!(PackageRepo::list(&pool, Some("unknown-slug")).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn package_partial_update(pool: PgPool) {
    let (_, _, package_id) = seed_catalog(&pool).await;

    let patch = UpdatePackage {
        slug: None,
        title: None,
        destination_id: None,
        category_id: None,
        duration: None,
        price: Some("1999.00".into()),
        original_price: None,
        rating: None,
        review_count: None,
        image: None,
        featured: Some(false),
        description: None,
    };
    let updated = PackageRepo::update(&pool, package_id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.price, "1999.00");
    assert_eq!(updated.featured, Some(false));
    assert_eq!(updated.title, "Kruger Big Five Safari");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generic_item_repo_covers_all_four_kinds(pool: PgPool) {
    let (_, _, package_id) = seed_catalog(&pool).await;

    let kinds = [
        (PackageItemKind::Gallery, "https://img.example.com/1.jpg"),
        (PackageItemKind::Inclusion, "All park fees"),
        (PackageItemKind::Exclusion, "International flights"),
        (PackageItemKind::Highlight, "Sunset game drive"),
    ];

    for (kind, value) in kinds {
        let created = PackageItemRepo::create(
            &pool,
            kind,
            &CreatePackageItem {
                package_id,
                value: value.into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(created.value, value);

        let listed = PackageItemRepo::list_by_package(&pool, kind, package_id).await.unwrap();
        assert_eq!(listed.len(), 1);

        let updated = PackageItemRepo::update(
            &pool,
            kind,
            created.id,
            &UpdatePackageItem {
                value: Some(format!("{value} (updated)")),
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert!(updated.value.ends_with("(updated)"));

        assert!(PackageItemRepo::delete(&pool, kind, created.id).await.unwrap());
        assert!(PackageItemRepo::find_by_id(&pool, kind, created.id)
            .await
            .unwrap()
            .is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_by_slug_aggregates_children_with_ordered_itinerary(pool: PgPool) {
    let (_, _, package_id) = seed_catalog(&pool).await;

    // Insert itinerary days out of order.
    for day in [3, 1, 2] {
        ItineraryRepo::create(
            &pool,
            &CreateItineraryDay {
                package_id,
                day_number: day,
                title: Some(format!("Day {day}")),
                description: None,
            },
        )
        .await
        .unwrap();
    }

    PackageItemRepo::create(
        &pool,
        PackageItemKind::Highlight,
        &CreatePackageItem {
            package_id,
            value: "Sunset game drive".into(),
        },
    )
    .await
    .unwrap();

    ReviewRepo::create(
        &pool,
        &CreateReview {
            package_id,
            user_name: "Thandi M".into(),
            user_avatar: None,
            rating: 5,
            title: None,
            comment: Some("Unforgettable".into()),
            verified: Some(true),
        },
    )
    .await
    .unwrap();

    let detail = PackageRepo::detail_by_slug(&pool, "kruger-big-five")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.package.id, package_id);
    assert_eq!(detail.highlights.len(), 1);
    assert_eq!(detail.reviews.len(), 1);
    assert_eq!(detail.reviews[0].package_title.as_deref(), Some("Kruger Big Five Safari"));

    let days: Vec<i32> = detail.itinerary.iter().map(|d| d.day_number).collect();
    assert_eq!(days, vec![1, 2, 3]);

    assert!(PackageRepo::detail_by_slug(&pool, "no-such-slug").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_package_cascades_to_children(pool: PgPool) {
    let (_, _, package_id) = seed_catalog(&pool).await;

    PackageItemRepo::create(
        &pool,
        PackageItemKind::Inclusion,
        &CreatePackageItem {
            package_id,
            value: "All meals".into(),
        },
    )
    .await
    .unwrap();
    ItineraryRepo::create(
        &pool,
        &CreateItineraryDay {
            package_id,
            day_number: 1,
            title: None,
            description: None,
        },
    )
    .await
    .unwrap();

    assert!(PackageRepo::delete(&pool, package_id).await.unwrap());

    let inclusions =
        PackageItemRepo::list_by_package(&pool, PackageItemKind::Inclusion, package_id)
            .await
            .unwrap();
    assert!(inclusions.is_empty());
    assert!(ItineraryRepo::list_by_package(&pool, package_id).await.unwrap().is_empty());
}
