//! Integration tests for the catalog repositories and the seed routine.

use sqlx::PgPool;
use tourdesk_core::wizard::{FormField, FormRecord, TourWizard, WizardStatus};
use tourdesk_db::models::city::CreateCity;
use tourdesk_db::models::review::CreateReview;
use tourdesk_db::models::tour::{NewTour, TourFilter};
use tourdesk_db::repositories::{CityRepo, ReviewRepo, TourRepo, WizardSessionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_city(slug: &str) -> CreateCity {
    CreateCity {
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        country: "Egypt".to_string(),
        image_url: None,
    }
}

fn form(title: &str) -> FormRecord {
    FormRecord {
        title: title.to_string(),
        category: "Day tour".to_string(),
        duration: "4 hours".to_string(),
        description: "A test tour".to_string(),
        ..FormRecord::default()
    }
}

async fn create_tour(pool: &PgPool, city_id: Option<i64>, title: &str) -> i64 {
    let mut conn = pool.acquire().await.unwrap();
    let new_tour = NewTour {
        city_id,
        price_cents: Some(1_000),
    };
    let (tour, _) = TourRepo::create_from_form(&mut conn, &new_tour, "en", &form(title))
        .await
        .unwrap();
    tour.id
}

// ---------------------------------------------------------------------------
// Tours
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_from_form_stores_translation(pool: PgPool) {
    let tour_id = create_tour(&pool, None, "Pyramids Tour").await;

    let translation = TourRepo::find_translation(&pool, tour_id, "en")
        .await
        .unwrap()
        .expect("translation should exist");
    assert_eq!(translation.title, "Pyramids Tour");
    assert_eq!(translation.to_form_record(), form("Pyramids Tour"));
    assert!(TourRepo::find_translation(&pool, tour_id, "ar")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_translation_replaces_existing_language(pool: PgPool) {
    let tour_id = create_tour(&pool, None, "Original").await;

    TourRepo::upsert_translation(&pool, tour_id, "en", &form("Renamed"))
        .await
        .unwrap();
    TourRepo::upsert_translation(&pool, tour_id, "ar", &form("Arabic title"))
        .await
        .unwrap();

    let en = TourRepo::find_translation(&pool, tour_id, "en")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(en.title, "Renamed");
    assert_eq!(
        TourRepo::list_languages(&pool, tour_id).await.unwrap(),
        vec!["ar".to_string(), "en".to_string()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_page_filters_and_counts(pool: PgPool) {
    let luxor = CityRepo::create(&pool, &new_city("luxor")).await.unwrap();
    for i in 0..12 {
        create_tour(&pool, Some(luxor.id), &format!("Luxor {i}")).await;
    }
    let hidden = create_tour(&pool, None, "Hidden").await;
    TourRepo::set_active(&pool, hidden, false).await.unwrap();

    let public = TourFilter {
        city_id: None,
        active_only: true,
        translated_only: true,
    };
    assert_eq!(TourRepo::count(&pool, "en", &public).await.unwrap(), 12);
    assert_eq!(
        TourRepo::count(&pool, "en", &TourFilter::default())
            .await
            .unwrap(),
        13
    );
    assert_eq!(TourRepo::count(&pool, "fr", &public).await.unwrap(), 0);

    let page = TourRepo::list_page(&pool, "en", &public, 10, 10)
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|t| t.city_name.as_deref() == Some("LUXOR")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_city_keeps_tours(pool: PgPool) {
    let city = CityRepo::create(&pool, &new_city("aswan")).await.unwrap();
    let tour_id = create_tour(&pool, Some(city.id), "Philae").await;

    assert!(CityRepo::delete(&pool, city.id).await.unwrap());
    let tour = TourRepo::find_by_id(&pool, tour_id).await.unwrap().unwrap();
    assert_eq!(tour.city_id, None);
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_approved_reviews_count_towards_rating(pool: PgPool) {
    let tour_id = create_tour(&pool, None, "Reviewed").await;
    let review = |rating| CreateReview {
        author_name: "Guest".to_string(),
        rating,
        comment: None,
    };

    let a = ReviewRepo::create(&pool, tour_id, "en", &review(5)).await.unwrap();
    let b = ReviewRepo::create(&pool, tour_id, "en", &review(4)).await.unwrap();
    ReviewRepo::create(&pool, tour_id, "en", &review(1)).await.unwrap();
    ReviewRepo::set_approved(&pool, a.id, true).await.unwrap();
    ReviewRepo::set_approved(&pool, b.id, true).await.unwrap();

    let summary = ReviewRepo::rating_summary(&pool, tour_id).await.unwrap();
    assert_eq!(summary.review_count, 2);
    assert_eq!(summary.rating_sum, 9);
    assert_eq!(ReviewRepo::count_pending(&pool).await.unwrap(), 1);
    assert_eq!(
        ReviewRepo::count_for_tour(&pool, tour_id, false).await.unwrap(),
        3
    );
}

// ---------------------------------------------------------------------------
// Wizard sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn wizard_session_completes_once(pool: PgPool) {
    let session = WizardSessionRepo::create(&pool, "en").await.unwrap();
    assert_eq!(session.current_step, 1);
    assert_eq!(session.form_data.0, FormRecord::default());

    WizardSessionRepo::set_form_field(&pool, session.id, FormField::Title, "Nile Dinner Cruise")
        .await
        .unwrap();
    WizardSessionRepo::update_step(&pool, session.id, 5)
        .await
        .unwrap();

    let stored = WizardSessionRepo::find_by_id(&pool, session.id)
        .await
        .unwrap()
        .unwrap();
    let form = stored.wizard().unwrap().complete().unwrap();

    let (completed, tour, translation) =
        WizardSessionRepo::complete(&pool, session.id, &NewTour::default(), "en", &form)
            .await
            .unwrap()
            .expect("first completion succeeds");
    assert_eq!(completed.status, WizardStatus::Completed.as_str());
    assert_eq!(completed.tour_id, Some(tour.id));
    assert_eq!(translation.title, "Nile Dinner Cruise");

    let again = WizardSessionRepo::complete(&pool, session.id, &NewTour::default(), "en", &form)
        .await
        .unwrap();
    assert!(again.is_none());
    assert_eq!(
        TourRepo::count(&pool, "en", &TourFilter::default())
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn field_edits_touch_only_their_key(pool: PgPool) {
    let session = WizardSessionRepo::create(&pool, "en").await.unwrap();

    // Two edits that both started from the same empty form.
    let (title, extras) = tokio::join!(
        WizardSessionRepo::set_form_field(&pool, session.id, FormField::Title, "Luxor Balloon"),
        WizardSessionRepo::set_form_field(&pool, session.id, FormField::NotIncluded, "Tips"),
    );
    title.unwrap().unwrap();
    extras.unwrap().unwrap();

    let stored = WizardSessionRepo::find_by_id(&pool, session.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.form_data.0.title, "Luxor Balloon");
    assert_eq!(stored.form_data.0.not_included, "Tips");
    assert_eq!(stored.form_data.0.category, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn field_edit_skips_closed_session(pool: PgPool) {
    let session = WizardSessionRepo::create(&pool, "en").await.unwrap();
    WizardSessionRepo::update_status(&pool, session.id, WizardStatus::Abandoned.as_str())
        .await
        .unwrap();

    let edited =
        WizardSessionRepo::set_form_field(&pool, session.id, FormField::Title, "Too late")
            .await
            .unwrap();
    assert!(edited.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fresh_wizard_matches_new_session(pool: PgPool) {
    let session = WizardSessionRepo::create(&pool, "de").await.unwrap();
    assert_eq!(session.wizard().unwrap(), TourWizard::new());
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn seed_is_idempotent(pool: PgPool) {
    let first = tourdesk_db::seed::run(&pool).await.unwrap();
    assert_eq!(first.cities, 5);
    assert_eq!(first.currencies, 4);
    assert_eq!(first.tours, 5);

    let second = tourdesk_db::seed::run(&pool).await.unwrap();
    assert_eq!(second, tourdesk_db::seed::SeedSummary::default());
    assert_eq!(CityRepo::count(&pool).await.unwrap(), 5);
}
