//! Catalog seed data for development and demo databases.
//!
//! [`run`] inserts a fixed set of cities, currencies, tours (with English
//! content), approved reviews and FAQs inside one transaction. Cities and
//! currencies are upserted by their unique keys; tours, reviews and FAQs are
//! only inserted when the `tours` table is empty, so re-running is safe.

use sqlx::{PgConnection, PgPool};
use tourdesk_core::language::DEFAULT_LANGUAGE;
use tourdesk_core::types::DbId;
use tourdesk_core::wizard::FormRecord;

use crate::models::tour::NewTour;
use crate::repositories::TourRepo;

/// `(slug, name, country)`
const CITIES: &[(&str, &str, &str)] = &[
    ("cairo", "Cairo", "Egypt"),
    ("giza", "Giza", "Egypt"),
    ("luxor", "Luxor", "Egypt"),
    ("aswan", "Aswan", "Egypt"),
    ("hurghada", "Hurghada", "Egypt"),
];

/// `(code, name, exchange_rate, commission_bps)`
const CURRENCIES: &[(&str, &str, f64, i32)] = &[
    ("USD", "US Dollar", 1.0, 0),
    ("EUR", "Euro", 0.92, 250),
    ("GBP", "British Pound", 0.79, 250),
    ("EGP", "Egyptian Pound", 48.5, 500),
];

struct SeedTour {
    city_slug: &'static str,
    price_cents: i64,
    title: &'static str,
    category: &'static str,
    duration: &'static str,
    description: &'static str,
    highlights: &'static str,
    included: &'static str,
    not_included: &'static str,
    take_with: &'static str,
    program: &'static str,
}

const TOURS: &[SeedTour] = &[
    SeedTour {
        city_slug: "giza",
        price_cents: 4_500,
        title: "Pyramids of Giza and the Sphinx",
        category: "Day tour",
        duration: "6 hours",
        description: "Walk the Giza plateau with an Egyptologist guide.",
        highlights: "Great Pyramid, Sphinx, panoramic viewpoint",
        included: "Hotel pickup, guide, entry tickets",
        not_included: "Tips, camel ride",
        take_with: "Sunscreen, water, comfortable shoes",
        program: "08:00 pickup; 09:00 plateau; 12:30 Sphinx; 14:00 return",
    },
    SeedTour {
        city_slug: "cairo",
        price_cents: 3_800,
        title: "Egyptian Museum and Khan el-Khalili",
        category: "City tour",
        duration: "5 hours",
        description: "Treasures of Tutankhamun followed by the old bazaar.",
        highlights: "Golden mask, royal mummies, spice market",
        included: "Guide, museum ticket, transport",
        not_included: "Lunch",
        take_with: "Cash for the bazaar",
        program: "09:00 museum; 12:00 bazaar; 14:00 return",
    },
    SeedTour {
        city_slug: "luxor",
        price_cents: 7_900,
        title: "Valley of the Kings and Karnak",
        category: "Day tour",
        duration: "9 hours",
        description: "West bank tombs and the Karnak temple complex.",
        highlights: "Three royal tombs, Hatshepsut temple, Karnak",
        included: "Guide, tickets, lunch, transport",
        not_included: "Tutankhamun tomb ticket",
        take_with: "Hat, sunscreen",
        program: "06:30 pickup; west bank; lunch; Karnak; 17:00 return",
    },
    SeedTour {
        city_slug: "aswan",
        price_cents: 5_200,
        title: "Philae Temple and Felucca Ride",
        category: "Half-day tour",
        duration: "4 hours",
        description: "Boat to Philae island, then sail the Nile at sunset.",
        highlights: "Temple of Isis, felucca on the Nile",
        included: "Guide, boat, felucca",
        not_included: "Drinks",
        take_with: "Light jacket",
        program: "14:00 pickup; Philae; 17:00 felucca; 19:00 return",
    },
    SeedTour {
        city_slug: "hurghada",
        price_cents: 3_500,
        title: "Giftun Island Snorkeling",
        category: "Sea trip",
        duration: "8 hours",
        description: "Red Sea reefs with two snorkeling stops and a beach break.",
        highlights: "Coral reefs, Giftun beach",
        included: "Boat, snorkel gear, lunch",
        not_included: "National park fee",
        take_with: "Swimwear, towel",
        program: "08:30 marina; reefs; beach; 16:30 return",
    },
];

/// `(tour index, author, rating, comment)`
const REVIEWS: &[(usize, &str, i16, &str)] = &[
    (0, "Amira", 5, "Our guide made the history come alive."),
    (0, "Tom", 4, "Hot but worth it. Go early."),
    (1, "Lucia", 5, "The museum was incredible."),
    (2, "Kenji", 5, "Best day of our trip."),
    (4, "Sara", 4, "Clear water, friendly crew."),
];

/// `(question, answer)` entries shown for every tour.
const FAQS: &[(&str, &str)] = &[
    (
        "Can I cancel my booking?",
        "Free cancellation up to 24 hours before the start time.",
    ),
    (
        "Are entrance tickets included?",
        "Each tour lists exactly what is included on its detail page.",
    ),
    (
        "Do you offer private tours?",
        "Yes, contact us to arrange a private guide.",
    ),
];

/// Row counts inserted by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub cities: u64,
    pub currencies: u64,
    pub tours: u64,
    pub reviews: u64,
    pub faqs: u64,
}

/// Seed the catalog. See the module docs for idempotency rules.
pub async fn run(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for (slug, name, country) in CITIES {
        let result = sqlx::query(
            "INSERT INTO cities (slug, name, country) VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_cities_slug DO NOTHING",
        )
        .bind(slug)
        .bind(name)
        .bind(country)
        .execute(&mut *tx)
        .await?;
        summary.cities += result.rows_affected();
    }

    for (code, name, rate, bps) in CURRENCIES {
        let result = sqlx::query(
            "INSERT INTO currencies (code, name, exchange_rate, commission_bps)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_currencies_code DO NOTHING",
        )
        .bind(code)
        .bind(name)
        .bind(rate)
        .bind(bps)
        .execute(&mut *tx)
        .await?;
        summary.currencies += result.rows_affected();
    }

    let (existing_tours,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tours")
        .fetch_one(&mut *tx)
        .await?;

    if existing_tours == 0 {
        seed_tours(&mut tx, &mut summary).await?;
    } else {
        tracing::info!(existing_tours, "Tours already present, skipping tour seed");
    }

    tx.commit().await?;

    tracing::info!(
        cities = summary.cities,
        currencies = summary.currencies,
        tours = summary.tours,
        reviews = summary.reviews,
        faqs = summary.faqs,
        "Seed complete"
    );

    Ok(summary)
}

async fn seed_tours(conn: &mut PgConnection, summary: &mut SeedSummary) -> Result<(), sqlx::Error> {
    let language = DEFAULT_LANGUAGE.as_code();
    let mut tour_ids: Vec<DbId> = Vec::with_capacity(TOURS.len());

    for seed in TOURS {
        let city_id: Option<DbId> = sqlx::query_scalar("SELECT id FROM cities WHERE slug = $1")
            .bind(seed.city_slug)
            .fetch_optional(&mut *conn)
            .await?;

        let new_tour = NewTour {
            city_id,
            price_cents: Some(seed.price_cents),
        };
        let form = FormRecord {
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            availability: "Daily".to_string(),
            duration: seed.duration.to_string(),
            description: seed.description.to_string(),
            highlights: seed.highlights.to_string(),
            included: seed.included.to_string(),
            not_included: seed.not_included.to_string(),
            take_with: seed.take_with.to_string(),
            program: seed.program.to_string(),
        };
        let (tour, _) = TourRepo::create_from_form(&mut *conn, &new_tour, language, &form).await?;
        tour_ids.push(tour.id);
        summary.tours += 1;
    }

    for (index, author, rating, comment) in REVIEWS {
        let Some(&tour_id) = tour_ids.get(*index) else {
            continue;
        };
        sqlx::query(
            "INSERT INTO reviews (tour_id, author_name, rating, comment, language, is_approved)
             VALUES ($1, $2, $3, $4, $5, TRUE)",
        )
        .bind(tour_id)
        .bind(author)
        .bind(rating)
        .bind(comment)
        .bind(language)
        .execute(&mut *conn)
        .await?;
        summary.reviews += 1;
    }

    for (sort_order, (question, answer)) in (0_i32..).zip(FAQS) {
        sqlx::query(
            "INSERT INTO faqs (tour_id, language, question, answer, sort_order)
             VALUES (NULL, $1, $2, $3, $4)",
        )
        .bind(language)
        .bind(question)
        .bind(answer)
        .bind(sort_order)
        .execute(&mut *conn)
        .await?;
        summary.faqs += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_reviews_point_at_seed_tours() {
        assert!(REVIEWS.iter().all(|(index, ..)| *index < TOURS.len()));
    }

    #[test]
    fn seed_tours_reference_seed_cities() {
        for tour in TOURS {
            assert!(CITIES.iter().any(|(slug, ..)| *slug == tour.city_slug));
        }
    }

    #[test]
    fn seed_tours_have_required_content() {
        for tour in TOURS {
            let form = FormRecord {
                title: tour.title.to_string(),
                category: tour.category.to_string(),
                duration: tour.duration.to_string(),
                description: tour.description.to_string(),
                ..FormRecord::default()
            };
            assert!(tourdesk_core::tour_form::missing_required_fields(&form).is_empty());
        }
    }

    #[test]
    fn seed_currencies_are_valid() {
        for (code, _, rate, bps) in CURRENCIES {
            assert!(tourdesk_core::currency::validate_currency_code(code).is_ok());
            assert!(tourdesk_core::currency::validate_exchange_rate(*rate).is_ok());
            assert!(tourdesk_core::currency::validate_commission_bps(*bps).is_ok());
        }
    }
}
