//! Random sample data for demos and tests. The random number generator is
//! always supplied by the caller, so a seeded generator gives reproducible
//! output.

use chrono::{DateTime, Duration, TimeZone as _, Utc};
use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::data::{Book, Newspaper};

const TITLE_ADJECTIVES: [&str; 8] =
    ["Silent", "Lost", "Northern", "Last", "Golden", "Hidden", "Winter", "Distant"];
const TITLE_NOUNS: [&str; 8] =
    ["Harbor", "Garden", "Captains", "Road", "Island", "Letters", "Frontier", "Orchard"];
const AUTHOR_INITIALS: [&str; 8] = ["A.", "B.", "E.", "I.", "L.", "M.", "N.", "V."];
const AUTHOR_SURNAMES: [&str; 8] =
    ["Petrova", "Orlov", "Smith", "Novak", "Garcia", "Larsen", "Kowalski", "Tanaka"];
const NEWSPAPER_TITLES: [&str; 6] = [
    "Morning Post",
    "Evening Herald",
    "Daily Courier",
    "City Gazette",
    "Weekly Tribune",
    "Observer",
];

/// Roughly 25 years.
const DEFAULT_WINDOW_SPAN: Duration = Duration::days(9131);

/// The interval that generated newspapers are dated within, including the
/// start and the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationWindow {
    pub start: DateTime<Utc>,
    /// Length of the window. A negative span is treated as zero, and the window
    /// never extends past the latest representable date-time.
    pub span: Duration,
}

impl Default for PublicationWindow {
    fn default() -> Self {
        PublicationWindow {
            start: Utc
                .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
                .single()
                .expect("2000-01-01T00:00:00 is a valid UTC date-time"),
            span: DEFAULT_WINDOW_SPAN,
        }
    }
}

impl PublicationWindow {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        let headroom = (DateTime::<Utc>::MAX_UTC - self.start).num_seconds();
        let seconds = self.span.num_seconds().clamp(0, headroom.max(0));
        let offset = Duration::seconds(rng.gen_range(0..=seconds));
        self.start.checked_add_signed(offset).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

// An empty pool yields an empty string.
fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Returns exactly `n` books with sample names and authors and no category.
pub fn generate_some_books<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Book> {
    let books: Vec<Book> = (0..n)
        .map(|_| {
            let name = format!("{} {}", pick(rng, &TITLE_ADJECTIVES), pick(rng, &TITLE_NOUNS));
            let author = format!("{} {}", pick(rng, &AUTHOR_INITIALS), pick(rng, &AUTHOR_SURNAMES));
            Book::new(name, author)
        })
        .collect();
    debug!("event=generate module=generate kind=book count={}", books.len());
    books
}

/// Returns exactly `n` newspapers dated within the default publication
/// window. The newspapers are in no particular order.
pub fn generate_some_newspapers<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Newspaper> {
    generate_some_newspapers_within(rng, n, &PublicationWindow::default())
}

/// Same as `generate_some_newspapers`, but with dates drawn from `window`.
pub fn generate_some_newspapers_within<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    window: &PublicationWindow,
) -> Vec<Newspaper> {
    let newspapers: Vec<Newspaper> = (0..n)
        .map(|_| {
            let issue = rng.gen_range(1..=999u32);
            let name = format!("{} No. {issue}", pick(rng, &NEWSPAPER_TITLES));
            Newspaper::new(name, window.sample(rng))
        })
        .collect();
    debug!("event=generate module=generate kind=newspaper count={}", newspapers.len());
    newspapers
}

#[cfg(test)]
mod test {
    use chrono::TimeZone as _;
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x11b)
    }

    #[test]
    fn book_count_is_exact() {
        let mut rng = rng();
        for n in [0, 1, 5, 64] {
            assert_eq!(generate_some_books(&mut rng, n).len(), n);
        }
    }

    #[test]
    fn newspaper_count_is_exact() {
        let mut rng = rng();
        for n in [0, 1, 3, 64] {
            assert_eq!(generate_some_newspapers(&mut rng, n).len(), n);
        }
    }

    #[test]
    fn generated_books_have_no_category() {
        let books = generate_some_books(&mut rng(), 10);
        assert!(books.iter().all(|book| book.category().is_none()));
        assert!(books.iter().all(|book| !book.name().is_empty()));
        assert!(books.iter().all(|book| !book.author().is_empty()));
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(generate_some_books(&mut rng(), 8), generate_some_books(&mut rng(), 8));
        assert_eq!(
            generate_some_newspapers(&mut rng(), 8),
            generate_some_newspapers(&mut rng(), 8)
        );
    }

    #[test]
    fn default_window() {
        let window = PublicationWindow::default();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(window.span, Duration::days(9131));
    }

    #[test]
    fn dates_are_within_window() {
        let window = PublicationWindow {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            span: Duration::days(7),
        };
        for newspaper in generate_some_newspapers_within(&mut rng(), 50, &window) {
            assert!(newspaper.date() >= window.start);
            assert!(newspaper.date() <= window.start + window.span);
        }
    }

    #[test]
    fn negative_span_collapses_to_start() {
        let window = PublicationWindow {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            span: Duration::days(-3),
        };
        for newspaper in generate_some_newspapers_within(&mut rng(), 5, &window) {
            assert_eq!(newspaper.date(), window.start);
        }
    }

    #[test]
    fn window_at_end_of_time_does_not_overflow() {
        let window = PublicationWindow { start: DateTime::<Utc>::MAX_UTC, span: Duration::days(1) };
        let newspapers = generate_some_newspapers_within(&mut StdRng::seed_from_u64(1), 3, &window);

        assert_eq!(newspapers.len(), 3);
        assert!(newspapers.iter().all(|newspaper| newspaper.date() == DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn window_is_clamped_to_latest_date() {
        let start = DateTime::<Utc>::MAX_UTC - Duration::days(2);
        let window = PublicationWindow { start, span: Duration::days(365) };
        let newspapers = generate_some_newspapers_within(&mut rng(), 20, &window);

        assert_eq!(newspapers.len(), 20);
        for newspaper in newspapers {
            assert!(newspaper.date() >= start);
            assert!(newspaper.date() <= DateTime::<Utc>::MAX_UTC);
        }
    }

    #[test]
    fn pick_draws_from_pool() {
        let mut rng = rng();
        for _ in 0..20 {
            assert!(NEWSPAPER_TITLES.contains(&pick(&mut rng, &NEWSPAPER_TITLES)));
        }
        assert_eq!(pick(&mut rng, &[]), "");
    }
}
