//! Synthetic user generation.

use fake::Fake;
use fake::faker::internet::raw::FreeEmailProvider;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::{EN, JA_JP};
use rand::Rng;
use time::OffsetDateTime;

/// bcrypt hash shared by every generated user.
pub const DEFAULT_PASSWORD_HASH: &str =
    "$2a$10$NdXZuedsz.QT01XWCJtmwe5RGM5ZE5q9xCsAV8J61SzYaZt4A72Xa";

/// Generated user data ready for database insertion.
///
/// There is no ID field; `users.id` is assigned by the database.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub surname: String,
    pub avatar: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Locale used for a user's name data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLocale {
    English,
    Japanese,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Locales a user's name is drawn from, picked uniformly per user.
    pub locales: Vec<NameLocale>,
    /// Inclusive range of the numeric username suffix.
    pub suffix_range: (u32, u32),
    /// Placeholder image services; `{w}` and `{h}` are replaced.
    pub avatar_templates: Vec<&'static str>,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            locales: vec![NameLocale::English, NameLocale::Japanese],
            suffix_range: (1, 1000),
            avatar_templates: vec![
                "https://picsum.photos/{w}/{h}",
                "https://dummyimage.com/{w}x{h}",
            ],
        }
    }
}

/// Generates synthetic users for seeding.
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single user stamped with the current time.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedUser {
        self.generate_at(rng, OffsetDateTime::now_utc())
    }

    /// Generates a single user stamped with `now`.
    pub fn generate_at(&self, rng: &mut impl Rng, now: OffsetDateTime) -> GeneratedUser {
        let (first_name, surname) = self.generate_name(rng);
        let username = self.generate_username(&first_name, &surname, rng);
        let domain: String = FreeEmailProvider(EN).fake_with_rng(rng);
        let email = format!("{username}@{domain}");
        let avatar = self.generate_avatar(rng);

        GeneratedUser {
            username,
            email,
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            first_name,
            surname,
            avatar,
            created_at: now,
            updated_at: now,
        }
    }

    /// Generates `count` users. Usernames are not checked for uniqueness.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedUser> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    fn generate_name(&self, rng: &mut impl Rng) -> (String, String) {
        let locale = if self.config.locales.is_empty() {
            NameLocale::English
        } else {
            self.config.locales[rng.gen_range(0..self.config.locales.len())]
        };

        match locale {
            NameLocale::English => (
                FirstName(EN).fake_with_rng(rng),
                LastName(EN).fake_with_rng(rng),
            ),
            NameLocale::Japanese => (
                FirstName(JA_JP).fake_with_rng(rng),
                LastName(JA_JP).fake_with_rng(rng),
            ),
        }
    }

    /// `first.surname{n}`, lowercased, `n` drawn from the suffix range.
    fn generate_username(&self, first_name: &str, surname: &str, rng: &mut impl Rng) -> String {
        let (low, high) = self.config.suffix_range;
        let suffix = rng.gen_range(low..=high.max(low));
        format!(
            "{}.{}{}",
            first_name.to_lowercase(),
            surname.to_lowercase(),
            suffix
        )
    }

    fn generate_avatar(&self, rng: &mut impl Rng) -> String {
        let template = if self.config.avatar_templates.is_empty() {
            "https://picsum.photos/{w}/{h}"
        } else {
            self.config.avatar_templates[rng.gen_range(0..self.config.avatar_templates.len())]
        };
        let width: u32 = rng.gen_range(1..=1024);
        let height: u32 = rng.gen_range(1..=1024);

        template
            .replace("{w}", &width.to_string())
            .replace("{h}", &height.to_string())
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}
