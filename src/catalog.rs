//! Typed translation catalog.
//!
//! Each language ships one JSON document under `lang/`, embedded at build time.
//! Every document deserializes into the same [`Translations`] schema, so a
//! missing or misspelled key fails at load instead of rendering blank text.
//! List lengths and identifier values are then checked across languages by
//! [`crate::shape::parity`]. A catalog that loads is complete for every
//! declared language; lookups against it never need a fallback.
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    error::CatalogError,
    lang::{self, Language},
    shape,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Translations {
    pub common: Common,
    pub nav: Nav,
    pub hero: Hero,
    pub page_heroes: PageHeroes,
    pub about: About,
    pub stats: Stats,
    pub services_preview: ServicesPreview,
    pub services_page: ServicesPage,
    pub projects_page: ProjectsPage,
    pub contact_page: ContactPage,
    pub footer: Footer,
    pub not_found: NotFound,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Common {
    pub company_name: String,
    pub company_tagline: String,
    /// The language's own name, shown in the language switch.
    pub language_name: String,
    pub get_quote: String,
    pub view_details: String,
    pub project_image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nav {
    pub home: String,
    pub about: String,
    pub services: String,
    pub projects: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Hero {
    pub tag: String,
    pub title: String,
    pub title_accent: String,
    pub subtitle: String,
    pub view_projects: String,
    pub contact_us: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageHeroes {
    pub about: PageHero,
    pub services: PageHero,
    pub projects: PageHero,
    pub contact: PageHero,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageHero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct About {
    pub header: String,
    pub sub_header: String,
    pub leadership: String,
    pub md_message: String,
    pub company_details: String,
    pub vision: String,
    pub objectives: String,
    pub values: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stats {
    pub capital: String,
    pub projects_completed: String,
    pub machinery_fleet: String,
    pub expert_engineers: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesPreview {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceCard {
    /// Stable key pairing the card with its icon.
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServicesPage {
    pub machinery_title: String,
    pub machinery_subtitle: String,
    pub categories: Vec<ServiceCategory>,
    pub machinery: Vec<Machine>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceCategory {
    /// Stable key pairing the category with its image.
    pub id: String,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Machine {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsPage {
    pub statuses: ProjectStatuses,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectStatuses {
    pub completed: String,
    pub in_progress: String,
}

impl ProjectStatuses {
    pub fn label(&self, status: ProjectStatus) -> &str {
        match status {
            ProjectStatus::Completed => &self.completed,
            ProjectStatus::InProgress => &self.in_progress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub location: String,
    pub client: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status_key: ProjectStatus,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactPage {
    pub get_in_touch: String,
    pub intro: String,
    pub cards: ContactCards,
    pub form: ContactFormText,
}

/// Multi-line values use `\n` as the line separator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactCards {
    pub location_title: String,
    pub phone_title: String,
    pub email_title: String,
    pub hours_title: String,
    pub location: String,
    pub phones: String,
    pub emails: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactFormText {
    pub title: String,
    pub full_name: String,
    pub full_name_ph: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub message_ph: String,
    pub submit: String,
    /// Confirmation shown after submit.
    pub sent: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Footer {
    pub about: String,
    pub quick_links: String,
    pub core_services: String,
    pub contact: String,
    pub links: FooterLinks,
    pub service_bullets: Vec<String>,
    pub privacy: String,
    pub terms: String,
    pub rights: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLinks {
    pub about: String,
    pub services: String,
    pub projects: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotFound {
    pub title: String,
    pub cta: String,
}

/// One language's content, typed and raw.
#[derive(Debug)]
struct Branch {
    typed: Translations,
    raw: Value,
}

/// Read-only content for every [`Language`], validated for parity.
#[derive(Debug)]
pub struct Catalog {
    // indexed by Language::index
    branches: Vec<Branch>,
}

impl Catalog {
    /// Load the catalogs embedded by `build.rs`.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        for code in lang::available_langs() {
            if code.parse::<Language>().is_err() {
                warn!(code = %code, "embedded catalog for undeclared language ignored");
            }
        }
        Self::from_sources(lang::embedded_source)
    }

    /// Build a catalog from raw JSON per language. Every language in
    /// [`Language::ALL`] must be provided and match the default's shape.
    pub fn from_sources<S: AsRef<str>>(source: impl Fn(Language) -> Option<S>) -> Result<Self, CatalogError> {
        let mut branches = Vec::with_capacity(Language::ALL.len());
        for lang in Language::ALL {
            let code = lang.code();
            let text = source(lang).ok_or(CatalogError::MissingLanguage(code))?;
            let raw: Value =
                serde_json::from_str(text.as_ref()).map_err(|source| CatalogError::Parse { lang: code, source })?;
            let typed = Translations::deserialize(&raw)
                .map_err(|source| CatalogError::Parse { lang: code, source })?;
            branches.push(Branch { typed, raw });
        }

        let reference = Language::DEFAULT;
        for lang in Language::ALL.into_iter().filter(|l| *l != reference) {
            let mismatches = shape::parity(&branches[reference.index()].raw, &branches[lang.index()].raw);
            for m in &mismatches {
                error!(lang = lang.code(), path = %m.path, expected = %m.expected, found = %m.found, "catalog shape mismatch");
            }
            if let Some(m) = mismatches.into_iter().next() {
                return Err(CatalogError::ShapeMismatch {
                    lang: lang.code(),
                    reference: reference.code(),
                    path: m.path,
                    expected: m.expected,
                    found: m.found,
                });
            }
        }

        info!(languages = ?Language::ALL.map(Language::code), "catalog loaded");
        Ok(Self { branches })
    }

    /// Typed content for `lang`.
    pub fn get(&self, lang: Language) -> &Translations {
        &self.branches[lang.index()].typed
    }

    /// Raw value at a dotted path, e.g. `servicesPreview.cta` or
    /// `servicesPage.machinery[2].name`. A numeric segment also indexes lists.
    pub fn lookup(&self, lang: Language, path: &str) -> Result<&Value, CatalogError> {
        let miss = || CatalogError::MissingKey { lang: lang.code(), path: path.to_string() };
        let mut cur = &self.branches[lang.index()].raw;
        for segment in path.split('.') {
            let (name, indices) = split_indices(segment).ok_or_else(miss)?;
            if !name.is_empty() {
                cur = match cur {
                    Value::Object(map) => map.get(name),
                    Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
                    _ => None,
                }
                .ok_or_else(miss)?;
            }
            for i in indices {
                cur = cur.as_array().and_then(|items| items.get(i)).ok_or_else(miss)?;
            }
        }
        Ok(cur)
    }

    /// String at a dotted path.
    pub fn text(&self, lang: Language, path: &str) -> Result<&str, CatalogError> {
        self.lookup(lang, path)?
            .as_str()
            .ok_or_else(|| CatalogError::MissingKey { lang: lang.code(), path: path.to_string() })
    }

    /// The language's own display name.
    pub fn lang_display(&self, lang: Language) -> &str {
        &self.get(lang).common.language_name
    }

    pub fn languages(&self) -> &'static [Language] {
        &Language::ALL
    }
}

/// `cards[3][0]` -> (`cards`, [3, 0]). `None` on malformed brackets.
fn split_indices(segment: &str) -> Option<(&str, Vec<usize>)> {
    let (name, mut rest) = match segment.find('[') {
        Some(pos) => (&segment[..pos], &segment[pos..]),
        None => return Some((segment, Vec::new())),
    };
    let mut indices = Vec::new();
    while !rest.is_empty() {
        let close = rest.find(']')?;
        if !rest.starts_with('[') {
            return None;
        }
        indices.push(rest[1..close].parse().ok()?);
        rest = &rest[close + 1..];
    }
    Some((name, indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::load_embedded().expect("embedded catalog is valid")
    }

    fn replace_in(lang: Language, from: &str, to: &str) -> impl Fn(Language) -> Option<String> {
        let (from, to) = (from.to_string(), to.to_string());
        move |l| {
            let raw = lang::embedded_source(l)?.to_string();
            Some(if l == lang { raw.replacen(&from, &to, 1) } else { raw })
        }
    }

    #[test]
    fn embedded_branches_are_in_parity() {
        let c = catalog();
        let en = &c.branches[Language::En.index()].raw;
        let ar = &c.branches[Language::Ar.index()].raw;
        assert!(shape::parity(en, ar).is_empty());
        assert_eq!(shape::Shape::of(en), shape::Shape::of(ar));
    }

    #[test]
    fn list_sections_match_in_length_and_order() {
        let c = catalog();
        let (en, ar) = (c.get(Language::En), c.get(Language::Ar));
        assert_eq!(en.services_preview.cards.len(), 6);
        assert_eq!(ar.services_preview.cards.len(), 6);
        let ids = |t: &Translations| t.services_preview.cards.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(en), ids(ar));
        assert_eq!(en.services_page.categories.len(), ar.services_page.categories.len());
        assert_eq!(en.services_page.machinery.len(), 11);
        let counts = |t: &Translations| t.services_page.machinery.iter().map(|m| m.count).collect::<Vec<_>>();
        assert_eq!(counts(en), counts(ar));
        let statuses = |t: &Translations| t.projects_page.projects.iter().map(|p| p.status_key).collect::<Vec<_>>();
        assert_eq!(statuses(en), statuses(ar));
        assert_eq!(en.footer.service_bullets.len(), ar.footer.service_bullets.len());
    }

    #[test]
    fn dotted_lookup_reads_both_branches() {
        let c = catalog();
        assert_eq!(c.text(Language::En, "servicesPreview.cta").unwrap(), "Explore All Services");
        assert_eq!(c.text(Language::Ar, "servicesPreview.cta").unwrap(), "استعراض الخدمات");
        assert_eq!(c.text(Language::En, "servicesPage.machinery[9].name").unwrap(), "Dump Truck");
        assert_eq!(c.lookup(Language::En, "servicesPage.machinery.9.count").unwrap(), &Value::from(10));
        assert_eq!(c.text(Language::En, "notFound.cta").unwrap(), "Go Home");
    }

    #[test]
    fn lookup_miss_is_an_error() {
        let c = catalog();
        assert!(matches!(
            c.lookup(Language::En, "servicesPreview.missing"),
            Err(CatalogError::MissingKey { lang: "en", .. })
        ));
        assert!(c.lookup(Language::Ar, "servicesPreview.cards[6]").is_err());
        assert!(c.lookup(Language::Ar, "servicesPreview.cards[x]").is_err());
        assert!(c.text(Language::En, "servicesPreview.cards").is_err());
    }

    #[test]
    fn accessor_returns_same_branch_each_time() {
        let c = catalog();
        assert!(std::ptr::eq(c.get(Language::Ar), c.get(Language::Ar)));
        assert_eq!(c.lang_display(Language::Ar), "العربية");
        assert_eq!(c.get(Language::En).projects_page.statuses.label(ProjectStatus::InProgress), "In Progress");
    }

    #[test]
    fn unknown_key_fails_schema() {
        let src = replace_in(Language::Ar, "\"notFound\": {", "\"notFound\": {\n    \"extra\": \"x\",");
        let err = Catalog::from_sources(src).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { lang: "ar", .. }), "{err}");
    }

    #[test]
    fn shortened_list_fails_parity() {
        let src = replace_in(Language::Ar, "\"دق ركائز وأعمال ترابية\"", "");
        let patched = |l: Language| src(l).map(|s| s.replacen("\"هندسة مدنية\",", "\"هندسة مدنية\"", 1));
        let err = Catalog::from_sources(patched).unwrap_err();
        match err {
            CatalogError::ShapeMismatch { lang, path, expected, found, .. } => {
                assert_eq!(lang, "ar");
                assert_eq!(path, "footer.serviceBullets");
                assert_eq!(expected, "list of 5");
                assert_eq!(found, "list of 4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reordered_ids_fail_parity() {
        let src = replace_in(Language::Ar, "\"id\": \"water\"", "\"id\": \"wrong\"");
        let err = Catalog::from_sources(src).unwrap_err();
        assert!(matches!(err, CatalogError::ShapeMismatch { ref path, .. } if path == "servicesPreview.cards[3].id"));
    }

    #[test]
    fn missing_language_is_reported() {
        let err = Catalog::from_sources(|l| if l == Language::Ar { None } else { lang::embedded_source(l) }).unwrap_err();
        assert!(matches!(err, CatalogError::MissingLanguage("ar")));
    }
}
