use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder replaced by the escaped search term in a search url template.
pub const TERM_SLOT: &str = "{}";

/// Monetization model of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Free,
    Paid,
    /// Offers both free and paid courses.
    Mixed,
}

/// One external course site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub name: String,
    /// Search page url with at most one `{}` slot. Without a slot the url is a
    /// fixed catalog page.
    pub search_url_template: String,
    base_url: Url,
    /// Substring that marks course links in hrefs.
    pub link_filter: String,
    pub access_type: AccessType,
}

impl SourceDescriptor {
    pub fn new(
        name: impl Into<String>,
        search_url_template: impl Into<String>,
        base_url: &str,
        link_filter: impl Into<String>,
        access_type: AccessType,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            name: name.into(),
            search_url_template: search_url_template.into(),
            base_url: Url::parse(base_url)?,
            link_filter: link_filter.into(),
            access_type,
        })
    }

    /// Absolute url relative links are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether the search url has a slot for the term.
    pub fn takes_term(&self) -> bool {
        self.search_url_template.contains(TERM_SLOT)
    }

    /// Builds the url to fetch. `formatted_term` must already be url-escaped;
    /// fixed catalog urls are returned unchanged.
    pub fn search_url(&self, formatted_term: &str) -> String {
        self.search_url_template.replacen(TERM_SLOT, formatted_term, 1)
    }
}

fn site(
    name: &str,
    template: &str,
    base_url: &str,
    link_filter: &str,
    access_type: AccessType,
) -> SourceDescriptor {
    SourceDescriptor::new(name, template, base_url, link_filter, access_type)
        .expect("built-in catalog base urls are valid")
}

pub(crate) fn general_sites() -> Vec<SourceDescriptor> {
    use AccessType::*;

    vec![
        site(
            "Udemy",
            "https://www.udemy.com/courses/search/?q={}&sort=relevance",
            "https://www.udemy.com",
            "/course/",
            Mixed,
        ),
        site(
            "Coursera",
            "https://www.coursera.org/search?query={}",
            "https://www.coursera.org",
            "/learn/",
            Mixed,
        ),
        site(
            "edX",
            "https://www.edx.org/search?q={}",
            "https://www.edx.org",
            "/course/",
            Mixed,
        ),
        site(
            "Digital Innovation One",
            "https://www.dio.me/browse?search={}",
            "https://www.dio.me",
            "/curso/",
            Free,
        ),
        site(
            "Fund. Bradesco Escola Virtual",
            "https://www.ev.org.br/catalogo-de-cursos?query={}",
            "https://www.ev.org.br",
            "/curso/",
            Free,
        ),
        site(
            "Udacity",
            "https://www.udacity.com/courses/all?search={}",
            "https://www.udacity.com",
            "/course/",
            Mixed,
        ),
        site(
            "FutureLearn",
            "https://www.futurelearn.com/search?q={}",
            "https://www.futurelearn.com",
            "/courses/",
            Mixed,
        ),
        site(
            "Alison",
            "https://alison.com/courses?query={}&category=it",
            "https://alison.com",
            "/course/",
            Free,
        ),
        site(
            "Khan Academy",
            "https://www.khanacademy.org/search?page_search_query={}",
            "https://www.khanacademy.org",
            "/x/",
            Free,
        ),
        site(
            "freeCodeCamp",
            "https://www.freecodecamp.org/news/search?query={}",
            "https://www.freecodecamp.org/news/",
            "/",
            Free,
        ),
        site(
            "Google Cursos",
            "https://skillshop.exceedlms.com/student/catalog/list?search={}",
            "https://skillshop.exceedlms.com",
            "/student/path/",
            Free,
        ),
        site(
            "Alura",
            "https://www.alura.com.br/busca?query={}",
            "https://www.alura.com.br",
            "/curso/",
            Paid,
        ),
        site(
            "DataCamp",
            "https://www.datacamp.com/search?q={}",
            "https://www.datacamp.com",
            "/courses/",
            Paid,
        ),
        site(
            "Pluralsight",
            "https://www.pluralsight.com/search?q={}",
            "https://www.pluralsight.com",
            "/courses/",
            Paid,
        ),
        site(
            "Class Central",
            "https://www.classcentral.com/search?q={}",
            "https://www.classcentral.com",
            "/course/",
            Mixed,
        ),
    ]
}

pub(crate) fn specialized_sites() -> Vec<SourceDescriptor> {
    use AccessType::*;

    vec![
        site(
            "HackerSec",
            "https://hackersec.com/cursos-gratuitos/",
            "https://hackersec.com",
            "/curso/",
            Free,
        ),
        site(
            "Cybrary",
            "https://www.cybrary.it/catalog/all/",
            "https://www.cybrary.it",
            "/course/",
            Mixed,
        ),
        site(
            "Hack The Box Academy",
            "https://academy.hackthebox.com/catalogue",
            "https://academy.hackthebox.com",
            "/module/",
            Mixed,
        ),
    ]
}
