//! Page table. Paths match exactly, after trimming a trailing slash.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Projects,
    Contact,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Page::Home,
            "/about" => Page::About,
            "/services" => Page::Services,
            "/projects" => Page::Projects,
            "/contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
            Page::NotFound => "/404",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/services/"), Page::Services);
        assert_eq!(Page::from_path("/contact?ref=footer"), Page::Contact);
        assert_eq!(Page::from_path("/projects#top"), Page::Projects);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Page::from_path("/careers"), Page::NotFound);
        assert_eq!(Page::from_path("/about/team"), Page::NotFound);
        assert_eq!(Page::from_path("about"), Page::NotFound);
    }

    #[test]
    fn path_round_trips_for_real_pages() {
        for p in [Page::Home, Page::About, Page::Services, Page::Projects, Page::Contact] {
            assert_eq!(Page::from_path(p.path()), p);
        }
    }
}
