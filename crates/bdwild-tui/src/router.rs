//! Page routing with a back-history stack.
//!
//! The current page is an explicit [`Route`] value owned by a [`Router`].
//! Navigating pushes the previous route onto the history; [`Router::back`]
//! pops it. Navigating to the route already shown does nothing.

use bdwild_core::{query, Category, Species, SpeciesId};
use std::fmt;
use std::str::FromStr;

const SITE_NAME: &str = "Bangladeshi Animals";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Category(Category),
    Detail(SpeciesId),
    Search,
    Blog,
    About,
}

impl Route {
    /// Top-level pages in nav bar order. `Jump(n)` selects `NAV[n - 1]`.
    pub const NAV: [Route; 4] = [Route::Home, Route::Search, Route::Blog, Route::About];

    /// Nav bar label for top-level pages.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home | Route::Category(_) => "Home",
            Route::Search | Route::Detail(_) => "Browse",
            Route::Blog => "Blog",
            Route::About => "About",
        }
    }

    /// Index into [`Route::NAV`] of the tab to highlight. Category pages sit
    /// under Home, detail pages under Browse.
    pub fn nav_index(self) -> usize {
        match self {
            Route::Home | Route::Category(_) => 0,
            Route::Search | Route::Detail(_) => 1,
            Route::Blog => 2,
            Route::About => 3,
        }
    }

    /// Whether the page has a query bar (free-text search plus filters).
    pub fn is_searchable(self) -> bool {
        matches!(self, Route::Category(_) | Route::Search)
    }

    /// Category restriction applied to every query on this page.
    pub fn scope(self) -> Option<Category> {
        match self {
            Route::Category(c) => Some(c),
            _ => None,
        }
    }

    /// Terminal window title for this page. Unknown detail ids get a
    /// `Not Found` title.
    pub fn title(self, species: &[Species]) -> String {
        match self {
            Route::Home => format!("{SITE_NAME} - Home"),
            Route::Category(c) => format!("{} | {SITE_NAME}", c.plural()),
            Route::Detail(id) => {
                let name = query::find_by_id(species, id).map_or("Not Found", |s| s.name.as_str());
                format!("{name} | {SITE_NAME}")
            }
            Route::Search => format!("Browse All Animals | {SITE_NAME}"),
            Route::Blog => format!("Blog | {SITE_NAME}"),
            Route::About => format!("About | {SITE_NAME}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("home"),
            Route::Category(c) => write!(f, "{}", c.plural().to_lowercase()),
            Route::Detail(id) => write!(f, "animal/{id}"),
            Route::Search => f.write_str("search"),
            Route::Blog => f.write_str("blog"),
            Route::About => f.write_str("about"),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    /// Page names accepted by the `go` command: `home`, `search`/`browse`,
    /// `blog`, `about` or any category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Route::Home),
            "search" | "browse" => Ok(Route::Search),
            "blog" => Ok(Route::Blog),
            "about" => Ok(Route::About),
            _ => s
                .parse::<Category>()
                .map(Route::Category)
                .map_err(|_| format!("unknown page: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self { current: start, history: Vec::new() }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Show `route`. Returns false (and records nothing) when it is already
    /// the current route.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        tracing::debug!(from = %self.current, to = %route, "router: navigate");
        self.history.push(std::mem::replace(&mut self.current, route));
        true
    }

    /// Return to the previous route. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                tracing::debug!(from = %self.current, to = %prev, "router: back");
                self.current = prev;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bdwild_core::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn navigate_and_back() {
        let mut r = Router::default();
        assert!(r.navigate(Route::Category(Category::Bird)));
        assert!(r.navigate(Route::Detail(SpeciesId(4))));
        assert_eq!(r.depth(), 2);

        assert!(r.back());
        assert_eq!(r.current(), Route::Category(Category::Bird));
        assert!(r.back());
        assert_eq!(r.current(), Route::Home);
        assert!(!r.back());
        assert_eq!(r.current(), Route::Home);
    }

    #[test]
    fn navigating_to_current_route_is_a_noop() {
        let mut r = Router::new(Route::Search);
        assert!(!r.navigate(Route::Search));
        assert!(!r.can_go_back());
    }

    #[test]
    fn titles() {
        let catalog = Catalog::embedded().unwrap();
        let species = catalog.species();
        assert_eq!(Route::Home.title(species), "Bangladeshi Animals - Home");
        assert_eq!(
            Route::Category(Category::Mammal).title(species),
            "Mammals | Bangladeshi Animals"
        );
        assert_eq!(
            Route::Detail(SpeciesId(1)).title(species),
            "Royal Bengal Tiger | Bangladeshi Animals"
        );
        assert_eq!(
            Route::Detail(SpeciesId(9999)).title(species),
            "Not Found | Bangladeshi Animals"
        );
        assert_eq!(Route::Search.title(species), "Browse All Animals | Bangladeshi Animals");
    }

    #[test]
    fn parse_page_names() {
        assert_eq!("home".parse::<Route>(), Ok(Route::Home));
        assert_eq!("Browse".parse::<Route>(), Ok(Route::Search));
        assert_eq!("birds".parse::<Route>(), Ok(Route::Category(Category::Bird)));
        assert!("zoo".parse::<Route>().is_err());
    }

    #[test]
    fn nav_indices_match_nav_order() {
        for (i, route) in Route::NAV.iter().enumerate() {
            assert_eq!(route.nav_index(), i);
        }
        assert_eq!(Route::Detail(SpeciesId(1)).nav_index(), 1);
    }
}
