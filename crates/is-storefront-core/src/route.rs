use std::fmt;

pub const DEFAULT_TITLE: &str = "InStyle | Modern Carpentry & Art";

/// Client-side pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category(String),
    Product(u32),
    Arts,
    Paintings,
    Prints,
    Art(String),
    Favorites,
    Checkout,
    Ratings,
    NotFound(String),
}

impl Route {
    /// Map a URL path (query and fragment ignored) to a route.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["category", id] => Route::Category((*id).to_owned()),
            ["product", id] => match id.parse() {
                Ok(id) => Route::Product(id),
                Err(_) => Route::NotFound(path.to_owned()),
            },
            ["arts"] => Route::Arts,
            ["arts", "oil-paintings"] | ["paintings"] => Route::Paintings,
            ["arts", "prints"] => Route::Prints,
            ["art", code] => Route::Art((*code).to_owned()),
            ["favorites"] => Route::Favorites,
            ["checkout"] => Route::Checkout,
            ["ratings"] => Route::Ratings,
            _ => Route::NotFound(path.to_owned()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Category(id) => format!("/category/{id}"),
            Route::Product(id) => format!("/product/{id}"),
            Route::Arts => "/arts".into(),
            Route::Paintings => "/arts/oil-paintings".into(),
            Route::Prints => "/arts/prints".into(),
            Route::Art(code) => format!("/art/{code}"),
            Route::Favorites => "/favorites".into(),
            Route::Checkout => "/checkout".into(),
            Route::Ratings => "/ratings".into(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Arts => "InStyle | Arts Collection",
            Route::Paintings => "InStyle | Oil Paintings",
            Route::Prints => "InStyle | Framed Prints",
            Route::Art(_) => "InStyle | Artwork Details",
            _ => DEFAULT_TITLE,
        }
    }

    /// Pages rendered with the arts section chrome.
    pub fn is_arts(&self) -> bool {
        matches!(
            self,
            Route::Arts | Route::Paintings | Route::Prints | Route::Art(_) | Route::Ratings
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/category/sofas"), Route::Category("sofas".into()));
        assert_eq!(Route::parse("/product/3001?ref=x"), Route::Product(3001));
        assert_eq!(Route::parse("/paintings"), Route::Paintings);
        assert_eq!(Route::parse("/arts/oil-paintings/"), Route::Paintings);
        assert_eq!(Route::parse("/art/PR7"), Route::Art("PR7".into()));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(matches!(Route::parse("/product/abc"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/nope"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/arts/decorations"), Route::NotFound(_)));
    }

    #[test]
    fn paths_roundtrip() {
        for route in [
            Route::Home,
            Route::Category("tv-units".into()),
            Route::Product(1001),
            Route::Arts,
            Route::Paintings,
            Route::Prints,
            Route::Art("OP3".into()),
            Route::Favorites,
            Route::Checkout,
            Route::Ratings,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn titles() {
        assert_eq!(Route::Arts.title(), "InStyle | Arts Collection");
        assert_eq!(Route::Art("OP1".into()).title(), "InStyle | Artwork Details");
        assert_eq!(Route::Checkout.title(), DEFAULT_TITLE);
    }
}
